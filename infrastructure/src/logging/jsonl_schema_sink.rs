//! JSONL file writer for schema snapshots.
//!
//! Each [`SchemaSnapshot`] is serialized as a single JSON line with a
//! `type` field and `timestamp`, appended to the file via a buffered writer.

use cmdlayer_application::ports::schema_sink::{SchemaSink, SchemaSnapshot};
use serde_json::json;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// Record type written for every syntax block build
pub const SYNTAX_BLOCK_EVENT: &str = "syntax_block";

/// JSONL schema sink that writes one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes on `Drop`.
pub struct JsonlSchemaSink {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlSchemaSink {
    /// Create a sink appending to the given path.
    ///
    /// Creates the file (and parent directories) if they don't exist.
    /// Returns `None` if the file cannot be opened.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create schema log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open schema log file {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SchemaSink for JsonlSchemaSink {
    fn record(&self, snapshot: &SchemaSnapshot) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
        let record = json!({
            "type": SYNTAX_BLOCK_EVENT,
            "timestamp": timestamp,
            "descriptors": snapshot.descriptors,
            "structure": snapshot.structure,
        });

        let Ok(line) = serde_json::to_string(&record) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            if let Err(e) = writeln!(writer, "{}", line) {
                warn!("Could not write schema log {}: {}", self.path.display(), e);
                return;
            }
            let _ = writer.flush();
        }
    }
}

impl Drop for JsonlSchemaSink {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}
