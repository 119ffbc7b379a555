//! Port for inspecting built command schemas.
//!
//! Every syntax block build is offered to a [`SchemaSink`] together with the
//! descriptors it came from, for debugging prompts. Nothing reads the sink
//! back on the request path.

use cmdlayer_domain::CommandDescriptor;
use serde_json::Value;
use std::sync::Mutex;

/// Input and output of one syntax block build.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaSnapshot {
    /// Descriptors as collected from providers
    pub descriptors: Vec<CommandDescriptor>,
    /// Structure the syntax block was serialized from
    pub structure: Value,
}

/// Port for recording schema snapshots.
///
/// `record` is synchronous and non-fallible; implementations swallow their
/// own failures.
pub trait SchemaSink: Send + Sync {
    fn record(&self, snapshot: &SchemaSnapshot);
}

/// No-op implementation for tests and when inspection is disabled.
pub struct NoSchemaSink;

impl SchemaSink for NoSchemaSink {
    fn record(&self, _snapshot: &SchemaSnapshot) {}
}

/// Keeps the most recent snapshot in memory.
#[derive(Default)]
pub struct LastSchemaSink {
    last: Mutex<Option<SchemaSnapshot>>,
}

impl LastSchemaSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent snapshot, if any build happened.
    pub fn last(&self) -> Option<SchemaSnapshot> {
        self.last
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

impl SchemaSink for LastSchemaSink {
    fn record(&self, snapshot: &SchemaSnapshot) {
        let mut guard = self.last.lock().unwrap_or_else(|p| p.into_inner());
        *guard = Some(snapshot.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_last_schema_sink_keeps_latest() {
        let sink = LastSchemaSink::new();
        assert!(sink.last().is_none());

        for name in ["first", "second"] {
            sink.record(&SchemaSnapshot {
                descriptors: vec![CommandDescriptor::new(name, "help")],
                structure: json!({name: {"help": "help"}}),
            });
        }

        let last = sink.last().unwrap();
        assert_eq!(last.descriptors[0].cmd, "second");
        assert_eq!(last.structure, json!({"second": {"help": "help"}}));
    }
}
