//! Logging infrastructure: structured schema logging.
//!
//! Provides [`JsonlSchemaSink`], a JSONL file writer that implements
//! the [`SchemaSink`](cmdlayer_application::SchemaSink) port.

mod jsonl_schema_sink;

pub use jsonl_schema_sink::JsonlSchemaSink;
