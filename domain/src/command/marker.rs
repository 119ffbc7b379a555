//! Marker codec: commands embedded in free model text.
//!
//! Models that do not use native tool calling emit commands inline as
//! `<tool>{"cmd":"name","params":{...}}</tool>`. Historical data may also use
//! the older `~###~{json}~###~` delimiters, which are decoded but never
//! produced.
//!
//! Every operation here is best-effort: a block that fails to decode (for
//! example one truncated by streaming) is dropped, never raised.

use crate::command::entities::{CommandInvocation, Params};
use crate::core::error::MarkerError;
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;

/// Opening delimiter of a marker block.
pub const TOOL_OPEN: &str = "<tool>";
/// Closing delimiter of a marker block.
pub const TOOL_CLOSE: &str = "</tool>";
/// Delimiter of the legacy marker syntax (used on both sides).
pub const LEGACY_DELIMITER: &str = "~###~";

static TOOL_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<tool>(.*?)</tool>").expect("tool block pattern is valid")
});

static LEGACY_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)~###~(.*?)~###~").expect("legacy block pattern is valid")
});

/// Which delimiter convention a block was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerSyntax {
    /// `<tool>...</tool>`
    Tool,
    /// `~###~...~###~`
    Legacy,
}

impl MarkerSyntax {
    fn pattern(&self) -> &'static Regex {
        match self {
            MarkerSyntax::Tool => &*TOOL_BLOCK,
            MarkerSyntax::Legacy => &*LEGACY_BLOCK,
        }
    }
}

/// Returns `true` if `text` contains at least one `<tool>...</tool>` block.
///
/// `None` is treated as text without markers.
pub fn has_markers(text: Option<&str>) -> bool {
    text.is_some_and(|t| TOOL_BLOCK.is_match(t))
}

/// Extract every decodable `<tool>` block, in order of appearance.
pub fn extract_all(text: &str) -> Vec<CommandInvocation> {
    extract_with(text, MarkerSyntax::Tool)
}

/// Extract every decodable legacy `~###~` block, in order of appearance.
pub fn extract_legacy(text: &str) -> Vec<CommandInvocation> {
    extract_with(text, MarkerSyntax::Legacy)
}

/// Extract blocks of both syntaxes, merged by position in `text`.
pub fn extract_any(text: &str) -> Vec<CommandInvocation> {
    let mut found: Vec<(usize, CommandInvocation)> = [MarkerSyntax::Tool, MarkerSyntax::Legacy]
        .iter()
        .flat_map(|syntax| {
            syntax.pattern().captures_iter(text).filter_map(|caps| {
                let inner = caps.get(1)?;
                decode_one(inner.as_str()).map(|inv| (inner.start(), inv))
            })
        })
        .collect();
    found.sort_by_key(|(start, _)| *start);
    found.into_iter().map(|(_, inv)| inv).collect()
}

/// Extract blocks written in the given syntax.
pub fn extract_with(text: &str, syntax: MarkerSyntax) -> Vec<CommandInvocation> {
    syntax
        .pattern()
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).and_then(|m| decode_one(m.as_str())))
        .collect()
}

/// Decode the inner text of one marker block.
///
/// Returns `None` when the chunk is not a JSON object or has no recognizable
/// command name.
pub fn decode_one(chunk: &str) -> Option<CommandInvocation> {
    try_decode_one(chunk).ok()
}

/// Like [`decode_one`], but reports why a chunk was rejected.
///
/// Besides the canonical `{"cmd": ..., "params": {...}}` shape, two legacy
/// single-key shapes are accepted: `{"name": {"params": {...}}}` and
/// `{"name": {...params...}}`.
pub fn try_decode_one(chunk: &str) -> Result<CommandInvocation, MarkerError> {
    let trimmed = chunk.trim();
    if !(trimmed.starts_with('{') && trimmed.ends_with('}')) {
        return Err(MarkerError::NotAnObject);
    }

    let value: Value =
        serde_json::from_str(trimmed).map_err(|e| MarkerError::InvalidJson(e.to_string()))?;
    let Value::Object(mut object) = value else {
        return Err(MarkerError::NotAnObject);
    };

    if let Some(cmd) = object.remove("cmd") {
        let Value::String(cmd) = cmd else {
            return Err(MarkerError::MissingCommand);
        };
        let params = match object.remove("params") {
            None | Some(Value::Null) => Params::new(),
            Some(Value::Object(params)) => params,
            Some(_) => return Err(MarkerError::ParamsNotObject(cmd)),
        };
        let mut invocation = CommandInvocation::new(cmd).with_params(params);
        if let Some(Value::String(id)) = object.remove("id") {
            invocation = invocation.with_id(id);
        }
        return Ok(invocation);
    }

    if object.len() != 1 {
        return Err(MarkerError::MissingCommand);
    }
    let (cmd, body) = object
        .into_iter()
        .next()
        .ok_or(MarkerError::MissingCommand)?;
    let Value::Object(mut body) = body else {
        return Err(MarkerError::ParamsNotObject(cmd));
    };

    let params = match body.remove("params") {
        Some(Value::Object(params)) => params,
        Some(other) => {
            // "params" was an ordinary argument, not a wrapper
            body.insert("params".to_string(), other);
            body
        }
        None => body,
    };
    Ok(CommandInvocation::new(cmd).with_params(params))
}

/// Serialize one invocation as a compact `<tool>` block.
pub fn encode_one(invocation: &CommandInvocation) -> String {
    let mut object = Map::new();
    object.insert("cmd".to_string(), Value::String(invocation.cmd.clone()));
    object.insert("params".to_string(), Value::Object(invocation.params.clone()));
    if let Some(id) = &invocation.id {
        object.insert("id".to_string(), Value::String(id.clone()));
    }
    format!("{}{}{}", TOOL_OPEN, Value::Object(object), TOOL_CLOSE)
}

/// Serialize invocations as concatenated `<tool>` blocks, no separator.
pub fn encode_all<'a>(invocations: impl IntoIterator<Item = &'a CommandInvocation>) -> String {
    invocations.into_iter().map(encode_one).collect()
}
