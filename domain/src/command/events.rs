//! Syntax collection events sent to command providers (plugins).

use serde::{Deserialize, Serialize};

/// Kind of syntax collection broadcast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SyntaxEventKind {
    /// Commands offered when command execution is enabled
    #[serde(rename = "cmd")]
    Command,
    /// Commands offered by plugins that also work without command execution
    #[serde(rename = "cmd.inline")]
    Inline,
}

impl SyntaxEventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SyntaxEventKind::Command => "cmd",
            SyntaxEventKind::Inline => "cmd.inline",
        }
    }
}

impl std::fmt::Display for SyntaxEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Payload of a syntax collection broadcast.
///
/// Providers answer with the command descriptors they currently offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxEvent {
    pub kind: SyntaxEventKind,
    /// Prompt the commands will be attached to (may be empty)
    #[serde(default)]
    pub prompt: String,
    /// Suppress user-visible side effects while collecting
    #[serde(default)]
    pub silent: bool,
    /// Collect even if the provider would normally skip this request
    #[serde(default)]
    pub force: bool,
}

impl SyntaxEvent {
    pub fn new(kind: SyntaxEventKind) -> Self {
        Self {
            kind,
            prompt: String::new(),
            silent: false,
            force: false,
        }
    }

    /// A forced, silent probe used to list every reachable command.
    pub fn probe(kind: SyntaxEventKind) -> Self {
        Self::new(kind).with_force(true).with_silent(true)
    }

    pub fn with_silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_wire_names() {
        assert_eq!(
            serde_json::to_string(&SyntaxEventKind::Inline).unwrap(),
            "\"cmd.inline\""
        );
        assert_eq!(SyntaxEventKind::Command.to_string(), "cmd");
    }

    #[test]
    fn test_probe_is_forced_and_silent() {
        let event = SyntaxEvent::probe(SyntaxEventKind::Command);
        assert!(event.force);
        assert!(event.silent);
        assert!(event.prompt.is_empty());
    }
}
