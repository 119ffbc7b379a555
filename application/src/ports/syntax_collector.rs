//! Syntax collection port.
//!
//! Plugins contribute command descriptors in answer to a
//! [`SyntaxEvent`]. The resolver only needs the resulting list, so the
//! broadcast is modelled as a single call returning descriptors.

use cmdlayer_domain::{CommandDescriptor, SyntaxEvent};

/// Port for collecting command descriptors from command providers.
pub trait SyntaxCollector: Send + Sync {
    /// Ask every provider for the commands it offers for `event`.
    fn collect_syntax(&self, event: &SyntaxEvent) -> Vec<CommandDescriptor>;
}

impl<F> SyntaxCollector for F
where
    F: Fn(&SyntaxEvent) -> Vec<CommandDescriptor> + Send + Sync,
{
    fn collect_syntax(&self, event: &SyntaxEvent) -> Vec<CommandDescriptor> {
        self(event)
    }
}

/// Collector with no providers.
pub struct NoSyntax;

impl SyntaxCollector for NoSyntax {
    fn collect_syntax(&self, _event: &SyntaxEvent) -> Vec<CommandDescriptor> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmdlayer_domain::SyntaxEventKind;

    #[test]
    fn test_closure_collector() {
        let collector = |event: &SyntaxEvent| match event.kind {
            SyntaxEventKind::Command => vec![CommandDescriptor::new("ls", "List")],
            SyntaxEventKind::Inline => Vec::new(),
        };
        let event = SyntaxEvent::new(SyntaxEventKind::Command);
        assert_eq!(collector.collect_syntax(&event).len(), 1);
        assert!(NoSyntax.collect_syntax(&event).is_empty());
    }
}
