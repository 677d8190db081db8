//! Labeled source spans attached to diagnostics.

use crate::span::Span;

/// A message pointing at a span of the script.
///
/// The primary label marks where the problem is; secondary labels add context.
#[derive(Debug, Clone)]
pub struct Label {
    span: Span,
    message: String,
    is_primary: bool,
}

impl Label {
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: true,
        }
    }

    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: false,
        }
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_primary(&self) -> bool {
        self.is_primary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_and_secondary_labels() {
        let primary = Label::primary(Span::new(6..12), "unknown region");
        let secondary = Label::secondary(Span::new(0..5), "in this command");

        assert!(primary.is_primary());
        assert_eq!(primary.span(), Span::new(6..12));
        assert_eq!(primary.message(), "unknown region");
        assert!(!secondary.is_primary());
    }
}
