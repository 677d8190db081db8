//! Byte-offset spans into script source.

use std::{fmt, ops::Range};

/// A half-open byte range `start..end` into the script source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Create a span from a byte range. A reversed range is normalized.
    pub fn new(range: Range<usize>) -> Self {
        Self {
            start: range.start.min(range.end),
            end: range.start.max(range.end),
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Smallest span covering both `self` and `other`.
    pub fn union(&self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Empty span at the end of `self`.
    pub fn end_point(&self) -> Span {
        Span {
            start: self.end,
            end: self.end,
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A value together with the source range it was parsed from.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    value: T,
    span: Span,
}

impl<T> Spanned<T> {
    pub fn new(value: T, span: Span) -> Self {
        Self { value, span }
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn inner(&self) -> &T {
        &self.value
    }

    pub fn into_inner(self) -> T {
        self.value
    }

    /// Transforms the value, keeping the span.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Spanned<U> {
        Spanned {
            value: f(self.value),
            span: self.span,
        }
    }
}

impl<T: Copy> Spanned<T> {
    /// Copy of the inner value.
    pub fn get(&self) -> T {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_union() {
        let a = Span::new(4..9);
        let b = Span::new(12..20);
        assert_eq!(a.union(b), Span::new(4..20));
        assert_eq!(b.union(a), Span::new(4..20));
    }

    #[test]
    fn test_span_reversed_range_is_normalized() {
        let span = Span::new(10..3);
        assert_eq!(span.start(), 3);
        assert_eq!(span.len(), 7);
    }

    #[test]
    fn test_end_point_is_empty() {
        let span = Span::new(5..8).end_point();
        assert!(span.is_empty());
        assert_eq!(span.start(), 8);
    }

    #[test]
    fn test_spanned_map_keeps_span() {
        let spanned = Spanned::new("42", Span::new(0..2));
        let mapped = spanned.map(|s| s.len());
        assert_eq!(mapped.get(), 2);
        assert_eq!(mapped.span(), Span::new(0..2));
    }
}
