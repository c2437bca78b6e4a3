//! Source-text spans for recognised tokens.

use std::ops::Range;

/// Half-open `[start, end)` byte range into the scanned text.
///
/// `&text[span.range()]` is the token the span was built from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
}

impl MatchSpan {
    pub fn new(start: usize, end: usize) -> MatchSpan {
        debug_assert!(start <= end, "span start after end");
        MatchSpan { start, end }
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The same span counted in characters instead of bytes.
    ///
    /// `text` must be the text the span was produced from.
    pub fn char_range(&self, text: &str) -> Range<usize> {
        let start = text[..self.start].chars().count();
        let len = text[self.range()].chars().count();
        start..start + len
    }
}

impl std::fmt::Display for MatchSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_slices_token() {
        let text = "via 10.0.0.1 now";
        let span = MatchSpan::new(4, 12);
        assert_eq!(&text[span.range()], "10.0.0.1");
        assert_eq!(span.len(), 8);
        assert!(!span.is_empty());
        assert_eq!(span.to_string(), "[4, 12)");
    }

    #[test]
    fn test_char_range_after_multibyte() {
        // "é" is two bytes, one char
        let text = "é 10.0.0.1";
        let span = MatchSpan::new(3, 11);
        assert_eq!(&text[span.range()], "10.0.0.1");
        assert_eq!(span.char_range(text), 2..10);
    }
}
