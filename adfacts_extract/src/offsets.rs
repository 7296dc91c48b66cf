//! Byte to character offset mapping.

use std::ops::Range;

use adfacts_core::Span;

/// Converts regex byte offsets into character offsets for one text.
pub struct CharIndex {
    /// Byte offset of every char, `None` when the text is ASCII.
    starts: Option<Vec<usize>>,
}

impl CharIndex {
    pub fn new(text: &str) -> Self {
        let starts = if text.is_ascii() {
            None
        } else {
            Some(text.char_indices().map(|(offset, _)| offset).collect())
        };
        Self { starts }
    }

    /// Char offset of a byte offset lying on a char boundary.
    pub fn char_offset(&self, byte: usize) -> usize {
        self.starts
            .as_ref()
            .map_or(byte, |starts| starts.partition_point(|&start| start < byte))
    }

    pub fn span(&self, bytes: Range<usize>) -> Span {
        Span::new(self.char_offset(bytes.start), self.char_offset(bytes.end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_is_identity() {
        let index = CharIndex::new("cena 1500");
        assert_eq!(index.char_offset(5), 5);
        assert_eq!(index.span(5..9), Span::new(5, 9));
    }

    #[test]
    fn test_multibyte_offsets() {
        // "ó" and "ż" take two bytes each.
        let text = "pokój żółty";
        let index = CharIndex::new(text);

        assert_eq!(index.char_offset(0), 0);
        assert_eq!(index.char_offset(text.find('j').unwrap_or_default()), 4);
        assert_eq!(index.char_offset(text.len()), text.chars().count());
        assert_eq!(index.span(0..6), Span::new(0, 5));
    }

    #[test]
    fn test_empty_text() {
        let index = CharIndex::new("");
        assert_eq!(index.char_offset(0), 0);
    }
}
