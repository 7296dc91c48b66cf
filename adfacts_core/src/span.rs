//! Character ranges into annotated text.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Half-open `[start, end)` range of character offsets into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start must not exceed its end");
        Self { start, end }
    }

    /// Number of characters covered.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether two spans collide.
    ///
    /// The test treats both spans as closed ranges, so spans sharing a single
    /// boundary offset (`[0, 3)` and `[3, 5)`) still overlap. One span's start
    /// or end falling inside the other's closed range is the same as the closed
    /// ranges intersecting.
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        let lo = if self.start > other.start {
            self.start
        } else {
            other.start
        };
        let hi = if self.end < other.end {
            self.end
        } else {
            other.end
        };
        lo <= hi
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const fn within(value: usize, span: Span) -> bool {
        value >= span.start && value <= span.end
    }

    // Endpoint containment in either direction.
    const fn endpoint_overlap(a: Span, b: Span) -> bool {
        within(a.start, b) || within(a.end, b) || within(b.start, a) || within(b.end, a)
    }

    fn span() -> impl Strategy<Value = Span> {
        (0usize..64, 0usize..16).prop_map(|(start, len)| Span::new(start, start + len))
    }

    #[test]
    fn test_len_and_empty() {
        let span = Span::new(4, 9);
        assert_eq!(span.len(), 5);
        assert!(!span.is_empty());
        assert!(Span::new(3, 3).is_empty());
    }

    #[test]
    fn test_touching_spans_overlap() {
        assert!(Span::new(0, 3).overlaps(&Span::new(3, 5)));
        assert!(Span::new(3, 5).overlaps(&Span::new(0, 3)));
    }

    #[test]
    fn test_adjacent_empty_spans() {
        assert!(Span::new(2, 2).overlaps(&Span::new(2, 2)));
        assert!(!Span::new(2, 2).overlaps(&Span::new(3, 3)));
        assert!(Span::new(2, 3).overlaps(&Span::new(3, 4)));
    }

    #[test]
    fn test_disjoint_spans() {
        assert!(!Span::new(0, 3).overlaps(&Span::new(4, 8)));
        assert!(!Span::new(4, 8).overlaps(&Span::new(0, 3)));
    }

    #[test]
    fn test_containment_overlaps() {
        assert!(Span::new(0, 10).overlaps(&Span::new(3, 4)));
        assert!(Span::new(3, 4).overlaps(&Span::new(0, 10)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Span::new(1, 7).to_string(), "[1, 7)");
    }

    proptest! {
        #[test]
        fn overlap_matches_endpoint_definition(a in span(), b in span()) {
            prop_assert_eq!(a.overlaps(&b), endpoint_overlap(a, b));
        }

        #[test]
        fn overlap_is_symmetric(a in span(), b in span()) {
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }
    }
}
