//! Segment tokenizer
//!
//! Splits a resource path on `/` and pairs consecutive tokens as
//! `(key, value)`, e.g. `/subscriptions/abc/resourceGroups/rg` becomes
//! `[("subscriptions", "abc"), ("resourceGroups", "rg")]`.
//!
//! Pairs are consumed front to back by the resolver; whatever is left
//! afterwards is reported so callers can reject trailing segments.

use crate::error::{IdError, IdResult};

/// A single key/value pair of path segments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentPair<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

/// Tokenized path with a cursor over the pairs consumed so far
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    pairs: Vec<SegmentPair<'a>>,
    position: usize,
}

impl<'a> Segments<'a> {
    /// Tokenize a path. One leading and one trailing slash are ignored.
    pub fn tokenize(input: &'a str) -> IdResult<Self> {
        let path = input.strip_prefix('/').unwrap_or(input);
        let path = path.strip_suffix('/').unwrap_or(path);
        if path.trim().is_empty() {
            return Err(IdError::Empty);
        }

        let tokens: Vec<&str> = path.split('/').collect();
        if tokens.iter().any(|t| t.is_empty()) {
            return Err(IdError::EmptySegment {
                input: input.to_string(),
            });
        }
        if tokens.len() % 2 != 0 {
            return Err(IdError::malformed(
                input,
                format!(
                    "the number of path segments ({}) is not divisible by 2",
                    tokens.len()
                ),
            ));
        }

        let pairs: Vec<SegmentPair<'a>> = tokens
            .chunks_exact(2)
            .map(|pair| SegmentPair {
                key: pair[0],
                value: pair[1],
            })
            .collect();
        Ok(Self { pairs, position: 0 })
    }

    /// All pairs in path order, consumed or not
    pub fn pairs(&self) -> &[SegmentPair<'a>] {
        &self.pairs
    }

    /// The next unconsumed pair
    pub fn peek(&self) -> Option<SegmentPair<'a>> {
        self.pairs.get(self.position).copied()
    }

    /// Unconsumed pairs in path order
    pub fn remaining(&self) -> &[SegmentPair<'a>] {
        &self.pairs[self.position..]
    }

    /// Consume the next pair
    pub(crate) fn advance(&mut self) -> Option<SegmentPair<'a>> {
        let pair = self.peek()?;
        self.position += 1;
        Some(pair)
    }

    /// True once every pair has been consumed
    pub fn is_fully_consumed(&self) -> bool {
        self.position == self.pairs.len()
    }

    /// Leftover segments rendered back into path tokens
    pub fn leftover(&self) -> Vec<String> {
        self.remaining()
            .iter()
            .flat_map(|p| [p.key.to_string(), p.value.to_string()])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_consecutive_tokens() {
        let segments =
            Segments::tokenize("/subscriptions/abc/resourceGroups/rg").unwrap();
        assert_eq!(
            segments.pairs(),
            &[
                SegmentPair {
                    key: "subscriptions",
                    value: "abc"
                },
                SegmentPair {
                    key: "resourceGroups",
                    value: "rg"
                },
            ]
        );
        assert!(!segments.is_fully_consumed());
    }

    #[test]
    fn ignores_leading_and_trailing_slash() {
        let a = Segments::tokenize("/subscriptions/abc/").unwrap();
        let b = Segments::tokenize("subscriptions/abc").unwrap();
        assert_eq!(a.pairs(), b.pairs());
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(Segments::tokenize("").unwrap_err(), IdError::Empty);
        assert_eq!(Segments::tokenize("/").unwrap_err(), IdError::Empty);
        assert_eq!(Segments::tokenize("   ").unwrap_err(), IdError::Empty);
    }

    #[test]
    fn rejects_dangling_segment() {
        let err = Segments::tokenize("/subscriptions/abc/resourceGroups").unwrap_err();
        assert!(matches!(err, IdError::Malformed { .. }));
        assert!(err.to_string().contains("not divisible by 2"));
    }

    #[test]
    fn rejects_empty_segment() {
        let err = Segments::tokenize("/subscriptions//resourceGroups/rg").unwrap_err();
        assert!(matches!(err, IdError::EmptySegment { .. }));
    }

    #[test]
    fn leftover_reports_unconsumed_tokens() {
        let mut segments = Segments::tokenize("/a/1/b/2/c/3").unwrap();
        assert_eq!(segments.advance().map(|p| p.key), Some("a"));
        assert_eq!(segments.leftover(), vec!["b", "2", "c", "3"]);
        segments.advance();
        segments.advance();
        assert!(segments.is_fully_consumed());
        assert!(segments.leftover().is_empty());
        assert_eq!(segments.advance(), None);
    }
}
