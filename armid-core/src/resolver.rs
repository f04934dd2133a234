//! Segment resolver
//!
//! Matches a key segment against the next unconsumed pair of a tokenized
//! path, so keys must appear in declared order. Strict mode requires the exact casing; insensitive mode accepts any
//! ASCII casing and reports the key as it was actually written.

use crate::error::{IdError, IdResult};
use crate::tokenizer::Segments;

/// How static segments are matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Static segments must match exactly
    #[default]
    Strict,
    /// Static segments match ignoring ASCII case
    Insensitive,
}

impl ParseMode {
    /// Compare a static literal against input text under this mode
    pub fn matches(self, expected: &str, actual: &str) -> bool {
        match self {
            ParseMode::Strict => expected == actual,
            ParseMode::Insensitive => expected.eq_ignore_ascii_case(actual),
        }
    }
}

/// A resolved key/value pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved<'a> {
    /// The key as written in the input
    pub key: &'a str,
    pub value: &'a str,
}

/// Resolve `expected_key` against the next unconsumed pair
pub fn resolve<'a>(
    segments: &mut Segments<'a>,
    expected_key: &str,
    mode: ParseMode,
) -> IdResult<Resolved<'a>> {
    let pair = segments
        .peek()
        .filter(|pair| mode.matches(expected_key, pair.key))
        .ok_or_else(|| IdError::segment_not_found(expected_key))?;
    segments.advance();

    if pair.key != expected_key {
        log::debug!(
            "resolved segment `{}` from differently-cased `{}`",
            expected_key,
            pair.key
        );
    }

    Ok(Resolved {
        key: pair.key,
        value: pair.value,
    })
}
