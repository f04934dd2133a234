//! Error types for identifier parsing

use thiserror::Error;

/// Errors produced while parsing or assembling a resource identifier
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdError {
    /// The input was empty (or consisted only of slashes)
    #[error("ID cannot be empty")]
    Empty,

    /// The input is not a hierarchical path at all
    #[error("parsing {input:?}: {reason}")]
    Malformed { input: String, reason: String },

    /// A `/`-delimited segment was empty (e.g. `//`)
    #[error("ID {input:?} contains an empty segment")]
    EmptySegment { input: String },

    /// A required key segment could not be located
    #[error("ID was missing the `{segment}` element")]
    SegmentNotFound { segment: String },

    /// A fixed value segment (such as a provider namespace) did not match
    #[error("expected the `{segment}` element to be {expected:?} but got {actual:?}")]
    UnexpectedValue {
        segment: String,
        expected: String,
        actual: String,
    },

    /// Parsing consumed every declared segment but the input had more
    #[error("ID contained more segments than required: {input:?}, remaining: {}", remaining.join("/"))]
    UnexpectedSegments {
        input: String,
        remaining: Vec<String>,
    },

    /// A compound identifier did not split into the expected number of parts
    #[error("expected ID to be in the format {expected} but got {input:?} ({found} part(s))")]
    AssociationShape {
        input: String,
        expected: String,
        found: usize,
    },

    /// One side of a compound identifier failed to parse
    #[error("parsing {part} ID: {source}")]
    AssociationPart {
        part: &'static str,
        #[source]
        source: Box<IdError>,
    },

    /// No identifier kind is registered under this name
    #[error("unknown identifier kind '{kind}'")]
    UnknownKind { kind: String },

    /// The identifier kind only supports strict parsing
    #[error("identifier kind '{kind}' does not support insensitive parsing")]
    InsensitiveUnsupported { kind: String },

    /// Wrong number of field values supplied when assembling an identifier
    #[error("identifier kind '{kind}' takes {expected} value(s), got {found}")]
    FieldCount {
        kind: String,
        expected: usize,
        found: usize,
    },
}

impl IdError {
    pub fn malformed(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Malformed {
            input: input.into(),
            reason: reason.into(),
        }
    }

    pub fn segment_not_found(segment: impl Into<String>) -> Self {
        Self::SegmentNotFound {
            segment: segment.into(),
        }
    }

    pub fn association_part(part: &'static str, source: IdError) -> Self {
        Self::AssociationPart {
            part,
            source: Box::new(source),
        }
    }

    /// Returns true if a required segment was missing
    pub fn is_missing_segment(&self) -> bool {
        matches!(self, IdError::SegmentNotFound { .. })
    }

    /// Returns true if the input was not a usable path at all
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            IdError::Empty | IdError::Malformed { .. } | IdError::EmptySegment { .. }
        )
    }
}

/// Result type for identifier operations
pub type IdResult<T> = Result<T, IdError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_segment_message_names_segment() {
        let err = IdError::segment_not_found("resourceGroups");
        assert_eq!(err.to_string(), "ID was missing the `resourceGroups` element");
        assert!(err.is_missing_segment());
        assert!(!err.is_malformed());
    }

    #[test]
    fn association_part_keeps_source() {
        let err = IdError::association_part("NAT Gateway", IdError::Empty);
        assert_eq!(err.to_string(), "parsing NAT Gateway ID: ID cannot be empty");
        let source = std::error::Error::source(&err).map(|e| e.to_string());
        assert_eq!(source.as_deref(), Some("ID cannot be empty"));
    }

    #[test]
    fn unexpected_segments_lists_remainder() {
        let err = IdError::UnexpectedSegments {
            input: "/a/b".to_string(),
            remaining: vec!["extra".to_string(), "thing".to_string()],
        };
        assert!(err.to_string().ends_with("remaining: extra/thing"));
    }
}
