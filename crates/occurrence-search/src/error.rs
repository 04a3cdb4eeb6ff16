//! Error types for range-expression parsing.

use thiserror::Error;

/// Errors produced when classifying and parsing a range expression.
///
/// These are expected, local outcomes returned to the caller for control
/// flow; none of them indicates a defect in the parser itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// The input has no comma and is itself a valid scalar of the domain.
    ///
    /// Callers should treat the value as an exact-match term rather than
    /// an error.
    #[error("not a range expression: '{0}'")]
    NotARange(String),

    /// The input has the comma-delimited shape of a range but cannot be
    /// interpreted: a non-wildcard side fails domain parsing, both sides
    /// are wildcards, or more than one comma is present.
    #[error("invalid {domain} range: '{input}'")]
    InvalidRange {
        /// Name of the scalar domain ("integer", "decimal" or "date").
        domain: &'static str,
        /// The offending input, verbatim.
        input: String,
    },

    /// The input has no range structure and fails to parse as a scalar.
    #[error("malformed {domain} value: '{input}'")]
    MalformedScalar {
        /// Name of the scalar domain ("integer", "decimal" or "date").
        domain: &'static str,
        /// The offending input, verbatim.
        input: String,
    },
}

/// Result type for range parsing operations.
pub type RangeResult<T> = std::result::Result<T, RangeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_not_a_range() {
        let err = RangeError::NotARange("10.3".to_string());
        assert_eq!(err.to_string(), "not a range expression: '10.3'");
    }

    #[test]
    fn test_error_display_invalid_range() {
        let err = RangeError::InvalidRange {
            domain: "decimal",
            input: "10,abc".to_string(),
        };
        assert_eq!(err.to_string(), "invalid decimal range: '10,abc'");
    }

    #[test]
    fn test_error_display_malformed_scalar() {
        let err = RangeError::MalformedScalar {
            domain: "date",
            input: "peter".to_string(),
        };
        assert_eq!(err.to_string(), "malformed date value: 'peter'");
    }
}
