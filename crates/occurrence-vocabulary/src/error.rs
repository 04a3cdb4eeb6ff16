//! Error types for vocabulary definition and lookup.

use thiserror::Error;

/// Errors raised by vocabulary verification and id lookup.
///
/// [`DuplicateRemarkId`](VocabularyError::DuplicateRemarkId) and
/// [`MissingSeverity`](VocabularyError::MissingSeverity) indicate a broken
/// vocabulary definition: they must halt startup or fail the test run, not
/// be logged and ignored, because they corrupt id-based aggregation across
/// the whole system.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VocabularyError {
    /// The same wire id appears in more than one registered vocabulary
    /// (or twice in one).
    #[error("remark id '{id}' in vocabulary {vocabulary} already defined in {previous}")]
    DuplicateRemarkId {
        /// The colliding wire id.
        id: String,
        /// Vocabulary holding the second definition.
        vocabulary: &'static str,
        /// Vocabulary holding the first definition.
        previous: &'static str,
    },

    /// A registered entry carries no severity.
    #[error("remark '{id}' in vocabulary {vocabulary} has no severity")]
    MissingSeverity {
        /// The wire id of the defective entry.
        id: String,
        /// Vocabulary holding the entry.
        vocabulary: &'static str,
    },

    /// A wire id does not name any entry of the vocabulary.
    #[error("unknown interpretation remark id: {0}")]
    UnknownRemarkId(String),
}

/// Result type for vocabulary operations.
pub type VocabularyResult<T> = std::result::Result<T, VocabularyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_duplicate_id() {
        let err = VocabularyError::DuplicateRemarkId {
            id: "ZERO_COORDINATE".to_string(),
            vocabulary: "TestIssue",
            previous: "OccurrenceIssue",
        };
        assert_eq!(
            err.to_string(),
            "remark id 'ZERO_COORDINATE' in vocabulary TestIssue already defined in OccurrenceIssue"
        );
    }

    #[test]
    fn test_error_display_missing_severity() {
        let err = VocabularyError::MissingSeverity {
            id: "BROKEN_ENTRY".to_string(),
            vocabulary: "RawTable",
        };
        assert_eq!(
            err.to_string(),
            "remark 'BROKEN_ENTRY' in vocabulary RawTable has no severity"
        );
    }

    #[test]
    fn test_error_display_unknown_id() {
        let err = VocabularyError::UnknownRemarkId("NO_SUCH_ID".to_string());
        assert_eq!(err.to_string(), "unknown interpretation remark id: NO_SUCH_ID");
    }
}
