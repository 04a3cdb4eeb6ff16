//! Cross-vocabulary verification of the interpretation-remark contract.

use std::collections::HashMap;

use crate::error::{VocabularyError, VocabularyResult};
use crate::issue::OccurrenceIssue;
use crate::remark::{InterpretationRemark, RemarkDescriptor};

/// Explicit registry of the vocabularies implementing
/// [`InterpretationRemark`].
///
/// Remark ids double as map keys and wire-format values, so a collision
/// between two vocabularies would make aggregated issue reports
/// ambiguous. Each vocabulary registers its closed entry list here, and
/// [`verify`](Self::verify) runs once per process lifetime (at startup or
/// in a test harness) as a whole-program pass. The registry is never
/// consulted per record.
#[derive(Debug, Default)]
pub struct RemarkRegistry {
    vocabularies: Vec<Vocabulary>,
}

#[derive(Debug)]
struct Vocabulary {
    name: &'static str,
    entries: Vec<RemarkDescriptor>,
}

impl RemarkRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            vocabularies: Vec::new(),
        }
    }

    /// Registry pre-loaded with every built-in vocabulary implementing
    /// the remark contract.
    pub fn with_builtin_vocabularies() -> Self {
        let mut registry = Self::new();
        registry.register("OccurrenceIssue", &OccurrenceIssue::ALL);
        registry
    }

    /// Registers a vocabulary from its closed enumeration of entries.
    pub fn register<R: InterpretationRemark>(&mut self, name: &'static str, entries: &[R]) {
        self.register_descriptors(name, entries.iter().map(R::descriptor).collect());
    }

    /// Registers a vocabulary from a raw descriptor table.
    ///
    /// This is the path on which a missing severity is representable;
    /// [`verify`](Self::verify) rejects such tables.
    pub fn register_descriptors(&mut self, name: &'static str, entries: Vec<RemarkDescriptor>) {
        self.vocabularies.push(Vocabulary { name, entries });
    }

    /// Verifies the cross-vocabulary invariants, failing on the first
    /// violation:
    ///
    /// 1. every wire id is unique across all registered vocabularies
    ///    combined;
    /// 2. every entry carries a severity.
    ///
    /// A violation is a configuration defect in a vocabulary definition
    /// and must be fixed at the source; callers are expected to abort,
    /// not to work around it.
    pub fn verify(&self) -> VocabularyResult<()> {
        let mut seen: HashMap<&str, &'static str> = HashMap::new();
        for vocabulary in &self.vocabularies {
            for entry in &vocabulary.entries {
                if entry.severity.is_none() {
                    return Err(VocabularyError::MissingSeverity {
                        id: entry.id.clone(),
                        vocabulary: vocabulary.name,
                    });
                }
                if let Some(previous) = seen.insert(entry.id.as_str(), vocabulary.name) {
                    return Err(VocabularyError::DuplicateRemarkId {
                        id: entry.id.clone(),
                        vocabulary: vocabulary.name,
                        previous,
                    });
                }
            }
        }
        Ok(())
    }

    /// Looks up an entry by wire id across all registered vocabularies.
    ///
    /// Only meaningful after [`verify`](Self::verify) has passed; with a
    /// duplicate id the first registration wins.
    pub fn find(&self, id: &str) -> Option<&RemarkDescriptor> {
        self.vocabularies
            .iter()
            .flat_map(|vocabulary| vocabulary.entries.iter())
            .find(|entry| entry.id == id)
    }

    /// Total number of entries across all registered vocabularies.
    pub fn len(&self) -> usize {
        self.vocabularies
            .iter()
            .map(|vocabulary| vocabulary.entries.len())
            .sum()
    }

    /// True if no vocabulary has been registered.
    pub fn is_empty(&self) -> bool {
        self.vocabularies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::severity::Severity;

    #[test]
    fn test_builtin_vocabularies_verify() {
        let registry = RemarkRegistry::with_builtin_vocabularies();
        assert!(registry.verify().is_ok());
        assert_eq!(registry.len(), OccurrenceIssue::ALL.len());
    }

    #[test]
    fn test_find_by_wire_id() {
        let registry = RemarkRegistry::with_builtin_vocabularies();
        let entry = registry.find("ZERO_COORDINATE").unwrap();
        assert_eq!(entry.severity, Some(Severity::Warning));
        assert!(!entry.related_terms.is_empty());
        assert!(registry.find("NO_SUCH_ID").is_none());
    }

    #[test]
    fn test_duplicate_registration_fails() {
        let mut registry = RemarkRegistry::with_builtin_vocabularies();
        registry.register("OccurrenceIssueAgain", &OccurrenceIssue::ALL);
        assert!(matches!(
            registry.verify(),
            Err(VocabularyError::DuplicateRemarkId {
                vocabulary: "OccurrenceIssueAgain",
                previous: "OccurrenceIssue",
                ..
            })
        ));
    }

    #[test]
    fn test_missing_severity_fails() {
        let mut registry = RemarkRegistry::new();
        registry.register_descriptors(
            "RawTable",
            vec![RemarkDescriptor {
                id: "BROKEN_ENTRY".to_string(),
                severity: None,
                related_terms: Vec::new(),
                deprecated: false,
            }],
        );
        assert!(matches!(
            registry.verify(),
            Err(VocabularyError::MissingSeverity { vocabulary: "RawTable", .. })
        ));
    }

    #[test]
    fn test_empty_registry_verifies() {
        let registry = RemarkRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.verify().is_ok());
    }
}
