//! The contract shared by every interpretation-remark vocabulary.
//!
//! A remark is a data-quality finding attached to an interpreted record:
//! an issue or validation-rule entry carrying a severity, the record
//! fields it relates to, and a deprecation flag. Concrete vocabularies
//! are closed enumerations defined statically and never mutated, so
//! unsynchronized concurrent reads are safe.

use crate::severity::Severity;
use crate::term::Term;

/// Read-only capability set of a vocabulary entry.
///
/// Implementing this trait registers a vocabulary into the contract
/// enforced by [`RemarkRegistry`](crate::RemarkRegistry): ids must be
/// unique across *all* implementing vocabularies combined, because they
/// double as map keys and wire-format values in aggregated issue reports.
pub trait InterpretationRemark {
    /// Stable textual identifier: the declared entry name, verbatim.
    ///
    /// This is the serialized form used in records and query responses;
    /// renaming an entry is a breaking change for external consumers.
    fn id(&self) -> &'static str;

    /// The entry's severity, fixed at definition time.
    fn severity(&self) -> Severity;

    /// Record terms this remark relates to.
    ///
    /// Duplicate-free; order is not significant. May be empty.
    fn related_terms(&self) -> &'static [Term];

    /// True if the entry is retained only for backward compatibility.
    ///
    /// Deprecated entries keep their id and severity; entries are never
    /// removed (removal is a vocabulary version change).
    fn is_deprecated(&self) -> bool;

    /// An owned, vocabulary-agnostic snapshot of this entry.
    fn descriptor(&self) -> RemarkDescriptor {
        RemarkDescriptor {
            id: self.id().to_string(),
            severity: Some(self.severity()),
            related_terms: self.related_terms().to_vec(),
            deprecated: self.is_deprecated(),
        }
    }
}

/// Vocabulary-agnostic form of a remark entry.
///
/// Descriptors let the registry verify heterogeneous vocabularies without
/// knowing their concrete types, and serialize vocabulary tables for
/// external consumers. `severity` is optional only because descriptors
/// can be built from raw tables; a descriptor derived from an
/// [`InterpretationRemark`] always carries one, and the registry check
/// rejects any descriptor without it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RemarkDescriptor {
    /// Wire-format identifier of the entry.
    pub id: String,
    /// Severity of the entry; `None` only in defective raw tables.
    pub severity: Option<Severity>,
    /// Record terms the entry relates to.
    pub related_terms: Vec<Term>,
    /// Whether the entry is deprecated.
    pub deprecated: bool,
}
