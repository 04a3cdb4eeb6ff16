//! # occurrence-vocabulary
//!
//! Shared vocabulary for data-quality findings on biodiversity occurrence
//! records.
//!
//! This crate provides:
//! - **Issue vocabulary**: [`OccurrenceIssue`], the closed enumeration of
//!   problems detected during record interpretation, each carrying a
//!   severity, related record terms and a deprecation flag
//! - **Remark contract**: [`InterpretationRemark`], the capability every
//!   vocabulary entry satisfies, plus [`RemarkRegistry`] to verify the
//!   cross-vocabulary invariants (globally unique ids, severities present)
//! - **Field references**: a minimal [`Term`] catalog covering the Darwin
//!   Core, Dublin Core and GBIF terms the vocabulary relates to
//!
//! ## Wire format
//!
//! An entry's id is its declared name, verbatim (`ZERO_COORDINATE`), and
//! is the canonical string used when serializing issues into records or
//! query responses. Renaming an entry is a breaking change; deprecated
//! entries keep their id and are never removed.
//!
//! ## Usage
//!
//! ```rust
//! use occurrence_vocabulary::{
//!     InterpretationRemark, OccurrenceIssue, RemarkRegistry, Severity,
//! };
//!
//! let issue = OccurrenceIssue::ZeroCoordinate;
//! assert_eq!(issue.id(), "ZERO_COORDINATE");
//! assert_eq!(issue.severity(), Severity::Warning);
//! assert!(!issue.is_deprecated());
//!
//! // Verify the cross-vocabulary invariants once at startup.
//! RemarkRegistry::with_builtin_vocabularies().verify().unwrap();
//! ```
//!
//! ## Rule groups
//!
//! Two hand-curated, ordered groups are exposed for display logic:
//! [`OccurrenceIssue::GEOSPATIAL_RULES`] (issues that suppress map
//! display) and [`OccurrenceIssue::TAXONOMIC_RULES`].
//!
//! All vocabularies are immutable and defined statically; everything here
//! is safe for unsynchronized concurrent reads.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod issue;
mod registry;
mod remark;
mod severity;
mod term;
mod validation_rule;

pub use error::{VocabularyError, VocabularyResult};
pub use issue::OccurrenceIssue;
pub use registry::RemarkRegistry;
pub use remark::{InterpretationRemark, RemarkDescriptor};
pub use severity::Severity;
pub use term::{DcTerm, DwcTerm, GbifTerm, Term};
pub use validation_rule::OccurrenceValidationRule;
