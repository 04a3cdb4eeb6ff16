//! Severity levels for interpretation remarks.

use std::fmt;

/// Impact level of an interpretation remark, totally ordered by
/// increasing severity: `Info < Warning < Error`.
///
/// Severities are fixed at definition time and never constructed beyond
/// these three constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum Severity {
    /// Informational: the record was interpreted successfully, possibly
    /// with a harmless adjustment worth surfacing.
    Info,
    /// A likely data-quality problem that did not block interpretation.
    Warning,
    /// Interpretation failed or produced an unusable result.
    Error,
}

impl Severity {
    /// The wire-format name of the severity.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
