//! Legacy validation-rule vocabulary.
//!
//! Predecessor of [`OccurrenceIssue`](crate::OccurrenceIssue), kept for
//! consumers of historic record dumps. Its ids overlap with the issue
//! vocabulary on purpose (the issues replaced these rules one to one), so
//! this enum must never be registered as an [`InterpretationRemark`]
//! vocabulary: doing so would correctly trip the global id-uniqueness
//! check.

use std::fmt;

/// Validation rules applied to single occurrence records before the
/// richer issue vocabulary existed. Superseded by
/// [`OccurrenceIssue`](crate::OccurrenceIssue).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum OccurrenceValidationRule {
    /// Coordinate is the exact 0/0 point, which usually stands in for a
    /// missing coordinate.
    ZeroCoordinate,
    /// Latitude or longitude falls outside its decimal degree range.
    CoordinatesOutOfRange,
    /// Interpreted coordinates fall outside the stated country.
    CountryCoordinateMismatch,
    /// Latitude and longitude appear to be swapped.
    PresumedSwappedCoordinate,
    /// Longitude appears to be negated, e.g. 32.3 instead of -32.3.
    PresumedNegatedLongitude,
    /// Latitude appears to be negated, e.g. 32.3 instead of -32.3.
    PresumedNegatedLatitude,
    /// The eventDate string and the individual year/month/day fields
    /// contradict each other.
    RecordedDateMismatch,
    /// A (partially) invalid recording date, such as a nonexistent date
    /// or a zero month.
    RecordedDateInvalid,
    /// The recording year is in the future or predates modern taxonomy
    /// (before 1700).
    RecordedYearUnlikely,
    /// The taxon only matched the backbone via a fuzzy, non-exact match.
    TaxonMatchFuzzy,
    /// The taxon only matched the backbone at a higher rank, not at the
    /// scientific name itself.
    TaxonMatchHigherrank,
    /// No backbone match at all, or several indistinguishable matches
    /// (homonyms).
    TaxonMatchNone,
}

impl OccurrenceValidationRule {
    /// Every entry of the vocabulary, in declaration order.
    pub const ALL: [OccurrenceValidationRule; 12] = [
        OccurrenceValidationRule::ZeroCoordinate,
        OccurrenceValidationRule::CoordinatesOutOfRange,
        OccurrenceValidationRule::CountryCoordinateMismatch,
        OccurrenceValidationRule::PresumedSwappedCoordinate,
        OccurrenceValidationRule::PresumedNegatedLongitude,
        OccurrenceValidationRule::PresumedNegatedLatitude,
        OccurrenceValidationRule::RecordedDateMismatch,
        OccurrenceValidationRule::RecordedDateInvalid,
        OccurrenceValidationRule::RecordedYearUnlikely,
        OccurrenceValidationRule::TaxonMatchFuzzy,
        OccurrenceValidationRule::TaxonMatchHigherrank,
        OccurrenceValidationRule::TaxonMatchNone,
    ];

    /// Rules indicating coordinate problems; records carrying one should
    /// not be shown on maps.
    pub const GEOSPATIAL_RULES: &'static [OccurrenceValidationRule] = &[
        OccurrenceValidationRule::ZeroCoordinate,
        OccurrenceValidationRule::CoordinatesOutOfRange,
        OccurrenceValidationRule::CountryCoordinateMismatch,
        OccurrenceValidationRule::PresumedSwappedCoordinate,
        OccurrenceValidationRule::PresumedNegatedLatitude,
        OccurrenceValidationRule::PresumedNegatedLongitude,
    ];

    /// Rules indicating taxonomic problems. Empty in this legacy
    /// vocabulary; taxonomic curation arrived with the issue vocabulary.
    pub const TAXONOMIC_RULES: &'static [OccurrenceValidationRule] = &[];

    /// The rule's wire id: its declared name, verbatim.
    pub fn as_str(&self) -> &'static str {
        match self {
            OccurrenceValidationRule::ZeroCoordinate => "ZERO_COORDINATE",
            OccurrenceValidationRule::CoordinatesOutOfRange => "COORDINATES_OUT_OF_RANGE",
            OccurrenceValidationRule::CountryCoordinateMismatch => "COUNTRY_COORDINATE_MISMATCH",
            OccurrenceValidationRule::PresumedSwappedCoordinate => "PRESUMED_SWAPPED_COORDINATE",
            OccurrenceValidationRule::PresumedNegatedLongitude => "PRESUMED_NEGATED_LONGITUDE",
            OccurrenceValidationRule::PresumedNegatedLatitude => "PRESUMED_NEGATED_LATITUDE",
            OccurrenceValidationRule::RecordedDateMismatch => "RECORDED_DATE_MISMATCH",
            OccurrenceValidationRule::RecordedDateInvalid => "RECORDED_DATE_INVALID",
            OccurrenceValidationRule::RecordedYearUnlikely => "RECORDED_YEAR_UNLIKELY",
            OccurrenceValidationRule::TaxonMatchFuzzy => "TAXON_MATCH_FUZZY",
            OccurrenceValidationRule::TaxonMatchHigherrank => "TAXON_MATCH_HIGHERRANK",
            OccurrenceValidationRule::TaxonMatchNone => "TAXON_MATCH_NONE",
        }
    }
}

impl fmt::Display for OccurrenceValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geospatial_rules_membership() {
        assert_eq!(OccurrenceValidationRule::GEOSPATIAL_RULES.len(), 6);
        for rule in OccurrenceValidationRule::GEOSPATIAL_RULES {
            assert!(OccurrenceValidationRule::ALL.contains(rule));
        }
    }

    #[test]
    fn test_taxonomic_rules_empty() {
        assert!(OccurrenceValidationRule::TAXONOMIC_RULES.is_empty());
    }

    #[test]
    fn test_ids_unique_within_vocabulary() {
        use std::collections::HashSet;

        let ids: HashSet<&str> = OccurrenceValidationRule::ALL
            .iter()
            .map(|rule| rule.as_str())
            .collect();
        assert_eq!(ids.len(), OccurrenceValidationRule::ALL.len());
    }
}
