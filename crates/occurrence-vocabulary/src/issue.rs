//! The occurrence interpretation issue vocabulary.

use std::fmt;
use std::str::FromStr;

use crate::error::VocabularyError;
use crate::remark::InterpretationRemark;
use crate::severity::Severity;
use crate::term::{DcTerm, DwcTerm, GbifTerm, Term};

/// Shared related-term groups reused by several entries, so the lists are
/// declared once.
mod term_group {
    use super::{DwcTerm, GbifTerm, Term};

    pub(super) const COORDINATE_TERMS_NO_DATUM: &[Term] = &[
        Term::Dwc(DwcTerm::DecimalLatitude),
        Term::Dwc(DwcTerm::DecimalLongitude),
        Term::Dwc(DwcTerm::VerbatimLatitude),
        Term::Dwc(DwcTerm::VerbatimLongitude),
        Term::Dwc(DwcTerm::VerbatimCoordinates),
    ];

    pub(super) const COORDINATE_TERMS: &[Term] = &[
        Term::Dwc(DwcTerm::DecimalLatitude),
        Term::Dwc(DwcTerm::DecimalLongitude),
        Term::Dwc(DwcTerm::VerbatimLatitude),
        Term::Dwc(DwcTerm::VerbatimLongitude),
        Term::Dwc(DwcTerm::VerbatimCoordinates),
        Term::Dwc(DwcTerm::GeodeticDatum),
    ];

    pub(super) const COUNTRY_TERMS: &[Term] = &[
        Term::Dwc(DwcTerm::Country),
        Term::Dwc(DwcTerm::CountryCode),
    ];

    pub(super) const COORDINATE_COUNTRY_TERMS: &[Term] = &[
        Term::Dwc(DwcTerm::DecimalLatitude),
        Term::Dwc(DwcTerm::DecimalLongitude),
        Term::Dwc(DwcTerm::VerbatimLatitude),
        Term::Dwc(DwcTerm::VerbatimLongitude),
        Term::Dwc(DwcTerm::VerbatimCoordinates),
        Term::Dwc(DwcTerm::GeodeticDatum),
        Term::Dwc(DwcTerm::Country),
        Term::Dwc(DwcTerm::CountryCode),
    ];

    pub(super) const RECORDED_DATE_TERMS: &[Term] = &[
        Term::Dwc(DwcTerm::EventDate),
        Term::Dwc(DwcTerm::Year),
        Term::Dwc(DwcTerm::Month),
        Term::Dwc(DwcTerm::Day),
    ];

    pub(super) const TAXONOMY_TERMS: &[Term] = &[
        Term::Dwc(DwcTerm::Kingdom),
        Term::Dwc(DwcTerm::Phylum),
        Term::Dwc(DwcTerm::Class),
        Term::Dwc(DwcTerm::Order),
        Term::Dwc(DwcTerm::Family),
        Term::Dwc(DwcTerm::Genus),
        Term::Dwc(DwcTerm::ScientificName),
        Term::Dwc(DwcTerm::ScientificNameAuthorship),
        Term::Gbif(GbifTerm::GenericName),
        Term::Dwc(DwcTerm::SpecificEpithet),
        Term::Dwc(DwcTerm::InfraspecificEpithet),
    ];

    pub(super) const DEPTH_TERMS: &[Term] = &[
        Term::Dwc(DwcTerm::MinimumDepthInMeters),
        Term::Dwc(DwcTerm::MaximumDepthInMeters),
    ];

    pub(super) const ELEVATION_TERMS: &[Term] = &[
        Term::Dwc(DwcTerm::MinimumElevationInMeters),
        Term::Dwc(DwcTerm::MaximumElevationInMeters),
    ];
}

/// Data-quality issues detected while interpreting a single occurrence
/// record.
///
/// A closed vocabulary: every entry is defined here with its severity,
/// related terms and deprecation flag, all resolved at definition time.
/// Wire ids are the declared names in SCREAMING_SNAKE form; see
/// [`as_str`](Self::as_str).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum OccurrenceIssue {
    /// Coordinate is the exact 0/0 point, which usually stands in for a
    /// missing coordinate.
    ZeroCoordinate,
    /// Latitude or longitude falls outside its decimal degree range.
    CoordinateOutOfRange,
    /// A coordinate value was supplied but could not be interpreted.
    CoordinateInvalid,
    /// The original coordinate was rounded to 5 decimals.
    CoordinateRounded,
    /// The supplied geodetic datum could not be interpreted.
    GeodeticDatumInvalid,
    /// No interpretable datum was given, so WGS84 was assumed for the
    /// interpreted coordinates.
    GeodeticDatumAssumedWgs84,
    /// The coordinate was reprojected from its original datum to WGS84.
    CoordinateReprojected,
    /// Reprojection to WGS84 from the supplied datum failed.
    CoordinateReprojectionFailed,
    /// Reprojection succeeded but shifted the point by more than 0.1
    /// decimal degrees.
    CoordinateReprojectionSuspicious,
    /// Coordinate accuracy derived from precision or uncertainty is
    /// invalid or very unlikely.
    CoordinateAccuracyInvalid,
    /// Invalid or very unlikely coordinatePrecision value.
    CoordinatePrecisionInvalid,
    /// Invalid or very unlikely coordinateUncertaintyInMeters value.
    CoordinateUncertaintyMetersInvalid,
    /// Coordinate uncertainty in meters and coordinate precision
    /// contradict each other.
    CoordinatePrecisionUncertaintyMismatch,
    /// Interpreted coordinates fall outside the stated country.
    CountryCoordinateMismatch,
    /// Interpreted country and countryCode contradict each other.
    CountryMismatch,
    /// Country values could not be interpreted.
    CountryInvalid,
    /// The country was derived from the coordinates, not the verbatim
    /// country fields.
    CountryDerivedFromCoordinates,
    /// Interpreted continent and country do not match up.
    ContinentCountryMismatch,
    /// Continent values could not be interpreted.
    ContinentInvalid,
    /// The continent was derived from the coordinates, not the verbatim
    /// continent field.
    ContinentDerivedFromCoordinates,
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
    /// The recording date is in the future or predates modern taxonomy
    /// (before 1600).
    RecordedDateUnlikely,
    /// The taxon only matched the backbone via a fuzzy, non-exact match.
    TaxonMatchFuzzy,
    /// The taxon only matched the backbone at a higher rank, not at the
    /// scientific name itself.
    TaxonMatchHigherrank,
    /// No backbone match at all, or several indistinguishable matches
    /// (homonyms).
    TaxonMatchNone,
    /// Depth appears to be given in a non-metric unit, e.g. feet.
    DepthNotMetric,
    /// Depth is negative or deeper than 11,000 m.
    DepthUnlikely,
    /// Supplied minimum depth is larger than the maximum.
    DepthMinMaxSwapped,
    /// Depth is not a numeric value.
    DepthNonNumeric,
    /// Elevation is above the troposphere (17 km) or below -11 km.
    ElevationUnlikely,
    /// Supplied minimum elevation is larger than the maximum.
    ElevationMinMaxSwapped,
    /// Elevation appears to be given in a non-metric unit, e.g. feet.
    ElevationNotMetric,
    /// Elevation is not a numeric value.
    ElevationNonNumeric,
    /// A (partially) invalid date given for dc:modified.
    ModifiedDateInvalid,
    /// The dc:modified date is in the future or predates Unix time
    /// (1970).
    ModifiedDateUnlikely,
    /// The dateIdentified is in the future or before Linnean times
    /// (1700).
    IdentifiedDateUnlikely,
    /// The dateIdentified could not be interpreted at all.
    IdentifiedDateInvalid,
    /// The basis of record cannot be interpreted or departs seriously
    /// from the recommended vocabulary.
    BasisOfRecordInvalid,
    /// The type status cannot be interpreted or departs seriously from
    /// the recommended vocabulary.
    TypeStatusInvalid,
    /// An invalid dc:created date on a multimedia object.
    MultimediaDateInvalid,
    /// An invalid URI on a multimedia object.
    MultimediaUriInvalid,
    /// An invalid URI given for dc:references.
    ReferencesUriInvalid,
    /// Interpretation aborted with an error, leaving the record
    /// incomplete.
    InterpretationError,
    /// Individual count is not parsable into an integer.
    IndividualCountInvalid,
}

impl OccurrenceIssue {
    /// Every entry of the vocabulary, in declaration order.
    pub const ALL: [OccurrenceIssue; 48] = [
        OccurrenceIssue::ZeroCoordinate,
        OccurrenceIssue::CoordinateOutOfRange,
        OccurrenceIssue::CoordinateInvalid,
        OccurrenceIssue::CoordinateRounded,
        OccurrenceIssue::GeodeticDatumInvalid,
        OccurrenceIssue::GeodeticDatumAssumedWgs84,
        OccurrenceIssue::CoordinateReprojected,
        OccurrenceIssue::CoordinateReprojectionFailed,
        OccurrenceIssue::CoordinateReprojectionSuspicious,
        OccurrenceIssue::CoordinateAccuracyInvalid,
        OccurrenceIssue::CoordinatePrecisionInvalid,
        OccurrenceIssue::CoordinateUncertaintyMetersInvalid,
        OccurrenceIssue::CoordinatePrecisionUncertaintyMismatch,
        OccurrenceIssue::CountryCoordinateMismatch,
        OccurrenceIssue::CountryMismatch,
        OccurrenceIssue::CountryInvalid,
        OccurrenceIssue::CountryDerivedFromCoordinates,
        OccurrenceIssue::ContinentCountryMismatch,
        OccurrenceIssue::ContinentInvalid,
        OccurrenceIssue::ContinentDerivedFromCoordinates,
        OccurrenceIssue::PresumedSwappedCoordinate,
        OccurrenceIssue::PresumedNegatedLongitude,
        OccurrenceIssue::PresumedNegatedLatitude,
        OccurrenceIssue::RecordedDateMismatch,
        OccurrenceIssue::RecordedDateInvalid,
        OccurrenceIssue::RecordedDateUnlikely,
        OccurrenceIssue::TaxonMatchFuzzy,
        OccurrenceIssue::TaxonMatchHigherrank,
        OccurrenceIssue::TaxonMatchNone,
        OccurrenceIssue::DepthNotMetric,
        OccurrenceIssue::DepthUnlikely,
        OccurrenceIssue::DepthMinMaxSwapped,
        OccurrenceIssue::DepthNonNumeric,
        OccurrenceIssue::ElevationUnlikely,
        OccurrenceIssue::ElevationMinMaxSwapped,
        OccurrenceIssue::ElevationNotMetric,
        OccurrenceIssue::ElevationNonNumeric,
        OccurrenceIssue::ModifiedDateInvalid,
        OccurrenceIssue::ModifiedDateUnlikely,
        OccurrenceIssue::IdentifiedDateUnlikely,
        OccurrenceIssue::IdentifiedDateInvalid,
        OccurrenceIssue::BasisOfRecordInvalid,
        OccurrenceIssue::TypeStatusInvalid,
        OccurrenceIssue::MultimediaDateInvalid,
        OccurrenceIssue::MultimediaUriInvalid,
        OccurrenceIssue::ReferencesUriInvalid,
        OccurrenceIssue::InterpretationError,
        OccurrenceIssue::IndividualCountInvalid,
    ];

    /// Issues indicating problems with the coordinates; records carrying
    /// one should not be shown on maps. Hand-curated, order-preserving.
    pub const GEOSPATIAL_RULES: &'static [OccurrenceIssue] = &[
        OccurrenceIssue::ZeroCoordinate,
        OccurrenceIssue::CoordinateInvalid,
        OccurrenceIssue::CoordinateOutOfRange,
        OccurrenceIssue::CountryCoordinateMismatch,
    ];

    /// Issues indicating problems with the taxonomic match. Hand-curated,
    /// order-preserving.
    pub const TAXONOMIC_RULES: &'static [OccurrenceIssue] = &[
        OccurrenceIssue::TaxonMatchFuzzy,
        OccurrenceIssue::TaxonMatchHigherrank,
        OccurrenceIssue::TaxonMatchNone,
    ];

    /// The entry's wire id: its declared name, verbatim.
    pub fn as_str(&self) -> &'static str {
        match self {
            OccurrenceIssue::ZeroCoordinate => "ZERO_COORDINATE",
            OccurrenceIssue::CoordinateOutOfRange => "COORDINATE_OUT_OF_RANGE",
            OccurrenceIssue::CoordinateInvalid => "COORDINATE_INVALID",
            OccurrenceIssue::CoordinateRounded => "COORDINATE_ROUNDED",
            OccurrenceIssue::GeodeticDatumInvalid => "GEODETIC_DATUM_INVALID",
            OccurrenceIssue::GeodeticDatumAssumedWgs84 => "GEODETIC_DATUM_ASSUMED_WGS84",
            OccurrenceIssue::CoordinateReprojected => "COORDINATE_REPROJECTED",
            OccurrenceIssue::CoordinateReprojectionFailed => "COORDINATE_REPROJECTION_FAILED",
            OccurrenceIssue::CoordinateReprojectionSuspicious => {
                "COORDINATE_REPROJECTION_SUSPICIOUS"
            }
            OccurrenceIssue::CoordinateAccuracyInvalid => "COORDINATE_ACCURACY_INVALID",
            OccurrenceIssue::CoordinatePrecisionInvalid => "COORDINATE_PRECISION_INVALID",
            OccurrenceIssue::CoordinateUncertaintyMetersInvalid => {
                "COORDINATE_UNCERTAINTY_METERS_INVALID"
            }
            OccurrenceIssue::CoordinatePrecisionUncertaintyMismatch => {
                "COORDINATE_PRECISION_UNCERTAINTY_MISMATCH"
            }
            OccurrenceIssue::CountryCoordinateMismatch => "COUNTRY_COORDINATE_MISMATCH",
            OccurrenceIssue::CountryMismatch => "COUNTRY_MISMATCH",
            OccurrenceIssue::CountryInvalid => "COUNTRY_INVALID",
            OccurrenceIssue::CountryDerivedFromCoordinates => "COUNTRY_DERIVED_FROM_COORDINATES",
            OccurrenceIssue::ContinentCountryMismatch => "CONTINENT_COUNTRY_MISMATCH",
            OccurrenceIssue::ContinentInvalid => "CONTINENT_INVALID",
            OccurrenceIssue::ContinentDerivedFromCoordinates => {
                "CONTINENT_DERIVED_FROM_COORDINATES"
            }
            OccurrenceIssue::PresumedSwappedCoordinate => "PRESUMED_SWAPPED_COORDINATE",
            OccurrenceIssue::PresumedNegatedLongitude => "PRESUMED_NEGATED_LONGITUDE",
            OccurrenceIssue::PresumedNegatedLatitude => "PRESUMED_NEGATED_LATITUDE",
            OccurrenceIssue::RecordedDateMismatch => "RECORDED_DATE_MISMATCH",
            OccurrenceIssue::RecordedDateInvalid => "RECORDED_DATE_INVALID",
            OccurrenceIssue::RecordedDateUnlikely => "RECORDED_DATE_UNLIKELY",
            OccurrenceIssue::TaxonMatchFuzzy => "TAXON_MATCH_FUZZY",
            OccurrenceIssue::TaxonMatchHigherrank => "TAXON_MATCH_HIGHERRANK",
            OccurrenceIssue::TaxonMatchNone => "TAXON_MATCH_NONE",
            OccurrenceIssue::DepthNotMetric => "DEPTH_NOT_METRIC",
            OccurrenceIssue::DepthUnlikely => "DEPTH_UNLIKELY",
            OccurrenceIssue::DepthMinMaxSwapped => "DEPTH_MIN_MAX_SWAPPED",
            OccurrenceIssue::DepthNonNumeric => "DEPTH_NON_NUMERIC",
            OccurrenceIssue::ElevationUnlikely => "ELEVATION_UNLIKELY",
            OccurrenceIssue::ElevationMinMaxSwapped => "ELEVATION_MIN_MAX_SWAPPED",
            OccurrenceIssue::ElevationNotMetric => "ELEVATION_NOT_METRIC",
            OccurrenceIssue::ElevationNonNumeric => "ELEVATION_NON_NUMERIC",
            OccurrenceIssue::ModifiedDateInvalid => "MODIFIED_DATE_INVALID",
            OccurrenceIssue::ModifiedDateUnlikely => "MODIFIED_DATE_UNLIKELY",
            OccurrenceIssue::IdentifiedDateUnlikely => "IDENTIFIED_DATE_UNLIKELY",
            OccurrenceIssue::IdentifiedDateInvalid => "IDENTIFIED_DATE_INVALID",
            OccurrenceIssue::BasisOfRecordInvalid => "BASIS_OF_RECORD_INVALID",
            OccurrenceIssue::TypeStatusInvalid => "TYPE_STATUS_INVALID",
            OccurrenceIssue::MultimediaDateInvalid => "MULTIMEDIA_DATE_INVALID",
            OccurrenceIssue::MultimediaUriInvalid => "MULTIMEDIA_URI_INVALID",
            OccurrenceIssue::ReferencesUriInvalid => "REFERENCES_URI_INVALID",
            OccurrenceIssue::InterpretationError => "INTERPRETATION_ERROR",
            OccurrenceIssue::IndividualCountInvalid => "INDIVIDUAL_COUNT_INVALID",
        }
    }
}

impl InterpretationRemark for OccurrenceIssue {
    fn id(&self) -> &'static str {
        self.as_str()
    }

    fn severity(&self) -> Severity {
        match self {
            OccurrenceIssue::CoordinateRounded
            | OccurrenceIssue::GeodeticDatumAssumedWgs84
            | OccurrenceIssue::CoordinateReprojected => Severity::Info,
            OccurrenceIssue::InterpretationError => Severity::Error,
            _ => Severity::Warning,
        }
    }

    fn related_terms(&self) -> &'static [Term] {
        match self {
            OccurrenceIssue::ZeroCoordinate
            | OccurrenceIssue::CoordinateOutOfRange
            | OccurrenceIssue::CoordinateInvalid
            | OccurrenceIssue::CoordinateRounded
            | OccurrenceIssue::PresumedSwappedCoordinate
            | OccurrenceIssue::PresumedNegatedLongitude
            | OccurrenceIssue::PresumedNegatedLatitude => term_group::COORDINATE_TERMS_NO_DATUM,
            OccurrenceIssue::CoordinateReprojected
            | OccurrenceIssue::CoordinateReprojectionFailed
            | OccurrenceIssue::CoordinateReprojectionSuspicious => term_group::COORDINATE_TERMS,
            OccurrenceIssue::GeodeticDatumInvalid
            | OccurrenceIssue::GeodeticDatumAssumedWgs84 => {
                &[Term::Dwc(DwcTerm::GeodeticDatum)]
            }
            OccurrenceIssue::CoordinatePrecisionInvalid => {
                &[Term::Dwc(DwcTerm::CoordinatePrecision)]
            }
            OccurrenceIssue::CoordinateUncertaintyMetersInvalid => {
                &[Term::Dwc(DwcTerm::CoordinateUncertaintyInMeters)]
            }
            OccurrenceIssue::CountryCoordinateMismatch
            | OccurrenceIssue::CountryDerivedFromCoordinates => {
                term_group::COORDINATE_COUNTRY_TERMS
            }
            OccurrenceIssue::CountryMismatch | OccurrenceIssue::CountryInvalid => {
                term_group::COUNTRY_TERMS
            }
            OccurrenceIssue::RecordedDateMismatch
            | OccurrenceIssue::RecordedDateInvalid
            | OccurrenceIssue::RecordedDateUnlikely => term_group::RECORDED_DATE_TERMS,
            OccurrenceIssue::TaxonMatchFuzzy
            | OccurrenceIssue::TaxonMatchHigherrank
            | OccurrenceIssue::TaxonMatchNone => term_group::TAXONOMY_TERMS,
            OccurrenceIssue::DepthNotMetric
            | OccurrenceIssue::DepthUnlikely
            | OccurrenceIssue::DepthMinMaxSwapped
            | OccurrenceIssue::DepthNonNumeric => term_group::DEPTH_TERMS,
            OccurrenceIssue::ElevationUnlikely
            | OccurrenceIssue::ElevationMinMaxSwapped
            | OccurrenceIssue::ElevationNotMetric
            | OccurrenceIssue::ElevationNonNumeric => term_group::ELEVATION_TERMS,
            OccurrenceIssue::ModifiedDateInvalid | OccurrenceIssue::ModifiedDateUnlikely => {
                &[Term::Dc(DcTerm::Modified)]
            }
            OccurrenceIssue::IdentifiedDateUnlikely | OccurrenceIssue::IdentifiedDateInvalid => {
                &[Term::Dwc(DwcTerm::DateIdentified)]
            }
            OccurrenceIssue::BasisOfRecordInvalid => &[Term::Dwc(DwcTerm::BasisOfRecord)],
            OccurrenceIssue::TypeStatusInvalid => &[Term::Dwc(DwcTerm::TypeStatus)],
            OccurrenceIssue::ReferencesUriInvalid => &[Term::Dc(DcTerm::References)],
            OccurrenceIssue::IndividualCountInvalid => &[Term::Dwc(DwcTerm::IndividualCount)],
            OccurrenceIssue::CoordinateAccuracyInvalid
            | OccurrenceIssue::CoordinatePrecisionUncertaintyMismatch
            | OccurrenceIssue::ContinentCountryMismatch
            | OccurrenceIssue::ContinentInvalid
            | OccurrenceIssue::ContinentDerivedFromCoordinates
            | OccurrenceIssue::MultimediaDateInvalid
            | OccurrenceIssue::MultimediaUriInvalid
            | OccurrenceIssue::InterpretationError => &[],
        }
    }

    fn is_deprecated(&self) -> bool {
        matches!(
            self,
            OccurrenceIssue::CoordinateAccuracyInvalid
                | OccurrenceIssue::CoordinatePrecisionUncertaintyMismatch
        )
    }
}

impl fmt::Display for OccurrenceIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OccurrenceIssue {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OccurrenceIssue::ALL
            .iter()
            .find(|issue| issue.as_str() == s)
            .copied()
            .ok_or_else(|| VocabularyError::UnknownRemarkId(s.to_string()))
    }
}
