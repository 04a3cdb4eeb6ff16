//! Minimal field-reference catalog.
//!
//! The full Darwin Core term catalog is an external concern; the
//! vocabulary only needs stable, comparable identifiers for the record
//! fields its remarks relate to, so exactly those terms are rendered
//! here across their three namespaces.

use std::fmt;

/// Darwin Core terms (`dwc:` namespace) referenced by remark entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
#[allow(missing_docs)]
pub enum DwcTerm {
    DecimalLatitude,
    DecimalLongitude,
    VerbatimLatitude,
    VerbatimLongitude,
    VerbatimCoordinates,
    GeodeticDatum,
    CoordinatePrecision,
    CoordinateUncertaintyInMeters,
    Country,
    CountryCode,
    EventDate,
    Year,
    Month,
    Day,
    Kingdom,
    Phylum,
    Class,
    Order,
    Family,
    Genus,
    ScientificName,
    ScientificNameAuthorship,
    SpecificEpithet,
    InfraspecificEpithet,
    MinimumDepthInMeters,
    MaximumDepthInMeters,
    MinimumElevationInMeters,
    MaximumElevationInMeters,
    DateIdentified,
    BasisOfRecord,
    TypeStatus,
    IndividualCount,
}

impl DwcTerm {
    /// The term's simple name as published in the Darwin Core standard.
    pub fn simple_name(&self) -> &'static str {
        match self {
            DwcTerm::DecimalLatitude => "decimalLatitude",
            DwcTerm::DecimalLongitude => "decimalLongitude",
            DwcTerm::VerbatimLatitude => "verbatimLatitude",
            DwcTerm::VerbatimLongitude => "verbatimLongitude",
            DwcTerm::VerbatimCoordinates => "verbatimCoordinates",
            DwcTerm::GeodeticDatum => "geodeticDatum",
            DwcTerm::CoordinatePrecision => "coordinatePrecision",
            DwcTerm::CoordinateUncertaintyInMeters => "coordinateUncertaintyInMeters",
            DwcTerm::Country => "country",
            DwcTerm::CountryCode => "countryCode",
            DwcTerm::EventDate => "eventDate",
            DwcTerm::Year => "year",
            DwcTerm::Month => "month",
            DwcTerm::Day => "day",
            DwcTerm::Kingdom => "kingdom",
            DwcTerm::Phylum => "phylum",
            DwcTerm::Class => "class",
            DwcTerm::Order => "order",
            DwcTerm::Family => "family",
            DwcTerm::Genus => "genus",
            DwcTerm::ScientificName => "scientificName",
            DwcTerm::ScientificNameAuthorship => "scientificNameAuthorship",
            DwcTerm::SpecificEpithet => "specificEpithet",
            DwcTerm::InfraspecificEpithet => "infraspecificEpithet",
            DwcTerm::MinimumDepthInMeters => "minimumDepthInMeters",
            DwcTerm::MaximumDepthInMeters => "maximumDepthInMeters",
            DwcTerm::MinimumElevationInMeters => "minimumElevationInMeters",
            DwcTerm::MaximumElevationInMeters => "maximumElevationInMeters",
            DwcTerm::DateIdentified => "dateIdentified",
            DwcTerm::BasisOfRecord => "basisOfRecord",
            DwcTerm::TypeStatus => "typeStatus",
            DwcTerm::IndividualCount => "individualCount",
        }
    }
}

/// Dublin Core terms (`dc:` namespace) referenced by remark entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
#[allow(missing_docs)]
pub enum DcTerm {
    Modified,
    References,
}

impl DcTerm {
    /// The term's simple name as published in the Dublin Core standard.
    pub fn simple_name(&self) -> &'static str {
        match self {
            DcTerm::Modified => "modified",
            DcTerm::References => "references",
        }
    }
}

/// GBIF extension terms (`gbif:` namespace) referenced by remark entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
#[allow(missing_docs)]
pub enum GbifTerm {
    GenericName,
}

impl GbifTerm {
    /// The term's simple name.
    pub fn simple_name(&self) -> &'static str {
        match self {
            GbifTerm::GenericName => "genericName",
        }
    }
}

/// A stable identifier for a record attribute, spanning the three term
/// namespaces the vocabulary draws from.
///
/// Terms compare by equality, hash, and render stably; they are usable as
/// set members and map keys. Simple names are unique across all three
/// namespaces, so the serialized form is the simple name alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum Term {
    /// A Darwin Core term.
    Dwc(DwcTerm),
    /// A Dublin Core term.
    Dc(DcTerm),
    /// A GBIF extension term.
    Gbif(GbifTerm),
}

impl Term {
    /// The term's simple name, e.g. `decimalLatitude`.
    pub fn simple_name(&self) -> &'static str {
        match self {
            Term::Dwc(term) => term.simple_name(),
            Term::Dc(term) => term.simple_name(),
            Term::Gbif(term) => term.simple_name(),
        }
    }

    /// The conventional namespace prefix: `dwc`, `dc` or `gbif`.
    pub fn prefix(&self) -> &'static str {
        match self {
            Term::Dwc(_) => "dwc",
            Term::Dc(_) => "dc",
            Term::Gbif(_) => "gbif",
        }
    }

    /// The namespace URI the term is defined under.
    pub fn namespace(&self) -> &'static str {
        match self {
            Term::Dwc(_) => "http://rs.tdwg.org/dwc/terms/",
            Term::Dc(_) => "http://purl.org/dc/terms/",
            Term::Gbif(_) => "http://rs.gbif.org/terms/1.0/",
        }
    }

    /// The fully qualified term URI, e.g.
    /// `http://rs.tdwg.org/dwc/terms/decimalLatitude`.
    pub fn qualified_name(&self) -> String {
        format!("{}{}", self.namespace(), self.simple_name())
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.prefix(), self.simple_name())
    }
}
