//! Typed interval model for search query ranges.

use std::fmt;

use chrono::NaiveDate;

/// A scalar domain over which range expressions can be parsed.
///
/// Implemented for the three domains accepted by occurrence search
/// queries: `i64` (integer), `f64` (decimal) and [`NaiveDate`] (date).
pub trait RangeValue: Copy + PartialOrd + fmt::Display + Sized {
    /// Domain name used in error messages.
    const DOMAIN: &'static str;

    /// Parses a single scalar token of this domain.
    ///
    /// Tokens are already whitespace-trimmed. Returns `None` when the
    /// token is not a valid scalar; there is no partial interpretation.
    fn parse_scalar(token: &str) -> Option<Self>;
}

impl RangeValue for i64 {
    const DOMAIN: &'static str = "integer";

    fn parse_scalar(token: &str) -> Option<Self> {
        token.parse().ok()
    }
}

impl RangeValue for f64 {
    const DOMAIN: &'static str = "decimal";

    fn parse_scalar(token: &str) -> Option<Self> {
        // Non-finite values are rejected: a query bound must be
        // comparable against record values.
        token.parse().ok().filter(|v: &f64| v.is_finite())
    }
}

impl RangeValue for NaiveDate {
    const DOMAIN: &'static str = "date";

    /// The canonical date format is the ISO-8601 calendar date
    /// (`YYYY-MM-DD`).
    fn parse_scalar(token: &str) -> Option<Self> {
        NaiveDate::parse_from_str(token, "%Y-%m-%d").ok()
    }
}

/// An inclusive interval with independently optional bounds.
///
/// At least one bound is always present: an interval with neither bound
/// is not a valid search range and cannot be constructed.
///
/// Bounds are never reordered. A range whose lower bound exceeds its
/// upper bound is structurally valid; callers that need monotonic ranges
/// detect that case with [`is_inverted`](Self::is_inverted).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchRange<T> {
    lower: Option<T>,
    upper: Option<T>,
}

impl<T: Copy> SearchRange<T> {
    /// Creates a range from optional bounds.
    ///
    /// Returns `None` when both bounds are absent.
    pub fn new(lower: Option<T>, upper: Option<T>) -> Option<Self> {
        if lower.is_none() && upper.is_none() {
            return None;
        }
        Some(Self { lower, upper })
    }

    /// A range bounded on both sides: `lower,upper`.
    pub fn closed(lower: T, upper: T) -> Self {
        Self {
            lower: Some(lower),
            upper: Some(upper),
        }
    }

    /// A range with no upper bound: `lower,*`.
    pub fn at_least(lower: T) -> Self {
        Self {
            lower: Some(lower),
            upper: None,
        }
    }

    /// A range with no lower bound: `*,upper`.
    pub fn at_most(upper: T) -> Self {
        Self {
            lower: None,
            upper: Some(upper),
        }
    }

    /// The inclusive lower bound, if present.
    pub fn lower(&self) -> Option<T> {
        self.lower
    }

    /// The inclusive upper bound, if present.
    pub fn upper(&self) -> Option<T> {
        self.upper
    }

    /// True if the range has a lower bound.
    pub fn has_lower_bound(&self) -> bool {
        self.lower.is_some()
    }

    /// True if the range has an upper bound.
    pub fn has_upper_bound(&self) -> bool {
        self.upper.is_some()
    }
}

impl<T: Copy + PartialOrd> SearchRange<T> {
    /// True if both bounds are present and the lower exceeds the upper.
    ///
    /// Such ranges parse successfully; flagging them is the caller's
    /// decision.
    pub fn is_inverted(&self) -> bool {
        match (self.lower, self.upper) {
            (Some(lower), Some(upper)) => lower > upper,
            _ => false,
        }
    }

    /// True if the value falls within the range. Both bounds are
    /// inclusive; an absent bound matches everything on that side.
    pub fn contains(&self, value: T) -> bool {
        if let Some(lower) = self.lower {
            if value < lower {
                return false;
            }
        }
        if let Some(upper) = self.upper {
            if value > upper {
                return false;
            }
        }
        true
    }
}

impl<T: fmt::Display> fmt::Display for SearchRange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.lower {
            Some(lower) => write!(f, "{}", lower)?,
            None => write!(f, "*")?,
        }
        write!(f, ",")?;
        match &self.upper {
            Some(upper) => write!(f, "{}", upper),
            None => write!(f, "*"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_unbounded_both_sides() {
        assert!(SearchRange::<i64>::new(None, None).is_none());
        assert!(SearchRange::new(Some(1), None).is_some());
        assert!(SearchRange::new(None, Some(1)).is_some());
    }

    #[test]
    fn test_closed_bounds() {
        let range = SearchRange::closed(10.0, 20.0);
        assert_eq!(range.lower(), Some(10.0));
        assert_eq!(range.upper(), Some(20.0));
        assert!(range.has_lower_bound());
        assert!(range.has_upper_bound());
    }

    #[test]
    fn test_half_open_bounds() {
        let at_least = SearchRange::at_least(10);
        assert_eq!(at_least.lower(), Some(10));
        assert!(!at_least.has_upper_bound());

        let at_most = SearchRange::at_most(20);
        assert_eq!(at_most.upper(), Some(20));
        assert!(!at_most.has_lower_bound());
    }

    #[test]
    fn test_inverted_detection() {
        assert!(SearchRange::closed(20, 10).is_inverted());
        assert!(!SearchRange::closed(10, 20).is_inverted());
        assert!(!SearchRange::closed(10, 10).is_inverted());
        assert!(!SearchRange::at_least(100).is_inverted());
        assert!(!SearchRange::at_most(-100).is_inverted());
    }

    #[test]
    fn test_contains_is_inclusive() {
        let range = SearchRange::closed(10, 20);
        assert!(range.contains(10));
        assert!(range.contains(15));
        assert!(range.contains(20));
        assert!(!range.contains(9));
        assert!(!range.contains(21));
    }

    #[test]
    fn test_contains_open_sides() {
        assert!(SearchRange::at_least(10).contains(i64::MAX));
        assert!(!SearchRange::at_least(10).contains(9));
        assert!(SearchRange::at_most(10).contains(i64::MIN));
        assert!(!SearchRange::at_most(10).contains(11));
    }

    #[test]
    fn test_display_wire_form() {
        assert_eq!(SearchRange::closed(10, 20).to_string(), "10,20");
        assert_eq!(SearchRange::at_least(10).to_string(), "10,*");
        assert_eq!(SearchRange::at_most(20).to_string(), "*,20");
    }

    #[test]
    fn test_decimal_scalar_rejects_non_finite() {
        assert_eq!(f64::parse_scalar("10.5"), Some(10.5));
        assert_eq!(f64::parse_scalar("-1"), Some(-1.0));
        assert!(f64::parse_scalar("NaN").is_none());
        assert!(f64::parse_scalar("inf").is_none());
        assert!(f64::parse_scalar("abc").is_none());
    }

    #[test]
    fn test_date_scalar_iso_format_only() {
        assert_eq!(
            NaiveDate::parse_scalar("2023-04-01"),
            NaiveDate::from_ymd_opt(2023, 4, 1)
        );
        assert!(NaiveDate::parse_scalar("2023-02-30").is_none());
        assert!(NaiveDate::parse_scalar("01/04/2023").is_none());
        assert!(NaiveDate::parse_scalar("2023").is_none());
    }

    #[test]
    fn test_integer_scalar() {
        assert_eq!(i64::parse_scalar("-42"), Some(-42));
        assert!(i64::parse_scalar("4.2").is_none());
        assert!(i64::parse_scalar("").is_none());
    }
}
