//! Range-expression parser for search query validation.
//!
//! The grammar is deliberately strict: an expression is split on exactly
//! one comma into two tokens, each trimmed and interpreted either as the
//! wildcard `*` (bound absent) or as a scalar of the requested domain.
//! Anything else is rejected outright; there is no fallback or partial
//! interpretation.

use chrono::NaiveDate;
use nom::{
    bytes::complete::take_while, character::complete::char, combinator::all_consuming,
    sequence::separated_pair, IResult,
};

use crate::error::{RangeError, RangeResult};
use crate::range::{RangeValue, SearchRange};

/// The wildcard marker denoting an absent bound.
pub const WILDCARD: &str = "*";

/// Parses a range expression over an arbitrary scalar domain.
///
/// # Outcomes
///
/// - a [`SearchRange`] when the input is a well-formed range;
/// - [`RangeError::NotARange`] when the input has no comma but is a valid
///   scalar of the domain (callers fall back to exact-match semantics);
/// - [`RangeError::MalformedScalar`] when the input has no comma and is
///   not a valid scalar either;
/// - [`RangeError::InvalidRange`] for every comma-shaped input that fails:
///   an unparseable side, both sides wildcards, or more than one comma.
///
/// # Examples
///
/// ```rust
/// use occurrence_search::parse_range;
///
/// let range = parse_range::<i64>("10, *").unwrap();
/// assert_eq!(range.lower(), Some(10));
/// assert_eq!(range.upper(), None);
/// ```
pub fn parse_range<T: RangeValue>(input: &str) -> RangeResult<SearchRange<T>> {
    match range_tokens(input) {
        Ok((_, (left, right))) => {
            let lower = parse_bound::<T>(left, input)?;
            let upper = parse_bound::<T>(right, input)?;
            // "*,*" reduces to no bounds at all, which is not a valid query.
            SearchRange::new(lower, upper).ok_or_else(|| RangeError::InvalidRange {
                domain: T::DOMAIN,
                input: input.to_string(),
            })
        }
        Err(_) => {
            if input.contains(',') {
                // More than one comma: not a range, and the commas rule
                // out a scalar fallback too.
                return Err(RangeError::InvalidRange {
                    domain: T::DOMAIN,
                    input: input.to_string(),
                });
            }
            if T::parse_scalar(input.trim()).is_some() {
                Err(RangeError::NotARange(input.to_string()))
            } else {
                Err(RangeError::MalformedScalar {
                    domain: T::DOMAIN,
                    input: input.to_string(),
                })
            }
        }
    }
}

/// Classifies whether an input is structurally a range.
///
/// True iff the input contains exactly one comma and at least one side is
/// a wildcard or a parseable scalar of the domain. Independent of whether
/// a full parse succeeds: `"10,abc"` is a range that fails to parse.
pub fn is_range<T: RangeValue>(input: &str) -> bool {
    match range_tokens(input) {
        Ok((_, (left, right))) => bound_shaped::<T>(left) || bound_shaped::<T>(right),
        Err(_) => false,
    }
}

/// Parses an integer range expression, e.g. `"1,10"` or `"100,*"`.
pub fn parse_integer_range(input: &str) -> RangeResult<SearchRange<i64>> {
    parse_range(input)
}

/// Parses a decimal range expression, e.g. `"10.1,20.2"` or `"*,20"`.
pub fn parse_decimal_range(input: &str) -> RangeResult<SearchRange<f64>> {
    parse_range(input)
}

/// Parses an ISO-8601 date range expression, e.g. `"2000-01-01,2009-12-31"`.
pub fn parse_date_range(input: &str) -> RangeResult<SearchRange<NaiveDate>> {
    parse_range(input)
}

/// [`is_range`] over the integer domain.
pub fn is_integer_range(input: &str) -> bool {
    is_range::<i64>(input)
}

/// [`is_range`] over the decimal domain.
pub fn is_decimal_range(input: &str) -> bool {
    is_range::<f64>(input)
}

/// [`is_range`] over the date domain.
pub fn is_date_range(input: &str) -> bool {
    is_range::<NaiveDate>(input)
}

/// Splits the input on exactly one comma.
///
/// Fails when no comma is present, or when a second comma remains after
/// the right token (the grammar admits exactly one).
fn range_tokens(input: &str) -> IResult<&str, (&str, &str)> {
    all_consuming(separated_pair(
        take_while(|c| c != ','),
        char(','),
        take_while(|c| c != ','),
    ))(input)
}

fn parse_bound<T: RangeValue>(token: &str, expression: &str) -> RangeResult<Option<T>> {
    let token = token.trim();
    if token == WILDCARD {
        return Ok(None);
    }
    match T::parse_scalar(token) {
        Some(value) => Ok(Some(value)),
        None => Err(RangeError::InvalidRange {
            domain: T::DOMAIN,
            input: expression.to_string(),
        }),
    }
}

fn bound_shaped<T: RangeValue>(token: &str) -> bool {
    let token = token.trim();
    token == WILDCARD || T::parse_scalar(token).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    mod decimal_ranges {
        use super::*;

        #[test]
        fn test_both_bounds() {
            let range = parse_decimal_range("10,20").unwrap();
            assert_eq!(range.lower(), Some(10.0));
            assert_eq!(range.upper(), Some(20.0));
        }

        #[test]
        fn test_fractional_bounds() {
            let range = parse_decimal_range("10.1,20.2").unwrap();
            assert_eq!(range.lower(), Some(10.1));
            assert_eq!(range.upper(), Some(20.2));
        }

        #[test]
        fn test_signed_bounds() {
            let range = parse_decimal_range("-1,2.0432").unwrap();
            assert_eq!(range.lower(), Some(-1.0));
            assert_eq!(range.upper(), Some(2.0432));
        }

        #[test]
        fn test_lower_wildcard() {
            let range = parse_decimal_range("*,20").unwrap();
            assert_eq!(range.lower(), None);
            assert_eq!(range.upper(), Some(20.0));
        }

        #[test]
        fn test_upper_wildcard() {
            let range = parse_decimal_range("10,*").unwrap();
            assert_eq!(range.lower(), Some(10.0));
            assert_eq!(range.upper(), None);
        }

        #[test]
        fn test_embedded_whitespace_ignored() {
            let spaced = parse_decimal_range("10, *").unwrap();
            let tight = parse_decimal_range("10,*").unwrap();
            assert_eq!(spaced, tight);

            let range = parse_decimal_range(" 10 , 20 ").unwrap();
            assert_eq!(range.lower(), Some(10.0));
            assert_eq!(range.upper(), Some(20.0));
        }

        #[test]
        fn test_inverted_bounds_not_rejected() {
            // Syntactic parser: monotonicity is the caller's concern.
            let range = parse_decimal_range("20,10").unwrap();
            assert!(range.is_inverted());
        }
    }

    mod integer_ranges {
        use super::*;

        #[test]
        fn test_both_bounds() {
            let range = parse_integer_range("1,10").unwrap();
            assert_eq!(range.lower(), Some(1));
            assert_eq!(range.upper(), Some(10));
        }

        #[test]
        fn test_negative_lower() {
            let range = parse_integer_range("-100,*").unwrap();
            assert_eq!(range.lower(), Some(-100));
            assert_eq!(range.upper(), None);
        }

        #[test]
        fn test_fractional_token_rejected() {
            assert!(matches!(
                parse_integer_range("1.5,10"),
                Err(RangeError::InvalidRange { domain: "integer", .. })
            ));
        }
    }

    mod date_ranges {
        use super::*;
        use chrono::NaiveDate;

        #[test]
        fn test_both_bounds() {
            let range = parse_date_range("2000-01-01,2009-12-31").unwrap();
            assert_eq!(range.lower(), NaiveDate::from_ymd_opt(2000, 1, 1));
            assert_eq!(range.upper(), NaiveDate::from_ymd_opt(2009, 12, 31));
        }

        #[test]
        fn test_open_upper() {
            let range = parse_date_range("2020-06-15,*").unwrap();
            assert_eq!(range.lower(), NaiveDate::from_ymd_opt(2020, 6, 15));
            assert_eq!(range.upper(), None);
        }

        #[test]
        fn test_nonexistent_date_rejected() {
            assert!(matches!(
                parse_date_range("2023-02-30,2023-03-01"),
                Err(RangeError::InvalidRange { domain: "date", .. })
            ));
        }

        #[test]
        fn test_single_date_is_not_a_range() {
            assert!(matches!(
                parse_date_range("2023-04-01"),
                Err(RangeError::NotARange(_))
            ));
        }
    }

    mod classification {
        use super::*;

        #[test]
        fn test_scalar_is_not_a_range() {
            assert!(matches!(
                parse_decimal_range("10.3"),
                Err(RangeError::NotARange(_))
            ));
            assert!(!is_decimal_range("10.3"));
        }

        #[test]
        fn test_garbage_is_malformed_scalar() {
            assert!(matches!(
                parse_decimal_range("peter"),
                Err(RangeError::MalformedScalar { domain: "decimal", .. })
            ));
            assert!(!is_decimal_range("peter"));
        }

        #[test]
        fn test_structurally_a_range_but_unparseable() {
            // One comma and a parseable left side: classified as a range
            // even though the full parse fails on the right side.
            assert!(is_decimal_range("10,abc"));
            assert!(matches!(
                parse_decimal_range("10,abc"),
                Err(RangeError::InvalidRange { .. })
            ));
        }

        #[test]
        fn test_wildcard_only_sides_classify_as_range() {
            // Structurally a range, but rejected on parse: no bounds.
            assert!(is_decimal_range("*,*"));
            assert!(matches!(
                parse_decimal_range("*,*"),
                Err(RangeError::InvalidRange { .. })
            ));
        }

        #[test]
        fn test_neither_side_shaped() {
            assert!(!is_decimal_range("abc,def"));
        }

        #[test]
        fn test_classification_is_domain_specific() {
            assert!(is_decimal_range("1.5,10"));
            assert!(!is_integer_range("1.5,x"));
            assert!(is_date_range("2020-01-01,x"));
            assert!(!is_date_range("10,20"));
        }
    }

    mod error_handling {
        use super::*;

        #[test]
        fn test_two_commas_rejected() {
            assert!(matches!(
                parse_decimal_range("10,20,30"),
                Err(RangeError::InvalidRange { .. })
            ));
            assert!(!is_decimal_range("10,20,30"));
        }

        #[test]
        fn test_empty_input() {
            assert!(matches!(
                parse_decimal_range(""),
                Err(RangeError::MalformedScalar { .. })
            ));
            assert!(!is_decimal_range(""));
        }

        #[test]
        fn test_empty_side_rejected() {
            assert!(matches!(
                parse_decimal_range("10,"),
                Err(RangeError::InvalidRange { .. })
            ));
            assert!(matches!(
                parse_decimal_range(",20"),
                Err(RangeError::InvalidRange { .. })
            ));
        }

        #[test]
        fn test_lone_wildcard_is_malformed_scalar() {
            assert!(matches!(
                parse_decimal_range("*"),
                Err(RangeError::MalformedScalar { .. })
            ));
        }

        #[test]
        fn test_whitespace_only_input() {
            assert!(matches!(
                parse_decimal_range("   "),
                Err(RangeError::MalformedScalar { .. })
            ));
        }
    }
}
