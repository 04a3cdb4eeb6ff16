//! # occurrence-search
//!
//! Range-expression parsing for biodiversity occurrence search queries.
//!
//! A search parameter value like `"10,20"` encodes an inclusive interval.
//! This crate parses such expressions into typed [`SearchRange`] values
//! over three scalar domains, and classifies inputs that are not ranges so
//! callers can fall back to exact-match semantics.
//!
//! ## Grammar
//!
//! | Input | Meaning |
//! |-------|---------|
//! | `10,20` | lower = 10, upper = 20, both inclusive |
//! | `*,20` | no lower bound, upper = 20 |
//! | `10,*` | lower = 10, no upper bound |
//! | `10.3` | not a range (exact-match scalar) |
//! | `*,*` | rejected: a range needs at least one bound |
//! | `10,20,30` | rejected: exactly one comma is allowed |
//!
//! Tokens are trimmed of surrounding whitespace; no other normalization is
//! performed. Accepted domains are integers (`i64`), decimals (`f64`) and
//! ISO-8601 calendar dates (`chrono::NaiveDate`).
//!
//! ## Usage
//!
//! ```rust
//! use occurrence_search::{parse_decimal_range, is_decimal_range, RangeError};
//!
//! let range = parse_decimal_range("10.1,20.2").unwrap();
//! assert_eq!(range.lower(), Some(10.1));
//! assert_eq!(range.upper(), Some(20.2));
//!
//! // A plain scalar is reported distinctly so callers can fall back to
//! // exact-match semantics.
//! assert!(matches!(
//!     parse_decimal_range("10.3"),
//!     Err(RangeError::NotARange(_))
//! ));
//!
//! // Structurally a range, but the right side fails decimal parsing.
//! assert!(is_decimal_range("10,abc"));
//! assert!(matches!(
//!     parse_decimal_range("10,abc"),
//!     Err(RangeError::InvalidRange { .. })
//! ));
//! ```
//!
//! Parsing is pure and stateless: no I/O, no shared state, safe to call
//! concurrently without synchronization.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod parser;
mod range;

pub use error::{RangeError, RangeResult};
pub use parser::{
    is_date_range, is_decimal_range, is_integer_range, is_range, parse_date_range,
    parse_decimal_range, parse_integer_range, parse_range, WILDCARD,
};
pub use range::{RangeValue, SearchRange};
