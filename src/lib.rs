//! Immutable numeric ranges with validated bounds, plus assertion-style
//! range checks.
//!
//! Two range kinds are provided, over any domain implementing
//! [`RangeDomain`] (implementations ship for `i32`, `i64`, `f64` and
//! `num_bigint::BigInt`):
//!
//!  |Range    |Constructor              |Members          |Interval
//!  |---------|-------------------------|-----------------|------------------
//!  | `[A,B]` |[`InclusiveRange::new`]  |`A <= v <= B`    |`B - A + 1`
//!  | `[A,B)` |[`HalfOpenRange::new`]   |`A <= v < B`     |`B - A`
//!
//! A range always satisfies `lower <= upper`; the constructors enforce
//! this through the [`check`] module and treat a violation as a contract
//! failure (panic).  `try_new` variants return a [`RangeError`] instead,
//! for bounds not known to be valid.
//!
//! ```
//! use checked_ranges::{HalfOpenRange, InclusiveRange};
//!
//! let r = InclusiveRange::new(0, 9);
//! assert!(r.includes_value(&9));
//! assert_eq!(r.interval(), 10);
//!
//! let h = HalfOpenRange::new(0, 9);
//! assert!(!h.includes_value(&9));
//! assert_eq!(h.interval(), 9);
//! ```
//!
//! The [`check`] module offers the same predicates as standalone
//! assertions for validating function arguments at call sites:
//!
//! ```
//! use checked_ranges::{check_included_in, constants};
//!
//! fn set_retries(count: i32) {
//!     let count = check_included_in(
//!         count, "count", &constants::NATURAL_I32, "natural");
//!     // ...
//!     # let _ = count;
//! }
//! set_retries(3);
//! ```
//!
//! One behavior to be aware of: testing a range's inclusion within a
//! range of the *other* boundary kind compares the raw bounds with no
//! adjustment for exclusivity, so `[0, 10)` is included in `[0, 10]` but
//! not in `[0, 9]`, even over the integers where both describe the same
//! set of values.

pub mod check;
pub mod constants;
pub mod domain;
pub mod errors;
pub mod half_open;
pub mod inclusive;

pub use crate::check::{
    check_greater, check_greater_equal, check_included_in,
    check_included_in_half_open, check_less, check_less_equal,
    check_range_included_in, check_range_included_in_half_open,
};
pub use crate::domain::RangeDomain;
pub use crate::errors::RangeError;
pub use crate::half_open::HalfOpenRange;
pub use crate::inclusive::InclusiveRange;
