//! Assertion-style range and comparison checks.
//!
//! Each function validates a value (or a range) against a named bound or
//! outer range, returning the value unchanged on success.  On failure it
//! panics with a message naming both operands and their values, e.g.
//! `Range check failed: x (0) > lower (1) == false`.
//!
//! The functions are intended for use in the manner of assertions: a
//! correct program behaves identically with every check removed.  A
//! failure indicates a bug in the caller, never a runtime condition to
//! recover from, which is why the failure surface is a panic rather than
//! a `Result`.

use crate::domain::RangeDomain;
use crate::half_open::HalfOpenRange;
use crate::inclusive::InclusiveRange;

/// Assert that `x` (named `x_name`) is greater than `lower` (named
/// `lower_name`), returning `x`.
///
/// # Panics
///
/// Panics if `x <= lower`, or if the values are unordered.
#[must_use]
pub fn check_greater<T: RangeDomain>(
    x: T,
    x_name: &str,
    lower: T,
    lower_name: &str,
) -> T {
    if x > lower {
        return x;
    }
    panic!(
        "Range check failed: {x_name} ({x}) > {lower_name} ({lower}) \
         == false"
    );
}

/// Assert that `x` (named `x_name`) is greater than or equal to `lower`
/// (named `lower_name`), returning `x`.
///
/// # Panics
///
/// Panics if `x < lower`, or if the values are unordered.
#[must_use]
pub fn check_greater_equal<T: RangeDomain>(
    x: T,
    x_name: &str,
    lower: T,
    lower_name: &str,
) -> T {
    if x >= lower {
        return x;
    }
    panic!(
        "Range check failed: {x_name} ({x}) >= {lower_name} ({lower}) \
         == false"
    );
}

/// Assert that `x` (named `x_name`) is less than `upper` (named
/// `upper_name`), returning `x`.
///
/// # Panics
///
/// Panics if `x >= upper`, or if the values are unordered.
#[must_use]
pub fn check_less<T: RangeDomain>(
    x: T,
    x_name: &str,
    upper: T,
    upper_name: &str,
) -> T {
    if x < upper {
        return x;
    }
    panic!(
        "Range check failed: {x_name} ({x}) < {upper_name} ({upper}) \
         == false"
    );
}

/// Assert that `x` (named `x_name`) is less than or equal to `upper`
/// (named `upper_name`), returning `x`.
///
/// This is the check through which every range constructor enforces its
/// `lower <= upper` invariant.
///
/// # Panics
///
/// Panics if `x > upper`, or if the values are unordered.
#[must_use]
pub fn check_less_equal<T: RangeDomain>(
    x: T,
    x_name: &str,
    upper: T,
    upper_name: &str,
) -> T {
    if x <= upper {
        return x;
    }
    panic!(
        "Range check failed: {x_name} ({x}) <= {upper_name} ({upper}) \
         == false"
    );
}

/// Assert that `x` (named `x_name`) is included in the inclusive range
/// `range` (named `range_name`), returning `x`.
///
/// # Panics
///
/// Panics if `range.includes_value(&x)` does not hold.
#[must_use]
pub fn check_included_in<T: RangeDomain>(
    x: T,
    x_name: &str,
    range: &InclusiveRange<T>,
    range_name: &str,
) -> T {
    if range.includes_value(&x) {
        return x;
    }
    panic!(
        "Range check failed: {} <= {x_name} ({x}) <= {} ({range_name}) \
         == false",
        range.lower(),
        range.upper(),
    );
}

/// Assert that `x` (named `x_name`) is included in the half-open range
/// `range` (named `range_name`), returning `x`.
///
/// # Panics
///
/// Panics if `range.includes_value(&x)` does not hold.
#[must_use]
pub fn check_included_in_half_open<T: RangeDomain>(
    x: T,
    x_name: &str,
    range: &HalfOpenRange<T>,
    range_name: &str,
) -> T {
    if range.includes_value(&x) {
        return x;
    }
    panic!(
        "Range check failed: {} <= {x_name} ({x}) <= {} ({range_name}) \
         == false",
        range.lower(),
        range.upper(),
    );
}

/// Assert that `inner` (named `inner_name`) is included in the inclusive
/// range `outer` (named `outer_name`), returning `inner`.
///
/// # Panics
///
/// Panics if `inner.is_included_in(outer)` does not hold.
#[must_use]
pub fn check_range_included_in<T: RangeDomain>(
    inner: InclusiveRange<T>,
    inner_name: &str,
    outer: &InclusiveRange<T>,
    outer_name: &str,
) -> InclusiveRange<T> {
    if inner.is_included_in(outer) {
        return inner;
    }
    panic!(
        "Range check failed: Inner range {inner_name} ({inner}) not \
         included in outer range {outer_name} ({outer})"
    );
}

/// Assert that `inner` (named `inner_name`) is included in the half-open
/// range `outer` (named `outer_name`), returning `inner`.
///
/// # Panics
///
/// Panics if `inner.is_included_in(outer)` does not hold.
#[must_use]
pub fn check_range_included_in_half_open<T: RangeDomain>(
    inner: HalfOpenRange<T>,
    inner_name: &str,
    outer: &HalfOpenRange<T>,
    outer_name: &str,
) -> HalfOpenRange<T> {
    if inner.is_included_in(outer) {
        return inner;
    }
    panic!(
        "Range check failed: Inner range {inner_name} ({inner}) not \
         included in outer range {outer_name} ({outer})"
    );
}
