//! Predefined ranges.
//!
//! "Natural" ranges cover zero up to the domain's maximum representable
//! value, "positive" ranges one up to the maximum.  The arbitrary-precision
//! domain has no maximum and therefore no predefined ranges.

use crate::inclusive::InclusiveRange;

/// The inclusive range of natural integers, `[0, i32::MAX]`.
pub const NATURAL_I32: InclusiveRange<i32> = InclusiveRange {
    lower: 0,
    upper: i32::MAX,
};

/// The inclusive range of positive integers, `[1, i32::MAX]`.
pub const POSITIVE_I32: InclusiveRange<i32> = InclusiveRange {
    lower: 1,
    upper: i32::MAX,
};

/// The inclusive range of natural long integers, `[0, i64::MAX]`.
pub const NATURAL_I64: InclusiveRange<i64> = InclusiveRange {
    lower: 0,
    upper: i64::MAX,
};

/// The inclusive range of positive long integers, `[1, i64::MAX]`.
pub const POSITIVE_I64: InclusiveRange<i64> = InclusiveRange {
    lower: 1,
    upper: i64::MAX,
};

/// The inclusive range of numbers greater than or equal to zero,
/// `[0.0, f64::MAX]`.
pub const NATURAL_F64: InclusiveRange<f64> = InclusiveRange {
    lower: 0.0,
    upper: f64::MAX,
};

/// The inclusive range of numbers greater than or equal to one,
/// `[1.0, f64::MAX]`.
pub const POSITIVE_F64: InclusiveRange<f64> = InclusiveRange {
    lower: 1.0,
    upper: f64::MAX,
};

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_natural() {
        assert!(NATURAL_I32.includes_value(&0));
        assert!(NATURAL_I32.includes_value(&i32::MAX));
        assert!(!NATURAL_I32.includes_value(&-1));

        assert!(NATURAL_I64.includes_value(&0));
        assert!(NATURAL_I64.includes_value(&i64::MAX));
        assert!(!NATURAL_I64.includes_value(&-1));

        assert!(NATURAL_F64.includes_value(&0.0));
        assert!(NATURAL_F64.includes_value(&f64::MAX));
        assert!(!NATURAL_F64.includes_value(&-1.0));
    }

    #[test]
    fn test_positive() {
        assert!(POSITIVE_I32.includes_value(&1));
        assert!(POSITIVE_I32.includes_value(&i32::MAX));
        assert!(!POSITIVE_I32.includes_value(&0));

        assert!(POSITIVE_I64.includes_value(&1));
        assert!(POSITIVE_I64.includes_value(&i64::MAX));
        assert!(!POSITIVE_I64.includes_value(&0));

        assert!(POSITIVE_F64.includes_value(&1.0));
        assert!(POSITIVE_F64.includes_value(&f64::MAX));
        assert!(!POSITIVE_F64.includes_value(&0.0));
    }

    // The constants are built directly rather than through new(); make
    // sure they satisfy the constructor invariant all the same.
    #[test]
    fn test_valid() {
        assert_eq!(NATURAL_I32, InclusiveRange::new(0, i32::MAX));
        assert_eq!(POSITIVE_I32, InclusiveRange::new(1, i32::MAX));
        assert_eq!(NATURAL_I64, InclusiveRange::new(0, i64::MAX));
        assert_eq!(POSITIVE_I64, InclusiveRange::new(1, i64::MAX));
        assert_eq!(NATURAL_F64, InclusiveRange::new(0.0, f64::MAX));
        assert_eq!(POSITIVE_F64, InclusiveRange::new(1.0, f64::MAX));
    }

    #[test]
    fn test_positive_included_in_natural() {
        assert!(POSITIVE_I32.is_included_in(&NATURAL_I32));
        assert!(!NATURAL_I32.is_included_in(&POSITIVE_I32));
    }
}
