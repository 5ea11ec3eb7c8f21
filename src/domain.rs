use num_bigint::BigInt;
use num_traits::One;
use std::fmt::{Debug, Display};
use std::hash::{Hash, Hasher};

/// A numeric domain over which ranges can be formed.
///
/// The trait provides the two interval computations (the number of values
/// in `[lower, upper]` and in `[lower, upper)`) together with the exact
/// equality and hashing used by the range types.  "Exact" matters for
/// floating point: `eq_exact` compares bit patterns, so two ranges are
/// equal only when their bounds are the same machine values, while the
/// containment predicates keep using the usual IEEE-754 ordering.
///
/// Implementations are provided for `i32`, `i64`, `f64` and
/// [`BigInt`].  The trait is public so that callers can adopt
/// further domains.
pub trait RangeDomain: Clone + PartialOrd + Display + Debug {
    /// The number of values in `[lower, upper]`, i.e. `upper - lower + 1`.
    fn inclusive_interval(lower: &Self, upper: &Self) -> Self;

    /// The number of values in `[lower, upper)`, i.e. `upper - lower`.
    fn half_open_interval(lower: &Self, upper: &Self) -> Self;

    /// Whether the two values are identical (bit-level for floats).
    fn eq_exact(&self, other: &Self) -> bool;

    /// Hash the value, consistently with [`RangeDomain::eq_exact`].
    fn hash_exact<H: Hasher>(&self, state: &mut H);
}

// The integer domains use wrapping arithmetic: the width of a full-domain
// range such as [0, i32::MAX] does not fit in the domain itself, and the
// interval of such a range is defined as the two's-complement result.
macro_rules! int_domain {
    ($t:ty, $write:ident) => {
        impl RangeDomain for $t {
            fn inclusive_interval(lower: &Self, upper: &Self) -> Self {
                upper.wrapping_sub(*lower).wrapping_add(1)
            }

            fn half_open_interval(lower: &Self, upper: &Self) -> Self {
                upper.wrapping_sub(*lower)
            }

            fn eq_exact(&self, other: &Self) -> bool {
                self == other
            }

            fn hash_exact<H: Hasher>(&self, state: &mut H) {
                state.$write(*self);
            }
        }
    };
}

int_domain!(i32, write_i32);
int_domain!(i64, write_i64);

impl RangeDomain for f64 {
    fn inclusive_interval(lower: &Self, upper: &Self) -> Self {
        (upper - lower) + 1.0
    }

    fn half_open_interval(lower: &Self, upper: &Self) -> Self {
        upper - lower
    }

    fn eq_exact(&self, other: &Self) -> bool {
        self.to_bits() == other.to_bits()
    }

    fn hash_exact<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.to_bits());
    }
}

impl RangeDomain for BigInt {
    fn inclusive_interval(lower: &Self, upper: &Self) -> Self {
        (upper - lower) + BigInt::one()
    }

    fn half_open_interval(lower: &Self, upper: &Self) -> Self {
        upper - lower
    }

    fn eq_exact(&self, other: &Self) -> bool {
        self == other
    }

    fn hash_exact<H: Hasher>(&self, state: &mut H) {
        self.hash(state);
    }
}
