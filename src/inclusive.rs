use crate::check::check_less_equal;
use crate::domain::RangeDomain;
use crate::errors::RangeError;
use crate::half_open::HalfOpenRange;
use std::fmt;
use std::hash::{Hash, Hasher};

/// An immutable inclusive range `[lower, upper]`: both bounds are members.
///
/// The invariant `lower <= upper` is established at construction and holds
/// for the lifetime of the value.  Ranges are plain values with no identity
/// beyond their bounds: equality, hashing and `Display` are structural over
/// `(lower, upper)`.
///
/// For `f64` ranges, equality and hashing compare the bit patterns of the
/// bounds, so `[-0.0, 1.0]` and `[0.0, 1.0]` are distinct values even
/// though their bounds compare numerically equal.  Containment predicates
/// use the ordinary IEEE-754 ordering.
#[derive(Clone, Copy, Debug)]
pub struct InclusiveRange<T: RangeDomain> {
    pub(crate) lower: T,
    pub(crate) upper: T,
}

impl<T: RangeDomain> InclusiveRange<T> {
    /// Construct the range `[lower, upper]`.
    ///
    /// # Panics
    ///
    /// Panics if `lower > upper` (or if the bounds are unordered, as with
    /// a NaN bound).  A violation is a contract failure in the caller, not
    /// a recoverable condition; use [`InclusiveRange::try_new`] where the
    /// bounds are not known to be valid.
    #[must_use]
    pub fn new(lower: T, upper: T) -> Self {
        let lower = check_less_equal(lower, "lower", upper.clone(), "upper");
        Self { lower, upper }
    }

    /// Construct the range `[lower, upper]`, reporting invalid bounds as
    /// an error instead of panicking.
    pub fn try_new(lower: T, upper: T) -> Result<Self, RangeError> {
        if lower <= upper {
            Ok(Self { lower, upper })
        } else {
            Err(RangeError::invalid_bounds(&lower, &upper))
        }
    }

    /// The lower bound (a member of the range).
    #[must_use]
    pub fn lower(&self) -> &T {
        &self.lower
    }

    /// The upper bound (a member of the range).
    #[must_use]
    pub fn upper(&self) -> &T {
        &self.upper
    }

    /// The number of values in the range, `upper - lower + 1`.
    ///
    /// Integer domains compute this with wrapping arithmetic, so the
    /// interval of a full-width range such as `[0, i32::MAX]` is the
    /// two's-complement result.
    #[must_use]
    pub fn interval(&self) -> T {
        T::inclusive_interval(&self.lower, &self.upper)
    }

    /// Whether `lower <= value <= upper`.
    #[must_use]
    pub fn includes_value(&self, value: &T) -> bool {
        self.lower <= *value && *value <= self.upper
    }

    /// Whether this range lies within `other`:
    /// `self.lower >= other.lower && self.upper <= other.upper`.
    #[must_use]
    pub fn is_included_in(&self, other: &Self) -> bool {
        self.lower >= other.lower && self.upper <= other.upper
    }

    /// Whether this range lies within the half-open range `other`,
    /// comparing raw bounds: `self.lower >= other.lower &&
    /// self.upper <= other.upper`.
    ///
    /// The upper bounds are compared directly, with no adjustment for the
    /// exclusivity of `other.upper`; so `[0, 10]` counts as included in
    /// `[0, 10)` even though `10` is not a member of the latter.
    #[must_use]
    pub fn is_included_in_half_open(&self, other: &HalfOpenRange<T>) -> bool {
        self.lower >= other.lower && self.upper <= other.upper
    }

    /// A new range with the lower bound replaced, re-validated.
    ///
    /// # Panics
    ///
    /// Panics if `lower > self.upper`.
    #[must_use]
    pub fn with_lower(&self, lower: T) -> Self {
        Self::new(lower, self.upper.clone())
    }

    /// A new range with the upper bound replaced, re-validated.
    ///
    /// # Panics
    ///
    /// Panics if `self.lower > upper`.
    #[must_use]
    pub fn with_upper(&self, upper: T) -> Self {
        Self::new(self.lower.clone(), upper)
    }
}

impl<T: RangeDomain> PartialEq for InclusiveRange<T> {
    fn eq(&self, other: &Self) -> bool {
        self.lower.eq_exact(&other.lower) && self.upper.eq_exact(&other.upper)
    }
}

impl<T: RangeDomain> Eq for InclusiveRange<T> {}

impl<T: RangeDomain> Hash for InclusiveRange<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.lower.hash_exact(state);
        self.upper.hash_exact(state);
    }
}

impl<T: RangeDomain> fmt::Display for InclusiveRange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}
