use crate::check::check_less_equal;
use crate::domain::RangeDomain;
use crate::errors::RangeError;
use crate::inclusive::InclusiveRange;
use std::fmt;
use std::hash::{Hash, Hasher};

/// An immutable half-open range `[lower, upper)`: the lower bound is a
/// member, the upper bound is not.
///
/// The invariant `lower <= upper` is established at construction; the
/// range `[a, a)` is valid and contains no values.  Everything said about
/// value semantics on [`InclusiveRange`] (structural equality, bit-level
/// float comparison) applies here as well.
#[derive(Clone, Copy, Debug)]
pub struct HalfOpenRange<T: RangeDomain> {
    pub(crate) lower: T,
    pub(crate) upper: T,
}

impl<T: RangeDomain> HalfOpenRange<T> {
    /// Construct the range `[lower, upper)`.
    ///
    /// # Panics
    ///
    /// Panics if `lower > upper` (or if the bounds are unordered, as with
    /// a NaN bound).  Use [`HalfOpenRange::try_new`] where the bounds are
    /// not known to be valid.
    #[must_use]
    pub fn new(lower: T, upper: T) -> Self {
        let lower = check_less_equal(lower, "lower", upper.clone(), "upper");
        Self { lower, upper }
    }

    /// Construct the range `[lower, upper)`, reporting invalid bounds as
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

    /// The upper bound (not a member of the range).
    #[must_use]
    pub fn upper(&self) -> &T {
        &self.upper
    }

    /// The number of values in the range, `upper - lower`.
    #[must_use]
    pub fn interval(&self) -> T {
        T::half_open_interval(&self.lower, &self.upper)
    }

    /// Whether `lower <= value < upper`.
    #[must_use]
    pub fn includes_value(&self, value: &T) -> bool {
        self.lower <= *value && *value < self.upper
    }

    /// Whether this range lies within `other`:
    /// `self.lower >= other.lower && self.upper <= other.upper`.
    #[must_use]
    pub fn is_included_in(&self, other: &Self) -> bool {
        self.lower >= other.lower && self.upper <= other.upper
    }

    /// Whether this range lies within the inclusive range `other`,
    /// comparing raw bounds: `self.lower >= other.lower &&
    /// self.upper <= other.upper`.
    ///
    /// No allowance is made for this range's upper bound being excluded:
    /// the raw bounds are compared as-is, so `[0, 10)` is included in
    /// `[0, 10]` but not in `[0, 9]`, even for discrete domains where the
    /// two describe the same set of values.
    #[must_use]
    pub fn is_included_in_inclusive(&self, other: &InclusiveRange<T>) -> bool {
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

impl<T: RangeDomain> PartialEq for HalfOpenRange<T> {
    fn eq(&self, other: &Self) -> bool {
        self.lower.eq_exact(&other.lower) && self.upper.eq_exact(&other.upper)
    }
}

impl<T: RangeDomain> Eq for HalfOpenRange<T> {}

impl<T: RangeDomain> Hash for HalfOpenRange<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.lower.hash_exact(state);
        self.upper.hash_exact(state);
    }
}

impl<T: RangeDomain> fmt::Display for HalfOpenRange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.lower, self.upper)
    }
}
