use std::fmt::Display;

/// Failure to establish a range invariant.
///
/// Returned by the `try_new` constructors.  The panicking surface
/// ([`crate::check`] and the `new` constructors) reports the same
/// condition as an unrecoverable contract failure instead.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("Range check failed: lower ({lower}) <= upper ({upper}) == false")]
    InvalidBounds { lower: String, upper: String },
}

impl RangeError {
    pub(crate) fn invalid_bounds<T: Display>(lower: &T, upper: &T) -> Self {
        RangeError::InvalidBounds {
            lower: lower.to_string(),
            upper: upper.to_string(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_display() {
        let err = RangeError::invalid_bounds(&1, &0);
        assert_eq!(
            err.to_string(),
            "Range check failed: lower (1) <= upper (0) == false"
        );
    }
}
