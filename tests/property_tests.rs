use checked_ranges::{check_less_equal, HalfOpenRange, InclusiveRange};
use num_bigint::BigInt;
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_copy_of_inclusive(low in -100_i32..100) {
        let r = InclusiveRange::new(low, low + 10);
        prop_assert_eq!(r, r.clone());
        prop_assert_eq!(r, InclusiveRange::new(*r.lower(), *r.upper()));
    }

    #[test]
    fn test_copy_of_half_open(low in -100_i32..100) {
        let r = HalfOpenRange::new(low, low + 10);
        prop_assert_eq!(r, r.clone());
        prop_assert_eq!(r, HalfOpenRange::new(*r.lower(), *r.upper()));
    }

    #[test]
    fn test_copy_of_big(low in -1000_i64..1000) {
        let r = InclusiveRange::new(BigInt::from(low), BigInt::from(low + 10));
        prop_assert_eq!(r.clone(), r.clone());
        prop_assert_eq!(
            r.clone(),
            InclusiveRange::new(r.lower().clone(), r.upper().clone())
        );
    }

    #[test]
    fn test_try_new_agrees_with_invariant(a in -100_i64..100, b in -100_i64..100) {
        let result = InclusiveRange::try_new(a, b);
        prop_assert_eq!(result.is_ok(), a <= b);
        if let Ok(r) = result {
            prop_assert_eq!(*r.lower(), a);
            prop_assert_eq!(*r.upper(), b);
        }
    }

    #[test]
    fn test_intervals(low in -100_i64..100, width in 0_i64..100) {
        let upper = low + width;
        prop_assert_eq!(InclusiveRange::new(low, upper).interval(), width + 1);
        prop_assert_eq!(HalfOpenRange::new(low, upper).interval(), width);
    }

    #[test]
    fn test_with_bounds_reconstruct(low in -50_i32..50, shift in 0_i32..10) {
        let r = InclusiveRange::new(low, low + 20);
        prop_assert_eq!(
            r.with_lower(low + shift),
            InclusiveRange::new(low + shift, low + 20)
        );
        prop_assert_eq!(
            r.with_upper(low + 20 + shift),
            InclusiveRange::new(low, low + 20 + shift)
        );
        // The original is unchanged.
        prop_assert_eq!(r, InclusiveRange::new(low, low + 20));
    }

    #[test]
    fn test_inclusion_reflexive(low in -100_i32..100, width in 0_i32..50) {
        let inc = InclusiveRange::new(low, low + width);
        let half = HalfOpenRange::new(low, low + width);
        prop_assert!(inc.is_included_in(&inc));
        prop_assert!(half.is_included_in(&half));
    }

    #[test]
    fn test_check_is_identity_on_success(x in -100_i64..=100) {
        prop_assert_eq!(check_less_equal(x, "x", 100, "upper"), x);
    }

    #[test]
    fn test_half_open_membership(low in -50_i32..50, v in -100_i32..100) {
        let r = HalfOpenRange::new(low, low + 10);
        prop_assert_eq!(r.includes_value(&v), v >= low && v < low + 10);
    }
}
