use proptest::prelude::*;
use tether_wrappers::prelude::*;

proptest! {
    #[test]
    fn reads_stay_within_bounds(
        (lower, upper) in (any::<i64>(), any::<i64>()).prop_map(|(a, b)| (a.min(b), a.max(b))),
        initial in any::<i64>(),
        writes in proptest::collection::vec(any::<i64>(), 0..32),
    ) {
        let mut c = Constrained::new(initial, lower, upper).unwrap();
        prop_assert!(lower <= *c.get() && *c.get() <= upper);

        for v in writes {
            c.set(v);
            prop_assert!(lower <= *c.get() && *c.get() <= upper);
            if (lower..=upper).contains(&v) {
                prop_assert_eq!(*c.get(), v);
            }
        }
    }

    #[test]
    fn float_reads_stay_within_bounds(
        lower in -1.0e6f64..0.0,
        upper in 0.0f64..1.0e6,
        v in any::<f64>(),
    ) {
        let mut c = Constrained::new(0.0, lower, upper).unwrap();
        c.set(v);
        prop_assert!(lower <= *c.get() && *c.get() <= upper);
    }

    #[test]
    fn inverted_bounds_always_fail(a in any::<i32>(), b in any::<i32>(), initial in any::<i32>()) {
        prop_assume!(a != b);
        let (lower, upper) = (a.max(b), a.min(b));
        let result = Constrained::new(initial, lower, upper);
        let invalid = matches!(result, Err(WrapperError::InvalidRange { .. }));
        prop_assert!(invalid);
    }

    #[test]
    fn min_length_never_stores_short_values(min in 0usize..8, writes in proptest::collection::vec(".{0,10}", 0..16)) {
        let initial = "#".repeat(min);
        let mut s = MinLength::new(initial, min);
        for w in writes {
            let accepted = s.set(w.clone());
            prop_assert_eq!(accepted, w.chars().count() >= min);
            prop_assert!(s.get().chars().count() >= min);
        }
    }
}
