// SliceUtils - tests/properties.rs
//
// Property tests for the sequence helpers: length, order and
// non-mutation guarantees over arbitrary inputs.

use proptest::prelude::*;
use sliceutils::core::pipeline::{Predicate, Transform};
use sliceutils::{filter, map, push, push_with, Growth};

/// Predicates covering both operand-free and operand-carrying forms.
fn predicate() -> impl Strategy<Value = Predicate> {
    prop_oneof![
        Just(Predicate::Even),
        Just(Predicate::Odd),
        Just(Predicate::Positive),
        Just(Predicate::Negative),
        Just(Predicate::Zero),
        any::<i64>().prop_map(Predicate::Gt),
        any::<i64>().prop_map(Predicate::Le),
        any::<i64>().prop_map(Predicate::Ne),
    ]
}

/// True if `sub` appears in `full` in order (not necessarily contiguous).
fn is_subsequence(sub: &[i64], full: &[i64]) -> bool {
    let mut rest = full.iter();
    sub.iter().all(|x| rest.any(|y| y == x))
}

proptest! {
    #[test]
    fn prop_filter_is_ordered_subsequence(
        values in prop::collection::vec(any::<i64>(), 0..64),
        p in predicate(),
    ) {
        let original = values.clone();
        let out = filter(&values, |v| p.test(v));

        prop_assert!(out.len() <= values.len());
        prop_assert!(out.iter().all(|v| p.test(v)));
        prop_assert!(is_subsequence(&out, &values));
        // Every element satisfying the predicate is kept.
        prop_assert_eq!(out.len(), values.iter().filter(|v| p.test(v)).count());
        prop_assert_eq!(values, original);
    }

    #[test]
    fn prop_filter_constant_predicates(values in prop::collection::vec(any::<i64>(), 0..64)) {
        prop_assert_eq!(filter(&values, |_| true), values.clone());
        prop_assert!(filter(&values, |_| false).is_empty());
    }

    #[test]
    fn prop_map_matches_transform_pointwise(
        values in prop::collection::vec(-1_000_000i64..1_000_000, 0..64),
        n in -1_000i64..1_000,
    ) {
        let transforms = [
            Transform::Add(n),
            Transform::Mul(n),
            Transform::Delta,
            Transform::RunningSum,
            Transform::Index,
        ];
        for t in transforms {
            let out = map(&values, |v, i, all| t.apply(v, i, all));
            prop_assert_eq!(out.len(), values.len());
            for (i, got) in out.iter().enumerate() {
                prop_assert_eq!(got, &t.apply(&values[i], i, &values));
            }
        }
    }

    #[test]
    fn prop_map_identity(values in prop::collection::vec(any::<i64>(), 0..64)) {
        prop_assert_eq!(map(&values, |v, _, _| *v), values.clone());
    }

    #[test]
    fn prop_push_appends(
        values in prop::collection::vec(any::<i64>(), 0..64),
        extra in prop::collection::vec(any::<i64>(), 0..16),
        exact in any::<bool>(),
    ) {
        let growth = if exact { Growth::Exact } else { Growth::Amortized };
        let mut seq = values.clone();
        push_with(&mut seq, extra.clone(), growth);

        prop_assert_eq!(seq.len(), values.len() + extra.len());
        prop_assert_eq!(&seq[..values.len()], &values[..]);
        prop_assert_eq!(&seq[values.len()..], &extra[..]);
    }

    #[test]
    fn prop_push_nothing_is_noop(values in prop::collection::vec(any::<i64>(), 0..64)) {
        let mut seq = values.clone();
        push(&mut seq, std::iter::empty());
        prop_assert_eq!(seq, values);
    }
}
