//! Property-based tests for coll using proptest.

use proptest::prelude::*;
use standout_coll::strings::{all_string, any_string, filter_string};
use standout_coll::{self as coll, dynamic, single, Value};

proptest! {
    /// any(S, P) == !all(S, !P), including the empty defaults.
    #[test]
    fn any_is_dual_of_all(
        items in prop::collection::vec(any::<i64>(), 0..100),
        threshold in any::<i64>(),
    ) {
        let has_any = coll::any(&items, |n| **n > threshold);
        let all_not = coll::all(&items, |n| **n <= threshold);

        prop_assert_eq!(has_any, !all_not);
        if items.is_empty() {
            prop_assert!(!has_any);
            prop_assert!(all_not);
        }
    }

    /// Filtering an already filtered sequence changes nothing.
    #[test]
    fn filter_is_idempotent(
        items in prop::collection::vec(any::<i64>(), 0..100),
        threshold in any::<i64>(),
    ) {
        let once = coll::filter(items.clone(), |n| *n < threshold);
        let twice = coll::filter(once.clone(), |n| *n < threshold);

        prop_assert_eq!(once, twice);
    }

    /// Matches and non-matches partition the input.
    #[test]
    fn filter_partitions_input(
        items in prop::collection::vec(any::<i64>(), 0..100),
        threshold in any::<i64>(),
    ) {
        let matching = coll::filter(&items, |n| **n >= threshold);
        let rest = coll::filter(&items, |n| **n < threshold);

        prop_assert_eq!(matching.len() + rest.len(), items.len());
        prop_assert_eq!(matching.len(), coll::count_matches(&items, |n| **n >= threshold));
    }

    /// Filtering preserves the relative order of the input.
    #[test]
    fn filter_preserves_order(
        items in prop::collection::vec(0i64..1000, 0..100),
        modulus in 1i64..10,
    ) {
        let indexed: Vec<(usize, i64)> = items.iter().copied().enumerate().collect();
        let kept = coll::filter(indexed, |(_, n)| n % modulus == 0);

        for pair in kept.windows(2) {
            prop_assert!(pair[0].0 < pair[1].0);
        }
    }

    /// first_match returns the element at the lowest matching index.
    #[test]
    fn first_match_is_lowest_index(
        items in prop::collection::vec(any::<i64>(), 0..100),
        threshold in any::<i64>(),
    ) {
        let found = coll::first_match(&items, |n| **n > threshold);
        let index = coll::position(&items, |n| **n > threshold);

        match (found, index) {
            (Some(f), Some(i)) => {
                prop_assert_eq!(*f, items[i]);
                prop_assert!(items[..i].iter().all(|n| *n <= threshold));
            }
            (None, None) => prop_assert!(items.iter().all(|n| *n <= threshold)),
            _ => prop_assert!(false, "first_match and position disagree"),
        }
    }

    /// filter_into and for_each_match agree with filter.
    #[test]
    fn sinks_agree_with_filter(
        prefix in prop::collection::vec(any::<i64>(), 0..10),
        items in prop::collection::vec(any::<i64>(), 0..100),
        threshold in any::<i64>(),
    ) {
        let expected = coll::filter(items.clone(), |n| *n > threshold);

        let mut out = prefix.clone();
        coll::filter_into(items.clone(), |n| *n > threshold, &mut out);
        prop_assert_eq!(&out[..prefix.len()], &prefix[..]);
        prop_assert_eq!(&out[prefix.len()..], &expected[..]);

        let mut seen = Vec::new();
        coll::for_each_match(items, |n| *n > threshold, |n| seen.push(n));
        prop_assert_eq!(seen, expected);
    }

    /// A scalar behaves exactly like a one-element sequence.
    #[test]
    fn scalar_promotion(x in any::<i64>(), threshold in any::<i64>()) {
        prop_assert_eq!(
            coll::any(single(x), |n| *n > threshold),
            coll::any([x], |n| *n > threshold)
        );
        prop_assert_eq!(
            coll::all(single(x), |n| *n > threshold),
            coll::all([x], |n| *n > threshold)
        );
        prop_assert_eq!(
            coll::first_match(single(x), |n| *n > threshold),
            coll::first_match([x], |n| *n > threshold)
        );
    }

    /// Dynamic helpers over a list agree with the typed helpers.
    #[test]
    fn dynamic_agrees_with_typed(
        items in prop::collection::vec(any::<i64>(), 0..50),
        threshold in any::<i64>(),
    ) {
        let list = Value::List(items.iter().copied().map(Value::from).collect());
        let above = |v: &Value| v.as_i64().is_some_and(|n| n > threshold);

        prop_assert_eq!(
            dynamic::any(&list, above).unwrap(),
            coll::any(&items, |n| **n > threshold)
        );
        prop_assert_eq!(
            dynamic::all(&list, above).unwrap(),
            coll::all(&items, |n| **n > threshold)
        );

        let typed: Vec<Value> = coll::filter(&items, |n| **n > threshold)
            .into_iter()
            .map(|n| Value::from(*n))
            .collect();
        let loose: Vec<Value> = dynamic::filter(&list, above)
            .unwrap()
            .into_iter()
            .cloned()
            .collect();
        prop_assert_eq!(loose, typed);

        prop_assert_eq!(dynamic::interface(&list).unwrap().len(), items.len());
    }

    /// Converting a typed sequence yields the same values as converting each element.
    #[test]
    fn to_values_agrees_with_value_from(
        bytes in prop::collection::vec(any::<u8>(), 0..20),
        words in prop::collection::vec(any::<u32>(), 0..20),
        wide in prop::collection::vec(any::<u64>(), 0..20),
        signed in prop::collection::vec(any::<i32>(), 0..20),
        floats in prop::collection::vec(-1e12f64..1e12, 0..20),
    ) {
        let converted = coll::to_values(&bytes).unwrap();
        prop_assert_eq!(converted.len(), bytes.len());
        for (value, n) in converted.iter().zip(&bytes) {
            prop_assert_eq!(value, &Value::from(*n));
        }

        let converted = coll::to_values(&words).unwrap();
        prop_assert_eq!(converted.len(), words.len());
        for (value, n) in converted.iter().zip(&words) {
            prop_assert_eq!(value, &Value::from(*n));
        }

        let converted = coll::to_values(&wide).unwrap();
        prop_assert_eq!(converted.len(), wide.len());
        for (value, n) in converted.iter().zip(&wide) {
            prop_assert_eq!(value, &Value::from(*n));
        }

        let converted = coll::to_values(&signed).unwrap();
        prop_assert_eq!(converted.len(), signed.len());
        for (value, n) in converted.iter().zip(&signed) {
            prop_assert_eq!(value, &Value::from(*n));
        }

        let converted = coll::to_values(&floats).unwrap();
        prop_assert_eq!(converted.len(), floats.len());
        for (value, n) in converted.iter().zip(&floats) {
            prop_assert_eq!(value, &Value::from(*n));
        }
    }

    /// Dynamic lookup finds an unsigned element converted with `to_values`.
    #[test]
    fn dynamic_finds_converted_unsigned(
        items in prop::collection::vec(any::<u32>(), 1..30),
        pick in any::<prop::sample::Index>(),
    ) {
        let target = items[pick.index(items.len())];
        let list = Value::List(coll::to_values(&items).unwrap());

        let found = dynamic::first_match(&list, |v| *v == Value::from(target)).unwrap();
        prop_assert_eq!(found, Some(&Value::from(target)));
        prop_assert_eq!(
            dynamic::filter(&list, |v| *v == Value::from(target)).unwrap().len(),
            coll::count_matches(&items, |n| **n == target)
        );
    }

    /// String helpers agree with the generic ones.
    #[test]
    fn string_helpers_agree_with_generic(
        items in prop::collection::vec("[a-c]{0,6}", 0..50),
        needle in "[a-c]{1,2}",
    ) {
        let hit = |s: &str| s.contains(needle.as_str());

        prop_assert_eq!(any_string(&items, hit), coll::any(&items, |s| hit(s)));
        prop_assert_eq!(all_string(&items, hit), coll::all(&items, |s| hit(s)));

        let generic: Vec<&str> = coll::filter(&items, |s| hit(s))
            .into_iter()
            .map(String::as_str)
            .collect();
        prop_assert_eq!(filter_string(&items, hit), generic);
    }
}

// ============================================================================
// Additional edge case tests
// ============================================================================

#[test]
fn predicate_called_once_per_element_without_match() {
    let mut calls = 0;
    let found = coll::first_match(0..10, |_| {
        calls += 1;
        false
    });

    assert_eq!(found, None);
    assert_eq!(calls, 10);
}

#[test]
fn dynamic_any_and_all_short_circuit() {
    let list = Value::List((1..=9).map(Value::from).collect());

    let mut calls = 0;
    assert!(dynamic::any(&list, |v| {
        calls += 1;
        v.as_i64() == Some(4)
    })
    .unwrap());
    assert_eq!(calls, 4);

    let mut calls = 0;
    assert!(!dynamic::all(&list, |v| {
        calls += 1;
        v.as_i64().is_some_and(|n| n < 3)
    })
    .unwrap());
    assert_eq!(calls, 3);
}

#[test]
fn string_any_and_all_short_circuit() {
    let items = ["alpha", "beta", "gamma", "delta"];

    let mut calls = 0;
    assert!(any_string(&items, |s| {
        calls += 1;
        s == "beta"
    }));
    assert_eq!(calls, 2);

    let mut calls = 0;
    assert!(!all_string(&items, |s| {
        calls += 1;
        s != "gamma"
    }));
    assert_eq!(calls, 3);
}

#[test]
fn dynamic_rejects_null_for_every_helper() {
    assert!(dynamic::all(&Value::Null, |_| true).is_err());
    assert!(dynamic::interface(&Value::Null).is_err());
    assert!(dynamic::elements(&Value::Null).is_err());
}
