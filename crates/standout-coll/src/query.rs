//! Typed predicate helpers.
//!
//! Each helper performs a single left-to-right scan of its input. Inputs are
//! anything that implements [`IntoIterator`]: arrays, vectors, slices, maps
//! (visited as `(key, value)` entries in the map's own order), iterators, and
//! [`Items`](crate::Items) for scalar promotion.

use serde::Serialize;
use tracing::trace;

use crate::error::Result;
use crate::value::Value;

/// Returns `true` if any item matches the predicate.
///
/// Stops at the first match. An empty input returns `false`.
///
/// ```
/// use standout_coll::any;
///
/// assert!(any([1, 2, 3, 4, 5, 6, 7, 8, 9], |n| *n == 5));
/// assert!(!any(Vec::<i32>::new(), |_| true));
/// ```
pub fn any<I, P>(items: I, mut predicate: P) -> bool
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    for item in items {
        if predicate(&item) {
            return true;
        }
    }
    false
}

/// Returns `true` if every item matches the predicate.
///
/// Stops at the first failure. An empty input returns `true`.
pub fn all<I, P>(items: I, mut predicate: P) -> bool
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    for item in items {
        if !predicate(&item) {
            return false;
        }
    }
    true
}

/// Returns the matching items in their original relative order.
///
/// No match yields an empty vector.
///
/// ```
/// use standout_coll::filter;
///
/// let small = filter([1, 2, 3, 4, 5, 6, 7, 8, 9], |n| *n < 5);
/// assert_eq!(small, vec![1, 2, 3, 4]);
/// ```
pub fn filter<I, P>(items: I, predicate: P) -> Vec<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    let mut results = Vec::new();
    filter_into(items, predicate, &mut results);
    results
}

/// Appends the matching items to `out`.
///
/// Whatever `out` already holds stays ahead of the appended matches.
///
/// ```
/// use standout_coll::filter_into;
///
/// let mut out = vec![0];
/// filter_into([1, 2, 3], |n| *n != 2, &mut out);
/// assert_eq!(out, vec![0, 1, 3]);
/// ```
pub fn filter_into<I, P, E>(items: I, mut predicate: P, out: &mut E)
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
    E: Extend<I::Item>,
{
    out.extend(items.into_iter().filter(|item| predicate(item)));
}

/// Invokes `action` on each matching item, in scan order.
pub fn for_each_match<I, P, A>(items: I, mut predicate: P, mut action: A)
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
    A: FnMut(I::Item),
{
    for item in items {
        if predicate(&item) {
            action(item);
        }
    }
}

/// Returns the first matching item, or `None` if nothing matches.
///
/// ```
/// use standout_coll::first_match;
///
/// assert_eq!(first_match(1..=9, |n| *n > 5), Some(6));
/// assert_eq!(first_match(1..=9, |n| *n > 10), None);
/// ```
pub fn first_match<I, P>(items: I, mut predicate: P) -> Option<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    for item in items {
        if predicate(&item) {
            return Some(item);
        }
    }
    None
}

/// Returns the index of the first matching item.
pub fn position<I, P>(items: I, mut predicate: P) -> Option<usize>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    items.into_iter().position(|item| predicate(&item))
}

/// Counts the matching items.
pub fn count_matches<I, P>(items: I, mut predicate: P) -> usize
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    items.into_iter().filter(|item| predicate(item)).count()
}

/// Converts each item into a loosely-typed [`Value`], preserving order and count.
///
/// Fails if an item cannot be serialized (for example a map with non-string keys).
///
/// ```
/// use standout_coll::{single, to_values, Value};
///
/// let values = to_values(single(346)).unwrap();
/// assert_eq!(values, vec![Value::from(346i64)]);
/// ```
pub fn to_values<I>(items: I) -> Result<Vec<Value>>
where
    I: IntoIterator,
    I::Item: Serialize,
{
    let values = items
        .into_iter()
        .map(|item| Value::from_serialize(&item))
        .collect::<Result<Vec<_>>>()?;
    trace!(count = values.len(), "converted items to values");
    Ok(values)
}
