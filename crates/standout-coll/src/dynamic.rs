//! Helpers over loosely-typed [`Value`]s.
//!
//! These are the single-entry-point counterparts of the typed helpers: the
//! shape of the input is decided at runtime.
//!
//! | Input | Scanned as |
//! |-------|------------|
//! | `List` | its elements, in order |
//! | `Map` | its values, in key order |
//! | `Bool`, `Number`, `String` | a one-element sequence |
//! | `Null` | rejected with [`CollError::NotIterable`] |
//!
//! Rejection happens before the predicate is ever called.
//!
//! ```
//! use standout_coll::{dynamic, Value};
//!
//! let numbers = Value::from((1..=9).map(Value::from).collect::<Vec<_>>());
//! let small = dynamic::filter(&numbers, |v| v.as_i64().is_some_and(|n| n < 5)).unwrap();
//! assert_eq!(small.len(), 4);
//!
//! assert!(dynamic::any(&Value::from(17), |v| v.as_i64() == Some(17)).unwrap());
//! assert!(dynamic::any(&Value::Null, |_| true).is_err());
//! ```

use std::collections::btree_map;
use std::iter::Once;
use std::slice;

use tracing::debug;

use crate::error::{CollError, Result};
use crate::value::Value;

/// Iterator over the elements of a scannable [`Value`], returned by [`elements`].
#[derive(Debug, Clone)]
pub struct Elements<'a>(Inner<'a>);

#[derive(Debug, Clone)]
enum Inner<'a> {
    List(slice::Iter<'a, Value>),
    Map(btree_map::Values<'a, String, Value>),
    One(Once<&'a Value>),
}

impl<'a> Iterator for Elements<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.0 {
            Inner::List(iter) => iter.next(),
            Inner::Map(iter) => iter.next(),
            Inner::One(iter) => iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.0 {
            Inner::List(iter) => iter.size_hint(),
            Inner::Map(iter) => iter.size_hint(),
            Inner::One(iter) => iter.size_hint(),
        }
    }
}

/// Returns the elements of `value` in scan order.
pub fn elements(value: &Value) -> Result<Elements<'_>> {
    match value {
        Value::List(items) => Ok(Elements(Inner::List(items.iter()))),
        Value::Map(entries) => Ok(Elements(Inner::Map(entries.values()))),
        Value::Null => {
            debug!(kind = value.kind(), "rejecting input without iteration semantics");
            Err(CollError::NotIterable { kind: value.kind() })
        }
        scalar => Ok(Elements(Inner::One(std::iter::once(scalar)))),
    }
}

/// Returns `true` if any element matches. Stops at the first match.
pub fn any<P>(value: &Value, mut predicate: P) -> Result<bool>
where
    P: FnMut(&Value) -> bool,
{
    Ok(elements(value)?.any(|item| predicate(item)))
}

/// Returns `true` if every element matches. Stops at the first failure.
pub fn all<P>(value: &Value, mut predicate: P) -> Result<bool>
where
    P: FnMut(&Value) -> bool,
{
    Ok(elements(value)?.all(|item| predicate(item)))
}

/// Returns the matching elements, borrowed from `value`, in scan order.
pub fn filter<P>(value: &Value, mut predicate: P) -> Result<Vec<&Value>>
where
    P: FnMut(&Value) -> bool,
{
    Ok(elements(value)?.filter(|item| predicate(item)).collect())
}

/// Appends clones of the matching elements to `out`, after its existing contents.
pub fn filter_into<P>(value: &Value, mut predicate: P, out: &mut Vec<Value>) -> Result<()>
where
    P: FnMut(&Value) -> bool,
{
    out.extend(elements(value)?.filter(|item| predicate(item)).cloned());
    Ok(())
}

/// Invokes `action` on each matching element, in scan order.
pub fn for_each_match<'a, P, A>(value: &'a Value, mut predicate: P, mut action: A) -> Result<()>
where
    P: FnMut(&Value) -> bool,
    A: FnMut(&'a Value),
{
    for item in elements(value)? {
        if predicate(item) {
            action(item);
        }
    }
    Ok(())
}

/// Returns the first matching element, or `None` if nothing matches.
pub fn first_match<P>(value: &Value, mut predicate: P) -> Result<Option<&Value>>
where
    P: FnMut(&Value) -> bool,
{
    Ok(elements(value)?.find(|item| predicate(item)))
}

/// Normalizes `value` into an owned sequence: the elements of a list or map,
/// or a one-element vector for a scalar.
pub fn interface(value: &Value) -> Result<Vec<Value>> {
    Ok(elements(value)?.cloned().collect())
}
