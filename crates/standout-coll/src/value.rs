//! Loosely-typed element values.
//!
//! [`Value`] is what a collection looks like once the static element type has
//! been erased: scalars, ordered lists, and string-keyed maps. The dynamic
//! helpers in [`crate::dynamic`] scan it, and [`crate::to_values`] produces it
//! from any serializable sequence.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::Result;
use crate::ser::ValueSerializer;

/// Owned, loosely-typed value.
///
/// # Example
///
/// ```
/// use standout_coll::{Value, Number};
///
/// let list = Value::from(vec![Value::from(1i64), Value::from("two")]);
/// assert_eq!(list.kind(), "list");
/// assert_eq!(Value::from(3u8), Value::Number(Number::I64(3)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Absent value. Has no iteration semantics.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Numeric value.
    Number(Number),
    /// String value.
    String(String),
    /// Ordered sequence of values.
    List(Vec<Value>),
    /// String-keyed mapping, visited in key order.
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// Builds a value from anything serde can serialize.
    ///
    /// Floats keep their value even when not finite; integers use the
    /// canonical [`Number`] form.
    pub fn from_serialize<T>(value: &T) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        value.serialize(ValueSerializer)
    }

    /// Returns the variant name, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }

    /// Returns `true` if this is a `Null` value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` for values that are visited as a one-element sequence.
    pub fn is_scalar(&self) -> bool {
        matches!(self, Value::Bool(_) | Value::Number(_) | Value::String(_))
    }

    /// Extracts the boolean value, if present.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Extracts the number value, if present.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts a signed integer, if the number fits.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(Number::I64(n)) => Some(*n),
            Value::Number(Number::U64(n)) => i64::try_from(*n).ok(),
            _ => None,
        }
    }

    /// Extracts the string value, if present.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Extracts the map entries, if present.
    pub fn as_map(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Map(entries) => Some(entries),
            _ => None,
        }
    }
}

/// Numeric value.
///
/// Every integer that fits in `i64` is stored as `I64`, whatever type it came
/// from; `U64` only holds values above `i64::MAX`. Equality and ordering are
/// numeric, so `I64(3)`, `U64(3)` and `F64(3.0)` all compare equal and NaN
/// equals nothing.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(untagged)]
pub enum Number {
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned integer above `i64::MAX`.
    U64(u64),
    /// 64-bit floating point.
    F64(f64),
}

impl Number {
    /// Canonical form of an unsigned integer.
    pub fn from_u64(n: u64) -> Self {
        i64::try_from(n).map_or(Number::U64(n), Number::I64)
    }

    /// Widens to f64. Integers beyond 2^53 lose precision.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::I64(n) => n as f64,
            Number::U64(n) => n as f64,
            Number::F64(n) => n,
        }
    }

    /// Numeric comparison across representations. `None` when either side is NaN.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::I64(a), Number::I64(b)) => Some(a.cmp(&b)),
            (Number::U64(a), Number::U64(b)) => Some(a.cmp(&b)),
            // A negative i64 is below every u64; otherwise widen losslessly.
            (Number::I64(a), Number::U64(b)) => {
                Some(u64::try_from(a).map_or(Ordering::Less, |a| a.cmp(&b)))
            }
            (Number::U64(a), Number::I64(b)) => {
                Some(u64::try_from(b).map_or(Ordering::Greater, |b| a.cmp(&b)))
            }
            _ => self.to_f64().partial_cmp(&other.to_f64()),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.compare(*other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(*other)
    }
}

macro_rules! number_from {
    ($($source:ty => |$n:ident| $build:expr),* $(,)?) => {
        $(
            impl From<$source> for Number {
                fn from($n: $source) -> Self {
                    $build
                }
            }

            impl From<$source> for Value {
                fn from(n: $source) -> Self {
                    Value::Number(Number::from(n))
                }
            }
        )*
    };
}

number_from!(
    i8 => |n| Number::I64(i64::from(n)),
    i16 => |n| Number::I64(i64::from(n)),
    i32 => |n| Number::I64(i64::from(n)),
    i64 => |n| Number::I64(n),
    isize => |n| Number::I64(n as i64),
    u8 => |n| Number::I64(i64::from(n)),
    u16 => |n| Number::I64(i64::from(n)),
    u32 => |n| Number::I64(i64::from(n)),
    u64 => |n| Number::from_u64(n),
    usize => |n| Number::from_u64(n as u64),
    f32 => |n| Number::F64(f64::from(n)),
    f64 => |n| Number::F64(n),
);

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(entries: BTreeMap<String, Value>) -> Self {
        Value::Map(entries)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Number(Number::I64(i))
                } else if let Some(u) = n.as_u64() {
                    Value::Number(Number::from_u64(u))
                } else {
                    n.as_f64()
                        .map_or(Value::Null, |f| Value::Number(Number::F64(f)))
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Map(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}
