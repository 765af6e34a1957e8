//! Coll - Predicate helpers for scanning, filtering and searching collections.
//!
//! Every helper is a single left-to-right scan that applies a predicate:
//!
//! - Existence and universal checks: [`any`], [`all`]
//! - Filtering: [`filter`] into a new vector, [`filter_into`] onto an existing sink
//! - Side effects on matches: [`for_each_match`]
//! - Lookup: [`first_match`], [`position`], [`count_matches`]
//! - Type erasure: [`to_values`] and the [`dynamic`] helpers over [`Value`]
//!
//! # Quick Start
//!
//! ```rust
//! use standout_coll::{all, any, filter, first_match, single};
//!
//! let numbers = [1, 2, 3, 4, 5, 6, 7, 8, 9];
//!
//! assert!(any(numbers, |n| *n == 5));
//! assert!(all(numbers, |n| *n < 10));
//! assert_eq!(filter(numbers, |n| *n < 5), vec![1, 2, 3, 4]);
//! assert_eq!(first_match(numbers, |n| *n > 10), None);
//!
//! // A lone value behaves like a one-element sequence
//! assert!(any(single(17), |n| *n == 17));
//! ```
//!
//! # Inputs
//!
//! The typed helpers accept anything that implements [`IntoIterator`]. Pass
//! a collection by reference to scan it without consuming it. Maps are
//! visited as `(key, value)` entries in the map's own iteration order.
//!
//! | Input | Helpers |
//! |-------|---------|
//! | `impl IntoIterator<Item = T>` | crate root ([`any`], [`filter`], ...) |
//! | single `T` | wrap with [`single`] / [`Items::one`] |
//! | `&[S]` where `S: AsRef<str>` | [`strings`] |
//! | [`Value`] decided at runtime | [`dynamic`] |
//!
//! # Semantics
//!
//! - [`any`] stops at the first match and is `false` on empty input.
//! - [`all`] stops at the first failure and is `true` on empty input.
//! - Filtering preserves relative order and never returns an absent value.
//! - [`first_match`] returns `None` when nothing matches, never a default `T`.
//! - [`dynamic`] rejects [`Value::Null`] with [`CollError::NotIterable`].

pub mod dynamic;
mod error;
mod items;
mod query;
mod ser;
pub mod strings;
mod value;

// Re-export public API
pub use error::{CollError, Result};
pub use items::{single, Items};
pub use query::{
    all, any, count_matches, filter, filter_into, first_match, for_each_match, position,
    to_values,
};
pub use value::{Number, Value};
