//! Scalar promotion.
//!
//! Every helper in this crate scans "a sequence of `T`". [`Items`] lets a lone
//! `T` stand in for that sequence, so callers that hold either shape can use
//! the same helpers without branching.

/// Either a single item or an ordered sequence of items.
///
/// # Example
///
/// ```
/// use standout_coll::{any, single, Items};
///
/// assert!(any(single(17), |n| *n == 17));
/// assert!(any(Items::many([1, 2, 17]), |n| *n == 17));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Items<T> {
    /// A scalar, visited as a one-element sequence.
    One(T),
    /// An ordered sequence.
    Many(Vec<T>),
}

/// Wraps a scalar as a one-element sequence.
pub fn single<T>(item: T) -> Items<T> {
    Items::One(item)
}

impl<T> Items<T> {
    /// Wraps a scalar.
    pub fn one(item: T) -> Self {
        Items::One(item)
    }

    /// Collects a sequence.
    pub fn many<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Items::Many(items.into_iter().collect())
    }

    /// Number of items scanned: 1 for a scalar.
    pub fn len(&self) -> usize {
        match self {
            Items::One(_) => 1,
            Items::Many(items) => items.len(),
        }
    }

    /// Returns `true` for an empty sequence. A scalar is never empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Views the items as a slice.
    pub fn as_slice(&self) -> &[T] {
        match self {
            Items::One(item) => std::slice::from_ref(item),
            Items::Many(items) => items,
        }
    }

    /// Returns an iterator over references to the items.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Converts into a `Vec`, promoting a scalar to a one-element vector.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Items::One(item) => vec![item],
            Items::Many(items) => items,
        }
    }
}

impl<T> Default for Items<T> {
    fn default() -> Self {
        Items::Many(Vec::new())
    }
}

impl<T> From<Vec<T>> for Items<T> {
    fn from(items: Vec<T>) -> Self {
        Items::Many(items)
    }
}

impl<T> FromIterator<T> for Items<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Items::many(iter)
    }
}

impl<T> IntoIterator for Items<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Items<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
