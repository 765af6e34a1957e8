//! String-specialized helpers.
//!
//! Same semantics as the typed helpers in [`crate::query`], restricted to
//! slices of strings. Predicates receive `&str` regardless of whether the
//! slice holds `String`, `&str`, or anything else that is `AsRef<str>`.
//!
//! The predicate builders ([`contains`], [`starts_with`], [`ends_with`],
//! [`equals`], and [`matches_regex`]) cover the common string tests.

/// Returns `true` if any string matches the predicate.
pub fn any_string<S, P>(items: &[S], mut predicate: P) -> bool
where
    S: AsRef<str>,
    P: FnMut(&str) -> bool,
{
    items.iter().any(|item| predicate(item.as_ref()))
}

/// Returns `true` if every string matches the predicate. Empty input returns `true`.
///
/// ```
/// use standout_coll::strings::{all_string, contains};
///
/// assert!(all_string(&["abc", "abs", "aaa"], contains("a")));
/// ```
pub fn all_string<S, P>(items: &[S], mut predicate: P) -> bool
where
    S: AsRef<str>,
    P: FnMut(&str) -> bool,
{
    items.iter().all(|item| predicate(item.as_ref()))
}

/// Returns the matching strings, borrowed from `items`, in original order.
pub fn filter_string<'a, S, P>(items: &'a [S], mut predicate: P) -> Vec<&'a str>
where
    S: AsRef<str>,
    P: FnMut(&str) -> bool,
{
    items
        .iter()
        .map(|item| item.as_ref())
        .filter(|item| predicate(item))
        .collect()
}

/// Appends owned copies of the matching strings to `out`.
pub fn filter_string_into<S, P>(items: &[S], mut predicate: P, out: &mut Vec<String>)
where
    S: AsRef<str>,
    P: FnMut(&str) -> bool,
{
    out.extend(
        items
            .iter()
            .map(|item| item.as_ref())
            .filter(|item| predicate(item))
            .map(str::to_owned),
    );
}

/// Invokes `action` on each matching string, in order.
pub fn for_each_string<S, P, A>(items: &[S], mut predicate: P, mut action: A)
where
    S: AsRef<str>,
    P: FnMut(&str) -> bool,
    A: FnMut(&str),
{
    for item in items.iter().map(|item| item.as_ref()) {
        if predicate(item) {
            action(item);
        }
    }
}

/// Predicate: the string contains `needle`.
pub fn contains(needle: &str) -> impl Fn(&str) -> bool + '_ {
    move |item: &str| item.contains(needle)
}

/// Predicate: the string starts with `prefix`.
pub fn starts_with(prefix: &str) -> impl Fn(&str) -> bool + '_ {
    move |item: &str| item.starts_with(prefix)
}

/// Predicate: the string ends with `suffix`.
pub fn ends_with(suffix: &str) -> impl Fn(&str) -> bool + '_ {
    move |item: &str| item.ends_with(suffix)
}

/// Predicate: the string equals `expected` exactly.
pub fn equals(expected: &str) -> impl Fn(&str) -> bool + '_ {
    move |item: &str| item == expected
}

/// Predicate: the string matches the regular expression `pattern`.
///
/// Returns an error if the pattern is invalid.
///
/// ```
/// use standout_coll::strings::{filter_string, matches_regex};
///
/// let names = ["Task A", "Task B", "Urgent Task"];
/// let plain = filter_string(&names, matches_regex(r"^Task [A-Z]$").unwrap());
/// assert_eq!(plain, vec!["Task A", "Task B"]);
/// ```
#[cfg(feature = "regex")]
pub fn matches_regex(pattern: &str) -> crate::Result<impl Fn(&str) -> bool> {
    let regex = regex::Regex::new(pattern)?;
    Ok(move |item: &str| regex.is_match(item))
}
