//! Search helpers: pull a single element out of a possibly-absent collection.
//!
//! ### Overview
//! - [`find_first`] / [`find_any`] -- `Option<Item>`, `None` for absent/empty input.
//! - [`find_first_or`] / [`find_any_or`] -- caller-supplied fallback value.
//! - [`find_first_or_default`] / [`find_any_or_default`] -- `Default::default()`
//!   as the fallback.
//!
//! The `find_any` family is only contracted to return *some* element when one
//! exists. This implementation returns the first, which keeps deterministic
//! sources deterministic and is a valid refinement of the contract.

use crate::iter::safe_iter;

/// An arbitrary element of the collection, or `None` if it is absent or empty.
///
/// Currently identical to [`find_first`]; callers that rely on receiving the
/// first element specifically should say so and call [`find_first`].
#[must_use]
pub fn find_any<C>(collection: Option<C>) -> Option<C::Item>
where
    C: IntoIterator,
{
    find_first(collection)
}

/// Like [`find_any`], but falls back to `default` instead of `None`.
#[must_use]
pub fn find_any_or<C>(collection: Option<C>, default: C::Item) -> C::Item
where
    C: IntoIterator,
{
    find_any(collection).unwrap_or(default)
}

/// Like [`find_any`], but falls back to `Default::default()`.
#[must_use]
pub fn find_any_or_default<C>(collection: Option<C>) -> C::Item
where
    C: IntoIterator,
    C::Item: Default,
{
    find_any(collection).unwrap_or_default()
}

/// The first element in iteration order, or `None` if the collection is
/// absent or empty.
///
/// ### Example
/// ```
/// use safestream::find_first;
///
/// assert_eq!(find_first(Some(vec![7, 8, 9])), Some(7));
/// assert_eq!(find_first(Some(Vec::<i32>::new())), None);
/// assert_eq!(find_first(None::<Vec<i32>>), None);
/// ```
#[must_use]
pub fn find_first<C>(collection: Option<C>) -> Option<C::Item>
where
    C: IntoIterator,
{
    safe_iter(collection).next()
}

/// Like [`find_first`], but falls back to `default` instead of `None`.
///
/// ### Example
/// ```
/// use safestream::find_first_or;
///
/// assert_eq!(find_first_or(None::<Vec<i32>>, 42), 42);
/// assert_eq!(find_first_or(Some(vec![1, 2]), 42), 1);
/// ```
#[must_use]
pub fn find_first_or<C>(collection: Option<C>, default: C::Item) -> C::Item
where
    C: IntoIterator,
{
    find_first(collection).unwrap_or(default)
}

/// Like [`find_first`], but falls back to `Default::default()`.
#[must_use]
pub fn find_first_or_default<C>(collection: Option<C>) -> C::Item
where
    C: IntoIterator,
    C::Item: Default,
{
    find_first(collection).unwrap_or_default()
}
