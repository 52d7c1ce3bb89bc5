//! Match helpers: boolean queries over a possibly-absent collection.
//!
//! All three short-circuit as soon as the answer is known. Absent and empty
//! inputs follow the vacuous-truth convention: [`any_match`] is `false`,
//! [`all_match`] and [`none_match`] are `true`.

use crate::iter::safe_iter;

/// Whether every element satisfies `predicate`. Vacuously `true` for an
/// absent or empty collection. Stops at the first `false`.
///
/// ### Example
/// ```
/// use safestream::all_match;
///
/// assert!(all_match(Some(vec![2, 4, 6]), |n| n % 2 == 0));
/// assert!(all_match(None::<Vec<i32>>, |n| n % 2 == 0));
/// assert!(!all_match(Some(vec![2, 3]), |n| n % 2 == 0));
/// ```
#[must_use]
pub fn all_match<C, P>(collection: Option<C>, predicate: P) -> bool
where
    C: IntoIterator,
    P: FnMut(C::Item) -> bool,
{
    safe_iter(collection).all(predicate)
}

/// Whether at least one element satisfies `predicate`. Vacuously `false` for
/// an absent or empty collection. Stops at the first `true`.
///
/// ### Example
/// ```
/// use safestream::any_match;
///
/// assert!(any_match(Some(vec![1, 2, 3]), |n| n > 2));
/// assert!(!any_match(Some(Vec::<i32>::new()), |_| true));
/// ```
#[must_use]
pub fn any_match<C, P>(collection: Option<C>, predicate: P) -> bool
where
    C: IntoIterator,
    P: FnMut(C::Item) -> bool,
{
    safe_iter(collection).any(predicate)
}

/// Whether no element satisfies `predicate`. The negation of [`any_match`],
/// so vacuously `true` for an absent or empty collection.
#[must_use]
pub fn none_match<C, P>(collection: Option<C>, predicate: P) -> bool
where
    C: IntoIterator,
    P: FnMut(C::Item) -> bool,
{
    !any_match(collection, predicate)
}
