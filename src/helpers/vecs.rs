//! Sequence-shaped helpers: every function here materializes into a `Vec`,
//! preserving the source's iteration order and keeping duplicates.
//!
//! ### Overview
//! - [`collect`] -- passthrough materialization of a possibly-absent collection.
//! - [`map`] / [`flat_map`] / [`flat_map_collections`] -- element transforms.
//! - [`filter`] -- retain elements matching a predicate.
//! - [`distinct`] -- drop duplicates, keeping first occurrences.
//! - [`sort`] -- stable comparator sort.
//!
//! All helpers treat `None` and empty input identically: they return an empty
//! `Vec`. See [`safe_iter`](crate::safe_iter) for the underlying primitive.

use std::cmp::Ordering;
use std::hash::Hash;

use indexmap::IndexSet;
use itertools::Itertools;

use crate::iter::safe_iter;

/// Materialize a possibly-absent collection into a `Vec`, unchanged.
///
/// Useful for normalizing an arbitrary `Option<impl IntoIterator>` into a
/// concrete sequence before handing it elsewhere.
///
/// ### Example
/// ```
/// use safestream::collect;
///
/// assert_eq!(collect(Some(vec![3, 1, 2])), vec![3, 1, 2]);
/// assert_eq!(collect(None::<Vec<i32>>), Vec::<i32>::new());
/// ```
#[must_use]
pub fn collect<C>(collection: Option<C>) -> Vec<C::Item>
where
    C: IntoIterator,
{
    safe_iter(collection).collect()
}

/// Remove duplicate elements, preserving the order of first occurrences.
///
/// Equality follows `Eq`/`Hash`, the same notion the set-shaped helpers use.
///
/// ### Example
/// ```
/// use safestream::distinct;
///
/// assert_eq!(distinct(Some(vec![2, 1, 2, 3, 1])), vec![2, 1, 3]);
/// ```
#[must_use]
pub fn distinct<C>(collection: Option<C>) -> Vec<C::Item>
where
    C: IntoIterator,
    C::Item: Eq + Hash,
{
    safe_iter(collection)
        .collect::<IndexSet<_>>()
        .into_iter()
        .collect()
}

/// Retain the elements for which `predicate` returns `true`, in order.
///
/// ### Example
/// ```
/// use safestream::filter;
///
/// let evens = filter(Some(vec![1, 2, 3, 4]), |n| n % 2 == 0);
/// assert_eq!(evens, vec![2, 4]);
/// ```
#[must_use]
pub fn filter<C, P>(collection: Option<C>, predicate: P) -> Vec<C::Item>
where
    C: IntoIterator,
    P: FnMut(&C::Item) -> bool,
{
    safe_iter(collection).filter(predicate).collect()
}

/// Transform each element into a collection of its own and splice the results
/// together, in order.
///
/// `flat_mapper` may return any `IntoIterator` -- a `Vec`, an iterator chain,
/// an array. For nested collections that can themselves be absent, use
/// [`flat_map_collections`].
///
/// ### Example
/// ```
/// use safestream::flat_map;
///
/// let pairs = flat_map(Some(vec![1, 2]), |n| [n, n * 10]);
/// assert_eq!(pairs, vec![1, 10, 2, 20]);
/// ```
#[must_use]
pub fn flat_map<C, J, F>(collection: Option<C>, flat_mapper: F) -> Vec<J::Item>
where
    C: IntoIterator,
    J: IntoIterator,
    F: FnMut(C::Item) -> J,
{
    safe_iter(collection).flat_map(flat_mapper).collect()
}

/// Like [`flat_map`], but for transforms that return a *possibly-absent*
/// nested collection. `None` and empty nested collections contribute nothing;
/// they are never an error.
///
/// ### Example
/// ```
/// use safestream::flat_map_collections;
///
/// let rows: Vec<(u32, Option<Vec<u32>>)> =
///     vec![(1, Some(vec![10, 11])), (2, None), (3, Some(vec![30]))];
/// let children = flat_map_collections(Some(rows), |(_, kids)| kids);
/// assert_eq!(children, vec![10, 11, 30]);
/// ```
#[must_use]
pub fn flat_map_collections<C, J, F>(collection: Option<C>, mut flat_mapper: F) -> Vec<J::Item>
where
    C: IntoIterator,
    J: IntoIterator,
    F: FnMut(C::Item) -> Option<J>,
{
    safe_iter(collection)
        .flat_map(|item| safe_iter(flat_mapper(item)))
        .collect()
}

/// Apply `mapper` to each element, collecting the results in order.
///
/// ### Example
/// ```
/// use safestream::map;
///
/// assert_eq!(map(Some(vec![1, 2, 3]), |n| n * 2), vec![2, 4, 6]);
/// assert_eq!(map(None::<Vec<i32>>, |n| n * 2), Vec::<i32>::new());
/// ```
#[must_use]
pub fn map<C, R, F>(collection: Option<C>, mapper: F) -> Vec<R>
where
    C: IntoIterator,
    F: FnMut(C::Item) -> R,
{
    safe_iter(collection).map(mapper).collect()
}

/// Sort the elements by `comparator` into a new `Vec`.
///
/// The sort is stable: elements the comparator considers equal keep their
/// relative input order. Unlike the other helpers this one is not lazy in any
/// sense -- the whole input is consumed before anything is produced.
///
/// ### Example
/// ```
/// use safestream::sort;
///
/// let sorted = sort(Some(vec![3, 1, 2]), |a, b| a.cmp(b));
/// assert_eq!(sorted, vec![1, 2, 3]);
/// ```
#[must_use]
pub fn sort<C, F>(collection: Option<C>, comparator: F) -> Vec<C::Item>
where
    C: IntoIterator,
    F: FnMut(&C::Item, &C::Item) -> Ordering,
{
    safe_iter(collection).sorted_by(comparator).collect()
}
