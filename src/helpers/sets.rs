//! Set-shaped helpers: duplicates collapse by `Eq`/`Hash`.
//!
//! Each function mirrors a sequence-shaped counterpart at the crate root
//! ([`map_to_set`] is the set form of [`map`](crate::map), and so on) but
//! collects into a `HashSet`, whose iteration order is unspecified. The one
//! exception is [`sort_to_set`], which
//! returns an insertion-ordered [`IndexSet`] so the sorted order survives
//! materialization.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::hash::Hash;

use indexmap::IndexSet;
use itertools::Itertools;

use crate::iter::safe_iter;

/// Materialize a possibly-absent collection into a `HashSet`.
#[must_use]
pub fn collect_to_set<C>(collection: Option<C>) -> HashSet<C::Item>
where
    C: IntoIterator,
    C::Item: Eq + Hash,
{
    safe_iter(collection).collect()
}

/// Set-shaped [`distinct`](crate::distinct). Collecting into a set already
/// collapses duplicates; the alias keeps the sequence/set surfaces symmetric.
#[must_use]
pub fn distinct_to_set<C>(collection: Option<C>) -> HashSet<C::Item>
where
    C: IntoIterator,
    C::Item: Eq + Hash,
{
    collect_to_set(collection)
}

/// Set-shaped [`filter`](crate::filter).
#[must_use]
pub fn filter_to_set<C, P>(collection: Option<C>, predicate: P) -> HashSet<C::Item>
where
    C: IntoIterator,
    C::Item: Eq + Hash,
    P: FnMut(&C::Item) -> bool,
{
    safe_iter(collection).filter(predicate).collect()
}

/// Set-shaped [`flat_map`](crate::flat_map).
#[must_use]
pub fn flat_map_to_set<C, J, F>(collection: Option<C>, flat_mapper: F) -> HashSet<J::Item>
where
    C: IntoIterator,
    J: IntoIterator,
    J::Item: Eq + Hash,
    F: FnMut(C::Item) -> J,
{
    safe_iter(collection).flat_map(flat_mapper).collect()
}

/// Set-shaped [`flat_map_collections`](crate::flat_map_collections): absent or
/// empty nested collections contribute nothing.
#[must_use]
pub fn flat_map_collections_to_set<C, J, F>(
    collection: Option<C>,
    mut flat_mapper: F,
) -> HashSet<J::Item>
where
    C: IntoIterator,
    J: IntoIterator,
    J::Item: Eq + Hash,
    F: FnMut(C::Item) -> Option<J>,
{
    safe_iter(collection)
        .flat_map(|item| safe_iter(flat_mapper(item)))
        .collect()
}

/// Set-shaped [`map`](crate::map).
///
/// ### Example
/// ```
/// use std::collections::HashSet;
/// use safestream::map_to_set;
///
/// let lengths = map_to_set(Some(vec!["a", "bb", "cc"]), str::len);
/// assert_eq!(lengths, HashSet::from([1, 2]));
/// ```
#[must_use]
pub fn map_to_set<C, R, F>(collection: Option<C>, mapper: F) -> HashSet<R>
where
    C: IntoIterator,
    R: Eq + Hash,
    F: FnMut(C::Item) -> R,
{
    safe_iter(collection).map(mapper).collect()
}

/// Stable comparator sort into an insertion-ordered set.
///
/// A plain `HashSet` cannot communicate sort order, so this variant collects
/// into an [`IndexSet`]: iterating it replays the sorted order, duplicates
/// collapsed to their first (lowest-sorted) occurrence.
///
/// ### Example
/// ```
/// use safestream::sort_to_set;
///
/// let ordered = sort_to_set(Some(vec![3, 1, 2, 1]), |a, b| a.cmp(b));
/// assert_eq!(ordered.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
/// ```
#[must_use]
pub fn sort_to_set<C, F>(collection: Option<C>, comparator: F) -> IndexSet<C::Item>
where
    C: IntoIterator,
    C::Item: Eq + Hash,
    F: FnMut(&C::Item, &C::Item) -> Ordering,
{
    safe_iter(collection).sorted_by(comparator).collect()
}
