//! Count helper.

use crate::iter::safe_iter;

/// The number of elements in the collection; zero when absent or empty.
///
/// Counts by iterating, without materializing anything.
///
/// ### Example
/// ```
/// use safestream::count;
///
/// assert_eq!(count(Some(vec!['a', 'b', 'c'])), 3);
/// assert_eq!(count(None::<Vec<char>>), 0);
/// ```
#[must_use]
pub fn count<C>(collection: Option<C>) -> usize
where
    C: IntoIterator,
{
    safe_iter(collection).count()
}
