//! # safestream
//!
//! **Absent-safe helpers** for functional-style operations over Rust
//! collections. Every function accepts a possibly-absent collection
//! (`Option<impl IntoIterator>`) and treats `None` exactly like an empty
//! collection, so call sites never need a defensive `match` or `map_or`
//! before a transform.
//!
//! ## Key Features
//!
//! - **One primitive** - [`safe_iter`] turns `Option<C>` into a lazy iterator
//!   that yields nothing for `None` or empty input
//! - **Sequence and set variants** - every transform collects into `Vec` or,
//!   with the `_to_set` suffix, into `HashSet` (order-preserving `IndexSet`
//!   where sort order must survive)
//! - **Search, match, count, join** - `find_first`/`find_any` families,
//!   short-circuiting `any_match`/`all_match`/`none_match`, `count`,
//!   `join_to_string`
//! - **Side-effecting iteration** - `for_each` plus setter-driving variants
//!   for mutating passes
//! - **Infallible** - absence is never an error; the required closures and
//!   delimiters are enforced by the signatures, so there is no runtime
//!   precondition check to trip
//!
//! ## Quick Start
//!
//! ```
//! use safestream::{count, filter, join_to_string, map};
//!
//! // A lookup that may come back empty-handed.
//! fn load_scores() -> Option<Vec<u32>> {
//!     Some(vec![70, 95, 88])
//! }
//!
//! let scores = load_scores();
//!
//! // Borrow with `as_ref()`; no branching on presence anywhere.
//! let high = filter(scores.as_ref(), |score| **score >= 80);
//! assert_eq!(high, vec![&95, &88]);
//!
//! let doubled = map(scores.as_ref(), |score| score * 2);
//! assert_eq!(doubled, vec![140, 190, 176]);
//!
//! assert_eq!(count(load_scores()), 3);
//! assert_eq!(count(None::<Vec<u32>>), 0);
//!
//! assert_eq!(join_to_string(load_scores(), "-"), "70-95-88");
//! assert_eq!(join_to_string(None::<Vec<u32>>, "-"), "");
//! ```
//!
//! ## Core Concepts
//!
//! ### Absent means empty
//!
//! `None` and a zero-element collection are indistinguishable to every helper:
//! transforms return empty containers, matches answer vacuously
//! (`any_match` is `false`, `all_match`/`none_match` are `true`), `count` is
//! zero, joins are `""`. Absence is a valid input, never an error.
//!
//! ### Ownership
//!
//! Helpers take the collection by value. Pass `Some(&collection)` (or
//! `option.as_ref()` for a stored option) to iterate by reference and keep
//! ownership; pass the owned value to consume it. Mutating passes feed the
//! iteration a mutable source, e.g. `Some(items.iter_mut())`.
//!
//! ### Result shapes
//!
//! Operations come in a sequence flavor (`Vec`, order kept, duplicates kept)
//! and a set flavor (`_to_set`, duplicates collapsed by `Eq`/`Hash`).
//! [`sort_to_set`] is the one set variant with a guaranteed order: it returns
//! an insertion-ordered [`IndexSet`](indexmap::IndexSet), because a plain
//! `HashSet` could not communicate the sort.
//!
//! ## Module Overview
//!
//! - [`iter`] - the [`SafeIter`] primitive everything funnels through
//! - [`helpers`] - the flat helper surface, re-exported at the crate root
//! - [`extensions`] - [`SafeStreamExt`] for method-syntax iteration
//! - [`testing`] - assertions, data builders, and fixtures for testing
//!   collection-handling code

pub mod extensions;
pub mod helpers;
pub mod iter;
pub mod testing;

// General re-exports
pub use extensions::SafeStreamExt;
pub use helpers::*;
pub use iter::{SafeIter, safe_iter};
