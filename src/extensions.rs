//! Extension points for method-style use of the safe iteration primitive.
//!
//! The free functions in this crate cover the common one-shot cases. When a
//! value is threaded through a longer adaptor chain, method syntax reads
//! better; importing [`SafeStreamExt`] puts [`safe_stream`](SafeStreamExt::safe_stream)
//! on every `Option<impl IntoIterator>`:
//!
//! ```
//! use safestream::SafeStreamExt;
//!
//! let maybe_scores: Option<Vec<u32>> = Some(vec![70, 95, 88]);
//! let high: Vec<u32> = maybe_scores
//!     .safe_stream()
//!     .filter(|score| *score >= 80)
//!     .collect();
//! assert_eq!(high, vec![95, 88]);
//! ```

use crate::iter::{SafeIter, safe_iter};

/// Method-syntax entry point over [`safe_iter`].
///
/// Implemented for `Option<C>` for every `C: IntoIterator`. The receiver is
/// taken by value; call `.as_ref()` first to keep a stored option intact.
pub trait SafeStreamExt<C: IntoIterator> {
    /// Iterate the elements if present, or nothing at all.
    fn safe_stream(self) -> SafeIter<C::IntoIter>;
}

impl<C: IntoIterator> SafeStreamExt<C> for Option<C> {
    fn safe_stream(self) -> SafeIter<C::IntoIter> {
        safe_iter(self)
    }
}
