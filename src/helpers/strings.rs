//! String-joining helper and the [`JoinText`] conversion behind it.
//!
//! [`join_to_string`] renders each element as text and joins the results with
//! a delimiter. Rendering goes through [`JoinText`] rather than
//! [`std::fmt::Display`] so that `Option` elements have a defined textual
//! form: `None` renders as the literal placeholder `null`. Coherence rules out
//! a blanket `Display` impl alongside the `Option` one, so the leaf impls are
//! generated for the standard text and primitive types below.

use std::borrow::Cow;
use std::fmt::Write as _;

use crate::iter::safe_iter;

/// Textual form used by [`join_to_string`].
///
/// Implemented for the primitive types, `str`/`String`/`Cow<str>`, references
/// to any of those, and `Option<T>` of any of those (`None` renders as
/// `null`). Implement it for your own types to make them joinable; most impls
/// are one `write!` against an existing `Display`.
pub trait JoinText {
    /// Append this value's textual form to `buf`.
    fn append_to(&self, buf: &mut String);
}

macro_rules! join_text_via_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl JoinText for $ty {
                fn append_to(&self, buf: &mut String) {
                    // Writing to a String cannot fail.
                    let _ = write!(buf, "{}", self);
                }
            }
        )*
    };
}

join_text_via_display!(
    bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
);

impl JoinText for str {
    fn append_to(&self, buf: &mut String) {
        buf.push_str(self);
    }
}

impl JoinText for String {
    fn append_to(&self, buf: &mut String) {
        buf.push_str(self);
    }
}

impl JoinText for Cow<'_, str> {
    fn append_to(&self, buf: &mut String) {
        buf.push_str(self);
    }
}

impl<T: JoinText + ?Sized> JoinText for &T {
    fn append_to(&self, buf: &mut String) {
        (**self).append_to(buf);
    }
}

impl<T: JoinText> JoinText for Option<T> {
    fn append_to(&self, buf: &mut String) {
        match self {
            Some(value) => value.append_to(buf),
            None => buf.push_str("null"),
        }
    }
}

/// Join the textual form of each element with `delimiter`, in iteration
/// order. Absent or empty input yields the empty string.
///
/// ### Example
/// ```
/// use safestream::join_to_string;
///
/// assert_eq!(join_to_string(Some(vec![1, 2, 3]), ", "), "1, 2, 3");
/// assert_eq!(join_to_string(None::<Vec<i32>>, ", "), "");
///
/// // Absent elements render as the `null` placeholder.
/// let mixed = vec![Some("a"), None, Some("b")];
/// assert_eq!(join_to_string(Some(mixed), ","), "a,null,b");
/// ```
#[must_use]
pub fn join_to_string<C>(collection: Option<C>, delimiter: &str) -> String
where
    C: IntoIterator,
    C::Item: JoinText,
{
    let mut iter = safe_iter(collection);
    let mut out = String::new();
    if let Some(first) = iter.next() {
        first.append_to(&mut out);
        for item in iter {
            out.push_str(delimiter);
            item.append_to(&mut out);
        }
    }
    out
}
