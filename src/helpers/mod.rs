pub(crate) mod counters;
pub(crate) mod finders;
pub(crate) mod iterators;
pub(crate) mod matchers;
pub(crate) mod sets;
pub(crate) mod strings;
pub(crate) mod vecs;

pub use counters::*;
pub use finders::*;
pub use iterators::*;
pub use matchers::*;
pub use sets::*;
pub use strings::*;
pub use vecs::*;
