//! A module containing the [`Container`] capability and the generic algorithms written against
//! it.
//!
//! The trait describes the smallest surface a sequence type needs for the algorithms here:
//! appending, counting and positional lookup. Whether two containers can be compared is a
//! property of their element type rather than of the containers, so the comparisons are free
//! functions bounded on [`PartialEq`] instead of methods of the trait itself.

mod container;
mod matching;
mod tests;

pub use container::*;
pub use matching::*;
