//! Interval algebra over totally ordered values.
//!
//! A [`Range`] is a single interval whose edges can each be included,
//! excluded, or unbounded. A [`RangeList`] is an immutable set of values
//! represented by sorted, disjoint ranges, and supports union, difference,
//! intersection, and complement.
//!
//! Both types print in a compact notation, and can be parsed back from it:
//! an included edge is written as its value, an excluded edge as its value in
//! parentheses, and an unbounded edge is left out.
//!
//! ```
//! # use range_algebra::{Range, RangeList};
//! let list = RangeList::from(Range::create(20, 30).unwrap())
//! 	.add(Range::create_with(11, 12, false, true).unwrap());
//! assert_eq!(list.to_string(), "[(11)..12, 20..30]");
//! assert_eq!(list.invert().to_string(), "[..11, (12)..(20), (30)..]");
//! assert_eq!("[..11, (12)..(20), (30)..]".parse(), Ok(list.invert()));
//! ```

mod bound;
mod error;
mod parser;
mod range;
mod range_list;

pub use error::{InvalidRange, ParseRangeError};
pub use range::{Fragments, Range};
pub use range_list::RangeList;
