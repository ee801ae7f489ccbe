//! Errors reported when building ranges.

use thiserror::Error;

/// Error returned when a range is constructed with a start that lies past its
/// end.
///
/// # Examples
///
/// ```
/// # use range_algebra::{InvalidRange, Range};
/// assert_eq!(Range::create(3, 1), Err(InvalidRange));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("range start is greater than range end")]
pub struct InvalidRange;

/// Error returned when parsing the text notation of a [`crate::Range`] or
/// [`crate::RangeList`] fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseRangeError {
	/// The input does not follow the range notation.
	#[error("unexpected input {remaining:?} in range notation")]
	Syntax {
		/// The part of the input that could not be parsed
		remaining: String,
	},
	/// An edge of the range could not be parsed as a value.
	#[error("invalid range edge {text:?}")]
	Value {
		/// Text of the offending edge
		text: String,
	},
	/// The parsed edges are in the wrong order.
	#[error(transparent)]
	InvalidRange(#[from] InvalidRange),
}
