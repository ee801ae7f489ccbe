//! Ordering of range edges.
//!
//! An edge is a [`Bound`], but whether an unbounded edge means −∞ or +∞, and
//! whether an included edge covers more or less than an excluded edge at the
//! same value, depends on the side of the range it sits on. The wrappers in
//! this module attach that side to a borrowed edge.

use std::{cmp::Ordering, ops::Bound};

/// The low edge of a range.
///
/// An unbounded low edge is smaller than any other low edge. At equal value an
/// included edge sorts before an excluded one.
pub(crate) struct LowerBound<'a, T>(pub(crate) &'a Bound<T>);

/// The high edge of a range.
///
/// An unbounded high edge is larger than any other high edge. At equal value
/// an excluded edge sorts before an included one.
pub(crate) struct UpperBound<'a, T>(pub(crate) &'a Bound<T>);

impl<T: Ord> Ord for LowerBound<'_, T> {
	fn cmp(&self, other: &Self) -> Ordering {
		match (self.0, other.0) {
			(Bound::Unbounded, Bound::Unbounded) => Ordering::Equal,
			(Bound::Unbounded, _) => Ordering::Less,
			(_, Bound::Unbounded) => Ordering::Greater,
			(Bound::Included(a), Bound::Included(b)) | (Bound::Excluded(a), Bound::Excluded(b)) => {
				a.cmp(b)
			}
			(Bound::Included(a), Bound::Excluded(b)) => a.cmp(b).then(Ordering::Less),
			(Bound::Excluded(a), Bound::Included(b)) => a.cmp(b).then(Ordering::Greater),
		}
	}
}

impl<T: Ord> PartialOrd for LowerBound<'_, T> {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl<T: Ord> PartialEq for LowerBound<'_, T> {
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other) == Ordering::Equal
	}
}

impl<T: Ord> Eq for LowerBound<'_, T> {}

impl<T: Ord> Ord for UpperBound<'_, T> {
	fn cmp(&self, other: &Self) -> Ordering {
		match (self.0, other.0) {
			(Bound::Unbounded, Bound::Unbounded) => Ordering::Equal,
			(Bound::Unbounded, _) => Ordering::Greater,
			(_, Bound::Unbounded) => Ordering::Less,
			(Bound::Included(a), Bound::Included(b)) | (Bound::Excluded(a), Bound::Excluded(b)) => {
				a.cmp(b)
			}
			(Bound::Included(a), Bound::Excluded(b)) => a.cmp(b).then(Ordering::Greater),
			(Bound::Excluded(a), Bound::Included(b)) => a.cmp(b).then(Ordering::Less),
		}
	}
}

impl<T: Ord> PartialOrd for UpperBound<'_, T> {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl<T: Ord> PartialEq for UpperBound<'_, T> {
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other) == Ordering::Equal
	}
}

impl<T: Ord> Eq for UpperBound<'_, T> {}

/// Returns the value of a finite edge.
pub(crate) fn value<T>(bound: &Bound<T>) -> Option<&T> {
	match bound {
		Bound::Included(v) | Bound::Excluded(v) => Some(v),
		Bound::Unbounded => None,
	}
}

/// Returns a copy of `bound` with its inclusivity swapped.
///
/// This is the edge of the complement on the other side of the same value.
pub(crate) fn flipped<T: Clone>(bound: &Bound<T>) -> Bound<T> {
	match bound {
		Bound::Included(v) => Bound::Excluded(v.clone()),
		Bound::Excluded(v) => Bound::Included(v.clone()),
		Bound::Unbounded => Bound::Unbounded,
	}
}

/// Returns whether `value` satisfies the low edge `low`.
pub(crate) fn above<T: Ord>(low: &Bound<T>, value: &T) -> bool {
	match low {
		Bound::Included(v) => v <= value,
		Bound::Excluded(v) => v < value,
		Bound::Unbounded => true,
	}
}

/// Returns whether `value` satisfies the high edge `high`.
pub(crate) fn below<T: Ord>(high: &Bound<T>, value: &T) -> bool {
	match high {
		Bound::Included(v) => value <= v,
		Bound::Excluded(v) => value < v,
		Bound::Unbounded => true,
	}
}

/// Returns whether the low edge `low` does not lie past the high edge `high`,
/// i.e. whether `low..high` covers at least one value.
///
/// Equal values only reach each other when both edges include the value.
pub(crate) fn reaches<T: Ord>(low: &Bound<T>, high: &Bound<T>) -> bool {
	match (low, high) {
		(Bound::Unbounded, _) | (_, Bound::Unbounded) => true,
		(Bound::Included(l), Bound::Included(h)) => l <= h,
		(Bound::Included(l) | Bound::Excluded(l), Bound::Included(h) | Bound::Excluded(h)) => l < h,
	}
}

/// Returns whether the high edge `high` and the low edge `low` meet at the
/// same value with at least one of them including it.
pub(crate) fn touches<T: Ord>(high: &Bound<T>, low: &Bound<T>) -> bool {
	match (high, low) {
		(Bound::Included(h), Bound::Included(l) | Bound::Excluded(l))
		| (Bound::Excluded(h), Bound::Included(l)) => h == l,
		_ => false,
	}
}

#[cfg(test)]
mod tests {
	use std::ops::Bound::{self, Excluded, Included, Unbounded};

	use super::*;

	#[test]
	fn test_lower_bound_order() {
		let mut bounds: Vec<Bound<i32>> = vec![
			Excluded(1),
			Included(2),
			Included(1),
			Unbounded,
			Excluded(0),
		];
		bounds.sort_by(|a, b| LowerBound(a).cmp(&LowerBound(b)));
		assert_eq!(
			bounds,
			vec![Unbounded, Excluded(0), Included(1), Excluded(1), Included(2)]
		);
	}

	#[test]
	fn test_upper_bound_order() {
		let mut bounds: Vec<Bound<i32>> = vec![
			Included(1),
			Unbounded,
			Excluded(1),
			Included(0),
			Excluded(2),
		];
		bounds.sort_by(|a, b| UpperBound(a).cmp(&UpperBound(b)));
		assert_eq!(
			bounds,
			vec![Included(0), Excluded(1), Included(1), Excluded(2), Unbounded]
		);
	}

	#[test]
	fn test_reaches() {
		assert!(reaches(&Included(1), &Included(1)));
		assert!(!reaches(&Included(1), &Excluded(1)));
		assert!(!reaches(&Excluded(1), &Included(1)));
		assert!(reaches(&Excluded(1), &Excluded(2)));
		assert!(!reaches(&Included(2), &Included(1)));
		assert!(reaches(&Unbounded, &Included(i32::MIN)));
		assert!(reaches(&Included(i32::MAX), &Unbounded));
	}

	#[test]
	fn test_touches() {
		assert!(touches(&Included(5), &Excluded(5)));
		assert!(touches(&Excluded(5), &Included(5)));
		assert!(touches(&Included(5), &Included(5)));
		assert!(!touches(&Excluded(5), &Excluded(5)));
		assert!(!touches(&Included(4), &Included(5)));
		assert!(!touches(&Unbounded, &Included(5)));
	}

	#[test]
	fn test_edges() {
		assert_eq!(value(&Excluded(3)), Some(&3));
		assert_eq!(value::<i32>(&Unbounded), None);
		assert_eq!(flipped(&Included(3)), Excluded(3));
		assert_eq!(flipped(&Excluded(3)), Included(3));
		assert!(above(&Included(3), &3));
		assert!(!above(&Excluded(3), &3));
		assert!(below(&Included(3), &3));
		assert!(!below(&Excluded(3), &3));
	}
}
