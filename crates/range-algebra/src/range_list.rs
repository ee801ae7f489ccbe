//! Canonical sets of values represented as sorted, disjoint ranges.

use std::{
	borrow::Cow,
	collections::hash_map::DefaultHasher,
	fmt::{self, Debug, Display},
	hash::{Hash, Hasher},
	iter, mem,
	ops::Bound,
	slice,
	sync::{Arc, OnceLock},
};

use itertools::Itertools;
use log::trace;

use crate::Range;

/// An immutable set of values represented as a sorted collection of
/// [`Range`] values.
///
/// The ranges are kept in canonical form: they are sorted by the [`Range`]
/// order, none of them is empty, and no two of them overlap or are adjacent.
/// Two lists covering the same values therefore have the same ranges, and
/// compare equal.
///
/// Every operation returns a new list; clones share their ranges. The empty
/// list contains no ranges, and the full list contains only [`Range::FULL`].
///
/// # Examples
///
/// ```
/// # use range_algebra::{Range, RangeList};
/// let list = RangeList::from(Range::create(20, 30).unwrap())
/// 	.add(Range::create_with(11, 12, false, true).unwrap());
/// assert_eq!(list.to_string(), "[(11)..12, 20..30]");
///
/// let inverse = list.invert();
/// assert_eq!(inverse.to_string(), "[..11, (12)..(20), (30)..]");
/// assert_eq!(inverse.invert(), list);
/// ```
#[derive(Clone)]
pub struct RangeList<T> {
	/// Canonical sequence of the ranges
	ranges: Arc<[Range<T>]>,
	/// Hash code of `ranges`, computed on first use
	hash: OnceLock<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RangeOrdering {
	/// A compared range is strictly less than another.
	Less,
	/// A compared range overlaps with another.
	Overlap,
	/// A compared range is strictly greater than another.
	Greater,
}

/// Returns whether two non-empty ranges overlap, or which one lies before the
/// other
fn overlap<T: Ord>(r1: &Range<T>, r2: &Range<T>) -> RangeOrdering {
	if r1.overlaps(r2) {
		RangeOrdering::Overlap
	} else if r1 < r2 {
		RangeOrdering::Less
	} else {
		RangeOrdering::Greater
	}
}

impl<T> RangeList<T> {
	/// Returns the list that contains no values.
	pub fn empty() -> Self {
		Self::from_canonical(Vec::new())
	}

	/// Returns the list that contains every value.
	pub fn full() -> Self {
		Self::from_canonical(vec![Range::FULL])
	}

	/// Wraps ranges that are already in canonical form.
	fn from_canonical(ranges: Vec<Range<T>>) -> Self {
		Self {
			ranges: ranges.into(),
			hash: OnceLock::new(),
		}
	}

	/// Returns `true` if the list contains no values.
	///
	/// # Examples
	///
	/// ```
	/// # use range_algebra::{Range, RangeList};
	/// assert!(!RangeList::from(Range::create(3, 4).unwrap()).is_empty());
	/// assert!(RangeList::<i64>::empty().is_empty());
	/// assert!(RangeList::from(Range::<i64>::EMPTY).is_empty());
	/// ```
	pub fn is_empty(&self) -> bool {
		self.ranges.is_empty()
	}

	/// Returns `true` if the list contains every value.
	pub fn is_full(&self) -> bool {
		matches!(&*self.ranges, [only] if only.is_full())
	}

	/// Returns the number of ranges in the list.
	pub fn len(&self) -> usize {
		self.ranges.len()
	}

	/// Returns the ranges of the list, in ascending order.
	pub fn as_slice(&self) -> &[Range<T>] {
		&self.ranges
	}

	/// Returns an iterator over the ranges of the list, in ascending order.
	pub fn iter(&self) -> slice::Iter<'_, Range<T>> {
		self.ranges.iter()
	}

	/// Returns the low edge of the list, or `None` if the list is empty.
	///
	/// # Examples
	///
	/// ```
	/// # use std::ops::Bound;
	/// # use range_algebra::{Range, RangeList};
	/// let list: RangeList<_> = [Range::create(1, 4).unwrap(), Range::create(-5, -3).unwrap()]
	/// 	.into_iter()
	/// 	.collect();
	/// assert_eq!(list.lower_bound(), Some(Bound::Included(&-5)));
	/// assert_eq!(list.upper_bound(), Some(Bound::Included(&4)));
	/// assert_eq!(RangeList::<i64>::empty().lower_bound(), None);
	/// assert_eq!(RangeList::<i64>::full().lower_bound(), Some(Bound::Unbounded));
	/// ```
	pub fn lower_bound(&self) -> Option<Bound<&T>> {
		self.ranges.first().and_then(Range::start_bound)
	}

	/// Returns the high edge of the list, or `None` if the list is empty.
	pub fn upper_bound(&self) -> Option<Bound<&T>> {
		self.ranges.last().and_then(Range::end_bound)
	}
}

impl<T: Ord + Clone> RangeList<T> {
	/// Builds the canonical list covering the values of all `ranges`.
	///
	/// Empty ranges are dropped, the rest are sorted and merged wherever they
	/// overlap or are adjacent.
	///
	/// # Examples
	///
	/// ```
	/// # use range_algebra::{Range, RangeList};
	/// let list = RangeList::from_ranges([
	/// 	Range::create(10, 12).unwrap(),
	/// 	Range::create(1, 2).unwrap(),
	/// 	Range::create_with(2, 3, false, true).unwrap(),
	/// 	Range::create(11, 15).unwrap(),
	/// 	Range::EMPTY,
	/// ]);
	/// assert_eq!(list.to_string(), "[1..3, 10..15]");
	/// ```
	pub fn from_ranges<I: IntoIterator<Item = Range<T>>>(ranges: I) -> Self {
		let mut non_empty: Vec<Range<T>> = ranges.into_iter().filter(|r| !r.is_empty()).collect();
		let count = non_empty.len();
		if count < 2 {
			return Self::from_canonical(non_empty);
		}
		if non_empty.iter().any(Range::is_full) {
			trace!("normalizing {count} ranges: input contains the full range");
			return Self::full();
		}
		non_empty.sort();
		let mut it = non_empty.into_iter();
		let Some(mut cur) = it.next() else {
			return Self::empty();
		};
		let mut ranges = Vec::with_capacity(count);
		for next in it {
			if cur.overlaps(&next) || cur.is_adjacent(&next) {
				cur = cur.union(&next);
				if cur.is_full() {
					trace!("normalizing {count} ranges: merged into the full range");
					return Self::full();
				}
			} else {
				ranges.push(mem::replace(&mut cur, next));
			}
		}
		ranges.push(cur);
		trace!("normalized {count} ranges into {}", ranges.len());
		Self::from_canonical(ranges)
	}

	/// Returns the list extended by the values of `range`.
	///
	/// Adding an empty range returns the list unchanged.
	pub fn add(&self, range: Range<T>) -> Self {
		if range.is_empty() {
			return self.clone();
		}
		Self::from_ranges(self.iter().cloned().chain(iter::once(range)))
	}

	/// Returns the list extended by the values of all `ranges`.
	pub fn add_ranges<I: IntoIterator<Item = Range<T>>>(&self, ranges: I) -> Self {
		let mut ranges = ranges.into_iter().peekable();
		if ranges.peek().is_none() {
			return self.clone();
		}
		Self::from_ranges(self.iter().cloned().chain(ranges))
	}

	/// Returns the list without the values of `range`.
	pub fn remove(&self, range: Range<T>) -> Self {
		self.remove_ranges(iter::once(range))
	}

	/// Returns the list without the values of any of `ranges`.
	///
	/// Ranges that overlap a removed range are replaced by the fragments left
	/// over by [`Range::exclude`]. The result shares its ranges with `self`
	/// when nothing overlaps.
	///
	/// # Examples
	///
	/// ```
	/// # use range_algebra::{Range, RangeList};
	/// let list = RangeList::from_ranges([Range::create(0, 10).unwrap(), Range::create(20, 30).unwrap()]);
	/// let rest = list.remove_ranges([Range::create(5, 25).unwrap()]);
	/// assert_eq!(rest.to_string(), "[0..(5), (25)..30]");
	///
	/// assert!(RangeList::<i32>::full().remove_ranges([Range::FULL]).is_empty());
	/// ```
	pub fn remove_ranges<I: IntoIterator<Item = Range<T>>>(&self, ranges: I) -> Self {
		let mut current: Cow<'_, [Range<T>]> = Cow::Borrowed(&self.ranges[..]);
		for removed in ranges {
			if removed.is_empty() {
				continue;
			}
			let mut i = 0;
			while i < current.len() {
				if !current[i].overlaps(&removed) {
					if current[i] > removed {
						// All remaining ranges start after `removed` ends
						break;
					}
					i += 1;
					continue;
				}
				let fragments: Vec<_> = current[i]
					.exclude(&removed)
					.filter(|r| !r.is_empty())
					.collect();
				let inserted = fragments.len();
				if let Cow::Borrowed(_) = current {
					trace!("copying {} ranges for removal", current.len());
				}
				let _ = current.to_mut().splice(i..=i, fragments);
				i += inserted;
			}
		}
		match current {
			Cow::Borrowed(_) => self.clone(),
			Cow::Owned(ranges) => Self::from_canonical(ranges),
		}
	}

	/// Returns the list of values contained in both the list and `ranges`.
	///
	/// Every supplied range is intersected with every range of the list.
	pub fn intersect<I: IntoIterator<Item = Range<T>>>(&self, ranges: I) -> Self {
		if self.is_empty() {
			return self.clone();
		}
		Self::from_ranges(
			ranges
				.into_iter()
				.flat_map(move |r| self.iter().map(move |e| e.intersect(&r))),
		)
	}

	/// Returns the list of all values not contained in the list.
	pub fn invert(&self) -> Self {
		if self.is_empty() {
			Self::full()
		} else if self.is_full() {
			Self::empty()
		} else {
			Self::full().remove_ranges(self.iter().cloned())
		}
	}

	/// Returns the list of all values not contained in the list.
	///
	/// This is the same operation as [`RangeList::invert`].
	pub fn complement(&self) -> Self {
		self.invert()
	}

	/// Returns the set union of two lists.
	pub fn union_with(&self, other: &Self) -> Self {
		self.add_ranges(other.iter().cloned())
	}

	/// Returns the values of the list that are not contained in `other`.
	pub fn subtract(&self, other: &Self) -> Self {
		self.remove_ranges(other.iter().cloned())
	}

	/// Returns the set intersection of two lists.
	pub fn intersect_with(&self, other: &Self) -> Self {
		self.intersect(other.iter().cloned())
	}
}

impl<T: Ord> RangeList<T> {
	/// Returns `true` if `item` is contained in the list.
	///
	/// # Examples
	///
	/// ```
	/// # use range_algebra::{Range, RangeList};
	/// let list = RangeList::from_ranges([
	/// 	Range::create(1, 4).unwrap(),
	/// 	Range::create_exclusive(6, 7).unwrap(),
	/// 	Range::create(-5, -3).unwrap(),
	/// ]);
	/// assert!(list.contains(&4));
	/// assert!(list.contains(&-5));
	/// assert!(!list.contains(&0));
	/// assert!(!list.contains(&7));
	/// assert!(!RangeList::empty().contains(&0));
	/// assert!(RangeList::full().contains(&0));
	/// ```
	pub fn contains(&self, item: &T) -> bool {
		let after = self.ranges.partition_point(|r| r.starts_at_or_before(item));
		after > 0 && self.ranges[after - 1].contains(item)
	}

	/// Returns whether `self` and `other` have no values in common.
	pub fn is_disjoint(&self, other: &Self) -> bool {
		let mut lhs = self.iter().peekable();
		let mut rhs = other.iter().peekable();
		while let (Some(l), Some(r)) = (lhs.peek(), rhs.peek()) {
			match overlap(l, r) {
				RangeOrdering::Less => {
					// Move to next "self range"
					let _ = lhs.next();
				}
				RangeOrdering::Overlap => return false,
				RangeOrdering::Greater => {
					// Move to next "other range"
					let _ = rhs.next();
				}
			}
		}
		true
	}

	/// Returns whether every value of `self` is contained in `other`.
	pub fn is_subset(&self, other: &Self) -> bool {
		let mut lhs = self.iter().peekable();
		let mut rhs = other.iter().peekable();
		while let (Some(l), Some(r)) = (lhs.peek(), rhs.peek()) {
			match overlap(l, r) {
				RangeOrdering::Overlap if r.encloses(l) => {
					// Current "self range" is included in the current other range
					// Move to next "self range" that needs to be covered
					let _ = lhs.next();
				}
				RangeOrdering::Greater => {
					// Move to next "other range"
					let _ = rhs.next();
				}
				_ => {
					// Current "self range" can no longer be covered
					return false;
				}
			}
		}
		lhs.peek().is_none()
	}

	/// Returns whether every value of `other` is contained in `self`.
	pub fn is_superset(&self, other: &Self) -> bool {
		other.is_subset(self)
	}
}

impl<T: Hash> RangeList<T> {
	/// Returns the hash code of the list.
	///
	/// The code is computed from the ranges on first use and then reused.
	pub fn hash_code(&self) -> u64 {
		*self.hash.get_or_init(|| {
			let mut hasher = DefaultHasher::new();
			self.ranges.hash(&mut hasher);
			hasher.finish()
		})
	}
}

impl<T: Debug> Debug for RangeList<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &*self.ranges {
			[] => write!(f, "RangeList::empty()"),
			[only] if only.is_full() => write!(f, "RangeList::full()"),
			[only] => write!(f, "RangeList::from({:?})", only),
			ranges => write!(f, "RangeList::from_ranges([{:?}])", ranges.iter().format(", ")),
		}
	}
}

impl<T: Display> Display for RangeList<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[{}]", self.ranges.iter().format(", "))
	}
}

impl<T> Default for RangeList<T> {
	fn default() -> Self {
		Self::empty()
	}
}

impl<T: PartialEq> PartialEq for RangeList<T> {
	fn eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.ranges, &other.ranges) || self.ranges == other.ranges
	}
}

impl<T: Eq> Eq for RangeList<T> {}

impl<T: Hash> Hash for RangeList<T> {
	fn hash<H: Hasher>(&self, state: &mut H) {
		state.write_u64(self.hash_code());
	}
}

impl<T: Ord + Clone> From<Range<T>> for RangeList<T> {
	fn from(value: Range<T>) -> Self {
		Self::from_ranges(iter::once(value))
	}
}

impl<T, R> FromIterator<R> for RangeList<T>
where
	T: Ord + Clone,
	R: Into<Range<T>>,
{
	fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
		Self::from_ranges(iter.into_iter().map(Into::into))
	}
}

impl<T: Clone> IntoIterator for RangeList<T> {
	type IntoIter = std::vec::IntoIter<Range<T>>;
	type Item = Range<T>;

	fn into_iter(self) -> Self::IntoIter {
		self.ranges.to_vec().into_iter()
	}
}

impl<'a, T> IntoIterator for &'a RangeList<T> {
	type IntoIter = slice::Iter<'a, Range<T>>;
	type Item = &'a Range<T>;

	fn into_iter(self) -> Self::IntoIter {
		self.ranges.iter()
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use expect_test::expect;

	use super::*;

	fn r(start: i64, end: i64) -> Range<i64> {
		Range::create(start, end).unwrap()
	}

	fn list<const N: usize>(ranges: [(i64, i64); N]) -> RangeList<i64> {
		ranges.into_iter().map(|(s, e)| r(s, e)).collect()
	}

	#[test]
	fn test_rangelist() {
		let empty: RangeList<i64> = RangeList::default();
		expect![[r#"
    RangeList::empty()
"#]]
		.assert_debug_eq(&empty);
		assert!(empty.is_empty());
		assert_eq!(empty.len(), 0);

		let single_range = list([(1, 4)]);
		expect![[r#"
    RangeList::from(Range(1..4))
"#]]
		.assert_debug_eq(&single_range);
		assert!(!single_range.is_empty());
		assert!(single_range.contains(&1));
		assert!(single_range.contains(&2));
		assert!(single_range.contains(&4));
		assert!(!single_range.contains(&0));
		assert!(!single_range.contains(&5));

		let multi_range = list([(1, 4), (6, 7), (-5, -3)]);
		expect![[r#"
    RangeList::from_ranges([Range(-5..-3), Range(1..4), Range(6..7)])
"#]]
		.assert_debug_eq(&multi_range);
		assert!(multi_range.contains(&-5));
		assert!(multi_range.contains(&-3));
		assert!(multi_range.contains(&1));
		assert!(multi_range.contains(&4));
		assert!(multi_range.contains(&6));
		assert!(multi_range.contains(&7));
		assert!(!multi_range.contains(&0));
		assert!(!multi_range.contains(&5));
		assert!(!multi_range.contains(&-6));
		assert!(!multi_range.contains(&8));

		let collapse_range = list([(1, 2), (2, 3), (10, 12), (11, 15)]);
		expect![[r#"
    RangeList::from_ranges([Range(1..3), Range(10..15)])
"#]]
		.assert_debug_eq(&collapse_range);

		let full = RangeList::from_ranges([r(1, 2), Range::FULL, r(5, 6)]);
		expect![[r#"
    RangeList::full()
"#]]
		.assert_debug_eq(&full);
		assert!(full.is_full());

		let text_range = RangeList::from_ranges([
			Range::create("apple", "cherry").unwrap(),
			Range::create("banana", "date").unwrap(),
			Range::simple("fig"),
		]);
		expect!["[apple..date, fig..fig]"].assert_eq(&text_range.to_string());
	}

	#[test]
	fn test_normalization() {
		// Adjacent ranges merge when one side includes the shared value
		let x = RangeList::from_ranges([
			Range::create_with(0, 5, true, false).unwrap(),
			Range::create(5, 8).unwrap(),
		]);
		expect!["[0..8]"].assert_eq(&x.to_string());

		// An excluded value on both sides keeps a gap
		let y = RangeList::from_ranges([
			Range::create_with(0, 5, true, false).unwrap(),
			Range::create_with(5, 8, false, true).unwrap(),
		]);
		expect!["[0..(5), (5)..8]"].assert_eq(&y.to_string());
		assert!(!y.contains(&5));

		// Half unbounded ranges meeting in the middle cover everything
		let z = RangeList::from_ranges([Range::ends_with(3, true), Range::starts_with(3, false)]);
		assert!(z.is_full());

		let nested = list([(0, 100), (10, 20), (30, 40), (-10, 0)]);
		expect!["[-10..100]"].assert_eq(&nested.to_string());

		assert_eq!(RangeList::from_ranges(nested.iter().cloned()), nested);
		assert!(RangeList::<i64>::from_ranges([Range::EMPTY, Range::EMPTY]).is_empty());
	}

	#[test]
	fn test_display_rangelist() {
		let empty: RangeList<i64> = RangeList::default();
		assert_eq!(empty.to_string(), "[]");
		assert_eq!(RangeList::<i64>::full().to_string(), "[...]");

		let single_range = list([(1, 4)]);
		assert_eq!(single_range.to_string(), "[1..4]");

		let multi_range = list([(1, 4), (6, 7), (-5, -3)]);
		assert_eq!(multi_range.to_string(), "[-5..-3, 1..4, 6..7]");
	}

	#[test]
	fn test_add() {
		let x = list([(20, 30)]);
		let y = x.add(Range::create_with(11, 12, false, true).unwrap());
		expect!["[(11)..12, 20..30]"].assert_eq(&y.to_string());
		expect!["[(11)..30]"].assert_eq(&y.add(r(12, 20)).to_string());
		assert!(Arc::ptr_eq(&x.add(Range::EMPTY).ranges, &x.ranges));
		assert!(x.add(Range::FULL).is_full());

		let z = x.add_ranges([r(0, 1), r(29, 40), r(2, 3)]);
		expect!["[0..1, 2..3, 20..40]"].assert_eq(&z.to_string());
		assert!(Arc::ptr_eq(&x.add_ranges([]).ranges, &x.ranges));
	}

	#[test]
	fn test_remove() {
		let x = list([(1, 5)]);
		expect!["[1..(4)]"].assert_eq(&x.remove(r(4, 9)).to_string());
		expect!["[]"].assert_eq(&x.remove(r(1, 5)).to_string());
		expect!["[1..(2), (4)..5]"].assert_eq(&x.remove(r(2, 4)).to_string());
		expect!["[1..5]"].assert_eq(&x.remove(Range::create_exclusive(5, 6).unwrap()).to_string());
		expect!["[1..5]"].assert_eq(&x.remove(Range::EMPTY).to_string());

		let y = list([(1, 3), (5, 7), (9, 11)]);
		let z = y.remove_ranges([r(2, 2), r(6, 10)]);
		expect!["[1..(2), (2)..3, 5..(6), (10)..11]"].assert_eq(&z.to_string());
		let z = y.remove_ranges([r(-1, 10)]);
		expect!["[(10)..11]"].assert_eq(&z.to_string());

		// Untouched lists share their ranges
		let untouched = y.remove_ranges([r(4, 4), r(8, 8), r(20, 30)]);
		assert!(Arc::ptr_eq(&untouched.ranges, &y.ranges));
		assert_eq!(untouched, y);

		assert!(RangeList::<i64>::full().remove_ranges([Range::FULL]).is_empty());
		expect!["[..(1), (5)..]"].assert_eq(&RangeList::full().remove(r(1, 5)).to_string());
		assert!(RangeList::<i64>::empty().remove(r(1, 5)).is_empty());
	}

	#[test]
	fn test_invert() {
		let x = list([(20, 30)]).add(Range::create_with(11, 12, false, true).unwrap());
		let inverse = x.invert();
		expect!["[..11, (12)..(20), (30)..]"].assert_eq(&inverse.to_string());
		assert_eq!(inverse.invert(), x);
		assert_eq!(x.complement(), inverse);

		assert!(RangeList::<i64>::empty().invert().is_full());
		assert!(RangeList::<i64>::full().invert().is_empty());
		let unbounded = RangeList::from(Range::starts_with(0, true));
		expect!["[..(0)]"].assert_eq(&unbounded.invert().to_string());
	}

	#[test]
	fn test_intersect() {
		let x = list([(1, 5)]);
		expect!["[4..5]"].assert_eq(&x.intersect([r(4, 9)]).to_string());
		expect!["[1..2, 4..5]"].assert_eq(&x.intersect([r(1, 2), r(4, 9)]).to_string());
		expect!["[]"].assert_eq(&x.intersect([r(6, 9)]).to_string());
		expect!["[]"].assert_eq(&x.intersect([]).to_string());
		expect!["[1..5]"].assert_eq(&x.intersect([Range::FULL]).to_string());

		let y = list([(-5, -1), (1, 3)]);
		expect!["[1..3]"].assert_eq(&x.intersect_with(&y).to_string());
		expect!["[1..3]"].assert_eq(&y.intersect_with(&x).to_string());
		assert_eq!(RangeList::full().intersect_with(&y), y);
		assert!(RangeList::empty().intersect_with(&y).is_empty());
	}

	#[test]
	fn test_set_operations() {
		let x = list([(1, 5)]);
		let y = list([(4, 9)]);
		expect!["[1..9]"].assert_eq(&x.union_with(&y).to_string());
		expect!["[1..(4)]"].assert_eq(&x.subtract(&y).to_string());
		expect!["[(5)..9]"].assert_eq(&y.subtract(&x).to_string());
		assert!(x.subtract(&x).is_empty());

		let z = list([(-5, -1), (6, 9)]);
		expect!["[-5..-1, 1..5, 6..9]"].assert_eq(&x.union_with(&z).to_string());
		assert_eq!(x.union_with(&z), z.union_with(&x));
	}

	#[test]
	fn test_set_subset() {
		let empty = RangeList::<i64>::empty();
		let inf = RangeList::<i64>::full();
		assert!(empty.is_subset(&inf));
		assert!(!inf.is_subset(&empty));

		let x = list([(1, 5)]);
		let y = list([(1, 9)]);
		assert!(x.is_subset(&x));
		assert!(x.is_subset(&y));
		assert!(!y.is_subset(&x));
		assert!(y.is_superset(&x));
		assert!(x.is_subset(&inf));

		let x = list([(1, 2), (4, 9)]);
		assert!(x.is_subset(&x));
		assert!(x.is_subset(&y));

		let open = RangeList::from(Range::create_exclusive(1, 9).unwrap());
		assert!(!y.is_subset(&open));
		assert!(open.is_subset(&y));
	}

	#[test]
	fn test_set_disjoint() {
		let empty = RangeList::<i64>::empty();
		let inf = RangeList::<i64>::full();

		assert!(empty.is_disjoint(&empty));
		assert!(empty.is_disjoint(&inf));
		assert!(inf.is_disjoint(&empty));
		assert!(!inf.is_disjoint(&inf));

		let x = list([(1, 2), (4, 6), (8, 9)]);
		assert!(empty.is_disjoint(&x));
		assert!(x.is_disjoint(&empty));
		assert!(!x.is_disjoint(&x));
		assert!(!inf.is_disjoint(&x));
		assert!(!x.is_disjoint(&inf));

		let y = list([(3, 3), (7, 7)]);
		assert!(x.is_disjoint(&y));
		assert!(y.is_disjoint(&x));

		let touching = RangeList::from(Range::create_with(2, 4, false, false).unwrap());
		assert!(x.is_disjoint(&touching));
	}

	#[test]
	fn test_bounds_and_iteration() {
		let x = list([(1, 4), (6, 7)]);
		assert_eq!(x.lower_bound(), Some(Bound::Included(&1)));
		assert_eq!(x.upper_bound(), Some(Bound::Included(&7)));
		assert_eq!(RangeList::<i64>::empty().upper_bound(), None);
		assert_eq!(RangeList::<i64>::full().upper_bound(), Some(Bound::Unbounded));

		let borrowed: Vec<String> = (&x).into_iter().map(|r| r.to_string()).collect();
		assert_eq!(borrowed, ["1..4", "6..7"]);
		assert_eq!(x.as_slice().len(), x.len());
		let owned: Vec<Range<i64>> = x.clone().into_iter().collect();
		assert_eq!(owned, x.as_slice());
	}

	#[test]
	fn test_equality_and_hash() {
		let x = list([(1, 4), (6, 7)]);
		let y = list([(6, 7), (1, 2), (2, 4)]);
		assert_eq!(x, y);
		assert_eq!(x.hash_code(), y.hash_code());
		assert_eq!(x.hash_code(), x.hash_code());
		assert_ne!(x, list([(1, 4)]));
		assert_eq!(RangeList::<i64>::empty(), RangeList::default());
		assert_eq!(RangeList::<i64>::full(), RangeList::from(Range::FULL));

		let set: HashSet<_> = [x.clone(), y, x.invert().invert()].into_iter().collect();
		assert_eq!(set.len(), 1);
	}
}
