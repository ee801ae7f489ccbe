//! A single interval over a totally ordered domain.

use std::{
	cmp::{self, Ordering},
	fmt::{self, Debug, Display},
	iter::FusedIterator,
	ops::{self, Bound, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive},
};

use crate::{
	bound::{self, LowerBound, UpperBound},
	InvalidRange,
};

/// Internal representation of a [`Range`]
#[derive(Clone, PartialEq, Eq, Hash)]
enum Inner<T> {
	/// The range covering no value
	Empty,
	/// A range covering at least one value
	Bounded {
		/// The low edge
		start: Bound<T>,
		/// The high edge
		end: Bound<T>,
	},
}

/// An interval of values with included, excluded, or unbounded edges.
///
/// A range is either empty, or covers every value between its start and its
/// end. Ranges are normalized on construction: an empty range is always
/// [`Range::EMPTY`], the unrestricted range is always [`Range::FULL`], and a
/// range whose edges share a value is either a single point (both edges
/// included) or empty.
///
/// All operations leave `self` untouched and return new values.
///
/// # Examples
///
/// ```
/// # use range_algebra::Range;
/// let r = Range::create(0, 10).unwrap();
/// assert!(r.contains(&0));
/// assert!(r.contains(&10));
/// assert_eq!(r.to_string(), "0..10");
///
/// let half_open = Range::create_with(0, 10, true, false).unwrap();
/// assert!(!half_open.contains(&10));
/// assert_eq!(half_open.to_string(), "0..(10)");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Range<T> {
	/// Normalized edges of the range
	inner: Inner<T>,
}

/// Iterator over the (at most two) fragments produced by [`Range::exclude`]
/// and [`Range::invert`].
#[derive(Debug, Clone)]
pub struct Fragments<T> {
	/// The fragment to be yielded first
	front: Option<Range<T>>,
	/// The fragment to be yielded last
	back: Option<Range<T>>,
}

impl<T> Range<T> {
	/// The range that contains no values.
	pub const EMPTY: Self = Self { inner: Inner::Empty };

	/// The range that contains every value.
	pub const FULL: Self = Self {
		inner: Inner::Bounded {
			start: Bound::Unbounded,
			end: Bound::Unbounded,
		},
	};

	/// Returns the range that contains no values.
	pub const fn empty() -> Self {
		Self::EMPTY
	}

	/// Returns the range that contains every value.
	pub const fn full() -> Self {
		Self::FULL
	}

	/// Returns the range of all values from `start` upwards.
	///
	/// # Examples
	///
	/// ```
	/// # use range_algebra::Range;
	/// let r = Range::starts_with(10, false);
	/// assert!(!r.contains(&10));
	/// assert!(r.contains(&11));
	/// assert_eq!(r.to_string(), "(10)..");
	/// ```
	pub fn starts_with(start: T, inclusive: bool) -> Self {
		Self::bounded(edge(start, inclusive), Bound::Unbounded)
	}

	/// Returns the range of all values up to `end`.
	pub fn ends_with(end: T, inclusive: bool) -> Self {
		Self::bounded(Bound::Unbounded, edge(end, inclusive))
	}

	/// Creates a range from edges that are known to be valid and normalized.
	fn bounded(start: Bound<T>, end: Bound<T>) -> Self {
		Self {
			inner: Inner::Bounded { start, end },
		}
	}

	/// Returns both edges, or `None` for the empty range.
	fn edges(&self) -> Option<(&Bound<T>, &Bound<T>)> {
		match &self.inner {
			Inner::Empty => None,
			Inner::Bounded { start, end } => Some((start, end)),
		}
	}

	/// Returns `true` if the range contains no values.
	pub fn is_empty(&self) -> bool {
		matches!(self.inner, Inner::Empty)
	}

	/// Returns `true` if the range is unbounded on both sides.
	pub fn is_full(&self) -> bool {
		matches!(
			self.inner,
			Inner::Bounded {
				start: Bound::Unbounded,
				end: Bound::Unbounded
			}
		)
	}

	/// Returns the low edge, or `None` for the empty range.
	pub fn start_bound(&self) -> Option<Bound<&T>> {
		self.edges().map(|(start, _)| start.as_ref())
	}

	/// Returns the high edge, or `None` for the empty range.
	pub fn end_bound(&self) -> Option<Bound<&T>> {
		self.edges().map(|(_, end)| end.as_ref())
	}

	/// Returns the start value, if the range has a finite start.
	pub fn start(&self) -> Option<&T> {
		self.edges().and_then(|(start, _)| bound::value(start))
	}

	/// Returns the end value, if the range has a finite end.
	pub fn end(&self) -> Option<&T> {
		self.edges().and_then(|(_, end)| bound::value(end))
	}

	/// Returns `true` if the range has a finite start.
	pub fn has_start(&self) -> bool {
		self.start().is_some()
	}

	/// Returns `true` if the range has a finite end.
	pub fn has_end(&self) -> bool {
		self.end().is_some()
	}

	/// Returns `true` if the range has a finite start that it contains.
	pub fn includes_start(&self) -> bool {
		matches!(self.start_bound(), Some(Bound::Included(_)))
	}

	/// Returns `true` if the range has a finite end that it contains.
	pub fn includes_end(&self) -> bool {
		matches!(self.end_bound(), Some(Bound::Included(_)))
	}
}

impl<T: Ord> Range<T> {
	/// Creates a range from its two edges.
	///
	/// Edges sharing a value produce a single point range when at least one of
	/// them includes the value, and [`Range::EMPTY`] otherwise.
	///
	/// # Errors
	///
	/// Returns [`InvalidRange`] when both edges are finite and the start is
	/// greater than the end.
	///
	/// # Examples
	///
	/// ```
	/// # use std::ops::Bound;
	/// # use range_algebra::{InvalidRange, Range};
	/// let r = Range::new(Bound::Included(1), Bound::Excluded(1)).unwrap();
	/// assert_eq!(r, Range::simple(1));
	///
	/// let r = Range::new(Bound::Excluded(1), Bound::Excluded(1)).unwrap();
	/// assert!(r.is_empty());
	///
	/// assert_eq!(Range::new(Bound::Included(2), Bound::Unbounded).unwrap().to_string(), "2..");
	/// assert_eq!(Range::new(Bound::Included(2), Bound::Included(1)), Err(InvalidRange));
	/// ```
	pub fn new(start: Bound<T>, end: Bound<T>) -> Result<Self, InvalidRange> {
		let order = match (&start, &end) {
			(
				Bound::Included(s) | Bound::Excluded(s),
				Bound::Included(e) | Bound::Excluded(e),
			) => s.cmp(e),
			_ => Ordering::Less,
		};
		match order {
			Ordering::Less => Ok(Self::bounded(start, end)),
			Ordering::Greater => Err(InvalidRange),
			Ordering::Equal => Ok(match (start, end) {
				(Bound::Included(s) | Bound::Excluded(s), Bound::Included(e))
				| (Bound::Included(s), Bound::Excluded(e)) => {
					Self::bounded(Bound::Included(s), Bound::Included(e))
				}
				_ => Self::EMPTY,
			}),
		}
	}

	/// Creates a range from optional edge values.
	///
	/// A `None` value leaves that side unbounded, in which case its inclusion
	/// flag is ignored.
	///
	/// # Errors
	///
	/// Returns [`InvalidRange`] when both values are present and `start` is
	/// greater than `end`.
	pub fn from_options(
		start: Option<T>,
		end: Option<T>,
		include_start: bool,
		include_end: bool,
	) -> Result<Self, InvalidRange> {
		Self::new(
			start.map_or(Bound::Unbounded, |v| edge(v, include_start)),
			end.map_or(Bound::Unbounded, |v| edge(v, include_end)),
		)
	}

	/// Creates the range from `start` to `end`, both included.
	///
	/// # Errors
	///
	/// Returns [`InvalidRange`] when `start` is greater than `end`.
	pub fn create(start: T, end: T) -> Result<Self, InvalidRange> {
		Self::new(Bound::Included(start), Bound::Included(end))
	}

	/// Creates the range from `start` to `end` with explicit inclusion of both
	/// edges.
	///
	/// # Errors
	///
	/// Returns [`InvalidRange`] when `start` is greater than `end`.
	pub fn create_with(
		start: T,
		end: T,
		include_start: bool,
		include_end: bool,
	) -> Result<Self, InvalidRange> {
		Self::new(edge(start, include_start), edge(end, include_end))
	}

	/// Creates the range between `start` and `end`, both excluded.
	///
	/// # Errors
	///
	/// Returns [`InvalidRange`] when `start` is greater than `end`.
	pub fn create_exclusive(start: T, end: T) -> Result<Self, InvalidRange> {
		Self::new(Bound::Excluded(start), Bound::Excluded(end))
	}

	/// Returns `true` if the range is a single included value.
	pub fn is_single_point(&self) -> bool {
		matches!(
			self.edges(),
			Some((Bound::Included(s), Bound::Included(e))) if s == e
		)
	}

	/// Returns `true` if `value` lies within the range.
	pub fn contains(&self, value: &T) -> bool {
		self.edges()
			.is_some_and(|(start, end)| bound::above(start, value) && bound::below(end, value))
	}

	/// Returns `true` if the low edge of the range admits `value`, i.e. no
	/// value at or below `value` is cut off by the start of the range.
	pub(crate) fn starts_at_or_before(&self, value: &T) -> bool {
		self.edges()
			.is_some_and(|(start, _)| bound::above(start, value))
	}

	/// Returns `true` if both ranges share at least one value.
	///
	/// # Examples
	///
	/// ```
	/// # use range_algebra::Range;
	/// let a = Range::create(0, 5).unwrap();
	/// assert!(a.overlaps(&Range::create(5, 10).unwrap()));
	/// assert!(!a.overlaps(&Range::create_with(5, 10, false, true).unwrap()));
	/// assert!(a.overlaps(&Range::FULL));
	/// assert!(!Range::<i32>::FULL.overlaps(&Range::EMPTY));
	/// ```
	pub fn overlaps(&self, other: &Self) -> bool {
		match (self.edges(), other.edges()) {
			(Some((s1, e1)), Some((s2, e2))) => bound::reaches(s1, e2) && bound::reaches(s2, e1),
			_ => false,
		}
	}

	/// Returns `true` if the end of one range meets the start of the other at
	/// the same value, and at least one of them includes that value.
	///
	/// Adjacent ranges can be merged into a single range without filling a
	/// gap.
	pub fn is_adjacent(&self, other: &Self) -> bool {
		match (self.edges(), other.edges()) {
			(Some((s1, e1)), Some((s2, e2))) => bound::touches(e1, s2) || bound::touches(e2, s1),
			_ => false,
		}
	}

	/// Returns `true` if every value of `other` lies within `self`.
	pub fn encloses(&self, other: &Self) -> bool {
		match (self.edges(), other.edges()) {
			(_, None) => true,
			(None, Some(_)) => false,
			(Some((s1, e1)), Some((s2, e2))) => {
				LowerBound(s1) <= LowerBound(s2) && UpperBound(e2) <= UpperBound(e1)
			}
		}
	}
}

impl<T: Ord + Clone> Range<T> {
	/// Returns the range containing only `value`.
	pub fn simple(value: T) -> Self {
		Self::bounded(Bound::Included(value.clone()), Bound::Included(value))
	}

	/// Returns a copy of the range with its start replaced by `start`.
	///
	/// The empty range has no end to keep, so the result is unbounded above.
	///
	/// # Errors
	///
	/// Returns [`InvalidRange`] when `start` lies past the end of the range.
	pub fn with_start(&self, start: Bound<T>) -> Result<Self, InvalidRange> {
		Self::new(start, self.end_bound().map_or(Bound::Unbounded, Bound::cloned))
	}

	/// Returns a copy of the range with its end replaced by `end`.
	///
	/// The empty range has no start to keep, so the result is unbounded below.
	///
	/// # Errors
	///
	/// Returns [`InvalidRange`] when `end` lies before the start of the range.
	pub fn with_end(&self, end: Bound<T>) -> Result<Self, InvalidRange> {
		Self::new(self.start_bound().map_or(Bound::Unbounded, Bound::cloned), end)
	}

	/// Returns the single range covering both `self` and `other`.
	///
	/// If either range is empty, the other is returned. When the ranges
	/// neither overlap nor are adjacent their union is not a single interval,
	/// and [`Range::EMPTY`] is returned instead. This is not the smallest
	/// enclosing range; callers must check for the empty result.
	///
	/// # Examples
	///
	/// ```
	/// # use range_algebra::Range;
	/// let a = Range::create(0, 5).unwrap();
	/// let b = Range::create_with(5, 10, false, false).unwrap();
	/// assert_eq!(a.union(&b), Range::create_with(0, 10, true, false).unwrap());
	///
	/// let c = Range::create(20, 30).unwrap();
	/// assert!(a.union(&c).is_empty());
	/// ```
	pub fn union(&self, other: &Self) -> Self {
		let (Some((s1, e1)), Some((s2, e2))) = (self.edges(), other.edges()) else {
			return if self.is_empty() {
				other.clone()
			} else {
				self.clone()
			};
		};
		if !self.overlaps(other) && !self.is_adjacent(other) {
			return Self::EMPTY;
		}
		let start = cmp::min(LowerBound(s1), LowerBound(s2)).0;
		let end = cmp::max(UpperBound(e1), UpperBound(e2)).0;
		Self::bounded(start.clone(), end.clone())
	}

	/// Returns the range of values contained in both `self` and `other`.
	///
	/// # Examples
	///
	/// ```
	/// # use range_algebra::Range;
	/// let a = Range::ends_with(10, true);
	/// assert_eq!(a.intersect(&Range::starts_with(10, true)), Range::simple(10));
	/// assert!(a.intersect(&Range::starts_with(10, false)).is_empty());
	/// ```
	pub fn intersect(&self, other: &Self) -> Self {
		let (Some((s1, e1)), Some((s2, e2))) = (self.edges(), other.edges()) else {
			return Self::EMPTY;
		};
		if self.is_full() {
			return other.clone();
		}
		if other.is_full() {
			return self.clone();
		}
		let start = cmp::max(LowerBound(s1), LowerBound(s2)).0;
		let end = cmp::min(UpperBound(e1), UpperBound(e2)).0;
		if !bound::reaches(start, end) {
			return Self::EMPTY;
		}
		Self::bounded(start.clone(), end.clone())
	}

	/// Returns the parts of `self` that do not lie within `other`.
	///
	/// The result consists of at most two ranges, ordered from low to high:
	/// the part of `self` before `other` and the part after it. When `self`
	/// is empty or `other` is full, the single fragment [`Range::EMPTY`] is
	/// produced. When `other` covers all of `self` (but is not full), no
	/// fragments are produced.
	///
	/// # Examples
	///
	/// ```
	/// # use range_algebra::Range;
	/// let r = Range::create(0, 10).unwrap();
	/// let parts: Vec<_> = r.exclude(&Range::create(3, 5).unwrap()).collect();
	/// assert_eq!(
	/// 	parts,
	/// 	[
	/// 		Range::create_with(0, 3, true, false).unwrap(),
	/// 		Range::create_with(5, 10, false, true).unwrap(),
	/// 	]
	/// );
	///
	/// let germany = Range::simple("Germany");
	/// assert_eq!(germany.exclude(&germany).count(), 0);
	/// ```
	pub fn exclude(&self, other: &Self) -> Fragments<T> {
		let (Some((s1, e1)), Some((s2, e2))) = (self.edges(), other.edges()) else {
			return Fragments::one(if self.is_empty() {
				Self::EMPTY
			} else {
				self.clone()
			});
		};
		if other.is_full() {
			return Fragments::one(Self::EMPTY);
		}
		if self.is_full() {
			return other.invert();
		}
		if !self.overlaps(other) {
			return Fragments::one(self.clone());
		}
		let before = (LowerBound(s1) < LowerBound(s2))
			.then(|| Self::bounded(s1.clone(), bound::flipped(s2)));
		let after = (UpperBound(e2) < UpperBound(e1))
			.then(|| Self::bounded(bound::flipped(e2), e1.clone()));
		Fragments::new(before, after)
	}

	/// Returns the complement of the range within the unrestricted domain.
	///
	/// The empty range inverts to [`Range::FULL`], and the full range inverts
	/// to [`Range::EMPTY`]. Any other range produces one fragment for each of
	/// its finite edges.
	///
	/// # Examples
	///
	/// ```
	/// # use range_algebra::Range;
	/// let r = Range::create_with(11, 12, false, true).unwrap();
	/// let parts: Vec<_> = r.invert().map(|r| r.to_string()).collect();
	/// assert_eq!(parts, ["..11", "(12).."]);
	/// ```
	pub fn invert(&self) -> Fragments<T> {
		let Some((start, end)) = self.edges() else {
			return Fragments::one(Self::FULL);
		};
		if self.is_full() {
			return Fragments::one(Self::EMPTY);
		}
		let before = bound::value(start)
			.is_some()
			.then(|| Self::bounded(Bound::Unbounded, bound::flipped(start)));
		let after = bound::value(end)
			.is_some()
			.then(|| Self::bounded(bound::flipped(end), Bound::Unbounded));
		Fragments::new(before, after)
	}
}

impl<T> Range<T> {
	/// Writes the range notation, formatting values with `value`.
	fn write_notation(
		&self,
		f: &mut fmt::Formatter<'_>,
		value: fn(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
	) -> fmt::Result {
		match self.edges() {
			None => f.write_str("()"),
			Some(_) if self.is_full() => f.write_str("..."),
			Some((start, end)) => {
				write_edge(f, start, value)?;
				f.write_str("..")?;
				write_edge(f, end, value)
			}
		}
	}
}

/// Writes a single edge: included values as is, excluded values in
/// parentheses, and nothing for an unbounded edge
fn write_edge<T>(
	f: &mut fmt::Formatter<'_>,
	edge: &Bound<T>,
	value: fn(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
) -> fmt::Result {
	match edge {
		Bound::Included(v) => value(v, f),
		Bound::Excluded(v) => {
			f.write_str("(")?;
			value(v, f)?;
			f.write_str(")")
		}
		Bound::Unbounded => Ok(()),
	}
}

/// Creates an included or excluded edge at `value`
fn edge<T>(value: T, inclusive: bool) -> Bound<T> {
	if inclusive {
		Bound::Included(value)
	} else {
		Bound::Excluded(value)
	}
}

impl<T: Ord> Ord for Range<T> {
	/// Orders ranges by their start, then by their end.
	///
	/// At equal values an included start sorts before an excluded start, and
	/// an excluded end sorts before an included end. The empty range sorts
	/// before every other range.
	fn cmp(&self, other: &Self) -> Ordering {
		match (self.edges(), other.edges()) {
			(None, None) => Ordering::Equal,
			(None, Some(_)) => Ordering::Less,
			(Some(_), None) => Ordering::Greater,
			(Some((s1, e1)), Some((s2, e2))) => LowerBound(s1)
				.cmp(&LowerBound(s2))
				.then_with(|| UpperBound(e1).cmp(&UpperBound(e2))),
		}
	}
}

impl<T: Ord> PartialOrd for Range<T> {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl<T: Debug> Debug for Range<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.is_empty() {
			return f.write_str("Range::EMPTY");
		}
		if self.is_full() {
			return f.write_str("Range::FULL");
		}
		f.write_str("Range(")?;
		self.write_notation(f, <T as Debug>::fmt)?;
		f.write_str(")")
	}
}

impl<T: Display> Display for Range<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.write_notation(f, <T as Display>::fmt)
	}
}

impl<T> Default for Range<T> {
	fn default() -> Self {
		Self::EMPTY
	}
}

impl<T: Ord> TryFrom<(Bound<T>, Bound<T>)> for Range<T> {
	type Error = InvalidRange;

	fn try_from((start, end): (Bound<T>, Bound<T>)) -> Result<Self, Self::Error> {
		Self::new(start, end)
	}
}

impl<T: Ord> TryFrom<ops::Range<T>> for Range<T> {
	type Error = InvalidRange;

	/// Converts a half-open range. As for [`ops::Range`], `x..x` is empty.
	fn try_from(value: ops::Range<T>) -> Result<Self, Self::Error> {
		if value.start == value.end {
			return Ok(Self::EMPTY);
		}
		Self::new(Bound::Included(value.start), Bound::Excluded(value.end))
	}
}

impl<T: Ord> TryFrom<RangeInclusive<T>> for Range<T> {
	type Error = InvalidRange;

	fn try_from(value: RangeInclusive<T>) -> Result<Self, Self::Error> {
		let (start, end) = value.into_inner();
		Self::create(start, end)
	}
}

impl<T> From<RangeFrom<T>> for Range<T> {
	fn from(value: RangeFrom<T>) -> Self {
		Self::starts_with(value.start, true)
	}
}

impl<T> From<RangeTo<T>> for Range<T> {
	fn from(value: RangeTo<T>) -> Self {
		Self::ends_with(value.end, false)
	}
}

impl<T> From<RangeToInclusive<T>> for Range<T> {
	fn from(value: RangeToInclusive<T>) -> Self {
		Self::ends_with(value.end, true)
	}
}

impl<T> From<RangeFull> for Range<T> {
	fn from(_: RangeFull) -> Self {
		Self::FULL
	}
}

impl<T> Fragments<T> {
	/// Yields `front` and then `back`, skipping absent fragments.
	fn new(front: Option<Range<T>>, back: Option<Range<T>>) -> Self {
		Self { front, back }
	}

	/// Yields exactly one fragment.
	fn one(range: Range<T>) -> Self {
		Self::new(Some(range), None)
	}
}

impl<T> Iterator for Fragments<T> {
	type Item = Range<T>;

	fn next(&mut self) -> Option<Self::Item> {
		self.front.take().or_else(|| self.back.take())
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let len = usize::from(self.front.is_some()) + usize::from(self.back.is_some());
		(len, Some(len))
	}
}

impl<T> DoubleEndedIterator for Fragments<T> {
	fn next_back(&mut self) -> Option<Self::Item> {
		self.back.take().or_else(|| self.front.take())
	}
}

impl<T> ExactSizeIterator for Fragments<T> {}

impl<T> FusedIterator for Fragments<T> {}
