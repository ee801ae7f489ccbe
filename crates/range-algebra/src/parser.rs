//! Parsers for the text notation of [`Range`] and [`RangeList`].
//!
//! The notation is the one produced by their [`Display`](std::fmt::Display)
//! implementations: an included edge is written as its value, an excluded
//! edge as its value in parentheses, and an unbounded edge is left out. The
//! full range is written `...` and the empty range `()`. A list wraps its
//! ranges in brackets, separated by commas.
//!
//! Edge values are not quoted, so the notation only reads back values whose
//! display is not empty and contains none of `..`, `,`, `]`, `(` or `)`. A
//! bare `..` has no edge at all and is rejected rather than read as the full
//! range, so an empty value fails to parse instead of changing meaning.

use std::{ops::Bound, str::FromStr};

use nom::{
	branch::alt,
	bytes::complete::{tag, take_till1},
	character::complete::{char, multispace0},
	combinator::{all_consuming, map, opt, value, verify},
	error::{Error, ErrorKind},
	multi::separated_list0,
	sequence::{delimited, preceded, terminated, tuple},
	IResult,
};

use crate::{ParseRangeError, Range, RangeList};

/// Edge of a range as written, before its value is parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RawEdge<'a> {
	/// Text of the value
	text: &'a str,
	/// Whether the edge was written without parentheses
	included: bool,
}

/// Range as written, before its edges are parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RawRange<'a> {
	/// `()`
	Empty,
	/// `...`
	Full,
	/// Edges separated by `..`, at least one of them present
	Span(Option<RawEdge<'a>>, Option<RawEdge<'a>>),
}

/// Value text of an included edge: everything up to the next `..`, `,`, `]`,
/// or the end of the input, without surrounding whitespace
fn bare_value(input: &str) -> IResult<&str, &str> {
	let end = input
		.char_indices()
		.find(|&(i, c)| c == ',' || c == ']' || input[i..].starts_with(".."))
		.map_or(input.len(), |(i, _)| i);
	let text = input[..end].trim();
	if text.is_empty() {
		return Err(nom::Err::Error(Error::new(input, ErrorKind::TakeTill1)));
	}
	Ok((&input[end..], text))
}

fn edge(input: &str) -> IResult<&str, RawEdge<'_>> {
	alt((
		map(
			delimited(char('('), take_till1(|c: char| c == ')'), char(')')),
			|text: &str| RawEdge {
				text: text.trim(),
				included: false,
			},
		),
		map(bare_value, |text| RawEdge {
			text,
			included: true,
		}),
	))(input)
}

fn raw_range(input: &str) -> IResult<&str, RawRange<'_>> {
	delimited(
		multispace0,
		alt((
			value(RawRange::Full, tag("...")),
			value(RawRange::Empty, tag("()")),
			verify(
				map(tuple((opt(edge), tag(".."), opt(edge))), |(start, _, end)| {
					RawRange::Span(start, end)
				}),
				|span: &RawRange<'_>| !matches!(span, RawRange::Span(None, None)),
			),
		)),
		multispace0,
	)(input)
}

fn raw_list(input: &str) -> IResult<&str, Vec<RawRange<'_>>> {
	delimited(
		terminated(preceded(multispace0, char('[')), multispace0),
		separated_list0(char(','), raw_range),
		terminated(char(']'), multispace0),
	)(input)
}

/// Runs `parser` over the whole of `input`
fn parse_all<'a, O>(
	input: &'a str,
	parser: impl FnMut(&'a str) -> IResult<&'a str, O>,
) -> Result<O, ParseRangeError> {
	match all_consuming(parser)(input) {
		Ok((_, out)) => Ok(out),
		Err(nom::Err::Error(err) | nom::Err::Failure(err)) => Err(ParseRangeError::Syntax {
			remaining: err.input.to_owned(),
		}),
		Err(nom::Err::Incomplete(_)) => Err(ParseRangeError::Syntax {
			remaining: String::new(),
		}),
	}
}

impl RawEdge<'_> {
	fn parse<T: FromStr>(self) -> Result<Bound<T>, ParseRangeError> {
		let value = self.text.parse().map_err(|_| ParseRangeError::Value {
			text: self.text.to_owned(),
		})?;
		Ok(if self.included {
			Bound::Included(value)
		} else {
			Bound::Excluded(value)
		})
	}
}

impl RawRange<'_> {
	fn parse<T: Ord + FromStr>(self) -> Result<Range<T>, ParseRangeError> {
		match self {
			RawRange::Empty => Ok(Range::EMPTY),
			RawRange::Full => Ok(Range::FULL),
			RawRange::Span(start, end) => {
				let start = start.map_or(Ok(Bound::Unbounded), RawEdge::parse)?;
				let end = end.map_or(Ok(Bound::Unbounded), RawEdge::parse)?;
				Ok(Range::new(start, end)?)
			}
		}
	}
}

impl<T: Ord + FromStr> FromStr for Range<T> {
	type Err = ParseRangeError;

	/// Parses the notation written by [`Display`](std::fmt::Display).
	///
	/// The display form reads back as an equal range when the displayed edge
	/// values are not empty and contain none of `..`, `,`, `]`, `(` or `)`.
	///
	/// # Examples
	///
	/// ```
	/// # use range_algebra::{ParseRangeError, Range};
	/// let r: Range<i32> = "(11)..12".parse().unwrap();
	/// assert_eq!(r, Range::create_with(11, 12, false, true).unwrap());
	/// assert_eq!("...".parse::<Range<i32>>(), Ok(Range::FULL));
	/// assert!(matches!("..".parse::<Range<i32>>(), Err(ParseRangeError::Syntax { .. })));
	/// assert!(matches!("5..1".parse::<Range<i32>>(), Err(ParseRangeError::InvalidRange(_))));
	/// ```
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		parse_all(s, raw_range)?.parse()
	}
}

impl<T: Ord + Clone + FromStr> FromStr for RangeList<T> {
	type Err = ParseRangeError;

	/// Parses the notation written by [`Display`](std::fmt::Display). The
	/// ranges need not be in canonical form; the result is normalized.
	///
	/// Edge values are subject to the same restrictions as for [`Range`].
	///
	/// # Examples
	///
	/// ```
	/// # use range_algebra::RangeList;
	/// let list: RangeList<i32> = "[20..30, (11)..12, 25..40]".parse().unwrap();
	/// assert_eq!(list.to_string(), "[(11)..12, 20..40]");
	/// ```
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let ranges = parse_all(s, raw_list)?
			.into_iter()
			.map(RawRange::parse)
			.collect::<Result<Vec<_>, _>>()?;
		Ok(RangeList::from_ranges(ranges))
	}
}
