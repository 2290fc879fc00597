//! Route pattern grammar
//!
//! Patterns and request paths are split the same way: leading and trailing
//! slashes are trimmed and the remainder is split on `/`. An empty remainder
//! is the root path.
//!
//! Pattern segments:
//! - `$name` - string parameter, captures any non-empty segment
//! - `#name` - index parameter, captures a positive integer segment
//! - `*` - optional tail, only as the final segment
//! - anything else - literal, matched case-sensitively

use crate::error::{Result, RouteError};

/// Reserved parameter name for the unconsumed tail of a request path
pub const TAIL_KEY: &str = "*";

const TAIL_MARKER: &str = "*";
const TAIL_PREFIX: char = TAIL_MARKER.as_bytes()[0] as char;
const STRING_PREFIX: char = '$';
const INDEX_PREFIX: char = '#';

/// Parameter kind.
///
/// Declaration order is matching priority: index parameters are tried
/// before string parameters at the same position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ParamKind {
    /// `#name` - positive integer
    Index,
    /// `$name` - any non-empty text
    String,
}

impl ParamKind {
    /// Whether a request segment can be captured by a parameter of this kind
    #[inline]
    pub fn accepts(self, value: &str) -> bool {
        match self {
            ParamKind::Index => value.parse::<i64>().is_ok_and(|v| v > 0),
            ParamKind::String => !value.is_empty(),
        }
    }

    /// Pattern prefix character
    pub fn prefix(self) -> char {
        match self {
            ParamKind::Index => INDEX_PREFIX,
            ParamKind::String => STRING_PREFIX,
        }
    }
}

/// One classified segment of a route pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Literal(&'a str),
    Param { name: &'a str, kind: ParamKind },
}

/// Why a single pattern segment was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidSegment {
    Empty,
    MisplacedTail,
    EmptyParamName,
}

impl InvalidSegment {
    /// Attach the full pattern to produce a registration error
    pub fn into_route_error(self, pattern: &str) -> RouteError {
        let pattern = pattern.to_string();
        match self {
            InvalidSegment::Empty => RouteError::EmptySegment { pattern },
            InvalidSegment::MisplacedTail => RouteError::MisplacedTail { pattern },
            InvalidSegment::EmptyParamName => RouteError::EmptyParamName { pattern },
        }
    }
}

impl<'a> Segment<'a> {
    /// Classify a non-final (or tail-stripped) pattern segment
    pub fn parse(raw: &'a str) -> std::result::Result<Self, InvalidSegment> {
        let kind = match raw.chars().next() {
            None => return Err(InvalidSegment::Empty),
            Some(TAIL_PREFIX) => return Err(InvalidSegment::MisplacedTail),
            Some(INDEX_PREFIX) => ParamKind::Index,
            Some(STRING_PREFIX) => ParamKind::String,
            Some(_) => return Ok(Segment::Literal(raw)),
        };

        let name = &raw[1..];
        if name.is_empty() {
            return Err(InvalidSegment::EmptyParamName);
        }
        Ok(Segment::Param { name, kind })
    }
}

/// A fully parsed route pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern<'a> {
    /// Segments to thread through the tree; empty for the root route
    pub segments: Vec<Segment<'a>>,
    /// Whether the pattern ended with `*`
    pub tail_allowed: bool,
}

impl<'a> Pattern<'a> {
    /// Parse and validate a route pattern.
    ///
    /// # Example
    /// ```
    /// use trellis_router::{ParamKind, Pattern, Segment};
    ///
    /// let p = Pattern::parse("/user/#uid/*").unwrap();
    /// assert!(p.tail_allowed);
    /// assert_eq!(p.segments, vec![
    ///     Segment::Literal("user"),
    ///     Segment::Param { name: "uid", kind: ParamKind::Index },
    /// ]);
    /// ```
    pub fn parse(pattern: &'a str) -> Result<Self> {
        let mut parts = split_path(pattern);
        let tail_allowed = parts.last() == Some(&TAIL_MARKER);
        if tail_allowed {
            parts.pop();
        }

        let segments = parts
            .into_iter()
            .map(|part| Segment::parse(part).map_err(|e| e.into_route_error(pattern)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            segments,
            tail_allowed,
        })
    }

    /// Whether this pattern registers the root path
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Split a pattern or request path into segments.
///
/// `""`, `"/"` and `"//"` all yield no segments.
pub fn split_path(path: &str) -> Vec<&str> {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        Vec::new()
    } else {
        trimmed.split('/').collect()
    }
}
