//! Version strings with segment-wise natural ordering.

use std::cmp::Ordering;
use std::fmt;

/// One `.`/`-` delimited piece of a version string.
///
/// Variant order is the cross-type rule: numbers sort before text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Segment {
    /// A segment that parses as an unsigned integer.
    Number(u64),
    /// Anything else, compared as a plain string.
    Text(String),
}

/// A dependency version as written in the source text.
///
/// Equality is over the raw string. Ordering is over `segments`, with the
/// raw string as a tie-break so that `Ord` agrees with `Eq`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    /// The version exactly as captured.
    raw: String,
    /// `raw` split on `.` and `-`.
    segments: Vec<Segment>,
}

impl Version {
    /// Wrap a raw version string.
    pub fn new(raw: &str) -> Self {
        let segments = raw.split(['.', '-']).map(parse_segment).collect();
        return Self {
            raw: raw.to_string(),
            segments,
        };
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.write_str(&self.raw);
    }
}

impl Ord for Version {
    /// Compare segment by segment, then by raw text.
    fn cmp(&self, other: &Self) -> Ordering {
        return self
            .segments
            .cmp(&other.segments)
            .then_with(|| return self.raw.cmp(&other.raw));
    }
}

impl PartialOrd for Version {
    /// Delegate to `Ord` implementation.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        return Some(self.cmp(other));
    }
}

/// Coerce a segment to a number when it is one.
fn parse_segment(piece: &str) -> Segment {
    return match piece.parse::<u64>() {
        Ok(n) => Segment::Number(n),
        Err(_) => Segment::Text(piece.to_string()),
    };
}
