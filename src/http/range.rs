//! HTTP Range header parsing
//!
//! Single-range parsing for partial content responses. Deliberately
//! simplified relative to RFC 7233: suffix ranges (`bytes=-N`) and
//! multi-range headers are not supported and parse as unsatisfiable.

/// Inclusive byte interval within an entity of known size.
///
/// Invariant: `start <= end < entity_size` at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    /// First byte position.
    pub start: u64,
    /// Last byte position, inclusive.
    pub end: u64,
}

impl ByteRange {
    /// Number of bytes covered by the range.
    #[must_use]
    pub const fn len(&self) -> u64 {
        self.end - self.start + 1
    }
}

/// Range header parse result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeOutcome {
    /// No Range header; serve the whole entity with status 200.
    NoRange,
    /// Valid single range; serve partial content with status 206.
    Satisfiable(ByteRange),
    /// Range cannot be satisfied against this entity; status 416.
    Unsatisfiable,
}

/// Parse an HTTP Range header against a known entity size.
///
/// Supported format: `bytes=start-end` with the end bound optional
/// (`bytes=start-` runs to the last byte). The start bound is required:
/// suffix ranges are rejected, and commas receive no special handling,
/// so multi-range headers fail numeric parsing and come out unsatisfiable.
///
/// # Examples
/// ```
/// use servedir::http::range::{parse_range_header, ByteRange, RangeOutcome};
///
/// let result = parse_range_header(Some("bytes=0-99"), 1000);
/// assert_eq!(result, RangeOutcome::Satisfiable(ByteRange { start: 0, end: 99 }));
///
/// let result = parse_range_header(None, 1000);
/// assert_eq!(result, RangeOutcome::NoRange);
/// ```
#[must_use]
pub fn parse_range_header(header: Option<&str>, entity_size: u64) -> RangeOutcome {
    let Some(raw) = header else {
        return RangeOutcome::NoRange;
    };

    // An empty entity cannot satisfy any byte range.
    if entity_size == 0 {
        return RangeOutcome::Unsatisfiable;
    }

    let value = raw.trim().strip_prefix("bytes=").unwrap_or(raw);

    // Exactly one start-end pair, split on the first dash.
    let (start_str, end_str) = match value.split_once('-') {
        Some(pair) => pair,
        None => (value, ""),
    };

    let Ok(start) = start_str.trim().parse::<u64>() else {
        return RangeOutcome::Unsatisfiable;
    };

    let end = if end_str.trim().is_empty() {
        entity_size - 1
    } else {
        match end_str.trim().parse::<u64>() {
            Ok(end) => end,
            Err(_) => return RangeOutcome::Unsatisfiable,
        }
    };

    if start >= entity_size || end >= entity_size || end < start {
        return RangeOutcome::Unsatisfiable;
    }

    RangeOutcome::Satisfiable(ByteRange { start, end })
}
