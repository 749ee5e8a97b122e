//! Knot spans and unblocked regions.
//!
//! An annotated structure is split into the outermost bracket-balanced
//! spans (which are kept verbatim) and the regions between them (which
//! are refolded). `(` and `[` both open a span, `)` and `]` both close
//! one; the bracket types are not matched against each other.
//!

use std::ops::Range;

use crate::DotBracketVec;
use crate::StructureError;

/// Returns the outermost bracket-balanced spans as half-open ranges,
/// ordered from 5' to 3'. Nested brackets are absorbed into their
/// enclosing span.
pub fn knot_spans(structure: &DotBracketVec) -> Result<Vec<Range<usize>>, StructureError> {
    let mut spans = Vec::new();
    let mut stack: Vec<usize> = Vec::new();
    let mut start: Option<usize> = None;

    for (idx, &db) in structure.iter().enumerate() {
        if db.is_opener() {
            if start.is_none() {
                start = Some(idx);
            }
            stack.push(idx);
        } else if db.is_closer() {
            if stack.pop().is_none() {
                return Err(StructureError::UnmatchedClose(idx));
            }
            if stack.is_empty() {
                // The stack was non-empty before the pop, so a span is open.
                if let Some(s) = start.take() {
                    spans.push(s..idx + 1);
                }
            }
        }
    }
    if let Some(&idx) = stack.first() {
        return Err(StructureError::UnmatchedOpen(idx));
    }
    Ok(spans)
}

/// The complement of `blocked` within `0..length`: the non-empty gaps
/// before the first, between consecutive, and after the last blocked range.
pub fn unblocked_regions(length: usize, blocked: &[Range<usize>]) -> Vec<Range<usize>> {
    let mut regions = Vec::with_capacity(blocked.len() + 1);
    let mut region_start = 0;
    for range in blocked {
        debug_assert!(range.start >= region_start, "blocked ranges must be ordered");
        if region_start < range.start {
            regions.push(region_start..range.start);
        }
        region_start = range.end;
    }
    if region_start < length {
        regions.push(region_start..length);
    }
    regions
}

/// True if `idx` lies inside any of the given ranges.
pub fn is_blocked(idx: usize, blocked: &[Range<usize>]) -> bool {
    blocked.iter().any(|r| r.contains(&idx))
}
