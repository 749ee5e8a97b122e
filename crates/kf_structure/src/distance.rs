//! Base-pair distance between two structures.

use crate::PairSet;

/// Number of base pairs present in exactly one of the two structures.
///
/// Only `(`/`)` pairs are compared. Square brackets are not parsed, so
/// preserved pseudoknots never contribute to the distance.
pub fn base_pair_distance(a: &str, b: &str) -> usize {
    if a.len() != b.len() {
        log::debug!("Comparing structures of unequal length ({} vs {}).", a.len(), b.len());
    }
    PairSet::from_parentheses(a).symmetric_difference_len(&PairSet::from_parentheses(b))
}
