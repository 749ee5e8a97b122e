//! Turning pair lists into dot-bracket structures.

use std::ops::Range;

use kf_structure::DotBracket;
use kf_structure::DotBracketVec;
use kf_structure::Pair;
use kf_structure::is_blocked;

use crate::FoldError;

/// Plain dot-bracket string of a non-crossing pair list.
pub fn dotbracket_from_pairs(length: usize, pairs: &[Pair]) -> DotBracketVec {
    let mut dbv = DotBracketVec::unpaired(length);
    for pair in pairs {
        dbv[pair.i() as usize] = DotBracket::Open;
        dbv[pair.j() as usize] = DotBracket::Close;
    }
    dbv
}

/// Merge preserved spans of `original` with newly predicted pairs.
///
/// Every blocked range is copied verbatim from `original`. A pair is only
/// written if both of its positions are still unpaired afterwards and lie
/// outside the blocked ranges; other pairs are dropped silently, which can
/// happen for pairs next to a span boundary.
pub fn compose_structure(
    length: usize,
    pairs: &[Pair],
    blocked: &[Range<usize>],
    original: &DotBracketVec,
) -> Result<DotBracketVec, FoldError> {
    if original.len() != length {
        return Err(FoldError::LengthMismatch { sequence: length, structure: original.len() });
    }
    let mut dbv = DotBracketVec::unpaired(length);
    for range in blocked {
        let end = range.end.min(length);
        let start = range.start.min(end);
        dbv[start..end].copy_from_slice(&original[start..end]);
    }

    let mut dropped = 0;
    for pair in pairs {
        let (i, j) = (pair.i() as usize, pair.j() as usize);
        if j < length
            && dbv[i] == DotBracket::Unpaired
            && dbv[j] == DotBracket::Unpaired
            && !is_blocked(i, blocked)
            && !is_blocked(j, blocked)
        {
            dbv[i] = DotBracket::Open;
            dbv[j] = DotBracket::Close;
        } else {
            dropped += 1;
        }
    }
    if dropped > 0 {
        log::debug!("Dropped {dropped} predicted pairs overlapping preserved positions.");
    }
    Ok(dbv)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dbv(s: &str) -> DotBracketVec {
        DotBracketVec::try_from(s).unwrap()
    }

    #[test]
    fn test_dotbracket_from_pairs() {
        let pairs = [Pair::new(0, 5), Pair::new(1, 4)];
        assert_eq!(dotbracket_from_pairs(7, &pairs).to_string(), "((..)).");
        assert_eq!(dotbracket_from_pairs(3, &[]).to_string(), "...");
    }

    #[test]
    fn test_compose_copies_blocked_ranges() {
        let original = dbv("..[[..]]..((..))");
        let pairs = [Pair::new(0, 9)];
        let out = compose_structure(16, &pairs, &[2..8, 10..16], &original).unwrap();
        assert_eq!(out.to_string(), "(.[[..]].)((..))");
    }

    #[test]
    fn test_compose_never_overwrites_preserved_symbols() {
        let original = dbv("..((....))..");
        // (1,3) collides with the preserved '(' at 3; (0,11) is fine.
        let pairs = [Pair::new(1, 3), Pair::new(0, 11)];
        let out = compose_structure(12, &pairs, &[2..10], &original).unwrap();
        assert_eq!(out.to_string(), "(.((....)).)");
    }

    #[test]
    fn test_compose_protects_unpaired_positions_of_blocked_range() {
        let original = dbv("((....))..");
        let pairs = [Pair::new(2, 6), Pair::new(3, 9)];
        let out = compose_structure(10, &pairs, &[0..8], &original).unwrap();
        assert_eq!(out.to_string(), "((....))..");
    }

    #[test]
    fn test_compose_length_mismatch() {
        let err = compose_structure(5, &[], &[], &dbv("....")).unwrap_err();
        assert_eq!(err, FoldError::LengthMismatch { sequence: 5, structure: 4 });
        assert!(err.is_input_mismatch());
    }
}
