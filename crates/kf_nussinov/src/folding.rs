//! Whole-sequence folding and the pseudoknot-preserving variant.
//!
//! The pseudoknot-preserving variant never lets the optimization see the
//! annotated spans: each region between them is folded on its own, so
//! pairs from different regions may cross those kept in the spans.
//!

use std::ops::Range;
use std::time::Instant;

use kf_structure::DotBracketVec;
use kf_structure::Pair;
use kf_structure::NAIDX;
use kf_structure::knot_spans;
use kf_structure::unblocked_regions;

use crate::Base;
use crate::FoldConfig;
use crate::FoldError;
use crate::FoldObserver;
use crate::FoldPhase;
use crate::LogObserver;
use crate::ScoreMatrix;
use crate::compose_structure;
use crate::dotbracket_from_pairs;
use crate::parse_sequence;

fn check_length(length: usize) -> Result<(), FoldError> {
    match length {
        0 => Err(FoldError::EmptySequence),
        n if n > NAIDX::MAX as usize => Err(FoldError::SequenceTooLong(n)),
        _ => Ok(()),
    }
}

/// Fill and trace back one score matrix, reporting both phases to `observer`.
///
/// `blocked` is given in the index space of `seq`. Callers folding a
/// sub-region must shift the returned pairs back themselves.
pub fn fold_observed(
    seq: &[Base],
    config: &FoldConfig,
    blocked: &[Range<usize>],
    observer: &mut dyn FoldObserver,
) -> Result<Vec<Pair>, FoldError> {
    if seq.len() > NAIDX::MAX as usize {
        return Err(FoldError::SequenceTooLong(seq.len()));
    }

    observer.phase_started(FoldPhase::Fill, seq.len());
    let start = Instant::now();
    let matrix = ScoreMatrix::fill(seq, config, blocked);
    observer.phase_finished(FoldPhase::Fill, start.elapsed());

    observer.phase_started(FoldPhase::Traceback, seq.len());
    let start = Instant::now();
    let pairs = matrix.traceback(seq, config, blocked);
    observer.phase_finished(FoldPhase::Traceback, start.elapsed());

    debug_assert!(pairs.len() <= matrix.score());
    debug_assert!(pairs.iter().all(|a| pairs.iter().all(|b| !a.crosses(b))));
    Ok(pairs)
}

/// Optimal pairs of the whole sequence.
pub fn fold_pairs(seq: &[Base], config: &FoldConfig) -> Result<Vec<Pair>, FoldError> {
    check_length(seq.len())?;
    fold_observed(seq, config, &[], &mut LogObserver)
}

/// Optimal structure of the whole sequence.
pub fn fold(seq: &[Base], config: &FoldConfig) -> Result<DotBracketVec, FoldError> {
    let pairs = fold_pairs(seq, config)?;
    Ok(dotbracket_from_pairs(seq.len(), &pairs))
}

/// Like [`fold`], starting from a nucleotide string.
pub fn fold_str(seq: &str, config: &FoldConfig) -> Result<DotBracketVec, FoldError> {
    fold(&parse_sequence(seq)?, config)
}

/// Refold `seq` while keeping every bracket span of `structure` in place.
pub fn fold_with_knots(
    seq: &[Base],
    structure: &DotBracketVec,
    config: &FoldConfig,
) -> Result<DotBracketVec, FoldError> {
    fold_with_knots_observed(seq, structure, config, &mut LogObserver)
}

/// [`fold_with_knots`] with a caller-supplied observer for every region.
pub fn fold_with_knots_observed(
    seq: &[Base],
    structure: &DotBracketVec,
    config: &FoldConfig,
    observer: &mut dyn FoldObserver,
) -> Result<DotBracketVec, FoldError> {
    check_length(seq.len())?;
    if structure.len() != seq.len() {
        return Err(FoldError::LengthMismatch {
            sequence: seq.len(),
            structure: structure.len(),
        });
    }

    let blocked = knot_spans(structure)?;
    let regions = unblocked_regions(seq.len(), &blocked);
    log::debug!("Folding {} regions around {} preserved spans.", regions.len(), blocked.len());

    let mut pairs = Vec::new();
    for region in regions {
        // Fits, since the whole sequence passed check_length.
        let offset = region.start as NAIDX;
        let local = fold_observed(&seq[region.clone()], config, &[], observer)?;
        log::trace!("Region {region:?}: {} pairs.", local.len());
        pairs.extend(local.into_iter().map(|p| p.shifted(offset)));
    }
    compose_structure(seq.len(), &pairs, &blocked, structure)
}
