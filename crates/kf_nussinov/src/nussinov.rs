//! Nussinov-style base-pair maximization.
//!
//! The score matrix holds, for every i <= j, the maximum number of pairs
//! that fit into the subsequence [i..=j]. Cells with j - i below the
//! minimum loop size, or with an endpoint in a blocked range, stay 0.
//!

use std::ops::Range;

use ndarray::Array2;
use kf_structure::Pair;
use kf_structure::NAIDX;
use kf_structure::is_blocked;

use crate::Base;
use crate::FoldConfig;
use crate::Recurrence;
use crate::TieBreak;
use crate::can_pair;

/// `Pair` for matrix indices, or None if they do not fit into `NAIDX`.
fn index_pair(i: usize, j: usize) -> Option<Pair> {
    match (NAIDX::try_from(i), NAIDX::try_from(j)) {
        (Ok(i), Ok(j)) if j < NAIDX::MAX => Some(Pair::new(i, j)),
        _ => None,
    }
}

/// A filled Nussinov table for one sequence (or sub-sequence).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreMatrix {
    dp_table: Array2<usize>,
}

impl ScoreMatrix {
    /// Fill the table bottom-up by increasing span length.
    ///
    /// `blocked` is given in the index space of `seq`. No length checks
    /// happen here; the `fold*` functions reject sequences longer than
    /// `NAIDX::MAX` before allocating the table.
    pub fn fill(seq: &[Base], config: &FoldConfig, blocked: &[Range<usize>]) -> Self {
        let n = seq.len();
        let mut dp = Array2::from_elem((n, n), 0);
        for l in 1..n {
            if l < config.min_loop {
                continue;
            }
            for i in 0..n - l {
                let j = i + l;
                if is_blocked(i, blocked) || is_blocked(j, blocked) {
                    continue;
                }
                let mut max_val = dp[(i, j - 1)].max(dp[(i + 1, j)]);
                if can_pair(seq[i], seq[j]) {
                    max_val = max_val.max(dp[(i + 1, j - 1)] + 1);
                }
                if config.recurrence == Recurrence::Bifurcating {
                    for k in i + 1..j {
                        max_val = max_val.max(dp[(i, k)] + dp[(k + 1, j)]);
                    }
                }
                dp[(i, j)] = max_val;
            }
        }
        Self { dp_table: dp }
    }

    /// Length of the folded sequence.
    pub fn len(&self) -> usize {
        self.dp_table.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Score of the subsequence [i..=j].
    pub fn get(&self, i: usize, j: usize) -> usize {
        self.dp_table[(i, j)]
    }

    /// Maximum number of pairs for the whole sequence.
    pub fn score(&self) -> usize {
        match self.len() {
            0 => 0,
            n => self.dp_table[(0, n - 1)],
        }
    }

    /// Recover one optimal set of pairs, in the order they are found.
    ///
    /// Ranges are processed from an explicit stack. Within a range, the
    /// two unpaired cases are checked in the order given by the tie-break
    /// policy, then the pair (i, j), then the first split point k that
    /// reproduces the score. A range whose end enters a blocked range is
    /// abandoned.
    pub fn traceback(&self, seq: &[Base], config: &FoldConfig, blocked: &[Range<usize>]) -> Vec<Pair> {
        debug_assert_eq!(seq.len(), self.len());
        let dp = &self.dp_table;
        let mut pairs = Vec::new();
        if self.is_empty() {
            return pairs;
        }

        let mut stack: Vec<(usize, usize)> = vec![(0, self.len() - 1)];
        while let Some((mut i, mut j)) = stack.pop() {
            while i < j {
                if is_blocked(i, blocked) || is_blocked(j, blocked) {
                    break;
                }
                let dp_ij = dp[(i, j)];
                let (first, second) = match config.tie_break {
                    TieBreak::PreferLeftUnpaired => ((i + 1, j), (i, j - 1)),
                    TieBreak::PreferRightUnpaired => ((i, j - 1), (i + 1, j)),
                };

                if dp_ij == dp[first] {
                    (i, j) = first;
                } else if dp_ij == dp[second] {
                    (i, j) = second;
                } else if j - i >= config.min_loop
                    && can_pair(seq[i], seq[j])
                    && dp_ij == dp[(i + 1, j - 1)] + 1
                {
                    let Some(pair) = index_pair(i, j) else {
                        log::warn!("Pair ({i},{j}) exceeds the index range, stopping traceback.");
                        break;
                    };
                    pairs.push(pair);
                    (i, j) = (i + 1, j - 1);
                } else if let Some(k) = (i..j).find(move |&k| dp_ij == dp[(i, k)] + dp[(k + 1, j)]) {
                    stack.push((k + 1, j));
                    j = k;
                } else {
                    log::warn!("No traceback case reproduces score {dp_ij} of ({i},{j}).");
                    break;
                }
            }
        }
        pairs
    }
}
