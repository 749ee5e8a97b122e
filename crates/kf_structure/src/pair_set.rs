//! Pair and PairSet definitions.
//!
//! A `Pair` is defined by two 16-bit indices (`NAIDX`) packed into a
//! 32-bit integer key (`P1KEY`) for efficient set storage.
//! Indices are **0-based** throughout, consistent with the score matrix.
//!
//! A `PairSet` does not check for crossing pairs: sets assembled from
//! independently folded regions may legitimately cross.
//!

use nohash_hasher::IntSet;

use crate::NAIDX;
use crate::P1KEY;


/// A base pair (i, j) with i < j.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pair {
    i: NAIDX,
    j: NAIDX,
}

impl Pair {
    /// Create a new pair (i, j). Panics in debug if i >= j.
    pub fn new(i: NAIDX, j: NAIDX) -> Self {
        debug_assert!(i < j);
        debug_assert!(j < NAIDX::MAX);
        Pair { i, j }
    }

    /// Return the 5'-side index.
    pub fn i(&self) -> NAIDX {
        self.i
    }

    /// Return the 3'-side index.
    pub fn j(&self) -> NAIDX {
        self.j
    }

    /// The same pair moved by `offset` positions towards the 3' end.
    pub fn shifted(&self, offset: NAIDX) -> Self {
        Pair::new(self.i + offset, self.j + offset)
    }

    /// True if the two pairs cross (i < k < j < l).
    pub fn crosses(&self, other: &Pair) -> bool {
        let (a, b) = if self.i < other.i { (self, other) } else { (other, self) };
        a.i < b.i && b.i < a.j && a.j < b.j
    }

    /// Compact 32-bit key encoding both indices.
    pub fn key(&self) -> P1KEY {
        ((self.i as P1KEY) << 16) | (self.j as P1KEY)
    }
}

/// A collection of base pairs represented as compact integer keys.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PairSet {
    pairs: IntSet<P1KEY>,
}

impl PairSet {
    /// Read the nested pairs of a dot-bracket string.
    ///
    /// Only `(` and `)` are matched. Every other symbol, including the
    /// square brackets of preserved pseudoknots, counts as unpaired, and
    /// closers without an opener are skipped.
    pub fn from_parentheses(structure: &str) -> Self {
        let mut stack: Vec<usize> = Vec::new();
        let mut pset = PairSet::default();
        for (j, c) in structure.chars().enumerate() {
            match c {
                '(' => stack.push(j),
                ')' => {
                    let Some(i) = stack.pop() else {
                        continue;
                    };
                    match (NAIDX::try_from(i), NAIDX::try_from(j)) {
                        (Ok(i), Ok(j)) if j < NAIDX::MAX => {
                            pset.insert(Pair::new(i, j));
                        }
                        _ => log::warn!("Ignoring pair ({i},{j}): index out of range."),
                    }
                }
                _ => {}
            }
        }
        pset
    }

    /// Insert a new pair; returns true if it was newly inserted.
    pub fn insert(&mut self, pair: Pair) -> bool {
        self.pairs.insert(pair.key())
    }

    /// Number of pairs present in exactly one of the two sets.
    pub fn symmetric_difference_len(&self, other: &PairSet) -> usize {
        self.pairs.symmetric_difference(&other.pairs).count()
    }
}
