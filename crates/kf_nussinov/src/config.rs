/// Which candidates the score matrix compares when filling a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Recurrence {
    /// Only the left, lower and diagonal neighbours. Multi-branch
    /// structures are found only if an adjacent cell already carries them.
    #[default]
    Adjacent,
    /// Additionally maximize over every split point k (textbook Nussinov).
    Bifurcating,
}

/// Which unpaired end the traceback prefers when scores tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// Check i unpaired, then j unpaired, then (i, j) paired.
    #[default]
    PreferLeftUnpaired,
    /// Check j unpaired, then i unpaired, then (i, j) paired.
    PreferRightUnpaired,
}

/// Parameters of a single fold call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoldConfig {
    /// Minimum distance j - i of a pair (i, j).
    pub min_loop: usize,
    pub recurrence: Recurrence,
    pub tie_break: TieBreak,
}

impl FoldConfig {
    pub const DEFAULT_MIN_LOOP: usize = 3;

    /// Settings of the plain, whole-sequence prediction.
    pub fn standard() -> Self {
        Self {
            min_loop: Self::DEFAULT_MIN_LOOP,
            recurrence: Recurrence::Adjacent,
            tie_break: TieBreak::PreferLeftUnpaired,
        }
    }

    /// Settings used to refold the regions between preserved knots.
    pub fn knot_aware() -> Self {
        Self {
            tie_break: TieBreak::PreferRightUnpaired,
            ..Self::standard()
        }
    }

    pub fn with_min_loop(mut self, min_loop: usize) -> Self {
        self.min_loop = min_loop;
        self
    }

    pub fn with_recurrence(mut self, recurrence: Recurrence) -> Self {
        self.recurrence = recurrence;
        self
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }
}

impl Default for FoldConfig {
    fn default() -> Self {
        Self::standard()
    }
}
