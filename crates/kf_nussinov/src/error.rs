use std::fmt;
use kf_structure::StructureError;

/// Error type for folding operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FoldError {
    /// A sequence symbol outside of ACGU (T is read as U).
    InvalidBase { pos: usize, symbol: char },

    /// Nothing to fold.
    EmptySequence,

    /// Sequence and structure annotation differ in length.
    LengthMismatch { sequence: usize, structure: usize },

    /// The sequence does not fit into `NAIDX` indices.
    SequenceTooLong(usize),

    /// The structure annotation is malformed.
    Structure(StructureError),
}

impl FoldError {
    /// True for errors caused by sequence and structure not fitting together.
    pub fn is_input_mismatch(&self) -> bool {
        matches!(self, FoldError::EmptySequence | FoldError::LengthMismatch { .. })
    }
}

impl fmt::Display for FoldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FoldError::InvalidBase { pos, symbol } => {
                write!(f, "Invalid nucleotide '{symbol}' at position {pos}.")
            }
            FoldError::EmptySequence => write!(f, "Empty sequence."),
            FoldError::LengthMismatch { sequence, structure } => write!(
                f,
                "Sequence length ({sequence}) and structure length ({structure}) differ."
            ),
            FoldError::SequenceTooLong(len) => {
                write!(f, "Sequence of length {len} exceeds the supported maximum.")
            }
            FoldError::Structure(err) => write!(f, "Malformed structure: {err}"),
        }
    }
}

impl std::error::Error for FoldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FoldError::Structure(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StructureError> for FoldError {
    fn from(err: StructureError) -> Self {
        FoldError::Structure(err)
    }
}
