use std::fmt;

/// Errors raised while reading a dot-bracket annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructureError {
    /// A character outside of `.()[]`.
    InvalidSymbol { pos: usize, symbol: char },

    /// A closing bracket without a matching opener.
    UnmatchedClose(usize),

    /// An opening bracket that is never closed.
    UnmatchedOpen(usize),
}

impl fmt::Display for StructureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureError::InvalidSymbol { pos, symbol } => {
                write!(f, "Invalid dot-bracket symbol '{symbol}' at position {pos}.")
            }
            StructureError::UnmatchedClose(pos) => {
                write!(f, "Unmatched closing bracket at position {pos}.")
            }
            StructureError::UnmatchedOpen(pos) => {
                write!(f, "Unmatched opening bracket at position {pos}.")
            }
        }
    }
}

impl std::error::Error for StructureError {}
