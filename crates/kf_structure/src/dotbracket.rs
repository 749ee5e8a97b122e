//! Dot-bracket symbols.
//!
//! Round brackets describe nested pairs. Square brackets only ever appear
//! as pass-through symbols of an annotated pseudoknot: they are copied
//! verbatim from an input structure, never produced by folding.
//!

use std::fmt;
use std::ops::Deref;
use std::ops::DerefMut;

use crate::StructureError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DotBracket {
    Unpaired,  // '.'
    Open,      // '('
    Close,     // ')'
    KnotOpen,  // '['
    KnotClose, // ']'
}

impl DotBracket {
    /// True for `(` and `[`.
    pub fn is_opener(self) -> bool {
        matches!(self, DotBracket::Open | DotBracket::KnotOpen)
    }

    /// True for `)` and `]`.
    pub fn is_closer(self) -> bool {
        matches!(self, DotBracket::Close | DotBracket::KnotClose)
    }
}

impl TryFrom<char> for DotBracket {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '.' => Ok(DotBracket::Unpaired),
            '(' => Ok(DotBracket::Open),
            ')' => Ok(DotBracket::Close),
            '[' => Ok(DotBracket::KnotOpen),
            ']' => Ok(DotBracket::KnotClose),
            _ => Err(c),
        }
    }
}

impl From<DotBracket> for char {
    fn from(db: DotBracket) -> Self {
        match db {
            DotBracket::Unpaired => '.',
            DotBracket::Open => '(',
            DotBracket::Close => ')',
            DotBracket::KnotOpen => '[',
            DotBracket::KnotClose => ']',
        }
    }
}

/// A full dot-bracket structure, one symbol per nucleotide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DotBracketVec(pub Vec<DotBracket>);

impl DotBracketVec {
    /// An all-unpaired structure of the given length.
    pub fn unpaired(length: usize) -> Self {
        DotBracketVec(vec![DotBracket::Unpaired; length])
    }
}

impl Deref for DotBracketVec {
    type Target = Vec<DotBracket>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for DotBracketVec {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl FromIterator<DotBracket> for DotBracketVec {
    fn from_iter<I: IntoIterator<Item = DotBracket>>(iter: I) -> Self {
        DotBracketVec(iter.into_iter().collect())
    }
}

impl TryFrom<&str> for DotBracketVec {
    type Error = StructureError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.chars()
            .enumerate()
            .map(|(pos, c)| DotBracket::try_from(c)
                .map_err(|symbol| StructureError::InvalidSymbol { pos, symbol }))
            .collect()
    }
}

impl fmt::Display for DotBracketVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &db in self.iter() {
            write!(f, "{}", char::from(db))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dotbracket_roundtrip_string() {
        let s = "((..[[..))..]]";
        let dbv = DotBracketVec::try_from(s).unwrap();
        assert_eq!(dbv.len(), 14);
        assert_eq!(dbv[0], DotBracket::Open);
        assert_eq!(dbv[4], DotBracket::KnotOpen);
        assert_eq!(dbv[13], DotBracket::KnotClose);
        assert_eq!(format!("{}", dbv), s);
    }

    #[test]
    fn test_dotbracket_invalid_symbol() {
        let err = DotBracketVec::try_from("((.x))").unwrap_err();
        assert_eq!(err, StructureError::InvalidSymbol { pos: 3, symbol: 'x' });
    }

    #[test]
    fn test_openers_and_closers() {
        assert!(DotBracket::Open.is_opener());
        assert!(DotBracket::KnotOpen.is_opener());
        assert!(DotBracket::Close.is_closer());
        assert!(DotBracket::KnotClose.is_closer());
        assert!(!DotBracket::Unpaired.is_opener());
        assert!(!DotBracket::Unpaired.is_closer());
    }

    #[test]
    fn test_unpaired() {
        let dbv = DotBracketVec::unpaired(4);
        assert_eq!(format!("{}", dbv), "....");
        assert!(DotBracketVec::try_from("").unwrap().is_empty());
    }
}
