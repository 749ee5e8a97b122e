use std::fmt;

use crate::FoldError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Base { A, C, G, U }

pub type RnaSequence = Vec<Base>;

impl TryFrom<char> for Base {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Ok(match c.to_ascii_uppercase() {
            'A' => Base::A,
            'C' => Base::C,
            'G' => Base::G,
            'U' | 'T' => Base::U,
            _ => return Err(c),
        })
    }
}

impl From<Base> for char {
    fn from(b: Base) -> Self {
        match b {
            Base::A => 'A',
            Base::C => 'C',
            Base::G => 'G',
            Base::U => 'U',
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}

/// Canonical (A-U, G-C) and wobble (G-U) pairs, in either orientation.
pub fn can_pair(a: Base, b: Base) -> bool {
    use Base::*;
    matches!((a, b), (A, U) | (U, A) | (G, C) | (C, G) | (G, U) | (U, G))
}

/// Parse a nucleotide string; fails on the first unknown symbol.
pub fn parse_sequence(seq: &str) -> Result<RnaSequence, FoldError> {
    seq.chars()
        .enumerate()
        .map(|(pos, c)| Base::try_from(c)
            .map_err(|symbol| FoldError::InvalidBase { pos, symbol }))
        .collect()
}
