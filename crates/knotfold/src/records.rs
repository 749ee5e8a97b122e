//! Line-oriented input.
//!
//! Every line is classified on its own: a line made of `ACGU` only is a
//! sequence, a line made of `.()[]` only is a structure annotation, and
//! anything else (headers, comments, blank lines) is skipped. The n-th
//! sequence belongs to the n-th structure.
//!

use std::fs;
use std::path::Path;

use anyhow::Context;
use anyhow::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Sequence,
    Structure,
    Other,
}

/// One sequence together with its structure annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Position in the input, counting from 0.
    pub index: usize,
    pub sequence: String,
    pub structure: String,
}

pub fn classify_line(line: &str) -> LineKind {
    let line = line.trim();
    if line.is_empty() {
        LineKind::Other
    } else if line.chars().all(|c| matches!(c, 'A' | 'C' | 'G' | 'U')) {
        LineKind::Sequence
    } else if line.chars().all(|c| matches!(c, '.' | '(' | ')' | '[' | ']')) {
        LineKind::Structure
    } else {
        LineKind::Other
    }
}

/// Collect sequences and structures in file order and pair them by index.
pub fn parse_records(content: &str) -> Vec<Record> {
    let mut sequences = Vec::new();
    let mut structures = Vec::new();
    for line in content.lines() {
        match classify_line(line) {
            LineKind::Sequence => sequences.push(line.trim().to_string()),
            LineKind::Structure => structures.push(line.trim().to_string()),
            LineKind::Other => {}
        }
    }
    if sequences.len() != structures.len() {
        log::warn!(
            "Found {} sequences but {} structures, ignoring the surplus.",
            sequences.len(),
            structures.len()
        );
    }
    sequences
        .into_iter()
        .zip(structures)
        .enumerate()
        .map(|(index, (sequence, structure))| Record { index, sequence, structure })
        .collect()
}

pub fn read_records(path: &Path) -> Result<Vec<Record>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let records = parse_records(&content);
    log::info!("Read {} records from {}.", records.len(), path.display());
    Ok(records)
}
