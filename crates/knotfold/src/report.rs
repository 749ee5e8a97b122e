//! Tabular and JSON output of predictions.

use std::io::Write;
use std::ops::Range;

use anyhow::Result;
use colored::Colorize;
use itertools::Itertools;
use serde::Serialize;

use kf_nussinov::Prediction;
use kf_structure::DotBracketVec;
use kf_structure::knot_spans;

use crate::records::Record;

/// One line of output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub index: usize,
    pub length: usize,
    pub distance: usize,
    pub sequence: String,
    pub annotation: String,
    pub standard: String,
    pub knot_aware: String,
}

impl ReportRow {
    pub fn new(record: &Record, prediction: &Prediction) -> Self {
        Self {
            index: record.index,
            length: prediction.length,
            distance: prediction.distance,
            sequence: record.sequence.clone(),
            annotation: record.structure.clone(),
            standard: prediction.standard.to_string(),
            knot_aware: prediction.knot_aware.to_string(),
        }
    }

    /// The (length, distance) point of this row.
    pub fn point(&self) -> (usize, usize) {
        (self.length, self.distance)
    }
}

/// Writes `index length distance`, tab separated, one row per line. With
/// `structures`, each row is followed by the sequence and all three
/// structures; positions kept from the annotation are highlighted.
pub fn write_table<W: Write>(out: &mut W, rows: &[ReportRow], structures: bool) -> Result<()> {
    writeln!(out, "{}", ["index", "length", "distance"].iter().join("\t"))?;
    for row in rows {
        writeln!(out, "{}", [row.index, row.length, row.distance].iter().join("\t"))?;
        if structures {
            let spans = DotBracketVec::try_from(row.annotation.as_str())
                .ok()
                .and_then(|dbv| knot_spans(&dbv).ok())
                .unwrap_or_default();
            writeln!(out, "  {}", row.sequence)?;
            writeln!(out, "  {} {}", row.annotation, "annotation".dimmed())?;
            writeln!(out, "  {} {}", row.standard, "standard".dimmed())?;
            writeln!(out, "  {} {}", highlight(&row.knot_aware, &spans), "knot-aware".dimmed())?;
        }
    }
    Ok(())
}

/// Writes one JSON object per line.
pub fn write_json<W: Write>(out: &mut W, rows: &[ReportRow]) -> Result<()> {
    for row in rows {
        serde_json::to_writer(&mut *out, row)?;
        writeln!(out)?;
    }
    Ok(())
}

fn highlight(structure: &str, spans: &[Range<usize>]) -> String {
    structure
        .chars()
        .enumerate()
        .map(|(idx, c)| {
            if spans.iter().any(|s| s.contains(&idx)) {
                c.to_string().cyan().to_string()
            } else {
                c.to_string()
            }
        })
        .collect()
}
