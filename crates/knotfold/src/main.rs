//! knotfold - base-pair maximization that keeps annotated pseudoknots.
//!
//! ## Usage
//!
//! ```bash
//! knotfold input.txt
//! knotfold input.txt --structures
//! knotfold input.txt --json -o predictions.jsonl
//! knotfold input.txt --plot distances.svg
//! ```
//!
//! The input holds sequence lines (`ACGU`) and annotation lines
//! (`.()[]`); the n-th sequence is folded against the n-th annotation.

use std::fs::File;
use std::io;
use std::io::BufWriter;
use std::io::IsTerminal;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use clap::ArgAction;
use clap::Parser;
use clap::ValueEnum;
use rayon::prelude::*;

use kf_nussinov::Predictor;
use kf_nussinov::Recurrence;
use kf_nussinov::TieBreak;
use knotfold::plot::plot_distances;
use knotfold::records::read_records;
use knotfold::report::ReportRow;
use knotfold::report::write_json;
use knotfold::report::write_table;

/// Which unpaired end wins a tie during traceback.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum TieBreakArg {
    /// Leave the 5' end unpaired first
    Left,
    /// Leave the 3' end unpaired first
    Right,
}

impl From<TieBreakArg> for TieBreak {
    fn from(arg: TieBreakArg) -> Self {
        match arg {
            TieBreakArg::Left => TieBreak::PreferLeftUnpaired,
            TieBreakArg::Right => TieBreak::PreferRightUnpaired,
        }
    }
}

/// Predict RNA secondary structures by base-pair maximization, once
/// freely and once around the annotated pseudoknots, and compare them.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file with sequence and structure lines
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Minimum number of positions between paired bases
    #[arg(short = 'm', long = "min-loop", default_value_t = 3)]
    min_loop: usize,

    /// Also maximize over split points when filling the score matrix
    #[arg(short = 'b', long = "bifurcating")]
    bifurcating: bool,

    /// Tie-break of the plain prediction
    #[arg(long = "standard-tie-break", value_enum, default_value = "left")]
    standard_tie_break: TieBreakArg,

    /// Tie-break of the knot-preserving prediction
    #[arg(long = "knot-tie-break", value_enum, default_value = "right")]
    knot_tie_break: TieBreakArg,

    /// Print the predicted structures below each row
    #[arg(short = 's', long = "structures")]
    structures: bool,

    /// Write JSON lines instead of a table
    #[arg(long = "json")]
    json: bool,

    /// Write a scatter plot of distance vs. length (SVG)
    #[arg(short = 'p', long = "plot")]
    plot: Option<PathBuf>,

    /// Number of worker threads (default: all cores)
    #[arg(short = 't', long = "threads")]
    threads: Option<usize>,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

impl Args {
    fn predictor(&self) -> Predictor {
        let recurrence = if self.bifurcating {
            Recurrence::Bifurcating
        } else {
            Recurrence::Adjacent
        };
        let mut predictor = Predictor::default()
            .with_min_loop(self.min_loop)
            .with_recurrence(recurrence);
        predictor.standard = predictor.standard.with_tie_break(self.standard_tie_break.into());
        predictor.knot_aware = predictor.knot_aware.with_tie_break(self.knot_tie_break.into());
        predictor
    }

    fn log_level(&self) -> &'static str {
        match (self.quiet, self.verbose) {
            (true, _) => "error",
            (false, 0) => "info",
            (false, 1) => "debug",
            (false, _) => "trace",
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_level()))
        .format_timestamp(None)
        .init();

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to configure the thread pool")?;
    }

    let records = read_records(&args.input)?;
    let predictor = args.predictor();
    log::debug!("{:?}", predictor);

    let predictions: Vec<_> = records
        .par_iter()
        .map(|record| (record, predictor.predict(&record.sequence, &record.structure)))
        .collect();

    let mut rows = Vec::with_capacity(predictions.len());
    for (record, prediction) in predictions {
        match prediction {
            Ok(p) => rows.push(ReportRow::new(record, &p)),
            Err(err) => log::warn!("Skipping record {}: {}", record.index, err),
        }
    }
    log::info!("Predicted {} of {} records.", rows.len(), records.len());

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => {
            colored::control::set_override(false);
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => {
            if !io::stdout().is_terminal() {
                colored::control::set_override(false);
            }
            Box::new(BufWriter::new(io::stdout().lock()))
        }
    };
    if args.json {
        write_json(&mut out, &rows)?;
    } else {
        write_table(&mut out, &rows, args.structures)?;
    }
    out.flush()?;

    if let Some(path) = &args.plot {
        let points: Vec<_> = rows.iter().map(ReportRow::point).collect();
        plot_distances(path, &points)?;
    }
    Ok(())
}
