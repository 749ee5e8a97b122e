//! Hooks around the phases of a fold call.

use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoldPhase {
    Fill,
    Traceback,
}

impl fmt::Display for FoldPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FoldPhase::Fill => write!(f, "fill"),
            FoldPhase::Traceback => write!(f, "traceback"),
        }
    }
}

/// Receives a callback before and after each phase of every fold call.
/// Both methods default to doing nothing.
pub trait FoldObserver {
    fn phase_started(&mut self, _phase: FoldPhase, _length: usize) {}
    fn phase_finished(&mut self, _phase: FoldPhase, _elapsed: Duration) {}
}

/// Ignores all phases.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl FoldObserver for NoopObserver {}

/// Reports phase timings on the `debug` log level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl FoldObserver for LogObserver {
    fn phase_started(&mut self, phase: FoldPhase, length: usize) {
        log::trace!("Starting {phase} for length {length}.");
    }

    fn phase_finished(&mut self, phase: FoldPhase, elapsed: Duration) {
        log::debug!("Finished {phase} in {elapsed:.2?}.");
    }
}
