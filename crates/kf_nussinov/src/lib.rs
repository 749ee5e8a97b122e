//! The kf_nussinov crate.
//!
//! Base-pair maximization (Nussinov) for RNA sequences:
//!  - the pairing rule (Watson-Crick and G-U wobble),
//!  - the score matrix and its traceback,
//!  - a pseudoknot-preserving variant that keeps annotated bracket spans
//!    verbatim and only refolds the regions in between.
//!

mod error;
mod nucleotides;
mod config;
mod observer;
mod nussinov;
mod compose;
mod folding;
mod predictor;

pub use error::*;
pub use nucleotides::*;
pub use config::*;
pub use observer::*;
pub use nussinov::*;
pub use compose::*;
pub use folding::*;
pub use predictor::*;
