//! The knotfold command-line front end.
//!
//! Reads sequences and annotated structures from a plain-text file,
//! predicts a plain and a pseudoknot-preserving structure for each, and
//! reports the base-pair distance between the two.
//!

pub mod records;
pub mod report;
pub mod plot;
