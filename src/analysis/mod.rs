//! Analysis pipeline.
//!
//! Runs the scanner, the structural checker and the semantic checker over one
//! source string and gathers their output into an `AnalysisResult`.

pub mod analysis;
