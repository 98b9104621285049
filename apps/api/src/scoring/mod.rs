// Deterministic resume scoring engine.
// Pure and synchronous: no I/O, no logging, no environment reads.
// Callers hand in resolved text and keyword lists; everything here is a total function.

pub mod keywords;
pub mod report;
pub mod signals;
pub mod subscores;

pub use keywords::{GapReport, KeywordSet};
pub use report::{analyze, AnalysisReport};
