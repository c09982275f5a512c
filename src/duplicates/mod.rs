//! Duplicate detection over a parsed question set.
//!
//! [`analyzer`] scans the canonical model for duplicated questions and
//! answer options, in exact or similarity mode; [`report`] renders the
//! resulting findings as human-readable text.

pub mod analyzer;
pub mod report;

pub use analyzer::{AnalyzerConfig, CompareMode, DuplicateAnalyzer, DuplicateReport, Finding};
pub use report::ReportBuilder;
