//! quizcheck - quiz question parser, converter and duplicate checker
//!
//! Reads quiz files written in an informal plain-text convention or in the
//! canonical JSON schema, normalizes them into one in-memory model, flags
//! duplicate and near-duplicate content, and renders the formats teachers
//! and exam software consume.

pub mod app;
pub mod cli;
pub mod config;
pub mod duplicates;
pub mod error;
pub mod logging;
pub mod model;
pub mod output;
pub mod parser;

pub use app::run_app;
