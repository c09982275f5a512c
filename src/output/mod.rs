//! Output formatters for the canonical question model.
//!
//! Each formatter consumes a [`crate::model::QuestionSet`] and produces
//! text; none of them re-parses or re-analyzes anything:
//!
//! - [`student`] - numbered hand-out text, with or without variants
//! - [`hemis`] - the `====`/`++++` exam-program import format
//! - [`json`] - the canonical JSON schema itself

pub mod hemis;
pub mod json;
pub mod student;

use std::path::{Path, PathBuf};

pub use json::JsonOutput;

/// The renderable output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Student hand-out with variants.
    Student,
    /// Student hand-out without variants.
    StudentNoVariants,
    /// Exam-program import format.
    Hemis,
    /// Canonical JSON.
    Json,
}

impl Format {
    /// Conventional output file name for this format, from a base name.
    #[must_use]
    pub fn file_name(self, base: &str) -> String {
        match self {
            Self::Student => format!("{base}_student.txt"),
            Self::StudentNoVariants => format!("{base}_student_novariants.txt"),
            Self::Hemis => format!("{base}_hemis.txt"),
            Self::Json => format!("{base}.json"),
        }
    }

    /// Conventional output path under a directory.
    #[must_use]
    pub fn output_path(self, dir: &Path, base: &str) -> PathBuf {
        dir.join(self.file_name(base))
    }
}
