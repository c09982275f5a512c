//! Input parsing: format detection and the two loaders.
//!
//! This module turns an input file into the canonical [`QuestionSet`]:
//!
//! 1. [`detect_format`] picks a loader from the file extension
//! 2. [`structured`] deserializes schema-conformant JSON directly
//! 3. [`free_text`] classifies and groups lines of informal quiz text
//!
//! Line-level anomalies in free text are never fatal; a parse fails only
//! when the source itself cannot be read or decoded, or when structured
//! input violates the schema.

pub mod encoding;
pub mod free_text;
pub mod structured;

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::model::QuestionSet;

/// Errors that can occur while loading a question set.
#[derive(Error, Debug)]
pub enum ParseError {
    /// An I/O error occurred while reading the input.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The input bytes decoded under none of the attempted encodings.
    #[error("{path} is neither valid UTF-8 nor valid Windows-1251 text")]
    Decode {
        /// Path to the undecodable input
        path: PathBuf,
    },

    /// Structured input violated the canonical schema.
    #[error("malformed structured input: {message}")]
    MalformedStructured {
        /// serde_json's description of the violating field/path
        message: String,
    },

    /// Structured input deserialized but breaks a model invariant.
    #[error("invalid question set: question {question_id}: {message}")]
    InvalidModel {
        /// Id of the offending question
        question_id: u32,
        /// Which invariant is broken, naming the field
        message: String,
    },
}

/// Which loader an input should be routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Canonical JSON schema, handled by [`structured`].
    Json,
    /// Informal plain-text convention, handled by [`free_text`].
    Text,
}

/// Select a loader from a file path's extension.
///
/// Only a (case-insensitive) `.json` extension selects the structured
/// loader; everything else, including a missing extension, is interpreted
/// as free text. The default matters: a mislabeled structured file will be
/// parsed as free text rather than rejected.
#[must_use]
pub fn detect_format(path: &Path) -> InputFormat {
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "json" => InputFormat::Json,
        _ => InputFormat::Text,
    }
}

/// Load a question set from a file, dispatching on the detected format.
pub fn parse_path(path: &Path) -> Result<QuestionSet, ParseError> {
    let bytes = fs::read(path).map_err(|e| ParseError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    match detect_format(path) {
        InputFormat::Json => {
            let text = encoding::decode(&bytes).ok_or_else(|| ParseError::Decode {
                path: path.to_path_buf(),
            })?;
            structured::load_str(&text)
        }
        InputFormat::Text => {
            let text = encoding::decode(&bytes).ok_or_else(|| ParseError::Decode {
                path: path.to_path_buf(),
            })?;
            Ok(free_text::parse_str(&text))
        }
    }
}
