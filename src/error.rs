//! Structured error handling and exit codes.

use serde::Serialize;

/// Exit codes for the quizcheck application.
///
/// - 0: Success (input processed, no duplicates found)
/// - 1: General error (unreadable input, schema violation, write failure)
/// - 2: Duplicates found (completed normally, the report has findings)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExitCode {
    /// Success: input processed and no duplicate content found.
    Success = 0,
    /// General error: an unexpected error occurred.
    GeneralError = 1,
    /// Duplicates: processing completed and duplicate content was found.
    DuplicatesFound = 2,
}

impl ExitCode {
    /// Get the numeric exit code.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Get the machine-readable code prefix.
    #[must_use]
    pub fn code_prefix(self) -> &'static str {
        match self {
            Self::Success => "QC000",
            Self::GeneralError => "QC001",
            Self::DuplicatesFound => "QC002",
        }
    }
}

/// Structured error information for JSON output.
#[derive(Debug, Serialize)]
pub struct StructuredError {
    /// The error code (e.g., "QC001")
    pub code: String,
    /// The exit code number
    pub exit_code: i32,
    /// Human-readable error message
    pub message: String,
}

impl StructuredError {
    /// Create a new structured error from an anyhow error and an exit code.
    #[must_use]
    pub fn new(err: &anyhow::Error, exit_code: ExitCode) -> Self {
        Self {
            code: exit_code.code_prefix().to_string(),
            exit_code: exit_code.as_i32(),
            message: format!("{err:#}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::DuplicatesFound.as_i32(), 2);
    }

    #[test]
    fn test_code_prefixes() {
        assert_eq!(ExitCode::Success.code_prefix(), "QC000");
        assert_eq!(ExitCode::DuplicatesFound.code_prefix(), "QC002");
    }

    #[test]
    fn test_structured_error_carries_message() {
        let err = anyhow::anyhow!("input file missing");
        let structured = StructuredError::new(&err, ExitCode::GeneralError);
        assert_eq!(structured.code, "QC001");
        assert_eq!(structured.exit_code, 1);
        assert!(structured.message.contains("input file missing"));
    }
}
