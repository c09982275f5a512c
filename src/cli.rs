//! Command-line interface definitions.
//!
//! All arguments and subcommands use the clap derive API, with global
//! options (verbosity, color, JSON errors) and one subcommand per
//! operation.
//!
//! # Example
//!
//! ```bash
//! # Convert a quiz file into every output format
//! quizcheck convert exam.txt --out-dir out --name final
//!
//! # Check for exact duplicates
//! quizcheck check exam.txt
//!
//! # Near-duplicate check with custom thresholds
//! quizcheck check exam.txt --similarity --question-threshold 0.75
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Quiz question parser, format converter and duplicate checker.
///
/// quizcheck reads quiz files in an informal plain-text convention or in
/// the canonical JSON schema, converts them to the formats teachers and
/// exam software consume, and flags duplicated questions and answers.
#[derive(Debug, Parser)]
#[command(name = "quizcheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Report fatal errors as JSON on stderr
    #[arg(long, global = true)]
    pub json_errors: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert a quiz file into the output formats
    Convert(ConvertArgs),
    /// Check a quiz file for duplicate questions and answers
    Check(CheckArgs),
}

/// Arguments for the convert subcommand.
#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Input quiz file (.json is loaded as structured input, anything
    /// else is parsed as free text)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Directory to write output files to (created if missing)
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// Base name for output files
    #[arg(short, long, value_name = "NAME")]
    pub name: Option<String>,

    /// Output formats to produce (can be repeated)
    #[arg(short, long = "format", value_enum, value_name = "FORMAT", default_values_t = [FormatArg::All])]
    pub formats: Vec<FormatArg>,

    /// Skip the duplicate warning pass before converting
    #[arg(long)]
    pub no_duplicate_check: bool,
}

/// Arguments for the check subcommand.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Input quiz file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Compare by similarity ratio instead of exact equality
    #[arg(short, long)]
    pub similarity: bool,

    /// Force exact comparison, overriding a persisted similarity default
    #[arg(long, conflicts_with = "similarity")]
    pub exact: bool,

    /// Similarity threshold for question pairs (0.0 to 1.0)
    #[arg(long, value_name = "RATIO", value_parser = parse_threshold)]
    pub question_threshold: Option<f64>,

    /// Similarity threshold for answer option pairs (0.0 to 1.0)
    #[arg(long, value_name = "RATIO", value_parser = parse_threshold)]
    pub variant_threshold: Option<f64>,

    /// Report output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: ReportFormat,
}

/// Output format selector for convert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Every format below
    All,
    /// Student hand-out with variants
    Student,
    /// Student hand-out without variants
    StudentNoVariants,
    /// Exam-program import format
    Hemis,
    /// Canonical JSON schema
    Json,
}

impl std::fmt::Display for FormatArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatArg::All => write!(f, "all"),
            FormatArg::Student => write!(f, "student"),
            FormatArg::StudentNoVariants => write!(f, "student-no-variants"),
            FormatArg::Hemis => write!(f, "hemis"),
            FormatArg::Json => write!(f, "json"),
        }
    }
}

/// Report output format for check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable report text
    Text,
    /// Findings as JSON for scripting
    Json,
}

/// Parse and validate a similarity threshold in [0.0, 1.0].
pub fn parse_threshold(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a number"))?;
    if !(0.0..=1.0).contains(&value) {
        return Err(format!("threshold must be between 0.0 and 1.0, got {value}"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_threshold_valid() {
        assert_eq!(parse_threshold("0").unwrap(), 0.0);
        assert_eq!(parse_threshold("0.85").unwrap(), 0.85);
        assert_eq!(parse_threshold("1.0").unwrap(), 1.0);
    }

    #[test]
    fn test_parse_threshold_out_of_range() {
        assert!(parse_threshold("1.5").is_err());
        assert!(parse_threshold("-0.1").is_err());
    }

    #[test]
    fn test_parse_threshold_not_a_number() {
        assert!(parse_threshold("high").is_err());
    }

    #[test]
    fn test_check_args_parse() {
        let cli = Cli::try_parse_from([
            "quizcheck",
            "check",
            "quiz.txt",
            "--similarity",
            "--question-threshold",
            "0.75",
        ])
        .unwrap();
        match cli.command {
            Commands::Check(args) => {
                assert!(args.similarity);
                assert!(!args.exact);
                assert_eq!(args.question_threshold, Some(0.75));
                assert_eq!(args.variant_threshold, None);
                assert_eq!(args.output, ReportFormat::Text);
            }
            other => panic!("expected check, got {other:?}"),
        }
    }

    #[test]
    fn test_exact_conflicts_with_similarity() {
        let result =
            Cli::try_parse_from(["quizcheck", "check", "quiz.txt", "--exact", "--similarity"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_convert_args_default_format_is_all() {
        let cli = Cli::try_parse_from(["quizcheck", "convert", "quiz.txt"]).unwrap();
        match cli.command {
            Commands::Convert(args) => {
                assert_eq!(args.formats, vec![FormatArg::All]);
                assert_eq!(args.out_dir, PathBuf::from("."));
                assert!(args.name.is_none());
            }
            other => panic!("expected convert, got {other:?}"),
        }
    }

    #[test]
    fn test_convert_repeated_formats() {
        let cli = Cli::try_parse_from([
            "quizcheck", "convert", "quiz.txt", "-f", "student", "-f", "hemis",
        ])
        .unwrap();
        match cli.command {
            Commands::Convert(args) => {
                assert_eq!(args.formats, vec![FormatArg::Student, FormatArg::Hemis]);
            }
            other => panic!("expected convert, got {other:?}"),
        }
    }
}
