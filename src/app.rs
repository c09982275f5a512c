//! Application logic behind the CLI subcommands.
//!
//! Drives the whole pipeline for one invocation: detect and parse the
//! input, analyze for duplicates, then either print the report (`check`)
//! or write the requested output formats (`convert`). The core modules
//! stay free of user-facing formatting; everything printed lives here.

use std::fs;

use anyhow::{Context, Result};

use crate::cli::{CheckArgs, Cli, Commands, ConvertArgs, FormatArg, ReportFormat};
use crate::config::Config;
use crate::duplicates::{AnalyzerConfig, CompareMode, DuplicateAnalyzer, ReportBuilder};
use crate::error::ExitCode;
use crate::logging;
use crate::model::QuestionSet;
use crate::output::{hemis, student, Format, JsonOutput};
use crate::parser;

/// Run the application and return the exit code.
pub fn run_app(cli: Cli) -> Result<ExitCode> {
    logging::init_logging(cli.verbose, cli.quiet);

    if cli.no_color {
        yansi::disable();
    }

    match cli.command {
        Commands::Check(args) => run_check(&args, cli.no_color),
        Commands::Convert(args) => run_convert(&args),
    }
}

/// `check`: parse, analyze, print the report.
fn run_check(args: &CheckArgs, no_color: bool) -> Result<ExitCode> {
    let set = parse_input(args)?;
    log::info!("Parsed {} questions from {}", set.len(), args.input.display());

    let config = analyzer_config(args, &Config::load());
    let report = DuplicateAnalyzer::new(config).analyze(&set);

    match args.output {
        ReportFormat::Text => {
            let text = ReportBuilder::new(!no_color).render(&report);
            print!("{text}");
        }
        ReportFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(if report.has_findings() {
        ExitCode::DuplicatesFound
    } else {
        ExitCode::Success
    })
}

/// `convert`: parse, warn about duplicates, write the selected formats.
fn run_convert(args: &ConvertArgs) -> Result<ExitCode> {
    let set = parser::parse_path(&args.input)
        .with_context(|| format!("cannot load {}", args.input.display()))?;
    log::info!("Parsed {} questions from {}", set.len(), args.input.display());

    if !args.no_duplicate_check {
        let report = DuplicateAnalyzer::with_defaults().analyze(&set);
        for finding in report.findings() {
            log::warn!("duplicate content: {finding:?}");
        }
    }

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("cannot create {}", args.out_dir.display()))?;

    let base = args.name.clone().unwrap_or_else(|| {
        args.input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "quiz".to_string())
    });

    for format in resolve_formats(&args.formats) {
        write_format(&set, format, args, &base)?;
    }

    Ok(ExitCode::Success)
}

fn parse_input(args: &CheckArgs) -> Result<QuestionSet> {
    parser::parse_path(&args.input)
        .with_context(|| format!("cannot load {}", args.input.display()))
}

/// Merge persisted defaults with CLI flags; an explicit flag always wins
/// over the file, in either direction.
fn analyzer_config(args: &CheckArgs, saved: &Config) -> AnalyzerConfig {
    let mode = if args.similarity {
        CompareMode::Similarity
    } else if args.exact || !saved.similarity {
        CompareMode::Exact
    } else {
        CompareMode::Similarity
    };
    AnalyzerConfig::default()
        .with_mode(mode)
        .with_question_threshold(args.question_threshold.unwrap_or(saved.question_threshold))
        .with_variant_threshold(args.variant_threshold.unwrap_or(saved.variant_threshold))
}

/// Expand `all` and de-duplicate the requested formats, keeping order.
fn resolve_formats(requested: &[FormatArg]) -> Vec<Format> {
    let mut formats = Vec::new();
    for arg in requested {
        let expanded: &[Format] = match arg {
            FormatArg::All => &[
                Format::Student,
                Format::StudentNoVariants,
                Format::Hemis,
                Format::Json,
            ],
            FormatArg::Student => &[Format::Student],
            FormatArg::StudentNoVariants => &[Format::StudentNoVariants],
            FormatArg::Hemis => &[Format::Hemis],
            FormatArg::Json => &[Format::Json],
        };
        for format in expanded {
            if !formats.contains(format) {
                formats.push(*format);
            }
        }
    }
    formats
}

fn write_format(
    set: &QuestionSet,
    format: Format,
    args: &ConvertArgs,
    base: &str,
) -> Result<()> {
    let path = format.output_path(&args.out_dir, base);

    match format {
        Format::Student => write_text(&path, &student::render(set, true))?,
        Format::StudentNoVariants => write_text(&path, &student::render(set, false))?,
        Format::Hemis => write_text(&path, &hemis::render(set))?,
        Format::Json => JsonOutput::new(set)
            .write_to_file(&path)
            .with_context(|| format!("cannot write {}", path.display()))?,
    }

    log::info!("Wrote {}", path.display());
    Ok(())
}

fn write_text(path: &std::path::Path, content: &str) -> Result<()> {
    let mut content = content.to_string();
    if !content.ends_with('\n') {
        content.push('\n');
    }
    fs::write(path, content).with_context(|| format!("cannot write {}", path.display()))
}
