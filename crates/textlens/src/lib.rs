//! Library interface for the `textlens` CLI.
//!
//! Exposes the argument parser and command structure so they can be tested
//! and documented. The entry point is in `main.rs`.
//!
//! - [`Cli`] - The root argument parser (clap derive)
//! - [`Commands`] - Available subcommands
//! - [`commands`] - Command implementations

pub mod commands;

#[cfg(feature = "mcp")]
pub mod server;

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Color output preference.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect terminal capabilities automatically.
    #[default]
    Auto,
    /// Always emit colors.
    Always,
    /// Never emit colors.
    Never,
}

impl ColorChoice {
    /// Set the global color mode. Call once at startup.
    pub fn apply(self) {
        match self {
            Self::Auto => {}
            Self::Always => owo_colors::set_override(true),
            Self::Never => owo_colors::set_override(false),
        }
    }
}

const ENV_HELP: &str = "\
ENVIRONMENT VARIABLES:
    RUST_LOG                  Log filter (e.g., debug, textlens_core=trace)
    TEXTLENS_LOG_PATH         Explicit JSONL log file path
    TEXTLENS_LOG_DIR          Directory for textlens.jsonl
    TEXTLENS_TOP_WORDS        Word-frequency table size
    TEXTLENS_WORDS_PER_MINUTE Reading speed for the reading time estimate
    TEXTLENS_WORD_CASE        Word counting case (insensitive, sensitive)
";

/// Command-line interface definition for textlens.
#[derive(Parser)]
#[command(name = "textlens")]
#[command(about = "Sentence segmentation and text statistics", long_about = None)]
#[command(version, arg_required_else_help = true)]
#[command(after_long_help = ENV_HELP)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print only the version number (for scripting)
    #[arg(long)]
    pub version_only: bool,

    /// Path to configuration file (overrides discovery)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Run as if started in DIR
    #[arg(short = 'C', long, global = true)]
    pub chdir: Option<PathBuf>,

    /// Only print errors (suppresses warnings/info)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// More detail (repeatable; e.g. -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Colorize output
    #[arg(long, global = true, value_enum, default_value_t)]
    pub color: ColorChoice,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,
}

/// Available subcommands for the CLI.
#[derive(Subcommand)]
pub enum Commands {
    /// Analyze text: sentences, word counts, frequency, reading time
    Analyze(commands::analyze::AnalyzeArgs),

    /// Split text into sentences
    Sentences(commands::sentences::SentencesArgs),

    /// Show package information and effective configuration
    Info(commands::info::InfoArgs),

    /// Start MCP (Model Context Protocol) server on stdio
    #[cfg(feature = "mcp")]
    Serve(commands::serve::ServeArgs),
}

/// Returns the clap command for documentation generation
pub fn command() -> clap::Command {
    Cli::command()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        command().debug_assert();
    }

    #[test]
    fn parses_analyze_flags() {
        let cli = Cli::parse_from([
            "textlens",
            "--json",
            "analyze",
            "text.txt",
            "--top",
            "5",
            "--case-sensitive",
            "--no-sentences",
        ]);
        assert!(cli.json);
        let Some(Commands::Analyze(args)) = cli.command else {
            panic!("expected analyze command");
        };
        assert_eq!(args.file.as_deref().map(|f| f.as_str()), Some("text.txt"));
        assert_eq!(args.top, Some(5));
        assert!(args.case_sensitive);
        assert!(args.no_sentences);
        assert!(!args.no_frequency);
    }

    #[test]
    fn file_is_optional() {
        let cli = Cli::parse_from(["textlens", "sentences"]);
        let Some(Commands::Sentences(args)) = cli.command else {
            panic!("expected sentences command");
        };
        assert!(args.file.is_none());
    }
}
