//! Sentences command: print the segmented sentences.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use textlens_core::segment;

use super::read_input;

/// Arguments for the `sentences` subcommand.
#[derive(Args, Debug, Default)]
pub struct SentencesArgs {
    /// File to split. Omit or pass `-` to read standard input.
    pub file: Option<Utf8PathBuf>,
}

/// Split the input into sentences and print them numbered.
#[instrument(name = "cmd_sentences", skip_all, fields(file = ?args.file))]
pub fn cmd_sentences(
    args: SentencesArgs,
    global_json: bool,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    let content = read_input(args.file.as_deref(), max_input)?;
    let sentences = segment::split_sentences(&content);
    debug!(count = sentences.len(), "segmented input");

    if global_json {
        println!("{}", serde_json::to_string_pretty(&sentences)?);
        return Ok(());
    }

    let width = sentences.len().to_string().len();
    for (idx, sentence) in sentences.iter().enumerate() {
        println!("{:>width$}. {}", (idx + 1).dimmed(), sentence);
    }
    Ok(())
}
