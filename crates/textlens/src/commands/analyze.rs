//! Analyze command: full text statistics.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use textlens_core::{AnalysisOptions, AnalysisReport, Config, LengthCategory, WordCase, analysis};

use super::read_input;

/// Frequency rows printed in text mode unless `--top` asks for more or fewer.
const TEXT_FREQUENCY_ROWS: usize = 10;

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug, Default)]
pub struct AnalyzeArgs {
    /// File to analyze. Omit or pass `-` to read standard input.
    pub file: Option<Utf8PathBuf>,

    /// Number of entries in the word-frequency table.
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    /// Reading speed in words per minute.
    #[arg(long, value_name = "N")]
    pub wpm: Option<f64>,

    /// Count "Дом" and "дом" as different words.
    #[arg(long)]
    pub case_sensitive: bool,

    /// Hide the per-sentence listing (text output only).
    #[arg(long)]
    pub no_sentences: bool,

    /// Hide sentence statistics (text output only).
    #[arg(long)]
    pub no_stats: bool,

    /// Hide the length distribution (text output only).
    #[arg(long)]
    pub no_distribution: bool,

    /// Hide the word-frequency table (text output only).
    #[arg(long)]
    pub no_frequency: bool,
}

impl AnalyzeArgs {
    fn options(&self, config: &Config) -> AnalysisOptions {
        let mut options = AnalysisOptions::from_config(config);
        if let Some(top) = self.top {
            options.top_words = top;
        }
        if let Some(wpm) = self.wpm {
            options.words_per_minute = wpm;
        }
        if self.case_sensitive {
            options.word_case = WordCase::Sensitive;
        }
        options
    }
}

/// Analyze text from a file or stdin and print the report.
#[instrument(name = "cmd_analyze", skip_all, fields(file = ?args.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config: &Config,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    let options = args.options(config);
    debug!(?options, "executing analyze command");

    let content = read_input(args.file.as_deref(), max_input)?;
    let report = analysis::analyze_with(&content, &options);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if report.is_empty() {
        println!(
            "{}",
            "No text to analyze. Pass a file or pipe text on standard input.".yellow()
        );
        return Ok(());
    }

    if let Some(ref file) = args.file
        && file.as_str() != "-"
    {
        println!("{}", file.bold());
    }

    print_overview(&report);
    if !args.no_stats {
        print_sentence_stats(&report);
    }
    if !args.no_distribution {
        print_distribution(&report);
    }
    if !args.no_frequency {
        print_frequency(&report, args.top.unwrap_or(TEXT_FREQUENCY_ROWS));
    }
    if !args.no_sentences {
        print_sentences(&report);
    }

    Ok(())
}

fn print_overview(report: &AnalysisReport) {
    println!("\n{}", "Overview".bold().underline());
    println!("  {}: {}", "Sentences".dimmed(), report.sentence_count());
    println!("  {}: {}", "Words".dimmed(), report.total_words);
    println!("  {}: {}", "Unique words".dimmed(), report.unique_words);
    println!(
        "  {}: {} ({} without spaces)",
        "Characters".dimmed(),
        report.total_characters,
        report.total_characters_no_spaces
    );
    println!(
        "  {}: {:.1}",
        "Avg word length".dimmed(),
        report.avg_word_length
    );
    println!(
        "  {}: {:.1} min",
        "Reading time".dimmed(),
        report.reading_time_minutes
    );
}

fn print_sentence_stats(report: &AnalysisReport) {
    let stats = &report.sentence_stats;
    println!("\n{}", "Sentence Statistics".bold().underline());
    println!(
        "  {}: {:.1} words, {:.1} characters",
        "Average".dimmed(),
        stats.avg_words_per_sentence,
        stats.avg_chars_per_sentence
    );
    println!(
        "  {}: {}-{} words, {}-{} characters",
        "Range".dimmed(),
        stats.min_words,
        stats.max_words,
        stats.min_chars,
        stats.max_chars
    );
    if let (Some(shortest), Some(longest)) = (stats.shortest_sentence, stats.longest_sentence) {
        println!(
            "  {}: #{shortest}, {}: #{longest}",
            "Shortest".dimmed(),
            "longest".dimmed()
        );
    }
}

fn print_distribution(report: &AnalysisReport) {
    let distribution = &report.sentence_stats.distribution;
    println!("\n{}", "Length Distribution".bold().underline());
    for category in LengthCategory::ALL {
        let line = format!(
            "  {:<8} {:>4}  {:>5.1}%",
            category.label(),
            distribution.count(category),
            distribution.percentage(category)
        );
        match category {
            LengthCategory::Short => println!("{}", line.green()),
            LengthCategory::Medium => println!("{}", line.yellow()),
            LengthCategory::Long => println!("{}", line.red()),
        }
    }
}

fn print_frequency(report: &AnalysisReport, rows: usize) {
    if report.common_words.is_empty() || rows == 0 {
        return;
    }
    println!("\n{}", "Most Common Words".bold().underline());
    for entry in report.common_words.iter().take(rows) {
        println!(
            "  {:<20} {:>5}  {:>5.1}%",
            entry.word.cyan(),
            entry.count,
            entry.percentage
        );
    }
}

fn print_sentences(report: &AnalysisReport) {
    println!("\n{}", "Sentences".bold().underline());
    for sentence in &report.sentences {
        let tag = format!("[{}]", sentence.length_category.label());
        let tag = match sentence.length_category {
            LengthCategory::Short => tag.green().to_string(),
            LengthCategory::Medium => tag.yellow().to_string(),
            LengthCategory::Long => tag.red().to_string(),
        };
        println!(
            "  {}. {} {} {}",
            sentence.number,
            tag,
            sentence.text,
            format!(
                "({} words, {} chars)",
                sentence.words, sentence.characters
            )
            .dimmed()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let config = Config {
            top_words: Some(5),
            words_per_minute: Some(250.0),
            ..Config::default()
        };
        let args = AnalyzeArgs {
            top: Some(3),
            case_sensitive: true,
            ..AnalyzeArgs::default()
        };
        let options = args.options(&config);
        assert_eq!(options.top_words, 3);
        assert_eq!(options.words_per_minute, 250.0);
        assert_eq!(options.word_case, WordCase::Sensitive);
    }

    #[test]
    fn defaults_without_flags_or_config() {
        let options = AnalyzeArgs::default().options(&Config::default());
        assert_eq!(options, AnalysisOptions::default());
    }
}
