//! Book command: per-chapter analysis and book totals.

use camino::Utf8PathBuf;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use plume_core::analysis::TextAnalyzer;
use plume_core::book::BookStats;
use plume_core::config::Config;
use serde::Serialize;
use tracing::{debug, instrument};

use super::read_chapter;

/// Arguments for the `book` subcommand.
#[derive(Args, Debug)]
pub struct BookArgs {
    /// Chapter files, in reading order.
    #[arg(required = true)]
    pub files: Vec<Utf8PathBuf>,

    /// Book title for the report.
    #[arg(long)]
    pub title: Option<String>,
}

#[derive(Serialize)]
struct BookReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    #[serde(flatten)]
    stats: &'a BookStats,
}

/// Analyze every chapter and print book statistics.
#[instrument(name = "cmd_book", skip_all, fields(chapters = args.files.len()))]
pub fn cmd_book(
    args: BookArgs,
    global_json: bool,
    analyzer: &TextAnalyzer,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(chapters = args.files.len(), "executing book command");

    let progress = if global_json {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new(args.files.len() as u64);
        bar.set_style(
            ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} {msg}")?
                .progress_chars("=> "),
        );
        bar
    };

    let mut chapters = Vec::with_capacity(args.files.len());
    for file in &args.files {
        progress.set_message(file.to_string());
        let prose = read_chapter(file, config, max_input_bytes)?;
        chapters.push((file.to_string(), analyzer.analyze(&prose)));
        progress.inc(1);
    }
    progress.finish_and_clear();

    let stats = BookStats::from_chapters(&chapters, analyzer.settings().reading_wpm);

    if global_json {
        let report = BookReport {
            title: args.title.as_deref(),
            stats: &stats,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if let Some(ref title) = args.title {
        println!("{}", title.bold());
    }
    for chapter in &stats.chapters {
        println!(
            "  {:>7} words  {:<8} {}",
            chapter.words,
            chapter.dominant.to_string(),
            chapter.name.dimmed(),
        );
    }
    println!(
        "\n  {} {} words in {} chapters ({} per chapter)",
        "Total:".cyan(),
        stats.total_words,
        stats.total_chapters,
        stats.avg_words_per_chapter,
    );
    println!(
        "  {} {} min ({:.1} h)",
        "Reading:".cyan(),
        stats.reading_time_minutes,
        stats.reading_time_hours,
    );
    println!("  {} {}", "Sentiment:".cyan(), stats.dominant_sentiment);
    Ok(())
}
