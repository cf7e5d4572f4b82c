//! Analyze command: full text analytics for one chapter.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use plume_core::analysis::{AnalysisReport, Severity, TextAnalyzer};
use plume_core::config::Config;
use tracing::{debug, instrument};

use super::read_chapter;

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,

    /// Only report repetitions at or above this severity.
    #[arg(long, value_enum)]
    pub min_severity: Option<Severity>,
}

/// Analyze a file and print the report.
#[instrument(name = "cmd_analyze", skip_all, fields(file = %args.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    analyzer: &TextAnalyzer,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, min_severity = ?args.min_severity, "executing analyze command");

    let prose = read_chapter(&args.file, config, max_input_bytes)?;
    let mut report = analyzer.analyze(&prose);
    if let Some(min) = args.min_severity {
        report.repetitions.retain(|r| r.severity >= min);
    }

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", args.file.bold());
    print_report(&report);
    Ok(())
}

/// Print an analysis report section by section.
pub fn print_report(report: &AnalysisReport) {
    println!(
        "\n  {} {} words, {} sentences, {} paragraphs",
        "Counts:".cyan(),
        report.word_count,
        report.sentence_count,
        report.paragraph_count,
    );
    println!(
        "          {} characters ({} without spaces)",
        report.character_count,
        report.character_count_no_spaces,
    );
    println!(
        "\n  {} {:.2} words/sentence, {:.2} sentences/paragraph, {:.2} letters/word",
        "Averages:".cyan(),
        report.average_words_per_sentence,
        report.average_sentences_per_paragraph,
        report.average_word_length,
    );
    println!(
        "\n  {} {} min reading, {} min speaking",
        "Time:".cyan(),
        report.reading_time_minutes,
        report.speaking_time_minutes,
    );

    let readability = report.readability_score.to_string();
    let readability = if report.readability_score >= 60 {
        readability.green().to_string()
    } else if report.readability_score >= 30 {
        readability.yellow().to_string()
    } else {
        readability.red().to_string()
    };
    println!(
        "\n  {} {}/100, complexity {}%",
        "Readability:".cyan(),
        readability,
        report.complexity_score,
    );

    let s = &report.sentiment;
    println!(
        "\n  {} {} (+{}% / -{}% / ={}%, score {})",
        "Sentiment:".cyan(),
        s.dominant,
        s.positive_percent,
        s.negative_percent,
        s.neutral_percent,
        s.raw_score,
    );

    let d = &report.dialogue_analysis;
    println!(
        "\n  {} {}% dialogue ({} lines), {}% narrative ({} lines)",
        "Dialogue:".cyan(),
        d.dialogue_percent,
        d.dialogue_line_count,
        d.narrative_percent,
        d.narrative_line_count,
    );

    if !report.most_frequent_words.is_empty() {
        let top: Vec<_> = report
            .most_frequent_words
            .iter()
            .map(|w| format!("{} ({})", w.word, w.count))
            .collect();
        println!("\n  {} {}", "Frequent:".cyan(), top.join(", "));
    }

    if !report.repetitions.is_empty() {
        println!("\n  {}", "Repetitions:".yellow());
        for r in &report.repetitions {
            let severity = match r.severity {
                Severity::High => r.severity.as_str().red().to_string(),
                Severity::Medium => r.severity.as_str().yellow().to_string(),
                Severity::Low => r.severity.as_str().dimmed().to_string(),
            };
            println!("    \"{}\" x{} [{}]", r.word, r.count, severity);
        }
    }
}
