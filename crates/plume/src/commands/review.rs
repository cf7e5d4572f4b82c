//! Review command: grade, suggestions, and summary for one chapter.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use plume_core::analysis::TextAnalyzer;
use plume_core::config::Config;
use plume_core::review::{ChapterReview, Priority, ReviewMetadata, review};
use tracing::{debug, instrument};

use super::{chapter_title, read_input_file};

/// Arguments for the `review` subcommand.
#[derive(Args, Debug)]
pub struct ReviewArgs {
    /// File to review.
    pub file: Utf8PathBuf,

    /// Chapter title (defaults to the first heading, then the file name).
    #[arg(long)]
    pub title: Option<String>,

    /// Book the chapter belongs to.
    #[arg(long)]
    pub book: Option<String>,
}

/// Review a file and print the result.
#[instrument(name = "cmd_review", skip_all, fields(file = %args.file))]
pub fn cmd_review(
    args: ReviewArgs,
    global_json: bool,
    analyzer: &TextAnalyzer,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing review command");

    let raw = read_input_file(&args.file, max_input_bytes)?;
    let report = if config.strips_markdown(&args.file) {
        analyzer.analyze_markdown(&raw)
    } else {
        analyzer.analyze(&raw)
    };
    let metadata = ReviewMetadata {
        title: Some(args.title.unwrap_or_else(|| chapter_title(&args.file, &raw))),
        book: args.book,
    };
    let chapter = review(report, metadata);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&chapter)?);
        return Ok(());
    }

    print_review(&chapter);
    Ok(())
}

fn print_review(chapter: &ChapterReview) {
    match (&chapter.title, &chapter.book) {
        (Some(title), Some(book)) => println!("{} {}", title.bold(), format!("({book})").dimmed()),
        (Some(title), None) => println!("{}", title.bold()),
        _ => {}
    }

    let grade = &chapter.grade;
    let letter = grade.letter.to_string();
    let letter = if grade.score >= 75 {
        letter.green().to_string()
    } else if grade.score >= 50 {
        letter.yellow().to_string()
    } else {
        letter.red().to_string()
    };
    println!(
        "\n  {} {} {}/100 {}",
        "Grade:".cyan(),
        letter,
        grade.score,
        grade.description.dimmed(),
    );

    println!("\n  {}", chapter.summary);

    if chapter.suggestions.is_empty() {
        println!("\n  {} none", "Suggestions:".cyan());
        return;
    }
    println!("\n  {}", "Suggestions:".cyan());
    for s in &chapter.suggestions {
        let priority = match s.priority {
            Priority::High => s.priority.as_str().red().to_string(),
            Priority::Medium => s.priority.as_str().yellow().to_string(),
            Priority::Low => s.priority.as_str().dimmed().to_string(),
        };
        println!("    [{}] {}", priority, s.message);
    }
}
