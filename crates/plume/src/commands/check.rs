//! Check command: evaluate quality gates on chapter files.
//!
//! Matches each file against configured `rules`, falls back to the
//! config-level `grade_min`, and fails when any gate fails.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use plume_core::analysis::TextAnalyzer;
use plume_core::check::{self, CheckReport};
use plume_core::config::Config;
use plume_core::review::{ReviewMetadata, review};
use plume_core::rules::RuleSet;
use tracing::{debug, instrument};

use super::read_chapter;

/// Arguments for the `check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Files to check.
    #[arg(required = true)]
    pub files: Vec<Utf8PathBuf>,

    /// Minimum grade score, overriding rules and config.
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=100))]
    pub grade_min: Option<u32>,
}

/// Check files against the configured quality gates.
#[instrument(name = "cmd_check", skip_all, fields(files = args.files.len()))]
pub fn cmd_check(
    args: CheckArgs,
    global_json: bool,
    analyzer: &TextAnalyzer,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let rule_set = RuleSet::compile(config.rules.as_deref().unwrap_or_default());
    debug!(rules = rule_set.len(), "executing check command");

    let mut reports: Vec<CheckReport> = Vec::with_capacity(args.files.len());
    for file in &args.files {
        let mut gates = check::effective_checks(rule_set.resolve(file.as_str()), config);
        if args.grade_min.is_some() {
            gates.grade_min = args.grade_min;
        }

        let prose = read_chapter(file, config, max_input_bytes)?;
        let chapter = review(analyzer.analyze(&prose), ReviewMetadata::default());
        reports.push(check::check_review(file.as_str(), &chapter, &gates));
    }

    let failed = reports.iter().filter(|r| !r.pass).count();

    if global_json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            let status = if report.pass {
                "PASS".green().to_string()
            } else {
                "FAIL".red().to_string()
            };
            println!("{} {} (grade {})", status, report.file.bold(), report.score);
            for failure in &report.failures {
                println!("  {} {}", "-".dimmed(), failure);
            }
        }
    }

    if failed > 0 {
        bail!("{failed} of {} files failed quality checks", reports.len());
    }
    Ok(())
}
