//! Quality gate evaluation.
//!
//! Evaluates a [`ChapterReview`] against the gates resolved for its path,
//! falling back to project-wide config defaults where rules set nothing.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::{Config, QualityChecks};
use crate::review::ChapterReview;

/// Outcome of checking one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CheckReport {
    /// The file that was checked.
    pub file: String,
    /// Overall grade score.
    pub score: u32,
    /// `true` only if every gate passed.
    pub pass: bool,
    /// One message per failed gate.
    pub failures: Vec<String>,
}

/// Apply config-level defaults to gates resolved from rules.
pub fn effective_checks(resolved: QualityChecks, config: &Config) -> QualityChecks {
    QualityChecks {
        grade_min: resolved.grade_min.or(config.grade_min),
        ..resolved
    }
}

/// Evaluate `review` against `checks`. `file` is used for reporting only.
#[tracing::instrument(skip(review, checks))]
pub fn check_review(file: &str, review: &ChapterReview, checks: &QualityChecks) -> CheckReport {
    let analysis = &review.analysis;
    let mut failures = Vec::new();

    if let Some(min) = checks.grade_min
        && review.grade.score < min
    {
        failures.push(format!(
            "grade {} ({}) is below the minimum of {min}",
            review.grade.score, review.grade.letter
        ));
    }

    if let Some(min) = checks.readability_min
        && analysis.readability_score < min
    {
        failures.push(format!(
            "readability {} is below the minimum of {min}",
            analysis.readability_score
        ));
    }

    if let Some(max) = checks.complexity_max
        && analysis.complexity_score > max
    {
        failures.push(format!(
            "complexity {} is above the maximum of {max}",
            analysis.complexity_score
        ));
    }

    if let Some(max) = checks.max_repetitions
        && analysis.repetitions.len() > max
    {
        let words: Vec<&str> = analysis.repetitions.iter().map(|r| r.word.as_str()).collect();
        failures.push(format!(
            "{} repeated words ({}) exceed the maximum of {max}",
            words.len(),
            words.join(", ")
        ));
    }

    let pass = failures.is_empty();
    tracing::debug!(pass, failures = failures.len(), "checked");

    CheckReport {
        file: file.to_string(),
        score: review.grade.score,
        pass,
        failures,
    }
}
