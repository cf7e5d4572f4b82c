//! Overall quality grade.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisReport;

/// Words per sentence that earns the full sentence-length component.
const IDEAL_SENTENCE_LENGTH: f64 = 15.0;

const READABILITY_WEIGHT: f64 = 40.0;
const SENTENCE_LENGTH_WEIGHT: f64 = 30.0;
const DIVERSITY_WEIGHT: f64 = 20.0;
const REPETITION_BUDGET: f64 = 10.0;

/// Letter grade, `A+` down to `D`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
pub enum Letter {
    /// 90 and above.
    #[serde(rename = "A+")]
    APlus,
    /// 85 and above.
    A,
    /// 80 and above.
    #[serde(rename = "A-")]
    AMinus,
    /// 75 and above.
    #[serde(rename = "B+")]
    BPlus,
    /// 70 and above.
    B,
    /// 65 and above.
    #[serde(rename = "B-")]
    BMinus,
    /// 60 and above.
    #[serde(rename = "C+")]
    CPlus,
    /// 55 and above.
    C,
    /// 50 and above.
    #[serde(rename = "C-")]
    CMinus,
    /// Below 50.
    D,
}

impl Letter {
    /// Letter for an unrounded score.
    pub fn from_score(score: f64) -> Self {
        const THRESHOLDS: [(f64, Letter); 9] = [
            (90.0, Letter::APlus),
            (85.0, Letter::A),
            (80.0, Letter::AMinus),
            (75.0, Letter::BPlus),
            (70.0, Letter::B),
            (65.0, Letter::BMinus),
            (60.0, Letter::CPlus),
            (55.0, Letter::C),
            (50.0, Letter::CMinus),
        ];
        THRESHOLDS
            .iter()
            .find(|(min, _)| score >= *min)
            .map_or(Self::D, |(_, letter)| *letter)
    }

    /// The letter as printed.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::AMinus => "A-",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::BMinus => "B-",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::CMinus => "C-",
            Self::D => "D",
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Overall grade of a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Grade {
    /// Score 0–100, rounded.
    pub score: u32,
    /// Letter grade.
    pub letter: Letter,
    /// One-line verdict.
    pub description: String,
}

/// Grade a report.
///
/// Weighted sum of readability (40), sentence-length fit around 15 words
/// (30), vocabulary diversity (20), and a repetition allowance (10) that
/// loses 2 points per repeated word.
#[tracing::instrument(skip_all, fields(words = report.word_count))]
pub fn grade(report: &AnalysisReport) -> Grade {
    let readability = f64::from(report.readability_score);

    let sentence_fit = (report.average_words_per_sentence - IDEAL_SENTENCE_LENGTH)
        .abs()
        .mul_add(-3.0, 100.0)
        .max(0.0);

    let diversity = report.top_word().map_or(50.0, |top| {
        (report.word_count as f64 / top.count as f64 * 5.0).min(100.0)
    });

    let repetition_penalty = (report.repetitions.len() as f64 * 2.0).min(REPETITION_BUDGET);

    let score = readability / 100.0 * READABILITY_WEIGHT
        + sentence_fit / 100.0 * SENTENCE_LENGTH_WEIGHT
        + diversity / 100.0 * DIVERSITY_WEIGHT
        + (REPETITION_BUDGET - repetition_penalty).max(0.0);

    tracing::debug!(readability, sentence_fit, diversity, repetition_penalty, score, "graded");

    Grade {
        score: score.round().clamp(0.0, 100.0) as u32,
        letter: Letter::from_score(score),
        description: describe(score).to_string(),
    }
}

fn describe(score: f64) -> &'static str {
    if score >= 85.0 {
        "Excellent - very well written"
    } else if score >= 75.0 {
        "Good - solid writing"
    } else if score >= 65.0 {
        "Fair - some improvements possible"
    } else if score >= 50.0 {
        "Average - needs improvement"
    } else {
        "Weak - many improvements needed"
    }
}
