//! Rule-based improvement suggestions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisReport;

/// Average sentence length above which sentences are flagged as long.
pub const LONG_SENTENCE_WORDS: f64 = 25.0;
/// Readability below which the text is flagged as hard to read.
pub const LOW_READABILITY: u32 = 30;
/// Dialogue share below which a long text is flagged as dialogue-poor.
pub const LOW_DIALOGUE_PERCENT: u32 = 10;
/// Minimum word count before dialogue share is considered.
pub const DIALOGUE_MIN_WORDS: usize = 500;

/// Kind of suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    /// Likely hurts the reader.
    Warning,
    /// Worth knowing.
    Info,
    /// Stylistic idea.
    Tip,
}

/// How urgent a suggestion is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Nice to have.
    Low,
    /// Should be looked at.
    Medium,
    /// Should be fixed.
    High,
}

impl Priority {
    /// Returns the priority as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// One improvement suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Suggestion {
    /// Kind of suggestion.
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    /// Human-readable advice.
    pub message: String,
    /// Urgency.
    pub priority: Priority,
}

impl Suggestion {
    fn new(kind: SuggestionKind, priority: Priority, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            priority,
        }
    }
}

/// Every applicable suggestion for a report.
///
/// Emitted in a fixed order: sentence length, readability, repetition,
/// dialogue.
pub fn suggest(report: &AnalysisReport) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    if report.average_words_per_sentence > LONG_SENTENCE_WORDS {
        suggestions.push(Suggestion::new(
            SuggestionKind::Warning,
            Priority::Medium,
            "Your sentences are fairly long. Consider shortening them to improve readability.",
        ));
    }

    if report.readability_score < LOW_READABILITY {
        suggestions.push(Suggestion::new(
            SuggestionKind::Warning,
            Priority::High,
            "The text seems hard to read. Try shorter sentences and simpler words.",
        ));
    }

    if let Some(top) = report.top_repetition() {
        suggestions.push(Suggestion::new(
            SuggestionKind::Info,
            Priority::Low,
            format!(
                "Watch out for repetition: \"{}\" appears {} times.",
                top.word, top.count
            ),
        ));
    }

    if report.dialogue_analysis.dialogue_percent < LOW_DIALOGUE_PERCENT
        && report.word_count > DIALOGUE_MIN_WORDS
    {
        suggestions.push(Suggestion::new(
            SuggestionKind::Tip,
            Priority::Low,
            "Your text contains little dialogue. Dialogue can make the narration more lively.",
        ));
    }

    tracing::debug!(count = suggestions.len(), "suggestions");
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{Repetition, Severity};

    fn healthy() -> AnalysisReport {
        let mut report = AnalysisReport::empty();
        report.word_count = 120;
        report.average_words_per_sentence = 12.0;
        report.readability_score = 70;
        report
    }

    #[test]
    fn healthy_report_has_no_suggestions() {
        assert!(suggest(&healthy()).is_empty());
    }

    #[test]
    fn all_rules_fire_in_order() {
        let mut report = healthy();
        report.average_words_per_sentence = 31.5;
        report.readability_score = 12;
        report.word_count = 800;
        report.repetitions = vec![
            Repetition {
                word: "porte".to_string(),
                count: 12,
                severity: Severity::High,
            },
            Repetition {
                word: "ombre".to_string(),
                count: 7,
                severity: Severity::Low,
            },
        ];

        let suggestions = suggest(&report);
        let shape: Vec<_> = suggestions.iter().map(|s| (s.kind, s.priority)).collect();
        assert_eq!(
            shape,
            vec![
                (SuggestionKind::Warning, Priority::Medium),
                (SuggestionKind::Warning, Priority::High),
                (SuggestionKind::Info, Priority::Low),
                (SuggestionKind::Tip, Priority::Low),
            ]
        );
        assert_eq!(
            suggestions[2].message,
            "Watch out for repetition: \"porte\" appears 12 times."
        );
    }

    #[test]
    fn dialogue_tip_needs_long_text() {
        let mut report = healthy();
        report.word_count = 500;
        assert!(suggest(&report).is_empty());
        report.word_count = 501;
        assert_eq!(suggest(&report)[0].kind, SuggestionKind::Tip);
        report.dialogue_analysis.dialogue_percent = 10;
        assert!(suggest(&report).is_empty());
    }

    #[test]
    fn serializes_kind_as_type() {
        let json = serde_json::to_value(Suggestion::new(
            SuggestionKind::Tip,
            Priority::Low,
            "x",
        ))
        .unwrap();
        assert_eq!(json["type"], "tip");
        assert_eq!(json["priority"], "low");
    }
}
