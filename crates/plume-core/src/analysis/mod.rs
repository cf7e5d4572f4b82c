//! The text analysis engine.
//!
//! [`TextAnalyzer`] turns one document into an immutable [`AnalysisReport`].
//! It holds only its [`AnalyzerSettings`] and [`Lexicon`], never per-call
//! state, so one instance can serve any number of documents (and threads).
//!
//! Each metric lives in its own module as a pure function over the token sets
//! built by [`crate::text::TokenSets`]; callers can also invoke them directly.

pub mod counts;
pub mod dialogue;
pub mod frequency;
pub mod repetition;
pub mod reports;
pub mod sentiment;

pub use reports::{
    AnalysisReport, DialogueReport, Dominant, FrequentWord, Repetition, SentimentReport, Severity,
    WordLengthBucket,
};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::lexicon::Lexicon;
use crate::markdown;
use crate::readability;
use crate::text::TokenSets;

/// Tunable thresholds of the engine.
///
/// Every field has a default; a config file only needs the ones it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AnalyzerSettings {
    /// Maximum entries in `mostFrequentWords`.
    pub frequent_words_limit: usize,
    /// Words must be longer than this (in characters) to be counted as frequent.
    pub frequency_min_length: usize,
    /// Words must be longer than this (in characters) to be flagged as repeated.
    pub repetition_min_length: usize,
    /// A word is a repetition when it occurs more often than this.
    pub repetition_threshold: usize,
    /// Words longer than this (in characters) count toward complexity.
    pub long_word_threshold: usize,
    /// Silent reading speed, words per minute.
    pub reading_wpm: u32,
    /// Reading-aloud speed, words per minute.
    pub speaking_wpm: u32,
}

impl Default for AnalyzerSettings {
    fn default() -> Self {
        Self {
            frequent_words_limit: 10,
            frequency_min_length: 2,
            repetition_min_length: 3,
            repetition_threshold: 5,
            long_word_threshold: 6,
            reading_wpm: 200,
            speaking_wpm: 150,
        }
    }
}

/// Stateless analysis engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextAnalyzer {
    settings: AnalyzerSettings,
    lexicon: Lexicon,
}

impl TextAnalyzer {
    /// Create an engine with explicit settings and word tables.
    pub const fn new(settings: AnalyzerSettings, lexicon: Lexicon) -> Self {
        Self { settings, lexicon }
    }

    /// The engine's thresholds.
    pub const fn settings(&self) -> &AnalyzerSettings {
        &self.settings
    }

    /// The engine's word tables.
    pub const fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Analyze one document.
    ///
    /// Total over its input: empty or whitespace-only text yields
    /// [`AnalysisReport::empty`], anything else a fully populated report.
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    pub fn analyze(&self, text: &str) -> AnalysisReport {
        if text.trim().is_empty() {
            tracing::debug!("empty document");
            return AnalysisReport::empty();
        }

        let s = &self.settings;
        let tokens = TokenSets::from_text(text, &self.lexicon);
        let core = counts::count(text, &tokens);

        let report = AnalysisReport {
            word_count: core.words,
            character_count: core.characters,
            character_count_no_spaces: core.characters_no_spaces,
            sentence_count: core.sentences,
            paragraph_count: core.paragraphs,
            average_words_per_sentence: core.words_per_sentence,
            average_sentences_per_paragraph: core.sentences_per_paragraph,
            average_word_length: core.word_length,
            reading_time_minutes: counts::minutes(core.words, s.reading_wpm),
            speaking_time_minutes: counts::minutes(core.words, s.speaking_wpm),
            sentiment: sentiment::analyze_sentiment(&tokens.words, &self.lexicon),
            readability_score: readability::readability_score(
                &tokens.words,
                core.sentences,
                &self.lexicon,
            ),
            complexity_score: readability::complexity_score(&tokens.words, s.long_word_threshold),
            most_frequent_words: frequency::most_frequent_words(
                &tokens.words,
                s.frequent_words_limit,
                s.frequency_min_length,
            ),
            word_length_distribution: frequency::word_length_distribution(&tokens.words),
            dialogue_analysis: dialogue::analyze_dialogue(&tokens.lines),
            repetitions: repetition::find_repetitions(
                &tokens.words,
                s.repetition_min_length,
                s.repetition_threshold,
            ),
        };

        tracing::debug!(
            words = report.word_count,
            sentences = report.sentence_count,
            readability = report.readability_score,
            "analysis complete"
        );
        report
    }

    /// Strip Markdown markup, then analyze the remaining prose.
    pub fn analyze_markdown(&self, text: &str) -> AnalysisReport {
        self.analyze(&markdown::strip_to_prose(text))
    }
}

/// Analyze `text` with the default French settings.
pub fn analyze(text: &str) -> AnalysisReport {
    TextAnalyzer::default().analyze(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PATHOLOGICAL: &[&str] = &[
        "",
        "   \n  ",
        "a",
        "!",
        "...!!!???",
        "«»—\"",
        "\n\n\n",
        "Anticonstitutionnellementanticonstitutionnellementanticonstitutionnellement",
        "日本語のテキスト。もう一つ！",
        "🙂🙂🙂 . 🙂",
        "— \n— \n«",
    ];

    fn assert_well_formed(report: &AnalysisReport) {
        let s = &report.sentiment;
        assert_eq!(s.positive_percent + s.negative_percent + s.neutral_percent, 100);
        assert!(report.readability_score <= 100);
        assert!(report.complexity_score <= 100);
        for v in [
            report.average_words_per_sentence,
            report.average_sentences_per_paragraph,
            report.average_word_length,
        ] {
            assert!(v.is_finite() && v >= 0.0);
        }
        let d = &report.dialogue_analysis;
        if d.dialogue_line_count + d.narrative_line_count > 0 {
            assert_eq!(d.dialogue_percent + d.narrative_percent, 100);
        }
        assert!(
            report
                .word_length_distribution
                .iter()
                .all(|b| b.percentage.is_finite() && b.percentage >= 0.0)
        );
        if !report.word_length_distribution.is_empty() {
            let total: f64 = report.word_length_distribution.iter().map(|b| b.percentage).sum();
            assert!((total - 100.0).abs() < 1e-6);
        }
    }

    #[test]
    fn total_over_pathological_inputs() {
        for input in PATHOLOGICAL {
            assert_well_formed(&analyze(input));
        }
        let long = "mot ".repeat(50_000);
        assert_well_formed(&analyze(&long));
    }

    #[test]
    fn total_over_large_length_diverse_input() {
        let mut text = "maison ".repeat(3_981);
        for len in (1..=20).filter(|&len| len != 6) {
            text.push_str(&"z".repeat(len));
            text.push_str(". ");
        }
        let report = analyze(&text);
        assert_eq!(report.word_count, 4_000);
        assert_eq!(report.word_length_distribution.len(), 20);
        assert_well_formed(&report);
    }

    #[test]
    fn empty_canonical_form() {
        assert_eq!(analyze(""), AnalysisReport::empty());
        assert_eq!(analyze("   \n  "), AnalysisReport::empty());
    }

    #[test]
    fn idempotent() {
        let text = "Le soleil brillait. — Viens ! cria-t-elle.\n\nIl resta dans l'ombre.";
        assert_eq!(analyze(text), analyze(text));
    }

    #[test]
    fn reading_time_monotonic() {
        let mut previous = 0;
        for n in [1, 50, 199, 200, 201, 400, 1000] {
            let report = analyze(&"maison ".repeat(n));
            assert!(report.reading_time_minutes >= previous);
            previous = report.reading_time_minutes;
        }
        assert_eq!(analyze(&"maison ".repeat(201)).reading_time_minutes, 2);
        assert_eq!(analyze(&"maison ".repeat(201)).speaking_time_minutes, 2);
    }

    #[test]
    fn balanced_sentiment_scenario() {
        let report = analyze("Le chat est heureux. Le chien est triste.");
        assert_eq!(report.word_count, 4);
        assert_eq!(report.sentence_count, 2);
        assert_eq!(report.paragraph_count, 1);
        assert_eq!(report.sentiment.positive_hits, 1);
        assert_eq!(report.sentiment.negative_hits, 1);
        assert_eq!(report.sentiment.positive_percent, 50);
        assert_eq!(report.sentiment.negative_percent, 50);
        assert_eq!(report.sentiment.neutral_percent, 0);
        assert_eq!(report.sentiment.dominant, Dominant::Neutral);
        assert_eq!(report.sentiment.raw_score, 0);
    }

    #[test]
    fn repeated_word_scenario() {
        let text = "L'arbre pousse. Un arbre tombe. Cet arbre chante. Quel arbre vieux. \
                    Mon arbre dort. Ton arbre rêve.";
        let report = analyze(text);
        assert_eq!(
            report.repetitions,
            vec![Repetition {
                word: "arbre".to_string(),
                count: 6,
                severity: Severity::Low,
            }]
        );
    }

    #[test]
    fn dialogue_scenario() {
        let mut lines = vec!["— Oui, dit-il."; 15];
        lines.extend(vec!["La pluie tombait."; 5]);
        let report = analyze(&lines.join("\n"));
        assert_eq!(report.dialogue_analysis.dialogue_percent, 75);
        assert_eq!(report.dialogue_analysis.narrative_percent, 25);
    }

    #[test]
    fn frequent_words_respect_limit() {
        let text: String = (0..40).map(|i| format!("mot{i} ")).collect();
        let report = analyze(&text);
        assert_eq!(report.most_frequent_words.len(), 10);

        let narrow = TextAnalyzer::new(
            AnalyzerSettings {
                frequent_words_limit: 3,
                ..AnalyzerSettings::default()
            },
            Lexicon::french(),
        );
        assert_eq!(narrow.analyze(&text).most_frequent_words.len(), 3);
    }

    #[test]
    fn word_length_distribution_sums_to_one_hundred() {
        let report = analyze("chat maison jardin arbre soleil lune");
        let total: f64 = report.word_length_distribution.iter().map(|b| b.percentage).sum();
        assert!((total - 100.0).abs() < 1e-9);
        let lengths: Vec<_> = report.word_length_distribution.iter().map(|b| b.length).collect();
        assert!(lengths.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn custom_lexicon_changes_results() {
        let english = Lexicon::french()
            .with_stop_words(["the", "is"])
            .with_positive_words(["happy"])
            .with_negative_words(["sad"]);
        let analyzer = TextAnalyzer::new(AnalyzerSettings::default(), english);
        let report = analyzer.analyze("The cat is happy.");
        assert_eq!(report.word_count, 2);
        assert_eq!(report.sentiment.dominant, Dominant::Positive);
    }

    #[test]
    fn markdown_is_stripped_before_analysis() {
        let analyzer = TextAnalyzer::default();
        let report = analyzer.analyze_markdown("# Chapitre premier\n\nLe **chat** dort.");
        assert_eq!(report.word_count, 2);
        assert_eq!(report.paragraph_count, 1);
    }
}
