//! Report structs for text analysis.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for use in
//! CLI JSON output, chapter exports, and MCP tool responses. Field names
//! serialize in camelCase (`wordCount`, `readabilityScore`, ...).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Full analysis of one document.
///
/// A pure function of the document and the analyzer's configuration:
/// analyzing changed text produces a new report, reports are never updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Content words (stop words excluded).
    pub word_count: usize,
    /// Characters in the raw document, whitespace included.
    pub character_count: usize,
    /// Characters in the raw document, whitespace excluded.
    pub character_count_no_spaces: usize,
    /// Sentences in the cleaned text.
    pub sentence_count: usize,
    /// Paragraphs (blank-line separated) in the raw text.
    pub paragraph_count: usize,
    /// Words per sentence, 2 decimals.
    pub average_words_per_sentence: f64,
    /// Sentences per paragraph, 2 decimals.
    pub average_sentences_per_paragraph: f64,
    /// Characters per word, 2 decimals.
    pub average_word_length: f64,
    /// Minutes to read silently.
    pub reading_time_minutes: usize,
    /// Minutes to read aloud.
    pub speaking_time_minutes: usize,
    /// Lexicon-based sentiment.
    pub sentiment: SentimentReport,
    /// Reading ease (0–100, higher = easier).
    pub readability_score: u32,
    /// Percentage of long words (0–100).
    pub complexity_score: u32,
    /// Most frequent words, by count descending.
    pub most_frequent_words: Vec<FrequentWord>,
    /// Word counts by length, ascending.
    pub word_length_distribution: Vec<WordLengthBucket>,
    /// Dialogue vs. narrative lines.
    pub dialogue_analysis: DialogueReport,
    /// Words repeated beyond the threshold, by count descending.
    pub repetitions: Vec<Repetition>,
}

impl AnalysisReport {
    /// The canonical report for empty or whitespace-only input.
    pub fn empty() -> Self {
        Self {
            word_count: 0,
            character_count: 0,
            character_count_no_spaces: 0,
            sentence_count: 0,
            paragraph_count: 0,
            average_words_per_sentence: 0.0,
            average_sentences_per_paragraph: 0.0,
            average_word_length: 0.0,
            reading_time_minutes: 0,
            speaking_time_minutes: 0,
            sentiment: SentimentReport::neutral(),
            readability_score: 0,
            complexity_score: 0,
            most_frequent_words: Vec::new(),
            word_length_distribution: Vec::new(),
            dialogue_analysis: DialogueReport::default(),
            repetitions: Vec::new(),
        }
    }

    /// The most frequent word, if any word passed the frequency filter.
    pub fn top_word(&self) -> Option<&FrequentWord> {
        self.most_frequent_words.first()
    }

    /// The most repeated word, if any repetition was detected.
    pub fn top_repetition(&self) -> Option<&Repetition> {
        self.repetitions.first()
    }
}

// -- Sentiment --------------------------------------------------------------

/// Overall sentiment category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Dominant {
    /// More positive than negative hits.
    Positive,
    /// More negative than positive hits.
    Negative,
    /// Tie, including no hits at all.
    Neutral,
}

impl Dominant {
    /// Returns the category as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }

    /// Category from a signed score: above zero positive, below negative.
    pub const fn from_score(score: i64) -> Self {
        if score > 0 {
            Self::Positive
        } else if score < 0 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }
}

impl std::fmt::Display for Dominant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lexicon-based sentiment. The three percentages always sum to 100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SentimentReport {
    /// Share of sentiment hits that were positive.
    pub positive_percent: u32,
    /// Share of sentiment hits that were negative.
    pub negative_percent: u32,
    /// Complement of the other two.
    pub neutral_percent: u32,
    /// Category with strictly more hits, neutral on ties.
    pub dominant: Dominant,
    /// Positive hits minus negative hits.
    pub raw_score: i64,
    /// Words found in the positive lexicon.
    pub positive_hits: usize,
    /// Words found in the negative lexicon.
    pub negative_hits: usize,
}

impl SentimentReport {
    /// No sentiment hits at all.
    pub const fn neutral() -> Self {
        Self {
            positive_percent: 0,
            negative_percent: 0,
            neutral_percent: 100,
            dominant: Dominant::Neutral,
            raw_score: 0,
            positive_hits: 0,
            negative_hits: 0,
        }
    }
}

// -- Frequency --------------------------------------------------------------

/// A frequent word with its share of all words.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FrequentWord {
    /// The word.
    pub word: String,
    /// Occurrence count.
    pub count: usize,
    /// Percentage of all words, 2 decimals.
    pub percentage: f64,
}

/// Number of words of one length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WordLengthBucket {
    /// Word length in characters.
    pub length: usize,
    /// Words with this length.
    pub count: usize,
    /// Percentage of all words, 2 decimals.
    pub percentage: f64,
}

// -- Dialogue ---------------------------------------------------------------

/// Dialogue vs. narrative line classification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DialogueReport {
    /// Non-blank lines containing a dialogue marker.
    pub dialogue_line_count: usize,
    /// Other non-blank lines.
    pub narrative_line_count: usize,
    /// Percentage of non-blank lines that are dialogue.
    pub dialogue_percent: u32,
    /// Percentage of non-blank lines that are narrative.
    pub narrative_percent: u32,
}

// -- Repetitions ------------------------------------------------------------

/// How badly a word is overused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Severity {
    /// Just over the threshold.
    Low,
    /// More than 7 occurrences.
    Medium,
    /// More than 10 occurrences.
    High,
}

impl Severity {
    /// Bucket an occurrence count.
    pub const fn from_count(count: usize) -> Self {
        if count > 10 {
            Self::High
        } else if count > 7 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Returns the severity as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// A content word repeated more often than the threshold allows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Repetition {
    /// The word.
    pub word: String,
    /// Occurrence count.
    pub count: usize,
    /// Severity bucket.
    pub severity: Severity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_serializes_in_camel_case() {
        let json = serde_json::to_value(AnalysisReport::empty()).unwrap();
        assert_eq!(json["wordCount"], 0);
        assert_eq!(json["sentiment"]["neutralPercent"], 100);
        assert_eq!(json["sentiment"]["dominant"], "neutral");
        assert_eq!(json["dialogueAnalysis"]["dialoguePercent"], 0);
        assert!(json["mostFrequentWords"].as_array().unwrap().is_empty());
    }

    #[test]
    fn severity_buckets() {
        assert_eq!(Severity::from_count(6), Severity::Low);
        assert_eq!(Severity::from_count(7), Severity::Low);
        assert_eq!(Severity::from_count(8), Severity::Medium);
        assert_eq!(Severity::from_count(10), Severity::Medium);
        assert_eq!(Severity::from_count(11), Severity::High);
        assert_eq!(serde_json::to_value(Severity::High).unwrap(), "high");
    }

    #[test]
    fn dominant_from_score() {
        assert_eq!(Dominant::from_score(3), Dominant::Positive);
        assert_eq!(Dominant::from_score(-1), Dominant::Negative);
        assert_eq!(Dominant::from_score(0), Dominant::Neutral);
    }
}
