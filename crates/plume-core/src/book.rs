//! Book-level statistics aggregated over chapter reports.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::analysis::counts::minutes;
use crate::analysis::{AnalysisReport, Dominant};

/// One chapter's contribution to the book totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ChapterStats {
    /// Chapter name (usually its file name or title).
    pub name: String,
    /// Content words in the chapter.
    pub words: usize,
    /// Dominant sentiment of the chapter.
    pub dominant: Dominant,
}

/// Totals for a whole book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BookStats {
    /// Content words across all chapters.
    pub total_words: usize,
    /// Number of chapters.
    pub total_chapters: usize,
    /// Mean words per chapter, rounded; 0 with no chapters.
    pub avg_words_per_chapter: usize,
    /// Minutes to read the whole book.
    pub reading_time_minutes: usize,
    /// Same, in hours with 1 decimal.
    pub reading_time_hours: f64,
    /// Book-wide sentiment from the summed raw scores.
    pub dominant_sentiment: Dominant,
    /// Per-chapter figures, in input order.
    pub chapters: Vec<ChapterStats>,
}

impl BookStats {
    /// Aggregate named chapter reports read at `reading_wpm` words per minute.
    #[tracing::instrument(skip_all, fields(chapters = chapters.len()))]
    pub fn from_chapters<S: AsRef<str>>(
        chapters: &[(S, AnalysisReport)],
        reading_wpm: u32,
    ) -> Self {
        let total_words: usize = chapters.iter().map(|(_, r)| r.word_count).sum();
        let total_chapters = chapters.len();
        let raw_score: i64 = chapters.iter().map(|(_, r)| r.sentiment.raw_score).sum();

        let avg_words_per_chapter = if total_chapters == 0 {
            0
        } else {
            (total_words as f64 / total_chapters as f64).round() as usize
        };

        let reading_time_minutes = minutes(total_words, reading_wpm);
        let reading_time_hours = (reading_time_minutes as f64 / 60.0 * 10.0).round() / 10.0;

        let stats = Self {
            total_words,
            total_chapters,
            avg_words_per_chapter,
            reading_time_minutes,
            reading_time_hours,
            dominant_sentiment: Dominant::from_score(raw_score),
            chapters: chapters
                .iter()
                .map(|(name, report)| ChapterStats {
                    name: name.as_ref().to_string(),
                    words: report.word_count,
                    dominant: report.sentiment.dominant,
                })
                .collect(),
        };

        tracing::debug!(total_words, raw_score, "book aggregated");
        stats
    }
}
