//! Secondary pass over an [`AnalysisReport`]: grade, suggestions, summary.
//!
//! Every function here is pure over the report alone. [`review`] bundles
//! them with optional chapter metadata into the exportable
//! [`ChapterReview`].

pub mod grade;
pub mod suggestions;
pub mod summary;

pub use grade::{Grade, Letter, grade};
pub use suggestions::{Priority, Suggestion, SuggestionKind, suggest};
pub use summary::summarize;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisReport;

/// Optional labels attached to an exported review.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ReviewMetadata {
    /// Chapter title.
    pub title: Option<String>,
    /// Book the chapter belongs to.
    pub book: Option<String>,
}

/// A chapter's analysis with its grade, suggestions, and summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ChapterReview {
    /// Chapter title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Book title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book: Option<String>,
    /// The underlying analysis.
    pub analysis: AnalysisReport,
    /// Improvement suggestions, in rule order.
    pub suggestions: Vec<Suggestion>,
    /// Overall grade.
    pub grade: Grade,
    /// Plain-language summary.
    pub summary: String,
}

/// Build the full review of an analyzed chapter.
#[tracing::instrument(skip_all, fields(title = metadata.title.as_deref()))]
pub fn review(report: AnalysisReport, metadata: ReviewMetadata) -> ChapterReview {
    ChapterReview {
        title: metadata.title,
        book: metadata.book,
        suggestions: suggest(&report),
        grade: grade(&report),
        summary: summarize(&report),
        analysis: report,
    }
}
