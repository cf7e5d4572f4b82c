//! Lexicon-based sentiment scoring.

use crate::lexicon::{Lexicon, Polarity};

use super::reports::{Dominant, SentimentReport};

/// Score sentiment by counting lexicon hits among `words`.
///
/// Words in neither lexicon are ignored. The neutral share is the
/// complement of the other two, so the three always sum to 100.
#[tracing::instrument(skip_all, fields(words = words.len()))]
pub fn analyze_sentiment(words: &[String], lexicon: &Lexicon) -> SentimentReport {
    let mut positive_hits = 0usize;
    let mut negative_hits = 0usize;

    for word in words {
        match lexicon.polarity(word) {
            Some(Polarity::Positive) => positive_hits += 1,
            Some(Polarity::Negative) => negative_hits += 1,
            None => {}
        }
    }

    let total_hits = positive_hits + negative_hits;
    if total_hits == 0 {
        return SentimentReport::neutral();
    }

    let positive_percent = percent(positive_hits, total_hits);
    let negative_percent = percent(negative_hits, total_hits).min(100 - positive_percent);
    let raw_score = positive_hits as i64 - negative_hits as i64;

    SentimentReport {
        positive_percent,
        negative_percent,
        neutral_percent: 100 - positive_percent - negative_percent,
        dominant: Dominant::from_score(raw_score),
        raw_score,
        positive_hits,
        negative_hits,
    }
}

fn percent(part: usize, total: usize) -> u32 {
    (part as f64 / total as f64 * 100.0).round() as u32
}
