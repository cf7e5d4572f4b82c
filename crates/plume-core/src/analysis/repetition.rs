//! Overused word detection.

use super::frequency::count_in_order;
use super::reports::{Repetition, Severity};

/// Find words longer than `min_length` characters that occur more than
/// `threshold` times, sorted by count descending.
#[tracing::instrument(skip_all, fields(words = words.len(), threshold))]
pub fn find_repetitions(words: &[String], min_length: usize, threshold: usize) -> Vec<Repetition> {
    let mut repeated: Vec<Repetition> = count_in_order(words, min_length)
        .into_iter()
        .filter(|(_, count)| *count > threshold)
        .map(|(word, count)| Repetition {
            word: word.to_string(),
            count,
            severity: Severity::from_count(count),
        })
        .collect();

    repeated.sort_by(|a, b| b.count.cmp(&a.count));
    repeated
}
