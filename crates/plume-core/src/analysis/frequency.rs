//! Word frequency and word length distribution.

use std::collections::BTreeMap;
use std::collections::HashMap;

use crate::text::char_len;

use super::counts::round2;
use super::reports::{FrequentWord, WordLengthBucket};

/// Count occurrences of words longer than `min_length` characters.
///
/// Entries come back in first-occurrence order, so a stable sort on the
/// count keeps earlier words ahead on ties.
pub fn count_in_order(words: &[String], min_length: usize) -> Vec<(&str, usize)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();

    for word in words.iter().filter(|w| char_len(w) > min_length) {
        match index.get(word.as_str()) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(word.as_str(), counts.len());
                counts.push((word.as_str(), 1));
            }
        }
    }

    counts
}

/// The `limit` most frequent words longer than `min_length` characters.
///
/// Percentages are relative to all words, not just the counted ones.
#[tracing::instrument(skip_all, fields(words = words.len(), limit))]
pub fn most_frequent_words(words: &[String], limit: usize, min_length: usize) -> Vec<FrequentWord> {
    let mut counts = count_in_order(words, min_length);
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(limit);

    let total = words.len();
    counts
        .into_iter()
        .map(|(word, count)| FrequentWord {
            word: word.to_string(),
            count,
            percentage: round2(count as f64 / total as f64 * 100.0),
        })
        .collect()
}

/// Word counts for every length present, ascending by length.
///
/// Percentages are apportioned in hundredths by largest remainder, so they
/// are never negative and sum to exactly 100. Ties on the remainder favor
/// the shorter length.
#[tracing::instrument(skip_all, fields(words = words.len()))]
pub fn word_length_distribution(words: &[String]) -> Vec<WordLengthBucket> {
    if words.is_empty() {
        return Vec::new();
    }

    let mut by_length: BTreeMap<usize, usize> = BTreeMap::new();
    for word in words {
        *by_length.entry(char_len(word)).or_insert(0) += 1;
    }

    let total = words.len();
    let mut buckets: Vec<(usize, usize, usize)> = by_length
        .into_iter()
        .map(|(length, count)| (length, count, count * HUNDREDTHS / total))
        .collect();

    let assigned: usize = buckets.iter().map(|(_, _, units)| units).sum();
    let mut order: Vec<usize> = (0..buckets.len()).collect();
    order.sort_by_key(|&i| std::cmp::Reverse(buckets[i].1 * HUNDREDTHS % total));
    for &i in order.iter().take(HUNDREDTHS - assigned) {
        buckets[i].2 += 1;
    }

    buckets
        .into_iter()
        .map(|(length, count, units)| WordLengthBucket {
            length,
            count,
            percentage: units as f64 / 100.0,
        })
        .collect()
}

/// 100 percent in hundredths of a percent.
const HUNDREDTHS: usize = 10_000;
