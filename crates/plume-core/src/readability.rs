//! Readability and complexity scoring.
//!
//! Readability uses a Flesch reading-ease formula adapted for French:
//!
//! `207 - 1.015 * (words/sentences) - 84.6 * (syllables/words)`
//!
//! clamped to 0–100, higher = easier. Complexity is the share of long words.
//! Syllables are estimated by counting vowel groups against the
//! [`Lexicon`]'s vowel set.

use crate::lexicon::Lexicon;
use crate::text::char_len;

const BASE: f64 = 207.0;
const SENTENCE_WEIGHT: f64 = 1.015;
const SYLLABLE_WEIGHT: f64 = 84.6;

/// Estimate the syllables in `word` by counting non-vowel → vowel transitions.
///
/// Every non-empty word has at least one syllable.
pub fn count_syllables(word: &str, lexicon: &Lexicon) -> usize {
    if word.is_empty() {
        return 0;
    }

    let mut count = 0;
    let mut previous_was_vowel = false;
    for ch in word.chars().flat_map(char::to_lowercase) {
        let is_vowel = lexicon.is_vowel(ch);
        if is_vowel && !previous_was_vowel {
            count += 1;
        }
        previous_was_vowel = is_vowel;
    }

    count.max(1)
}

/// Mean syllable estimate over `words`, or 0 when there are none.
pub fn average_syllables(words: &[String], lexicon: &Lexicon) -> f64 {
    if words.is_empty() {
        return 0.0;
    }
    let total: usize = words.iter().map(|w| count_syllables(w, lexicon)).sum();
    total as f64 / words.len() as f64
}

/// Readability score (0–100) of a token set.
///
/// Returns 0 when there are no words or no sentences.
#[tracing::instrument(skip_all, fields(words = words.len(), sentences = sentence_count))]
pub fn readability_score(words: &[String], sentence_count: usize, lexicon: &Lexicon) -> u32 {
    if words.is_empty() || sentence_count == 0 {
        return 0;
    }

    let words_per_sentence = words.len() as f64 / sentence_count as f64;
    let syllables_per_word = average_syllables(words, lexicon);
    let score = SYLLABLE_WEIGHT.mul_add(
        -syllables_per_word,
        SENTENCE_WEIGHT.mul_add(-words_per_sentence, BASE),
    );

    tracing::debug!(words_per_sentence, syllables_per_word, score, "readability");
    score.round().clamp(0.0, 100.0) as u32
}

/// Percentage (0–100) of words longer than `long_word_threshold` characters.
pub fn complexity_score(words: &[String], long_word_threshold: usize) -> u32 {
    if words.is_empty() {
        return 0;
    }

    let long_words = words
        .iter()
        .filter(|w| char_len(w) > long_word_threshold)
        .count();
    let pct = long_words as f64 / words.len() as f64 * 100.0;
    pct.round().clamp(0.0, 100.0) as u32
}
