//! Structural counts and averages.

use crate::text::{TokenSets, char_len};

/// Plain counts derived from the token sets and the raw document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoreCounts {
    /// Content words.
    pub words: usize,
    /// Characters, whitespace included.
    pub characters: usize,
    /// Characters, whitespace excluded.
    pub characters_no_spaces: usize,
    /// Sentences.
    pub sentences: usize,
    /// Paragraphs.
    pub paragraphs: usize,
    /// Words per sentence, 2 decimals.
    pub words_per_sentence: f64,
    /// Sentences per paragraph, 2 decimals.
    pub sentences_per_paragraph: f64,
    /// Characters per word, 2 decimals.
    pub word_length: f64,
}

/// Count the document's structure.
pub fn count(text: &str, tokens: &TokenSets<'_>) -> CoreCounts {
    let words = tokens.words.len();
    let sentences = tokens.sentences.len();
    let paragraphs = tokens.paragraphs.len();
    let total_word_chars: usize = tokens.words.iter().map(|w| char_len(w)).sum();

    CoreCounts {
        words,
        characters: text.chars().count(),
        characters_no_spaces: text.chars().filter(|c| !c.is_whitespace()).count(),
        sentences,
        paragraphs,
        words_per_sentence: ratio(words, sentences),
        sentences_per_paragraph: ratio(sentences, paragraphs),
        word_length: ratio(total_word_chars, words),
    }
}

/// Minutes needed at `per_minute` words per minute, rounded up.
pub fn minutes(words: usize, per_minute: u32) -> usize {
    words.div_ceil(per_minute.max(1) as usize)
}

/// `num / den` rounded to 2 decimals, 0 when `den` is 0.
pub fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 {
        return 0.0;
    }
    round2(num as f64 / den as f64)
}

/// Round to 2 decimals.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
