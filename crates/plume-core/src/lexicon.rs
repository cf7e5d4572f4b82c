//! Word tables consumed by the analysis engine.
//!
//! Stop words, sentiment lexicons, and the vowel set are data, not code:
//! a [`Lexicon`] is built once (from the built-in French tables or from
//! configuration) and handed to the engine, so another language only needs
//! different tables.

use std::collections::HashSet;
use std::sync::LazyLock;

/// French function words excluded from word statistics.
pub static FRENCH_STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        // articles and contractions
        "le", "la", "les", "l", "un", "une", "des", "de", "d", "du", "au", "aux",
        // pronouns
        "il", "elle", "ils", "elles", "je", "j", "tu", "on", "nous", "vous", "se", "s", "ce", "c",
        "qu", "que", "qui", "quoi", "son", "sa", "ses", "me", "m", "te", "t", "lui", "leur",
        // copulas and auxiliaries
        "est", "sont", "était", "être", "a", "ont", "avoir",
        // conjunctions, negation, prepositions
        "et", "ou", "mais", "donc", "ni", "car", "ne", "n", "pas", "à", "en", "pour", "dans",
        "sur", "sous", "avec", "sans", "par",
        // quantifiers
        "tout", "plus", "grand",
    ]
    .into_iter()
    .collect()
});

/// French words counted as positive sentiment.
pub static FRENCH_POSITIVE_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "heureux",
        "joie",
        "amour",
        "bonheur",
        "merveilleux",
        "excellent",
        "fantastique",
        "beau",
        "sourire",
        "rire",
        "victoire",
        "réussite",
        "plaisir",
        "espoir",
        "lumière",
    ]
    .into_iter()
    .collect()
});

/// French words counted as negative sentiment.
pub static FRENCH_NEGATIVE_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "triste",
        "peur",
        "colère",
        "haine",
        "douleur",
        "terrible",
        "horrible",
        "mort",
        "guerre",
        "sang",
        "larmes",
        "souffrance",
        "échec",
        "désespoir",
        "ombre",
    ]
    .into_iter()
    .collect()
});

/// Base and accented French vowels used by the syllable estimate.
pub const FRENCH_VOWELS: &str = "aeiouéèêëàâäîïôöùûüÿ";

/// Sentiment polarity of a single word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// Listed in the positive lexicon.
    Positive,
    /// Listed in the negative lexicon.
    Negative,
}

/// The word tables one analysis run works against.
///
/// All entries are stored lowercase; lookups expect already-lowercased
/// words, which is what the tokenizer produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    stop_words: HashSet<String>,
    positive: HashSet<String>,
    negative: HashSet<String>,
    vowels: HashSet<char>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::french()
    }
}

impl Lexicon {
    /// The built-in French tables.
    pub fn french() -> Self {
        Self {
            stop_words: to_owned_set(FRENCH_STOP_WORDS.iter().copied()),
            positive: to_owned_set(FRENCH_POSITIVE_WORDS.iter().copied()),
            negative: to_owned_set(FRENCH_NEGATIVE_WORDS.iter().copied()),
            vowels: FRENCH_VOWELS.chars().collect(),
        }
    }

    /// Replace the stop-word list.
    pub fn with_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stop_words = to_owned_set(words);
        self
    }

    /// Replace the positive sentiment lexicon.
    pub fn with_positive_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.positive = to_owned_set(words);
        self
    }

    /// Replace the negative sentiment lexicon.
    pub fn with_negative_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.negative = to_owned_set(words);
        self
    }

    /// Replace the vowel set (each character of `vowels`, lowercased).
    pub fn with_vowels(mut self, vowels: &str) -> Self {
        self.vowels = vowels.chars().flat_map(char::to_lowercase).collect();
        self
    }

    /// Whether `word` is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Sentiment polarity of `word`, if it appears in either lexicon.
    ///
    /// A word listed in both lexicons counts as positive.
    pub fn polarity(&self, word: &str) -> Option<Polarity> {
        if self.positive.contains(word) {
            Some(Polarity::Positive)
        } else if self.negative.contains(word) {
            Some(Polarity::Negative)
        } else {
            None
        }
    }

    /// Whether `ch` is a vowel. `ch` must already be lowercase.
    pub fn is_vowel(&self, ch: char) -> bool {
        self.vowels.contains(&ch)
    }

    /// Number of stop words in the table.
    pub fn stop_word_count(&self) -> usize {
        self.stop_words.len()
    }
}

/// Parse a word-list file body: one word per line, `#` starts a comment.
pub fn parse_word_list(body: &str) -> Vec<String> {
    body.lines()
        .map(|line| line.split('#').next().unwrap_or_default().trim())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect()
}

fn to_owned_set<I, S>(words: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .map(|w| w.as_ref().trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}
