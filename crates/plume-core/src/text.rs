//! Text processing utilities.
//!
//! Two separate pipelines feed the analysis modules:
//!
//! - the **cleaned** pipeline ([`clean_text`], [`extract_words`],
//!   [`split_sentences`]) normalizes punctuation away and lowercases, for
//!   word statistics;
//! - the **raw** pipeline ([`split_paragraphs`], [`split_lines`]) works on the
//!   original text, because cleaning destroys blank-line boundaries and the
//!   punctuation that marks dialogue.

use std::sync::LazyLock;

use regex::Regex;

use crate::lexicon::Lexicon;

/// Anything that is not a word character, whitespace, or a sentence terminator.
static NOISE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s.!?]").expect("valid regex"));

/// Runs of whitespace.
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// A single non-word character.
static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\W").expect("valid regex"));

/// Runs of sentence terminators.
static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

/// A blank line: a newline, optional whitespace, another newline.
static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("valid regex"));

/// Normalize raw text for word and sentence extraction.
///
/// Replaces every character other than word characters, whitespace, `.`,
/// `!` and `?` with a space, collapses whitespace, trims, and lowercases.
pub fn clean_text(text: &str) -> String {
    let spaced = NOISE.replace_all(text, " ");
    let collapsed = WHITESPACE_RUN.replace_all(&spaced, " ");
    collapsed.trim().to_lowercase()
}

/// Extract content words from cleaned text.
///
/// Splits on whitespace, strips the remaining non-word characters (the
/// sentence terminators), and drops empty tokens and stop words.
pub fn extract_words(cleaned: &str, lexicon: &Lexicon) -> Vec<String> {
    cleaned
        .split_whitespace()
        .map(|token| NON_WORD.replace_all(token, "").into_owned())
        .filter(|word| !word.is_empty() && !lexicon.is_stop_word(word))
        .collect()
}

/// Split cleaned text into sentences on runs of `.`, `!` and `?`.
pub fn split_sentences(cleaned: &str) -> Vec<String> {
    SENTENCE_BREAK
        .split(cleaned)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split original text into paragraphs separated by blank lines.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    PARAGRAPH_BREAK
        .split(text)
        .filter(|p| !p.trim().is_empty())
        .collect()
}

/// Split original text into trimmed, non-blank lines.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Length of a word in characters (not bytes).
pub fn char_len(word: &str) -> usize {
    word.chars().count()
}

/// Every token set one analysis run needs, built once per document.
#[derive(Debug, Clone)]
pub struct TokenSets<'a> {
    /// Content words from the cleaned pipeline.
    pub words: Vec<String>,
    /// Sentences from the cleaned pipeline.
    pub sentences: Vec<String>,
    /// Paragraphs from the raw pipeline.
    pub paragraphs: Vec<&'a str>,
    /// Non-blank lines from the raw pipeline.
    pub lines: Vec<&'a str>,
}

impl<'a> TokenSets<'a> {
    /// Tokenize `text` through both pipelines.
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    pub fn from_text(text: &'a str, lexicon: &Lexicon) -> Self {
        let cleaned = clean_text(text);
        let tokens = Self {
            words: extract_words(&cleaned, lexicon),
            sentences: split_sentences(&cleaned),
            paragraphs: split_paragraphs(text),
            lines: split_lines(text),
        };
        tracing::debug!(
            words = tokens.words.len(),
            sentences = tokens.sentences.len(),
            paragraphs = tokens.paragraphs.len(),
            lines = tokens.lines.len(),
            "tokenized"
        );
        tokens
    }
}
