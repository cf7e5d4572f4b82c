//! Core library for plume.
//!
//! Text analytics for fiction manuscripts: structural counts, readability and
//! complexity, lexicon-based sentiment, word frequency and repetition, and
//! dialogue/narrative balance, plus a review pass that grades a chapter and
//! suggests improvements.
//!
//! # Modules
//!
//! - [`text`] - The two tokenization pipelines (cleaned and raw)
//! - [`lexicon`] - Stop words, sentiment lexicons, and vowels as data
//! - [`markdown`] - Markdown-to-prose stripping
//! - [`readability`] - Syllable estimate, readability and complexity scores
//! - [`analysis`] - The [`TextAnalyzer`] engine and its report types
//! - [`review`] - Grade, suggestions, and summary of a report
//! - [`book`] - Totals across the chapters of a book
//! - [`rules`] / [`check`] - Path-based quality gates
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use plume_core::{analyze, review::{review, ReviewMetadata}};
//!
//! let report = analyze("Le chat est heureux. Le chien est triste.");
//! assert_eq!(report.word_count, 4);
//!
//! let chapter = review(report, ReviewMetadata::default());
//! println!("{} ({})", chapter.grade.letter, chapter.summary);
//! ```
#![deny(unsafe_code)]

pub mod analysis;
pub mod book;
pub mod check;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod markdown;
pub mod readability;
pub mod review;
pub mod rules;
pub mod text;

pub use analysis::{AnalysisReport, AnalyzerSettings, TextAnalyzer, analyze};
pub use config::{Config, ConfigLoader, DEFAULT_MAX_INPUT_BYTES, LogLevel};
pub use error::{ConfigError, ConfigResult};
pub use lexicon::Lexicon;
