//! Dialogue vs. narrative line classification.

use std::sync::LazyLock;

use aho_corasick::AhoCorasick;

use super::reports::DialogueReport;

/// Characters that mark a line as dialogue: em-dash, guillemets, double quote.
pub const DIALOGUE_MARKERS: &[&str] = &["—", "«", "»", "\""];

static MARKER_MATCHER: LazyLock<AhoCorasick> =
    LazyLock::new(|| AhoCorasick::new(DIALOGUE_MARKERS).expect("valid dialogue markers"));

/// Whether a line contains any dialogue marker.
pub fn is_dialogue(line: &str) -> bool {
    MARKER_MATCHER.is_match(line)
}

/// Classify non-blank raw lines as dialogue or narrative.
///
/// `lines` should come from [`crate::text::split_lines`]; blank lines are
/// skipped here as well. The narrative share is the complement of the
/// dialogue share.
#[tracing::instrument(skip_all, fields(lines = lines.len()))]
pub fn analyze_dialogue(lines: &[&str]) -> DialogueReport {
    let (dialogue, narrative) = lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .fold((0usize, 0usize), |(d, n), line| {
            if is_dialogue(line) {
                (d + 1, n)
            } else {
                (d, n + 1)
            }
        });

    let total = dialogue + narrative;
    if total == 0 {
        return DialogueReport::default();
    }

    let dialogue_percent = (dialogue as f64 / total as f64 * 100.0).round() as u32;
    DialogueReport {
        dialogue_line_count: dialogue,
        narrative_line_count: narrative,
        dialogue_percent,
        narrative_percent: 100 - dialogue_percent,
    }
}
