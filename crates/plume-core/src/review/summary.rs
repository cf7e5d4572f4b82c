//! One-paragraph plain-language summary.

use std::fmt::Write;

use crate::analysis::AnalysisReport;

/// Summarize a report in a few fixed-template sentences.
pub fn summarize(report: &AnalysisReport) -> String {
    let mut summary = format!(
        "Your text contains {} words in {} sentences and {} paragraphs.",
        report.word_count, report.sentence_count, report.paragraph_count
    );

    let minutes = report.reading_time_minutes;
    if minutes > 0 {
        let unit = if minutes > 1 { "minutes" } else { "minute" };
        let _ = write!(summary, " Estimated reading time: {minutes} {unit}.");
    }

    let _ = write!(
        summary,
        " The dominant sentiment is {}.",
        report.sentiment.dominant
    );

    if let Some(top) = report.top_word() {
        let _ = write!(
            summary,
            " The most used word is \"{}\" ({} times).",
            top.word, top.count
        );
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;

    #[test]
    fn empty_report_summary() {
        assert_eq!(
            summarize(&AnalysisReport::empty()),
            "Your text contains 0 words in 0 sentences and 0 paragraphs. \
             The dominant sentiment is neutral."
        );
    }

    #[test]
    fn full_summary() {
        let report = analyze("Le chat est heureux. Le chat est joyeux.");
        assert_eq!(
            summarize(&report),
            "Your text contains 4 words in 2 sentences and 1 paragraphs. \
             Estimated reading time: 1 minute. \
             The dominant sentiment is positive. \
             The most used word is \"chat\" (2 times)."
        );
    }

    #[test]
    fn plural_minutes() {
        let report = analyze(&"maison ".repeat(450));
        assert!(summarize(&report).contains("Estimated reading time: 3 minutes."));
    }
}
