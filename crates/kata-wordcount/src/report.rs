//! Report formatting for word statistics.

use crate::error::Result;
use crate::stats::WordCount;

/// Output format of a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// Summary line followed by an optional tab-indented index.
    #[default]
    Text,
    /// One JSON object per input.
    Json,
}

/// Formats `stats` in the plain text layout.
///
/// ```text
/// Number of words: 5, unique: 5, average word length: 3.60 characters
/// Index (unknown: 2):
///     Mary*
///     a
/// ```
///
/// Index lines are prefixed by a tab. The `(unknown: N)` part appears only
/// when a dictionary was supplied.
pub fn text_report(stats: &WordCount<'_>, show_index: bool) -> String {
    let mut report = format!(
        "Number of words: {}, unique: {}, average word length: {:.2} characters\n",
        stats.count(),
        stats.distinct_count(),
        stats.average_length()
    );
    if show_index {
        match stats.unknown_count() {
            Some(unknown) => report.push_str(&format!("Index (unknown: {unknown}):\n")),
            None => report.push_str("Index:\n"),
        }
        for word in stats.marked_distinct() {
            report.push_str(&format!("\t{word}\n"));
        }
    }
    report
}

/// Formats `stats` as a single-line JSON object.
pub fn json_report(stats: &WordCount<'_>, show_index: bool) -> Result<String> {
    let mut report = serde_json::to_string(&stats.summary(show_index))?;
    report.push('\n');
    Ok(report)
}

/// Formats `stats` in `format`.
pub fn format_report(stats: &WordCount<'_>, show_index: bool, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(text_report(stats, show_index)),
        ReportFormat::Json => json_report(stats, show_index),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn set(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn test_text_report_without_dictionary() {
        let stop_words = set(&[]);
        let stats = WordCount::new("Mary had a little lamb", &stop_words, None);

        assert_eq!(
            text_report(&stats, true),
            "Number of words: 5, unique: 5, average word length: 3.60 characters\n\
             Index:\n\
             \tMary\n\ta\n\thad\n\tlamb\n\tlittle\n"
        );
    }

    #[test]
    fn test_text_report_with_dictionary() {
        let stop_words = set(&[]);
        let dictionary = set(&["had", "a", "little"]);
        let stats = WordCount::new("Mary had a little lamb", &stop_words, Some(&dictionary));

        assert_eq!(
            text_report(&stats, true),
            "Number of words: 5, unique: 5, average word length: 3.60 characters\n\
             Index (unknown: 2):\n\
             \tMary*\n\ta\n\thad\n\tlamb*\n\tlittle\n"
        );
    }

    #[test]
    fn test_text_report_without_index() {
        let stop_words = set(&[]);
        let stats = WordCount::new("Mary had a little lamb", &stop_words, None);

        insta::assert_snapshot!(
            text_report(&stats, false),
            @"Number of words: 5, unique: 5, average word length: 3.60 characters"
        );
    }

    #[test]
    fn test_no_words_prints_nan() {
        let stop_words = set(&[]);
        let stats = WordCount::new("", &stop_words, None);

        assert_eq!(
            text_report(&stats, true),
            "Number of words: 0, unique: 0, average word length: NaN characters\nIndex:\n"
        );
    }

    #[test]
    fn test_json_report() {
        let stop_words = set(&[]);
        let dictionary = set(&["had", "a", "little"]);
        let stats = WordCount::new("Mary had a little lamb", &stop_words, Some(&dictionary));

        insta::assert_snapshot!(
            json_report(&stats, true).unwrap(),
            @r#"{"words":5,"unique":5,"average_word_length":3.6,"unknown":2,"index":["Mary*","a","had","lamb*","little"]}"#
        );
    }

    #[test]
    fn test_json_report_without_index_or_words() {
        let stop_words = set(&[]);
        let stats = WordCount::new("1 2 3", &stop_words, None);

        insta::assert_snapshot!(
            json_report(&stats, false).unwrap(),
            @r#"{"words":0,"unique":0,"average_word_length":null}"#
        );
    }
}
