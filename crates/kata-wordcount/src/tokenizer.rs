//! Word extraction.
//!
//! A word is a maximal run of ASCII letters and hyphens. Digits,
//! whitespace and every other punctuation character separate words. Case
//! is preserved.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

static WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z-]+").expect("Invalid word regex"));

/// Lazily yields the words of `text` in order.
///
/// Calling it again on the same text restarts the sequence.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    WORD_REGEX.find_iter(text).map(|m| m.as_str())
}

/// Drops tokens contained in `stop_words` (exact, case-sensitive match),
/// keeping the order of the rest.
pub fn filter_stop_words<'t, I>(
    tokens: I,
    stop_words: &HashSet<String>,
) -> impl Iterator<Item = &'t str>
where
    I: IntoIterator<Item = &'t str>,
{
    tokens
        .into_iter()
        .filter(move |token| !stop_words.contains(*token))
}

/// Tokenizes `text` and removes stop words.
pub fn words<'t>(text: &'t str, stop_words: &HashSet<String>) -> Vec<&'t str> {
    filter_stop_words(tokenize(text), stop_words).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn test_word_counts() {
        let cases = [
            ("", 0),
            (" ", 0),
            ("HelloWorld", 1),
            ("Hello World", 2),
            ("Hello-World", 1),
            ("Mary had a little lamb", 5),
        ];
        for (text, expected) in cases {
            assert_eq!(tokenize(text).count(), expected, "text: {text:?}");
        }
    }

    #[test]
    fn test_separators() {
        let tokens: Vec<&str> = tokenize("it's 2024, e-mail:fine.Done").collect();
        assert_eq!(tokens, ["it", "s", "e-mail", "fine", "Done"]);
    }

    #[test]
    fn test_non_ascii_letters_separate() {
        let tokens: Vec<&str> = tokenize("Grüße").collect();
        assert_eq!(tokens, ["Gr", "e"]);
    }

    #[test]
    fn test_tokenize_is_restartable() {
        let text = "one two";
        assert_eq!(tokenize(text).collect::<Vec<_>>(), tokenize(text).collect::<Vec<_>>());
    }

    #[test]
    fn test_stop_words() {
        let cases = [
            ("", stop(&[]), 0),
            ("", stop(&["had", "a"]), 0),
            ("Mary had a little lamb", stop(&["had", "a"]), 3),
            ("Mary had a little lamb", stop(&[]), 5),
        ];
        for (text, stop_words, expected) in cases {
            assert_eq!(words(text, &stop_words).len(), expected, "text: {text:?}");
        }
    }

    #[test]
    fn test_stop_words_are_case_sensitive_and_keep_order() {
        let filtered = words("The cat and the hat", &stop(&["the"]));
        assert_eq!(filtered, ["The", "cat", "and", "hat"]);
    }
}
