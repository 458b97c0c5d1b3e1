//! Memoized word statistics.

use std::cell::OnceCell;
use std::collections::{BTreeSet, HashSet};

use serde::Serialize;
use tracing::debug;

use crate::tokenizer;

/// Suffix that marks a distinct word missing from the dictionary.
pub const UNKNOWN_MARKER: char = '*';

/// Statistics over the words of one input text.
///
/// Every value is computed on first access and cached for the lifetime of
/// the result.
#[derive(Debug)]
pub struct WordCount<'a> {
    text: &'a str,
    stop_words: &'a HashSet<String>,
    dictionary: Option<&'a HashSet<String>>,
    words: OnceCell<Vec<&'a str>>,
    distinct: OnceCell<BTreeSet<&'a str>>,
    index: OnceCell<MarkedIndex>,
    average_length: OnceCell<f64>,
}

#[derive(Debug)]
struct MarkedIndex {
    words: Vec<String>,
    unknown_count: usize,
}

impl<'a> WordCount<'a> {
    pub fn new(
        text: &'a str,
        stop_words: &'a HashSet<String>,
        dictionary: Option<&'a HashSet<String>>,
    ) -> Self {
        Self {
            text,
            stop_words,
            dictionary,
            words: OnceCell::new(),
            distinct: OnceCell::new(),
            index: OnceCell::new(),
            average_length: OnceCell::new(),
        }
    }

    /// Words left after stop-word filtering, in text order.
    pub fn words(&self) -> &[&'a str] {
        self.words.get_or_init(|| {
            let words = tokenizer::words(self.text, self.stop_words);
            debug!(words = words.len(), "text tokenized");
            words
        })
    }

    pub fn count(&self) -> usize {
        self.words().len()
    }

    /// Case-sensitive distinct words in lexicographic order.
    pub fn distinct(&self) -> &BTreeSet<&'a str> {
        self.distinct
            .get_or_init(|| self.words().iter().copied().collect())
    }

    pub fn distinct_count(&self) -> usize {
        self.distinct().len()
    }

    /// Mean word length in characters; `NaN` when there are no words.
    pub fn average_length(&self) -> f64 {
        *self.average_length.get_or_init(|| {
            let words = self.words();
            let total: usize = words.iter().map(|word| word.chars().count()).sum();
            total as f64 / words.len() as f64
        })
    }

    pub fn has_dictionary(&self) -> bool {
        self.dictionary.is_some()
    }

    /// Distinct words in order, with [`UNKNOWN_MARKER`] appended to those
    /// missing from the dictionary. Without a dictionary nothing is marked.
    pub fn marked_distinct(&self) -> &[String] {
        &self.marked_index().words
    }

    /// Number of marked words; `None` without a dictionary.
    pub fn unknown_count(&self) -> Option<usize> {
        self.dictionary
            .map(|_| self.marked_index().unknown_count)
    }

    /// Snapshot of all statistics for reporting. The marked index is
    /// included only when `show_index` is set.
    pub fn summary(&self, show_index: bool) -> WordCountSummary {
        WordCountSummary {
            words: self.count(),
            unique: self.distinct_count(),
            average_word_length: self.average_length(),
            unknown: self.unknown_count(),
            index: show_index.then(|| self.marked_distinct().to_vec()),
        }
    }

    fn marked_index(&self) -> &MarkedIndex {
        self.index.get_or_init(|| {
            let mut unknown_count = 0;
            let words = self
                .distinct()
                .iter()
                .map(|word| match self.dictionary {
                    Some(dictionary) if !dictionary.contains(*word) => {
                        unknown_count += 1;
                        format!("{word}{UNKNOWN_MARKER}")
                    }
                    _ => (*word).to_string(),
                })
                .collect();
            MarkedIndex {
                words,
                unknown_count,
            }
        })
    }
}

/// Owned statistics of one text, as printed or serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordCountSummary {
    pub words: usize,
    pub unique: usize,
    /// Serialized as `null` when there are no words.
    pub average_word_length: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unknown: Option<usize>,
    /// Marked distinct words; `None` when the index is not shown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<Vec<String>>,
}
