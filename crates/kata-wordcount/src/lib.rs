//! Word statistics for plain text.
//!
//! [`WordCount`] tokenizes a text once, drops stop words, and memoizes the
//! derived values: word count, sorted distinct words, average word length,
//! and the distinct words marked against an optional dictionary.
//! [`WordCounter`] bundles the word lists with the output options and runs
//! the interactive prompt loop.
//!
//! # Example
//!
//! ```ignore
//! use kata_wordcount::{WordCounter, read_word_list};
//!
//! let counter = WordCounter::default()
//!     .with_dictionary(Some(read_word_list("words.txt".as_ref())?));
//! print!("{}", counter.report("Mary had a little lamb")?);
//! ```

mod counter;
mod error;
mod report;
mod stats;
mod tokenizer;
mod wordlist;

// === Error Types ===
pub use error::{Result, WordCountError};

// === Tokenizing and Statistics ===
pub use stats::{UNKNOWN_MARKER, WordCount, WordCountSummary};
pub use tokenizer::{filter_stop_words, tokenize, words};

// === Word Lists ===
pub use wordlist::{default_stop_words, parse_word_list, read_word_list};

// === Reporting ===
pub use counter::{PROMPT, WordCounter, read_source};
pub use report::{ReportFormat, format_report, json_report, text_report};
