//! Configured word counter and the interactive session.

use std::collections::HashSet;
use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

use tracing::{debug, info, info_span};

use crate::error::{Result, WordCountError};
use crate::report::{ReportFormat, format_report};
use crate::stats::WordCount;
use crate::wordlist::default_stop_words;

/// Prompt shown before each interactive input line.
pub const PROMPT: &str = "Enter text: ";

/// Word lists and output options applied to every counted text.
#[derive(Debug, Clone)]
pub struct WordCounter {
    stop_words: HashSet<String>,
    dictionary: Option<HashSet<String>>,
    show_index: bool,
    format: ReportFormat,
}

impl Default for WordCounter {
    fn default() -> Self {
        Self::new(default_stop_words())
    }
}

impl WordCounter {
    /// Counter with the given stop words, no dictionary, and the index
    /// shown as text.
    pub fn new(stop_words: HashSet<String>) -> Self {
        Self {
            stop_words,
            dictionary: None,
            show_index: true,
            format: ReportFormat::Text,
        }
    }

    pub fn with_dictionary(mut self, dictionary: Option<HashSet<String>>) -> Self {
        self.dictionary = dictionary;
        self
    }

    pub fn with_index(mut self, show_index: bool) -> Self {
        self.show_index = show_index;
        self
    }

    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    pub fn stop_words(&self) -> &HashSet<String> {
        &self.stop_words
    }

    pub fn dictionary(&self) -> Option<&HashSet<String>> {
        self.dictionary.as_ref()
    }

    pub fn shows_index(&self) -> bool {
        self.show_index
    }

    pub fn format(&self) -> ReportFormat {
        self.format
    }

    /// Statistics of `text` under this counter's word lists.
    pub fn count<'a>(&'a self, text: &'a str) -> WordCount<'a> {
        WordCount::new(text, &self.stop_words, self.dictionary.as_ref())
    }

    /// Formatted report for `text`.
    pub fn report(&self, text: &str) -> Result<String> {
        let stats = self.count(text);
        let report = format_report(&stats, self.show_index, self.format)?;
        info!(
            words = stats.count(),
            unique = stats.distinct_count(),
            unknown = ?stats.unknown_count(),
            "statistics computed"
        );
        Ok(report)
    }

    /// Writes the report for `text` to `output`.
    pub fn write_report<W: Write>(&self, text: &str, mut output: W) -> Result<()> {
        let report = self.report(text)?;
        output
            .write_all(report.as_bytes())
            .and_then(|()| output.flush())
            .map_err(|source| WordCountError::Output { source })
    }

    /// Prompts for text until an empty line or end of input, writing one
    /// report per line followed by a blank line.
    pub fn run_interactive<R, W>(&self, mut input: R, mut output: W) -> Result<()>
    where
        R: BufRead,
        W: Write,
    {
        let span = info_span!("interactive");
        let _guard = span.enter();

        let mut buffer = Vec::new();
        loop {
            output
                .write_all(PROMPT.as_bytes())
                .and_then(|()| output.flush())
                .map_err(|source| WordCountError::Output { source })?;

            buffer.clear();
            let bytes_read = input
                .read_until(b'\n', &mut buffer)
                .map_err(|source| WordCountError::Input { source })?;
            if bytes_read == 0 {
                debug!("end of input");
                break;
            }
            let line = String::from_utf8_lossy(&buffer);
            let text = line.trim_end_matches(['\n', '\r']);
            if text.is_empty() {
                break;
            }

            self.write_report(text, &mut output)?;
            writeln!(output).map_err(|source| WordCountError::Output { source })?;
        }
        Ok(())
    }
}

/// Reads the text to count from `path`, replacing invalid UTF-8.
pub fn read_source(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| WordCountError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = bytes.len(), "source read");
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
