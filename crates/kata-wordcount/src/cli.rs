//! CLI argument definitions for the word counter.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use kata_common::CommonArgs;
use kata_wordcount::ReportFormat;

#[derive(Parser)]
#[command(
    name = "wordcount",
    version,
    about = "Count the words of a text and list its distinct words",
    long_about = "Count the words of a text and list its distinct words.\n\n\
                  Without SOURCE the text is read interactively, one line per\n\
                  report, until an empty line is entered."
)]
pub struct Cli {
    /// Source file to operate on.
    #[arg(value_name = "SOURCE")]
    pub source: Option<PathBuf>,

    /// Show index of unique words (default).
    #[arg(short = 'i', long = "index", overrides_with = "no_index")]
    pub index: bool,

    /// Hide the index of unique words.
    #[arg(long = "no-index", overrides_with = "index")]
    pub no_index: bool,

    /// File with set of words in the dictionary, one per line.
    #[arg(short = 'd', long = "dictionary", value_name = "PATH")]
    pub dictionary: Option<PathBuf>,

    /// File with set of stop words which are ignored by the word counter.
    #[arg(
        short = 's',
        long = "stopWords",
        visible_alias = "stop-words",
        value_name = "PATH"
    )]
    pub stop_words: Option<PathBuf>,

    /// Report format.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: FormatArg,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl Cli {
    /// Whether the index is printed; on unless `--no-index` came last.
    pub fn show_index(&self) -> bool {
        self.index || !self.no_index
    }
}

/// CLI report format choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for ReportFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Text => ReportFormat::Text,
            FormatArg::Json => ReportFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["wordcount"]).unwrap();
        assert_eq!(cli.source, None);
        assert!(cli.show_index());
        assert_eq!(cli.dictionary, None);
        assert_eq!(cli.stop_words, None);
        assert_eq!(cli.format, FormatArg::Text);
    }

    #[test]
    fn test_word_list_flags() {
        let cli = Cli::try_parse_from([
            "wordcount",
            "-d",
            "dict.txt",
            "--stopWords",
            "stop.txt",
            "mytext.txt",
        ])
        .unwrap();
        assert_eq!(cli.source, Some(PathBuf::from("mytext.txt")));
        assert_eq!(cli.dictionary, Some(PathBuf::from("dict.txt")));
        assert_eq!(cli.stop_words, Some(PathBuf::from("stop.txt")));

        let cli = Cli::try_parse_from(["wordcount", "--stop-words", "stop.txt"]).unwrap();
        assert_eq!(cli.stop_words, Some(PathBuf::from("stop.txt")));
    }

    #[test]
    fn test_index_flags_last_one_wins() {
        let cli = Cli::try_parse_from(["wordcount", "--no-index"]).unwrap();
        assert!(!cli.show_index());

        let cli = Cli::try_parse_from(["wordcount", "--no-index", "-i"]).unwrap();
        assert!(cli.show_index());

        let cli = Cli::try_parse_from(["wordcount", "-i", "--no-index"]).unwrap();
        assert!(!cli.show_index());
    }

    #[test]
    fn test_format_flag() {
        let cli = Cli::try_parse_from(["wordcount", "--format", "json"]).unwrap();
        assert_eq!(ReportFormat::from(cli.format), ReportFormat::Json);
        assert!(Cli::try_parse_from(["wordcount", "--format", "xml"]).is_err());
    }
}
