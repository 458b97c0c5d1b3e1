//! Word count CLI.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use kata_common::init_logging;
use kata_wordcount::{WordCounter, default_stop_words, read_source, read_word_list};

mod cli;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    cli.common.color.write_global();
    if let Err(error) = init_logging(&cli.common.log_config()) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<()> {
    let stop_words = match &cli.stop_words {
        Some(path) => read_word_list(path).context("load stop words")?,
        None => default_stop_words(),
    };
    let dictionary = cli
        .dictionary
        .as_deref()
        .map(read_word_list)
        .transpose()
        .context("load dictionary")?;
    let counter = WordCounter::new(stop_words)
        .with_dictionary(dictionary)
        .with_index(cli.show_index())
        .with_format(cli.format.into());

    match &cli.source {
        Some(path) => {
            let text = read_source(path).context("read source")?;
            counter
                .write_report(&text, io::stdout().lock())
                .context("write report")?;
        }
        None => counter
            .run_interactive(io::stdin().lock(), io::stdout().lock())
            .context("interactive session")?,
    }
    Ok(())
}
