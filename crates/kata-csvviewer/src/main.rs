//! CSV viewer CLI.

use std::io;
use std::num::NonZeroUsize;

use anyhow::{Context, Result};
use clap::Parser;
use kata_common::init_logging;
use kata_csvviewer::{CsvSource, Style, TableRenderer, Viewer};

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
    let source = CsvSource::open(&cli.source, cli.delimiter, cli.add_record_number)
        .with_context(|| format!("open {}", cli.source.display()))?;
    let lines_per_page = NonZeroUsize::new(cli.lines_per_page as usize)
        .context("lines per page must be at least 1")?;
    let style = if cli.common.styled_stdout() {
        Style::Bold
    } else {
        Style::Plain
    };
    let viewer = Viewer::new(
        &source,
        lines_per_page,
        TableRenderer::new(cli.border_width, style),
    );
    viewer
        .run(cli.start_page as usize, io::stdin().lock(), io::stdout().lock())
        .context("navigate pages")?;
    Ok(())
}
