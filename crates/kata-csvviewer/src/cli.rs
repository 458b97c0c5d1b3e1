//! CLI argument definitions for the CSV viewer.

use std::path::PathBuf;

use clap::Parser;
use kata_common::CommonArgs;

#[derive(Parser)]
#[command(
    name = "csvviewer",
    version,
    about = "Page through a delimiter-separated file as an ASCII table",
    long_about = "Page through a delimiter-separated file as an ASCII table.\n\n\
                  Navigate with n (next), p (previous), f (first), l (last),\n\
                  j<page> (jump to page) and x (exit)."
)]
pub struct Cli {
    /// Source file to operate on.
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Lines to be displayed per page.
    #[arg(
        value_name = "LINES_PER_PAGE",
        default_value_t = 10,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub lines_per_page: u32,

    /// Add record number to each line.
    #[arg(short = 'n', long = "addRecordNumber", visible_alias = "add-record-number")]
    pub add_record_number: bool,

    /// Field delimiter; quotes are not interpreted.
    #[arg(short = 'D', long = "delimiter", default_value_t = kata_csvviewer::DEFAULT_DELIMITER)]
    pub delimiter: char,

    /// Page shown first.
    #[arg(
        long = "start-page",
        value_name = "PAGE",
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub start_page: u32,

    /// Spaces on each side of a cell.
    #[arg(long = "border-width", value_name = "WIDTH", default_value_t = 1)]
    pub border_width: usize,

    #[command(flatten)]
    pub common: CommonArgs,
}
