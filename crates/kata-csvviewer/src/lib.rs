//! Paged viewer for delimiter-separated files.
//!
//! The engine is split into three layers:
//!
//! - **Source**: [`CsvSource`] indexes a file once and decodes single pages
//!   on demand
//! - **Page**: [`Page`] is an immutable header + rows snapshot with
//!   per-page column widths
//! - **Rendering and navigation**: [`TableRenderer`] formats a page as an
//!   ASCII table, [`Viewer`] runs the interactive menu loop
//!
//! # Example
//!
//! ```ignore
//! use std::io;
//! use kata_csvviewer::{CsvSource, DEFAULT_LINES_PER_PAGE, TableRenderer, Viewer};
//!
//! let source = CsvSource::open("people.csv", ';', true)?;
//! let viewer = Viewer::new(&source, DEFAULT_LINES_PER_PAGE, TableRenderer::default());
//! viewer.run(1, io::stdin().lock(), io::stdout().lock())?;
//! ```

mod error;
mod menu;
mod page;
mod render;
mod source;
mod viewer;

// === Error Types ===
pub use error::{Result, ViewerError};

// === Source and Pages ===
pub use page::{Page, display_len};
pub use source::{CsvSource, DEFAULT_DELIMITER, RECORD_NUMBER_LABEL, split_fields};

// === Rendering ===
pub use render::{Align, BOLD_END, BOLD_START, Style, TableRenderer};

// === Navigation ===
pub use menu::{MenuCommand, MenuOperation};
pub use viewer::{DEFAULT_LINES_PER_PAGE, Position, Viewer};
