//! Interactive page navigation.

use std::collections::BTreeSet;
use std::io::{BufRead, Write};
use std::num::NonZeroUsize;

use tracing::{debug, info_span};

use crate::error::{Result, ViewerError};
use crate::menu::{MenuCommand, MenuOperation};
use crate::render::TableRenderer;
use crate::source::CsvSource;

/// Default number of data lines shown per page.
pub const DEFAULT_LINES_PER_PAGE: NonZeroUsize = NonZeroUsize::new(10).unwrap();

/// Where the navigation loop goes next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// Render this 1-based page.
    Page(usize),
    /// Leave the loop.
    Exit,
}

/// Drives the render/read/transition loop over a [`CsvSource`].
#[derive(Debug, Clone, Copy)]
pub struct Viewer<'a> {
    source: &'a CsvSource,
    lines_per_page: NonZeroUsize,
    renderer: TableRenderer,
}

impl<'a> Viewer<'a> {
    pub fn new(source: &'a CsvSource, lines_per_page: NonZeroUsize, renderer: TableRenderer) -> Self {
        Self {
            source,
            lines_per_page,
            renderer,
        }
    }

    pub fn page_count(&self) -> usize {
        self.source.page_count(self.lines_per_page)
    }

    /// Operations offered on `page_number`.
    ///
    /// Jump and exit are always offered; next/last only before the last
    /// page and previous/first only after the first.
    pub fn available_operations(&self, page_number: usize) -> BTreeSet<MenuOperation> {
        let mut operations = BTreeSet::from([MenuOperation::JumpToPage, MenuOperation::Exit]);
        if page_number < self.page_count() {
            operations.insert(MenuOperation::NextPage);
            operations.insert(MenuOperation::LastPage);
        }
        if page_number > 1 {
            operations.insert(MenuOperation::PreviousPage);
            operations.insert(MenuOperation::FirstPage);
        }
        operations
    }

    /// Position after applying `command` on `current`.
    ///
    /// A jump target outside `1..=page_count` keeps the current page; it is
    /// neither clamped nor an error.
    pub fn transition(&self, current: usize, command: MenuCommand) -> Position {
        match command {
            MenuCommand::FirstPage => Position::Page(1),
            MenuCommand::LastPage => Position::Page(self.page_count()),
            MenuCommand::NextPage => Position::Page(current + 1),
            MenuCommand::PreviousPage => Position::Page(current - 1),
            MenuCommand::JumpToPage(target) if (1..=self.page_count()).contains(&target) => {
                Position::Page(target)
            }
            MenuCommand::JumpToPage(_) => Position::Page(current),
            MenuCommand::Exit => Position::Exit,
        }
    }

    /// Runs the navigation loop starting at `start_page` until exit is
    /// selected.
    ///
    /// Input lines that no offered operation accepts are skipped without
    /// re-rendering. End of input before exit is [`ViewerError::InputClosed`].
    pub fn run<R, W>(&self, start_page: usize, mut input: R, mut output: W) -> Result<()>
    where
        R: BufRead,
        W: Write,
    {
        let span = info_span!("navigate", source = %self.source.name());
        let _guard = span.enter();

        let mut position = Position::Page(start_page);
        while let Position::Page(current) = position {
            let page = self.source.page(current, self.lines_per_page)?;
            let available = self.available_operations(current);
            let screen =
                self.renderer
                    .screen(&page, self.page_count(), self.source.name(), &available);
            output
                .write_all(screen.as_bytes())
                .and_then(|()| output.flush())
                .map_err(|source| ViewerError::Output { source })?;

            let command = read_command(&mut input, &available)?;
            position = self.transition(current, command);
            debug!(from = current, ?command, to = ?position, "navigated");

            writeln!(output).map_err(|source| ViewerError::Output { source })?;
        }
        Ok(())
    }
}

/// Reads lines until one matches an available operation.
fn read_command<R: BufRead>(input: &mut R, available: &BTreeSet<MenuOperation>) -> Result<MenuCommand> {
    let mut buffer = Vec::new();
    loop {
        buffer.clear();
        let bytes_read = input
            .read_until(b'\n', &mut buffer)
            .map_err(|source| ViewerError::Input { source })?;
        if bytes_read == 0 {
            return Err(ViewerError::InputClosed);
        }
        let line = String::from_utf8_lossy(&buffer);
        let entered = line.trim_end_matches(['\n', '\r']);
        if let Some(command) = MenuCommand::parse(entered, available) {
            return Ok(command);
        }
        debug!(input = entered, "ignored input");
    }
}
