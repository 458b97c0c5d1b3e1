//! ASCII table rendering for pages and the navigation menu.

use std::collections::BTreeSet;

use crate::menu::MenuOperation;
use crate::page::{Page, display_len};

/// Escape sequence that switches the terminal to bold.
pub const BOLD_START: &str = "\u{1b}[1m";
/// Escape sequence that resets all terminal attributes.
pub const BOLD_END: &str = "\u{1b}[0m";

/// Whether emphasized text carries bold escape sequences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Style {
    /// No escape sequences; used for pipes, files and tests.
    #[default]
    Plain,
    Bold,
}

impl Style {
    /// Wraps `text` in bold escapes when the style is [`Style::Bold`].
    pub fn bold(self, text: &str) -> String {
        match self {
            Style::Plain => text.to_string(),
            Style::Bold => format!("{BOLD_START}{text}{BOLD_END}"),
        }
    }
}

/// Horizontal alignment of a cell within its column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
    /// Odd padding puts the extra space on the right.
    Center,
}

/// Formats pages as bordered text tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableRenderer {
    border_width: usize,
    style: Style,
}

impl Default for TableRenderer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BORDER_WIDTH, Style::default())
    }
}

impl TableRenderer {
    pub const DEFAULT_BORDER_WIDTH: usize = 1;

    pub fn new(border_width: usize, style: Style) -> Self {
        Self {
            border_width,
            style,
        }
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn border_width(&self) -> usize {
        self.border_width
    }

    /// Surrounds `cell` with the border and pads it to the full column
    /// width, `width + 2 * border_width`.
    pub fn format_cell(&self, cell: &str, width: usize, align: Align) -> String {
        let border = " ".repeat(self.border_width);
        let bordered = format!("{border}{cell}{border}");
        let padding = (width + 2 * self.border_width).saturating_sub(display_len(&bordered));
        match align {
            Align::Left => format!("{bordered}{}", " ".repeat(padding)),
            Align::Right => format!("{}{bordered}", " ".repeat(padding)),
            Align::Center => {
                let left = padding / 2;
                let right = padding - left;
                format!("{}{bordered}{}", " ".repeat(left), " ".repeat(right))
            }
        }
    }

    /// `Page N of T in name`, with the page number emphasized.
    pub fn title_line(&self, page_number: usize, page_count: usize, name: &str) -> String {
        format!(
            "Page {} of {page_count} in {name}",
            self.style.bold(&page_number.to_string())
        )
    }

    /// Header cells, centered and emphasized, joined by `|`.
    pub fn header_line(&self, page: &Page) -> String {
        page.header()
            .iter()
            .enumerate()
            .map(|(column, cell)| {
                self.style
                    .bold(&self.format_cell(cell, page.column_width(column), Align::Center))
            })
            .collect::<Vec<_>>()
            .join("|")
    }

    /// Dashes under every column joined by `+`.
    pub fn separator_line(&self, page: &Page) -> String {
        page.column_widths()
            .iter()
            .map(|width| "-".repeat(width + 2 * self.border_width))
            .collect::<Vec<_>>()
            .join("+")
    }

    /// Body rows, left aligned, one line per row.
    pub fn body(&self, page: &Page) -> String {
        page.rows()
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(column, cell)| {
                        self.format_cell(cell, page.column_width(column), Align::Left)
                    })
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Labels of `operations` in enumeration order, joined by `, `.
    pub fn menu_line(&self, operations: &BTreeSet<MenuOperation>) -> String {
        operations
            .iter()
            .map(|operation| operation.label(self.style))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// One full screen: title, blank line, table, blank line, menu.
    pub fn screen(
        &self,
        page: &Page,
        page_count: usize,
        name: &str,
        operations: &BTreeSet<MenuOperation>,
    ) -> String {
        format!(
            "{}\n\n{}\n{}\n{}\n\n{}\n",
            self.title_line(page.number(), page_count, name),
            self.header_line(page),
            self.separator_line(page),
            self.body(page),
            self.menu_line(operations),
        )
    }
}
