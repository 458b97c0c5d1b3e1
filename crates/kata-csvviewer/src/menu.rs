//! Navigation menu operations and input matching.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::render::Style;

static NEXT_PAGE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^n$").expect("Invalid next page regex"));
static PREVIOUS_PAGE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^p$").expect("Invalid previous page regex"));
static FIRST_PAGE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^f$").expect("Invalid first page regex"));
static LAST_PAGE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^l$").expect("Invalid last page regex"));
static JUMP_TO_PAGE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^j([0-9]+)$").expect("Invalid jump to page regex"));
static EXIT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^x$").expect("Invalid exit regex"));

/// Operations offered in the navigation menu.
///
/// The declaration order is the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MenuOperation {
    NextPage,
    PreviousPage,
    FirstPage,
    LastPage,
    JumpToPage,
    Exit,
}

impl MenuOperation {
    pub const ALL: [MenuOperation; 6] = [
        MenuOperation::NextPage,
        MenuOperation::PreviousPage,
        MenuOperation::FirstPage,
        MenuOperation::LastPage,
        MenuOperation::JumpToPage,
        MenuOperation::Exit,
    ];

    /// Menu label with the command key emphasized, e.g. `(n)ext page`.
    pub fn label(self, style: Style) -> String {
        let (prefix, key, suffix) = match self {
            MenuOperation::NextPage => ("(", "n", ")ext page"),
            MenuOperation::PreviousPage => ("(", "p", ")revious page"),
            MenuOperation::FirstPage => ("(", "f", ")irst page"),
            MenuOperation::LastPage => ("(", "l", ")ast page"),
            MenuOperation::JumpToPage => ("(", "j$", ")ump to page"),
            MenuOperation::Exit => ("e(", "x", ")it"),
        };
        format!("{prefix}{}{suffix}", style.bold(key))
    }

    /// Whole-line pattern that selects this operation.
    pub fn pattern(self) -> &'static Regex {
        match self {
            MenuOperation::NextPage => &*NEXT_PAGE_REGEX,
            MenuOperation::PreviousPage => &*PREVIOUS_PAGE_REGEX,
            MenuOperation::FirstPage => &*FIRST_PAGE_REGEX,
            MenuOperation::LastPage => &*LAST_PAGE_REGEX,
            MenuOperation::JumpToPage => &*JUMP_TO_PAGE_REGEX,
            MenuOperation::Exit => &*EXIT_REGEX,
        }
    }

    /// Matches `input` against this operation's pattern.
    pub fn capture(self, input: &str) -> Option<MenuCommand> {
        let captures = self.pattern().captures(input)?;
        let command = match self {
            MenuOperation::NextPage => MenuCommand::NextPage,
            MenuOperation::PreviousPage => MenuCommand::PreviousPage,
            MenuOperation::FirstPage => MenuCommand::FirstPage,
            MenuOperation::LastPage => MenuCommand::LastPage,
            // Targets too large for usize are beyond every last page.
            MenuOperation::JumpToPage => {
                MenuCommand::JumpToPage(captures[1].parse().unwrap_or(usize::MAX))
            }
            MenuOperation::Exit => MenuCommand::Exit,
        };
        Some(command)
    }
}

/// A menu operation selected by user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    NextPage,
    PreviousPage,
    FirstPage,
    LastPage,
    /// Requested 1-based target page.
    JumpToPage(usize),
    Exit,
}

impl MenuCommand {
    /// Matches one line of input against the `available` operations only.
    ///
    /// Returns `None` for input that no offered operation accepts, including
    /// commands that are valid but not offered on the current page.
    pub fn parse(input: &str, available: &BTreeSet<MenuOperation>) -> Option<Self> {
        available
            .iter()
            .find_map(|operation| operation.capture(input))
    }

    pub fn operation(self) -> MenuOperation {
        match self {
            MenuCommand::NextPage => MenuOperation::NextPage,
            MenuCommand::PreviousPage => MenuOperation::PreviousPage,
            MenuCommand::FirstPage => MenuOperation::FirstPage,
            MenuCommand::LastPage => MenuOperation::LastPage,
            MenuCommand::JumpToPage(_) => MenuOperation::JumpToPage,
            MenuCommand::Exit => MenuOperation::Exit,
        }
    }
}
