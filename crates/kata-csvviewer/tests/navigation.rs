//! End-to-end tests for the navigation loop.

use std::fs;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use kata_csvviewer::{CsvSource, Style, TableRenderer, Viewer, ViewerError};
use tempfile::TempDir;

fn write_source(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    (dir, path)
}

fn per_page(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

fn run_viewer(source: &CsvSource, lines_per_page: usize, start: usize, input: &str) -> (String, Result<(), ViewerError>) {
    let viewer = Viewer::new(source, per_page(lines_per_page), TableRenderer::default());
    let mut output = Vec::new();
    let result = viewer.run(start, input.as_bytes(), &mut output);
    (String::from_utf8(output).unwrap(), result)
}

fn titles(output: &str) -> Vec<&str> {
    output.lines().filter(|line| line.starts_with("Page ")).collect()
}

#[test]
fn test_single_page_screen() {
    let (_dir, path) = write_source("people.csv", "Name;Age\nPeter;42\n");
    let source = CsvSource::open(&path, ';', false).unwrap();

    let (output, result) = run_viewer(&source, 10, 1, "x\n");

    result.unwrap();
    assert_eq!(
        output,
        "Page 1 of 1 in people.csv\n\
         \n\
         \x20Name  | Age \n\
         -------+-----\n\
         \x20Peter | 42  \n\
         \n\
         (j$)ump to page, e(x)it\n\
         \n"
    );
}

#[test]
fn test_record_number_column() {
    let (_dir, path) = write_source("people.csv", "Name;Age\nPeter;42\n");
    let source = CsvSource::open(&path, ';', true).unwrap();

    let (output, result) = run_viewer(&source, 10, 1, "x\n");

    result.unwrap();
    assert!(output.contains(" No. | Name  | Age \n"));
    assert!(output.contains(" 1.  | Peter | 42  \n"));
}

#[test]
fn test_empty_body_renders_single_page() {
    let (_dir, path) = write_source("empty.csv", "A;B\n");
    let source = CsvSource::open(&path, ';', false).unwrap();

    let (output, result) = run_viewer(&source, 10, 1, "x\n");

    result.unwrap();
    assert_eq!(
        output,
        "Page 1 of 1 in empty.csv\n\n A | B \n---+---\n\n\n(j$)ump to page, e(x)it\n\n"
    );
}

#[test]
fn test_navigation_sequence() {
    let (_dir, path) = write_source("rows.csv", "Id;Value\n1;a\n2;b\n3;c\n4;d\n5;e\n");
    let source = CsvSource::open(&path, ';', false).unwrap();

    // "p" is not offered on page 1 and "n" is not offered on page 3, so both
    // are skipped without a new screen. "j9" is offered but out of range, so
    // page 3 renders again.
    let (output, result) = run_viewer(&source, 2, 1, "p\nn\nl\nn\nj9\nf\nx\n");

    result.unwrap();
    assert_eq!(
        titles(&output),
        [
            "Page 1 of 3 in rows.csv",
            "Page 2 of 3 in rows.csv",
            "Page 3 of 3 in rows.csv",
            "Page 3 of 3 in rows.csv",
            "Page 1 of 3 in rows.csv",
        ]
    );
}

#[test]
fn test_menu_follows_position() {
    let (_dir, path) = write_source("rows.csv", "Id\n1\n2\n3\n");
    let source = CsvSource::open(&path, ';', false).unwrap();

    let (output, result) = run_viewer(&source, 1, 1, "n\nl\nx\n");

    result.unwrap();
    let menus: Vec<&str> = output
        .lines()
        .filter(|line| line.ends_with("e(x)it"))
        .collect();
    assert_eq!(
        menus,
        [
            "(n)ext page, (l)ast page, (j$)ump to page, e(x)it",
            "(n)ext page, (p)revious page, (f)irst page, (l)ast page, (j$)ump to page, e(x)it",
            "(p)revious page, (f)irst page, (j$)ump to page, e(x)it",
        ]
    );
}

#[test]
fn test_jump_and_start_page() {
    let (_dir, path) = write_source("rows.csv", "Id\n1\n2\n3\n4\n");
    let source = CsvSource::open(&path, ';', false).unwrap();

    let (output, result) = run_viewer(&source, 1, 2, "j4\nj0\nx\n");

    result.unwrap();
    assert_eq!(
        titles(&output),
        [
            "Page 2 of 4 in rows.csv",
            "Page 4 of 4 in rows.csv",
            "Page 4 of 4 in rows.csv",
        ]
    );
}

#[test]
fn test_widths_change_between_pages() {
    let (_dir, path) = write_source("names.csv", "Name\nAl\nBartholomew\n");
    let source = CsvSource::open(&path, ';', false).unwrap();

    let (output, result) = run_viewer(&source, 1, 1, "n\nx\n");

    result.unwrap();
    let separators: Vec<&str> = output
        .lines()
        .filter(|line| line.starts_with('-'))
        .collect();
    assert_eq!(separators, ["------", "-------------"]);
}

#[test]
fn test_end_of_input_is_fatal() {
    let (_dir, path) = write_source("rows.csv", "Id\n1\n");
    let source = CsvSource::open(&path, ';', false).unwrap();

    let (output, result) = run_viewer(&source, 10, 1, "n\n");

    assert!(matches!(result, Err(ViewerError::InputClosed)));
    assert_eq!(titles(&output), ["Page 1 of 1 in rows.csv"]);
}

#[test]
fn test_start_page_out_of_range() {
    let (_dir, path) = write_source("rows.csv", "Id\n1\n");
    let source = CsvSource::open(&path, ';', false).unwrap();

    let (_output, result) = run_viewer(&source, 10, 5, "x\n");

    assert!(matches!(
        result,
        Err(ViewerError::PageOutOfRange {
            page: 5,
            page_count: 1
        })
    ));
}

#[test]
fn test_bold_style_marks_title_and_menu() {
    let (_dir, path) = write_source("rows.csv", "Id\n1\n");
    let source = CsvSource::open(&path, ';', false).unwrap();
    let viewer = Viewer::new(&source, per_page(10), TableRenderer::new(1, Style::Bold));
    let mut output = Vec::new();

    viewer.run(1, "x\n".as_bytes(), &mut output).unwrap();

    let output = String::from_utf8(output).unwrap();
    assert!(output.starts_with("Page \u{1b}[1m1\u{1b}[0m of 1 in rows.csv\n"));
    assert!(output.contains("e(\u{1b}[1mx\u{1b}[0m)it"));
}
