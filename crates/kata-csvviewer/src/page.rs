//! One decoded page of a source file.

/// Header plus the body rows of a single page, with per-column widths.
///
/// Widths are measured over this page only, so the same column can render
/// at different widths on different pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    number: usize,
    header: Vec<String>,
    rows: Vec<Vec<String>>,
    column_widths: Vec<usize>,
}

impl Page {
    /// Builds a page; every row is expected to have `header.len()` cells.
    pub fn new(number: usize, header: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let column_widths = (0..header.len())
            .map(|column| {
                rows.iter()
                    .filter_map(|row| row.get(column))
                    .map(String::as_str)
                    .map(display_len)
                    .chain(std::iter::once(display_len(&header[column])))
                    .max()
                    .unwrap_or(0)
            })
            .collect();
        Self {
            number,
            header,
            rows,
            column_widths,
        }
    }

    /// 1-based page number.
    pub fn number(&self) -> usize {
        self.number
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// Width of `column`: the longest of its header cell and its cells on
    /// this page.
    pub fn column_width(&self, column: usize) -> usize {
        self.column_widths.get(column).copied().unwrap_or(0)
    }

    pub fn column_widths(&self) -> &[usize] {
        &self.column_widths
    }
}

/// Length of a cell as it occupies the terminal, in characters.
pub fn display_len(cell: &str) -> usize {
    cell.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_column_width_covers_header_and_cells() {
        let page = Page::new(
            1,
            strings(&["Name", "Age", "City"]),
            vec![
                strings(&["Peter", "42", "New York"]),
                strings(&["Paul", "57", "London"]),
            ],
        );

        assert_eq!(page.column_widths(), [5, 3, 8]);
        assert_eq!(page.column_width(1), 3);
        assert_eq!(page.column_width(9), 0);
    }

    #[test]
    fn test_column_width_without_rows_is_header_width() {
        let page = Page::new(1, strings(&["Name", ""]), Vec::new());
        assert_eq!(page.column_widths(), [4, 0]);
        assert_eq!(page.row_count(), 0);
    }

    #[test]
    fn test_column_width_counts_characters() {
        let page = Page::new(1, strings(&["Ort"]), vec![strings(&["Zürich"])]);
        assert_eq!(page.column_width(0), 6);
    }

    #[test]
    fn test_widths_are_per_page() {
        // Same column, different content on two pages: each page measures
        // only its own rows.
        let header = strings(&["Id", "Name"]);
        let first = Page::new(1, header.clone(), vec![strings(&["1", "Al"])]);
        let second = Page::new(2, header, vec![strings(&["2", "Bartholomew"])]);

        assert_eq!(first.column_width(1), 4);
        assert_eq!(second.column_width(1), 11);
    }

    #[test]
    fn test_row_access() {
        let page = Page::new(3, strings(&["A"]), vec![strings(&["x"]), strings(&["y"])]);
        assert_eq!(page.number(), 3);
        assert_eq!(page.column_count(), 1);
        assert_eq!(page.row(1), Some(&strings(&["y"])[..]));
        assert_eq!(page.row(2), None);
    }
}
