//! Delimiter-separated source files.
//!
//! A [`CsvSource`] scans its file once when opened and records the byte
//! offset at which every line starts. Each page request then reopens the
//! file, seeks to the first line of the page and decodes only the lines
//! that page needs, so memory stays bounded by the page size.
//!
//! Fields are split on the delimiter only. Quotes carry no meaning, so a
//! delimiter inside a field always starts a new field.

use std::fs::File;
use std::io::{self, BufReader, Read, Seek, SeekFrom};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use memchr::memchr_iter;
use tracing::{debug, info};

use crate::error::{Result, ViewerError};
use crate::page::Page;

/// Header label of the synthetic record-number column.
pub const RECORD_NUMBER_LABEL: &str = "No.";

/// Delimiter used when none is configured.
pub const DEFAULT_DELIMITER: char = ';';

const SCAN_BUFFER_SIZE: usize = 64 * 1024; // 64KB buffer size

/// A delimiter-separated file whose first line is the header.
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
    name: String,
    delimiter: char,
    add_record_number: bool,
    header: Vec<String>,
    /// Byte offset of the first byte of every line. Line 0 is the header.
    line_starts: Vec<u64>,
    byte_len: u64,
}

impl CsvSource {
    /// Opens `path`, indexes its lines and parses the header row.
    ///
    /// With `add_record_number` the header gains a leading
    /// [`RECORD_NUMBER_LABEL`] column and every body row a matching
    /// `"<line>."` cell.
    pub fn open(path: impl AsRef<Path>, delimiter: char, add_record_number: bool) -> Result<Self> {
        let path = path.as_ref();
        let mut file = File::open(path).map_err(|source| file_read(path, source))?;
        let (line_starts, byte_len) =
            index_lines(&mut file).map_err(|source| file_read(path, source))?;
        if line_starts.is_empty() {
            return Err(ViewerError::EmptySource {
                path: path.to_path_buf(),
            });
        }

        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        let mut source = Self {
            path: path.to_path_buf(),
            name,
            delimiter,
            add_record_number,
            header: Vec::new(),
            line_starts,
            byte_len,
        };

        let header_line = source.read_lines(0, 1)?.pop().unwrap_or_default();
        let header_line = header_line.strip_prefix('\u{feff}').unwrap_or(&header_line);
        let label = add_record_number.then(|| RECORD_NUMBER_LABEL.to_string());
        source.header = split_fields(header_line, delimiter, label);

        info!(
            path = %path.display(),
            lines = source.line_count(),
            columns = source.column_count(),
            "source opened"
        );
        Ok(source)
    }

    /// File name shown in the title line.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    pub fn adds_record_number(&self) -> bool {
        self.add_record_number
    }

    /// Header cells, including the record-number label when enabled.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// Number of lines in the file, header included.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Number of data lines after the header.
    pub fn body_line_count(&self) -> usize {
        self.line_count() - 1
    }

    /// Number of pages for the given page size; at least 1 even for an
    /// empty body.
    pub fn page_count(&self, lines_per_page: NonZeroUsize) -> usize {
        self.body_line_count().div_ceil(lines_per_page.get()).max(1)
    }

    /// Decodes the 1-based page `page_number`.
    ///
    /// Reads exactly `lines_per_page` data lines (fewer on the last page)
    /// starting at data line `(page_number - 1) * lines_per_page + 1`.
    pub fn page(&self, page_number: usize, lines_per_page: NonZeroUsize) -> Result<Page> {
        let page_count = self.page_count(lines_per_page);
        if page_number == 0 || page_number > page_count {
            return Err(ViewerError::PageOutOfRange {
                page: page_number,
                page_count,
            });
        }

        let offset = (page_number - 1) * lines_per_page.get() + 1;
        let rows: Vec<Vec<String>> = self
            .read_lines(offset, lines_per_page.get())?
            .iter()
            .enumerate()
            .map(|(index, line)| {
                let label = self.add_record_number.then(|| format!("{}.", offset + index));
                let mut row = split_fields(line, self.delimiter, label);
                // Short rows are padded and long rows cut to the header width.
                row.resize(self.column_count(), String::new());
                row
            })
            .collect();

        debug!(page = page_number, offset, rows = rows.len(), "page decoded");
        Ok(Page::new(page_number, self.header.clone(), rows))
    }

    /// Reads up to `count` lines starting at line `first`.
    fn read_lines(&self, first: usize, count: usize) -> Result<Vec<String>> {
        let line_count = self.line_count();
        if first >= line_count || count == 0 {
            return Ok(Vec::new());
        }

        let end_line = first.saturating_add(count).min(line_count);
        let start_pos = self.line_starts[first];
        let end_pos = self
            .line_starts
            .get(end_line)
            .copied()
            .unwrap_or(self.byte_len);

        let file = File::open(&self.path).map_err(|source| file_read(&self.path, source))?;
        let mut reader = BufReader::new(file);
        reader
            .seek(SeekFrom::Start(start_pos))
            .map_err(|source| file_read(&self.path, source))?;

        let mut buffer = Vec::with_capacity(usize::try_from(end_pos - start_pos).unwrap_or(0));
        reader
            .take(end_pos - start_pos)
            .read_to_end(&mut buffer)
            .map_err(|source| file_read(&self.path, source))?;

        // Invalid UTF-8 sequences are replaced rather than rejected.
        // `lines` leaves a bare `\r` on an unterminated last line.
        Ok(String::from_utf8_lossy(&buffer)
            .lines()
            .map(|line| line.trim_end_matches('\r').to_owned())
            .collect())
    }
}

/// Splits a line on `delimiter`, optionally prefixed by a record-number cell.
pub fn split_fields(line: &str, delimiter: char, leading: Option<String>) -> Vec<String> {
    leading
        .into_iter()
        .chain(line.split(delimiter).map(str::to_owned))
        .collect()
}

/// Scans `reader` to the end and returns the start offset of every line
/// together with the total byte length.
///
/// A trailing newline does not start an extra empty line; an empty input
/// has no lines.
fn index_lines<R: Read>(reader: &mut R) -> io::Result<(Vec<u64>, u64)> {
    let mut buffer = vec![0u8; SCAN_BUFFER_SIZE];
    let mut line_starts = vec![0u64];
    let mut total_offset = 0u64;

    loop {
        let bytes_read = reader.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        for pos in memchr_iter(b'\n', &buffer[..bytes_read]) {
            line_starts.push(total_offset + pos as u64 + 1);
        }
        total_offset += bytes_read as u64;
    }

    if line_starts.last() == Some(&total_offset) {
        line_starts.pop();
    }
    Ok((line_starts, total_offset))
}

fn file_read(path: &Path, source: io::Error) -> ViewerError {
    ViewerError::FileRead {
        path: path.to_path_buf(),
        source,
    }
}
