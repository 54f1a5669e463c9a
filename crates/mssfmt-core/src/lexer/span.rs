//! Source location tracking for words and diagnostics.

use core::fmt;

/// Represents a span in the source code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl Span {
    /// Creates a new span.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length of the span in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if the span is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

}

impl Default for Span {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

/// A human readable location: file name, 1-based line and column.
///
/// Columns count characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Position {
    /// Display name of the script, possibly empty.
    pub file_name: String,
    /// Line number, starting at 1.
    pub line: usize,
    /// Column number, starting at 1.
    pub column: usize,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub fn new(file_name: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            file_name: file_name.into(),
            line,
            column,
        }
    }

    /// Returns true if both line and column are set.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.line > 0 && self.column > 0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            return Ok(());
        }
        if self.file_name.is_empty() {
            write!(f, "{}:{}", self.line, self.column)
        } else {
            write!(f, "{}:{}:{}", self.file_name, self.line, self.column)
        }
    }
}

/// U+FEFF, skipped at the start of a script.
pub const BYTE_ORDER_MARK: char = '\u{feff}';

/// Byte offsets of line starts, used to turn offsets into positions.
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    /// Builds the index for `source`. `\r\n`, `\n` and a lone `\r` all end a line.
    #[must_use]
    pub fn new(source: &str) -> Self {
        let bytes = source.as_bytes();
        let mut line_starts = vec![0];
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'\r' if bytes.get(i + 1) == Some(&b'\n') => {
                    i += 1;
                    line_starts.push(i + 1);
                }
                b'\r' | b'\n' => line_starts.push(i + 1),
                _ => {}
            }
            i += 1;
        }
        Self { line_starts }
    }

    /// Returns the 1-based `(line, column)` of `offset` within `source`.
    ///
    /// Offsets past the end are clamped to the end of the source. A leading
    /// byte-order mark takes no column.
    #[must_use]
    pub fn line_column(&self, source: &str, offset: usize) -> (usize, usize) {
        let offset = offset.min(source.len());
        let line = match self.line_starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(next) => next - 1,
        };
        let mut line_start = self.line_starts[line];
        if line == 0 && source.starts_with(BYTE_ORDER_MARK) {
            line_start = BYTE_ORDER_MARK.len_utf8();
        }
        let offset = offset.max(line_start);
        let column = source
            .get(line_start..offset)
            .map_or(offset - line_start, |text| text.chars().count());
        (line + 1, column + 1)
    }

    /// Returns the [`Position`] of `offset` within `source`.
    #[must_use]
    pub fn position(&self, file_name: &str, source: &str, offset: usize) -> Position {
        let (line, column) = self.line_column(source, offset);
        Position::new(file_name, line, column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_len() {
        let span = Span::new(5, 10);
        assert_eq!(span.len(), 5);
        assert!(!span.is_empty());
        assert!(Span::new(5, 5).is_empty());
    }

    #[test]
    fn test_position_validity() {
        assert!(Position::new("", 1, 1).is_valid());
        assert!(!Position::new("", 0, 1).is_valid());
        assert!(!Position::new("", 3, 0).is_valid());
        assert!(!Position::default().is_valid());
    }

    #[test]
    fn test_position_display() {
        assert_eq!(Position::new("", 2, 7).to_string(), "2:7");
        assert_eq!(Position::new("q.sql", 2, 7).to_string(), "q.sql:2:7");
        assert_eq!(Position::new("q.sql", 0, 7).to_string(), "");
    }

    #[test]
    fn test_line_index() {
        let src = "SELECT a\r\n  , b\nFROM t\rWHERE";
        let index = LineIndex::new(src);
        assert_eq!(index.line_column(src, 0), (1, 1));
        assert_eq!(index.line_column(src, 7), (1, 8));
        assert_eq!(index.line_column(src, 12), (2, 3));
        assert_eq!(index.line_column(src, 16), (3, 1));
        assert_eq!(index.line_column(src, 23), (4, 1));
    }

    #[test]
    fn test_line_index_skips_byte_order_mark() {
        let src = "\u{feff}SELECT a\nFROM 1";
        let index = LineIndex::new(src);
        assert_eq!(index.line_column(src, 0), (1, 1));
        assert_eq!(index.line_column(src, 3), (1, 1));
        assert_eq!(index.line_column(src, 10), (1, 8));
        assert_eq!(index.line_column(src, 17), (2, 6));
    }

    #[test]
    fn test_line_index_counts_chars() {
        let src = "x = 'Ciąg' + y";
        let index = LineIndex::new(src);
        let offset = src.find('+').unwrap_or_default();
        assert_eq!(index.line_column(src, offset), (1, 12));
    }
}
