//! Source buffer and position model (component A).

pub use rowan::{TextRange, TextSize};

/// The original text plus a precomputed line-start index, so that
/// `line_col` queries don't have to re-scan the buffer.
#[derive(Debug, Clone)]
pub struct SourceFile {
    path: String,
    text: String,
    /// Byte offset of the start of each line. Always begins with `0`.
    line_starts: Vec<TextSize>,
}

impl SourceFile {
    pub fn new(path: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        let line_starts = compute_line_starts(&text);
        Self {
            path: path.into(),
            text,
            line_starts,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// 0-based (line, column) in UTF-8 byte columns for a byte offset.
    pub fn line_col(&self, pos: TextSize) -> LineCol {
        let pos_u32: u32 = pos.into();
        let line = match self.line_starts.binary_search(&pos) {
            Ok(line) => line,
            Err(next_line) => next_line - 1,
        };
        let line_start: u32 = self.line_starts[line].into();
        LineCol {
            line: line as u32,
            column: pos_u32 - line_start,
        }
    }

    pub fn line_starts(&self) -> &[TextSize] {
        &self.line_starts
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCol {
    pub line: u32,
    pub column: u32,
}

fn compute_line_starts(text: &str) -> Vec<TextSize> {
    let mut starts = vec![TextSize::from(0)];
    for (i, b) in text.bytes().enumerate() {
        if b == b'\n' {
            starts.push(TextSize::from(i as u32 + 1));
        }
    }
    starts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_col_basic() {
        let src = SourceFile::new("test.tsp", "abc\ndef\nghi");
        assert_eq!(src.line_col(TextSize::from(0)), LineCol { line: 0, column: 0 });
        assert_eq!(src.line_col(TextSize::from(4)), LineCol { line: 1, column: 0 });
        assert_eq!(src.line_col(TextSize::from(9)), LineCol { line: 2, column: 1 });
    }

    #[test]
    fn empty_source_has_one_line() {
        let src = SourceFile::new("empty.tsp", "");
        assert_eq!(src.line_col(TextSize::from(0)), LineCol { line: 0, column: 0 });
    }
}
