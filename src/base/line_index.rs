//! Byte offset to line number conversion.
//!
//! The XML reader reports byte offsets into the document text; reports
//! cite 1-based lines.

use std::fmt;

pub use text_size::TextSize;

/// A 1-based line and byte column.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// Newline positions of one document.
#[derive(Clone, Debug, Default)]
pub struct LineIndex {
    /// Offset of every `\n`, ascending.
    newlines: Vec<TextSize>,
    end: TextSize,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let newlines = text
            .match_indices('\n')
            .map(|(offset, _)| TextSize::from(offset as u32))
            .collect();
        Self {
            newlines,
            end: TextSize::of(text),
        }
    }

    /// 1-based line holding `offset`. Offsets past the end clamp to the last line.
    pub fn line(&self, offset: TextSize) -> u32 {
        let offset = offset.min(self.end);
        self.newlines.partition_point(|&nl| nl < offset) as u32 + 1
    }

    pub fn line_col(&self, offset: TextSize) -> LineCol {
        let offset = offset.min(self.end);
        let line = self.line(offset);
        let start = match line {
            1 => TextSize::from(0),
            n => self.newlines[n as usize - 2] + TextSize::from(1),
        };
        LineCol {
            line,
            col: u32::from(offset - start) + 1,
        }
    }

    pub fn line_count(&self) -> usize {
        self.newlines.len() + 1
    }
}
