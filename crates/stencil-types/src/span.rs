use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in a text buffer.
///
/// `line` and `column` are 1-based; `offset` is a 0-based byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub offset: u32,
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// The first position of any buffer.
    pub const START: Position = Position::new(0, 1, 1);

    pub const fn new(offset: u32, line: u32, column: u32) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }

    /// Advance this position past `text`.
    ///
    /// Every `\n` bumps the line and resets the column to one past the
    /// number of characters that follow the last newline. Text without a
    /// newline moves the column right by its character count.
    pub fn advance(&mut self, text: &str) {
        let mut lines = 0u32;
        let mut last_newline = None;
        for (i, b) in text.bytes().enumerate() {
            if b == b'\n' {
                lines += 1;
                last_newline = Some(i);
            }
        }

        self.offset += text.len() as u32;
        self.line += lines;
        self.column = match last_newline {
            Some(i) => text[i + 1..].chars().count() as u32 + 1,
            None => self.column + text.chars().count() as u32,
        };
    }

    /// Return a copy of this position advanced past `text`.
    pub fn advanced(mut self, text: &str) -> Self {
        self.advance(text);
        self
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Source location span `[start, end)` plus the text it covers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    pub start: Position,
    pub end: Position,
    #[serde(default)]
    pub source: String,
}

impl SourceLocation {
    /// Location for nodes synthesised by transforms (no template origin).
    pub const STUB: SourceLocation = SourceLocation {
        start: Position::START,
        end: Position::START,
        source: String::new(),
    };

    pub fn new(start: Position, end: Position, source: impl Into<String>) -> Self {
        Self {
            start,
            end,
            source: source.into(),
        }
    }

    /// Location covering `source` when it starts at `start`.
    pub fn spanning(start: Position, source: impl Into<String>) -> Self {
        let source = source.into();
        let end = start.advanced(&source);
        Self { start, end, source }
    }
}

impl Default for SourceLocation {
    fn default() -> Self {
        Self::STUB
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.start.fmt(f)
    }
}
