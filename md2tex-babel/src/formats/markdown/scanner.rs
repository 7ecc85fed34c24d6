//! Cursor over normalized lines
//!
//! The scanner is owned by a single parse. Besides the cursor it carries the
//! pending caption slot: a value set by a `<meta>` annotation and taken by the
//! next table. The slot holds at most one value; setting it again overwrites.

use super::normalize::Line;
use crate::error::ParseError;

#[derive(Debug)]
pub struct LineScanner {
    lines: Vec<Line>,
    cursor: usize,
    pending_caption: Option<String>,
}

impl LineScanner {
    pub fn new(lines: Vec<Line>) -> Self {
        LineScanner {
            lines,
            cursor: 0,
            pending_caption: None,
        }
    }

    /// Text of the line at the cursor.
    pub fn current(&self) -> Result<&str, ParseError> {
        self.lines
            .get(self.cursor)
            .map(|line| line.text.as_str())
            .ok_or(ParseError::IndexExhaustion { index: self.cursor })
    }

    /// Source line number at the cursor, or of the last line once exhausted.
    pub fn current_line_number(&self) -> usize {
        self.lines
            .get(self.cursor)
            .or_else(|| self.lines.last())
            .map_or(0, |line| line.number)
    }

    pub fn at_end(&self) -> bool {
        self.cursor >= self.lines.len()
    }

    /// Moves to the next line. Callers check [`at_end`](Self::at_end) first.
    pub fn advance(&mut self) {
        debug_assert!(!self.at_end(), "advance called past end of input");
        self.cursor += 1;
    }

    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn set_pending_caption(&mut self, caption: impl Into<String>) {
        self.pending_caption = Some(caption.into());
    }

    pub fn pending_caption(&self) -> Option<&str> {
        self.pending_caption.as_deref()
    }

    /// Returns the pending caption and clears the slot.
    pub fn take_pending_caption(&mut self) -> Option<String> {
        self.pending_caption.take()
    }

    pub fn clear_pending_caption(&mut self) {
        self.pending_caption = None;
    }
}
