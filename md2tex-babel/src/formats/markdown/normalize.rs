//! Line normalization (raw source → logical lines)
//!
//! Every physical line is split around each interior double-space marker,
//! with a [`LINE_BREAK`] token inserted where the marker was. Each fragment is
//! then trimmed. The break token itself is kept as-is so the parser can turn
//! it into a forced line break.
//!
//! An empty end-of-document line is always appended. Multi-line recognizers
//! that scan for a terminator rely on it, and it gives the driver one blank
//! line to finish on.

use serde::Serialize;

/// The token that stands in for a double-space line break marker.
pub const LINE_BREAK: &str = "  ";

/// A logical line handed to the recognizers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    /// Trimmed text (or exactly [`LINE_BREAK`]).
    pub text: String,
    /// 1-based number of the physical line this fragment came from.
    pub number: usize,
}

impl Line {
    pub fn new(text: impl Into<String>, number: usize) -> Self {
        Line {
            text: text.into(),
            number,
        }
    }

    pub fn is_break(&self) -> bool {
        self.text == LINE_BREAK
    }
}

/// Normalizes a whole source string.
pub fn normalize(source: &str) -> Vec<Line> {
    normalize_lines(source.lines())
}

/// Normalizes already-split physical lines.
///
/// Lines may still carry their own `\n` or `\r\n` terminator.
pub fn normalize_lines<I, S>(lines: I) -> Vec<Line>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut normalized = Vec::new();
    let mut count = 0;

    for (index, raw) in lines.into_iter().enumerate() {
        let number = index + 1;
        count = number;
        let physical = raw.as_ref().trim_end_matches(['\n', '\r']);

        let mut fragments = physical.split(LINE_BREAK);
        if let Some(first) = fragments.next() {
            normalized.push(Line::new(first.trim(), number));
        }
        for fragment in fragments {
            normalized.push(Line::new(LINE_BREAK, number));
            normalized.push(Line::new(fragment.trim(), number));
        }
    }

    normalized.push(Line::new("", count + 1));
    normalized
}
