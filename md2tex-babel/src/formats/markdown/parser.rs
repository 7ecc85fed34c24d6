//! Markdown parsing (Markdown → parts)
//!
//! Pipeline: source → normalized lines → scanner → recognizers → Document
//!
//! The driver makes a single pass. At every line it first checks for the
//! line-break token, then tries each recognizer in order, then falls back to
//! plain text. There is no backtracking between recognizers.

use super::normalize::{normalize, normalize_lines, Line, LINE_BREAK};
use super::recognizers::RECOGNIZERS;
use super::scanner::LineScanner;
use crate::error::ParseError;
use crate::parts::{Document, Part};
use tracing::{debug, trace};

/// Parse a Markdown string into a document
pub fn parse_from_markdown(source: &str) -> Result<Document, ParseError> {
    parse_normalized(normalize(source))
}

/// Parse already-split physical lines into a document
pub fn parse_markdown_lines<I, S>(lines: I) -> Result<Document, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parse_normalized(normalize_lines(lines))
}

/// Run the driver over normalized lines
pub fn parse_normalized(lines: Vec<Line>) -> Result<Document, ParseError> {
    let line_count = lines.len();
    let mut scanner = LineScanner::new(lines);
    let mut parts = Vec::new();

    while !scanner.at_end() {
        parts.extend(parse_block(&mut scanner)?);
    }

    if let Some(caption) = scanner.pending_caption() {
        debug!(caption, "pending caption never attached to a table");
    }
    debug!(lines = line_count, parts = parts.len(), "parsed markdown");
    Ok(Document::new(parts))
}

fn parse_block(scanner: &mut LineScanner) -> Result<Vec<Part>, ParseError> {
    let line = scanner.current()?;
    if line == LINE_BREAK {
        scanner.advance();
        return Ok(vec![Part::LineBreak]);
    }

    for &(name, recognize) in RECOGNIZERS {
        let start = scanner.current_line_number();
        if let Some(parts) = recognize(scanner)? {
            trace!(recognizer = name, line = start, parts = parts.len(), "matched");
            return Ok(parts);
        }
    }

    let text = scanner.current()?.to_string();
    scanner.advance();
    Ok(vec![Part::PlainText(text)])
}
