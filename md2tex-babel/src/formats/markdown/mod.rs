//! Markdown format implementation
//!
//! This module implements import of a small, line-oriented Markdown dialect.
//! It is not CommonMark: every construct is recognized on whole lines, in a
//! single pass, and nothing nests.
//!
//! # Construct Table
//!
//! | Markdown                      | Part           | Notes                                      |
//! |-------------------------------|----------------|--------------------------------------------|
//! | `# Title`, `## Sub`, ...      | Heading        | Level = number of `#`                      |
//! | `\| a \| b \|` + `\|:-\|-:\|` | Table          | Body rows until a line loses the row shape |
//! | `+ item`, `1. item`           | ItemizedList   | Ordered and unordered collapse             |
//! | `![caption](path)`            | Image          | No whitespace in either group              |
//! | `<meta>text</meta>`           | (none)         | Caption for the next table                 |
//! | ```` ```lang ````             | CodeBlock      | Until a bare ```` ``` ````                 |
//! | two spaces inside a line      | LineBreak      | Splits the line around the break           |
//! | anything else                 | PlainText      | Trimmed line, verbatim                     |
//!
//! # Errors
//!
//! Unrecognized lines are not errors. The only fatal condition a well-formed
//! recognizer set can hit is a code fence that never closes, reported with
//! the line number of the opening fence.

pub mod normalize;
pub mod parser;
pub mod recognizers;
pub mod scanner;

use crate::error::FormatError;
use crate::format::Format;
use crate::parts::Document;

pub use normalize::{normalize, normalize_lines, Line, LINE_BREAK};
pub use parser::{parse_from_markdown, parse_markdown_lines};
pub use scanner::LineScanner;

/// Format implementation for Markdown
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Line-oriented Markdown subset"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        Ok(parser::parse_from_markdown(source)?)
    }
}
