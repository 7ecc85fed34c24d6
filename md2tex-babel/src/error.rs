//! Error types for parsing and format operations

use thiserror::Error;

/// Fatal conditions raised while parsing Markdown source.
///
/// Lines that no recognizer accepts are not errors: they fall back to plain
/// text. Only the conditions below abort a parse, and they abort it entirely.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A code fence was opened but the input ended before the closing fence.
    #[error("unterminated code block opened at line {line}")]
    UnterminatedBlock {
        /// 1-based source line of the opening fence
        line: usize,
    },

    /// A recognizer read past the end of the normalized lines.
    #[error("read past end of input (line index {index})")]
    IndexExhaustion { index: usize },
}

impl ParseError {
    /// Source line the error points at, when there is one.
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::UnterminatedBlock { line } => Some(*line),
            ParseError::IndexExhaustion { .. } => None,
        }
    }
}

/// Errors that can occur during format operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Error during parsing
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    /// Error during serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),
    /// Format does not support the requested operation
    #[error("Operation not supported: {0}")]
    NotSupported(String),
    /// Reading or writing a file failed
    #[error("I/O error: {0}")]
    Io(String),
}
