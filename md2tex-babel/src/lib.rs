//! Markdown to LaTeX conversion
//!
//!     This crate reads a small, line-oriented Markdown dialect and writes LaTeX documents.
//!     It is a pure lib: it powers md2tex-cli but is shell agnostic, so no code here should
//!     suppose a shell environment, be it std printing, env vars, or process exits.
//!
//! Architecture
//!
//!     Conversion runs in two halves joined by a flat sequence of parts (./parts.rs):
//!
//!     source text → normalized lines → recognizers → Vec<Part> → LaTeX fragments → document
//!
//!     The first half is the Markdown parser (./formats/markdown). It makes a single pass over
//!     the normalized lines, trying a fixed, ordered list of block recognizers at each line.
//!     The second half is the LaTeX writer (./formats/latex), which is plain templating.
//!
//!     The file structure :
//!     .
//!     ├── error.rs                # ParseError, FormatError
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── publish.rs              # serialize + optional file write
//!     ├── parts.rs                # Part, Row, Table, Alignment, Document
//!     ├── formats
//!     │   ├── markdown            # normalize, scanner, recognizers, parser
//!     │   ├── latex               # render, document
//!     │   └── json                # parts dump
//!     └── lib.rs
//!
//! Testing
//!
//!     tests
//!     └── <format>
//!         ├── <testname>.rs
//!         └── fixtures
//!
//!     Rust does not discover tests in subdirectories by default, so tests/lib.rs includes
//!     them as modules.

pub mod error;
pub mod format;
pub mod formats;
pub mod parts;
pub mod publish;
pub mod registry;

pub use error::{FormatError, ParseError};
pub use format::Format;
pub use formats::latex::DocumentOptions;
pub use parts::{Alignment, Document, Part, Row, Table};
pub use registry::FormatRegistry;

/// Parses Markdown source into parts.
pub fn parse_markdown(source: &str) -> Result<Document, ParseError> {
    formats::markdown::parse_from_markdown(source)
}

/// Parses Markdown source and writes a complete LaTeX document.
pub fn markdown_to_latex(source: &str, options: &DocumentOptions) -> Result<String, ParseError> {
    let doc = parse_markdown(source)?;
    Ok(formats::latex::assemble(&doc, options))
}
