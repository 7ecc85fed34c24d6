//! LaTeX format implementation
//!
//! Export only. Each part renders to a LaTeX fragment (see [`render`]) and
//! the fragments are wrapped in a preamble and `document` environment (see
//! [`document`]).
//!
//! # Part Mapping
//!
//! | Part          | LaTeX                                                  |
//! |---------------|--------------------------------------------------------|
//! | PlainText     | the text, verbatim                                     |
//! | Heading       | `\section`, `\subsection`, ... (one `sub` per level)   |
//! | Table         | `table` + `center` + `tabular`, optional `\caption`    |
//! | Image         | `figure` with `\includegraphics[width=...]`            |
//! | ItemizedList  | `itemize`                                              |
//! | CodeBlock     | `verbatim`, language noted in a comment                |
//! | LineBreak     | ` \\`                                                  |
//!
//! # Options
//!
//! [`Format::serialize_with_options`] accepts `class`, `picture-width`,
//! `title`, `author`, `date` and `packages` (comma separated). Any other key
//! is rejected.

pub mod document;
pub mod render;

use crate::error::FormatError;
use crate::format::Format;
use crate::parts::Document;
use std::collections::HashMap;

pub use document::{assemble, DocumentOptions};
pub use render::{render_body, render_part, RenderContext};

pub const DEFAULT_CLASS: &str = "jsarticle";
pub const DEFAULT_PICTURE_WIDTH: &str = "5cm";

/// Format implementation for LaTeX output
#[derive(Debug, Clone, Default)]
pub struct LatexFormat {
    options: DocumentOptions,
}

impl LatexFormat {
    pub fn new(options: DocumentOptions) -> Self {
        LatexFormat { options }
    }

    pub fn options(&self) -> &DocumentOptions {
        &self.options
    }
}

impl Format for LatexFormat {
    fn name(&self) -> &str {
        "latex"
    }

    fn description(&self) -> &str {
        "LaTeX document"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tex", "latex"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(assemble(doc, &self.options))
    }

    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let options = apply_options(self.options.clone(), options)?;
        Ok(assemble(doc, &options))
    }
}

fn apply_options(
    mut base: DocumentOptions,
    options: &HashMap<String, String>,
) -> Result<DocumentOptions, FormatError> {
    for (key, value) in options {
        match key.as_str() {
            "class" => base.class = value.clone(),
            "picture-width" | "width" => base.picture_width = value.clone(),
            "title" => base.title = Some(value.clone()),
            "author" => base.author = Some(value.clone()),
            "date" => base.date = Some(value.clone()),
            "packages" => base.packages.extend(
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(str::to_string),
            ),
            other => {
                return Err(FormatError::NotSupported(format!(
                    "Unknown latex option '{other}'"
                )))
            }
        }
    }
    Ok(base)
}
