//! Document publishing pipeline.
//!
//! Provides a high-level API for converting a parsed document to an output
//! format. This module bridges the gap between the format registry and file
//! I/O, handling both in-memory and file-based output.
//!
//! For more control over the conversion process, use [`FormatRegistry`] directly.

use crate::error::FormatError;
use crate::parts::Document;
use crate::registry::FormatRegistry;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Specifies how to publish a document.
///
/// ```ignore
/// let spec = PublishSpec::new(&document, "latex")
///     .with_output_path("a.tex")
///     .with_option("picture-width", "7cm");
/// ```
///
/// If no output path is provided, the content is returned in memory.
#[derive(Debug)]
pub struct PublishSpec<'a> {
    /// The parsed document to convert.
    pub document: &'a Document,
    /// Target format name (e.g., "latex", "json").
    pub format: &'a str,
    /// Optional file path for writing output.
    pub output: Option<PathBuf>,
    /// Format-specific options (e.g., class, picture width).
    pub options: HashMap<String, String>,
}

impl<'a> PublishSpec<'a> {
    /// Creates a new publish specification for the given document and format.
    pub fn new(document: &'a Document, format: &'a str) -> Self {
        Self {
            document,
            format,
            output: None,
            options: HashMap::new(),
        }
    }

    /// Sets the output file path. If provided, content is written to disk.
    pub fn with_output_path(mut self, path: impl AsRef<Path>) -> Self {
        self.output = Some(path.as_ref().to_path_buf());
        self
    }

    /// Adds a format-specific option.
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Adds every option from the map, replacing existing keys.
    pub fn with_options(mut self, options: HashMap<String, String>) -> Self {
        self.options.extend(options);
        self
    }
}

/// The output from a successful publish operation.
#[derive(Debug, Clone, PartialEq)]
pub enum PublishArtifact {
    /// Content held in memory (no output path was given).
    InMemory(String),
    /// Path to the written file.
    File(PathBuf),
}

/// Result of a publish operation.
#[derive(Debug, Clone, PartialEq)]
pub struct PublishResult {
    pub artifact: PublishArtifact,
}

/// Publishes a document according to the specification, using the default
/// format registry.
///
/// # Errors
///
/// Returns [`FormatError`] if the format is unknown or cannot serialize,
/// an option is rejected, or the output file cannot be written.
pub fn publish(spec: PublishSpec<'_>) -> Result<PublishResult, FormatError> {
    publish_with_registry(&FormatRegistry::with_defaults(), spec)
}

/// Same as [`publish`] with a caller-supplied registry.
pub fn publish_with_registry(
    registry: &FormatRegistry,
    spec: PublishSpec<'_>,
) -> Result<PublishResult, FormatError> {
    let text = registry.serialize_with_options(spec.document, spec.format, &spec.options)?;
    match spec.output {
        Some(path) => write_to_path(path, text).map(|path| PublishResult {
            artifact: PublishArtifact::File(path),
        }),
        None => Ok(PublishResult {
            artifact: PublishArtifact::InMemory(text),
        }),
    }
}

fn write_to_path(path: PathBuf, text: String) -> Result<PathBuf, FormatError> {
    fs::write(&path, text.as_bytes())
        .map_err(|err| FormatError::Io(format!("{}: {err}", path.display())))?;
    info!(path = %path.display(), bytes = text.len(), "wrote output");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::markdown::parse_from_markdown;
    use tempfile::tempdir;

    const SAMPLE: &str = "# Title\n\nParagraph text.\n";

    fn sample_document() -> Document {
        parse_from_markdown(SAMPLE).unwrap()
    }

    #[test]
    fn publishes_to_memory_when_no_output_path() {
        let doc = sample_document();
        let result = publish(PublishSpec::new(&doc, "latex")).expect("publish");
        match result.artifact {
            PublishArtifact::InMemory(content) => {
                assert!(content.contains("\\section{Title}"));
                assert!(content.contains("Paragraph text."));
            }
            PublishArtifact::File(_) => panic!("expected in-memory artifact"),
        }
    }

    #[test]
    fn writes_to_disk_when_output_path_provided() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.tex");
        let doc = sample_document();
        let result = publish(
            PublishSpec::new(&doc, "latex")
                .with_output_path(&path)
                .with_option("class", "article"),
        )
        .expect("publish");
        match result.artifact {
            PublishArtifact::File(p) => assert_eq!(p, path),
            PublishArtifact::InMemory(_) => panic!("expected file artifact"),
        }
        let contents = fs::read_to_string(path).unwrap();
        assert!(contents.starts_with("\\documentclass{article}"));
    }

    #[test]
    fn unwritable_path_is_an_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("a.tex");
        let doc = sample_document();
        let result = publish(PublishSpec::new(&doc, "latex").with_output_path(&path));
        assert!(matches!(result, Err(FormatError::Io(_))));
    }
}
