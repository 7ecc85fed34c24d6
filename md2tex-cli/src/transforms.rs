//! CLI-specific transforms
//!
//! This module defines the inspect transforms available in the CLI.
//! Each transform is a stage + format combination (e.g., "parts-json").
//!
//! ## Stages
//!
//! 1. **Normalization** - Raw text → logical lines (double-space breaks split out)
//!    - `lines-json`, `lines-simple`
//!
//! 2. **Parsing** - Logical lines → document parts
//!    - `parts-json`, `parts-simple`
//!
//! ## Extra Parameters
//!
//! - `show-linum`: "false" drops the source line column from `lines-simple`
//! - `pretty`: "false" emits compact JSON
//!
//! Example: `md2tex inspect notes.md lines-simple --extra-show-linum false`

use md2tex_babel::formats::markdown::{normalize, parse_from_markdown, Line, LINE_BREAK};
use md2tex_babel::Part;
use std::collections::HashMap;

/// All available CLI transforms (stage + format combinations)
pub const AVAILABLE_TRANSFORMS: &[&str] =
    &["lines-json", "lines-simple", "parts-json", "parts-simple"];

pub const DEFAULT_TRANSFORM: &str = "parts-simple";

/// Execute a named transform on a source file with optional extra parameters
///
/// # Examples
///
/// ```ignore
/// let output = execute_transform("# Title\n", "parts-simple", &HashMap::new())?;
/// assert_eq!(output, "heading(1) Title\ntext \"\"");
/// ```
pub fn execute_transform(
    source: &str,
    transform_name: &str,
    extra_params: &HashMap<String, String>,
) -> Result<String, String> {
    let pretty = flag(extra_params, "pretty", true)?;
    let show_linum = flag(extra_params, "show-linum", true)?;

    match transform_name {
        "lines-json" => to_json(&normalize(source), pretty),
        "lines-simple" => Ok(lines_to_simple(&normalize(source), show_linum)),
        "parts-json" => {
            let doc = parse_from_markdown(source).map_err(|e| format!("Transform failed: {e}"))?;
            to_json(&doc.parts, pretty)
        }
        "parts-simple" => {
            let doc = parse_from_markdown(source).map_err(|e| format!("Transform failed: {e}"))?;
            Ok(doc
                .iter()
                .map(part_to_simple)
                .collect::<Vec<_>>()
                .join("\n"))
        }
        _ => Err(format!("Unknown transform: {transform_name}")),
    }
}

fn flag(params: &HashMap<String, String>, key: &str, default: bool) -> Result<bool, String> {
    match params.get(key).map(|v| v.to_lowercase()) {
        None => Ok(default),
        Some(v) if matches!(v.as_str(), "true" | "1" | "yes" | "y") => Ok(true),
        Some(v) if matches!(v.as_str(), "false" | "0" | "no" | "n") => Ok(false),
        Some(other) => Err(format!("Invalid boolean value '{other}' for --extra-{key}")),
    }
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String, String> {
    let result = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    result.map_err(|e| format!("JSON serialization failed: {e}"))
}

fn lines_to_simple(lines: &[Line], show_linum: bool) -> String {
    lines
        .iter()
        .map(|line| {
            let text = if line.text == LINE_BREAK {
                "<break>"
            } else {
                line.text.as_str()
            };
            if show_linum {
                format!("{:>4}  {text}", line.number)
            } else {
                text.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn part_to_simple(part: &Part) -> String {
    match part {
        Part::PlainText(text) => format!("text {text:?}"),
        Part::Heading { level, text } => format!("heading({level}) {text}"),
        Part::Table(table) => {
            let mut out = format!(
                "table {} cols, {} rows",
                table.alignments.len(),
                table.rows.len()
            );
            if let Some(caption) = &table.caption {
                out.push_str(&format!(", caption {caption:?}"));
            }
            out
        }
        Part::CodeBlock { lines, language } if language.is_empty() => {
            format!("code ({} lines)", lines.len())
        }
        Part::CodeBlock { lines, language } => format!("code {language} ({} lines)", lines.len()),
        Part::Image { path, caption } => format!("image {path} [{caption}]"),
        Part::ItemizedList(items) => format!("itemize ({} items)", items.len()),
        Part::LineBreak => "linebreak".to_string(),
    }
}
