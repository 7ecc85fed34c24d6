//! Part → LaTeX markup
//!
//! Every part renders against a [`RenderContext`]. Text is emitted verbatim;
//! no escaping of LaTeX special characters happens here.

use crate::parts::{Document, Part, Row, Table};

/// Settings shared by every render call. Only images read it today.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    pub picture_width: String,
}

impl RenderContext {
    pub fn new(picture_width: impl Into<String>) -> Self {
        RenderContext {
            picture_width: picture_width.into(),
        }
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        RenderContext::new(super::DEFAULT_PICTURE_WIDTH)
    }
}

/// Render every part and join them with newlines.
pub fn render_body(doc: &Document, context: &RenderContext) -> String {
    doc.iter()
        .map(|part| render_part(part, context))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_part(part: &Part, context: &RenderContext) -> String {
    match part {
        Part::PlainText(text) => text.clone(),
        Part::Heading { level, text } => render_heading(*level, text),
        Part::Table(table) => render_table(table),
        Part::CodeBlock { lines, language } => render_code_block(lines, language),
        Part::Image { path, caption } => render_image(path, caption, context),
        Part::ItemizedList(items) => render_itemize(items),
        Part::LineBreak => " \\\\".to_string(),
    }
}

/// `#` is `\section`, each further `#` adds one `sub`.
fn render_heading(level: usize, text: &str) -> String {
    let depth = level.saturating_sub(1);
    format!("\\{}section{{{text}}}", "sub".repeat(depth))
}

pub fn render_row(row: &Row) -> String {
    row.cells().join(" & ")
}

fn render_table(table: &Table) -> String {
    let column_spec: String = table.alignments.iter().map(|a| a.code()).collect();
    let caption = table
        .caption
        .as_ref()
        .map(|caption| format!("\\caption{{{caption}}}"))
        .unwrap_or_default();
    let body = table
        .rows
        .iter()
        .map(render_row)
        .collect::<Vec<_>>()
        .join(" \\\\\n");

    [
        "\\begin{table}[htb]".to_string(),
        "\\begin{center}".to_string(),
        caption,
        format!("\\begin{{tabular}}{{{column_spec}}} \\hline"),
        format!("{} \\\\ \\hline", render_row(&table.header)),
        body,
        "\\end{tabular}".to_string(),
        "\\end{center}".to_string(),
        "\\end{table}".to_string(),
    ]
    .join("\n")
}

fn render_image(path: &str, caption: &str, context: &RenderContext) -> String {
    [
        "\\begin{figure}".to_string(),
        "\\centering".to_string(),
        format!(
            "\\includegraphics[width={}]{{{path}}}",
            context.picture_width
        ),
        format!("\\caption{{{caption}}}"),
        "\\end{figure}".to_string(),
    ]
    .join("\n")
}

fn render_itemize(items: &[String]) -> String {
    let mut out = vec!["\\begin{itemize}".to_string()];
    out.extend(items.iter().map(|item| format!("\\item {item}")));
    out.push("\\end{itemize}".to_string());
    out.join("\n")
}

fn render_code_block(lines: &[String], language: &str) -> String {
    let mut out = Vec::with_capacity(lines.len() + 3);
    if !language.is_empty() {
        out.push(format!("% language: {language}"));
    }
    out.push("\\begin{verbatim}".to_string());
    out.extend(lines.iter().cloned());
    out.push("\\end{verbatim}".to_string());
    out.join("\n")
}
