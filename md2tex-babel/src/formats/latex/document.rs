//! Document assembly: preamble, optional title block, body.

use super::render::{render_body, RenderContext};
use crate::parts::Document;

/// Everything outside the body that shapes the output document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentOptions {
    /// Argument to `\documentclass`
    pub class: String,
    /// Width used for every `\includegraphics`
    pub picture_width: String,
    pub title: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
    /// Extra `\usepackage` lines, emitted after graphicx
    pub packages: Vec<String>,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        DocumentOptions {
            class: super::DEFAULT_CLASS.to_string(),
            picture_width: super::DEFAULT_PICTURE_WIDTH.to_string(),
            title: None,
            author: None,
            date: None,
            packages: Vec::new(),
        }
    }
}

impl DocumentOptions {
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn with_picture_width(mut self, width: impl Into<String>) -> Self {
        self.picture_width = width.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.packages.push(package.into());
        self
    }

    /// `\maketitle` is emitted when any title-block field is set.
    pub fn has_title_block(&self) -> bool {
        self.title.is_some() || self.author.is_some() || self.date.is_some()
    }

    pub fn render_context(&self) -> RenderContext {
        RenderContext::new(self.picture_width.clone())
    }
}

/// Wrap the rendered parts in a complete LaTeX document.
pub fn assemble(doc: &Document, options: &DocumentOptions) -> String {
    let mut out = String::new();
    out.push_str(&format!("\\documentclass{{{}}}\n", options.class));
    out.push_str("\\usepackage[dvipdfmx]{graphicx}\n");
    for package in &options.packages {
        out.push_str(&format!("\\usepackage{{{package}}}\n"));
    }

    if let Some(author) = &options.author {
        out.push_str(&format!("\\author{{{author}}}\n"));
    }
    if let Some(date) = &options.date {
        out.push_str(&format!("\\date{{{date}}}\n"));
    }
    if let Some(title) = &options.title {
        out.push_str(&format!("\\title{{{title}}}\n"));
    }

    out.push_str("\\begin{document}\n");
    if options.has_title_block() {
        out.push_str("\\maketitle\n");
    }
    out.push_str(&render_body(doc, &options.render_context()));
    out.push_str("\n\\end{document}\n");
    out
}
