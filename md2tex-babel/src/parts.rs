//! Document parts produced by the Markdown parser.
//!
//! A parse yields a flat, ordered sequence of [`Part`] values. Parts are
//! built once by a recognizer and never mutated afterwards; the LaTeX
//! renderer consumes them in order.

use serde::Serialize;

/// One semantic unit of the output document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Part {
    /// A line of text passed through verbatim.
    PlainText(String),
    /// A section heading. `level` is the number of leading `#` (always ≥ 1).
    Heading { level: usize, text: String },
    Table(Table),
    /// A fenced code block. The fences themselves are not part of `lines`.
    CodeBlock { lines: Vec<String>, language: String },
    /// A figure; `caption` comes from the image's alt text.
    Image { path: String, caption: String },
    /// List items. Ordered (`1.`) and unordered (`+`) items collapse here.
    ItemizedList(Vec<String>),
    /// A forced line break.
    LineBreak,
}

impl Part {
    /// Short lowercase name of the variant, used by inspect output and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Part::PlainText(_) => "text",
            Part::Heading { .. } => "heading",
            Part::Table(_) => "table",
            Part::CodeBlock { .. } => "code",
            Part::Image { .. } => "image",
            Part::ItemizedList(_) => "itemize",
            Part::LineBreak => "linebreak",
        }
    }
}

/// A single table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row(pub Vec<String>);

impl Row {
    pub fn new<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Row(cells.into_iter().map(Into::into).collect())
    }

    pub fn cells(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Column alignment taken from a table's alignment row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Parses one alignment-row cell.
    ///
    /// `:---:` is center, `:---` is left, anything else (including `---:`)
    /// is right.
    pub fn from_cell(cell: &str) -> Self {
        if cell.starts_with(':') {
            if cell.ends_with(':') {
                Alignment::Center
            } else {
                Alignment::Left
            }
        } else {
            Alignment::Right
        }
    }

    /// LaTeX `tabular` column code.
    pub fn code(self) -> char {
        match self {
            Alignment::Left => 'l',
            Alignment::Center => 'c',
            Alignment::Right => 'r',
        }
    }
}

/// A pipe table.
///
/// `alignments` has one entry per alignment-row column; it is not checked
/// against the header's width.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub header: Row,
    pub alignments: Vec<Alignment>,
    pub rows: Vec<Row>,
    pub caption: Option<String>,
}

/// The ordered output of one parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
    pub parts: Vec<Part>,
}

impl Document {
    pub fn new(parts: Vec<Part>) -> Self {
        Document { parts }
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Part> {
        self.parts.iter()
    }
}

impl From<Vec<Part>> for Document {
    fn from(parts: Vec<Part>) -> Self {
        Document::new(parts)
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Part;
    type IntoIter = std::slice::Iter<'a, Part>;

    fn into_iter(self) -> Self::IntoIter {
        self.parts.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(":---:", Alignment::Center)]
    #[case(":---", Alignment::Left)]
    #[case("---", Alignment::Right)]
    #[case("---:", Alignment::Right)]
    #[case(":", Alignment::Center)]
    #[case("", Alignment::Right)]
    fn alignment_from_cell(#[case] cell: &str, #[case] expected: Alignment) {
        assert_eq!(Alignment::from_cell(cell), expected);
    }

    #[test]
    fn alignment_codes() {
        assert_eq!(Alignment::Left.code(), 'l');
        assert_eq!(Alignment::Center.code(), 'c');
        assert_eq!(Alignment::Right.code(), 'r');
    }

    #[test]
    fn parts_serialize_to_json() {
        let part = Part::Heading {
            level: 2,
            text: "Intro".to_string(),
        };
        let json = serde_json::to_string(&part).unwrap();
        assert_eq!(json, r#"{"Heading":{"level":2,"text":"Intro"}}"#);
        assert_eq!(
            serde_json::to_string(&Alignment::Center).unwrap(),
            r#""center""#
        );
    }
}
