//! Block recognizers
//!
//! Each recognizer looks at the line under the cursor and either consumes one
//! block, returning its parts, or returns `Ok(None)` with the cursor where it
//! found it. A recognizer never consumes lines it then gives back.
//!
//! The driver tries [`RECOGNIZERS`] in order and keeps the first match.
//! Anything left over becomes plain text.

use super::scanner::LineScanner;
use crate::error::ParseError;
use crate::parts::{Alignment, Part, Row, Table};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

/// Outcome of one recognizer attempt.
pub type Recognized = Result<Option<Vec<Part>>, ParseError>;

/// A block recognizer.
pub type Recognizer = fn(&mut LineScanner) -> Recognized;

/// Recognizers in priority order, paired with a name for tracing.
pub const RECOGNIZERS: &[(&str, Recognizer)] = &[
    ("heading", heading),
    ("table", table),
    ("itemize", itemize),
    ("image", image),
    ("meta", meta),
    ("code", code_block),
];

pub const CODE_FENCE: &str = "```";

static HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(#+)\s+(.+)").expect("heading pattern is valid"));
static TABLE_ROW_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\|\s*(\S+)\s*\|").expect("table row pattern is valid"));
static BULLET_ITEM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\+\s+(\S.*)").expect("bullet item pattern is valid"));
static NUMBERED_ITEM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*[0-9]+\.\s+(\S.*)").expect("numbered item pattern is valid"));
static IMAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^!\[(\S+)\]\((\S+)\)").expect("image pattern is valid"));
static META_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^<\s*meta\s*>\s*(.*)\s*<\s*/\s*meta\s*>").expect("meta pattern is valid")
});
static CODE_FENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^```\s*(\S*)").expect("code fence pattern is valid"));

/// `# Title`, `## Section`, ... One line.
pub fn heading(scanner: &mut LineScanner) -> Recognized {
    let line = scanner.current()?;
    let Some(caps) = HEADING_RE.captures(line) else {
        return Ok(None);
    };
    let part = Part::Heading {
        level: caps[1].len(),
        text: caps[2].to_string(),
    };
    scanner.advance();
    Ok(Some(vec![part]))
}

/// Pipe table: header row, alignment row, then body rows for as long as
/// lines keep the row shape. Takes the pending caption, if any.
pub fn table(scanner: &mut LineScanner) -> Recognized {
    let Some(header) = table_row(scanner)? else {
        return Ok(None);
    };

    let alignments = split_cells(scanner.current()?)
        .iter()
        .map(|cell| Alignment::from_cell(cell))
        .collect();
    scanner.advance();

    let mut rows = Vec::new();
    while let Some(row) = table_row(scanner)? {
        rows.push(row);
    }

    let caption = scanner.take_pending_caption();
    trace!(columns = header.len(), rows = rows.len(), ?caption, "table");
    Ok(Some(vec![Part::Table(Table {
        header,
        alignments,
        rows,
        caption,
    })]))
}

fn table_row(scanner: &mut LineScanner) -> Result<Option<Row>, ParseError> {
    if scanner.at_end() {
        return Ok(None);
    }
    let line = scanner.current()?;
    if !TABLE_ROW_RE.is_match(line) {
        return Ok(None);
    }
    let row = Row(split_cells(line));
    scanner.advance();
    Ok(Some(row))
}

/// Strips the outer pipes and spaces, splits on `|`, trims every cell.
fn split_cells(line: &str) -> Vec<String> {
    line.trim_matches(|c| c == ' ' || c == '|')
        .split('|')
        .map(|cell| cell.trim().to_string())
        .collect()
}

/// Consecutive `+ item` or `1. item` lines, folded into one list.
pub fn itemize(scanner: &mut LineScanner) -> Recognized {
    let mut items = Vec::new();
    while let Some(item) = list_item(scanner)? {
        items.push(item);
    }
    if items.is_empty() {
        return Ok(None);
    }
    Ok(Some(vec![Part::ItemizedList(items)]))
}

fn list_item(scanner: &mut LineScanner) -> Result<Option<String>, ParseError> {
    if scanner.at_end() {
        return Ok(None);
    }
    let line = scanner.current()?;
    let caps = BULLET_ITEM_RE
        .captures(line)
        .or_else(|| NUMBERED_ITEM_RE.captures(line));
    let Some(caps) = caps else {
        return Ok(None);
    };
    let item = caps[1].trim_end().to_string();
    scanner.advance();
    Ok(Some(item))
}

/// `![caption](path)`. One line.
pub fn image(scanner: &mut LineScanner) -> Recognized {
    let line = scanner.current()?;
    let Some(caps) = IMAGE_RE.captures(line) else {
        return Ok(None);
    };
    let part = Part::Image {
        path: caps[2].to_string(),
        caption: caps[1].to_string(),
    };
    scanner.advance();
    Ok(Some(vec![part]))
}

/// `<meta>caption</meta>`: stores a caption for the next table and yields
/// no parts of its own.
pub fn meta(scanner: &mut LineScanner) -> Recognized {
    let line = scanner.current()?;
    let Some(caps) = META_RE.captures(line) else {
        return Ok(None);
    };
    let payload = caps[1].to_string();
    if let Some(previous) = scanner.pending_caption() {
        trace!(previous, replacement = %payload, "overwriting pending caption");
    }
    scanner.set_pending_caption(payload);
    scanner.advance();
    Ok(Some(Vec::new()))
}

/// A fenced code block. Everything up to a bare closing fence is kept
/// verbatim; both fences are dropped.
pub fn code_block(scanner: &mut LineScanner) -> Recognized {
    let line = scanner.current()?;
    let Some(caps) = CODE_FENCE_RE.captures(line) else {
        return Ok(None);
    };
    let language = caps[1].to_string();
    let opened_at = scanner.current_line_number();
    scanner.advance();

    let mut lines = Vec::new();
    loop {
        if scanner.at_end() {
            return Err(ParseError::UnterminatedBlock { line: opened_at });
        }
        let line = scanner.current()?;
        if line == CODE_FENCE {
            break;
        }
        lines.push(line.to_string());
        scanner.advance();
    }
    scanner.advance();

    Ok(Some(vec![Part::CodeBlock { lines, language }]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::markdown::normalize::normalize;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn scanner(source: &str) -> LineScanner {
        LineScanner::new(normalize(source))
    }

    #[rstest]
    #[case("# Title", 1, "Title")]
    #[case("### Deep one", 3, "Deep one")]
    #[case("##\tTabbed", 2, "Tabbed")]
    fn heading_levels(#[case] source: &str, #[case] level: usize, #[case] text: &str) {
        let mut s = scanner(source);
        let parts = heading(&mut s).unwrap().unwrap();
        assert_eq!(
            parts,
            vec![Part::Heading {
                level,
                text: text.to_string()
            }]
        );
        assert_eq!(s.position(), 1);
    }

    #[rstest]
    #[case("#hashtag")]
    #[case("#")]
    #[case("plain # text")]
    fn heading_declines(#[case] source: &str) {
        let mut s = scanner(source);
        assert_eq!(heading(&mut s).unwrap(), None);
        assert_eq!(s.position(), 0);
    }

    #[test]
    fn table_with_alignments_and_body() {
        let mut s = scanner("| A | B | C |\n|:-:|:--|--:|\n| 1 | 2 | 3 |\n|4|5|6|\nafter");
        let parts = table(&mut s).unwrap().unwrap();
        assert_eq!(
            parts,
            vec![Part::Table(Table {
                header: Row::new(["A", "B", "C"]),
                alignments: vec![Alignment::Center, Alignment::Left, Alignment::Right],
                rows: vec![Row::new(["1", "2", "3"]), Row::new(["4", "5", "6"])],
                caption: None,
            })]
        );
        assert_eq!(s.current().unwrap(), "after");
    }

    #[test]
    fn table_takes_pending_caption() {
        let mut s = scanner("| A |\n| --- |");
        s.set_pending_caption("Results");
        let parts = table(&mut s).unwrap().unwrap();
        let Part::Table(t) = &parts[0] else {
            panic!("expected a table");
        };
        assert_eq!(t.caption.as_deref(), Some("Results"));
        assert_eq!(s.pending_caption(), None);
    }

    #[test]
    fn table_declines_without_touching_caption() {
        let mut s = scanner("not | a table |");
        s.set_pending_caption("kept");
        assert_eq!(table(&mut s).unwrap(), None);
        assert_eq!(s.position(), 0);
        assert_eq!(s.pending_caption(), Some("kept"));
    }

    #[test]
    fn table_header_with_spaced_first_cell_is_not_a_row() {
        let mut s = scanner("| two words | x |\n|---|---|");
        assert_eq!(table(&mut s).unwrap(), None);
    }

    #[test]
    fn itemize_stops_at_first_non_item() {
        let mut s = scanner("+ a\n+ b\nplain text");
        let parts = itemize(&mut s).unwrap().unwrap();
        assert_eq!(
            parts,
            vec![Part::ItemizedList(vec!["a".to_string(), "b".to_string()])]
        );
        assert_eq!(s.current().unwrap(), "plain text");
    }

    #[test]
    fn itemize_mixes_numbered_and_bulleted() {
        let mut s = scanner("1. first item\n+ second\n10. third");
        let parts = itemize(&mut s).unwrap().unwrap();
        assert_eq!(
            parts,
            vec![Part::ItemizedList(vec![
                "first item".to_string(),
                "second".to_string(),
                "third".to_string()
            ])]
        );
    }

    #[rstest]
    #[case("- dash")]
    #[case("+")]
    #[case("3.14 is pi")]
    fn itemize_declines(#[case] source: &str) {
        let mut s = scanner(source);
        assert_eq!(itemize(&mut s).unwrap(), None);
        assert_eq!(s.position(), 0);
    }

    #[test]
    fn image_uses_alt_as_caption() {
        let mut s = scanner("![diagram](figs/arch.png)");
        assert_eq!(
            image(&mut s).unwrap().unwrap(),
            vec![Part::Image {
                path: "figs/arch.png".to_string(),
                caption: "diagram".to_string()
            }]
        );
        assert_eq!(s.position(), 1);
    }

    #[test]
    fn image_requires_non_empty_groups() {
        let mut s = scanner("![](x.png)");
        assert_eq!(image(&mut s).unwrap(), None);
    }

    #[rstest]
    #[case("<meta>Caption</meta>", "Caption")]
    #[case("< META >Spaced tags< / Meta >", "Spaced tags")]
    #[case("<meta>\tpadded</meta>", "padded")]
    #[case("<meta>trailing </meta>", "trailing ")]
    fn meta_sets_pending_caption(#[case] source: &str, #[case] expected: &str) {
        let mut s = scanner(source);
        assert_eq!(meta(&mut s).unwrap(), Some(Vec::new()));
        assert_eq!(s.pending_caption(), Some(expected));
        assert_eq!(s.position(), 1);
    }

    #[test]
    fn code_block_excludes_fences() {
        let mut s = scanner("```python\nx = 1\ny = 2\n```\nafter");
        assert_eq!(
            code_block(&mut s).unwrap().unwrap(),
            vec![Part::CodeBlock {
                lines: vec!["x = 1".to_string(), "y = 2".to_string()],
                language: "python".to_string()
            }]
        );
        assert_eq!(s.current().unwrap(), "after");
    }

    #[test]
    fn code_block_keeps_blank_lines_and_allows_no_language() {
        let mut s = scanner("```\nfirst\n\nsecond\n```");
        assert_eq!(
            code_block(&mut s).unwrap().unwrap(),
            vec![Part::CodeBlock {
                lines: vec!["first".to_string(), String::new(), "second".to_string()],
                language: String::new()
            }]
        );
    }

    #[test]
    fn unterminated_code_block_is_fatal() {
        let mut s = scanner("text\n```rust\nfn main() {}");
        s.advance();
        assert_eq!(
            code_block(&mut s),
            Err(ParseError::UnterminatedBlock { line: 2 })
        );
    }
}
