//! Import tests for the Markdown format (Markdown → parts)

use crate::common::read_fixture;
use md2tex_babel::format::Format;
use md2tex_babel::formats::markdown::{parse_markdown_lines, MarkdownFormat};
use md2tex_babel::{FormatError, FormatRegistry, ParseError, Part};
use pretty_assertions::assert_eq;

fn md_to_parts(md: &str) -> Vec<Part> {
    MarkdownFormat.parse(md).expect("Should parse markdown").parts
}

fn text(s: &str) -> Part {
    Part::PlainText(s.to_string())
}

#[test]
fn test_kitchensink_part_kinds() {
    let parts = md_to_parts(&read_fixture("kitchensink.md"));
    let kinds: Vec<_> = parts.iter().map(Part::kind).collect();
    assert_eq!(
        kinds,
        vec![
            "heading", "text", "text", "heading", "itemize", "text", "linebreak", "text", "text",
            "table", "text", "heading", "image", "code", "text",
        ]
    );
}

#[test]
fn test_heading_levels_follow_hash_count() {
    let parts = md_to_parts("# One\n## Two\n###### Six\n");
    let levels: Vec<_> = parts
        .iter()
        .filter_map(|p| match p {
            Part::Heading { level, .. } => Some(*level),
            _ => None,
        })
        .collect();
    assert_eq!(levels, vec![1, 2, 6]);
}

#[test]
fn test_end_to_end_from_lines() {
    let doc = parse_markdown_lines(["# Title", "plain text", "![alt](img.png)"]).unwrap();
    assert_eq!(
        doc.parts,
        vec![
            Part::Heading {
                level: 1,
                text: "Title".to_string()
            },
            text("plain text"),
            Part::Image {
                path: "img.png".to_string(),
                caption: "alt".to_string()
            },
            text(""),
        ]
    );
}

#[test]
fn test_lines_with_terminators() {
    let doc = parse_markdown_lines(["+ a\n", "+ b\r\n", "plain text\n"]).unwrap();
    assert_eq!(
        doc.parts,
        vec![
            Part::ItemizedList(vec!["a".to_string(), "b".to_string()]),
            text("plain text"),
            text(""),
        ]
    );
}

#[test]
fn test_unrecognized_lines_fall_back_to_text() {
    let parts = md_to_parts("- dash list\n> quote\n*emphasis*\n![](empty.png)\n");
    assert_eq!(
        parts,
        vec![
            text("- dash list"),
            text("> quote"),
            text("*emphasis*"),
            text("![](empty.png)"),
            text(""),
        ]
    );
}

#[test]
fn test_code_fence_and_break_inside_code() {
    let parts = md_to_parts("```python\nx = 1\ny = 2\n```\n");
    assert_eq!(
        parts[0],
        Part::CodeBlock {
            lines: vec!["x = 1".to_string(), "y = 2".to_string()],
            language: "python".to_string()
        }
    );
}

#[test]
fn test_unterminated_fixture_reports_opening_line() {
    let err = MarkdownFormat
        .parse(&read_fixture("unterminated.md"))
        .unwrap_err();
    assert_eq!(
        err,
        FormatError::Parse(ParseError::UnterminatedBlock { line: 4 })
    );
}

#[test]
fn test_registry_parses_markdown() {
    let registry = FormatRegistry::default();
    let doc = registry.parse("+ only item", "markdown").unwrap();
    assert_eq!(
        doc.parts[0],
        Part::ItemizedList(vec!["only item".to_string()])
    );
}
