use md2tex_babel::format::Format;
use md2tex_babel::formats::markdown::MarkdownFormat;
use md2tex_babel::{Alignment, Part, Row, Table};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn first_table(md: &str) -> Table {
    let doc = MarkdownFormat.parse(md).expect("Failed to parse markdown");
    doc.parts
        .into_iter()
        .find_map(|part| match part {
            Part::Table(t) => Some(t),
            _ => None,
        })
        .expect("Should have table")
}

#[rstest]
#[case("|:---:|", Alignment::Center)]
#[case("|:---|", Alignment::Left)]
#[case("|---|", Alignment::Right)]
#[case("|---:|", Alignment::Right)]
fn test_alignment_row(#[case] alignment_row: &str, #[case] expected: Alignment) {
    let table = first_table(&format!("| H |\n{alignment_row}\n| v |\n"));
    assert_eq!(table.alignments, vec![expected]);
}

#[test]
fn test_table_alignment_import() {
    let md = r#"| Left | Center | Right |
| :--- | :----: | ----: |
| L    | C      | R     |
"#;
    let table = first_table(md);
    assert_eq!(table.header, Row::new(["Left", "Center", "Right"]));
    assert_eq!(
        table.alignments,
        vec![Alignment::Left, Alignment::Center, Alignment::Right]
    );
    assert_eq!(table.rows, vec![Row::new(["L", "C", "R"])]);
}

#[test]
fn test_alignment_count_follows_alignment_row() {
    let table = first_table("| a | b | c |\n|:-:|\n| 1 | 2 | 3 |\n");
    assert_eq!(table.header.len(), 3);
    assert_eq!(table.alignments, vec![Alignment::Center]);
}

#[test]
fn test_table_stops_at_first_non_row() {
    let md = "| a |\n|---|\n| 1 |\nafter the table\n| 2 |\n";
    let doc = MarkdownFormat.parse(md).unwrap();
    let Part::Table(table) = &doc.parts[0] else {
        panic!("expected a table first");
    };
    assert_eq!(table.rows, vec![Row::new(["1"])]);
    assert_eq!(doc.parts[1], Part::PlainText("after the table".to_string()));
}

#[test]
fn test_caption_from_meta() {
    let md = "<meta>Results</meta>\n\nSome words.\n| a |\n|---|\n";
    let table = first_table(md);
    assert_eq!(table.caption.as_deref(), Some("Results"));
}

#[test]
fn test_second_meta_overwrites_first() {
    let md = "<meta>Old</meta>\n<meta>New</meta>\n| a |\n|---|\n";
    assert_eq!(first_table(md).caption.as_deref(), Some("New"));
}
