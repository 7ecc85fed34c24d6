//! Export tests for the LaTeX format (parts → LaTeX)

use crate::common::{fixtures_dir, read_fixture};
use insta::assert_snapshot;
use md2tex_babel::format::Format;
use md2tex_babel::formats::latex::{render_part, LatexFormat, RenderContext};
use md2tex_babel::publish::{publish, PublishArtifact, PublishSpec};
use md2tex_babel::{markdown_to_latex, parse_markdown, DocumentOptions, FormatRegistry, Part};
use std::collections::HashMap;

#[test]
fn test_kitchensink_snapshot() {
    let tex = markdown_to_latex(&read_fixture("kitchensink.md"), &DocumentOptions::default())
        .expect("kitchensink should convert");

    let mut settings = insta::Settings::clone_current();
    settings.set_prepend_module_to_snapshot(false);
    settings.set_snapshot_path(fixtures_dir().join("snapshots"));
    settings.bind(|| {
        assert_snapshot!("kitchensink", tex);
    });
}

#[test]
fn test_heading_depths() {
    let doc = parse_markdown("# A\n## B\n### C\n").unwrap();
    let ctx = RenderContext::default();
    let rendered: Vec<_> = doc.iter().map(|p| render_part(p, &ctx)).collect();
    assert_eq!(
        rendered,
        vec![
            "\\section{A}",
            "\\subsection{B}",
            "\\subsubsection{C}",
            ""
        ]
    );
}

#[test]
fn test_title_block_via_registry_options() {
    let doc = parse_markdown("Body\n").unwrap();
    let registry = FormatRegistry::default();
    let mut options = HashMap::new();
    options.insert("title".to_string(), "Notes".to_string());
    options.insert("author".to_string(), "Someone".to_string());

    let tex = registry
        .serialize_with_options(&doc, "latex", &options)
        .unwrap();
    assert_eq!(
        tex,
        "\\documentclass{jsarticle}
\\usepackage[dvipdfmx]{graphicx}
\\author{Someone}
\\title{Notes}
\\begin{document}
\\maketitle
Body

\\end{document}
"
    );
}

#[test]
fn test_table_caption_round_trip_into_latex() {
    let md = "<meta>Sizes</meta>\n| n | size |\n|:-|-:|\n| 1 | 10 |\n";
    let tex = LatexFormat::default()
        .serialize(&parse_markdown(md).unwrap())
        .unwrap();
    assert!(tex.contains("\\caption{Sizes}\n\\begin{tabular}{lr} \\hline\nn & size \\\\ \\hline\n1 & 10\n\\end{tabular}"));
}

#[test]
fn test_picture_width_option() {
    let doc = parse_markdown("![chart](chart.pdf)").unwrap();
    let result = publish(PublishSpec::new(&doc, "latex").with_option("picture-width", "0.5\\textwidth"))
        .unwrap();
    let PublishArtifact::InMemory(tex) = result.artifact else {
        panic!("expected in-memory output");
    };
    assert!(tex.contains("\\includegraphics[width=0.5\\textwidth]{chart.pdf}\n\\caption{chart}"));
}

#[test]
fn test_json_dump_of_parts() {
    let doc = parse_markdown("+ a\n").unwrap();
    let json = FormatRegistry::default().serialize(&doc, "json").unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value[0]["ItemizedList"][0], "a");
    assert_eq!(value[1]["PlainText"], "");
    assert_eq!(doc.parts[0], Part::ItemizedList(vec!["a".to_string()]));
}
