//! End-to-end conversion tests: HTML in, `Document` out.

use quire::{
    Block, ConvertOptions, Converter, Element, Error, FallthroughSerializer, HyperlinkTarget,
    Inline, ListMarker, Paragraph, Result, Role, SerializeContext, SerializerRegistry, TableCell,
    TagSerializer, TextStyle, convert_html,
};

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture(name: &str) -> String {
    std::fs::read_to_string(format!("{}/{}", FIXTURES_DIR, name)).expect("fixture should exist")
}

fn blocks(html: &str) -> Vec<Block> {
    let doc = convert_html(html).expect("conversion should succeed");
    assert_eq!(doc.sections.len(), 1);
    doc.sections.into_iter().next().unwrap().children
}

fn paragraphs(html: &str) -> Vec<Paragraph> {
    blocks(html)
        .into_iter()
        .map(|block| match block {
            Block::Paragraph(p) => p,
            other => panic!("expected paragraph, got {other:?}"),
        })
        .collect()
}

fn run(text: &str) -> Inline {
    Inline::run(text, TextStyle::default())
}

fn plain(children: Vec<Inline>) -> Block {
    Block::Paragraph(Paragraph::new(children))
}

/// Every inline in document order, descending into links and bookmarks.
fn walk_inlines<'a>(inlines: &'a [Inline], out: &mut Vec<&'a Inline>) {
    for inline in inlines {
        out.push(inline);
        if let Inline::Hyperlink { children, .. } | Inline::Bookmark { children, .. } = inline {
            walk_inlines(children, out);
        }
    }
}

fn all_paragraphs(blocks: &[Block]) -> Vec<&Paragraph> {
    let mut out = Vec::new();
    for block in blocks {
        match block {
            Block::Paragraph(p) => out.push(p),
            Block::Table(table) => {
                for cell in table.rows.iter().flat_map(|r| r.cells.iter()) {
                    out.extend(all_paragraphs(&cell.children));
                }
            }
        }
    }
    out
}

// ============================================================================
// Paragraphs and Runs
// ============================================================================

#[test]
fn test_paragraph_with_styled_run() {
    assert_eq!(
        blocks("<p>Hello <b>World</b></p>"),
        vec![plain(vec![
            run("Hello "),
            Inline::run("World", TextStyle::bold()),
        ])]
    );
}

#[test]
fn test_nested_modifiers_merge() {
    let paras = paragraphs("<p><i>a<b>b<u>c</u></b></i></p>");
    let styles: Vec<_> = paras[0]
        .children
        .iter()
        .map(|inline| match inline {
            Inline::Run { style, .. } => style.clone(),
            other => panic!("unexpected {other:?}"),
        })
        .collect();

    assert_eq!(styles[0], TextStyle::italics());
    assert_eq!(styles[1], TextStyle::italics().with_bold(true));
    assert_eq!(
        styles[2],
        TextStyle {
            bold: Some(true),
            italics: Some(true),
            underline: Some(true),
            ..TextStyle::default()
        }
    );
}

#[test]
fn test_block_inside_inline_inherits_style() {
    // The paragraph is lifted out of <b> but keeps its bold.
    assert_eq!(
        blocks("<b>before<p>inside</p>after</b>"),
        vec![
            plain(vec![Inline::run("before", TextStyle::bold())]),
            plain(vec![Inline::run("inside", TextStyle::bold())]),
            plain(vec![Inline::run("after", TextStyle::bold())]),
        ]
    );
}

#[test]
fn test_stray_inline_runs_are_wrapped() {
    let paras = paragraphs("Hello <b>World</b><p>x</p>tail");
    let texts: Vec<_> = paras.iter().map(Paragraph::text).collect();
    assert_eq!(texts, vec!["Hello World", "x", "tail"]);
}

#[test]
fn test_adjacent_blocks_have_no_empty_paragraph_between() {
    let paras = paragraphs("<div><p>1</p><p>2</p></div>");
    let texts: Vec<_> = paras.iter().map(Paragraph::text).collect();
    assert_eq!(texts, vec!["1", "2"]);
}

#[test]
fn test_formatting_whitespace_is_vacuumed() {
    let html = "<div>\n  <p>one</p>\n  <p>two</p>\n</div>\n";
    let texts: Vec<_> = paragraphs(html).iter().map(Paragraph::text).collect();
    assert_eq!(texts, vec!["one", "two"]);
}

#[test]
fn test_without_vacuum_wrappers_become_paragraphs() {
    let registry = SerializerRegistry::standard().unwrap();
    let converter =
        Converter::with_config(registry, ConvertOptions::default().with_vacuum(false));

    let doc = converter.convert("<div><p>1</p></div>").unwrap();
    assert_eq!(
        doc.sections[0].children,
        vec![plain(vec![]), plain(vec![run("1")])]
    );
}

#[test]
fn test_line_break() {
    assert_eq!(
        blocks("<p>a<br>b</p>"),
        vec![plain(vec![run("a"), Inline::Break, run("b")])]
    );
}

#[test]
fn test_empty_paragraph_is_kept() {
    assert_eq!(blocks("<p></p>"), vec![plain(vec![])]);
}

// ============================================================================
// Headings and Lists
// ============================================================================

#[test]
fn test_heading_levels() {
    let levels: Vec<_> = paragraphs("<h1>a</h1><h3>b</h3><p>c</p>")
        .iter()
        .map(|p| p.heading)
        .collect();
    assert_eq!(levels, vec![Some(1), Some(3), None]);
}

#[test]
fn test_nested_lists() {
    let paras = paragraphs("<ul><li>one</li><li>two<ol><li>nested</li></ol></li></ul>");

    let items: Vec<_> = paras.iter().map(|p| (p.text(), p.list)).collect();
    assert_eq!(
        items,
        vec![
            (
                "one".to_string(),
                Some(ListMarker {
                    ordered: false,
                    level: 0
                })
            ),
            (
                "two".to_string(),
                Some(ListMarker {
                    ordered: false,
                    level: 0
                })
            ),
            (
                "nested".to_string(),
                Some(ListMarker {
                    ordered: true,
                    level: 1
                })
            ),
        ]
    );
}

#[test]
fn test_pretty_printed_list_has_no_blank_items() {
    let html = "<ul>\n  <li>a\n    <ul>\n      <li>b</li>\n    </ul>\n  </li>\n  <li>c</li>\n</ul>";
    let paras = paragraphs(html);
    let texts: Vec<_> = paras.iter().map(|p| p.text().trim().to_string()).collect();
    assert_eq!(texts, vec!["a", "b", "c"]);
}

// ============================================================================
// Links and Bookmarks
// ============================================================================

#[test]
fn test_hyperlinks_and_bookmarks() {
    let paras = paragraphs(
        r##"<h2 id="results">Results</h2><p>See <a href="#results">table</a> and <a href="https://example.com">site</a>.</p>"##,
    );

    assert_eq!(
        paras[0].children,
        vec![Inline::Bookmark {
            id: "results".to_string(),
            children: vec![run("Results")],
        }]
    );
    assert_eq!(
        paras[1].children,
        vec![
            run("See "),
            Inline::Hyperlink {
                target: HyperlinkTarget::Internal("results".to_string()),
                children: vec![run("table")],
            },
            run(" and "),
            Inline::Hyperlink {
                target: HyperlinkTarget::External("https://example.com".to_string()),
                children: vec![run("site")],
            },
            run("."),
        ]
    );
}

#[test]
fn test_anchor_without_href_keeps_text() {
    assert_eq!(
        blocks(r#"<p><a name="old">text</a></p>"#),
        vec![plain(vec![run("text")])]
    );
}

#[test]
fn test_bare_fragment_link_keeps_text() {
    assert_eq!(
        blocks(r##"<p><a href="#">top</a></p>"##),
        vec![plain(vec![run("top")])]
    );
}

#[test]
fn test_split_element_is_bookmarked_once() {
    assert_eq!(
        blocks(r#"<div id="d">a<p>b</p>c</div>"#),
        vec![
            plain(vec![Inline::Bookmark {
                id: "d".to_string(),
                children: vec![run("a")],
            }]),
            plain(vec![run("b")]),
            plain(vec![run("c")]),
        ]
    );
}

#[test]
fn test_repeated_id_is_bookmarked_once() {
    let paras = paragraphs(r#"<p id="x">one</p><p id="x">two</p>"#);
    assert!(matches!(&paras[0].children[..], [Inline::Bookmark { id, .. }] if id == "x"));
    assert_eq!(paras[1].children, vec![run("two")]);
}

// ============================================================================
// Tables
// ============================================================================

#[test]
fn test_simple_table() {
    let result = blocks("<table><tr><th>Name</th><td>Value <i>x</i></td></tr></table>");

    let [Block::Table(table)] = &result[..] else {
        panic!("expected a single table, got {result:?}");
    };
    assert_eq!(table.rows.len(), 1);
    assert_eq!(
        table.rows[0].cells,
        vec![
            TableCell {
                header: true,
                children: vec![plain(vec![run("Name")])],
            },
            TableCell {
                header: false,
                children: vec![plain(vec![
                    run("Value "),
                    Inline::run("x", TextStyle::italics()),
                ])],
            },
        ]
    );
}

#[test]
fn test_cells_keep_nested_blocks() {
    let result = blocks("<table><tr><td>lead<p>a</p><div><p>b</p></div></td></tr></table>");

    let [Block::Table(table)] = &result[..] else {
        panic!("expected a single table");
    };
    let cell = &table.rows[0].cells[0];
    let texts: Vec<_> = all_paragraphs(&cell.children)
        .iter()
        .map(|p| p.text())
        .collect();
    assert_eq!(texts, vec!["lead", "a", "b"]);
}

#[test]
fn test_table_inside_inline_is_lifted() {
    let result = blocks("<span>before<table><tr><td>x</td></tr></table>after</span>");
    let kinds: Vec<_> = result
        .iter()
        .map(|b| match b {
            Block::Paragraph(_) => "p",
            Block::Table(_) => "table",
        })
        .collect();
    assert_eq!(kinds, vec!["p", "table", "p"]);
}

#[test]
fn test_nested_table() {
    let result = blocks(
        "<table><tr><td><table><tr><td>inner</td></tr></table></td></tr></table>",
    );
    let [Block::Table(outer)] = &result[..] else {
        panic!("expected a single table");
    };
    let [Block::Table(inner)] = &outer.rows[0].cells[0].children[..] else {
        panic!("expected a nested table");
    };
    assert_eq!(
        inner.rows[0].cells[0].children,
        vec![plain(vec![run("inner")])]
    );
}

#[test]
fn test_pretty_printed_table() {
    let html = "<table>\n  <thead>\n    <tr><th>h</th></tr>\n  </thead>\n  <tbody>\n    <tr>\n      <td>\n        <p>a</p>\n      </td>\n    </tr>\n  </tbody>\n</table>";
    let result = blocks(html);
    let [Block::Table(table)] = &result[..] else {
        panic!("expected a single table");
    };
    assert_eq!(table.rows.len(), 2);
    assert!(table.rows[0].cells[0].header);
    assert_eq!(table.rows[1].cells[0].children, vec![plain(vec![run("a")])]);
}

#[test]
fn test_text_misplaced_in_table_comes_first() {
    let doc = convert_html("<p>before</p><table>stray<tr><td>a</td></tr></table>").unwrap();
    assert_eq!(doc.plain_text(), "before\nstray\na");
}

// ============================================================================
// Errors and Configuration
// ============================================================================

#[test]
fn test_nesting_limit() {
    let deep = format!("{}x{}", "<div>".repeat(600), "</div>".repeat(600));
    match convert_html(&deep) {
        Err(Error::NestingTooDeep { limit, .. }) => assert_eq!(limit, 512),
        other => panic!("expected NestingTooDeep, got {other:?}"),
    }

    let shallow = format!("{}x{}", "<div>".repeat(300), "</div>".repeat(300));
    assert_eq!(convert_html(&shallow).unwrap().plain_text(), "x");
}

#[test]
fn test_convert_bytes_legacy_encoding() {
    let converter = Converter::new().unwrap();
    let doc = converter.convert_bytes(b"<p>caf\xe9 \x80</p>").unwrap();
    assert_eq!(doc.plain_text(), "caf\u{e9} \u{20ac}");
}

#[test]
fn test_conversion_is_deterministic() {
    let html = fixture("article.html");
    let converter = Converter::new().unwrap();
    assert_eq!(
        converter.convert(&html).unwrap(),
        converter.convert(&html).unwrap()
    );
}

// ============================================================================
// Custom Serializers
// ============================================================================

/// `blockquote` → italic paragraph.
struct QuoteSerializer;

impl TagSerializer for QuoteSerializer {
    fn name(&self) -> &'static str {
        "quote"
    }

    fn selector(&self) -> &str {
        "blockquote"
    }

    fn role(&self) -> Role {
        Role::Block
    }

    fn modifiers(&self, _elem: quire::ElementRef<'_>) -> Option<TextStyle> {
        Some(TextStyle::italics())
    }

    fn serialize(
        &self,
        _ctx: &SerializeContext<'_>,
        children: Vec<Element>,
    ) -> Result<Vec<Element>> {
        let children = children
            .into_iter()
            .filter_map(|child| match child {
                Element::Inline(inline) => Some(inline),
                _ => None,
            })
            .collect();
        let paragraph = Paragraph::new(children);
        Ok(vec![Element::Block(Block::Paragraph(paragraph))])
    }
}

/// Appends a marker run to anything with class `note`.
struct NoteMarker;

impl FallthroughSerializer for NoteMarker {
    fn name(&self) -> &'static str {
        "note-marker"
    }

    fn selector(&self) -> &str {
        ".note"
    }

    fn serialize(
        &self,
        ctx: &SerializeContext<'_>,
        mut children: Vec<Element>,
    ) -> Result<Vec<Element>> {
        children.push(Element::Inline(Inline::run(" [note]", ctx.style().clone())));
        Ok(children)
    }
}

#[test]
fn test_custom_serializers_take_precedence() {
    let mut registry = SerializerRegistry::new();
    registry
        .register(QuoteSerializer)
        .unwrap()
        .register_fallthrough(NoteMarker)
        .unwrap()
        .register_standard()
        .unwrap();
    let converter = Converter::with_config(registry, ConvertOptions::default());

    let doc = converter
        .convert(r#"<blockquote>wise <b>words</b></blockquote><p class="note">see</p>"#)
        .unwrap();

    assert_eq!(
        doc.sections[0].children,
        vec![
            plain(vec![
                Inline::run("wise ", TextStyle::italics()),
                Inline::run("words", TextStyle::italics().with_bold(true)),
            ]),
            plain(vec![run("see"), run(" [note]")]),
        ]
    );
}

#[test]
fn test_invalid_custom_selector() {
    struct Broken;

    impl TagSerializer for Broken {
        fn name(&self) -> &'static str {
            "broken"
        }

        fn selector(&self) -> &str {
            "p >>> q"
        }

        fn role(&self) -> Role {
            Role::Block
        }

        fn serialize(
            &self,
            _ctx: &SerializeContext<'_>,
            children: Vec<Element>,
        ) -> Result<Vec<Element>> {
            Ok(children)
        }
    }

    let mut registry = SerializerRegistry::new();
    assert!(matches!(
        registry.register(Broken),
        Err(Error::InvalidSelector { .. })
    ));
}

// ============================================================================
// Fixture
// ============================================================================

#[test]
fn test_article_fixture() {
    let doc = convert_html(&fixture("article.html")).unwrap();
    let blocks = &doc.sections[0].children;
    let text = doc.plain_text();

    // Non-content is gone
    for hidden in [
        "analytics",
        "generated by",
        "unused row template",
        "Enable scripts",
        "font-family",
    ] {
        assert!(!text.contains(hidden), "{hidden:?} leaked into output");
    }
    assert!(text.contains("Revenue grew in every region this quarter."));
    assert!(text.contains("Figures are unaudited."));

    // No paragraph is left without visible content
    for p in all_paragraphs(blocks) {
        assert!(
            !p.text().trim().is_empty(),
            "blank paragraph in {blocks:#?}"
        );
    }

    let headings: Vec<_> = all_paragraphs(blocks).iter().filter_map(|p| p.heading).collect();
    assert_eq!(headings, vec![1, 2, 2]);

    let list_items: Vec<_> = all_paragraphs(blocks).iter().filter_map(|p| p.list).collect();
    assert_eq!(list_items.len(), 5);
    assert_eq!(
        list_items
            .iter()
            .filter(|m| m.ordered && m.level == 1)
            .count(),
        2
    );

    let tables: Vec<_> = blocks
        .iter()
        .filter_map(|b| match b {
            Block::Table(t) => Some(t),
            _ => None,
        })
        .collect();
    assert_eq!(tables.len(), 1);
    let table = tables[0];
    assert_eq!(table.rows.len(), 3);
    assert!(table.rows[0].cells.iter().all(|c| c.header));
    assert!(table.rows[1].cells.iter().all(|c| !c.header));
    assert_eq!(table.rows[2].cells[1].children.len(), 2);

    let mut inlines = Vec::new();
    for p in all_paragraphs(blocks) {
        walk_inlines(&p.children, &mut inlines);
    }

    let internal_links: Vec<_> = inlines
        .iter()
        .filter_map(|i| match i {
            Inline::Hyperlink {
                target: HyperlinkTarget::Internal(id),
                ..
            } => Some(id.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(internal_links, vec!["results"]);

    let bookmarks: Vec<_> = inlines
        .iter()
        .filter_map(|i| match i {
            Inline::Bookmark { id, .. } => Some(id.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(bookmarks, vec!["top", "highlights", "results"]);

    let styled = |text: &str| {
        inlines.iter().find_map(|i| match i {
            Inline::Run { text: t, style } if t == text => Some(style.clone()),
            _ => None,
        })
    };
    assert_eq!(styled("2").and_then(|s| s.subscript), Some(true));
    assert_eq!(styled("1").and_then(|s| s.superscript), Some(true));
    assert_eq!(
        styled("report --refresh").and_then(|s| s.monospace),
        Some(true)
    );
    assert_eq!(styled("1.0M").and_then(|s| s.strike), Some(true));
    assert!(inlines.iter().any(|i| matches!(i, Inline::Break)));
}
