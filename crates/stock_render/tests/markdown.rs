use pretty_assertions::assert_eq;
use stock_render::{render_markdown, Align, Block, Inline, StyleClass};

fn text(value: &str) -> Inline {
    Inline::Text(value.to_string())
}

#[test]
fn heading_and_paragraph() {
    let doc = render_markdown("# Title\n\nBody text.");

    assert_eq!(
        doc.blocks,
        vec![
            Block::Heading {
                level: 1,
                content: vec![text("Title")],
            },
            Block::Paragraph(vec![text("Body text.")]),
        ]
    );
    assert_eq!(doc.blocks[0].style(), StyleClass::HeadingLarge);
    assert_eq!(doc.blocks[1].style(), StyleClass::Body);
}

#[test]
fn heading_levels_map_to_sizes() {
    let doc = render_markdown("# one\n## two\n### three\n#### four");
    let styles: Vec<_> = doc.blocks.iter().map(Block::style).collect();
    assert_eq!(
        styles,
        vec![
            StyleClass::HeadingLarge,
            StyleClass::HeadingLarge,
            StyleClass::HeadingMedium,
            StyleClass::Plain,
        ]
    );
}

#[test]
fn empty_input_renders_nothing() {
    assert!(render_markdown("").is_empty());
}

#[test]
fn table_with_head_alignment_and_link() {
    let source = "\
| Metric | Value |
|---|---:|
| P/E | 28.5 |
| Filing | [10-K](https://sec.gov/aapl) |
";
    let doc = render_markdown(source);
    assert_eq!(doc.blocks.len(), 1);
    let Block::Table(table) = &doc.blocks[0] else {
        panic!("expected a table, got {:?}", doc.blocks[0]);
    };

    assert_eq!(doc.blocks[0].style(), StyleClass::Table);
    assert_eq!(table.head_style(), StyleClass::TableHead);
    assert_eq!(table.alignments, vec![Align::None, Align::Right]);

    let head = table.head.as_ref().expect("header row");
    assert_eq!(head.cells.len(), 2);
    assert!(head.cells.iter().all(|cell| cell.header));
    assert_eq!(head.cells[0].style(), StyleClass::TableHeaderCell);
    assert_eq!(head.cells[0].content, vec![text("Metric")]);

    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0].cells[1].content, vec![text("28.5")]);
    assert_eq!(table.rows[0].cells[1].style(), StyleClass::TableCell);
    assert!(matches!(
        table.rows[1].cells[1].content.as_slice(),
        [Inline::Link { url, .. }] if url == "https://sec.gov/aapl"
    ));
}

#[test]
fn malformed_table_still_renders() {
    let doc = render_markdown("| a | b |\n| --- |\n| 1 | 2 |");
    assert!(!doc.is_empty());

    let doc = render_markdown("| a | b\n|---|---\n| 1");
    assert!(!doc.is_empty());
}

#[test]
fn unbalanced_emphasis_stays_literal() {
    let doc = render_markdown("**bold *text");
    let Block::Paragraph(content) = &doc.blocks[0] else {
        panic!("expected a paragraph");
    };
    assert_eq!(Inline::plain_text(content), "**bold *text");
}

#[test]
fn raw_html_is_kept_as_text() {
    let doc = render_markdown("<script>alert(1)</script>\n\nafter");
    assert!(matches!(&doc.blocks[0], Block::Html(raw) if raw.contains("<script>")));
    assert_eq!(doc.blocks[1], Block::Paragraph(vec![text("after")]));
}

#[test]
fn bullet_list_items() {
    let doc = render_markdown("- one\n- two");
    assert_eq!(doc.blocks[0].style(), StyleClass::BulletList);
    let Block::List { start, items } = &doc.blocks[0] else {
        panic!("expected a list");
    };
    assert_eq!(*start, None);
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].style(), StyleClass::ListItem);
    assert_eq!(items[1].blocks, vec![Block::Text(vec![text("two")])]);
}

#[test]
fn ordered_list_falls_back_to_plain() {
    let doc = render_markdown("3. a\n4. b");
    assert!(matches!(&doc.blocks[0], Block::List { start: Some(3), items } if items.len() == 2));
    assert_eq!(doc.blocks[0].style(), StyleClass::Plain);
}

#[test]
fn task_list_markers() {
    let doc = render_markdown("- [x] done\n- [ ] todo");
    let Block::List { items, .. } = &doc.blocks[0] else {
        panic!("expected a list");
    };
    let tasks: Vec<_> = items.iter().map(|item| item.task).collect();
    assert_eq!(tasks, vec![Some(true), Some(false)]);
}

#[test]
fn links_carry_url_and_title() {
    let doc = render_markdown("[Apple](https://apple.com \"Home\")");
    let Block::Paragraph(content) = &doc.blocks[0] else {
        panic!("expected a paragraph");
    };
    assert_eq!(
        content[0],
        Inline::Link {
            url: "https://apple.com".to_string(),
            title: Some("Home".to_string()),
            content: vec![text("Apple")],
        }
    );
    assert_eq!(content[0].style(), StyleClass::Link);
}

#[test]
fn inline_formatting() {
    let doc = render_markdown("~~old~~ **new** *maybe* `code`");
    let Block::Paragraph(content) = &doc.blocks[0] else {
        panic!("expected a paragraph");
    };
    assert_eq!(
        content,
        &vec![
            Inline::Strikethrough(vec![text("old")]),
            text(" "),
            Inline::Strong(vec![text("new")]),
            text(" "),
            Inline::Emphasis(vec![text("maybe")]),
            text(" "),
            Inline::Code("code".to_string()),
        ]
    );
}

#[test]
fn fenced_code_block_keeps_language() {
    let doc = render_markdown("```rust\nfn main() {}\n```\n");
    assert_eq!(
        doc.blocks,
        vec![Block::CodeBlock {
            language: Some("rust".to_string()),
            code: "fn main() {}\n".to_string(),
        }]
    );
}

#[test]
fn block_quote_nests_blocks() {
    let doc = render_markdown("> quoted\n\n---");
    assert_eq!(
        doc.blocks,
        vec![
            Block::BlockQuote(vec![Block::Paragraph(vec![text("quoted")])]),
            Block::Rule,
        ]
    );
}
