use pretty_assertions::assert_eq;
use stock_core::AnalysisResult;
use stock_render::{Block, Dashboard, Hyperlink, SourceEntry, SourcesPanel, StyleClass};

fn hyperlink(label: &str, url: &str) -> Hyperlink {
    Hyperlink {
        label: label.to_string(),
        url: url.to_string(),
    }
}

#[test]
fn document_without_links_has_no_sources_panel() {
    let dashboard = Dashboard::build(&AnalysisResult::new("# Title\n\nBody text."));

    let headings: Vec<_> = dashboard
        .document
        .blocks
        .iter()
        .filter(|block| block.style() == StyleClass::HeadingLarge)
        .collect();
    assert_eq!(headings.len(), 1);
    assert!(matches!(
        headings[0],
        Block::Heading { level: 1, content } if stock_render::Inline::plain_text(content) == "Title"
    ));

    let paragraphs: Vec<_> = dashboard
        .document
        .blocks
        .iter()
        .filter(|block| block.style() == StyleClass::Body)
        .collect();
    assert_eq!(paragraphs.len(), 1);
    assert!(dashboard.sources.is_none());
}

#[test]
fn links_are_listed_below_the_document() {
    let content = "\
# AAPL

Analysts are bullish, see [Reuters](https://reuters.com/aapl) and
[Bloomberg](https://bloomberg.com/aapl). Also [Reuters](https://reuters.com/aapl).
";
    let dashboard = Dashboard::build(&AnalysisResult::new(content));
    let sources = dashboard.sources.expect("sources panel");

    assert_eq!(
        sources.entries(),
        &[
            SourceEntry {
                text: "Reuters".to_string(),
                url: "https://reuters.com/aapl".to_string(),
            },
            SourceEntry {
                text: "Bloomberg".to_string(),
                url: "https://bloomberg.com/aapl".to_string(),
            },
            SourceEntry {
                text: "Reuters".to_string(),
                url: "https://reuters.com/aapl".to_string(),
            },
        ]
    );
}

#[test]
fn sources_panel_is_absent_for_no_links() {
    assert_eq!(SourcesPanel::from_links(&[]), None);
}

#[test]
fn sources_panel_has_one_entry_per_link_in_order() {
    let links = vec![
        hyperlink("b", "https://b.example"),
        hyperlink("a", "https://a.example"),
    ];
    let panel = SourcesPanel::from_links(&links).expect("panel");

    let urls: Vec<_> = panel.entries().iter().map(|e| e.url.as_str()).collect();
    assert_eq!(urls, vec!["https://b.example", "https://a.example"]);
    assert_eq!(panel.title_style(), StyleClass::HeadingMedium);
    assert_eq!(panel.list_style(), StyleClass::BulletList);
    assert_eq!(panel.link_style(), StyleClass::Link);
}

#[test]
fn empty_label_falls_back_to_url() {
    let panel = SourcesPanel::from_links(&[hyperlink("", "https://x.example")]).expect("panel");
    assert_eq!(panel.entries()[0].text, "https://x.example");
}

#[test]
fn malformed_content_still_produces_output() {
    let dashboard = Dashboard::build(&AnalysisResult::new("| a | b |\n|--\n| [x](https://x.io"));
    assert!(!dashboard.document.is_empty());
    assert!(dashboard.sources.is_none());
}
