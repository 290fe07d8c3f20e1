use pretty_assertions::assert_eq;
use stock_render::{extract_hyperlinks, Hyperlink};

fn link(label: &str, url: &str) -> Hyperlink {
    Hyperlink {
        label: label.to_string(),
        url: url.to_string(),
    }
}

#[test]
fn empty_input_has_no_links() {
    assert!(extract_hyperlinks("").is_empty());
}

#[test]
fn malformed_constructs_are_skipped() {
    let text = "plain [not a link] (https://x.com) [x](ftp://y) [](https://a.com) \
                [a](https://has space.com) [b](example.com) [c](https://)";
    assert_eq!(extract_hyperlinks(text), Vec::<Hyperlink>::new());
}

#[test]
fn single_link_in_sentence() {
    let links = extract_hyperlinks("See [Apple 10-K](https://sec.gov/aapl) for details.");
    assert_eq!(links, vec![link("Apple 10-K", "https://sec.gov/aapl")]);
}

#[test]
fn concatenated_links_keep_order() {
    let text = "[a](https://a.com)[b](http://b.org/x?y=1)[c](https://c.net/path#frag)";
    assert_eq!(
        extract_hyperlinks(text),
        vec![
            link("a", "https://a.com"),
            link("b", "http://b.org/x?y=1"),
            link("c", "https://c.net/path#frag"),
        ]
    );
}

#[test]
fn repeated_links_are_reported_per_occurrence() {
    let text = "[News](https://n.example) and again [News](https://n.example).";
    assert_eq!(
        extract_hyperlinks(text),
        vec![
            link("News", "https://n.example"),
            link("News", "https://n.example"),
        ]
    );
}

#[test]
fn url_ends_at_first_closing_paren() {
    let links = extract_hyperlinks("[wiki](https://en.wikipedia.org/wiki/Apple_(company))");
    assert_eq!(
        links,
        vec![link("wiki", "https://en.wikipedia.org/wiki/Apple_(company")]
    );
}

#[test]
fn links_inside_tables_and_lists_are_found() {
    let doc = "\
## Latest news

- [Reuters](https://reuters.com/aapl) reports record revenue
- Analysts at [Yahoo Finance](https://finance.yahoo.com/quote/AAPL) agree

| Source | Link |
|---|---|
| SEC | [10-Q](https://sec.gov/q) |
";
    let labels: Vec<_> = extract_hyperlinks(doc)
        .into_iter()
        .map(|link| link.label)
        .collect();
    assert_eq!(labels, vec!["Reuters", "Yahoo Finance", "10-Q"]);
}

#[test]
fn extraction_is_deterministic() {
    let text = "[x](https://x.io) [y](https://y.io)";
    assert_eq!(extract_hyperlinks(text), extract_hyperlinks(text));
}
