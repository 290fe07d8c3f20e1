//! Standalone HTML export of a dashboard.
//!
//! All document text goes through maud's escaping; raw HTML from the source
//! shows up as literal text and no script is ever emitted. Link and image
//! targets outside [`safe_href`] are left off, keeping the visible text.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::dashboard::Dashboard;
use crate::document::{Align, Block, Inline, ListItem, Table, TableCell};
use crate::sources::SourcesPanel;
use crate::style::{safe_href, style_for, Construct, LINK_REL, LINK_TARGET};

/// Site title shown in the page header.
pub const PAGE_TITLE: &str = "Stock Analysis Dashboard";

/// Copyright line shown at the bottom of every dashboard.
pub const FOOTER_TEXT: &str = "\u{a9} Stock Analysis Dashboard. All rights reserved.";

/// Styles for the `sd-*` classes from [`crate::StyleClass::css_class`].
pub const STYLESHEET: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; background: #f3f4f6; color: #111827; }
header, footer { background: #fff; padding: 1rem 2rem; }
header { box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05); }
footer { border-top: 1px solid #e5e7eb; color: #6b7280; font-size: 0.875rem; }
main { max-width: 56rem; margin: 2rem auto; background: #fff; padding: 2rem; border-radius: 0.5rem; box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1); }
.sd-heading-lg { font-size: 1.875rem; font-weight: 700; color: #111827; margin-bottom: 1rem; }
h2.sd-heading-lg { font-size: 1.5rem; }
.sd-heading-md { font-size: 1.25rem; font-weight: 600; color: #1f2937; margin-bottom: 1rem; }
.sd-body { font-size: 0.875rem; color: #4b5563; margin-bottom: 1rem; }
.sd-bullets { list-style: disc inside; font-size: 0.875rem; color: #4b5563; margin-bottom: 1rem; }
.sd-item { margin-bottom: 0.5rem; }
.sd-table { min-width: 100%; border-collapse: collapse; border: 1px solid #e5e7eb; margin-bottom: 1rem; }
.sd-table tbody tr:nth-child(even) { background: #f9fafb; }
.sd-thead { background: #f3f4f6; }
.sd-th { padding: 0.75rem 1rem; text-align: left; font-size: 0.875rem; font-weight: 500; color: #4b5563; text-transform: uppercase; letter-spacing: 0.05em; border-bottom: 1px solid #e5e7eb; }
.sd-td { padding: 0.75rem 1rem; font-size: 0.875rem; color: #374151; border-top: 1px solid #e5e7eb; }
.sd-link { color: #2563eb; font-weight: 500; text-decoration: none; }
.sd-link:hover { color: #1e40af; text-decoration: underline; }
.sd-sources { margin-top: 2rem; }
"#;

/// Renders the dashboard body: document first, sources panel below.
pub fn render_dashboard(dashboard: &Dashboard) -> Markup {
    html! {
        article class="sd-document" {
            @for block in &dashboard.document.blocks {
                (render_block(block))
            }
        }
        @if let Some(sources) = &dashboard.sources {
            (render_sources(sources))
        }
    }
}

/// Renders a complete HTML page for one symbol's analysis.
pub fn render_page(symbol: &str, dashboard: &Dashboard, generated_at: &str) -> String {
    let markup = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="referrer" content="no-referrer";
                title { (symbol) " | " (PAGE_TITLE) }
                style { (PreEscaped(STYLESHEET)) }
            }
            body {
                header {
                    h1 class=[style_for(Construct::Heading(3)).css_class()] { (PAGE_TITLE) }
                }
                main {
                    (render_dashboard(dashboard))
                }
                footer {
                    p { (FOOTER_TEXT) }
                    p { "Analysis for " (symbol) ", generated " (generated_at) "." }
                }
            }
        }
    };
    markup.into_string()
}

fn render_block(block: &Block) -> Markup {
    let class = block.style().css_class();
    match block {
        Block::Heading { level, content } => {
            let inner = render_inlines(content);
            match level {
                1 => html! { h1 class=[class] { (inner) } },
                2 => html! { h2 class=[class] { (inner) } },
                3 => html! { h3 class=[class] { (inner) } },
                4 => html! { h4 class=[class] { (inner) } },
                5 => html! { h5 class=[class] { (inner) } },
                _ => html! { h6 class=[class] { (inner) } },
            }
        }
        Block::Paragraph(content) => html! { p class=[class] { (render_inlines(content)) } },
        Block::Text(content) => render_inlines(content),
        Block::List { start: None, items } => html! {
            ul class=[class] {
                @for item in items { (render_item(item)) }
            }
        },
        Block::List {
            start: Some(start),
            items,
        } => html! {
            ol class=[class] start=(start) {
                @for item in items { (render_item(item)) }
            }
        },
        Block::Table(table) => render_table(table),
        Block::CodeBlock { language, code } => html! {
            pre {
                code class=[language.as_ref().map(|lang| format!("language-{lang}"))] { (code) }
            }
        },
        Block::BlockQuote(children) => html! {
            blockquote {
                @for child in children { (render_block(child)) }
            }
        },
        Block::Rule => html! { hr; },
        Block::Html(raw) => html! { pre class="sd-raw" { (raw) } },
    }
}

fn render_item(item: &ListItem) -> Markup {
    html! {
        li class=[item.style().css_class()] {
            @if let Some(done) = item.task {
                input type="checkbox" disabled checked[done];
                " "
            }
            @for block in &item.blocks { (render_block(block)) }
        }
    }
}

fn render_table(table: &Table) -> Markup {
    let table_class = style_for(Construct::Table).css_class();
    html! {
        table class=[table_class] {
            @if let Some(head) = &table.head {
                thead class=[table.head_style().css_class()] {
                    tr {
                        @for (column, cell) in head.cells.iter().enumerate() {
                            (render_cell(cell, table.alignment(column)))
                        }
                    }
                }
            }
            tbody {
                @for row in &table.rows {
                    tr {
                        @for (column, cell) in row.cells.iter().enumerate() {
                            (render_cell(cell, table.alignment(column)))
                        }
                    }
                }
            }
        }
    }
}

fn render_cell(cell: &TableCell, align: Align) -> Markup {
    let class = cell.style().css_class();
    let style = match align {
        Align::None => None,
        Align::Left => Some("text-align: left"),
        Align::Center => Some("text-align: center"),
        Align::Right => Some("text-align: right"),
    };
    if cell.header {
        html! { th class=[class] style=[style] { (render_inlines(&cell.content)) } }
    } else {
        html! { td class=[class] style=[style] { (render_inlines(&cell.content)) } }
    }
}

fn render_inlines(inlines: &[Inline]) -> Markup {
    html! {
        @for inline in inlines { (render_inline(inline)) }
    }
}

fn render_inline(inline: &Inline) -> Markup {
    match inline {
        Inline::Text(text) => html! { (text) },
        Inline::Code(code) => html! { code { (code) } },
        Inline::Emphasis(children) => html! { em { (render_inlines(children)) } },
        Inline::Strong(children) => html! { strong { (render_inlines(children)) } },
        Inline::Strikethrough(children) => html! { del { (render_inlines(children)) } },
        Inline::Link {
            url,
            title,
            content,
        } => html! {
            a href=[safe_href(url)] title=[title] target=(LINK_TARGET) rel=(LINK_REL)
                class=[inline.style().css_class()] {
                (render_inlines(content))
            }
        },
        Inline::Image { url, alt } => html! { img src=[safe_href(url)] alt=(alt); },
        Inline::SoftBreak => html! { "\n" },
        Inline::HardBreak => html! { br; },
    }
}

fn render_sources(sources: &SourcesPanel) -> Markup {
    html! {
        section class="sd-sources" {
            h3 class=[sources.title_style().css_class()] { (SourcesPanel::TITLE) }
            ul class=[sources.list_style().css_class()] {
                @for entry in sources.entries() {
                    li {
                        a href=[safe_href(&entry.url)] target=(LINK_TARGET) rel=(LINK_REL)
                            class=[sources.link_style().css_class()] {
                            (entry.text)
                        }
                    }
                }
            }
        }
    }
}
