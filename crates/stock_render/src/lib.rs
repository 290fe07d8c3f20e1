//! Stock dashboard rendering: Markdown to presentation tree, link extraction,
//! sources panel and HTML export.
mod dashboard;
mod document;
mod html;
mod links;
mod markdown;
mod sources;
mod style;

pub use dashboard::Dashboard;
pub use document::{Align, Block, Document, Inline, ListItem, Table, TableCell, TableRow};
pub use html::{render_dashboard, render_page, FOOTER_TEXT, PAGE_TITLE, STYLESHEET};
pub use links::{extract_hyperlinks, Hyperlink};
pub use markdown::render_markdown;
pub use sources::{SourceEntry, SourcesPanel};
pub use style::{safe_href, style_for, Construct, StyleClass, LINK_REL, LINK_TARGET};
