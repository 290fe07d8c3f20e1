use stock_core::AnalysisResult;

use crate::document::Document;
use crate::links::{extract_hyperlinks, Hyperlink};
use crate::markdown::render_markdown;
use crate::sources::SourcesPanel;

/// Rendered analysis: the document, with the sources panel below it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub document: Document,
    pub sources: Option<SourcesPanel>,
}

impl Dashboard {
    pub fn build(result: &AnalysisResult) -> Self {
        let content = result.content();
        let document = render_markdown(content);
        let links: Vec<Hyperlink> = extract_hyperlinks(content);
        Self {
            document,
            sources: SourcesPanel::from_links(&links),
        }
    }
}
