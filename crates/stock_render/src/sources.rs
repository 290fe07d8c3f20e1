use crate::links::Hyperlink;
use crate::style::{style_for, Construct, StyleClass};

/// One line of the sources panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    /// Visible text: the link label, or the URL when the label is empty.
    pub text: String,
    pub url: String,
}

/// Supplementary list of every link found in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcesPanel {
    entries: Vec<SourceEntry>,
}

impl SourcesPanel {
    pub const TITLE: &'static str = "Sources";

    /// Builds the panel, or `None` when there is nothing to list.
    pub fn from_links(links: &[Hyperlink]) -> Option<Self> {
        if links.is_empty() {
            return None;
        }
        let entries = links
            .iter()
            .map(|link| SourceEntry {
                text: if link.label.is_empty() {
                    link.url.clone()
                } else {
                    link.label.clone()
                },
                url: link.url.clone(),
            })
            .collect();
        Some(Self { entries })
    }

    pub fn entries(&self) -> &[SourceEntry] {
        &self.entries
    }

    pub fn title_style(&self) -> StyleClass {
        style_for(Construct::Heading(3))
    }

    pub fn list_style(&self) -> StyleClass {
        style_for(Construct::UnorderedList)
    }

    pub fn link_style(&self) -> StyleClass {
        style_for(Construct::Link)
    }
}
