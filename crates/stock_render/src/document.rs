use crate::style::{style_for, Construct, StyleClass};

/// Presentation tree of one Markdown document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading {
        level: u8,
        content: Vec<Inline>,
    },
    Paragraph(Vec<Inline>),
    /// Inline run without a paragraph wrapper (tight list items).
    Text(Vec<Inline>),
    List {
        /// First number of an ordered list; `None` for bullets.
        start: Option<u64>,
        items: Vec<ListItem>,
    },
    Table(Table),
    CodeBlock {
        language: Option<String>,
        code: String,
    },
    BlockQuote(Vec<Block>),
    Rule,
    /// Raw HTML from the source, kept as literal text and never interpreted.
    Html(String),
}

impl Block {
    pub fn construct(&self) -> Construct {
        match self {
            Block::Heading { level, .. } => Construct::Heading(*level),
            Block::Paragraph(_) => Construct::Paragraph,
            Block::List { start: None, .. } => Construct::UnorderedList,
            Block::List { start: Some(_), .. } => Construct::OrderedList,
            Block::Table(_) => Construct::Table,
            _ => Construct::Other,
        }
    }

    pub fn style(&self) -> StyleClass {
        style_for(self.construct())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListItem {
    /// `Some(checked)` for task-list items.
    pub task: Option<bool>,
    pub blocks: Vec<Block>,
}

impl ListItem {
    pub fn style(&self) -> StyleClass {
        style_for(Construct::ListItem)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    None,
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    pub alignments: Vec<Align>,
    pub head: Option<TableRow>,
    pub rows: Vec<TableRow>,
}

impl Table {
    pub fn head_style(&self) -> StyleClass {
        style_for(Construct::TableHead)
    }

    pub fn alignment(&self, column: usize) -> Align {
        self.alignments.get(column).copied().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableCell {
    pub header: bool,
    pub content: Vec<Inline>,
}

impl TableCell {
    pub fn style(&self) -> StyleClass {
        if self.header {
            style_for(Construct::TableHeaderCell)
        } else {
            style_for(Construct::TableCell)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Code(String),
    Emphasis(Vec<Inline>),
    Strong(Vec<Inline>),
    Strikethrough(Vec<Inline>),
    Link {
        url: String,
        title: Option<String>,
        content: Vec<Inline>,
    },
    Image {
        url: String,
        alt: String,
    },
    SoftBreak,
    HardBreak,
}

impl Inline {
    pub fn style(&self) -> StyleClass {
        match self {
            Inline::Link { .. } => style_for(Construct::Link),
            _ => style_for(Construct::Other),
        }
    }

    /// Concatenated visible text, breaks as spaces/newlines.
    pub fn plain_text(inlines: &[Inline]) -> String {
        let mut out = String::new();
        for inline in inlines {
            inline.push_plain(&mut out);
        }
        out
    }

    fn push_plain(&self, out: &mut String) {
        match self {
            Inline::Text(text) | Inline::Code(text) => out.push_str(text),
            Inline::Emphasis(children)
            | Inline::Strong(children)
            | Inline::Strikethrough(children)
            | Inline::Link {
                content: children, ..
            } => {
                for child in children {
                    child.push_plain(out);
                }
            }
            Inline::Image { alt, .. } => out.push_str(alt),
            Inline::SoftBreak => out.push(' '),
            Inline::HardBreak => out.push('\n'),
        }
    }
}
