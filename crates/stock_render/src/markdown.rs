use pulldown_cmark::{Alignment, CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag};

use crate::document::{Align, Block, Document, Inline, ListItem, Table, TableCell, TableRow};

/// Parses Markdown (CommonMark plus tables, strikethrough and task lists) into
/// a presentation tree.
///
/// Never fails: malformed input is recovered by the parser, and anything still
/// open at end of input is closed. Raw HTML is kept as literal text.
pub fn render_markdown(source: &str) -> Document {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let mut builder = TreeBuilder::new();
    for event in Parser::new_ext(source, options) {
        match event {
            Event::Start(tag) => builder.start(tag),
            Event::End(_) => builder.end(),
            Event::Text(text) => builder.text(&text),
            Event::Code(code) => builder.inline(Inline::Code(code.into_string())),
            Event::Html(html) => builder.html(&html),
            Event::InlineHtml(html) => builder.text(&html),
            Event::FootnoteReference(name) => builder.text(&format!("[^{name}]")),
            Event::SoftBreak => builder.inline(Inline::SoftBreak),
            Event::HardBreak => builder.inline(Inline::HardBreak),
            Event::Rule => builder.block(Block::Rule),
            Event::TaskListMarker(done) => builder.task_marker(done),
            _ => {}
        }
    }
    builder.finish()
}

enum Container {
    Root,
    Quote,
    Item { task: Option<bool> },
    /// Unsupported block tags; children are spliced into the parent.
    Passthrough,
}

enum Span {
    Paragraph,
    Heading(u8),
    Cell,
    Emphasis,
    Strong,
    Strikethrough,
    Link { url: String, title: Option<String> },
    Image { url: String },
}

enum Frame {
    Blocks {
        container: Container,
        blocks: Vec<Block>,
        loose: Vec<Inline>,
    },
    List {
        start: Option<u64>,
        items: Vec<ListItem>,
    },
    Table(Table),
    Row {
        header: bool,
        cells: Vec<TableCell>,
    },
    Inlines {
        span: Span,
        content: Vec<Inline>,
    },
    Code {
        language: Option<String>,
        code: String,
    },
    Html(String),
}

impl Frame {
    fn blocks(container: Container) -> Self {
        Frame::Blocks {
            container,
            blocks: Vec::new(),
            loose: Vec::new(),
        }
    }

    fn span(span: Span) -> Self {
        Frame::Inlines {
            span,
            content: Vec::new(),
        }
    }
}

/// What a closed frame hands to its parent.
enum Finished {
    Block(Block),
    Blocks(Vec<Block>),
    Inline(Inline),
    Item(ListItem),
    Cell(TableCell),
    Row { header: bool, row: TableRow },
}

struct TreeBuilder {
    stack: Vec<Frame>,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            stack: vec![Frame::blocks(Container::Root)],
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        let frame = match tag {
            Tag::Paragraph => Frame::span(Span::Paragraph),
            Tag::Heading { level, .. } => Frame::span(Span::Heading(heading_level(level))),
            Tag::BlockQuote(..) => Frame::blocks(Container::Quote),
            Tag::CodeBlock(kind) => Frame::Code {
                language: match kind {
                    CodeBlockKind::Fenced(info) => info
                        .split_whitespace()
                        .next()
                        .map(str::to_string),
                    CodeBlockKind::Indented => None,
                },
                code: String::new(),
            },
            Tag::HtmlBlock => Frame::Html(String::new()),
            Tag::List(start) => Frame::List {
                start,
                items: Vec::new(),
            },
            Tag::Item => Frame::blocks(Container::Item { task: None }),
            Tag::Table(alignments) => Frame::Table(Table {
                alignments: alignments.into_iter().map(map_alignment).collect(),
                head: None,
                rows: Vec::new(),
            }),
            Tag::TableHead => Frame::Row {
                header: true,
                cells: Vec::new(),
            },
            Tag::TableRow => Frame::Row {
                header: false,
                cells: Vec::new(),
            },
            Tag::TableCell => Frame::span(Span::Cell),
            Tag::Emphasis => Frame::span(Span::Emphasis),
            Tag::Strong => Frame::span(Span::Strong),
            Tag::Strikethrough => Frame::span(Span::Strikethrough),
            Tag::Link {
                dest_url, title, ..
            } => Frame::span(Span::Link {
                url: dest_url.into_string(),
                title: Some(title.into_string()).filter(|t| !t.is_empty()),
            }),
            Tag::Image { dest_url, .. } => Frame::span(Span::Image {
                url: dest_url.into_string(),
            }),
            _ => Frame::blocks(Container::Passthrough),
        };
        self.stack.push(frame);
    }

    fn end(&mut self) {
        // The root frame is never popped by an end tag.
        if self.stack.len() <= 1 {
            return;
        }
        if let Some(frame) = self.stack.pop() {
            let finished = close(frame);
            self.attach(finished);
        }
    }

    fn finish(mut self) -> Document {
        while self.stack.len() > 1 {
            self.end();
        }
        match self.stack.pop() {
            Some(Frame::Blocks {
                mut blocks, loose, ..
            }) => {
                flush_loose(&mut blocks, loose);
                Document { blocks }
            }
            _ => Document::default(),
        }
    }

    fn text(&mut self, text: &str) {
        match self.stack.last_mut() {
            Some(Frame::Code { code, .. }) => code.push_str(text),
            Some(Frame::Html(html)) => html.push_str(text),
            _ => self.inline(Inline::Text(text.to_string())),
        }
    }

    fn html(&mut self, html: &str) {
        match self.stack.last_mut() {
            Some(Frame::Html(buf)) => buf.push_str(html),
            _ => self.text(html),
        }
    }

    fn inline(&mut self, inline: Inline) {
        match self.stack.last_mut() {
            Some(Frame::Inlines { content, .. }) => push_inline(content, inline),
            Some(Frame::Blocks { loose, .. }) => push_inline(loose, inline),
            Some(Frame::Code { code, .. }) => code.push_str(&Inline::plain_text(&[inline])),
            Some(Frame::Html(html)) => html.push_str(&Inline::plain_text(&[inline])),
            // Stray inline content between table rows or list items is dropped.
            _ => {}
        }
    }

    fn block(&mut self, block: Block) {
        self.attach(Finished::Block(block));
    }

    fn task_marker(&mut self, done: bool) {
        for frame in self.stack.iter_mut().rev() {
            if let Frame::Blocks {
                container: Container::Item { task },
                ..
            } = frame
            {
                *task = Some(done);
                return;
            }
        }
    }

    fn attach(&mut self, finished: Finished) {
        let Some(parent) = self.stack.last_mut() else {
            return;
        };
        match (parent, finished) {
            (Frame::Blocks { blocks, loose, .. }, Finished::Block(block)) => {
                flush_loose(blocks, std::mem::take(loose));
                blocks.push(block);
            }
            (Frame::Blocks { blocks, loose, .. }, Finished::Blocks(children)) => {
                flush_loose(blocks, std::mem::take(loose));
                blocks.extend(children);
            }
            (Frame::Blocks { loose, .. }, Finished::Inline(inline)) => push_inline(loose, inline),
            (Frame::Inlines { content, .. }, Finished::Inline(inline)) => {
                push_inline(content, inline)
            }
            (Frame::Inlines { content, .. }, Finished::Block(block)) => {
                // A block closed inside a span only happens on malformed input.
                push_inline(content, Inline::Text(block_text(&block)));
            }
            (Frame::List { items, .. }, Finished::Item(item)) => items.push(item),
            (Frame::Row { header, cells }, Finished::Cell(mut cell)) => {
                cell.header = *header;
                cells.push(cell);
            }
            (Frame::Table(table), Finished::Row { header: true, row }) => table.head = Some(row),
            (Frame::Table(table), Finished::Row { header: false, row }) => table.rows.push(row),
            (Frame::Table(table), Finished::Cell(cell)) => {
                // Cells directly under the table: treat as a row of their own.
                table.rows.push(TableRow { cells: vec![cell] });
            }
            _ => {}
        }
    }
}

fn close(frame: Frame) -> Finished {
    match frame {
        Frame::Blocks {
            container,
            mut blocks,
            loose,
        } => {
            match container {
                // Tight list items keep their text unwrapped.
                Container::Item { task } => {
                    if !loose.is_empty() {
                        blocks.push(Block::Text(loose));
                    }
                    Finished::Item(ListItem { task, blocks })
                }
                Container::Quote => {
                    flush_loose(&mut blocks, loose);
                    Finished::Block(Block::BlockQuote(blocks))
                }
                Container::Root | Container::Passthrough => {
                    flush_loose(&mut blocks, loose);
                    Finished::Blocks(blocks)
                }
            }
        }
        Frame::List { start, items } => Finished::Block(Block::List { start, items }),
        Frame::Table(table) => Finished::Block(Block::Table(table)),
        Frame::Row { header, cells } => Finished::Row {
            header,
            row: TableRow { cells },
        },
        Frame::Inlines { span, content } => match span {
            Span::Paragraph => Finished::Block(Block::Paragraph(content)),
            Span::Heading(level) => Finished::Block(Block::Heading { level, content }),
            Span::Cell => Finished::Cell(TableCell {
                header: false,
                content,
            }),
            Span::Emphasis => Finished::Inline(Inline::Emphasis(content)),
            Span::Strong => Finished::Inline(Inline::Strong(content)),
            Span::Strikethrough => Finished::Inline(Inline::Strikethrough(content)),
            Span::Link { url, title } => Finished::Inline(Inline::Link {
                url,
                title,
                content,
            }),
            Span::Image { url } => Finished::Inline(Inline::Image {
                url,
                alt: Inline::plain_text(&content),
            }),
        },
        Frame::Code { language, code } => Finished::Block(Block::CodeBlock { language, code }),
        Frame::Html(html) => Finished::Block(Block::Html(html)),
    }
}

/// Appends an inline, merging adjacent text runs.
fn push_inline(content: &mut Vec<Inline>, inline: Inline) {
    if let (Some(Inline::Text(last)), Inline::Text(text)) = (content.last_mut(), &inline) {
        last.push_str(text);
        return;
    }
    content.push(inline);
}

fn flush_loose(blocks: &mut Vec<Block>, loose: Vec<Inline>) {
    if !loose.is_empty() {
        blocks.push(Block::Text(loose));
    }
}

fn block_text(block: &Block) -> String {
    match block {
        Block::Heading { content, .. } | Block::Paragraph(content) | Block::Text(content) => {
            Inline::plain_text(content)
        }
        Block::CodeBlock { code, .. } => code.clone(),
        Block::Html(html) => html.clone(),
        _ => String::new(),
    }
}

fn heading_level(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

fn map_alignment(alignment: Alignment) -> Align {
    match alignment {
        Alignment::None => Align::None,
        Alignment::Left => Align::Left,
        Alignment::Center => Align::Center,
        Alignment::Right => Align::Right,
    }
}
