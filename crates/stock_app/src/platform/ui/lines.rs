//! Lays a [`Dashboard`] out as styled terminal lines.
//!
//! The same lines feed the interactive view and `--plain` output, so the two
//! never disagree about content.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use stock_render::{style_for, Align, Block, Construct, Dashboard, Inline, ListItem, SourcesPanel, Table};

use super::theme;

const RULE_WIDTH: usize = 40;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub style: Style,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderedLine {
    pub segments: Vec<Segment>,
}

impl RenderedLine {
    pub fn plain(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    pub fn to_line(&self) -> Line<'static> {
        Line::from(
            self.segments
                .iter()
                .map(|s| Span::styled(s.text.clone(), s.style))
                .collect::<Vec<_>>(),
        )
    }
}

pub fn dashboard_lines(dashboard: &Dashboard) -> Vec<RenderedLine> {
    let mut writer = LineWriter::default();
    for block in &dashboard.document.blocks {
        writer.block(block);
    }
    if let Some(sources) = &dashboard.sources {
        writer.blank();
        writer.sources(sources);
    }
    writer.finish()
}

/// Joins lines as unstyled text, one per row.
pub fn plain_text(lines: &[RenderedLine]) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(line.plain().trim_end());
        out.push('\n');
    }
    out
}

#[derive(Default)]
struct LineWriter {
    lines: Vec<RenderedLine>,
    current: Vec<Segment>,
    line_open: bool,
    /// Continuation prefixes of the enclosing lists and quotes.
    indent: Vec<String>,
    /// Replaces the innermost indent on the next line opened (list markers).
    marker: Option<String>,
}

impl LineWriter {
    fn finish(mut self) -> Vec<RenderedLine> {
        self.end_line();
        while self.lines.last().is_some_and(|line| line.segments.is_empty()) {
            self.lines.pop();
        }
        self.lines
    }

    fn open_line(&mut self) {
        if self.line_open {
            return;
        }
        self.line_open = true;
        let prefix = match self.marker.take() {
            Some(marker) => {
                let outer = self.indent.len().saturating_sub(1);
                let mut prefix = self.indent[..outer].concat();
                prefix.push_str(&marker);
                prefix
            }
            None => self.indent.concat(),
        };
        if !prefix.is_empty() {
            self.current.push(Segment {
                text: prefix,
                style: theme::chrome(),
            });
        }
    }

    fn push(&mut self, text: &str, style: Style) {
        for (idx, part) in text.split('\n').enumerate() {
            if idx > 0 {
                self.newline();
            }
            if part.is_empty() {
                continue;
            }
            self.open_line();
            match self.current.last_mut() {
                Some(last) if last.style == style => last.text.push_str(part),
                _ => self.current.push(Segment {
                    text: part.to_string(),
                    style,
                }),
            }
        }
    }

    fn newline(&mut self) {
        self.open_line();
        self.lines.push(RenderedLine {
            segments: std::mem::take(&mut self.current),
        });
        self.line_open = false;
    }

    fn end_line(&mut self) {
        if self.line_open {
            self.newline();
        }
    }

    fn blank(&mut self) {
        self.end_line();
        if self.lines.last().is_some_and(|line| !line.segments.is_empty()) {
            self.lines.push(RenderedLine::default());
        }
    }

    fn block(&mut self, block: &Block) {
        let style = theme::style_of(block.style());
        match block {
            Block::Heading { content, .. } => {
                self.inlines(content, style);
                self.blank();
            }
            Block::Paragraph(content) => {
                self.inlines(content, style);
                self.blank();
            }
            Block::Text(content) => {
                self.inlines(content, style);
                self.end_line();
            }
            Block::List { start, items } => {
                let nested = !self.indent.is_empty();
                for (idx, item) in items.iter().enumerate() {
                    let marker = match start {
                        None => "\u{2022} ".to_string(),
                        Some(first) => format!("{}. ", first + idx as u64),
                    };
                    self.item(marker, item, style);
                }
                if !nested {
                    self.blank();
                }
            }
            Block::Table(table) => {
                self.table(table);
                self.blank();
            }
            Block::CodeBlock { code, .. } => {
                self.indent.push("    ".to_string());
                for line in code.lines() {
                    self.push(line, theme::inline_code());
                    self.newline();
                }
                self.indent.pop();
                self.blank();
            }
            Block::BlockQuote(children) => {
                self.indent.push("\u{2502} ".to_string());
                for child in children {
                    self.block(child);
                }
                self.end_line();
                self.indent.pop();
                self.blank();
            }
            Block::Rule => {
                self.push(&"\u{2500}".repeat(RULE_WIDTH), theme::chrome());
                self.blank();
            }
            Block::Html(raw) => {
                for line in raw.lines() {
                    self.push(line, style);
                    self.newline();
                }
                self.blank();
            }
        }
    }

    fn item(&mut self, marker: String, item: &ListItem, list_style: Style) {
        let marker = match item.task {
            Some(true) => format!("{marker}[x] "),
            Some(false) => format!("{marker}[ ] "),
            None => marker,
        };
        self.end_line();
        self.indent.push(" ".repeat(marker.chars().count()));
        self.marker = Some(marker);
        let style = list_style.patch(theme::style_of(item.style()));
        for block in &item.blocks {
            match block {
                Block::Text(content) => {
                    self.inlines(content, style);
                    self.end_line();
                }
                other => self.block(other),
            }
        }
        if self.marker.is_some() {
            // Empty item: still show its marker.
            self.newline();
        }
        self.end_line();
        self.indent.pop();
    }

    fn table(&mut self, table: &Table) {
        let head: Option<Vec<String>> = table.head.as_ref().map(|row| {
            row.cells
                .iter()
                .map(|cell| Inline::plain_text(&cell.content).to_uppercase())
                .collect()
        });
        let rows: Vec<Vec<String>> = table
            .rows
            .iter()
            .map(|row| {
                row.cells
                    .iter()
                    .map(|cell| Inline::plain_text(&cell.content))
                    .collect()
            })
            .collect();

        let columns = head
            .iter()
            .chain(rows.iter())
            .map(Vec::len)
            .max()
            .unwrap_or(0);
        let mut widths = vec![0; columns];
        for row in head.iter().chain(rows.iter()) {
            for (column, text) in row.iter().enumerate() {
                widths[column] = widths[column].max(text.chars().count());
            }
        }

        let border = theme::style_of(style_for(Construct::Table));
        if let Some(head) = &head {
            let style = theme::style_of(table.head_style())
                .patch(theme::style_of(style_for(Construct::TableHeaderCell)));
            self.row(head, &widths, table, style, border);
            let rule: Vec<String> = widths.iter().map(|w| "\u{2500}".repeat(*w)).collect();
            self.push(&rule.join("\u{2500}\u{253c}\u{2500}"), border);
            self.end_line();
        }
        let cell_style = theme::style_of(style_for(Construct::TableCell));
        for row in &rows {
            self.row(row, &widths, table, cell_style, border);
        }
    }

    fn row(&mut self, cells: &[String], widths: &[usize], table: &Table, style: Style, border: Style) {
        for (column, width) in widths.iter().enumerate() {
            if column > 0 {
                self.push(" \u{2502} ", border);
            }
            let text = cells.get(column).map(String::as_str).unwrap_or("");
            self.push(&pad(text, *width, table.alignment(column)), style);
        }
        self.end_line();
    }

    fn sources(&mut self, sources: &SourcesPanel) {
        self.push(SourcesPanel::TITLE, theme::style_of(sources.title_style()));
        self.end_line();
        let bullet = theme::style_of(sources.list_style());
        let link = theme::style_of(sources.link_style());
        for entry in sources.entries() {
            self.push("\u{2022} ", bullet);
            self.push(&entry.text, link);
            if entry.text != entry.url {
                self.push(&format!(" <{}>", entry.url), theme::url_hint());
            }
            self.end_line();
        }
    }

    fn inlines(&mut self, inlines: &[Inline], base: Style) {
        for inline in inlines {
            match inline {
                Inline::Text(text) => self.push(text, base),
                Inline::Code(code) => self.push(code, base.patch(theme::inline_code())),
                Inline::Emphasis(children) => {
                    self.inlines(children, base.add_modifier(Modifier::ITALIC))
                }
                Inline::Strong(children) => self.inlines(children, base.add_modifier(Modifier::BOLD)),
                Inline::Strikethrough(children) => {
                    self.inlines(children, base.add_modifier(Modifier::CROSSED_OUT))
                }
                Inline::Link { content, .. } => {
                    self.inlines(content, base.patch(theme::style_of(inline.style())))
                }
                Inline::Image { alt, .. } => {
                    self.push(&format!("[image: {alt}]"), base.add_modifier(Modifier::DIM))
                }
                Inline::SoftBreak => self.push(" ", base),
                Inline::HardBreak => self.newline(),
            }
        }
    }
}

fn pad(text: &str, width: usize, align: Align) -> String {
    let fill = width.saturating_sub(text.chars().count());
    match align {
        Align::Right => format!("{}{text}", " ".repeat(fill)),
        Align::Center => {
            let left = fill / 2;
            format!("{}{text}{}", " ".repeat(left), " ".repeat(fill - left))
        }
        Align::None | Align::Left => format!("{text}{}", " ".repeat(fill)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use stock_core::AnalysisResult;

    fn plain(markdown: &str) -> String {
        let dashboard = Dashboard::build(&AnalysisResult::new(markdown));
        plain_text(&dashboard_lines(&dashboard))
    }

    #[test]
    fn heading_and_paragraph_are_separated_by_blank_line() {
        assert_eq!(plain("# Title\n\nBody text."), "Title\n\nBody text.\n");
    }

    #[test]
    fn heading_uses_large_heading_style() {
        let dashboard = Dashboard::build(&AnalysisResult::new("## Outlook"));
        let lines = dashboard_lines(&dashboard);
        assert_eq!(lines.len(), 1);
        assert_eq!(
            lines[0].segments[0].style,
            theme::style_of(stock_render::StyleClass::HeadingLarge)
        );
    }

    #[test]
    fn lists_get_markers_and_nesting() {
        let out = plain("- one\n- two\n  1. inner\n  2. next\n- [x] done");
        assert_eq!(
            out,
            "\u{2022} one\n\u{2022} two\n  1. inner\n  2. next\n\u{2022} [x] done\n"
        );
    }

    #[test]
    fn table_columns_are_aligned() {
        let out = plain("| Metric | Value |\n|---|---:|\n| P/E | 28.5 |\n| Revenue growth | 8% |");
        let rule = format!("{}\u{253c}{}", "\u{2500}".repeat(15), "\u{2500}".repeat(6));
        assert_eq!(
            out,
            format!(
                "METRIC         \u{2502} VALUE\n{rule}\nP/E            \u{2502}  28.5\nRevenue growth \u{2502}    8%\n"
            )
        );
    }

    #[test]
    fn sources_follow_document_with_urls() {
        let out = plain("See [Apple 10-K](https://sec.gov/aapl) for details.");
        assert_eq!(
            out,
            "See Apple 10-K for details.\n\nSources\n\u{2022} Apple 10-K <https://sec.gov/aapl>\n"
        );
    }

    #[test]
    fn quotes_and_code_are_prefixed() {
        let out = plain("> quoted\n\n```\nlet x = 1;\n```");
        assert_eq!(out, "\u{2502} quoted\n\n    let x = 1;\n");
    }

    #[test]
    fn empty_document_has_no_lines() {
        let dashboard = Dashboard::build(&AnalysisResult::new(""));
        assert!(dashboard_lines(&dashboard).is_empty());
    }
}
