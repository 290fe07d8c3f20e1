use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use stock_core::{AppViewModel, ViewMode};
use stock_render::{FOOTER_TEXT, PAGE_TITLE};

use super::lines::RenderedLine;
use super::theme;

const IDLE_HINT: &str = "Enter a stock symbol and press Enter to analyze.";
const KEY_HINTS: &str = "Enter analyze \u{b7} \u{2191}\u{2193} PgUp PgDn scroll \u{b7} Esc dismiss/quit \u{b7} Ctrl-C quit";

/// Everything one frame needs besides the view model.
pub struct Screen<'a> {
    pub view: &'a AppViewModel,
    pub lines: &'a [RenderedLine],
    pub scroll: u16,
}

/// Size of the result area after wrapping, used to bound scrolling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BodyMetrics {
    pub viewport_rows: u16,
    pub content_rows: u16,
}

impl BodyMetrics {
    pub fn max_scroll(&self) -> u16 {
        self.content_rows.saturating_sub(self.viewport_rows)
    }
}

/// Draws the whole screen and reports how the result area was filled.
pub fn draw(frame: &mut Frame<'_>, screen: &Screen<'_>) -> BodyMetrics {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .split(frame.size());

    draw_header(frame, chunks[0]);
    draw_input(frame, chunks[1], screen.view);
    let metrics = draw_body(frame, chunks[2], screen);
    draw_footer(frame, chunks[3]);
    metrics
}

fn draw_header(frame: &mut Frame<'_>, area: Rect) {
    let header = Paragraph::new(Line::from(Span::styled(PAGE_TITLE, theme::title())))
        .alignment(Alignment::Center);
    frame.render_widget(header, area);
}

fn draw_input(frame: &mut Frame<'_>, area: Rect, view: &AppViewModel) {
    let hint = if view.submit_enabled {
        " Enter: analyze "
    } else {
        " Analyzing\u{2026} "
    };
    let input = Paragraph::new(view.query.as_str()).block(
        Block::default()
            .title(" Stock symbol ")
            .title_bottom(Line::from(hint).alignment(Alignment::Right))
            .borders(Borders::ALL)
            .border_style(theme::chrome())
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(input, area);

    // Border plus padding on the left.
    let cursor_x = area
        .x
        .saturating_add(2)
        .saturating_add(u16::try_from(view.query.chars().count()).unwrap_or(u16::MAX));
    if cursor_x < area.right().saturating_sub(1) {
        frame.set_cursor(cursor_x, area.y.saturating_add(1));
    }
}

fn draw_body(frame: &mut Frame<'_>, area: Rect, screen: &Screen<'_>) -> BodyMetrics {
    let view = screen.view;
    let (title, text, scroll) = match &view.mode {
        ViewMode::Idle => (
            String::new(),
            Text::from(Line::from(Span::styled(IDLE_HINT, theme::chrome()))),
            0,
        ),
        ViewMode::Loading { symbol } => (
            String::new(),
            Text::from(Line::from(vec![
                Span::styled(view.spinner(), theme::spinner()),
                Span::raw(format!(" Analyzing {symbol}\u{2026}")),
            ])),
            0,
        ),
        ViewMode::Error { message } => (
            String::new(),
            Text::from(vec![
                Line::from(Span::styled(message.as_str(), theme::error())),
                Line::from(Span::styled("Press Esc to dismiss.", theme::chrome())),
            ]),
            0,
        ),
        ViewMode::Result { symbol, .. } => (
            format!(" {symbol} "),
            Text::from(
                screen
                    .lines
                    .iter()
                    .map(RenderedLine::to_line)
                    .collect::<Vec<_>>(),
            ),
            screen.scroll,
        ),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::TOP)
        .border_style(theme::chrome())
        .padding(Padding::new(1, 1, 0, 0));
    let inner = block.inner(area);
    let paragraph = Paragraph::new(text).wrap(Wrap { trim: false });
    // Scrolling counts wrapped rows, not logical lines.
    let content_rows = u16::try_from(paragraph.line_count(inner.width)).unwrap_or(u16::MAX);
    frame.render_widget(paragraph.block(block).scroll((scroll, 0)), area);

    BodyMetrics {
        viewport_rows: inner.height.max(1),
        content_rows,
    }
}

fn draw_footer(frame: &mut Frame<'_>, area: Rect) {
    let footer = Line::from(vec![
        Span::styled(FOOTER_TEXT, theme::chrome()),
        Span::raw("  "),
        Span::styled(KEY_HINTS, theme::chrome()),
    ]);
    frame.render_widget(Paragraph::new(footer), area);
}
