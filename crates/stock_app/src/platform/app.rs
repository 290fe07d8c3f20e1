use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, ExecutableCommand};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use stock_core::{update, AnalysisResult, AppState, AppViewModel, Msg, ShellState, ViewMode};
use stock_render::Dashboard;

use super::effects::EffectRunner;
use super::ui;
use super::ui::lines::RenderedLine;
use super::ui::render::BodyMetrics;

/// Spinner cadence; also the upper bound on how stale a completion can sit.
const TICK_INTERVAL: Duration = Duration::from_millis(100);
const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// What a key press asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
enum KeyAction {
    Dispatch(Msg),
    Scroll(i32),
    ScrollTop,
    ScrollBottom,
    Quit,
    Ignore,
}

/// Dashboard laid out for the result currently shown.
struct RenderedAnalysis {
    result: AnalysisResult,
    lines: Vec<RenderedLine>,
}

pub struct App {
    state: AppState,
    view: AppViewModel,
    runner: EffectRunner,
    rendered: Option<RenderedAnalysis>,
    scroll: u16,
    body: BodyMetrics,
    needs_draw: bool,
    quit: bool,
}

impl App {
    /// With `symbol`, the query is filled in and submitted right away.
    pub fn new(runner: EffectRunner, symbol: Option<String>) -> Self {
        let state = AppState::new();
        let mut app = Self {
            view: state.view(),
            state,
            runner,
            rendered: None,
            scroll: 0,
            body: BodyMetrics::default(),
            needs_draw: true,
            quit: false,
        };
        if let Some(symbol) = symbol {
            app.dispatch(Msg::QueryChanged(symbol));
            app.dispatch(Msg::Submitted);
        }
        app
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            self.view = state.view();
            self.sync_rendered();
            self.needs_draw = true;
        }
        self.state = state;
        self.runner.enqueue(effects);
    }

    fn pump_engine(&mut self) {
        for msg in self.runner.drain() {
            self.dispatch(msg);
        }
    }

    /// Lays the dashboard out once per result rather than on every frame.
    fn sync_rendered(&mut self) {
        let ViewMode::Result { result, .. } = &self.view.mode else {
            return;
        };
        if self
            .rendered
            .as_ref()
            .is_some_and(|rendered| &rendered.result == result)
        {
            return;
        }
        let dashboard = Dashboard::build(result);
        self.rendered = Some(RenderedAnalysis {
            result: result.clone(),
            lines: ui::lines::dashboard_lines(&dashboard),
        });
        self.scroll = 0;
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key_action(&self.state, key) {
            KeyAction::Dispatch(msg) => self.dispatch(msg),
            KeyAction::Scroll(delta) => self.scroll_by(delta),
            KeyAction::ScrollTop => self.scroll_to(0),
            KeyAction::ScrollBottom => self.scroll_to(self.max_scroll()),
            KeyAction::Quit => self.quit = true,
            KeyAction::Ignore => {}
        }
    }

    fn max_scroll(&self) -> u16 {
        self.body.max_scroll()
    }

    fn scroll_by(&mut self, delta: i32) {
        let target = i32::from(self.scroll).saturating_add(delta).max(0);
        self.scroll_to(u16::try_from(target).unwrap_or(u16::MAX));
    }

    fn scroll_to(&mut self, scroll: u16) {
        let scroll = scroll.min(self.max_scroll());
        if scroll != self.scroll {
            self.scroll = scroll;
            self.needs_draw = true;
        }
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let lines: &[RenderedLine] = match (&self.view.mode, &self.rendered) {
            (ViewMode::Result { .. }, Some(rendered)) => &rendered.lines,
            _ => &[],
        };
        let screen = ui::render::Screen {
            view: &self.view,
            lines,
            scroll: self.scroll,
        };
        self.body = ui::render::draw(frame, &screen);
        // A resize can leave the offset past the new end; redraw clamped.
        if self.scroll > self.max_scroll() {
            self.scroll = self.max_scroll();
            self.needs_draw = true;
        }
    }
}

fn key_action(state: &AppState, key: KeyEvent) -> KeyAction {
    let page = 10;
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => KeyAction::Quit,
            _ => KeyAction::Ignore,
        };
    }
    match key.code {
        KeyCode::Esc => match state.shell() {
            ShellState::Error(_) => KeyAction::Dispatch(Msg::Dismissed),
            _ => KeyAction::Quit,
        },
        KeyCode::Enter => KeyAction::Dispatch(Msg::Submitted),
        KeyCode::Backspace => {
            let mut query = state.query().to_string();
            if query.pop().is_none() {
                return KeyAction::Ignore;
            }
            KeyAction::Dispatch(Msg::QueryChanged(query))
        }
        KeyCode::Char(ch) => {
            let mut query = state.query().to_string();
            query.push(ch);
            KeyAction::Dispatch(Msg::QueryChanged(query))
        }
        KeyCode::Up => KeyAction::Scroll(-1),
        KeyCode::Down => KeyAction::Scroll(1),
        KeyCode::PageUp => KeyAction::Scroll(-page),
        KeyCode::PageDown => KeyAction::Scroll(page),
        KeyCode::Home => KeyAction::ScrollTop,
        KeyCode::End => KeyAction::ScrollBottom,
        _ => KeyAction::Ignore,
    }
}

struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        io::stdout().execute(EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

pub fn run_interactive(mut app: App) -> Result<()> {
    let _guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let mut last_tick = Instant::now();

    while !app.quit {
        if app.needs_draw {
            app.needs_draw = false;
            terminal.draw(|frame| app.draw(frame))?;
        }

        app.pump_engine();

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                CEvent::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                CEvent::Resize(..) => app.needs_draw = true,
                _ => {}
            }
        }

        if last_tick.elapsed() >= TICK_INTERVAL {
            app.dispatch(Msg::Tick);
            last_tick = Instant::now();
        }
    }

    Ok(())
}
