use crate::view_model::{AppViewModel, ViewMode, SPINNER_FRAMES};
use crate::AnalysisResult;

pub type RequestId = u64;

/// The only message shown to the user when a fetch fails, whatever the cause.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch stock data. Please try again.";

/// Display mode of the shell. Exactly one is active at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ShellState {
    #[default]
    Idle,
    Loading {
        request_id: RequestId,
        symbol: String,
    },
    Error(String),
    Result {
        symbol: String,
        result: AnalysisResult,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    query: String,
    shell: ShellState,
    next_request_id: RequestId,
    spinner_frame: usize,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn shell(&self) -> &ShellState {
        &self.shell
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.shell, ShellState::Loading { .. })
    }

    pub fn view(&self) -> AppViewModel {
        let mode = match &self.shell {
            ShellState::Idle => ViewMode::Idle,
            ShellState::Loading { symbol, .. } => ViewMode::Loading {
                symbol: symbol.clone(),
            },
            ShellState::Error(message) => ViewMode::Error {
                message: message.clone(),
            },
            ShellState::Result { symbol, result } => ViewMode::Result {
                symbol: symbol.clone(),
                result: result.clone(),
            },
        };
        AppViewModel {
            query: self.query.clone(),
            mode,
            submit_enabled: !self.is_loading(),
            spinner_frame: self.spinner_frame,
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_query(&mut self, text: &str) {
        let normalized = text.to_uppercase();
        if normalized != self.query {
            self.query = normalized;
            self.dirty = true;
        }
    }

    /// Moves to `Loading`, dropping any prior error or result.
    pub(crate) fn begin_request(&mut self, symbol: String) -> RequestId {
        self.next_request_id += 1;
        let request_id = self.next_request_id;
        self.shell = ShellState::Loading { request_id, symbol };
        self.spinner_frame = 0;
        self.dirty = true;
        request_id
    }

    /// Applies a fetch settlement. Settlements for anything other than the
    /// in-flight request are ignored.
    pub(crate) fn settle(&mut self, request_id: RequestId, outcome: Option<AnalysisResult>) {
        let symbol = match &self.shell {
            ShellState::Loading {
                request_id: pending,
                symbol,
            } if *pending == request_id => symbol.clone(),
            _ => return,
        };

        self.shell = match outcome {
            Some(result) => ShellState::Result { symbol, result },
            None => ShellState::Error(FETCH_FAILED_MESSAGE.to_string()),
        };
        self.dirty = true;
    }

    pub(crate) fn dismiss_error(&mut self) {
        if matches!(self.shell, ShellState::Error(_)) {
            self.shell = ShellState::Idle;
            self.dirty = true;
        }
    }

    pub(crate) fn advance_spinner(&mut self) {
        if self.is_loading() {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
            self.dirty = true;
        }
    }
}

/// Trims and uppercases a raw ticker; `None` when nothing is left.
pub fn normalize_symbol(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_uppercase())
    }
}
