use crate::AnalysisResult;

/// Frames of the loading indicator, advanced once per tick.
pub const SPINNER_FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Idle,
    Loading {
        symbol: String,
    },
    Error {
        message: String,
    },
    Result {
        symbol: String,
        result: AnalysisResult,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub query: String,
    pub mode: ViewMode,
    pub submit_enabled: bool,
    pub spinner_frame: usize,
    pub dirty: bool,
}

impl AppViewModel {
    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }
}
