//! Stock dashboard core: pure shell state machine and view-model helpers.
mod analysis;
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use analysis::AnalysisResult;
pub use effect::Effect;
pub use msg::Msg;
pub use state::{normalize_symbol, AppState, RequestId, ShellState, FETCH_FAILED_MESSAGE};
pub use update::update;
pub use view_model::{AppViewModel, ViewMode, SPINNER_FRAMES};
