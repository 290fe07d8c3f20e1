//! Stock engine: backend fetch, payload decoding and effect execution.
mod engine;
mod fetch;
mod persist;
mod types;

pub use engine::EngineHandle;
pub use fetch::{
    analysis_url, decode_payload, AnalysisFetcher, FetchSettings, ReqwestFetcher, DEFAULT_BASE_URL,
};
pub use persist::{ensure_output_dir, write_atomic, PersistError};
pub use types::{EngineEvent, FailureKind, FetchError};
