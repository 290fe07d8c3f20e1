use std::io;
use std::sync::{mpsc, Arc};
use std::thread;

use stock_core::RequestId;
use stock_logging::{stock_debug, stock_warn};

use crate::fetch::{AnalysisFetcher, FetchSettings, ReqwestFetcher};
use crate::{EngineEvent, FailureKind, FetchError};

enum EngineCommand {
    Fetch { request_id: RequestId, symbol: String },
}

/// Runs fetches on a background tokio runtime and reports completions over a
/// channel, so the UI thread never blocks on the network.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let fetcher = ReqwestFetcher::new(settings)?;
        Self::with_fetcher(Arc::new(fetcher))
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))
    }

    pub fn with_fetcher(fetcher: Arc<dyn AnalysisFetcher>) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;

        thread::Builder::new()
            .name("stock-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let fetcher = fetcher.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        handle_command(fetcher.as_ref(), command, event_tx).await;
                    });
                }
                stock_debug!("engine command channel closed");
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn fetch(&self, request_id: RequestId, symbol: impl Into<String>) {
        let command = EngineCommand::Fetch {
            request_id,
            symbol: symbol.into(),
        };
        if self.cmd_tx.send(command).is_err() {
            stock_warn!("engine thread is gone; request {} dropped", request_id);
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Blocks until the next completion; `None` once the engine thread is gone.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.recv().ok()
    }
}

async fn handle_command(
    fetcher: &dyn AnalysisFetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Fetch { request_id, symbol } => {
            let result = fetcher.fetch(&symbol).await;
            let _ = event_tx.send(EngineEvent::AnalysisCompleted {
                request_id,
                symbol,
                result,
            });
        }
    }
}
