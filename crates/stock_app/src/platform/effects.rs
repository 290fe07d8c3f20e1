use stock_core::{Effect, Msg};
use stock_engine::{EngineEvent, EngineHandle};
use stock_logging::{stock_info, stock_warn};

/// Executes core effects on the engine and turns completions back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchAnalysis { request_id, symbol } => {
                    stock_info!("FetchAnalysis request_id={} symbol={}", request_id, symbol);
                    self.engine.fetch(request_id, symbol);
                }
            }
        }
    }

    /// Messages for every completion received so far, without blocking.
    pub fn drain(&self) -> Vec<Msg> {
        let mut inbox = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            inbox.push(settle(event));
        }
        inbox
    }

    /// Waits for the next completion.
    pub fn wait(&self) -> Option<Msg> {
        self.engine.recv().map(settle)
    }
}

fn settle(event: EngineEvent) -> Msg {
    let EngineEvent::AnalysisCompleted {
        request_id,
        symbol,
        result,
    } = &event;
    if let Err(err) = result {
        stock_warn!("Request {} for {} failed: {}", request_id, symbol, err);
    }
    event.into_msg()
}
