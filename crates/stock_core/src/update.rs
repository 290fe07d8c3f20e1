use crate::{normalize_symbol, AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::QueryChanged(text) => {
            state.set_query(&text);
            Vec::new()
        }
        Msg::Submitted => {
            // The submit control is disabled while a request is in flight.
            if state.is_loading() {
                return (state, Vec::new());
            }
            let Some(symbol) = normalize_symbol(state.query()) else {
                return (state, Vec::new());
            };
            let request_id = state.begin_request(symbol.clone());
            vec![Effect::FetchAnalysis { request_id, symbol }]
        }
        Msg::Dismissed => {
            state.dismiss_error();
            Vec::new()
        }
        Msg::FetchSucceeded { request_id, result } => {
            state.settle(request_id, Some(result));
            Vec::new()
        }
        Msg::FetchFailed { request_id } => {
            state.settle(request_id, None);
            Vec::new()
        }
        Msg::Tick => {
            state.advance_spinner();
            Vec::new()
        }
    };

    (state, effects)
}
