use std::sync::Once;

use pretty_assertions::assert_eq;
use stock_core::{update, AppState, Effect, Msg, ShellState, ViewMode};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(stock_logging::initialize_for_tests);
}

fn submit_query(state: AppState, input: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::QueryChanged(input.to_string()));
    update(state, Msg::Submitted)
}

#[test]
fn query_is_uppercased_as_typed() {
    init_logging();
    let (mut state, effects) = update(AppState::new(), Msg::QueryChanged("aapl".to_string()));

    assert_eq!(state.query(), "AAPL");
    assert_eq!(state.view().query, "AAPL");
    assert!(effects.is_empty());
    assert!(state.consume_dirty());

    // Same text again is not a change.
    let (mut state, _) = update(state, Msg::QueryChanged("AAPL".to_string()));
    assert!(!state.consume_dirty());
}

#[test]
fn empty_submit_is_suppressed() {
    init_logging();
    let state = AppState::new();
    let (next, effects) = update(state.clone(), Msg::Submitted);

    assert_eq!(next, state);
    assert!(effects.is_empty());
    assert_eq!(next.view().mode, ViewMode::Idle);
}

#[test]
fn whitespace_only_submit_is_suppressed() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::QueryChanged("   ".to_string()));
    let before = state.clone();

    let (next, effects) = update(state, Msg::Submitted);

    assert_eq!(next, before);
    assert!(effects.is_empty());
}

#[test]
fn submit_moves_idle_to_loading_and_requests_fetch() {
    init_logging();
    let (state, effects) = submit_query(AppState::new(), " msft ");

    assert_eq!(
        effects,
        vec![Effect::FetchAnalysis {
            request_id: 1,
            symbol: "MSFT".to_string(),
        }]
    );
    assert_eq!(
        state.shell(),
        &ShellState::Loading {
            request_id: 1,
            symbol: "MSFT".to_string(),
        }
    );

    let view = state.view();
    assert!(!view.submit_enabled);
    assert!(view.dirty);
    assert_eq!(
        view.mode,
        ViewMode::Loading {
            symbol: "MSFT".to_string()
        }
    );
}

#[test]
fn submit_while_loading_is_ignored() {
    init_logging();
    let (state, _) = submit_query(AppState::new(), "AAPL");
    let before = state.clone();

    let (state, effects) = submit_query(state, "TSLA");

    assert!(effects.is_empty());
    assert_eq!(state.shell(), before.shell());
    // The input box still reflects what the user typed.
    assert_eq!(state.query(), "TSLA");
}

#[test]
fn dismiss_clears_error_only() {
    init_logging();
    let (state, _) = submit_query(AppState::new(), "AAPL");
    let (state, _) = update(state, Msg::Dismissed);
    assert!(state.is_loading());

    let (state, _) = update(state, Msg::FetchFailed { request_id: 1 });
    assert!(matches!(state.shell(), ShellState::Error(_)));

    let (state, effects) = update(state, Msg::Dismissed);
    assert_eq!(state.shell(), &ShellState::Idle);
    assert!(effects.is_empty());
}

#[test]
fn tick_advances_spinner_only_while_loading() {
    init_logging();
    let (state, _) = submit_query(AppState::new(), "AAPL");
    assert_eq!(state.view().spinner_frame, 0);

    let (mut state, _) = update(state, Msg::Tick);
    assert_eq!(state.view().spinner_frame, 1);
    assert!(state.consume_dirty());

    let (state, _) = update(state, Msg::FetchFailed { request_id: 1 });
    let (mut state, _) = update(state, Msg::Tick);
    state.consume_dirty();
    let (mut state, _) = update(state, Msg::Tick);
    assert!(!state.consume_dirty());
}
