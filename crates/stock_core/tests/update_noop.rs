use stock_core::{update, AppState, Msg};

#[test]
fn dismiss_without_error_changes_nothing() {
    let (mut state, _) = update(AppState::new(), Msg::QueryChanged("AAPL".to_string()));
    state.consume_dirty();
    let (mut next, effects) = update(state.clone(), Msg::Dismissed);

    assert_eq!(state, next);
    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
}

#[test]
fn tick_while_idle_changes_nothing() {
    let state = AppState::new();
    let (mut next, effects) = update(state.clone(), Msg::Tick);

    assert_eq!(state, next);
    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
}
