use taskdeck_core::{update, AppState, Msg};

#[test]
fn repeated_url_input_is_noop() {
    let (mut state, _) = update(AppState::new(), Msg::UrlInputChanged("https://x".into()));
    state.consume_dirty();

    let (mut next, effects) = update(state.clone(), Msg::UrlInputChanged("https://x".into()));

    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
    assert_eq!(state, next);
}

#[test]
fn navigating_to_current_location_does_not_mark_dirty() {
    let state = AppState::new();
    let location = state.navigation().location().to_string();
    let (mut next, effects) = update(state.clone(), Msg::Navigated(location));

    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
    assert_eq!(state, next);
}
