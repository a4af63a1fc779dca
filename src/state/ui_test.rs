use super::*;

#[test]
fn sidebar_starts_closed() {
    let state = UiState::default();
    assert!(!state.sidebar_open);
}

#[test]
fn toggle_flips_sidebar() {
    let mut state = UiState::default();
    state.toggle_sidebar();
    assert!(state.sidebar_open);
    state.toggle_sidebar();
    assert!(!state.sidebar_open);
}

#[test]
fn close_is_idempotent() {
    let mut state = UiState::default();
    state.toggle_sidebar();
    state.close_sidebar();
    state.close_sidebar();
    assert!(!state.sidebar_open);
}
