use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_menu_closed() {
    let state = UiState::default();
    assert!(!state.menu_open);
}

// =============================================================
// Menu toggling
// =============================================================

#[test]
fn toggle_menu_opens_closed_menu() {
    let mut state = UiState::default();
    state.toggle_menu();
    assert!(state.menu_open);
}

#[test]
fn toggle_menu_twice_returns_to_prior_state() {
    let mut state = UiState::default();
    state.toggle_menu();
    state.toggle_menu();
    assert_eq!(state, UiState::default());

    let mut open = UiState { menu_open: true };
    open.toggle_menu();
    open.toggle_menu();
    assert!(open.menu_open);
}
