use super::*;

#[test]
fn ui_state_defaults_to_everything_closed() {
    let state = UiState::default();
    assert!(!state.mobile_menu_open);
    assert!(!state.theme_menu_open);
}

#[test]
fn toggle_mobile_menu_opens_and_closes() {
    let mut state = UiState::default();
    state.toggle_mobile_menu();
    assert!(state.mobile_menu_open);
    state.toggle_mobile_menu();
    assert!(!state.mobile_menu_open);
}

#[test]
fn opening_one_menu_closes_the_other() {
    let mut state = UiState::default();
    state.toggle_mobile_menu();
    state.toggle_theme_menu();
    assert!(!state.mobile_menu_open);
    assert!(state.theme_menu_open);

    state.toggle_mobile_menu();
    assert!(state.mobile_menu_open);
    assert!(!state.theme_menu_open);
}

#[test]
fn close_menus_closes_everything() {
    let mut state = UiState::default();
    state.toggle_theme_menu();
    state.close_menus();
    assert_eq!(state, UiState::default());
}
