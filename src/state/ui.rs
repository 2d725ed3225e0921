//! Transient UI chrome state (mobile menu, theme settings dropdown).
//!
//! Both menus follow "click outside or click item closes" semantics: the
//! open menu renders a backdrop whose click handler calls [`UiState::close_menus`],
//! and every menu item closes on activation. At most one menu is open.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Open/closed flags for the header menus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub mobile_menu_open: bool,
    pub theme_menu_open: bool,
}

impl UiState {
    /// Close whatever is open.
    pub fn close_menus(&mut self) {
        self.mobile_menu_open = false;
        self.theme_menu_open = false;
    }

    /// Toggle the mobile navigation menu, closing the theme dropdown.
    pub fn toggle_mobile_menu(&mut self) {
        let next = !self.mobile_menu_open;
        self.close_menus();
        self.mobile_menu_open = next;
    }

    /// Toggle the theme settings dropdown, closing the mobile menu.
    pub fn toggle_theme_menu(&mut self) {
        let next = !self.theme_menu_open;
        self.close_menus();
        self.theme_menu_open = next;
    }
}
