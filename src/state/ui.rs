#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the navigation chrome.
///
/// The mobile menu does not auto-close after a link or theme selection; the
/// visitor dismisses it with the toggle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub menu_open: bool,
}

impl UiState {
    /// Flip the mobile menu panel open or closed.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }
}
