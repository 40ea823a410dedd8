//! Local UI state for the landing page (click counter and theme).
//!
//! DESIGN
//! ======
//! Both cells live in one struct provided as an `RwSignal<UiState>` context,
//! so each click handler is a single `update` and every render sees a
//! consistent pair.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use super::theme::Theme;

/// Counter and theme for the mounted page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub click_count: u64,
    pub theme: Theme,
}

impl UiState {
    /// Record one click on the primary action.
    pub fn increment(&mut self) {
        self.click_count = self.click_count.saturating_add(1);
    }

    /// Switch to the other theme and return it.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }
}
