#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the dashboard shell. Only the mobile sidebar toggle lives
/// here; everything else the shell shows is derived from the session.
#[derive(Clone, Copy, Debug, Default)]
pub struct UiState {
    pub sidebar_open: bool,
}

impl UiState {
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }
}
