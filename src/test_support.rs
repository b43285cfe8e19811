//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use ratatui::Terminal;
use ratatui::backend::TestBackend;

use crate::core::action::{Action, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{FooterItem, NavigationState, Screen};
use crate::tui::TuiState;

/// Builds a state directly, skipping the path that would lead there.
pub fn state_at(screen: Screen, footer: FooterItem) -> NavigationState {
    NavigationState::with(screen, footer)
}

/// Runs `actions` from the initial state and returns where they end up.
pub fn run(actions: &[Action]) -> NavigationState {
    let mut state = NavigationState::new();
    for action in actions {
        update(&mut state, action.clone());
    }
    state
}

/// TUI state built from default config.
pub fn test_tui() -> TuiState {
    TuiState::new(&ResolvedConfig::default())
}

/// Flattens the terminal buffer into one string for `contains` checks.
pub fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect()
}
