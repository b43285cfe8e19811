//! # Feature Selection Component
//!
//! Lets the user toggle the banking features they want, then confirm.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `FeatureSelectionState` lives in `TuiState`
//! - `FeatureSelection` is created each frame with borrowed state
//!
//! "Next" stays disabled until at least one feature is toggled on. It is
//! drawn dimmed and Enter does nothing, the same as a disabled button.

use std::collections::BTreeSet;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, List, ListItem, ListState, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::sample_data::FEATURES;

/// Events emitted by the feature picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeatureEvent {
    Confirmed(BTreeSet<String>),
}

/// Persistent state for the feature picker.
pub struct FeatureSelectionState {
    pub toggled: [bool; FEATURES.len()],
    pub cursor: usize,
    pub list_state: ListState,
}

impl Default for FeatureSelectionState {
    fn default() -> Self {
        Self::new()
    }
}

impl FeatureSelectionState {
    pub fn new() -> Self {
        Self {
            toggled: [false; FEATURES.len()],
            cursor: 0,
            list_state: ListState::default().with_selected(Some(0)),
        }
    }

    pub fn selected(&self) -> BTreeSet<String> {
        FEATURES
            .iter()
            .zip(self.toggled)
            .filter(|(_, on)| *on)
            .map(|(name, _)| name.to_string())
            .collect()
    }

    pub fn can_confirm(&self) -> bool {
        self.toggled.iter().any(|on| *on)
    }

    fn move_cursor(&mut self, down: bool) {
        self.cursor = if down {
            (self.cursor + 1).min(FEATURES.len() - 1)
        } else {
            self.cursor.saturating_sub(1)
        };
        self.list_state.select(Some(self.cursor));
    }
}

impl EventHandler for FeatureSelectionState {
    type Event = FeatureEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<FeatureEvent> {
        match event {
            TuiEvent::CursorUp => {
                self.move_cursor(false);
                None
            }
            TuiEvent::CursorDown | TuiEvent::Tab => {
                self.move_cursor(true);
                None
            }
            TuiEvent::InputChar(' ') => {
                self.toggled[self.cursor] = !self.toggled[self.cursor];
                None
            }
            TuiEvent::Submit if self.can_confirm() => Some(FeatureEvent::Confirmed(self.selected())),
            TuiEvent::Submit => {
                log::debug!("Next pressed with no features selected; button is disabled");
                None
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the feature picker.
pub struct FeatureSelection<'a> {
    state: &'a mut FeatureSelectionState,
}

impl<'a> FeatureSelection<'a> {
    pub fn new(state: &'a mut FeatureSelectionState) -> Self {
        Self { state }
    }
}

impl Component for FeatureSelection<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [intro_area, list_area, next_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .areas(area);

        let intro = Paragraph::new(vec![
            Line::from(Span::styled(
                "Choose your banking features",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Select the features you need.",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(intro, intro_area);

        let items: Vec<ListItem> = FEATURES
            .iter()
            .zip(self.state.toggled)
            .map(|(name, on)| {
                let (mark, style) = if on {
                    ("[x]", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                } else {
                    ("[ ]", Style::default().fg(Color::Gray))
                };
                ListItem::new(Line::from(Span::styled(format!("{mark} {name}"), style)))
            })
            .collect();
        let list = List::new(items)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title_bottom(Line::from(" ↑↓ Move  Space Toggle  Enter Next ").centered()),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("› ");
        frame.render_stateful_widget(list, list_area, &mut self.state.list_state);

        let next_style = if self.state.can_confirm() {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        };
        let next = Paragraph::new(Span::styled("Next", next_style))
            .alignment(Alignment::Center)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(next_style),
            );
        frame.render_widget(next, next_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_enter_with_nothing_selected_emits_nothing() {
        let mut state = FeatureSelectionState::new();
        assert_eq!(state.handle_event(&TuiEvent::Submit), None);
    }

    #[test]
    fn test_toggle_and_confirm() {
        let mut state = FeatureSelectionState::new();
        // Payments
        state.handle_event(&TuiEvent::InputChar(' '));
        // Savings
        state.handle_event(&TuiEvent::CursorDown);
        state.handle_event(&TuiEvent::InputChar(' '));

        let expected: BTreeSet<String> =
            ["Payments", "Savings"].iter().map(|s| s.to_string()).collect();
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(FeatureEvent::Confirmed(expected))
        );
    }

    #[test]
    fn test_toggle_twice_deselects() {
        let mut state = FeatureSelectionState::new();
        state.handle_event(&TuiEvent::InputChar(' '));
        state.handle_event(&TuiEvent::InputChar(' '));
        assert!(!state.can_confirm());
        assert!(state.selected().is_empty());
    }

    #[test]
    fn test_cursor_is_clamped() {
        let mut state = FeatureSelectionState::new();
        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.cursor, 0);
        for _ in 0..20 {
            state.handle_event(&TuiEvent::CursorDown);
        }
        assert_eq!(state.cursor, FEATURES.len() - 1);
        assert_eq!(state.list_state.selected(), Some(FEATURES.len() - 1));
    }

    #[test]
    fn test_render_lists_features() {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        let mut state = FeatureSelectionState::new();
        state.handle_event(&TuiEvent::InputChar(' '));
        terminal
            .draw(|f| FeatureSelection::new(&mut state).render(f, f.area()))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Choose your banking features"));
        assert!(text.contains("[x] Payments"));
        assert!(text.contains("[ ] Savings"));
        assert!(text.contains("Next"));
    }
}
