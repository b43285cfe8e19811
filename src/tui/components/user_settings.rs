//! # User Settings Component
//!
//! Profile card plus two groups of settings rows and a "Log out" entry.
//! The rows themselves open nothing yet; choosing one reports its label
//! so the event loop can show it on the status line.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, List, ListItem, ListState, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const ACCOUNT: [&str; 3] = ["Account Holder", "Security Settings", "Notification Preferences"];
const PREFERENCES: [&str; 3] = ["Language", "App Preferences", "Customer Service"];

/// Settings rows followed by the logout row.
const ROW_COUNT: usize = ACCOUNT.len() + PREFERENCES.len() + 1;
const LOGOUT_ROW: usize = ROW_COUNT - 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsEvent {
    Open(&'static str),
    Logout,
}

pub struct UserSettingsState {
    pub selected: usize,
    list_state: ListState,
}

impl Default for UserSettingsState {
    fn default() -> Self {
        Self::new()
    }
}

impl UserSettingsState {
    pub fn new() -> Self {
        Self {
            selected: 0,
            list_state: ListState::default(),
        }
    }

    fn row_label(row: usize) -> &'static str {
        ACCOUNT
            .iter()
            .chain(PREFERENCES.iter())
            .nth(row)
            .copied()
            .unwrap_or("Log out")
    }

    fn select(&mut self, row: usize) {
        self.selected = row.min(LOGOUT_ROW);
    }
}

impl EventHandler for UserSettingsState {
    type Event = SettingsEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<SettingsEvent> {
        match event {
            TuiEvent::CursorUp | TuiEvent::BackTab => {
                self.select(self.selected.saturating_sub(1));
                None
            }
            TuiEvent::CursorDown | TuiEvent::Tab => {
                self.select(self.selected + 1);
                None
            }
            TuiEvent::Submit if self.selected == LOGOUT_ROW => Some(SettingsEvent::Logout),
            TuiEvent::Submit => Some(SettingsEvent::Open(Self::row_label(self.selected))),
            _ => None,
        }
    }
}

pub struct UserSettings<'a> {
    state: &'a mut UserSettingsState,
    holder_name: &'a str,
    member_since: &'a str,
}

impl<'a> UserSettings<'a> {
    pub fn new(state: &'a mut UserSettingsState, holder_name: &'a str, member_since: &'a str) -> Self {
        Self {
            state,
            holder_name,
            member_since,
        }
    }
}

fn group_heading(text: &'static str) -> ListItem<'static> {
    ListItem::new(Line::from(Span::styled(
        text,
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD),
    )))
}

impl Component for UserSettings<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [profile_area, list_area] =
            Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).areas(area);

        let profile = Paragraph::new(vec![
            Line::from(Span::styled(
                self.holder_name.to_string(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("Member since {}", self.member_since),
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(profile, profile_area);

        // Headings are interleaved with selectable rows, so the list index
        // differs from `selected`.
        let mut items = vec![group_heading("ACCOUNT")];
        items.extend(ACCOUNT.iter().map(|label| ListItem::new(format!("{label}  ›"))));
        items.push(group_heading("PREFERENCES"));
        items.extend(PREFERENCES.iter().map(|label| ListItem::new(format!("{label}  ›"))));
        items.push(ListItem::new(Line::from(Span::styled(
            "Log out",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))));

        let list_index = match self.state.selected {
            row if row < ACCOUNT.len() => row + 1,
            row => row + 2,
        };
        self.state.list_state.select(Some(list_index));

        let list = List::new(items)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title_bottom(Line::from(" ↑↓ Move  Enter Select ").centered()),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("› ");
        frame.render_stateful_widget(list, list_area, &mut self.state.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_enter_opens_first_row() {
        let mut state = UserSettingsState::new();
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(SettingsEvent::Open("Account Holder"))
        );
    }

    #[test]
    fn test_crosses_into_second_group() {
        let mut state = UserSettingsState::new();
        for _ in 0..ACCOUNT.len() {
            state.handle_event(&TuiEvent::CursorDown);
        }
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(SettingsEvent::Open("Language"))
        );
    }

    #[test]
    fn test_last_row_logs_out() {
        let mut state = UserSettingsState::new();
        for _ in 0..20 {
            state.handle_event(&TuiEvent::CursorDown);
        }
        assert_eq!(state.selected, LOGOUT_ROW);
        assert_eq!(state.handle_event(&TuiEvent::Submit), Some(SettingsEvent::Logout));
    }

    #[test]
    fn test_render_shows_profile_and_groups() {
        let mut terminal = Terminal::new(TestBackend::new(50, 20)).unwrap();
        let mut state = UserSettingsState::new();
        terminal
            .draw(|f| UserSettings::new(&mut state, "Alex Thompson", "June 2022").render(f, f.area()))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Alex Thompson"));
        assert!(text.contains("Member since June 2022"));
        assert!(text.contains("ACCOUNT"));
        assert!(text.contains("PREFERENCES"));
        assert!(text.contains("Log out"));
    }
}
