//! # Footer Component
//!
//! Persistent bottom navigation bar with five entries.
//!
//! The footer is controlled: it holds no highlight of its own. The active
//! item is a prop taken from `NavigationState`, and taps come back to the
//! event loop as `FooterNavigate` actions. There is only one copy of the
//! navigation state, so the bar cannot drift out of sync with the screen.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::core::state::FooterItem;
use crate::tui::component::Component;

pub struct Footer {
    pub active: FooterItem,
}

impl Footer {
    pub const HEIGHT: u16 = 3;

    pub fn new(active: FooterItem) -> Self {
        Self { active }
    }

    fn block() -> Block<'static> {
        Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan))
    }

    /// One equal-width slot per item, in `FooterItem::ALL` order.
    pub fn item_areas(area: Rect) -> [Rect; 5] {
        Layout::horizontal([Constraint::Ratio(1, 5); 5]).areas(Self::block().inner(area))
    }

    /// Footer item under a screen position, if any.
    pub fn item_at(area: Rect, column: u16, row: u16) -> Option<FooterItem> {
        let position = Position::new(column, row);
        FooterItem::ALL
            .into_iter()
            .zip(Self::item_areas(area))
            .find(|(_, slot)| slot.contains(position))
            .map(|(item, _)| item)
    }

    fn item_style(&self, item: FooterItem) -> Style {
        if item == self.active {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else if item == FooterItem::Action {
            // The central "Add" button always stands out
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        }
    }
}

impl Component for Footer {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Self::block(), area);

        for (index, (item, slot)) in FooterItem::ALL
            .into_iter()
            .zip(Self::item_areas(area))
            .enumerate()
        {
            let label = if item == FooterItem::Action {
                format!("⊕ {}", item.label())
            } else {
                item.label().to_string()
            };
            let lines = vec![
                Line::from(Span::styled(label, self.item_style(item))),
                Line::from(Span::styled(
                    format!("F{}", index + 1),
                    Style::default().fg(Color::DarkGray),
                )),
            ];
            frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), slot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_footer_renders_all_items() {
        let mut terminal = Terminal::new(TestBackend::new(60, Footer::HEIGHT)).unwrap();
        let mut footer = Footer::new(FooterItem::Home);
        terminal.draw(|f| footer.render(f, f.area())).unwrap();

        let text = buffer_text(&terminal);
        for label in ["Home", "Transfers", "Add", "Settings", "Profile", "F1", "F5"] {
            assert!(text.contains(label), "missing {label}");
        }
    }

    #[test]
    fn test_active_item_is_highlighted() {
        let mut terminal = Terminal::new(TestBackend::new(60, Footer::HEIGHT)).unwrap();
        let mut footer = Footer::new(FooterItem::Settings);
        terminal.draw(|f| footer.render(f, f.area())).unwrap();

        let area = Rect::new(0, 0, 60, Footer::HEIGHT);
        let settings_slot = Footer::item_areas(area)[3];
        let buffer = terminal.backend().buffer();
        let highlighted = (settings_slot.x..settings_slot.right())
            .any(|x| buffer[(x, settings_slot.y)].modifier.contains(Modifier::REVERSED));
        assert!(highlighted);

        let home_slot = Footer::item_areas(area)[0];
        let home_highlighted = (home_slot.x..home_slot.right())
            .any(|x| buffer[(x, home_slot.y)].modifier.contains(Modifier::REVERSED));
        assert!(!home_highlighted);
    }

    #[test]
    fn test_item_at_maps_columns_to_items() {
        let area = Rect::new(0, 20, 50, Footer::HEIGHT);
        assert_eq!(Footer::item_at(area, 2, 21), Some(FooterItem::Home));
        assert_eq!(Footer::item_at(area, 25, 22), Some(FooterItem::Action));
        assert_eq!(Footer::item_at(area, 49, 21), Some(FooterItem::Profile));
        // Border row is not clickable
        assert_eq!(Footer::item_at(area, 2, 20), None);
        // Outside the bar
        assert_eq!(Footer::item_at(area, 2, 5), None);
    }
}
