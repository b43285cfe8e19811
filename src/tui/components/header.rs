//! # Header Component
//!
//! Top bar shown on every screen except splash.
//!
//! ```text
//! ╭──────────────────────────────────────────────────────╮
//! │‹ Back esc        My Account        n Alerts p Profile│
//! ╰──────────────────────────────────────────────────────╯
//! ```
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! Header is purely presentational. The title, the back flag and the extra
//! actions all come from `core::view::derive_view()`; the header never
//! decides on its own whether back makes sense.
//!
//! ### Affordance Suppression
//!
//! When `show_back` is false the back region is left blank and
//! `back_area()` returns `None`, so hit testing cannot produce a back press
//! for a button that is not there.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::view::{HeaderAction, HeaderDirectives};
use crate::tui::component::Component;

const BACK_WIDTH: u16 = 11;
const ACTIONS_WIDTH: u16 = 22;

pub struct Header {
    pub title: &'static str,
    pub show_back: bool,
    pub actions: &'static [HeaderAction],
}

impl Header {
    pub const HEIGHT: u16 = 3;

    pub fn new(directives: &HeaderDirectives) -> Self {
        Self {
            title: directives.title,
            show_back: directives.show_back,
            actions: directives.actions,
        }
    }

    fn block() -> Block<'static> {
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
    }

    /// `[back, title, actions]` columns inside the border.
    fn columns(area: Rect) -> [Rect; 3] {
        Layout::horizontal([
            Constraint::Length(BACK_WIDTH),
            Constraint::Min(0),
            Constraint::Length(ACTIONS_WIDTH),
        ])
        .areas(Self::block().inner(area))
    }

    /// Clickable back region, if a back button is drawn.
    pub fn back_area(&self, area: Rect) -> Option<Rect> {
        self.show_back.then(|| Self::columns(area)[0])
    }

    /// Clickable region per header action, left to right.
    pub fn action_areas(&self, area: Rect) -> Vec<(HeaderAction, Rect)> {
        if self.actions.is_empty() {
            return Vec::new();
        }
        let [_, _, actions_area] = Self::columns(area);
        let count = self.actions.len() as u32;
        let slots = Layout::horizontal(
            self.actions
                .iter()
                .map(|_| Constraint::Ratio(1, count))
                .collect::<Vec<_>>(),
        )
        .split(actions_area);
        self.actions.iter().copied().zip(slots.iter().copied()).collect()
    }
}

impl Component for Header {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Self::block(), area);
        let [back_area, title_area, _] = Self::columns(area);

        if self.show_back {
            let back = Line::from(vec![
                Span::styled(
                    "‹ Back",
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" esc", Style::default().fg(Color::DarkGray)),
            ]);
            frame.render_widget(Paragraph::new(back), back_area);
        }

        let title = Paragraph::new(Span::styled(
            self.title,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(title, title_area);

        for (action, slot) in self.action_areas(area) {
            let line = Line::from(vec![
                Span::styled(
                    action.key().to_string(),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::styled(action.label(), Style::default().fg(Color::Cyan)),
            ]);
            frame.render_widget(Paragraph::new(line).alignment(Alignment::Right), slot);
        }
    }
}
