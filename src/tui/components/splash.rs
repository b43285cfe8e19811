//! # Splash Component
//!
//! Full-viewport welcome screen with the "Get Started" button. There is no
//! header or footer while it is shown.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::Component;

const EMBLEM: [&str; 5] = [
    "    ▄▄▄▄▄▄▄    ",
    "  ▄█████████▄  ",
    "  ▐ █ █ █ █ ▌  ",
    "  ▐ █ █ █ █ ▌  ",
    " ▀▀▀▀▀▀▀▀▀▀▀▀▀ ",
];

const BUTTON_WIDTH: u16 = 24;
const BUTTON_HEIGHT: u16 = 3;

pub struct Splash;

impl Splash {
    /// `[emblem, text, button, hint]` stacked in the middle of the screen.
    fn sections(area: Rect) -> [Rect; 4] {
        Layout::vertical([
            Constraint::Length(EMBLEM.len() as u16),
            Constraint::Length(4),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(area)
    }

    /// Where the "Get Started" button is drawn, for mouse hit testing.
    pub fn button_area(area: Rect) -> Rect {
        let [_, _, button_row, _] = Self::sections(area);
        let [button] = Layout::horizontal([Constraint::Length(BUTTON_WIDTH)])
            .flex(Flex::Center)
            .areas(button_row);
        button
    }
}

impl Component for Splash {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [emblem_area, text_area, _, hint_area] = Self::sections(area);

        let emblem: Vec<Line> = EMBLEM
            .iter()
            .map(|row| Line::from(Span::styled(*row, Style::default().fg(Color::Cyan))))
            .collect();
        frame.render_widget(Paragraph::new(emblem).alignment(Alignment::Center), emblem_area);

        let text = vec![
            Line::default(),
            Line::from(Span::styled(
                "BankEase",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Your banking, simplified.",
                Style::default().fg(Color::DarkGray),
            )),
            Line::default(),
        ];
        frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), text_area);

        let button = Paragraph::new(Span::styled(
            "Get Started",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(button, Self::button_area(area));

        let hint = Paragraph::new(Span::styled(
            "Enter to start · q to quit",
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(hint, hint_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_splash_renders_brand_and_button() {
        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        terminal.draw(|f| Splash.render(f, f.area())).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("BankEase"));
        assert!(text.contains("Your banking, simplified."));
        assert!(text.contains("Get Started"));
    }

    #[test]
    fn test_button_area_is_centered() {
        let area = Rect::new(0, 0, 60, 24);
        let button = Splash::button_area(area);
        assert_eq!(button.width, BUTTON_WIDTH);
        assert_eq!(button.height, BUTTON_HEIGHT);
        assert_eq!(button.x, (60 - BUTTON_WIDTH) / 2);
    }
}
