//! # Transaction Status Component
//!
//! Confirmation screen shown after a payment is submitted. Reached only
//! through `PaymentSubmitted`, so a receipt is normally present; without
//! one the screen falls back to a plain "processing" message.

use chrono::{DateTime, Local};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, List, ListItem, Paragraph};
use uuid::Uuid;

use crate::tui::component::Component;
use crate::tui::components::payment_form::PaymentDraft;
use crate::tui::sample_data::format_currency;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const OPTIONS: [&str; 3] = ["Contact support", "Cancel transaction", "View payment history"];

/// Locally generated record of a submitted payment.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentReceipt {
    pub draft: PaymentDraft,
    pub reference: Uuid,
    pub submitted_at: DateTime<Local>,
}

impl PaymentReceipt {
    pub fn new(draft: PaymentDraft) -> Self {
        Self {
            draft,
            reference: Uuid::new_v4(),
            submitted_at: Local::now(),
        }
    }

    /// First block of the uuid, upper-cased. Enough to quote to support.
    pub fn short_reference(&self) -> String {
        self.reference
            .simple()
            .to_string()
            .chars()
            .take(8)
            .collect::<String>()
            .to_uppercase()
    }
}

pub struct TransactionStatus<'a> {
    pub receipt: Option<&'a PaymentReceipt>,
    pub holder_name: &'a str,
    pub spinner_frame: usize,
}

impl<'a> TransactionStatus<'a> {
    pub fn new(receipt: Option<&'a PaymentReceipt>, holder_name: &'a str, spinner_frame: usize) -> Self {
        Self {
            receipt,
            holder_name,
            spinner_frame,
        }
    }

    fn details(&self) -> Vec<Line<'static>> {
        let label = Style::default().fg(Color::DarkGray);
        let mut lines = vec![Line::from(vec![
            Span::styled("Paid from: ", label),
            Span::raw(format!("{}, Savings Account", self.holder_name)),
        ])];

        if let Some(receipt) = self.receipt {
            lines.extend([
                Line::from(vec![
                    Span::styled("Amount:    ", label),
                    Span::styled(
                        format_currency(receipt.draft.amount),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(vec![
                    Span::styled("Payee:     ", label),
                    Span::raw(receipt.draft.payee.clone()),
                ]),
                Line::from(vec![
                    Span::styled("Card:      ", label),
                    Span::raw(receipt.draft.card.label()),
                ]),
                Line::from(vec![
                    Span::styled("Reference: ", label),
                    Span::raw(receipt.short_reference()),
                ]),
                Line::from(vec![
                    Span::styled("Submitted: ", label),
                    Span::raw(receipt.submitted_at.format("%b %e, %Y %H:%M").to_string()),
                ]),
            ]);
        }
        lines
    }
}

impl Component for TransactionStatus<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [banner_area, details_area, options_area] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Length(8),
            Constraint::Min(0),
        ])
        .areas(area);

        let spinner = SPINNER[self.spinner_frame % SPINNER.len()];
        let banner = Paragraph::new(vec![
            Line::default(),
            Line::from(vec![
                Span::styled(format!("{spinner} "), Style::default().fg(Color::Cyan)),
                Span::styled(
                    "Your payment is processing!",
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                "We'll let you know once it clears.",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(banner, banner_area);

        let details = Paragraph::new(self.details()).block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Details "),
        );
        frame.render_widget(details, details_area);

        let options: Vec<ListItem> = OPTIONS
            .iter()
            .map(|label| {
                ListItem::new(Line::from(vec![
                    Span::raw(*label),
                    Span::styled("  ›", Style::default().fg(Color::DarkGray)),
                ]))
            })
            .collect();
        let list = List::new(options).block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Options "),
        );
        frame.render_widget(list, options_area);
    }
}
