//! # Payment Form Component
//!
//! Collects payee, card and amount, and validates them before anything is
//! submitted.
//!
//! ## Responsibilities
//!
//! - Text entry for the payee account and the amount
//! - Card choice among the saved cards (Left/Right)
//! - Focus cycling (Tab / Shift-Tab / Up / Down)
//! - Validation on Enter, with a message under each bad field
//!
//! The navigation core never sees the form data. A valid form emits
//! `PaymentEvent::Submitted(PaymentDraft)`; the event loop keeps the draft
//! and dispatches a bare `PaymentSubmitted`.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::sample_data::{SAVED_CARDS, SavedCard, format_currency};

pub const AMOUNT_ERROR: &str = "Amount must be positive.";
pub const PAYEE_ERROR: &str = "Payee account is required.";
pub const CARD_ERROR: &str = "Please select a card.";
pub const AMOUNT_LIMIT_ERROR: &str = "Amount exceeds the $1,000,000.00 limit.";

/// Largest single payment the form accepts.
pub const MAX_PAYMENT_AMOUNT: f64 = 1_000_000.0;

const MIN_PAYEE_LEN: usize = 5;
const FIELD_HEIGHT: u16 = 3;
const ERROR_HEIGHT: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Payee,
    Card,
    Amount,
}

impl Field {
    const ORDER: [Field; 3] = [Field::Payee, Field::Card, Field::Amount];

    fn next(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    fn label(self) -> &'static str {
        match self {
            Field::Payee => " Payee Account ",
            Field::Card => " Card Information ",
            Field::Amount => " Amount ",
        }
    }
}

/// A validated payment, ready to hand to the status screen.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentDraft {
    pub payee: String,
    pub card: SavedCard,
    pub amount: f64,
}

/// Per-field validation messages from the last submit attempt.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldErrors {
    pub payee: Option<&'static str>,
    pub card: Option<&'static str>,
    pub amount: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.payee.is_none() && self.card.is_none() && self.amount.is_none()
    }

    fn for_field(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Payee => self.payee,
            Field::Card => self.card,
            Field::Amount => self.amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PaymentEvent {
    Submitted(PaymentDraft),
}

/// Persistent form state.
pub struct PaymentFormState {
    pub payee: String,
    pub amount: String,
    /// Index into `SAVED_CARDS`
    pub card: Option<usize>,
    pub focus: Field,
    pub errors: FieldErrors,
    default_amount: f64,
}

impl PaymentFormState {
    pub fn new(default_amount: f64) -> Self {
        Self {
            payee: String::new(),
            amount: format!("{default_amount:.2}"),
            card: None,
            focus: Field::Payee,
            errors: FieldErrors::default(),
            default_amount,
        }
    }

    /// Back to the pristine form, as if freshly mounted.
    pub fn reset(&mut self) {
        *self = Self::new(self.default_amount);
    }

    pub fn default_amount(&self) -> f64 {
        self.default_amount
    }

    /// Check every field, recording a message for each one that fails.
    pub fn validate(&mut self) -> Result<PaymentDraft, FieldErrors> {
        let mut errors = FieldErrors::default();

        let payee = self.payee.trim();
        if payee.chars().count() < MIN_PAYEE_LEN {
            errors.payee = Some(PAYEE_ERROR);
        }

        let card = self.card.and_then(|idx| SAVED_CARDS.get(idx).copied());
        if card.is_none() {
            errors.card = Some(CARD_ERROR);
        }

        let amount = match self
            .amount
            .trim()
            .trim_start_matches('$')
            .replace(',', "")
            .parse::<f64>()
        {
            Ok(a) if a.is_finite() && a > MAX_PAYMENT_AMOUNT => {
                errors.amount = Some(AMOUNT_LIMIT_ERROR);
                None
            }
            Ok(a) if a.is_finite() && a > 0.0 => Some(a),
            _ => {
                errors.amount = Some(AMOUNT_ERROR);
                None
            }
        };

        self.errors = errors.clone();
        match (card, amount) {
            (Some(card), Some(amount)) if errors.is_empty() => Ok(PaymentDraft {
                payee: payee.to_string(),
                card,
                amount,
            }),
            _ => Err(errors),
        }
    }

    fn focused_text(&mut self) -> Option<&mut String> {
        match self.focus {
            Field::Payee => Some(&mut self.payee),
            Field::Amount => Some(&mut self.amount),
            Field::Card => None,
        }
    }

    fn cycle_card(&mut self, forward: bool) {
        let count = SAVED_CARDS.len();
        self.card = Some(match (self.card, forward) {
            (None, true) => 0,
            (None, false) => count - 1,
            (Some(idx), true) => (idx + 1) % count,
            (Some(idx), false) => (idx + count - 1) % count,
        });
        self.errors.card = None;
    }

    fn clear_error(&mut self) {
        match self.focus {
            Field::Payee => self.errors.payee = None,
            Field::Card => self.errors.card = None,
            Field::Amount => self.errors.amount = None,
        }
    }
}

impl EventHandler for PaymentFormState {
    type Event = PaymentEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<PaymentEvent> {
        match event {
            TuiEvent::Tab | TuiEvent::CursorDown => {
                self.focus = self.focus.next();
                None
            }
            TuiEvent::BackTab | TuiEvent::CursorUp => {
                self.focus = self.focus.prev();
                None
            }
            TuiEvent::CursorLeft | TuiEvent::CursorRight | TuiEvent::InputChar(' ')
                if self.focus == Field::Card =>
            {
                self.cycle_card(!matches!(event, TuiEvent::CursorLeft));
                None
            }
            TuiEvent::InputChar(c) => {
                if let Some(text) = self.focused_text() {
                    text.push(*c);
                    self.clear_error();
                }
                None
            }
            TuiEvent::Paste(pasted) => {
                if let Some(text) = self.focused_text() {
                    text.extend(pasted.chars().filter(|c| !c.is_control()));
                    self.clear_error();
                }
                None
            }
            TuiEvent::Backspace => {
                if let Some(text) = self.focused_text() {
                    text.pop();
                }
                None
            }
            TuiEvent::Submit => match self.validate() {
                Ok(draft) => Some(PaymentEvent::Submitted(draft)),
                Err(errors) => {
                    log::debug!("Payment form rejected: {:?}", errors);
                    None
                }
            },
            _ => None,
        }
    }
}

/// Transient render wrapper for the payment form.
pub struct PaymentForm<'a> {
    state: &'a mut PaymentFormState,
}

impl<'a> PaymentForm<'a> {
    pub fn new(state: &'a mut PaymentFormState) -> Self {
        Self { state }
    }

    fn field_value(&self, field: Field) -> Line<'static> {
        match field {
            Field::Payee if self.state.payee.is_empty() => Line::from(Span::styled(
                "e.g., John Doe Savings",
                Style::default().fg(Color::DarkGray),
            )),
            Field::Payee => Line::from(self.state.payee.clone()),
            Field::Amount => Line::from(self.state.amount.clone()),
            Field::Card => match self.state.card.and_then(|idx| SAVED_CARDS.get(idx)) {
                Some(card) => Line::from(format!("‹ {} ›", card.label())),
                None => Line::from(Span::styled(
                    "‹ Select a card to pay with ›",
                    Style::default().fg(Color::DarkGray),
                )),
            },
        }
    }
}

impl Component for PaymentForm<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [due_area, payee_area, payee_err, card_area, card_err, amount_area, amount_err, upgrade_area, _, proceed_area] =
            Layout::vertical([
                Constraint::Length(3),
                Constraint::Length(FIELD_HEIGHT),
                Constraint::Length(ERROR_HEIGHT),
                Constraint::Length(FIELD_HEIGHT),
                Constraint::Length(ERROR_HEIGHT),
                Constraint::Length(FIELD_HEIGHT),
                Constraint::Length(ERROR_HEIGHT),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .areas(area);

        let due = Paragraph::new(vec![
            Line::from(Span::styled("Total Amount Due", Style::default().fg(Color::DarkGray))),
            Line::from(Span::styled(
                format_currency(self.state.default_amount),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(due, due_area);

        let fields = [
            (Field::Payee, payee_area, payee_err),
            (Field::Card, card_area, card_err),
            (Field::Amount, amount_area, amount_err),
        ];
        for (field, field_area, error_area) in fields {
            let focused = self.state.focus == field;
            let border = if focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let block = Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(border)
                .title(field.label());
            let inner = block.inner(field_area);
            frame.render_widget(Paragraph::new(self.field_value(field)).block(block), field_area);

            if focused && field != Field::Card {
                let text = match field {
                    Field::Payee => &self.state.payee,
                    _ => &self.state.amount,
                };
                let column = (text.width() as u16).min(inner.width.saturating_sub(1));
                frame.set_cursor_position((inner.x + column, inner.y));
            }

            if let Some(message) = self.state.errors.for_field(field) {
                frame.render_widget(
                    Paragraph::new(Span::styled(message, Style::default().fg(Color::Red))),
                    error_area,
                );
            }
        }

        frame.render_widget(
            Paragraph::new(Span::styled(
                "UPGRADE PLAN for lower fees",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            upgrade_area,
        );

        let proceed = Paragraph::new(Span::styled(
            "Proceed",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan))
                .title_bottom(Line::from(" Tab Next field  ←→ Card  Enter Proceed ").centered()),
        );
        frame.render_widget(proceed, proceed_area);
    }
}
