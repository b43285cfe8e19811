//! # Account Overview Component
//!
//! Home screen: balance, spending trend, payment cards, recent transactions
//! and the features picked during onboarding.
//!
//! The content is taller than most terminals, so it is drawn into a
//! `ScrollView`. Scroll position lives in `AccountOverviewState`, which
//! also owns the feature set handed over by the core on confirmation.

use std::collections::BTreeSet;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Sparkline};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::tui::component::Component;
use crate::tui::event::TuiEvent;
use crate::tui::sample_data::{
    AVAILABLE_BALANCE, MONTHLY_SPENDING, SAVED_CARDS, TRANSACTIONS, format_currency,
};

const BALANCE_HEIGHT: u16 = 7;
const HEADING_HEIGHT: u16 = 1;
const CARD_HEIGHT: u16 = 3;
const FEATURES_HEIGHT: u16 = 3;

/// Persistent state for the overview.
#[derive(Default)]
pub struct AccountOverviewState {
    pub scroll_state: ScrollViewState,
    /// Features confirmed during onboarding. Owned here, not by the core.
    pub features: BTreeSet<String>,
}

impl AccountOverviewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_features(&mut self, features: BTreeSet<String>) {
        self.features = features;
        self.scroll_state.scroll_to_top();
    }

    /// Scroll on arrow keys or the mouse wheel. Other events are ignored.
    pub fn scroll(&mut self, event: &TuiEvent) {
        match event {
            TuiEvent::CursorUp | TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::CursorDown | TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            _ => {}
        }
    }

    fn transactions_height() -> u16 {
        TRANSACTIONS.len() as u16 + 2
    }

    /// Total height of everything drawn in the scroll view.
    pub fn content_height() -> u16 {
        BALANCE_HEIGHT
            + HEADING_HEIGHT
            + CARD_HEIGHT * SAVED_CARDS.len() as u16
            + HEADING_HEIGHT
            + Self::transactions_height()
            + FEATURES_HEIGHT
    }
}

/// Transient render wrapper for the overview.
pub struct AccountOverview<'a> {
    state: &'a mut AccountOverviewState,
}

impl<'a> AccountOverview<'a> {
    pub fn new(state: &'a mut AccountOverviewState) -> Self {
        Self { state }
    }
}

fn card_block(title: &str) -> Block<'_> {
    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(title)
}

fn heading(text: &str) -> Paragraph<'_> {
    Paragraph::new(Span::styled(
        text,
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    ))
}

impl Component for AccountOverview<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // Leave a column for the scrollbar
        let width = area.width.saturating_sub(1);
        let height = AccountOverviewState::content_height();

        let mut scroll_view = ScrollView::new(Size::new(width, height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut constraints = vec![
            Constraint::Length(BALANCE_HEIGHT),
            Constraint::Length(HEADING_HEIGHT),
        ];
        constraints.extend(SAVED_CARDS.iter().map(|_| Constraint::Length(CARD_HEIGHT)));
        constraints.extend([
            Constraint::Length(HEADING_HEIGHT),
            Constraint::Length(AccountOverviewState::transactions_height()),
            Constraint::Length(FEATURES_HEIGHT),
        ]);
        let rows = Layout::vertical(constraints).split(Rect::new(0, 0, width, height));
        let card_count = SAVED_CARDS.len();

        // Balance + spending sparkline
        let balance_block = card_block(" Available balance ");
        let balance_inner = balance_block.inner(rows[0]);
        scroll_view.render_widget(balance_block, rows[0]);
        let [amount_area, chart_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(balance_inner);
        scroll_view.render_widget(
            Paragraph::new(Span::styled(
                format_currency(AVAILABLE_BALANCE),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            amount_area,
        );
        scroll_view.render_widget(
            Sparkline::default()
                .data(MONTHLY_SPENDING.iter().map(|(_, spent)| *spent))
                .style(Style::default().fg(Color::Cyan)),
            chart_area,
        );

        // Payment cards
        scroll_view.render_widget(heading("Payment Cards"), rows[1]);
        for (card, row) in SAVED_CARDS.iter().zip(rows[2..2 + card_count].iter()) {
            let mut spans = vec![Span::styled(
                card.label(),
                Style::default().add_modifier(Modifier::BOLD),
            )];
            if card.upgrade_badge {
                spans.push(Span::raw("  "));
                spans.push(Span::styled(
                    " UPGRADE PLAN ",
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                ));
            }
            scroll_view.render_widget(
                Paragraph::new(Line::from(spans)).block(card_block("")),
                *row,
            );
        }

        // Recent transactions
        let tx_heading = rows[2 + card_count];
        let tx_area = rows[3 + card_count];
        scroll_view.render_widget(heading("Recent Transactions"), tx_heading);
        let tx_block = card_block("");
        let tx_inner = tx_block.inner(tx_area);
        scroll_view.render_widget(tx_block, tx_area);
        let lines: Vec<Line> = TRANSACTIONS
            .iter()
            .map(|tx| {
                let (prefix, amount_style) = if tx.is_credit() {
                    ("+", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
                } else {
                    ("", Style::default().add_modifier(Modifier::BOLD))
                };
                let amount = format!("{prefix}{}", format_currency(tx.amount));
                let left = format!("{:>2}  {:<16}{}", tx.initials, tx.name, tx.date);
                let gap = (tx_inner.width as usize)
                    .saturating_sub(left.chars().count() + amount.chars().count());
                Line::from(vec![
                    Span::raw(left),
                    Span::raw(" ".repeat(gap)),
                    Span::styled(amount, amount_style),
                ])
            })
            .collect();
        scroll_view.render_widget(Paragraph::new(lines), tx_inner);

        // Onboarding features
        let features = if self.state.features.is_empty() {
            Span::styled("None selected", Style::default().fg(Color::DarkGray))
        } else {
            Span::styled(
                self.state
                    .features
                    .iter()
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(" · "),
                Style::default().fg(Color::Cyan),
            )
        };
        scroll_view.render_widget(
            Paragraph::new(features).block(card_block(" Your features ")),
            rows[4 + card_count],
        );

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}
