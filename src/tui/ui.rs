//! Frame layout, drawing and mouse hit testing.
//!
//! The same `screen_layout()` feeds both drawing and hit testing, so a
//! click always lands on what was drawn.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;

use crate::core::state::{FooterItem, NavigationState, Screen};
use crate::core::view::{HeaderAction, ViewDirectives, derive_view};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    AccountOverview, FeatureSelection, Footer, Header, PaymentForm, Splash, TransactionStatus,
    UserSettings,
};

/// Regions of one frame. Chrome that is not shown has no region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Option<Rect>,
    pub body: Rect,
    pub status: Option<Rect>,
    pub footer: Option<Rect>,
}

pub fn screen_layout(area: Rect, view: &ViewDirectives) -> ScreenLayout {
    use Constraint::{Length, Min};

    // Splash owns the full viewport
    if view.header.is_none() && view.footer.is_none() {
        return ScreenLayout {
            header: None,
            body: area,
            status: None,
            footer: None,
        };
    }

    let header_height = if view.header.is_some() { Header::HEIGHT } else { 0 };
    let footer_height = if view.footer.is_some() { Footer::HEIGHT } else { 0 };
    let [header, body, status, footer] = Layout::vertical([
        Length(header_height),
        Min(0),
        Length(1),
        Length(footer_height),
    ])
    .areas(area);

    ScreenLayout {
        header: view.header.map(|_| header),
        body,
        status: Some(status),
        footer: view.footer.map(|_| footer),
    }
}

pub fn draw_ui(frame: &mut Frame, state: &NavigationState, tui: &mut TuiState) {
    let view = derive_view(state);
    let layout = screen_layout(frame.area(), &view);

    if let (Some(directives), Some(area)) = (view.header, layout.header) {
        Header::new(&directives).render(frame, area);
    }

    draw_body(frame, layout.body, view.screen, tui);

    if let Some(area) = layout.status {
        let text = tui.status_message.as_deref().unwrap_or("");
        frame.render_widget(
            Paragraph::new(Span::styled(text, Style::default().fg(Color::Yellow))),
            area,
        );
    }

    if let (Some(active), Some(area)) = (view.footer, layout.footer) {
        Footer::new(active).render(frame, area);
    }
}

fn draw_body(frame: &mut Frame, area: Rect, screen: Screen, tui: &mut TuiState) {
    match screen {
        Screen::Splash => Splash.render(frame, area),
        Screen::FeatureSelection => FeatureSelection::new(&mut tui.features).render(frame, area),
        Screen::AccountOverview => AccountOverview::new(&mut tui.overview).render(frame, area),
        Screen::PaymentForm => PaymentForm::new(&mut tui.payment).render(frame, area),
        Screen::TransactionStatus => {
            TransactionStatus::new(tui.receipt.as_ref(), &tui.holder_name, tui.spinner_frame)
                .render(frame, area)
        }
        Screen::UserSettings => {
            UserSettings::new(&mut tui.settings, &tui.holder_name, &tui.member_since)
                .render(frame, area)
        }
    }
}

/// Clickable thing under the mouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Back,
    HeaderAction(HeaderAction),
    Footer(FooterItem),
    GetStarted,
}

/// Find what was drawn at `(column, row)`. Only affordances that are
/// actually on screen can be hit.
pub fn hit_test(column: u16, row: u16, frame_area: Rect, view: &ViewDirectives) -> Option<Hit> {
    let position = Position::new(column, row);
    let layout = screen_layout(frame_area, view);

    if view.screen == Screen::Splash {
        return Splash::button_area(layout.body)
            .contains(position)
            .then_some(Hit::GetStarted);
    }

    if let (Some(directives), Some(area)) = (view.header, layout.header) {
        let header = Header::new(&directives);
        if header.back_area(area).is_some_and(|r| r.contains(position)) {
            return Some(Hit::Back);
        }
        if let Some((action, _)) = header
            .action_areas(area)
            .into_iter()
            .find(|(_, r)| r.contains(position))
        {
            return Some(Hit::HeaderAction(action));
        }
    }

    if let Some(area) = layout.footer {
        return Footer::item_at(area, column, row).map(Hit::Footer);
    }

    None
}
