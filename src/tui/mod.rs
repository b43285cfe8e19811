//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates terminal events into `core::action::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm. The
//! navigation core can be driven by any other adapter.
//!
//! ## Event Routing
//!
//! `route_event()` decides what a terminal event means on the current
//! screen. Chrome comes first and is gated by `derive_view()`:
//!
//! - F1..F5 only reach the core while a footer is drawn
//! - Esc only becomes `Back` while a back button is drawn
//! - Clicks go through `ui::hit_test()`, which only sees drawn affordances
//!
//! Everything else goes to the active screen's component.
//!
//! ## Redraw Strategy
//!
//! - **Animating** (transaction status spinner): redraws every tick.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.

pub mod component;
pub mod components;
pub mod event;
pub mod sample_data;
pub mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::SetCursorStyle;
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::DefaultTerminal;
use ratatui::layout::Rect;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{NavigationState, Screen};
use crate::core::view::{HeaderAction, derive_view};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    AccountOverviewState, FeatureEvent, FeatureSelectionState, PaymentEvent, PaymentFormState,
    PaymentReceipt, SettingsEvent, UserSettingsState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::ui::Hit;

const IDLE_TIMEOUT: Duration = Duration::from_millis(500);
const NOTIFICATIONS_MESSAGE: &str = "No new notifications";

/// TUI-specific presentation state (not part of navigation)
pub struct TuiState {
    // Persistent component states
    pub features: FeatureSelectionState,
    pub overview: AccountOverviewState,
    pub payment: PaymentFormState,
    pub settings: UserSettingsState,
    /// Last submitted payment, shown on the status screen
    pub receipt: Option<PaymentReceipt>,
    /// One-line message above the footer. Cleared on every screen change.
    pub status_message: Option<String>,
    // Props from config
    pub holder_name: String,
    pub member_since: String,
    // Animation state
    pub spinner_frame: usize,
}

impl TuiState {
    pub fn new(config: &ResolvedConfig) -> Self {
        Self {
            features: FeatureSelectionState::new(),
            overview: AccountOverviewState::new(),
            payment: PaymentFormState::new(config.default_amount),
            settings: UserSettingsState::new(),
            receipt: None,
            status_message: None,
            holder_name: config.holder_name.clone(),
            member_since: config.member_since.clone(),
            spinner_frame: 0,
        }
    }

    /// Drop everything the session collected. Config-derived props stay.
    pub fn reset(&mut self) {
        self.features = FeatureSelectionState::new();
        self.overview = AccountOverviewState::new();
        self.payment.reset();
        self.settings = UserSettingsState::new();
        self.receipt = None;
        self.status_message = None;
        self.spinner_frame = 0;
    }

    /// Screens only live while shown: whatever `screen` collected is gone
    /// once the user moves on. Features already handed to the overview stay.
    fn leave_screen(&mut self, screen: Screen) {
        self.status_message = None;
        match screen {
            Screen::FeatureSelection => self.features = FeatureSelectionState::new(),
            Screen::PaymentForm => self.payment.reset(),
            Screen::UserSettings => self.settings = UserSettingsState::new(),
            Screen::Splash | Screen::AccountOverview | Screen::TransactionStatus => {}
        }
    }
}

/// Turn a terminal event into a navigation action, updating component
/// state on the way. `frame_area` is the full terminal area, for clicks.
pub fn route_event(
    state: &NavigationState,
    tui: &mut TuiState,
    event: &TuiEvent,
    frame_area: Rect,
) -> Option<Action> {
    let view = derive_view(state);

    match event {
        TuiEvent::ForceQuit => return Some(Action::Quit),
        TuiEvent::Resize => return None,
        TuiEvent::Footer(item) => {
            if view.footer.is_none() {
                debug!("Footer key {} ignored on {}", item, view.screen);
                return None;
            }
            return Some(Action::FooterNavigate(*item));
        }
        TuiEvent::Escape => return view.back_enabled().then_some(Action::Back),
        TuiEvent::MouseClick(column, row) => {
            return match ui::hit_test(*column, *row, frame_area, &view)? {
                Hit::Back => Some(Action::Back),
                Hit::HeaderAction(action) => header_action(tui, action),
                Hit::Footer(item) => Some(Action::FooterNavigate(item)),
                Hit::GetStarted => Some(Action::GetStarted),
            };
        }
        _ => {}
    }

    match view.screen {
        Screen::Splash => match event {
            TuiEvent::Submit => Some(Action::GetStarted),
            TuiEvent::InputChar('q') => Some(Action::Quit),
            _ => None,
        },
        Screen::FeatureSelection => match tui.features.handle_event(event)? {
            FeatureEvent::Confirmed(features) => Some(Action::FeaturesConfirmed(features)),
        },
        Screen::AccountOverview => {
            if let TuiEvent::InputChar(c) = event
                && let Some(action) = view.header_actions().iter().find(|a| a.key() == *c)
            {
                return header_action(tui, *action);
            }
            tui.overview.scroll(event);
            None
        }
        Screen::PaymentForm => match tui.payment.handle_event(event)? {
            PaymentEvent::Submitted(draft) => {
                let receipt = PaymentReceipt::new(draft);
                info!(
                    "Payment {} submitted: {:.2} to {}",
                    receipt.short_reference(),
                    receipt.draft.amount,
                    receipt.draft.payee
                );
                tui.receipt = Some(receipt);
                Some(Action::PaymentSubmitted)
            }
        },
        Screen::TransactionStatus => None,
        Screen::UserSettings => match tui.settings.handle_event(event)? {
            SettingsEvent::Open(label) => {
                tui.status_message = Some(format!("{label} is not available yet"));
                None
            }
            SettingsEvent::Logout => Some(Action::Logout),
        },
    }
}

fn header_action(tui: &mut TuiState, action: HeaderAction) -> Option<Action> {
    if action == HeaderAction::Notifications {
        tui.status_message = Some(NOTIFICATIONS_MESSAGE.to_string());
    }
    action.action()
}

/// Dispatch `action` and carry out its effect. Returns `true` to quit.
pub fn apply(state: &mut NavigationState, tui: &mut TuiState, action: Action) -> bool {
    let before = state.screen();
    let effect = update(state, action);
    if state.screen() != before {
        tui.leave_screen(before);
    }

    match effect {
        Effect::None => false,
        Effect::Quit => true,
        Effect::Reset => {
            info!("Session reset");
            tui.reset();
            false
        }
        Effect::HandOffFeatures(features) => {
            info!("{} feature(s) handed to the account overview", features.len());
            tui.overview.set_features(features);
            false
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            SetCursorStyle::SteadyBlock
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new().and_then(|_guard| event_loop(&mut terminal, &config));
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, config: &ResolvedConfig) -> std::io::Result<()> {
    let mut state = NavigationState::new();
    let mut tui = TuiState::new(config);
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &state, &mut tui))?;
            needs_redraw = false;
        }

        let animating = state.screen() == Screen::TransactionStatus;
        let timeout = if animating { config.tick_rate } else { IDLE_TIMEOUT };
        let mut pending = poll_event_timeout(timeout)?;

        if animating {
            tui.spinner_frame = tui.spinner_frame.wrapping_add(1);
            needs_redraw = true;
        }

        // Drain everything queued before drawing again
        while let Some(event) = pending {
            needs_redraw = true;
            let frame_area = terminal.get_frame().area();
            if let Some(action) = route_event(&state, &mut tui, &event, frame_area)
                && apply(&mut state, &mut tui, action)
            {
                info!("Quit requested");
                return Ok(());
            }
            pending = poll_event_immediate()?;
        }
    }
}
