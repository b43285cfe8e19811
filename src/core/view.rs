//! # View Directives
//!
//! What to draw, derived purely from `NavigationState`. The adapter never
//! decides on its own whether a header, back button or footer exists; it
//! asks `derive_view()`.

use crate::core::action::Action;
use crate::core::state::{FooterItem, NavigationState, Screen};

/// Extra header affordances, shown on the account overview only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    Notifications,
    Profile,
}

impl HeaderAction {
    /// Navigation raised by this affordance. Profile shares the footer's
    /// channel; Notifications is handled by the adapter without navigating.
    pub fn action(self) -> Option<Action> {
        match self {
            HeaderAction::Notifications => None,
            HeaderAction::Profile => Some(Action::FooterNavigate(FooterItem::Profile)),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HeaderAction::Notifications => "Alerts",
            HeaderAction::Profile => "Profile",
        }
    }

    /// Key that triggers the action while it is shown.
    pub fn key(self) -> char {
        match self {
            HeaderAction::Notifications => 'n',
            HeaderAction::Profile => 'p',
        }
    }
}

const OVERVIEW_ACTIONS: &[HeaderAction] = &[HeaderAction::Notifications, HeaderAction::Profile];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderDirectives {
    pub title: &'static str,
    pub show_back: bool,
    pub actions: &'static [HeaderAction],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewDirectives {
    pub screen: Screen,
    /// `None` when the screen owns the whole viewport.
    pub header: Option<HeaderDirectives>,
    /// Active footer item, or `None` when no footer is drawn.
    pub footer: Option<FooterItem>,
}

impl ViewDirectives {
    /// True only when a back button is actually on screen.
    pub fn back_enabled(&self) -> bool {
        self.header.is_some_and(|h| h.show_back)
    }

    pub fn header_actions(&self) -> &'static [HeaderAction] {
        match self.header {
            Some(header) => header.actions,
            None => &[],
        }
    }
}

pub fn derive_view(state: &NavigationState) -> ViewDirectives {
    let screen = state.screen();

    let header = screen.shows_header().then(|| HeaderDirectives {
        title: screen.title(),
        show_back: screen.shows_back(),
        actions: if screen == Screen::AccountOverview {
            OVERVIEW_ACTIONS
        } else {
            &[]
        },
    });

    ViewDirectives {
        screen,
        header,
        footer: screen.shows_footer().then_some(state.footer()),
    }
}
