//! # Navigation State
//!
//! The whole persistent state of BankEase is one pair: which screen is
//! active, and which footer item is highlighted.
//!
//! ```text
//! NavigationState
//! ├── screen: Screen       // exactly one active screen
//! └── footer: FooterItem   // last highlighted footer entry
//! ```
//!
//! Both fields are private. The pair only changes through `update()` in
//! action.rs, which replaces it whole, so a reader never observes a screen
//! from one step paired with a footer item from another.

use std::fmt;

/// One full-viewport view the user can be looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Splash,
    FeatureSelection,
    AccountOverview,
    PaymentForm,
    TransactionStatus,
    UserSettings,
}

impl Screen {
    pub const ALL: [Screen; 6] = [
        Screen::Splash,
        Screen::FeatureSelection,
        Screen::AccountOverview,
        Screen::PaymentForm,
        Screen::TransactionStatus,
        Screen::UserSettings,
    ];

    /// Header text for this screen. Splash never shows a header.
    pub fn title(self) -> &'static str {
        match self {
            Screen::Splash => "",
            Screen::FeatureSelection => "Choose Your Banking Features",
            Screen::AccountOverview => "My Account",
            Screen::PaymentForm => "Make a Payment",
            Screen::TransactionStatus => "Transaction Status",
            Screen::UserSettings => "Settings",
        }
    }

    /// Splash owns the full viewport.
    pub fn shows_header(self) -> bool {
        self != Screen::Splash
    }

    /// Account overview is the home root, so back is suppressed there.
    pub fn shows_back(self) -> bool {
        !matches!(self, Screen::Splash | Screen::AccountOverview)
    }

    pub fn shows_footer(self) -> bool {
        matches!(
            self,
            Screen::AccountOverview
                | Screen::PaymentForm
                | Screen::TransactionStatus
                | Screen::UserSettings
        )
    }

    /// Footer item a screen restores when reached by anything other than
    /// a footer tap. `None` means "keep whatever was highlighted".
    ///
    /// `UserSettings` always maps back to `Settings`; the profile alias is
    /// not remembered.
    pub fn footer_item(self) -> Option<FooterItem> {
        match self {
            Screen::AccountOverview => Some(FooterItem::Home),
            Screen::PaymentForm => Some(FooterItem::Action),
            Screen::UserSettings => Some(FooterItem::Settings),
            Screen::Splash | Screen::FeatureSelection | Screen::TransactionStatus => None,
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Screen::Splash => "splash",
            Screen::FeatureSelection => "feature_selection",
            Screen::AccountOverview => "account_overview",
            Screen::PaymentForm => "payment_form",
            Screen::TransactionStatus => "transaction_status",
            Screen::UserSettings => "user_settings",
        };
        f.write_str(name)
    }
}

/// Entry in the persistent bottom navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FooterItem {
    Home,
    Transfers,
    Action,
    Settings,
    Profile,
}

impl FooterItem {
    /// Footer order, left to right.
    pub const ALL: [FooterItem; 5] = [
        FooterItem::Home,
        FooterItem::Transfers,
        FooterItem::Action,
        FooterItem::Settings,
        FooterItem::Profile,
    ];

    /// Screen a footer tap leads to. Transfers has no screen of its own and
    /// lands on the account overview.
    pub fn target(self) -> Screen {
        match self {
            FooterItem::Home | FooterItem::Transfers => Screen::AccountOverview,
            FooterItem::Action => Screen::PaymentForm,
            FooterItem::Settings | FooterItem::Profile => Screen::UserSettings,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FooterItem::Home => "Home",
            FooterItem::Transfers => "Transfers",
            FooterItem::Action => "Add",
            FooterItem::Settings => "Settings",
            FooterItem::Profile => "Profile",
        }
    }
}

impl fmt::Display for FooterItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FooterItem::Home => "home",
            FooterItem::Transfers => "transfers",
            FooterItem::Action => "action",
            FooterItem::Settings => "settings",
            FooterItem::Profile => "profile",
        };
        f.write_str(name)
    }
}

/// The `(screen, footer)` pair driving everything that is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    screen: Screen,
    footer: FooterItem,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationState {
    /// Session start: splash, with home highlighted for later.
    pub const fn new() -> Self {
        Self {
            screen: Screen::Splash,
            footer: FooterItem::Home,
        }
    }

    pub(crate) const fn with(screen: Screen, footer: FooterItem) -> Self {
        Self { screen, footer }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn footer(&self) -> FooterItem {
        self.footer
    }
}

impl fmt::Display for NavigationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.screen, self.footer)
    }
}
