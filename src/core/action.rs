//! # Actions
//!
//! Everything that can move the user between screens becomes an `Action`.
//! User taps "Get Started"? That's `Action::GetStarted`.
//! User taps the footer's Add button? That's `Action::FooterNavigate(FooterItem::Action)`.
//!
//! `transition()` is the pure state machine: current state + action in,
//! next state out. `update()` applies it in place and tells the caller what
//! else has to happen through an `Effect`.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Every (state, action) pair has a defined result. Pairs that make no
//! sense (e.g. `Back` on splash) leave the state untouched.

use std::collections::BTreeSet;

use log::debug;

use crate::core::state::{FooterItem, NavigationState, Screen};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Splash "Get Started"
    GetStarted,
    /// Feature picker "Next", carrying the chosen feature names
    FeaturesConfirmed(BTreeSet<String>),
    /// Footer tap, or a header action that feeds the footer channel
    FooterNavigate(FooterItem),
    /// Payment form passed validation. The form data stays with the view.
    PaymentSubmitted,
    Logout,
    Back,
    Quit,
}

/// Work the caller must do after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    /// Session reset: collaborators drop everything they hold.
    Reset,
    /// The confirmed features move to the account overview. The core keeps
    /// no copy.
    HandOffFeatures(BTreeSet<String>),
}

/// The transition table.
pub fn transition(state: NavigationState, action: &Action) -> NavigationState {
    let screen = state.screen();
    match action {
        Action::GetStarted if screen == Screen::Splash => {
            follow(state, Screen::FeatureSelection)
        }
        Action::FeaturesConfirmed(_) if screen == Screen::FeatureSelection => {
            follow(state, Screen::AccountOverview)
        }
        Action::FooterNavigate(item) => NavigationState::with(item.target(), *item),
        Action::PaymentSubmitted if screen == Screen::PaymentForm => {
            follow(state, Screen::TransactionStatus)
        }
        Action::Logout => NavigationState::new(),
        Action::Back => match screen {
            Screen::FeatureSelection => follow(state, Screen::Splash),
            Screen::PaymentForm | Screen::UserSettings => follow(state, Screen::AccountOverview),
            Screen::TransactionStatus => follow(state, Screen::PaymentForm),
            Screen::Splash | Screen::AccountOverview => state,
        },
        _ => state,
    }
}

/// Move to `next` by a non-footer path: the footer highlight follows the
/// screen's reverse mapping, or stays put when the screen has no footer.
fn follow(state: NavigationState, next: Screen) -> NavigationState {
    let footer = next.footer_item().unwrap_or(state.footer());
    NavigationState::with(next, footer)
}

/// Apply `action` to `state` and return the follow-up effect.
///
/// The state is replaced in a single assignment.
pub fn update(state: &mut NavigationState, action: Action) -> Effect {
    let previous = *state;
    let next = transition(previous, &action);

    if next == previous {
        debug!("{:?} on {} is a no-op", action, previous);
    } else {
        debug!("{:?}: {} -> {}", action, previous, next);
    }
    *state = next;

    match action {
        Action::Quit => Effect::Quit,
        Action::Logout => Effect::Reset,
        Action::FeaturesConfirmed(features) if previous.screen() == Screen::FeatureSelection => {
            Effect::HandOffFeatures(features)
        }
        _ => Effect::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{run, state_at};

    fn features(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_get_started_moves_to_feature_selection() {
        let state = run(&[Action::GetStarted]);
        assert_eq!(state.screen(), Screen::FeatureSelection);
        assert_eq!(state.footer(), FooterItem::Home);
    }

    #[test]
    fn test_get_started_ignored_off_splash() {
        let start = state_at(Screen::PaymentForm, FooterItem::Action);
        assert_eq!(transition(start, &Action::GetStarted), start);
    }

    #[test]
    fn test_back_after_get_started_returns_to_splash() {
        let state = run(&[Action::GetStarted, Action::Back]);
        assert_eq!(state, NavigationState::new());
    }

    #[test]
    fn test_features_confirmed_hands_off_features() {
        let mut state = run(&[Action::GetStarted]);
        let chosen = features(&["Payments", "Savings"]);

        let effect = update(&mut state, Action::FeaturesConfirmed(chosen.clone()));

        assert_eq!(state.screen(), Screen::AccountOverview);
        assert_eq!(state.footer(), FooterItem::Home);
        assert_eq!(effect, Effect::HandOffFeatures(chosen));
    }

    #[test]
    fn test_features_confirmed_off_feature_selection_is_dropped() {
        let mut state = state_at(Screen::AccountOverview, FooterItem::Transfers);
        let effect = update(&mut state, Action::FeaturesConfirmed(features(&["FX"])));
        assert_eq!(effect, Effect::None);
        assert_eq!(state, state_at(Screen::AccountOverview, FooterItem::Transfers));
    }

    #[test]
    fn test_features_confirmed_restores_home_highlight() {
        // Footer was left on Action before the user logged all the way back
        let start = state_at(Screen::FeatureSelection, FooterItem::Action);
        let next = transition(start, &Action::FeaturesConfirmed(BTreeSet::new()));
        assert_eq!(next, state_at(Screen::AccountOverview, FooterItem::Home));
    }

    #[test]
    fn test_footer_navigate_from_every_state() {
        for screen in Screen::ALL {
            for from in FooterItem::ALL {
                let start = state_at(screen, from);
                for item in FooterItem::ALL {
                    let next = transition(start, &Action::FooterNavigate(item));
                    assert_eq!(next.screen(), item.target());
                    assert_eq!(next.footer(), item);
                }
            }
        }
    }

    #[test]
    fn test_transfers_stays_on_overview() {
        let start = state_at(Screen::UserSettings, FooterItem::Settings);
        let next = transition(start, &Action::FooterNavigate(FooterItem::Transfers));
        assert_eq!(next, state_at(Screen::AccountOverview, FooterItem::Transfers));
    }

    #[test]
    fn test_payment_submitted_keeps_footer() {
        let start = state_at(Screen::PaymentForm, FooterItem::Action);
        let next = transition(start, &Action::PaymentSubmitted);
        assert_eq!(next, state_at(Screen::TransactionStatus, FooterItem::Action));
    }

    #[test]
    fn test_payment_submitted_ignored_elsewhere() {
        let start = state_at(Screen::AccountOverview, FooterItem::Home);
        assert_eq!(transition(start, &Action::PaymentSubmitted), start);
    }

    #[test]
    fn test_logout_resets_from_anywhere() {
        for screen in Screen::ALL {
            for item in FooterItem::ALL {
                let mut state = state_at(screen, item);
                let effect = update(&mut state, Action::Logout);
                assert_eq!(state, NavigationState::new());
                assert_eq!(effect, Effect::Reset);
            }
        }
    }

    #[test]
    fn test_back_table() {
        let cases = [
            (
                state_at(Screen::FeatureSelection, FooterItem::Home),
                state_at(Screen::Splash, FooterItem::Home),
            ),
            (
                state_at(Screen::PaymentForm, FooterItem::Action),
                state_at(Screen::AccountOverview, FooterItem::Home),
            ),
            (
                state_at(Screen::UserSettings, FooterItem::Profile),
                state_at(Screen::AccountOverview, FooterItem::Home),
            ),
            (
                state_at(Screen::TransactionStatus, FooterItem::Home),
                state_at(Screen::PaymentForm, FooterItem::Action),
            ),
        ];
        for (start, expected) in cases {
            assert_eq!(transition(start, &Action::Back), expected, "back from {start}");
        }
    }

    #[test]
    fn test_back_is_noop_on_roots() {
        for state in [
            state_at(Screen::Splash, FooterItem::Home),
            state_at(Screen::AccountOverview, FooterItem::Transfers),
        ] {
            assert_eq!(transition(state, &Action::Back), state);
        }
    }

    #[test]
    fn test_quit_leaves_state_alone() {
        let mut state = state_at(Screen::UserSettings, FooterItem::Profile);
        assert_eq!(update(&mut state, Action::Quit), Effect::Quit);
        assert_eq!(state, state_at(Screen::UserSettings, FooterItem::Profile));
    }

    #[test]
    fn test_footer_consistent_after_non_footer_transitions() {
        let actions = [
            Action::GetStarted,
            Action::FeaturesConfirmed(BTreeSet::new()),
            Action::PaymentSubmitted,
            Action::Logout,
            Action::Back,
        ];
        for screen in Screen::ALL {
            for item in FooterItem::ALL {
                let start = state_at(screen, item);
                for action in &actions {
                    let next = transition(start, action);
                    if next.screen() == start.screen() {
                        continue;
                    }
                    match next.screen().footer_item() {
                        Some(expected) => assert_eq!(next.footer(), expected),
                        None => assert!(
                            next.footer() == start.footer() || *action == Action::Logout
                        ),
                    }
                }
            }
        }
    }

    #[test]
    fn test_payment_round_trip_scenario() {
        let mut state = state_at(Screen::AccountOverview, FooterItem::Home);
        update(&mut state, Action::FooterNavigate(FooterItem::Action));
        update(&mut state, Action::PaymentSubmitted);
        assert_eq!(state, state_at(Screen::TransactionStatus, FooterItem::Action));

        update(&mut state, Action::Back);
        assert_eq!(state, state_at(Screen::PaymentForm, FooterItem::Action));
    }
}
