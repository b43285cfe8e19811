use std::collections::BTreeSet;

use bankease::core::action::{Action, Effect, transition, update};
use bankease::core::state::{FooterItem, NavigationState, Screen};
use bankease::core::view::{HeaderAction, derive_view};

// ============================================================================
// Helper Functions
// ============================================================================

fn features(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|n| n.to_string()).collect()
}

/// Runs `actions` from a fresh start, asserting the footer rule after each
/// step, and returns the final state.
fn run(actions: &[Action]) -> NavigationState {
    let mut state = NavigationState::new();
    for action in actions {
        update(&mut state, action.clone());
        assert_consistent(&state);
    }
    state
}

/// Screens with a footer counterpart always highlight an item that leads
/// back to them.
fn assert_consistent(state: &NavigationState) {
    if state.screen().footer_item().is_some() {
        assert_eq!(
            state.footer().target(),
            state.screen(),
            "{state} highlights the wrong item"
        );
    }
}

fn onboarded() -> Vec<Action> {
    vec![Action::GetStarted, Action::FeaturesConfirmed(features(&["Payments"]))]
}

/// Closure of the start state under every action, so laws can be checked
/// against the whole graph rather than hand-picked states.
fn reachable_states() -> Vec<NavigationState> {
    let alphabet: Vec<Action> = [
        Action::GetStarted,
        Action::FeaturesConfirmed(BTreeSet::new()),
        Action::PaymentSubmitted,
        Action::Logout,
        Action::Back,
    ]
    .into_iter()
    .chain(FooterItem::ALL.into_iter().map(Action::FooterNavigate))
    .collect();

    let mut seen = vec![NavigationState::new()];
    let mut frontier = seen.clone();
    while let Some(state) = frontier.pop() {
        for action in &alphabet {
            let next = transition(state, action);
            if !seen.contains(&next) {
                seen.push(next);
                frontier.push(next);
            }
        }
    }
    seen
}

// ============================================================================
// Transition Laws
// ============================================================================

#[test]
fn test_initial_state_is_splash_home() {
    let state = NavigationState::new();
    assert_eq!(state.screen(), Screen::Splash);
    assert_eq!(state.footer(), FooterItem::Home);
}

#[test]
fn test_back_after_get_started_round_trips() {
    let state = run(&[Action::GetStarted, Action::Back]);
    assert_eq!(state, NavigationState::new());
}

#[test]
fn test_footer_home_is_idempotent_target() {
    for start in reachable_states() {
        let next = transition(start, &Action::FooterNavigate(FooterItem::Home));
        assert_eq!(next.screen(), Screen::AccountOverview, "from {start}");
        assert_eq!(next.footer(), FooterItem::Home, "from {start}");
    }
}

#[test]
fn test_features_confirmed_lands_on_overview_with_footer() {
    let state = run(&[
        Action::GetStarted,
        Action::FeaturesConfirmed(features(&["Payments", "Savings"])),
    ]);
    assert_eq!(state.screen(), Screen::AccountOverview);
    assert_eq!(state.footer(), FooterItem::Home);
    assert_eq!(derive_view(&state).footer, Some(FooterItem::Home));
}

#[test]
fn test_logout_from_any_state_resets() {
    for start in reachable_states() {
        let mut state = start;
        let effect = update(&mut state, Action::Logout);
        assert_eq!(state, NavigationState::new(), "from {start}");
        assert_eq!(effect, Effect::Reset);

        let view = derive_view(&state);
        assert!(view.header.is_none());
        assert!(view.footer.is_none());
    }
}

#[test]
fn test_transfers_routes_to_overview() {
    let mut actions = onboarded();
    actions.push(Action::FooterNavigate(FooterItem::Transfers));
    let state = run(&actions);
    assert_eq!(state.screen(), Screen::AccountOverview);
    assert_eq!(state.footer(), FooterItem::Transfers);
}

#[test]
fn test_profile_alias_is_lost_on_round_trip() {
    let mut actions = onboarded();
    actions.extend([
        Action::FooterNavigate(FooterItem::Profile),
        Action::Back,
    ]);
    let state = run(&actions);
    // Back from user_settings always lands on home
    assert_eq!(state.screen(), Screen::AccountOverview);
    assert_eq!(state.footer(), FooterItem::Home);
}

#[test]
fn test_exactly_one_screen_everywhere() {
    for state in reachable_states() {
        let active = Screen::ALL.iter().filter(|s| **s == state.screen()).count();
        assert_eq!(active, 1);
        assert_consistent(&state);
    }
}

#[test]
fn test_undeclared_pairs_are_noops() {
    let start = NavigationState::new();
    for action in [
        Action::Back,
        Action::PaymentSubmitted,
        Action::FeaturesConfirmed(features(&["Loans"])),
    ] {
        assert_eq!(transition(start, &action), start, "{action:?} on splash");
    }

    let overview = run(&onboarded());
    assert_eq!(transition(overview, &Action::Back), overview);
    assert_eq!(transition(overview, &Action::GetStarted), overview);
}

#[test]
fn test_features_are_handed_off_not_kept() {
    let mut state = run(&[Action::GetStarted]);
    let effect = update(&mut state, Action::FeaturesConfirmed(features(&["FX", "Loans"])));
    assert_eq!(effect, Effect::HandOffFeatures(features(&["FX", "Loans"])));

    // Off the feature picker nothing is handed off
    let effect = update(&mut state, Action::FeaturesConfirmed(features(&["FX"])));
    assert_eq!(effect, Effect::None);
}

#[test]
fn test_quit_leaves_state_alone() {
    let mut state = run(&onboarded());
    let before = state;
    assert_eq!(update(&mut state, Action::Quit), Effect::Quit);
    assert_eq!(state, before);
}

// ============================================================================
// Render Directives
// ============================================================================

#[test]
fn test_chrome_visibility_per_screen() {
    for state in reachable_states() {
        let view = derive_view(&state);
        match state.screen() {
            Screen::Splash => {
                assert!(view.header.is_none());
                assert!(view.footer.is_none());
            }
            Screen::FeatureSelection => {
                assert!(view.footer.is_none());
                assert!(view.back_enabled());
            }
            Screen::AccountOverview => {
                assert!(view.footer.is_some());
                assert!(!view.back_enabled());
            }
            Screen::PaymentForm | Screen::TransactionStatus | Screen::UserSettings => {
                assert!(view.footer.is_some());
                assert!(view.back_enabled());
            }
        }
    }
}

#[test]
fn test_header_actions_only_on_overview() {
    for state in reachable_states() {
        let view = derive_view(&state);
        if state.screen() == Screen::AccountOverview {
            assert_eq!(
                view.header_actions(),
                &[HeaderAction::Notifications, HeaderAction::Profile]
            );
        } else {
            assert!(view.header_actions().is_empty());
        }
    }
}

#[test]
fn test_profile_header_action_feeds_footer_channel() {
    let action = HeaderAction::Profile.action().unwrap();
    assert_eq!(action, Action::FooterNavigate(FooterItem::Profile));

    let state = transition(run(&onboarded()), &action);
    assert_eq!(state.screen(), Screen::UserSettings);
    assert_eq!(state.footer(), FooterItem::Profile);
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_scenario_onboarding_with_empty_selection() {
    let state = run(&[Action::GetStarted, Action::FeaturesConfirmed(BTreeSet::new())]);
    assert_eq!(state.screen(), Screen::AccountOverview);
    assert_eq!(state.footer(), FooterItem::Home);

    let view = derive_view(&state);
    assert!(view.footer.is_some());
    assert!(!view.back_enabled());
}

#[test]
fn test_scenario_payment_and_back() {
    let mut actions = onboarded();
    actions.extend([
        Action::FooterNavigate(FooterItem::Action),
        Action::PaymentSubmitted,
    ]);
    let mut state = run(&actions);
    assert_eq!(state.screen(), Screen::TransactionStatus);
    assert_eq!(state.footer(), FooterItem::Action);

    let view = derive_view(&state);
    assert!(view.footer.is_some());
    assert!(view.back_enabled());

    update(&mut state, Action::Back);
    assert_eq!(state.screen(), Screen::PaymentForm);
    assert_eq!(state.footer(), FooterItem::Action);
}

#[test]
fn test_status_screen_keeps_previous_highlight() {
    let mut actions = onboarded();
    actions.extend([
        Action::FooterNavigate(FooterItem::Action),
        Action::PaymentSubmitted,
    ]);
    let state = run(&actions);
    assert_eq!(state.screen().footer_item(), None);
    assert_eq!(derive_view(&state).footer, Some(FooterItem::Action));
}
