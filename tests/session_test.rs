//! Router-level integration tests
//!
//! Drives `App` through the same Action pipeline the key handlers use and
//! asserts on the resulting session and screen state:
//! 1. Sign-in routes each role to its own dashboard
//! 2. A landing detour keeps dashboard state intact
//! 3. Switching portals never changes the signed-in identity
//! 4. Logout clears everything back to the login screen

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use campus::app::App;
use campus::core::{Action, Module, Portal, Role, SessionAction};
use campus::modules::student::StudentTab;

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn signed_in(role: Role) -> App {
    let mut app = App::new();
    app.apply_action(Action::Session(SessionAction::LoginSucceeded(role)));
    app
}

#[test]
fn login_lands_on_the_role_dashboard() {
    assert_eq!(signed_in(Role::Student).session.portal, Portal::Student);
    assert_eq!(signed_in(Role::Professor).session.portal, Portal::Professor);
    assert_eq!(signed_in(Role::Admin).session.portal, Portal::Admin);
}

#[test]
fn welcome_notice_names_the_college() {
    let mut app = App::new();
    app.college_name = "Northfield College".to_string();
    app.apply_action(Action::Session(SessionAction::LoginSucceeded(Role::Student)));
    let (text, _) = app.status_text().expect("welcome status");
    assert_eq!(text, "Login successful. Welcome to Northfield College!");
}

#[test]
fn landing_detour_keeps_dashboard_state() {
    let mut app = signed_in(Role::Student);

    // Move to the assignments tab and down one row
    app.student.select_tab(StudentTab::Assignments);
    let session = app.session;
    let action = app.student.handle_key(press(KeyCode::Char('j')), &session);
    app.apply_action(action);
    assert_eq!(app.student.cursor(), 1);

    // Detour through the portal picker and back
    app.apply_action(Action::Session(SessionAction::ShowLanding));
    assert_eq!(app.session.portal, Portal::Landing);
    app.apply_action(Action::Session(SessionAction::SelectPortal(Role::Student)));

    assert_eq!(app.session.portal, Portal::Student);
    assert_eq!(app.student.tab, StudentTab::Assignments);
    assert_eq!(app.student.cursor(), 1);
}

#[test]
fn portal_switch_never_changes_identity() {
    let mut app = signed_in(Role::Student);
    app.apply_action(Action::Session(SessionAction::ShowLanding));
    app.apply_action(Action::Session(SessionAction::SelectPortal(Role::Admin)));

    assert_eq!(app.session.portal, Portal::Admin);
    assert_eq!(app.session.role, Some(Role::Student));
    assert!(app.session.authenticated);
}

#[test]
fn logout_returns_to_login_from_any_screen() {
    for role in Role::ALL {
        let mut app = signed_in(role);
        app.apply_action(Action::Session(SessionAction::ShowLanding));
        app.apply_action(Action::Session(SessionAction::Logout));

        assert!(!app.session.authenticated);
        assert_eq!(app.session.role, None);
        assert_eq!(app.session.portal, Portal::Login);
        assert_eq!(app.status_text().map(|(text, _)| text), Some("Signed out"));
    }
}

#[test]
fn unauthenticated_session_actions_have_no_edge() {
    let mut app = App::new();
    app.apply_action(Action::Session(SessionAction::ShowLanding));
    assert_eq!(app.session.portal, Portal::Login);

    app.apply_action(Action::Session(SessionAction::SelectPortal(Role::Admin)));
    assert_eq!(app.session.portal, Portal::Login);
    assert!(!app.session.authenticated);
}

#[test]
fn fresh_sign_in_resets_the_previous_dashboards() {
    let mut app = signed_in(Role::Student);
    app.student.select_tab(StudentTab::Payments);

    app.apply_action(Action::Session(SessionAction::Logout));
    app.apply_action(Action::Session(SessionAction::LoginSucceeded(Role::Student)));

    assert_eq!(app.student.tab, StudentTab::Overview);
    assert_eq!(app.student.cursor(), 0);
}
