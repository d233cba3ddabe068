//! End-to-end sign-in flow against a real auth worker
//!
//! Spawns the actual bridge with a short delay and drives the login form
//! key by key, the way the main loop does:
//! 1. Typed credentials reach the worker and complete after the delay
//! 2. An empty submit never leaves the form
//! 3. Esc during the delay cancels, and the late completion is dropped
//! 4. A resubmit after cancel signs in on the fresh attempt only

use std::thread::sleep;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use campus::app::App;
use campus::core::{Module, Portal, Role};
use campus::infrastructure::{AuthBridge, AuthCommand};

const WORKER_DELAY: Duration = Duration::from_millis(30);

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn login_key(app: &mut App, code: KeyCode) {
    let session = app.session;
    let action = app.login.handle_key(press(code), &session);
    app.apply_action(action);
}

fn type_str(app: &mut App, text: &str) {
    for ch in text.chars() {
        login_key(app, KeyCode::Char(ch));
    }
}

/// One iteration of what main's background pump does.
fn pump(app: &mut App, auth: &AuthBridge) {
    for event in auth.poll_events() {
        app.apply_auth_event(event);
    }
    if let Some(request) = app.take_sign_in_request() {
        auth.send(AuthCommand::SignIn {
            attempt: request.attempt,
            role: request.role,
            username: request.username,
        })
        .expect("worker alive");
    }
}

fn pump_until<F: Fn(&App) -> bool>(app: &mut App, auth: &AuthBridge, done: F) {
    let deadline = Instant::now() + Duration::from_secs(2);
    while !done(app) {
        assert!(Instant::now() < deadline, "worker did not respond in time");
        pump(app, auth);
        sleep(Duration::from_millis(5));
    }
}

fn fill_credentials(app: &mut App) {
    // Field order is Role, Username, Password
    login_key(app, KeyCode::Tab);
    type_str(app, "student123");
    login_key(app, KeyCode::Tab);
    type_str(app, "password");
}

#[test]
fn typed_credentials_sign_in_after_the_delay() {
    let auth = AuthBridge::new(WORKER_DELAY).expect("bridge");
    let mut app = App::new();

    fill_credentials(&mut app);
    login_key(&mut app, KeyCode::Enter);
    assert!(app.login.submitting);
    assert!(app.signing_in());
    assert!(!app.session.authenticated);

    pump_until(&mut app, &auth, |app| app.session.authenticated);

    assert_eq!(app.session.role, Some(Role::Student));
    assert_eq!(app.session.portal, Portal::Student);
    let (text, _) = app.status_text().expect("welcome status");
    assert!(text.starts_with("Login successful"));
}

#[test]
fn empty_submit_never_reaches_the_worker() {
    let auth = AuthBridge::new(WORKER_DELAY).expect("bridge");
    let mut app = App::new();

    login_key(&mut app, KeyCode::Enter);

    assert!(!app.login.submitting);
    assert!(app.take_sign_in_request().is_none());
    assert_eq!(
        app.status_text().map(|(text, _)| text),
        Some("Please enter both username and password")
    );

    // Give the worker a moment; nothing should come back
    sleep(WORKER_DELAY * 3);
    assert!(auth.poll_events().is_empty());
    assert!(!app.session.authenticated);
}

#[test]
fn cancel_during_the_delay_drops_the_late_completion() {
    let auth = AuthBridge::new(WORKER_DELAY).expect("bridge");
    let mut app = App::new();

    fill_credentials(&mut app);
    login_key(&mut app, KeyCode::Enter);
    pump(&mut app, &auth);

    login_key(&mut app, KeyCode::Esc);
    assert!(!app.login.submitting);
    assert!(!app.signing_in());
    assert_eq!(
        app.status_text().map(|(text, _)| text),
        Some("Sign-in cancelled")
    );

    // Wait past the delay so the stale completion arrives, then pump it
    sleep(WORKER_DELAY * 3);
    pump(&mut app, &auth);

    assert!(!app.session.authenticated);
    assert_eq!(app.session.portal, Portal::Login);
}

#[test]
fn resubmit_after_cancel_signs_in_on_the_fresh_attempt() {
    let auth = AuthBridge::new(WORKER_DELAY).expect("bridge");
    let mut app = App::new();

    fill_credentials(&mut app);
    login_key(&mut app, KeyCode::Enter);
    pump(&mut app, &auth);
    login_key(&mut app, KeyCode::Esc);

    // Second attempt for a different role
    login_key(&mut app, KeyCode::BackTab);
    login_key(&mut app, KeyCode::BackTab);
    login_key(&mut app, KeyCode::Right);
    login_key(&mut app, KeyCode::Enter);
    pump(&mut app, &auth);

    pump_until(&mut app, &auth, |app| app.session.authenticated);

    // The cancelled student attempt must not have won
    assert_eq!(app.session.role, Some(Role::Professor));
    assert_eq!(app.session.portal, Portal::Professor);
}
