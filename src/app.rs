use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::core::{Action, NotifyLevel, Role, Session, SessionAction};
use crate::infrastructure::auth::AuthEvent;
use crate::modules::admin::AdminView;
use crate::modules::landing::LandingView;
use crate::modules::login::LoginView;
use crate::modules::professor::ProfessorView;
use crate::modules::student::StudentView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    pub since: Instant,
}

/// A validated sign-in request waiting to cross the auth bridge
#[derive(Debug, Clone)]
pub struct SignInRequest {
    pub attempt: u64,
    pub role: Role,
    pub username: String,
}

#[derive(Debug)]
pub struct App {
    /// Routing state: authentication flag, role, active portal
    pub session: Session,
    pub login: LoginView,
    pub landing: LandingView,
    pub student: StudentView,
    pub professor: ProfessorView,
    pub admin: AdminView,
    /// Institution name shown in the header and the welcome notice
    pub college_name: String,
    pub status: Option<StatusMessage>,
    pub help_open: bool,
    pub should_quit: bool,
    /// Tick counter driving the sign-in spinner
    pub ticks: u64,
    attempt_counter: u64,
    pending_attempt: Option<u64>,
    pending_sign_in: Option<SignInRequest>,
    pending_copy: Option<String>,
}

impl App {
    pub fn new() -> Self {
        Self {
            session: Session::new(),
            login: LoginView::new(),
            landing: LandingView::new(),
            student: StudentView::new(),
            professor: ProfessorView::new(),
            admin: AdminView::new(),
            college_name: "College Management System".to_string(),
            status: None,
            help_open: false,
            should_quit: false,
            ticks: 0,
            attempt_counter: 0,
            pending_attempt: None,
            pending_sign_in: None,
            pending_copy: None,
        }
    }

    pub fn set_status(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
            since: Instant::now(),
        });
    }

    pub fn status_text(&self) -> Option<(&str, StatusLevel)> {
        self.status
            .as_ref()
            .map(|status| (status.text.as_str(), status.level))
    }

    pub fn on_tick(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);
        if let Some(status) = self.status.as_ref() {
            if status.since.elapsed() > Duration::from_secs(3) {
                self.status = None;
            }
        }
    }

    /// True while a sign-in attempt is in flight
    pub fn signing_in(&self) -> bool {
        self.pending_attempt.is_some()
    }

    /// Apply an action returned by a module
    pub fn apply_action(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Session(session_action) => self.apply_session(session_action),
            Action::StartSignIn { role, username } => self.start_sign_in(role, username),
            Action::CancelSignIn => self.cancel_sign_in(),
            Action::Copy(text) => self.pending_copy = Some(text),
            Action::Notify(msg, level) => {
                let level = match level {
                    NotifyLevel::Info => StatusLevel::Info,
                    NotifyLevel::Warn => StatusLevel::Warn,
                    NotifyLevel::Error => StatusLevel::Error,
                };
                self.set_status(msg, level);
            }
            Action::Quit => self.should_quit = true,
        }
    }

    /// Run a session transition and the screen side effects it implies
    pub fn apply_session(&mut self, action: SessionAction) {
        let next = self.session.apply(action);
        if next == self.session {
            return;
        }
        self.session = next;

        match action {
            SessionAction::LoginSucceeded(role) => {
                // Fresh dashboards for each sign-in
                self.login = LoginView::new();
                self.student = StudentView::new();
                self.professor = ProfessorView::new();
                self.admin = AdminView::new();
                self.landing.focus_role(role);
                info!(role = role.title(), "signed in");
                self.set_status(
                    format!("Login successful. Welcome to {}!", self.college_name),
                    StatusLevel::Info,
                );
            }
            SessionAction::Logout => {
                self.login = LoginView::new();
                info!("signed out");
                self.set_status("Signed out", StatusLevel::Info);
            }
            SessionAction::ShowLanding => {
                if let Some(role) = self.session.role {
                    self.landing.focus_role(role);
                }
            }
            SessionAction::SelectPortal(_) => {}
        }
    }

    fn start_sign_in(&mut self, role: Role, username: String) {
        self.attempt_counter += 1;
        let attempt = self.attempt_counter;
        self.pending_attempt = Some(attempt);
        self.pending_sign_in = Some(SignInRequest {
            attempt,
            role,
            username,
        });
        info!(attempt, role = role.title(), "sign-in dispatched");
    }

    fn cancel_sign_in(&mut self) {
        if self.pending_attempt.take().is_none() {
            return;
        }
        self.pending_sign_in = None;
        self.login.finish_submit();
        info!("sign-in cancelled");
        self.set_status("Sign-in cancelled", StatusLevel::Warn);
    }

    /// Fold a worker event into the app. Completions for abandoned attempts
    /// are dropped without touching the session.
    pub fn apply_auth_event(&mut self, event: AuthEvent) {
        match event {
            AuthEvent::SignInComplete {
                attempt,
                role,
                username,
            } => {
                if self.pending_attempt != Some(attempt) {
                    debug!(attempt, "dropping stale sign-in completion");
                    return;
                }
                self.pending_attempt = None;
                self.login.finish_submit();
                info!(attempt, user = %username, "sign-in completed");
                self.apply_session(SessionAction::LoginSucceeded(role));
            }
            AuthEvent::Error { message } => {
                self.pending_attempt = None;
                self.pending_sign_in = None;
                self.login.finish_submit();
                self.set_status(message, StatusLevel::Error);
            }
        }
    }

    pub fn take_sign_in_request(&mut self) -> Option<SignInRequest> {
        self.pending_sign_in.take()
    }

    pub fn take_copy_request(&mut self) -> Option<String> {
        self.pending_copy.take()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Portal;

    fn complete(app: &App) -> AuthEvent {
        let request = app.pending_sign_in.clone().expect("no request pending");
        AuthEvent::SignInComplete {
            attempt: request.attempt,
            role: request.role,
            username: request.username,
        }
    }

    #[test]
    fn sign_in_round_trip() {
        let mut app = App::new();
        app.apply_action(Action::StartSignIn {
            role: Role::Student,
            username: "student123".into(),
        });
        assert!(app.signing_in());

        let event = complete(&app);
        app.apply_auth_event(event);
        assert!(!app.signing_in());
        assert!(app.session.authenticated);
        assert_eq!(app.session.portal, Portal::Student);
    }

    #[test]
    fn cancelled_attempt_completion_is_dropped() {
        let mut app = App::new();
        app.apply_action(Action::StartSignIn {
            role: Role::Admin,
            username: "admin".into(),
        });
        let stale = complete(&app);
        app.apply_action(Action::CancelSignIn);

        app.apply_auth_event(stale);
        assert!(!app.session.authenticated);
        assert_eq!(app.session.portal, Portal::Login);
    }

    #[test]
    fn restarted_attempt_ignores_the_first_completion() {
        let mut app = App::new();
        app.apply_action(Action::StartSignIn {
            role: Role::Student,
            username: "first".into(),
        });
        let first = complete(&app);
        app.apply_action(Action::CancelSignIn);
        app.apply_action(Action::StartSignIn {
            role: Role::Professor,
            username: "second".into(),
        });
        let second = complete(&app);

        app.apply_auth_event(first);
        assert!(!app.session.authenticated);

        app.apply_auth_event(second);
        assert_eq!(app.session.role, Some(Role::Professor));
        assert_eq!(app.session.portal, Portal::Professor);
    }

    #[test]
    fn logout_resets_the_form_and_status() {
        let mut app = App::new();
        app.apply_action(Action::StartSignIn {
            role: Role::Student,
            username: "student123".into(),
        });
        let event = complete(&app);
        app.apply_auth_event(event);

        app.apply_session(SessionAction::Logout);
        assert!(!app.session.authenticated);
        assert!(app.login.username.is_empty());
        assert_eq!(
            app.status_text().map(|(text, _)| text),
            Some("Signed out")
        );
    }

    #[test]
    fn dashboard_state_survives_a_landing_detour() {
        let mut app = App::new();
        app.apply_action(Action::StartSignIn {
            role: Role::Admin,
            username: "admin".into(),
        });
        let event = complete(&app);
        app.apply_auth_event(event);

        app.admin.select_tab(crate::modules::admin::AdminTab::Users);
        app.apply_session(SessionAction::ShowLanding);
        app.apply_session(SessionAction::SelectPortal(Role::Admin));
        assert_eq!(app.admin.tab, crate::modules::admin::AdminTab::Users);
    }

    #[test]
    fn status_expires_after_three_seconds() {
        let mut app = App::new();
        app.set_status("hello", StatusLevel::Info);
        if let Some(status) = app.status.as_mut() {
            status.since = Instant::now() - Duration::from_secs(4);
        }
        app.on_tick();
        assert!(app.status.is_none());
    }

    #[test]
    fn copy_actions_queue_for_the_main_loop() {
        let mut app = App::new();
        app.apply_action(Action::Copy("CS301".into()));
        assert_eq!(app.take_copy_request().as_deref(), Some("CS301"));
        assert!(app.take_copy_request().is_none());
    }
}
