//! Sign-in screen: role picker, credential fields, simulated submission
//!
//! The form owns the only validation in the system (a presence check on both
//! credential fields). The password never leaves this struct; a successful
//! submit hands out the role and username only.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use thiserror::Error;

use crate::core::{Action, Module, NotifyLevel, Role, Session};

/// Fields on the sign-in form, cycled with Tab / Shift-Tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Role,
    Username,
    Password,
}

impl LoginField {
    pub const ALL: [LoginField; 3] = [LoginField::Role, LoginField::Username, LoginField::Password];

    pub fn title(&self) -> &'static str {
        match self {
            LoginField::Role => "Role",
            LoginField::Username => "Username",
            LoginField::Password => "Password",
        }
    }

    fn next(self) -> Self {
        match self {
            LoginField::Role => LoginField::Username,
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Role,
        }
    }

    fn prev(self) -> Self {
        match self {
            LoginField::Role => LoginField::Password,
            LoginField::Username => LoginField::Role,
            LoginField::Password => LoginField::Username,
        }
    }
}

/// Missing-credential cases. Both render as the same user notice.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredentialError {
    #[error("Please enter both username and password")]
    MissingUsername,
    #[error("Please enter both username and password")]
    MissingPassword,
}

/// Sample accounts shown beside the form. Display hints only; they are not
/// checked against the entered values.
pub struct DemoAccount {
    pub role: Role,
    pub username: &'static str,
    pub password: &'static str,
}

pub const DEMO_ACCOUNTS: [DemoAccount; 3] = [
    DemoAccount {
        role: Role::Student,
        username: "student123",
        password: "password",
    },
    DemoAccount {
        role: Role::Professor,
        username: "prof001",
        password: "password",
    },
    DemoAccount {
        role: Role::Admin,
        username: "admin",
        password: "password",
    },
];

/// Sign-in form state
#[derive(Debug)]
pub struct LoginView {
    pub selected_role: Role,
    pub field: LoginField,
    pub username: String,
    pub password: String,
    pub show_password: bool,
    pub submitting: bool,
}

impl LoginView {
    pub fn new() -> Self {
        Self {
            selected_role: Role::Student,
            field: LoginField::Role,
            username: String::new(),
            password: String::new(),
            show_password: false,
            submitting: false,
        }
    }

    /// Presence check on both credential fields
    pub fn validate(&self) -> Result<(), CredentialError> {
        if self.username.is_empty() {
            return Err(CredentialError::MissingUsername);
        }
        if self.password.is_empty() {
            return Err(CredentialError::MissingPassword);
        }
        Ok(())
    }

    /// Re-enable the form after a completed or abandoned attempt
    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }

    fn cycle_role(&mut self, forward: bool) {
        let idx = Role::ALL
            .iter()
            .position(|role| *role == self.selected_role)
            .unwrap_or(0);
        let next = if forward {
            (idx + 1) % Role::ALL.len()
        } else {
            (idx + Role::ALL.len() - 1) % Role::ALL.len()
        };
        self.selected_role = Role::ALL[next];
    }

    fn submit(&mut self) -> Action {
        match self.validate() {
            Ok(()) => {
                self.submitting = true;
                Action::StartSignIn {
                    role: self.selected_role,
                    username: self.username.clone(),
                }
            }
            Err(err) => Action::Notify(err.to_string(), NotifyLevel::Error),
        }
    }
}

impl Default for LoginView {
    fn default() -> Self {
        Self::new()
    }
}

impl Module for LoginView {
    fn handle_key(&mut self, key: KeyEvent, _session: &Session) -> Action {
        if self.submitting {
            // Only cancellation is live while the simulated sign-in runs
            return match key.code {
                KeyCode::Esc => Action::CancelSignIn,
                _ => Action::None,
            };
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), mods) if mods.contains(KeyModifiers::CONTROL) => Action::Quit,
            (KeyCode::Char('r'), mods) if mods.contains(KeyModifiers::CONTROL) => {
                self.show_password = !self.show_password;
                Action::None
            }
            (KeyCode::Tab, _) | (KeyCode::Down, _) => {
                self.field = self.field.next();
                Action::None
            }
            (KeyCode::BackTab, _) | (KeyCode::Up, _) => {
                self.field = self.field.prev();
                Action::None
            }
            (KeyCode::Left, _) if self.field == LoginField::Role => {
                self.cycle_role(false);
                Action::None
            }
            (KeyCode::Right, _) if self.field == LoginField::Role => {
                self.cycle_role(true);
                Action::None
            }
            (KeyCode::Enter, _) => self.submit(),
            (KeyCode::Backspace, _) => {
                match self.field {
                    LoginField::Username => {
                        self.username.pop();
                    }
                    LoginField::Password => {
                        self.password.pop();
                    }
                    LoginField::Role => {}
                }
                Action::None
            }
            (KeyCode::Char(ch), mods) if !mods.contains(KeyModifiers::CONTROL) => {
                match self.field {
                    LoginField::Username => self.username.push(ch),
                    LoginField::Password => self.password.push(ch),
                    LoginField::Role => {}
                }
                Action::None
            }
            _ => Action::None,
        }
    }
}
