//! Actions that screens return to communicate with the app

use crate::core::session::{Role, SessionAction};

/// Actions returned by screens to communicate state changes
#[derive(Debug, Clone)]
pub enum Action {
    /// No action needed
    None,

    /// Apply a session transition
    Session(SessionAction),

    /// Dispatch a validated sign-in request for the given role.
    /// The password stays in the form; only the username travels.
    StartSignIn { role: Role, username: String },

    /// Abandon the in-flight sign-in attempt
    CancelSignIn,

    /// Copy text to the system clipboard
    Copy(String),

    /// Show notification in the status bar
    Notify(String, NotifyLevel),

    /// Request quit
    Quit,
}

/// Notification levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Info,
    Warn,
    Error,
}
