//! Session state machine for the role-gated portal router
//!
//! The session is the single owned piece of routing state: an authentication
//! flag, the signed-in role, and the portal shown next frame. Transitions are
//! pure (`apply` consumes a state and an action and returns the next state),
//! so the router is testable without a terminal.

/// Roles a user can sign in as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Student,
    Professor,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Student, Role::Professor, Role::Admin];

    pub fn title(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Professor => "Professor",
            Role::Admin => "Admin",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Role::Student => "Access courses, assignments and payments",
            Role::Professor => "Manage classes, materials and attendance",
            Role::Admin => "Administer users, courses and the system",
        }
    }
}

/// Which screen the router presents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Portal {
    Login,
    Landing,
    Student,
    Professor,
    Admin,
}

impl Portal {
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Student => Portal::Student,
            Role::Professor => Portal::Professor,
            Role::Admin => Portal::Admin,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Portal::Login => "Sign In",
            Portal::Landing => "Portals",
            Portal::Student => "Student Portal",
            Portal::Professor => "Professor Portal",
            Portal::Admin => "Admin Portal",
        }
    }
}

/// Transitions the router understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    /// A sign-in attempt completed for the given role
    LoginSucceeded(Role),
    /// Drop authentication and return to the login screen
    Logout,
    /// Show the neutral portal picker (authenticated only)
    ShowLanding,
    /// Pick a dashboard from the landing screen
    SelectPortal(Role),
}

/// Authentication flag plus active portal. Exactly one per running instance.
///
/// Invariant: `role` is `Some` exactly when `authenticated` is true.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub authenticated: bool,
    pub role: Option<Role>,
    pub portal: Portal,
}

impl Session {
    pub fn new() -> Self {
        Self {
            authenticated: false,
            role: None,
            portal: Portal::Login,
        }
    }

    /// Pure transition function. Actions that have no edge from the current
    /// state leave it unchanged.
    pub fn apply(self, action: SessionAction) -> Self {
        match action {
            SessionAction::LoginSucceeded(role) if !self.authenticated => Self {
                authenticated: true,
                role: Some(role),
                portal: Portal::for_role(role),
            },
            SessionAction::Logout => Self::new(),
            SessionAction::ShowLanding if self.authenticated => Self {
                portal: Portal::Landing,
                ..self
            },
            SessionAction::SelectPortal(role)
                if self.authenticated && self.portal == Portal::Landing =>
            {
                Self {
                    portal: Portal::for_role(role),
                    ..self
                }
            }
            _ => self,
        }
    }

    /// The dashboard belonging to the signed-in role, or the login screen
    /// when there is none.
    pub fn home_portal(&self) -> Portal {
        self.role.map(Portal::for_role).unwrap_or(Portal::Login)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_logged_out() {
        let session = Session::new();
        assert!(!session.authenticated);
        assert_eq!(session.role, None);
        assert_eq!(session.portal, Portal::Login);
    }

    #[test]
    fn login_routes_to_role_dashboard() {
        for role in Role::ALL {
            let session = Session::new().apply(SessionAction::LoginSucceeded(role));
            assert!(session.authenticated);
            assert_eq!(session.role, Some(role));
            assert_eq!(session.portal, Portal::for_role(role));
        }
    }

    #[test]
    fn logout_is_idempotent() {
        let signed_in = Session::new().apply(SessionAction::LoginSucceeded(Role::Admin));
        let once = signed_in.apply(SessionAction::Logout);
        let twice = once.apply(SessionAction::Logout);
        assert_eq!(once, Session::new());
        assert_eq!(twice, Session::new());
    }

    #[test]
    fn landing_requires_authentication() {
        let session = Session::new().apply(SessionAction::ShowLanding);
        assert_eq!(session.portal, Portal::Login);

        let session = Session::new()
            .apply(SessionAction::LoginSucceeded(Role::Student))
            .apply(SessionAction::ShowLanding);
        assert_eq!(session.portal, Portal::Landing);
        assert_eq!(session.role, Some(Role::Student));
    }

    #[test]
    fn select_portal_only_from_landing() {
        // On a dashboard, SelectPortal is not an edge
        let session = Session::new().apply(SessionAction::LoginSucceeded(Role::Student));
        let unchanged = session.apply(SessionAction::SelectPortal(Role::Admin));
        assert_eq!(unchanged.portal, Portal::Student);

        // From landing, it switches without touching authentication
        let switched = session
            .apply(SessionAction::ShowLanding)
            .apply(SessionAction::SelectPortal(Role::Admin));
        assert!(switched.authenticated);
        assert_eq!(switched.role, Some(Role::Student));
        assert_eq!(switched.portal, Portal::Admin);
    }

    #[test]
    fn stale_login_has_no_edge_when_authenticated() {
        let session = Session::new().apply(SessionAction::LoginSucceeded(Role::Professor));
        let unchanged = session.apply(SessionAction::LoginSucceeded(Role::Admin));
        assert_eq!(unchanged, session);
    }
}
