//! Portal landing: pick which dashboard to open while signed in

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::{Action, Module, Role, Session, SessionAction};

/// One selectable portal card
pub struct PortalCard {
    pub role: Role,
    pub title: &'static str,
    pub blurb: &'static str,
    pub features: [&'static str; 4],
}

pub const CARDS: [PortalCard; 3] = [
    PortalCard {
        role: Role::Student,
        title: "Student Portal",
        blurb: "Access your academic world",
        features: [
            "View Attendance",
            "Course Materials",
            "Submit Assignments",
            "Exam Timetable",
        ],
    },
    PortalCard {
        role: Role::Professor,
        title: "Professor Portal",
        blurb: "Manage your classes",
        features: [
            "Upload Attendance",
            "Share Materials",
            "Grade Assignments",
            "View Timetable",
        ],
    },
    PortalCard {
        role: Role::Admin,
        title: "Admin Portal",
        blurb: "Run the institution",
        features: [
            "User Management",
            "System Analytics",
            "Course Management",
            "Reports",
        ],
    },
];

/// Landing screen state: which card carries the highlight
#[derive(Debug)]
pub struct LandingView {
    pub focus: Role,
}

impl LandingView {
    pub fn new() -> Self {
        Self {
            focus: Role::Student,
        }
    }

    /// Focus the signed-in user's own card when the landing opens
    pub fn focus_role(&mut self, role: Role) {
        self.focus = role;
    }

    fn cycle(&mut self, forward: bool) {
        let idx = Role::ALL
            .iter()
            .position(|role| *role == self.focus)
            .unwrap_or(0);
        let next = if forward {
            (idx + 1) % Role::ALL.len()
        } else {
            (idx + Role::ALL.len() - 1) % Role::ALL.len()
        };
        self.focus = Role::ALL[next];
    }
}

impl Default for LandingView {
    fn default() -> Self {
        Self::new()
    }
}

impl Module for LandingView {
    fn handle_key(&mut self, key: KeyEvent, session: &Session) -> Action {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), mods) if mods.contains(KeyModifiers::CONTROL) => Action::Quit,
            (KeyCode::Left, _) | (KeyCode::Char('h'), _) | (KeyCode::BackTab, _) => {
                self.cycle(false);
                Action::None
            }
            (KeyCode::Right, _) | (KeyCode::Char('l'), _) | (KeyCode::Tab, _) => {
                self.cycle(true);
                Action::None
            }
            (KeyCode::Char('1'), _) => {
                self.focus = Role::Student;
                Action::Session(SessionAction::SelectPortal(Role::Student))
            }
            (KeyCode::Char('2'), _) => {
                self.focus = Role::Professor;
                Action::Session(SessionAction::SelectPortal(Role::Professor))
            }
            (KeyCode::Char('3'), _) => {
                self.focus = Role::Admin;
                Action::Session(SessionAction::SelectPortal(Role::Admin))
            }
            (KeyCode::Enter, _) => Action::Session(SessionAction::SelectPortal(self.focus)),
            (KeyCode::Char('s'), _) => Action::Session(SessionAction::Logout),
            (KeyCode::Esc, _) => match session.role {
                Some(role) => Action::Session(SessionAction::SelectPortal(role)),
                None => Action::None,
            },
            _ => Action::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Portal;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn landing_session(role: Role) -> Session {
        Session::new()
            .apply(SessionAction::LoginSucceeded(role))
            .apply(SessionAction::ShowLanding)
    }

    #[test]
    fn enter_selects_highlighted_portal() {
        let mut view = LandingView::new();
        let session = landing_session(Role::Student);
        view.handle_key(press(KeyCode::Right), &session);
        let action = view.handle_key(press(KeyCode::Enter), &session);
        assert!(matches!(
            action,
            Action::Session(SessionAction::SelectPortal(Role::Professor))
        ));
    }

    #[test]
    fn escape_returns_to_own_dashboard() {
        let mut view = LandingView::new();
        let session = landing_session(Role::Professor);
        let action = view.handle_key(press(KeyCode::Esc), &session);
        match action {
            Action::Session(select) => {
                assert_eq!(
                    session.apply(select).portal,
                    Portal::for_role(Role::Professor)
                );
            }
            other => panic!("expected portal selection, got {other:?}"),
        }
    }

    #[test]
    fn highlight_wraps_both_directions() {
        let mut view = LandingView::new();
        let session = landing_session(Role::Student);
        view.handle_key(press(KeyCode::Char('h')), &session);
        assert_eq!(view.focus, Role::Admin);
        view.handle_key(press(KeyCode::Char('l')), &session);
        assert_eq!(view.focus, Role::Student);
    }

    #[test]
    fn digits_jump_straight_to_a_portal() {
        let mut view = LandingView::new();
        let session = landing_session(Role::Admin);
        let action = view.handle_key(press(KeyCode::Char('2')), &session);
        assert!(matches!(
            action,
            Action::Session(SessionAction::SelectPortal(Role::Professor))
        ));
        assert_eq!(view.focus, Role::Professor);
    }

    #[test]
    fn sign_out_works_from_the_picker() {
        let mut view = LandingView::new();
        let session = landing_session(Role::Student);
        let action = view.handle_key(press(KeyCode::Char('s')), &session);
        match action {
            Action::Session(logout) => {
                assert_eq!(session.apply(logout), Session::new());
            }
            other => panic!("expected logout, got {other:?}"),
        }
    }

    #[test]
    fn cards_cover_every_role() {
        for (card, role) in CARDS.iter().zip(Role::ALL) {
            assert_eq!(card.role, role);
            assert_eq!(card.features.len(), 4);
        }
    }
}
