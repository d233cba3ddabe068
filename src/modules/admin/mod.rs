//! Admin dashboard - tabbed view over users, courses and system health

pub mod data;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::{Action, Module, NotifyLevel, Session, SessionAction};
use crate::modules::DISPLAY_ONLY;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminTab {
    Overview,
    Users,
    Courses,
    Analytics,
    System,
    Settings,
}

impl AdminTab {
    pub const ALL: [AdminTab; 6] = [
        AdminTab::Overview,
        AdminTab::Users,
        AdminTab::Courses,
        AdminTab::Analytics,
        AdminTab::System,
        AdminTab::Settings,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            AdminTab::Overview => "Overview",
            AdminTab::Users => "Users",
            AdminTab::Courses => "Courses",
            AdminTab::Analytics => "Analytics",
            AdminTab::System => "System",
            AdminTab::Settings => "Settings",
        }
    }

    pub fn shortcut(&self) -> char {
        match self {
            AdminTab::Overview => '1',
            AdminTab::Users => '2',
            AdminTab::Courses => '3',
            AdminTab::Analytics => '4',
            AdminTab::System => '5',
            AdminTab::Settings => '6',
        }
    }
}

/// Admin dashboard state: active tab plus one row cursor per tab
#[derive(Debug)]
pub struct AdminView {
    pub tab: AdminTab,
    cursors: [usize; 6],
}

impl AdminView {
    pub fn new() -> Self {
        Self {
            tab: AdminTab::Overview,
            cursors: [0; 6],
        }
    }

    pub fn select_tab(&mut self, tab: AdminTab) {
        self.tab = tab;
    }

    pub fn cycle_tab(&mut self, forward: bool) {
        let idx = self.tab as usize;
        let len = AdminTab::ALL.len();
        let next = if forward {
            (idx + 1) % len
        } else {
            (idx + len - 1) % len
        };
        self.tab = AdminTab::ALL[next];
    }

    pub fn cursor(&self) -> usize {
        self.cursors[self.tab as usize]
    }

    pub fn rows_len(&self) -> usize {
        match self.tab {
            AdminTab::Overview => data::ALERTS.len(),
            AdminTab::Users => data::USERS.len(),
            AdminTab::Courses => data::COURSES.len(),
            AdminTab::Analytics => data::MONTHLY_GROWTH.len(),
            AdminTab::System => data::SERVICES.len(),
            AdminTab::Settings => data::SETTINGS_GENERAL.len() + data::SETTINGS_MAINTENANCE.len(),
        }
    }

    fn move_up(&mut self) {
        let idx = self.tab as usize;
        self.cursors[idx] = self.cursors[idx].saturating_sub(1);
    }

    fn move_down(&mut self) {
        let len = self.rows_len();
        let idx = self.tab as usize;
        if self.cursors[idx] + 1 < len {
            self.cursors[idx] += 1;
        }
    }

    /// Settings rows span the general group then the maintenance group
    pub fn setting_at(&self, index: usize) -> Option<&'static str> {
        let general = data::SETTINGS_GENERAL.len();
        if index < general {
            data::SETTINGS_GENERAL.get(index).copied()
        } else {
            data::SETTINGS_MAINTENANCE.get(index - general).copied()
        }
    }

    pub fn copy_text(&self) -> Option<String> {
        match self.tab {
            AdminTab::Overview => data::ALERTS
                .get(self.cursor())
                .map(|a| format!("[{}] {} ({})", a.level.title(), a.text, a.age)),
            AdminTab::Users => data::USERS.get(self.cursor()).map(|u| {
                format!(
                    "{} {} - {} ({}) joined {}",
                    u.id,
                    u.name,
                    u.role,
                    u.status.title(),
                    u.joined
                )
            }),
            AdminTab::Courses => data::COURSES.get(self.cursor()).map(|c| {
                format!(
                    "{} {} - {} enrolled, {} ({})",
                    c.code,
                    c.name,
                    c.enrolled,
                    c.instructor,
                    c.status.title()
                )
            }),
            AdminTab::Analytics => data::MONTHLY_GROWTH.get(self.cursor()).map(|g| {
                format!(
                    "{}: {} students, {} professors, {} courses",
                    g.month, g.students, g.professors, g.courses
                )
            }),
            AdminTab::System => data::SERVICES
                .get(self.cursor())
                .map(|s| format!("{} {} uptime {}", s.name, s.state.title(), s.uptime)),
            AdminTab::Settings => self.setting_at(self.cursor()).map(str::to_owned),
        }
    }

    fn has_inert_actions(&self) -> bool {
        matches!(
            self.tab,
            AdminTab::Users | AdminTab::Courses | AdminTab::Settings
        )
    }
}

impl Default for AdminView {
    fn default() -> Self {
        Self::new()
    }
}

impl Module for AdminView {
    fn handle_key(&mut self, key: KeyEvent, _session: &Session) -> Action {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), mods) if mods.contains(KeyModifiers::CONTROL) => Action::Quit,
            (KeyCode::Char(ch), _) if ch.is_ascii_digit() => {
                if let Some(tab) = AdminTab::ALL.iter().find(|tab| tab.shortcut() == ch) {
                    self.select_tab(*tab);
                }
                Action::None
            }
            (KeyCode::Right, _) | (KeyCode::Char(']'), _) | (KeyCode::Char('l'), _)
            | (KeyCode::Tab, _) => {
                self.cycle_tab(true);
                Action::None
            }
            (KeyCode::Left, _) | (KeyCode::Char('['), _) | (KeyCode::Char('h'), _)
            | (KeyCode::BackTab, _) => {
                self.cycle_tab(false);
                Action::None
            }
            (KeyCode::Down, _) | (KeyCode::Char('j'), _) => {
                self.move_down();
                Action::None
            }
            (KeyCode::Up, _) | (KeyCode::Char('k'), _) => {
                self.move_up();
                Action::None
            }
            (KeyCode::Char('p'), _) => Action::Session(SessionAction::ShowLanding),
            (KeyCode::Esc, _) => Action::Session(SessionAction::Logout),
            (KeyCode::Char('y'), _) => match self.copy_text() {
                Some(text) => Action::Copy(text),
                None => Action::Notify("Nothing to copy here".into(), NotifyLevel::Warn),
            },
            (KeyCode::Enter, _) if self.has_inert_actions() => {
                Action::Notify(DISPLAY_ONLY.into(), NotifyLevel::Info)
            }
            _ => Action::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn signed_in() -> Session {
        Session::new().apply(SessionAction::LoginSucceeded(crate::core::Role::Admin))
    }

    #[test]
    fn settings_cursor_spans_both_groups() {
        let mut view = AdminView::new();
        let session = signed_in();
        view.select_tab(AdminTab::Settings);
        assert_eq!(view.rows_len(), 8);
        for _ in 0..20 {
            view.handle_key(press(KeyCode::Char('j')), &session);
        }
        assert_eq!(view.cursor(), 7);
        assert_eq!(view.copy_text().as_deref(), Some("System Maintenance Mode"));
    }

    #[test]
    fn users_copy_includes_status() {
        let mut view = AdminView::new();
        let session = signed_in();
        view.select_tab(AdminTab::Users);
        view.handle_key(press(KeyCode::Char('j')), &session);
        view.handle_key(press(KeyCode::Char('j')), &session);
        let text = view.copy_text().unwrap();
        assert!(text.contains("Jane Smith"));
        assert!(text.contains("Inactive"));
    }

    #[test]
    fn overview_cursor_walks_alerts() {
        let mut view = AdminView::new();
        let session = signed_in();
        view.handle_key(press(KeyCode::Char('j')), &session);
        let text = view.copy_text().unwrap();
        assert!(text.contains("registration opened"));
    }

    #[test]
    fn digit_beyond_tab_count_is_ignored() {
        let mut view = AdminView::new();
        let session = signed_in();
        view.handle_key(press(KeyCode::Char('9')), &session);
        assert_eq!(view.tab, AdminTab::Overview);
    }

    #[test]
    fn enter_on_users_is_display_only() {
        let mut view = AdminView::new();
        let session = signed_in();
        view.select_tab(AdminTab::Users);
        assert!(matches!(
            view.handle_key(press(KeyCode::Enter), &session),
            Action::Notify(_, NotifyLevel::Info)
        ));
    }
}
