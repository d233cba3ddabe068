//! Professor dashboard - tabbed view over classes, students and attendance

pub mod data;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::{Action, Module, NotifyLevel, Session, SessionAction};
use crate::modules::DISPLAY_ONLY;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfessorTab {
    Overview,
    Classes,
    Students,
    Timetable,
    Materials,
    Attendance,
}

impl ProfessorTab {
    pub const ALL: [ProfessorTab; 6] = [
        ProfessorTab::Overview,
        ProfessorTab::Classes,
        ProfessorTab::Students,
        ProfessorTab::Timetable,
        ProfessorTab::Materials,
        ProfessorTab::Attendance,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ProfessorTab::Overview => "Overview",
            ProfessorTab::Classes => "Classes",
            ProfessorTab::Students => "Students",
            ProfessorTab::Timetable => "Timetable",
            ProfessorTab::Materials => "Materials",
            ProfessorTab::Attendance => "Attendance",
        }
    }

    pub fn shortcut(&self) -> char {
        match self {
            ProfessorTab::Overview => '1',
            ProfessorTab::Classes => '2',
            ProfessorTab::Students => '3',
            ProfessorTab::Timetable => '4',
            ProfessorTab::Materials => '5',
            ProfessorTab::Attendance => '6',
        }
    }
}

/// Professor dashboard state: active tab plus one row cursor per tab
#[derive(Debug)]
pub struct ProfessorView {
    pub tab: ProfessorTab,
    cursors: [usize; 6],
}

impl ProfessorView {
    pub fn new() -> Self {
        Self {
            tab: ProfessorTab::Overview,
            cursors: [0; 6],
        }
    }

    pub fn select_tab(&mut self, tab: ProfessorTab) {
        self.tab = tab;
    }

    pub fn cycle_tab(&mut self, forward: bool) {
        let idx = self.tab as usize;
        let len = ProfessorTab::ALL.len();
        let next = if forward {
            (idx + 1) % len
        } else {
            (idx + len - 1) % len
        };
        self.tab = ProfessorTab::ALL[next];
    }

    pub fn cursor(&self) -> usize {
        self.cursors[self.tab as usize]
    }

    pub fn rows_len(&self) -> usize {
        match self.tab {
            ProfessorTab::Overview => 0,
            ProfessorTab::Classes => data::CLASSES.len(),
            ProfessorTab::Students => data::STUDENTS.len(),
            ProfessorTab::Timetable => data::TIMETABLE.len(),
            ProfessorTab::Materials => data::MATERIALS.len(),
            ProfessorTab::Attendance => data::RECENT_ATTENDANCE.len(),
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

    pub fn copy_text(&self) -> Option<String> {
        match self.tab {
            ProfessorTab::Overview => {
                let p = &data::PROFILE;
                Some(format!(
                    "{} ({}) {}, {}",
                    p.name, p.id, p.department, p.experience
                ))
            }
            ProfessorTab::Classes => data::CLASSES.get(self.cursor()).map(|c| {
                format!(
                    "{} {} - {} students, {} semester, {}",
                    c.code, c.name, c.students, c.semester, c.schedule
                )
            }),
            ProfessorTab::Students => data::STUDENTS.get(self.cursor()).map(|s| {
                format!(
                    "{} {} CGPA {} attendance {}%",
                    s.roll_no, s.name, s.cgpa, s.attendance_pct
                )
            }),
            ProfessorTab::Timetable => data::TIMETABLE.get(self.cursor()).map(|t| {
                format!("{} {} {} [{}] in {}", t.day, t.time, t.subject, t.class_code, t.room)
            }),
            ProfessorTab::Materials => data::MATERIALS
                .get(self.cursor())
                .map(|m| format!("{} ({}) uploaded {}", m.title, m.kind, m.uploaded)),
            ProfessorTab::Attendance => data::RECENT_ATTENDANCE.get(self.cursor()).map(|a| {
                format!("{} {}: {}/{} present", a.class_code, a.date, a.present, a.total)
            }),
        }
    }

    fn has_inert_actions(&self) -> bool {
        matches!(self.tab, ProfessorTab::Materials | ProfessorTab::Attendance)
    }
}

impl Default for ProfessorView {
    fn default() -> Self {
        Self::new()
    }
}

impl Module for ProfessorView {
    fn handle_key(&mut self, key: KeyEvent, _session: &Session) -> Action {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), mods) if mods.contains(KeyModifiers::CONTROL) => Action::Quit,
            (KeyCode::Char(ch), _) if ch.is_ascii_digit() => {
                if let Some(tab) = ProfessorTab::ALL.iter().find(|tab| tab.shortcut() == ch) {
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
        Session::new().apply(SessionAction::LoginSucceeded(crate::core::Role::Professor))
    }

    #[test]
    fn shortcuts_cover_all_six_tabs() {
        for (tab, digit) in ProfessorTab::ALL.iter().zip('1'..='6') {
            assert_eq!(tab.shortcut(), digit);
        }
    }

    #[test]
    fn tab_cycle_wraps() {
        let mut view = ProfessorView::new();
        let session = signed_in();
        view.handle_key(press(KeyCode::BackTab), &session);
        assert_eq!(view.tab, ProfessorTab::Attendance);
        view.handle_key(press(KeyCode::Tab), &session);
        assert_eq!(view.tab, ProfessorTab::Overview);
    }

    #[test]
    fn copy_text_reads_the_selected_row() {
        let mut view = ProfessorView::new();
        let session = signed_in();
        view.handle_key(press(KeyCode::Char('3')), &session);
        view.handle_key(press(KeyCode::Char('j')), &session);
        view.handle_key(press(KeyCode::Char('j')), &session);
        view.handle_key(press(KeyCode::Char('j')), &session);
        let text = view.copy_text().unwrap();
        assert!(text.contains("20CS004"));
        assert!(text.contains("Sarah Wilson"));
    }

    #[test]
    fn enter_is_inert_outside_action_tabs() {
        let mut view = ProfessorView::new();
        let session = signed_in();
        view.select_tab(ProfessorTab::Classes);
        assert!(matches!(
            view.handle_key(press(KeyCode::Enter), &session),
            Action::None
        ));
        view.select_tab(ProfessorTab::Attendance);
        assert!(matches!(
            view.handle_key(press(KeyCode::Enter), &session),
            Action::Notify(_, NotifyLevel::Info)
        ));
    }

    #[test]
    fn escape_signs_out() {
        let mut view = ProfessorView::new();
        let session = signed_in();
        assert!(matches!(
            view.handle_key(press(KeyCode::Esc), &session),
            Action::Session(SessionAction::Logout)
        ));
    }
}
