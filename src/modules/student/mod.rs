//! Student dashboard - tabbed view over the bundled academic records

pub mod data;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::{Action, Module, NotifyLevel, Session, SessionAction};
use crate::modules::DISPLAY_ONLY;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentTab {
    Overview,
    Courses,
    Timetable,
    Assignments,
    Materials,
    Payments,
}

impl StudentTab {
    pub const ALL: [StudentTab; 6] = [
        StudentTab::Overview,
        StudentTab::Courses,
        StudentTab::Timetable,
        StudentTab::Assignments,
        StudentTab::Materials,
        StudentTab::Payments,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            StudentTab::Overview => "Overview",
            StudentTab::Courses => "Courses",
            StudentTab::Timetable => "Timetable",
            StudentTab::Assignments => "Assignments",
            StudentTab::Materials => "Materials",
            StudentTab::Payments => "Payments",
        }
    }

    pub fn shortcut(&self) -> char {
        match self {
            StudentTab::Overview => '1',
            StudentTab::Courses => '2',
            StudentTab::Timetable => '3',
            StudentTab::Assignments => '4',
            StudentTab::Materials => '5',
            StudentTab::Payments => '6',
        }
    }
}

/// Student dashboard state: active tab plus one row cursor per tab
#[derive(Debug)]
pub struct StudentView {
    pub tab: StudentTab,
    cursors: [usize; 6],
}

impl StudentView {
    pub fn new() -> Self {
        Self {
            tab: StudentTab::Overview,
            cursors: [0; 6],
        }
    }

    pub fn select_tab(&mut self, tab: StudentTab) {
        self.tab = tab;
    }

    pub fn cycle_tab(&mut self, forward: bool) {
        let idx = self.tab as usize;
        let len = StudentTab::ALL.len();
        let next = if forward {
            (idx + 1) % len
        } else {
            (idx + len - 1) % len
        };
        self.tab = StudentTab::ALL[next];
    }

    pub fn cursor(&self) -> usize {
        self.cursors[self.tab as usize]
    }

    /// Row count behind the cursor on the active tab
    pub fn rows_len(&self) -> usize {
        match self.tab {
            StudentTab::Overview => 0,
            StudentTab::Courses => data::COURSES.len(),
            StudentTab::Timetable => data::TIMETABLE.len(),
            StudentTab::Assignments => data::ASSIGNMENTS.len(),
            StudentTab::Materials => data::COURSES.len(),
            StudentTab::Payments => data::PAYMENT_HISTORY.len(),
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

    /// Text rendering of the selected row, for the clipboard
    pub fn copy_text(&self) -> Option<String> {
        match self.tab {
            StudentTab::Overview => {
                let p = &data::PROFILE;
                Some(format!(
                    "{} ({}) {}, {}",
                    p.name, p.roll_no, p.department, p.semester
                ))
            }
            StudentTab::Courses => data::COURSES.get(self.cursor()).map(|c| {
                format!("{} {} - {} ({} credits)", c.code, c.name, c.instructor, c.credits)
            }),
            StudentTab::Timetable => data::TIMETABLE
                .get(self.cursor())
                .map(|t| format!("{} {} {} in {}", t.day, t.time, t.subject, t.room)),
            StudentTab::Assignments => data::ASSIGNMENTS.get(self.cursor()).map(|a| {
                format!("{} [{}] due {} ({})", a.title, a.course, a.due, a.status.title())
            }),
            StudentTab::Materials => data::COURSES.get(self.cursor()).map(|c| {
                format!("{} {}: {}", c.code, c.name, data::MATERIAL_KINDS.join(", "))
            }),
            StudentTab::Payments => data::PAYMENT_HISTORY
                .get(self.cursor())
                .map(|p| format!("{} {} - {}", p.description, p.amount, p.status)),
        }
    }

    fn has_inert_actions(&self) -> bool {
        matches!(
            self.tab,
            StudentTab::Assignments | StudentTab::Materials | StudentTab::Payments
        )
    }
}

impl Default for StudentView {
    fn default() -> Self {
        Self::new()
    }
}

impl Module for StudentView {
    fn handle_key(&mut self, key: KeyEvent, _session: &Session) -> Action {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), mods) if mods.contains(KeyModifiers::CONTROL) => Action::Quit,
            (KeyCode::Char(ch), _) if ch.is_ascii_digit() => {
                if let Some(tab) = StudentTab::ALL.iter().find(|tab| tab.shortcut() == ch) {
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
