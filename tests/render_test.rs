//! Full-frame render tests on a test backend
//!
//! Each portal screen is drawn into an in-memory buffer and checked for the
//! rows and notices a user would see. The datasets are compiled in, so the
//! assertions can name literal values.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

use campus::app::App;
use campus::core::{Action, Module, Role, SessionAction};
use campus::modules::admin::AdminTab;
use campus::modules::student::StudentTab;
use campus::ui;

fn render(app: &App) -> String {
    let backend = TestBackend::new(120, 36);
    let mut terminal = Terminal::new(backend).expect("terminal");
    terminal.draw(|f| ui::draw(f, app)).expect("draw");

    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer.get(x, y).symbol());
        }
        out.push('\n');
    }
    out
}

fn signed_in(role: Role) -> App {
    let mut app = App::new();
    app.apply_action(Action::Session(SessionAction::LoginSucceeded(role)));
    // Drop the welcome notice so the hint line is visible
    app.status = None;
    app
}

#[test]
fn login_screen_shows_form_and_demo_accounts() {
    let app = App::new();
    let frame = render(&app);

    assert!(frame.contains("SIGN IN"));
    assert!(frame.contains("DEMO ACCOUNTS"));
    assert!(frame.contains("▸Student"));
    assert!(frame.contains("student123"));
    assert!(frame.contains("prof001"));
    assert!(frame.contains("admin"));
    assert!(frame.contains("College Management System"));
}

#[test]
fn empty_submit_notice_is_rendered() {
    let mut app = App::new();
    let session = app.session;
    let action = app
        .login
        .handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE), &session);
    app.apply_action(action);

    let frame = render(&app);
    assert!(frame.contains("Please enter both username and password"));
}

#[test]
fn password_is_masked_until_revealed() {
    let mut app = App::new();
    let session = app.session;
    for code in [
        KeyCode::Tab,
        KeyCode::Tab,
        KeyCode::Char('h'),
        KeyCode::Char('u'),
        KeyCode::Char('s'),
        KeyCode::Char('h'),
    ] {
        let action = app
            .login
            .handle_key(KeyEvent::new(code, KeyModifiers::NONE), &session);
        app.apply_action(action);
    }

    let frame = render(&app);
    assert!(frame.contains("••••"));
    assert!(!frame.contains("hush"));

    let action = app.login.handle_key(
        KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL),
        &session,
    );
    app.apply_action(action);
    let frame = render(&app);
    assert!(frame.contains("hush"));
}

#[test]
fn landing_screen_shows_all_three_cards() {
    let mut app = signed_in(Role::Student);
    app.apply_action(Action::Session(SessionAction::ShowLanding));

    let frame = render(&app);
    assert!(frame.contains("1:STUDENT PORTAL"));
    assert!(frame.contains("2:PROFESSOR PORTAL"));
    assert!(frame.contains("3:ADMIN PORTAL"));
    assert!(frame.contains("View Attendance"));
    assert!(frame.contains("Upload Attendance"));
    assert!(frame.contains("User Management"));
}

#[test]
fn student_overview_shows_profile_and_attendance() {
    let app = signed_in(Role::Student);
    let frame = render(&app);

    assert!(frame.contains("Student Portal"));
    assert!(frame.contains("PROFILE"));
    assert!(frame.contains("John Doe"));
    assert!(frame.contains("20CS001"));
    assert!(frame.contains("ATTENDANCE"));
    assert!(frame.contains("TODAY'S SCHEDULE"));
    // Tab bar lists every tab with its shortcut
    for needle in ["1:Overview", "2:Courses", "6:Payments"] {
        assert!(frame.contains(needle), "missing {needle}");
    }
}

#[test]
fn student_courses_tab_lists_the_catalog() {
    let mut app = signed_in(Role::Student);
    app.student.select_tab(StudentTab::Courses);

    let frame = render(&app);
    assert!(frame.contains("ENROLLED COURSES"));
    assert!(frame.contains("Data Structures"));
    assert!(frame.contains("Computer Networks"));
}

#[test]
fn professor_overview_lists_todays_classes() {
    let app = signed_in(Role::Professor);
    let frame = render(&app);

    assert!(frame.contains("Professor Portal"));
    assert!(frame.contains("TODAY'S CLASSES"));
    assert!(frame.contains("RECENT ACTIVITY"));
}

#[test]
fn admin_users_tab_lists_the_records() {
    let mut app = signed_in(Role::Admin);
    app.admin.select_tab(AdminTab::Users);

    let frame = render(&app);
    assert!(frame.contains("USERS"));
    // All four bundled records, untouched
    assert!(frame.contains("John Doe"));
    assert!(frame.contains("Jane Smith"));
    assert!(frame.contains("Dr. Sarah Johnson"));
    assert!(frame.contains("Prof. Michael Brown"));
    assert!(frame.contains("Inactive"));
}

#[test]
fn admin_courses_tab_lists_the_records() {
    let mut app = signed_in(Role::Admin);
    app.admin.select_tab(AdminTab::Courses);

    let frame = render(&app);
    assert!(frame.contains("COURSES"));
    for code in ["CS301", "CS302", "CS303", "CS304"] {
        assert!(frame.contains(code), "missing {code}");
    }
    assert!(frame.contains("Computer Networks"));
}

#[test]
fn admin_overview_shows_stats_and_alerts() {
    let app = signed_in(Role::Admin);
    let frame = render(&app);

    assert!(frame.contains("STUDENTS"));
    assert!(frame.contains("1250"));
    assert!(frame.contains("ACTIVE SESSIONS"));
    assert!(frame.contains("SYSTEM ALERTS"));
}

#[test]
fn help_popup_renders_over_the_dashboard() {
    let mut app = signed_in(Role::Student);
    app.help_open = true;

    let frame = render(&app);
    assert!(frame.contains("Help"));
    assert!(frame.contains("Jump to tab"));
}

#[test]
fn spinner_appears_while_signing_in() {
    let mut app = App::new();
    let session = app.session;
    for code in [KeyCode::Tab, KeyCode::Char('a'), KeyCode::Tab, KeyCode::Char('b')] {
        let action = app
            .login
            .handle_key(KeyEvent::new(code, KeyModifiers::NONE), &session);
        app.apply_action(action);
    }
    let action = app
        .login
        .handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE), &session);
    app.apply_action(action);
    assert!(app.signing_in());

    let frame = render(&app);
    assert!(frame.contains("Signing in as Student"));
}
