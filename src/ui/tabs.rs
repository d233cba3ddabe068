//! Tab-based dashboard rendering

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs as RataTabs};
use ratatui::Frame;

use crate::app::App;
use crate::modules::admin::data as admin_data;
use crate::modules::admin::AdminTab;
use crate::modules::professor::data as professor_data;
use crate::modules::professor::ProfessorTab;
use crate::modules::student::data as student_data;
use crate::modules::student::StudentTab;
use crate::modules::TODAY;

fn tab_title(shortcut: char, title: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{shortcut}:"), Style::default().fg(Color::DarkGray)),
        Span::raw(title),
    ])
}

/// Draw the tab bar at the top of a dashboard
fn draw_tab_bar(f: &mut Frame, area: Rect, titles: Vec<Line<'static>>, selected: usize) {
    let tabs = RataTabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .divider(" │ ");

    f.render_widget(tabs, area);
}

fn bordered(title: &'static str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(title)
}

fn row_highlight() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

fn label(text: &'static str) -> Span<'static> {
    Span::styled(text, Style::default().fg(Color::DarkGray))
}

/// Column divider inside list rows
fn div() -> Span<'static> {
    Span::styled(" │ ", Style::default().fg(Color::DarkGray))
}

fn draw_rows(
    f: &mut Frame,
    area: Rect,
    items: Vec<ListItem<'static>>,
    title: &'static str,
    cursor: usize,
) {
    let list = List::new(items)
        .block(bordered(title))
        .highlight_style(row_highlight())
        .highlight_symbol(">> ");
    let mut state = ListState::default();
    state.select(Some(cursor));
    f.render_stateful_widget(list, area, &mut state);
}

/// One-line filled/empty bar with a percent label
fn percent_bar(pct: u16, width: usize, color: Color) -> Vec<Span<'static>> {
    let filled = (pct as usize * width) / 100;
    vec![
        Span::styled("█".repeat(filled), Style::default().fg(color)),
        Span::styled(
            "░".repeat(width.saturating_sub(filled)),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(format!(" {pct}%")),
    ]
}

// ---------------------------------------------------------------------------
// Student dashboard
// ---------------------------------------------------------------------------

pub fn draw_student_dashboard(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    let titles = StudentTab::ALL
        .iter()
        .map(|tab| tab_title(tab.shortcut(), tab.title()))
        .collect();
    draw_tab_bar(f, chunks[0], titles, app.student.tab as usize);

    match app.student.tab {
        StudentTab::Overview => draw_student_overview(f, chunks[1]),
        StudentTab::Courses => draw_student_courses(f, chunks[1], app),
        StudentTab::Timetable => draw_student_timetable(f, chunks[1], app),
        StudentTab::Assignments => draw_student_assignments(f, chunks[1], app),
        StudentTab::Materials => draw_student_materials(f, chunks[1], app),
        StudentTab::Payments => draw_student_payments(f, chunks[1], app),
    }
}

fn draw_student_overview(f: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let profile = &student_data::PROFILE;
    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(3)])
        .split(chunks[0]);

    let lines = vec![
        Line::from(""),
        Line::from(vec![label(" Name:       "), Span::raw(profile.name)]),
        Line::from(vec![label(" Roll No:    "), Span::raw(profile.roll_no)]),
        Line::from(vec![label(" Semester:   "), Span::raw(profile.semester)]),
        Line::from(vec![label(" Department: "), Span::raw(profile.department)]),
        Line::from(""),
        Line::from(vec![
            label(" CGPA:       "),
            Span::styled(
                format!("{:.1}", profile.cgpa),
                Style::default()
                    .fg(Color::LightCyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];
    f.render_widget(Paragraph::new(lines).block(bordered("PROFILE")), left_chunks[0]);

    let mut bar = vec![Span::raw(" ")];
    bar.extend(percent_bar(profile.attendance_pct, 24, Color::LightGreen));
    f.render_widget(
        Paragraph::new(Line::from(bar)).block(bordered("ATTENDANCE")),
        left_chunks[1],
    );

    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Min(5)])
        .split(chunks[1]);

    let mut schedule = vec![Line::from("")];
    for entry in student_data::TIMETABLE.iter().filter(|e| e.day == TODAY) {
        schedule.push(Line::from(vec![
            Span::styled(
                format!(" {:<12}", entry.time),
                Style::default().fg(Color::LightCyan),
            ),
            Span::raw(format!("{:<22}", entry.subject)),
            Span::styled(entry.room, Style::default().fg(Color::DarkGray)),
        ]));
    }
    if schedule.len() == 1 {
        schedule.push(Line::from(Span::styled(
            " No classes today",
            Style::default().fg(Color::DarkGray),
        )));
    }
    f.render_widget(
        Paragraph::new(schedule).block(bordered("TODAY'S SCHEDULE")),
        right_chunks[0],
    );

    let mut assignments = vec![Line::from("")];
    for assignment in &student_data::ASSIGNMENTS {
        let status_color = match assignment.status {
            student_data::AssignmentStatus::Pending => Color::LightYellow,
            student_data::AssignmentStatus::Submitted => Color::LightGreen,
        };
        assignments.push(Line::from(vec![
            Span::raw(format!(" {:<30}", assignment.title)),
            Span::styled(
                format!("due {}  ", assignment.due),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(assignment.status.title(), Style::default().fg(status_color)),
        ]));
    }
    f.render_widget(
        Paragraph::new(assignments).block(bordered("ASSIGNMENTS")),
        right_chunks[1],
    );
}

fn draw_student_courses(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = student_data::COURSES
        .iter()
        .map(|course| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<6}", course.code),
                    Style::default().fg(Color::LightCyan),
                ),
                div(),
                Span::raw(format!("{:<26}", course.name)),
                div(),
                Span::raw(format!("{:<18}", course.instructor)),
                div(),
                Span::styled(
                    format!("{} credits", course.credits),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    draw_rows(f, area, items, "ENROLLED COURSES", app.student.cursor());
}

fn draw_student_timetable(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = student_data::TIMETABLE
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:<9}", entry.day)),
                div(),
                Span::styled(
                    format!("{:<11}", entry.time),
                    Style::default().fg(Color::LightCyan),
                ),
                div(),
                Span::raw(format!("{:<26}", entry.subject)),
                div(),
                Span::styled(entry.room, Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    draw_rows(f, area, items, "WEEKLY TIMETABLE", app.student.cursor());
}

fn draw_student_assignments(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = student_data::ASSIGNMENTS
        .iter()
        .map(|assignment| {
            let status_color = match assignment.status {
                student_data::AssignmentStatus::Pending => Color::LightYellow,
                student_data::AssignmentStatus::Submitted => Color::LightGreen,
            };
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:<30}", assignment.title)),
                div(),
                Span::styled(
                    format!("{:<5}", assignment.course),
                    Style::default().fg(Color::LightCyan),
                ),
                div(),
                Span::styled(
                    format!("due {}", assignment.due),
                    Style::default().fg(Color::DarkGray),
                ),
                div(),
                Span::styled(assignment.status.title(), Style::default().fg(status_color)),
            ]))
        })
        .collect();

    draw_rows(f, area, items, "ASSIGNMENTS", app.student.cursor());
}

fn draw_student_materials(f: &mut Frame, area: Rect, app: &App) {
    let available = student_data::MATERIAL_KINDS.join(", ");
    let items: Vec<ListItem> = student_data::COURSES
        .iter()
        .map(|course| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<6}", course.code),
                    Style::default().fg(Color::LightCyan),
                ),
                div(),
                Span::raw(format!("{:<26}", course.name)),
                div(),
                Span::styled(available.clone(), Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    draw_rows(f, area, items, "COURSE MATERIALS", app.student.cursor());
}

fn draw_student_payments(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(area);

    let pending = &student_data::PENDING_PAYMENT;
    let pending_lines = vec![
        Line::from(vec![
            label(" Due:    "),
            Span::raw(pending.description),
            Span::raw("  "),
            Span::styled(
                pending.amount,
                Style::default()
                    .fg(Color::LightYellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![label(" Before: "), Span::raw(pending.due)]),
        Line::from(vec![
            Span::raw(" "),
            Span::styled("[ Pay Now ]", Style::default().fg(Color::DarkGray)),
        ]),
    ];
    f.render_widget(
        Paragraph::new(pending_lines).block(bordered("PENDING PAYMENT")),
        chunks[0],
    );

    let items: Vec<ListItem> = student_data::PAYMENT_HISTORY
        .iter()
        .map(|record| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:<24}", record.description)),
                div(),
                Span::raw(format!("{:>8}", record.amount)),
                div(),
                Span::styled(record.status, Style::default().fg(Color::LightGreen)),
            ]))
        })
        .collect();

    draw_rows(f, chunks[1], items, "PAYMENT HISTORY", app.student.cursor());
}

// ---------------------------------------------------------------------------
// Professor dashboard
// ---------------------------------------------------------------------------

pub fn draw_professor_dashboard(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    let titles = ProfessorTab::ALL
        .iter()
        .map(|tab| tab_title(tab.shortcut(), tab.title()))
        .collect();
    draw_tab_bar(f, chunks[0], titles, app.professor.tab as usize);

    match app.professor.tab {
        ProfessorTab::Overview => draw_professor_overview(f, chunks[1]),
        ProfessorTab::Classes => draw_professor_classes(f, chunks[1], app),
        ProfessorTab::Students => draw_professor_students(f, chunks[1], app),
        ProfessorTab::Timetable => draw_professor_timetable(f, chunks[1], app),
        ProfessorTab::Materials => draw_professor_materials(f, chunks[1], app),
        ProfessorTab::Attendance => draw_professor_attendance(f, chunks[1], app),
    }
}

fn draw_professor_overview(f: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let profile = &professor_data::PROFILE;
    let lines = vec![
        Line::from(""),
        Line::from(vec![label(" Name:       "), Span::raw(profile.name)]),
        Line::from(vec![label(" ID:         "), Span::raw(profile.id)]),
        Line::from(vec![label(" Department: "), Span::raw(profile.department)]),
        Line::from(vec![label(" Experience: "), Span::raw(profile.experience)]),
        Line::from(""),
        Line::from(vec![
            label(" Classes:    "),
            Span::styled(
                professor_data::CLASSES.len().to_string(),
                Style::default()
                    .fg(Color::LightCyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            label(" Students:   "),
            Span::styled(
                professor_data::total_students().to_string(),
                Style::default()
                    .fg(Color::LightCyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            label(" Materials:  "),
            Span::styled(
                professor_data::MATERIALS.len().to_string(),
                Style::default()
                    .fg(Color::LightCyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];
    f.render_widget(Paragraph::new(lines).block(bordered("PROFILE")), chunks[0]);

    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Min(6)])
        .split(chunks[1]);

    let mut today = vec![Line::from("")];
    for entry in professor_data::TIMETABLE.iter().filter(|e| e.day == TODAY) {
        today.push(Line::from(vec![
            Span::styled(
                format!(" {:<12}", entry.time),
                Style::default().fg(Color::LightCyan),
            ),
            Span::raw(format!("{:<24}", entry.subject)),
            Span::styled(
                format!("{} {}", entry.class_code, entry.room),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }
    if today.len() == 1 {
        today.push(Line::from(Span::styled(
            " No classes today",
            Style::default().fg(Color::DarkGray),
        )));
    }
    f.render_widget(
        Paragraph::new(today).block(bordered("TODAY'S CLASSES")),
        right_chunks[0],
    );

    let mut activity = vec![Line::from("")];
    for item in professor_data::RECENT_ACTIVITY {
        activity.push(Line::from(vec![
            Span::styled(" • ", Style::default().fg(Color::DarkGray)),
            Span::raw(item),
        ]));
    }
    f.render_widget(
        Paragraph::new(activity).block(bordered("RECENT ACTIVITY")),
        right_chunks[1],
    );
}

fn draw_professor_classes(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = professor_data::CLASSES
        .iter()
        .map(|class| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<6}", class.code),
                    Style::default().fg(Color::LightCyan),
                ),
                div(),
                Span::raw(format!("{:<26}", class.name)),
                div(),
                Span::raw(format!("{:>2}", class.students)),
                label(" students"),
                div(),
                Span::raw(format!("{} sem", class.semester)),
                div(),
                Span::styled(class.schedule, Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    draw_rows(f, area, items, "TEACHING CLASSES", app.professor.cursor());
}

fn draw_professor_students(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = professor_data::STUDENTS
        .iter()
        .map(|student| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<8}", student.roll_no),
                    Style::default().fg(Color::LightCyan),
                ),
                div(),
                Span::raw(format!("{:<18}", student.name)),
                div(),
                label("cgpa "),
                Span::raw(format!("{:.1}", student.cgpa)),
                div(),
                Span::raw(format!("{:>3}%", student.attendance_pct)),
                label(" attendance"),
            ]))
        })
        .collect();

    draw_rows(f, area, items, "STUDENTS", app.professor.cursor());
}

fn draw_professor_timetable(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = professor_data::TIMETABLE
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:<10}", entry.day)),
                div(),
                Span::styled(
                    format!("{:<11}", entry.time),
                    Style::default().fg(Color::LightCyan),
                ),
                div(),
                Span::raw(format!("{:<6}", entry.class_code)),
                div(),
                Span::raw(format!("{:<26}", entry.subject)),
                div(),
                Span::styled(entry.room, Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    draw_rows(f, area, items, "WEEKLY TIMETABLE", app.professor.cursor());
}

fn draw_professor_materials(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = professor_data::MATERIALS
        .iter()
        .map(|material| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:<42}", material.title)),
                div(),
                Span::styled(
                    format!("{:<13}", material.kind),
                    Style::default().fg(Color::LightCyan),
                ),
                div(),
                Span::styled(material.uploaded, Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    draw_rows(f, area, items, "UPLOADED MATERIALS", app.professor.cursor());
}

fn draw_professor_attendance(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(area);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(chunks[0]);

    for (idx, class) in professor_data::CLASSES.iter().enumerate() {
        let lines = vec![
            Line::from(vec![Span::raw(" "), Span::raw(class.name)]),
            Line::from(vec![
                Span::raw(" "),
                Span::styled(
                    format!("{} students", class.students),
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
        ];
        f.render_widget(Paragraph::new(lines).block(bordered(class.code)), cards[idx]);
    }

    let items: Vec<ListItem> = professor_data::RECENT_ATTENDANCE
        .iter()
        .map(|session| {
            let full = session.present == session.total;
            let ratio_color = if full { Color::LightGreen } else { Color::White };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<6}", session.class_code),
                    Style::default().fg(Color::LightCyan),
                ),
                div(),
                Span::raw(format!("{:<17}", session.date)),
                div(),
                Span::styled(
                    format!("{}/{}", session.present, session.total),
                    Style::default().fg(ratio_color),
                ),
                label(" present"),
            ]))
        })
        .collect();

    draw_rows(f, chunks[1], items, "RECENT SESSIONS", app.professor.cursor());
}

// ---------------------------------------------------------------------------
// Admin dashboard
// ---------------------------------------------------------------------------

pub fn draw_admin_dashboard(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    let titles = AdminTab::ALL
        .iter()
        .map(|tab| tab_title(tab.shortcut(), tab.title()))
        .collect();
    draw_tab_bar(f, chunks[0], titles, app.admin.tab as usize);

    match app.admin.tab {
        AdminTab::Overview => draw_admin_overview(f, chunks[1], app),
        AdminTab::Users => draw_admin_users(f, chunks[1], app),
        AdminTab::Courses => draw_admin_courses(f, chunks[1], app),
        AdminTab::Analytics => draw_admin_analytics(f, chunks[1], app),
        AdminTab::System => draw_admin_system(f, chunks[1], app),
        AdminTab::Settings => draw_admin_settings(f, chunks[1], app),
    }
}

fn stat_card(f: &mut Frame, area: Rect, title: &'static str, value: String) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            value,
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    let card = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(bordered(title));
    f.render_widget(card, area);
}

fn draw_admin_overview(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(area);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(chunks[0]);

    let stats = &admin_data::STATS;
    stat_card(f, cards[0], "STUDENTS", stats.students.to_string());
    stat_card(f, cards[1], "PROFESSORS", stats.professors.to_string());
    stat_card(f, cards[2], "COURSES", stats.courses.to_string());
    stat_card(f, cards[3], "ACTIVE SESSIONS", stats.active_sessions.to_string());

    let items: Vec<ListItem> = admin_data::ALERTS
        .iter()
        .map(|alert| {
            let marker_color = match alert.level {
                admin_data::AlertLevel::Info => Color::LightCyan,
                admin_data::AlertLevel::Success => Color::LightGreen,
                admin_data::AlertLevel::Warning => Color::LightYellow,
                admin_data::AlertLevel::Error => Color::LightRed,
            };
            ListItem::new(Line::from(vec![
                Span::styled("● ", Style::default().fg(marker_color)),
                Span::raw(alert.text),
                Span::styled(
                    format!("  {}", alert.age),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    draw_rows(f, chunks[1], items, "SYSTEM ALERTS", app.admin.cursor());
}

fn draw_admin_users(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = admin_data::USERS
        .iter()
        .map(|user| {
            let status_color = match user.status {
                admin_data::RecordStatus::Active => Color::LightGreen,
                admin_data::RecordStatus::Inactive => Color::LightRed,
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<8}", user.id),
                    Style::default().fg(Color::LightCyan),
                ),
                div(),
                Span::raw(format!("{:<20}", user.name)),
                div(),
                Span::raw(format!("{:<10}", user.role)),
                div(),
                Span::styled(
                    format!("{:<8}", user.status.title()),
                    Style::default().fg(status_color),
                ),
                div(),
                Span::styled(
                    format!("joined {}", user.joined),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    draw_rows(f, area, items, "USERS", app.admin.cursor());
}

fn draw_admin_courses(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = admin_data::COURSES
        .iter()
        .map(|course| {
            let status_color = match course.status {
                admin_data::RecordStatus::Active => Color::LightGreen,
                admin_data::RecordStatus::Inactive => Color::LightRed,
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<6}", course.code),
                    Style::default().fg(Color::LightCyan),
                ),
                div(),
                Span::raw(format!("{:<20}", course.name)),
                div(),
                Span::raw(format!("{:>2}", course.enrolled)),
                label(" enrolled"),
                div(),
                Span::raw(format!("{:<14}", course.instructor)),
                div(),
                Span::styled(course.status.title(), Style::default().fg(status_color)),
            ]))
        })
        .collect();

    draw_rows(f, area, items, "COURSES", app.admin.cursor());
}

fn draw_admin_analytics(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let items: Vec<ListItem> = admin_data::MONTHLY_GROWTH
        .iter()
        .map(|growth| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:<4}", growth.month)),
                div(),
                Span::styled(
                    format!("{:>4}", growth.students),
                    Style::default().fg(Color::LightCyan),
                ),
                label(" students"),
                div(),
                Span::styled(
                    format!("{:>2}", growth.professors),
                    Style::default().fg(Color::LightCyan),
                ),
                label(" professors"),
                div(),
                Span::styled(
                    format!("{:>3}", growth.courses),
                    Style::default().fg(Color::LightCyan),
                ),
                label(" courses"),
            ]))
        })
        .collect();

    draw_rows(f, chunks[0], items, "MONTHLY GROWTH", app.admin.cursor());

    let mut lines = vec![Line::from("")];
    for metric in &admin_data::PERFORMANCE {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {:<22}", metric.label),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                metric.value,
                Style::default()
                    .fg(Color::LightCyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }
    f.render_widget(
        Paragraph::new(lines).block(bordered("PERFORMANCE")),
        chunks[1],
    );
}

fn draw_admin_system(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let items: Vec<ListItem> = admin_data::SERVICES
        .iter()
        .map(|service| {
            let marker_color = match service.state {
                admin_data::ServiceState::Online => Color::LightGreen,
                admin_data::ServiceState::Maintenance => Color::LightYellow,
            };
            ListItem::new(Line::from(vec![
                Span::styled("● ", Style::default().fg(marker_color)),
                Span::raw(format!("{:<16}", service.name)),
                Span::styled(
                    format!("{:<14}", service.state.title()),
                    Style::default().fg(marker_color),
                ),
                Span::styled(
                    format!("uptime {}", service.uptime),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    draw_rows(f, chunks[0], items, "SERVICES", app.admin.cursor());

    let mut lines = vec![Line::from("")];
    for resource in &admin_data::RESOURCES {
        let color = if resource.pct >= 80 {
            Color::LightRed
        } else if resource.pct >= 60 {
            Color::LightYellow
        } else {
            Color::LightGreen
        };
        let mut spans = vec![Span::styled(
            format!(" {:<9}", resource.label),
            Style::default().fg(Color::DarkGray),
        )];
        spans.extend(percent_bar(resource.pct, 20, color));
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }
    f.render_widget(
        Paragraph::new(lines).block(bordered("RESOURCES")),
        chunks[1],
    );
}

fn draw_admin_settings(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let cursor = app.admin.cursor();
    let general_len = admin_data::SETTINGS_GENERAL.len();

    let mut general = vec![Line::from("")];
    for (idx, item) in admin_data::SETTINGS_GENERAL.iter().enumerate() {
        let selected = cursor == idx;
        let prefix = if selected { "▸" } else { " " };
        let style = if selected {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        general.push(Line::from(Span::styled(
            format!(" {}{}", prefix, item),
            style,
        )));
    }
    f.render_widget(Paragraph::new(general).block(bordered("GENERAL")), chunks[0]);

    let mut maintenance = vec![Line::from("")];
    for (idx, item) in admin_data::SETTINGS_MAINTENANCE.iter().enumerate() {
        let selected = cursor == general_len + idx;
        let prefix = if selected { "▸" } else { " " };
        let style = if selected {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        maintenance.push(Line::from(Span::styled(
            format!(" {}{}", prefix, item),
            style,
        )));
    }
    f.render_widget(
        Paragraph::new(maintenance).block(bordered("MAINTENANCE")),
        chunks[1],
    );
}
