use chrono::Local;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub mod layout;
pub mod tabs;

use crate::app::{App, StatusLevel};
use crate::core::{Portal, Role};
use crate::modules::landing::CARDS;
use crate::modules::login::{LoginField, DEMO_ACCOUNTS};

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner_glyph(ticks: u64) -> &'static str {
    SPINNER_FRAMES[(ticks as usize) % SPINNER_FRAMES.len()]
}

pub fn draw(f: &mut Frame, app: &App) {
    let areas = layout::areas(f.size());

    draw_header(f, areas.header, app);
    match app.session.portal {
        Portal::Login => draw_login(f, areas.main, app),
        Portal::Landing => draw_landing(f, areas.main, app),
        Portal::Student => tabs::draw_student_dashboard(f, areas.main, app),
        Portal::Professor => tabs::draw_professor_dashboard(f, areas.main, app),
        Portal::Admin => tabs::draw_admin_dashboard(f, areas.main, app),
    }
    draw_status_line(f, areas.status_line, app);
    draw_hint_line(f, areas.hint_line, app);

    if app.help_open {
        draw_help_popup(f, areas.size, app);
    }
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    let title = Line::from(vec![
        Span::styled(
            "Campus",
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::raw(app.college_name.clone()),
        Span::raw("  "),
        Span::styled("Portal", Style::default().fg(Color::DarkGray)),
        Span::raw(format!(" {}", app.session.portal.title())),
    ]);

    let left = Paragraph::new(title)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Left);

    let clock = Local::now().format("%a %d %b  %H:%M:%S").to_string();
    let right_line = Line::from(vec![
        Span::styled("Time ", Style::default().fg(Color::DarkGray)),
        Span::raw(clock),
    ]);
    let right = Paragraph::new(right_line)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Left);

    f.render_widget(left, chunks[0]);
    f.render_widget(right, chunks[1]);
}

fn draw_login(f: &mut Frame, area: Rect, app: &App) {
    let panel = centered_rect(72, 64, area);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(panel);

    draw_login_form(f, chunks[0], app);
    draw_demo_panel(f, chunks[1]);
}

fn field_label(name: &'static str, active: bool) -> Span<'static> {
    if active {
        Span::styled(
            name,
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(name, Style::default().fg(Color::DarkGray))
    }
}

fn draw_login_form(f: &mut Frame, area: Rect, app: &App) {
    let view = &app.login;
    let mut lines = vec![Line::from("")];

    // Role selector row
    let mut role_spans = vec![field_label(" Role      ", view.field == LoginField::Role)];
    for role in Role::ALL {
        if role == view.selected_role {
            role_spans.push(Span::styled(
                format!(" ▸{} ", role.title()),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            role_spans.push(Span::raw(format!("  {} ", role.title())));
        }
    }
    lines.push(Line::from(role_spans));
    lines.push(Line::from(Span::styled(
        format!("            {}", view.selected_role.description()),
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(""));

    // Username row
    let username_active = view.field == LoginField::Username;
    let mut username_spans = vec![
        field_label(" Username  ", username_active),
        Span::raw(view.username.clone()),
    ];
    if username_active && !view.submitting {
        username_spans.push(Span::styled("█", Style::default().fg(Color::DarkGray)));
    }
    lines.push(Line::from(username_spans));
    lines.push(Line::from(""));

    // Password row, masked unless revealed
    let password_active = view.field == LoginField::Password;
    let shown = if view.show_password {
        view.password.clone()
    } else {
        "•".repeat(view.password.chars().count())
    };
    let mut password_spans = vec![field_label(" Password  ", password_active), Span::raw(shown)];
    if password_active && !view.submitting {
        password_spans.push(Span::styled("█", Style::default().fg(Color::DarkGray)));
    }
    lines.push(Line::from(password_spans));
    lines.push(Line::from(""));

    if view.submitting {
        lines.push(Line::from(vec![
            Span::raw(" "),
            Span::styled(
                spinner_glyph(app.ticks),
                Style::default().fg(Color::LightCyan),
            ),
            Span::styled(
                format!(" Signing in as {}…", view.selected_role.title()),
                Style::default().fg(Color::LightCyan),
            ),
            Span::styled("  (Esc cancels)", Style::default().fg(Color::DarkGray)),
        ]));
    } else {
        lines.push(Line::from(vec![
            Span::raw(" "),
            Span::styled("[ Sign In ]", Style::default().fg(Color::Cyan)),
            Span::styled(
                "  Enter submits, Ctrl-r reveals password",
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title("SIGN IN");
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_demo_panel(f: &mut Frame, area: Rect) {
    let mut lines = vec![Line::from("")];
    for account in &DEMO_ACCOUNTS {
        lines.push(Line::from(Span::styled(
            format!(" {}", account.role.title()),
            Style::default().fg(Color::Cyan),
        )));
        lines.push(Line::from(vec![
            Span::styled("   user ", Style::default().fg(Color::DarkGray)),
            Span::raw(account.username),
        ]));
        lines.push(Line::from(vec![
            Span::styled("   pass ", Style::default().fg(Color::DarkGray)),
            Span::raw(account.password),
        ]));
        lines.push(Line::from(""));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title("DEMO ACCOUNTS");
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_landing(f: &mut Frame, area: Rect, app: &App) {
    let panel = centered_rect(86, 60, area);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(panel);

    for (idx, card) in CARDS.iter().enumerate() {
        let focused = app.landing.focus == card.role;
        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let title_style = if focused {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(format!(" {}", card.blurb), title_style)),
            Line::from(""),
        ];
        for feature in card.features {
            lines.push(Line::from(vec![
                Span::styled(" • ", Style::default().fg(Color::DarkGray)),
                Span::raw(feature),
            ]));
        }
        lines.push(Line::from(""));
        if focused {
            lines.push(Line::from(Span::styled(
                " Enter opens",
                Style::default().fg(Color::DarkGray),
            )));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!("{}:{}", idx + 1, card.title.to_uppercase()));
        f.render_widget(Paragraph::new(lines).block(block), chunks[idx]);
    }
}

fn draw_status_line(f: &mut Frame, area: Rect, app: &App) {
    let role = app
        .session
        .role
        .map(|role| role.title().to_string())
        .unwrap_or_else(|| "--".to_string());
    let mut spans = vec![
        Span::styled("Role ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}  ", role)),
        Span::styled("Screen ", Style::default().fg(Color::DarkGray)),
        Span::raw(app.session.portal.title().to_string()),
    ];
    if app.signing_in() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            spinner_glyph(app.ticks),
            Style::default().fg(Color::LightCyan),
        ));
        spans.push(Span::styled(
            " signing in",
            Style::default().fg(Color::LightCyan),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);

    f.render_widget(paragraph, area);
}

fn draw_hint_line(f: &mut Frame, area: Rect, app: &App) {
    let content = if let Some((text, level)) = app.status_text() {
        let color = match level {
            StatusLevel::Info => Color::LightGreen,
            StatusLevel::Warn => Color::LightYellow,
            StatusLevel::Error => Color::LightRed,
        };
        Line::from(vec![
            Span::styled("msg: ", Style::default().fg(Color::DarkGray)),
            Span::styled(text.to_string(), Style::default().fg(color)),
        ])
    } else {
        action_hints(app)
    };

    let paragraph = Paragraph::new(content).style(Style::default().fg(Color::White));
    f.render_widget(paragraph, area);
}

fn hint(key: &'static str, label: &'static str) -> [Span<'static>; 2] {
    [
        Span::styled(key, Style::default().fg(Color::LightCyan)),
        Span::raw(format!(" {}  ", label)),
    ]
}

fn action_hints(app: &App) -> Line<'static> {
    let mut spans = Vec::new();

    match app.session.portal {
        Portal::Login if app.login.submitting => {
            spans.extend(hint("Esc", "Cancel"));
        }
        Portal::Login => {
            spans.extend(hint("Tab", "Field"));
            spans.extend(hint("←/→", "Role"));
            spans.extend(hint("Enter", "Sign in"));
            spans.extend(hint("Ctrl-r", "Reveal"));
        }
        Portal::Landing => {
            spans.extend(hint("←/→", "Card"));
            spans.extend(hint("1-3", "Jump"));
            spans.extend(hint("Enter", "Open"));
            spans.extend(hint("Esc", "Back"));
            spans.extend(hint("s", "Sign out"));
            spans.extend(hint("?", "Help"));
        }
        Portal::Student | Portal::Professor | Portal::Admin => {
            spans.extend(hint("1-6", "Tab"));
            spans.extend(hint("[ ]", "Tab"));
            spans.extend(hint("j/k", "Row"));
            spans.extend(hint("y", "Copy"));
            spans.extend(hint("p", "Portals"));
            spans.extend(hint("Esc", "Sign out"));
            spans.extend(hint("?", "Help"));
        }
    }

    spans.push(Span::styled(
        "Ctrl-c",
        Style::default().fg(Color::LightCyan),
    ));
    spans.push(Span::raw(" Quit"));

    Line::from(spans)
}

fn draw_help_popup(f: &mut Frame, area: Rect, app: &App) {
    let popup_area = centered_rect(64, 64, area);
    f.render_widget(Clear, popup_area);

    let lines = vec![
        Line::from("Dashboards"),
        Line::from("  1-6        Jump to tab"),
        Line::from("  [ / ]      Prev/Next tab"),
        Line::from("  h / l      Prev/Next tab (vim)"),
        Line::from("  j / k      Move row selection"),
        Line::from("  y          Copy selected row"),
        Line::from("  Enter      Activate (preview only)"),
        Line::from(""),
        Line::from("Navigation"),
        Line::from("  p          Portal picker"),
        Line::from("  Esc        Sign out"),
        Line::from("  ?          Toggle help"),
        Line::from("  Ctrl-c     Quit"),
        Line::from(""),
        Line::from("Portal picker"),
        Line::from("  ←/→, 1-3   Choose a card"),
        Line::from("  Enter      Open the portal"),
        Line::from("  Esc        Back to your dashboard"),
        Line::from("  s          Sign out"),
        Line::from(""),
        Line::from(format!("Screen: {}", app.session.portal.title())),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().title("Help").borders(Borders::ALL))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
