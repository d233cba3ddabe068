use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use campus::app::{App, StatusLevel};
use campus::config;
use campus::core::{Module, Portal};
use campus::infrastructure::{AuthBridge, AuthCommand};
use campus::logging;
use campus::ui;

#[derive(Debug, Parser)]
#[command(
    name = "campus",
    version,
    about = "Campus: a role-based college portal TUI"
)]
struct Args {
    /// Config file path (overrides the default lookup chain)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Simulated sign-in delay in milliseconds (overrides the config file)
    #[arg(long)]
    login_delay_ms: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init();

    let mut config = config::load_with(args.config.as_deref());
    if let Some(ms) = args.login_delay_ms {
        config.login_delay_ms = ms;
    }

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create the auth bridge
    let auth = AuthBridge::new(config.login_delay())?;

    let mut app = App::new();
    app.college_name = config.college_name.clone();

    let res = run_app(&mut terminal, app, auth);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    auth: AuthBridge,
) -> Result<()> {
    let tick_rate = Duration::from_millis(200);
    let mut last_tick = Instant::now();

    loop {
        pump_background(&mut app, &auth);
        terminal.draw(|f| ui::draw(f, &app))?;
        if app.should_quit {
            return Ok(());
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => handle_key(&mut app, key),
                Event::Resize(_, _) => {}
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }

        pump_background(&mut app, &auth);
    }
}

/// Drain worker events, then forward the requests the screens queued.
fn pump_background(app: &mut App, auth: &AuthBridge) {
    for event in auth.poll_events() {
        app.apply_auth_event(event);
    }

    if let Some(request) = app.take_sign_in_request() {
        let cmd = AuthCommand::SignIn {
            attempt: request.attempt,
            role: request.role,
            username: request.username,
        };
        if let Err(err) = auth.send(cmd) {
            app.set_status(
                format!("Sign-in worker unavailable: {err}"),
                StatusLevel::Error,
            );
        }
    }

    if let Some(text) = app.take_copy_request() {
        copy_to_clipboard(app, text);
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    tracing::trace!(?key, portal = app.session.portal.title(), "key");

    if app.help_open {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Esc) {
            app.help_open = false;
        }
        return;
    }

    // '?' is a typeable character on the login form, so help is gated on
    // being signed in.
    if key.code == KeyCode::Char('?') && app.session.authenticated {
        app.help_open = true;
        return;
    }

    let session = app.session;
    let action = match session.portal {
        Portal::Login => app.login.handle_key(key, &session),
        Portal::Landing => app.landing.handle_key(key, &session),
        Portal::Student => app.student.handle_key(key, &session),
        Portal::Professor => app.professor.handle_key(key, &session),
        Portal::Admin => app.admin.handle_key(key, &session),
    };
    app.apply_action(action);
}

fn copy_to_clipboard(app: &mut App, text: String) {
    use arboard::Clipboard;

    match Clipboard::new() {
        Ok(mut clipboard) => {
            if clipboard.set_text(&text).is_ok() {
                let shown = if text.chars().count() > 40 {
                    let head: String = text.chars().take(40).collect();
                    format!("{}…", head)
                } else {
                    text
                };
                app.set_status(format!("Copied: {}", shown), StatusLevel::Info);
            } else {
                app.set_status("Failed to copy to clipboard", StatusLevel::Error);
            }
        }
        Err(_) => {
            app.set_status("Clipboard not available", StatusLevel::Error);
        }
    }
}
