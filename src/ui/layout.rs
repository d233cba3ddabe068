use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Debug, Clone, Copy)]
pub struct UiAreas {
    pub size: Rect,
    pub header: Rect,
    pub main: Rect,
    pub footer: Rect,
    pub status_line: Rect,
    pub hint_line: Rect,
}

pub fn areas(size: Rect) -> UiAreas {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(size);

    let footer_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(vertical[2]);

    UiAreas {
        size,
        header: vertical[0],
        main: vertical[1],
        footer: vertical[2],
        status_line: footer_chunks[0],
        hint_line: footer_chunks[1],
    }
}
