//! Module trait for the portal screens

use crossterm::event::KeyEvent;

use super::{Action, Session};

/// Trait for screens that handle input
pub trait Module {
    /// Handle keyboard input
    /// Returns an Action describing what should happen
    fn handle_key(&mut self, key: KeyEvent, session: &Session) -> Action;
}
