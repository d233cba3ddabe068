//! Campus: a role-based college portal for the terminal.
//!
//! The crate is split the way the screens are: `core` holds the session
//! state machine and the action type, `modules` holds per-screen state and
//! key handling, `ui` renders, and `infrastructure::auth` runs the
//! simulated credential check off the UI thread. `App` ties them together.

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;
pub mod logging;
pub mod modules;
pub mod ui;
