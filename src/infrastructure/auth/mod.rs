//! Auth infrastructure - Tokio-backed bridge for the simulated sign-in

mod bridge;
mod worker;

pub use bridge::{AuthBridge, AuthCommand, AuthEvent};
pub use worker::run_auth_worker;
