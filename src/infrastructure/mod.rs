//! Infrastructure layer - process-boundary plumbing
//!
//! This layer contains:
//! - The worker-thread auth bridge that simulates the sign-in delay

pub mod auth;

pub use auth::{AuthBridge, AuthCommand, AuthEvent};
