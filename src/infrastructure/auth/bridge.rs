//! Auth bridge - connects the sync TUI thread with the async sign-in worker
//!
//! The simulated sign-in delay runs on a Tokio runtime owned by a worker
//! thread. Commands flow in and events flow out over std::sync::mpsc
//! channels; the TUI drains events non-blockingly once per loop iteration
//! and never waits on the worker.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use tokio::runtime::Runtime;

use crate::core::Role;
use crate::infrastructure::auth::worker::run_auth_worker;

/// Commands sent from the TUI to the auth worker
#[derive(Debug, Clone)]
pub enum AuthCommand {
    /// Start a sign-in attempt. The attempt id ties the eventual completion
    /// back to the request; the caller drops completions whose id no longer
    /// matches its current attempt.
    SignIn {
        attempt: u64,
        role: Role,
        username: String,
    },
    /// Shutdown the worker
    Shutdown,
}

/// Events sent from the auth worker to the TUI
#[derive(Debug, Clone)]
pub enum AuthEvent {
    /// A sign-in attempt completed
    SignInComplete {
        attempt: u64,
        role: Role,
        username: String,
    },
    /// Worker failure
    Error { message: String },
}

/// Bridge between the sync TUI thread and the async sign-in worker
pub struct AuthBridge {
    cmd_tx: Sender<AuthCommand>,
    evt_rx: Receiver<AuthEvent>,
}

impl AuthBridge {
    /// Spawn the worker thread with its own Tokio runtime. `delay` is how
    /// long each sign-in attempt takes to complete.
    pub fn new(delay: Duration) -> anyhow::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel::<AuthCommand>();
        let (evt_tx, evt_rx) = mpsc::channel::<AuthEvent>();

        thread::spawn(move || {
            let rt = match Runtime::new() {
                Ok(rt) => rt,
                Err(err) => {
                    let _ = evt_tx.send(AuthEvent::Error {
                        message: format!("Failed to start runtime: {err:#}"),
                    });
                    return;
                }
            };
            rt.block_on(async {
                if let Err(err) = run_auth_worker(delay, cmd_rx, evt_tx.clone()).await {
                    let _ = evt_tx.send(AuthEvent::Error {
                        message: format!("Worker exited: {err:#}"),
                    });
                }
            });
        });

        Ok(Self { cmd_tx, evt_rx })
    }

    /// Send a command to the worker
    pub fn send(&self, cmd: AuthCommand) -> anyhow::Result<()> {
        self.cmd_tx
            .send(cmd)
            .map_err(|_| anyhow::anyhow!("Auth worker channel closed"))
    }

    /// Poll for events (non-blocking)
    pub fn poll_events(&self) -> Vec<AuthEvent> {
        let mut events = Vec::new();
        while let Ok(evt) = self.evt_rx.try_recv() {
            events.push(evt);
        }
        events
    }
}

impl Drop for AuthBridge {
    fn drop(&mut self) {
        let _ = self.cmd_tx.send(AuthCommand::Shutdown);
    }
}
