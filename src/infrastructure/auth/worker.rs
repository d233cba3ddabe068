//! Async worker - owns the simulated sign-in delay

use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::time::Duration;

use anyhow::Result;
use tokio::time::interval;
use tracing::info;

use crate::infrastructure::auth::bridge::{AuthCommand, AuthEvent};

/// Run the auth worker loop. Each sign-in attempt runs on its own task so a
/// later attempt never waits behind an earlier one.
pub async fn run_auth_worker(
    delay: Duration,
    cmd_rx: Receiver<AuthCommand>,
    evt_tx: Sender<AuthEvent>,
) -> Result<()> {
    // The command channel is std::sync::mpsc, so poll it on an interval
    // instead of blocking the runtime on recv().
    let mut poll = interval(Duration::from_millis(25));

    loop {
        poll.tick().await;

        loop {
            match cmd_rx.try_recv() {
                Ok(AuthCommand::Shutdown) => return Ok(()),
                Ok(AuthCommand::SignIn {
                    attempt,
                    role,
                    username,
                }) => {
                    info!(attempt, role = role.title(), "sign-in attempt started");
                    let evt_tx = evt_tx.clone();
                    tokio::spawn(async move {
                        verify_sign_in(delay).await;
                        let _ = evt_tx.send(AuthEvent::SignInComplete {
                            attempt,
                            role,
                            username,
                        });
                    });
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => return Ok(()),
            }
        }
    }
}

/// Stand-in for a real credential check. The sleep models the round trip to
/// an identity service; every request that reaches the worker has already
/// passed the form's presence validation and is accepted for the requested
/// role. This is where a real verification call would go.
async fn verify_sign_in(delay: Duration) {
    tokio::time::sleep(delay).await;
}
