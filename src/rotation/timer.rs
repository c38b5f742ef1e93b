//! Spawned per-account rotation timer.
//!
//! Each timer owns one tokio task that drives a [`RotationEngine`] with a
//! one-second interval and publishes every state change on a watch channel.
//! Fetches run in a [`JoinSet`] owned by the task, so aborting the task
//! cancels any outstanding request with it.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::{JoinHandle, JoinSet};
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, warn};

use super::engine::{Applied, FetchTicket, RotationEngine, RotationState, TickOutcome};
use crate::client::{CodeClient, FetchedCode};
use crate::error::GuardResult;

type FetchOutcome = (FetchTicket, GuardResult<FetchedCode>);

/// Handle to a running rotation timer. Dropping it stops the timer.
#[derive(Debug)]
pub struct RotationTimer {
    state_rx: watch::Receiver<RotationState>,
    task: JoinHandle<()>,
}

impl RotationTimer {
    /// Spawn a timer for `secret` and immediately request its first code.
    pub fn spawn(client: CodeClient, secret: impl Into<String>, tick: Duration) -> Self {
        let (state_tx, state_rx) = watch::channel(RotationState::default());
        let task = tokio::spawn(run(client, secret.into(), tick, state_tx));
        Self { state_rx, task }
    }

    /// Latest published state.
    pub fn snapshot(&self) -> RotationState {
        self.state_rx.borrow().clone()
    }

    /// Whether a new state was published since the last [`Self::mark_seen`].
    pub fn has_changed(&self) -> bool {
        self.state_rx.has_changed().unwrap_or(false)
    }

    /// Latest state, marking it as seen.
    pub fn mark_seen(&mut self) -> RotationState {
        self.state_rx.borrow_and_update().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<RotationState> {
        self.state_rx.clone()
    }
}

impl Drop for RotationTimer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn run(
    client: CodeClient,
    secret: String,
    tick: Duration,
    state_tx: watch::Sender<RotationState>,
) {
    let mut engine = RotationEngine::new();
    let mut fetches: JoinSet<FetchOutcome> = JoinSet::new();

    let ticket = engine.start();
    spawn_fetch(&mut fetches, &client, &secret, ticket);
    if state_tx.send(engine.state().clone()).is_err() {
        return;
    }

    let mut interval = time::interval_at(Instant::now() + tick, tick);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                if let TickOutcome::Boundary(ticket) = engine.tick() {
                    debug!(generation = ticket.generation(), "Period boundary, refreshing code");
                    spawn_fetch(&mut fetches, &client, &secret, ticket);
                }
            }
            Some(joined) = fetches.join_next(), if !fetches.is_empty() => {
                match joined {
                    Ok((ticket, result)) => {
                        if let Err(ref e) = result {
                            warn!(
                                code = e.error_code(),
                                retryable = e.is_retryable(),
                                "Code fetch failed: {}",
                                e
                            );
                        }
                        if engine.apply(ticket, result) == Applied::Stale {
                            debug!(generation = ticket.generation(), "Discarded stale code response");
                            continue;
                        }
                    }
                    Err(e) => {
                        warn!("Code fetch task ended abnormally: {}", e);
                        continue;
                    }
                }
            }
        }

        // Every receiver is gone: nobody is displaying this account.
        if state_tx.send(engine.state().clone()).is_err() {
            debug!("Rotation timer has no observers, stopping");
            break;
        }
    }
}

fn spawn_fetch(
    fetches: &mut JoinSet<FetchOutcome>,
    client: &CodeClient,
    secret: &str,
    ticket: FetchTicket,
) {
    let client = client.clone();
    let secret = secret.to_string();
    fetches.spawn(async move {
        let result = client.fetch(&secret).await;
        (ticket, result)
    });
}
