//! Per-account rotation state machine.
//!
//! Pure and synchronous: the timer task feeds it ticks and fetch results,
//! it decides what to display and when to ask for a new code.

use crate::client::FetchedCode;
use crate::codegen::PERIOD_SECS;
use crate::error::GuardResult;

/// Seconds in one code period.
pub const PERIOD: u32 = PERIOD_SECS as u32;

/// Where a rotation timer is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Created, nothing requested yet.
    #[default]
    Idle,
    /// A fetch is outstanding.
    Loading,
    /// Showing a code and counting down.
    Displaying,
    /// Last fetch failed; retried at the next period boundary.
    Error,
}

/// What one account's code row shows.
#[derive(Debug, Clone, PartialEq)]
pub struct RotationState {
    pub phase: Phase,
    pub code: Option<String>,
    /// Seconds left in the current period, in `[0, 30]`.
    pub seconds_remaining: u32,
    pub last_error: Option<String>,
}

impl Default for RotationState {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            code: None,
            seconds_remaining: PERIOD,
            last_error: None,
        }
    }
}

impl RotationState {
    /// Remaining share of the period, derived from `seconds_remaining`.
    pub fn progress_percent(&self) -> f64 {
        progress_percent(self.seconds_remaining)
    }
}

/// `seconds / 30 * 100`.
pub fn progress_percent(seconds_remaining: u32) -> f64 {
    seconds_remaining as f64 / PERIOD as f64 * 100.0
}

/// Seconds left in the period containing `server_time`.
///
/// A timestamp exactly on a boundary starts a full period, so the result is
/// always in `1..=30`.
pub fn seconds_remaining_at(server_time: u64) -> u32 {
    (PERIOD_SECS - server_time % PERIOD_SECS) as u32
}

/// Token identifying one fetch. Only the newest one may be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// Result of a one-second tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Timer not started; nothing happened.
    Idle,
    /// Countdown moved by one second.
    Counted,
    /// Period ended; the caller must issue a fetch with this ticket.
    Boundary(FetchTicket),
}

/// Whether a fetch result was used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Applied,
    /// A newer fetch has been issued since; the result was dropped.
    Stale,
}

/// The rotation state machine.
#[derive(Debug, Default)]
pub struct RotationEngine {
    state: RotationState,
    generation: u64,
}

impl RotationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &RotationState {
        &self.state
    }

    /// Leave `Idle` and request the first code.
    pub fn start(&mut self) -> FetchTicket {
        self.begin_fetch()
    }

    /// One second passed.
    ///
    /// The countdown keeps running while a fetch is outstanding or after an
    /// error, so a failed or slow fetch is retried at the next boundary
    /// rather than on every tick.
    pub fn tick(&mut self) -> TickOutcome {
        if self.state.phase == Phase::Idle {
            return TickOutcome::Idle;
        }

        if self.state.seconds_remaining <= 1 {
            self.state.seconds_remaining = PERIOD;
            TickOutcome::Boundary(self.begin_fetch())
        } else {
            self.state.seconds_remaining -= 1;
            TickOutcome::Counted
        }
    }

    /// Apply the outcome of the fetch identified by `ticket`.
    pub fn apply(&mut self, ticket: FetchTicket, result: GuardResult<FetchedCode>) -> Applied {
        if ticket.0 != self.generation {
            return Applied::Stale;
        }

        match result {
            Ok(fetched) => {
                self.state.code = Some(fetched.code);
                self.state.seconds_remaining = seconds_remaining_at(fetched.server_time);
                self.state.last_error = None;
                self.state.phase = Phase::Displaying;
            }
            Err(err) => {
                // Never leave an old code on screen next to an error.
                self.state.code = None;
                self.state.last_error = Some(err.user_message());
                self.state.phase = Phase::Error;
            }
        }
        Applied::Applied
    }

    fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.state.phase = Phase::Loading;
        FetchTicket(self.generation)
    }
}
