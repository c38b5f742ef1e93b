//! Mock backend for testing.
//!
//! Keeps secrets in memory, counts every call, and can be scripted to fail
//! or to answer slowly so tests can reproduce out-of-order completions.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::models::AccountSecret;
use crate::traits::{BackendError, GuardBackend};

/// Where the mock's notion of "now" comes from.
#[derive(Debug, Clone, Copy)]
enum Clock {
    /// Always the same instant.
    Fixed(u64),
    /// `base` plus the tokio clock elapsed since `started`, so a paused
    /// runtime advances server time in lock-step with the timers.
    Following {
        base: u64,
        started: tokio::time::Instant,
    },
}

/// Per-operation call counters.
#[derive(Debug, Default)]
pub struct CallCounts {
    pub time: AtomicUsize,
    pub generate: AtomicUsize,
    pub list: AtomicUsize,
    pub add: AtomicUsize,
    pub delete: AtomicUsize,
}

/// Mock backend for testing.
///
/// # Example
///
/// ```ignore
/// use sdguard::adapters::mock::MockBackend;
///
/// let backend = MockBackend::new().with_time(95);
/// backend.fail_add("Invalid shared secret: bad padding");
/// ```
#[derive(Debug, Clone)]
pub struct MockBackend {
    secrets: Arc<Mutex<Vec<AccountSecret>>>,
    clock: Arc<Mutex<Clock>>,
    fail_time: Arc<Mutex<Option<String>>>,
    fail_generate: Arc<Mutex<Option<String>>>,
    fail_list: Arc<Mutex<Option<String>>>,
    fail_add: Arc<Mutex<Option<String>>>,
    fail_delete: Arc<Mutex<Option<String>>>,
    time_delays: Arc<Mutex<VecDeque<Duration>>>,
    generate_delays: Arc<Mutex<VecDeque<Duration>>>,
    calls: Arc<CallCounts>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            secrets: Arc::new(Mutex::new(Vec::new())),
            clock: Arc::new(Mutex::new(Clock::Fixed(0))),
            fail_time: Arc::new(Mutex::new(None)),
            fail_generate: Arc::new(Mutex::new(None)),
            fail_list: Arc::new(Mutex::new(None)),
            fail_add: Arc::new(Mutex::new(None)),
            fail_delete: Arc::new(Mutex::new(None)),
            time_delays: Arc::new(Mutex::new(VecDeque::new())),
            generate_delays: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(CallCounts::default()),
        }
    }

    /// Seed the stored list.
    pub fn with_secrets(self, secrets: Vec<AccountSecret>) -> Self {
        *self.secrets.lock().unwrap() = secrets;
        self
    }

    /// Pin server time to `unix_seconds`.
    pub fn with_time(self, unix_seconds: u64) -> Self {
        self.set_time(unix_seconds);
        self
    }

    /// Start server time at `unix_seconds` and let it follow the tokio clock.
    pub fn with_following_time(self, unix_seconds: u64) -> Self {
        *self.clock.lock().unwrap() = Clock::Following {
            base: unix_seconds,
            started: tokio::time::Instant::now(),
        };
        self
    }

    pub fn set_time(&self, unix_seconds: u64) {
        *self.clock.lock().unwrap() = Clock::Fixed(unix_seconds);
    }

    pub fn fail_time(&self, message: &str) {
        *self.fail_time.lock().unwrap() = Some(message.to_string());
    }

    pub fn fail_generate(&self, message: &str) {
        *self.fail_generate.lock().unwrap() = Some(message.to_string());
    }

    pub fn fail_list(&self, message: &str) {
        *self.fail_list.lock().unwrap() = Some(message.to_string());
    }

    pub fn fail_add(&self, message: &str) {
        *self.fail_add.lock().unwrap() = Some(message.to_string());
    }

    pub fn fail_delete(&self, message: &str) {
        *self.fail_delete.lock().unwrap() = Some(message.to_string());
    }

    /// Clear every scripted failure.
    pub fn recover(&self) {
        *self.fail_time.lock().unwrap() = None;
        *self.fail_generate.lock().unwrap() = None;
        *self.fail_list.lock().unwrap() = None;
        *self.fail_add.lock().unwrap() = None;
        *self.fail_delete.lock().unwrap() = None;
    }

    /// Delay the answers of the next `current_time` calls. The time is read
    /// before the delay, so it is already stale when it arrives.
    pub fn queue_time_delays(&self, delays: impl IntoIterator<Item = Duration>) {
        self.time_delays.lock().unwrap().extend(delays);
    }

    /// Delay the next `generate_code` calls, one entry per call.
    pub fn queue_generate_delays(&self, delays: impl IntoIterator<Item = Duration>) {
        self.generate_delays.lock().unwrap().extend(delays);
    }

    pub fn calls(&self) -> &CallCounts {
        &self.calls
    }

    /// Total number of backend round trips of any kind.
    pub fn total_calls(&self) -> usize {
        self.calls.time.load(Ordering::SeqCst)
            + self.calls.generate.load(Ordering::SeqCst)
            + self.calls.list.load(Ordering::SeqCst)
            + self.calls.add.load(Ordering::SeqCst)
            + self.calls.delete.load(Ordering::SeqCst)
    }

    pub fn generate_calls(&self) -> usize {
        self.calls.generate.load(Ordering::SeqCst)
    }

    pub fn stored(&self) -> Vec<AccountSecret> {
        self.secrets.lock().unwrap().clone()
    }

    fn now(&self) -> u64 {
        match *self.clock.lock().unwrap() {
            Clock::Fixed(t) => t,
            Clock::Following { base, started } => base + started.elapsed().as_secs(),
        }
    }

    fn scripted(slot: &Mutex<Option<String>>) -> Result<(), BackendError> {
        match slot.lock().unwrap().as_ref() {
            Some(message) => Err(BackendError::new(message.clone())),
            None => Ok(()),
        }
    }

    /// Deterministic stand-in code: changes once per 30-second step.
    pub fn code_for(secret: &str, time: u64) -> String {
        let tag = secret.chars().next().unwrap_or('X').to_ascii_uppercase();
        format!("{}{:04}", tag, (time / 30) % 10_000)
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GuardBackend for MockBackend {
    async fn current_time(&self) -> Result<u64, BackendError> {
        self.calls.time.fetch_add(1, Ordering::SeqCst);
        Self::scripted(&self.fail_time)?;
        let now = self.now();
        let delay = self.time_delays.lock().unwrap().pop_front();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        Ok(now)
    }

    async fn generate_code(&self, secret: &str, time: Option<u64>) -> Result<String, BackendError> {
        self.calls.generate.fetch_add(1, Ordering::SeqCst);
        // Capture "now" at request time, like a real round trip would.
        let time = time.unwrap_or_else(|| self.now());
        let delay = self.generate_delays.lock().unwrap().pop_front();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        Self::scripted(&self.fail_generate)?;
        Ok(Self::code_for(secret, time))
    }

    async fn list_secrets(&self) -> Result<Vec<AccountSecret>, BackendError> {
        self.calls.list.fetch_add(1, Ordering::SeqCst);
        Self::scripted(&self.fail_list)?;
        Ok(self.stored())
    }

    async fn add_secret(&self, name: &str, secret: &str) -> Result<Vec<AccountSecret>, BackendError> {
        self.calls.add.fetch_add(1, Ordering::SeqCst);
        Self::scripted(&self.fail_add)?;
        let mut secrets = self.secrets.lock().unwrap();
        secrets.push(AccountSecret::new(name, secret));
        Ok(secrets.clone())
    }

    async fn delete_secret(&self, index: usize) -> Result<Vec<AccountSecret>, BackendError> {
        self.calls.delete.fetch_add(1, Ordering::SeqCst);
        Self::scripted(&self.fail_delete)?;
        let mut secrets = self.secrets.lock().unwrap();
        if index >= secrets.len() {
            return Err(BackendError::new(format!("index {} out of range", index)));
        }
        secrets.remove(index);
        Ok(secrets.clone())
    }
}
