//! Code generation client.
//!
//! Thin async wrapper over [`GuardBackend`] that turns opaque backend
//! failures into [`GuardError::TimeSource`] / [`GuardError::CodeGeneration`].
//! No caching: every call is a fresh round trip.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::error::{GuardError, GuardResult};
use crate::traits::GuardBackend;

/// A code fetched together with the server time it is anchored to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedCode {
    pub server_time: u64,
    pub code: String,
}

/// Cheap-to-clone handle used by every rotation timer.
#[derive(Clone)]
pub struct CodeClient {
    backend: Arc<dyn GuardBackend>,
    in_flight: Arc<AtomicUsize>,
}

/// Decrements the in-flight counter when a request finishes or is dropped.
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn start(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl CodeClient {
    pub fn new(backend: Arc<dyn GuardBackend>) -> Self {
        Self {
            backend,
            in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of requests currently awaiting a backend response.
    pub fn pending_requests(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Current backend time in unix seconds.
    pub async fn fetch_server_time(&self) -> GuardResult<u64> {
        let _guard = InFlight::start(&self.in_flight);
        self.backend
            .current_time()
            .await
            .map_err(|e| GuardError::TimeSource(e.to_string()))
    }

    /// Code for `secret` at the backend's current time.
    pub async fn generate_code(&self, secret: &str) -> GuardResult<String> {
        self.request_code(secret, None).await
    }

    /// Code for `secret` at an explicit time.
    pub async fn generate_code_at(&self, secret: &str, time: u64) -> GuardResult<String> {
        self.request_code(secret, Some(time)).await
    }

    /// Time first, then the code for that same time.
    pub async fn fetch(&self, secret: &str) -> GuardResult<FetchedCode> {
        let server_time = self.fetch_server_time().await?;
        let code = self.generate_code_at(secret, server_time).await?;
        Ok(FetchedCode { server_time, code })
    }

    async fn request_code(&self, secret: &str, time: Option<u64>) -> GuardResult<String> {
        let _guard = InFlight::start(&self.in_flight);
        self.backend
            .generate_code(secret, time)
            .await
            .map_err(|e| GuardError::CodeGeneration(e.to_string()))
    }
}
