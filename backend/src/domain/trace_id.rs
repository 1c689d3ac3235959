//! Correlation identifier carried by every request.
//!
//! The [`crate::middleware::Trace`] middleware scopes a fresh [`TraceId`] in a
//! tokio task-local for each request. Domain errors read it on construction,
//! so error bodies and the `trace-id` header always agree. Task-locals do not
//! follow work onto other threads; [`TraceId::spawn_blocking`] re-enters the
//! scope for CPU-bound work such as password hashing.

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use tokio::task::{JoinError, spawn_blocking};
use tokio::task_local;
use uuid::Uuid;

task_local! {
    pub(crate) static TRACE_ID: TraceId;
}

/// Response header carrying the trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";

/// Per-request correlation identifier.
///
/// ```
/// use eatinery::TraceId;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let id: TraceId = "3fa85f64-5717-4562-b3fc-2c963f66afa6".parse().expect("uuid");
/// let seen = TraceId::scope(id, async { TraceId::current() }).await;
/// assert_eq!(seen, Some(id));
/// # });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceId(pub(crate) Uuid);

impl TraceId {
    #[must_use]
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// The identifier of the request being served, if any.
    #[must_use]
    pub fn current() -> Option<Self> {
        TRACE_ID.try_with(|id| *id).ok()
    }

    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Run `fut` with `trace_id` in scope.
    pub async fn scope<Fut>(trace_id: TraceId, fut: Fut) -> Fut::Output
    where
        Fut: Future,
    {
        TRACE_ID.scope(trace_id, fut).await
    }

    /// Run `work` on the blocking pool, keeping the caller's trace id visible
    /// to logs and errors raised inside it.
    pub async fn spawn_blocking<F, R>(work: F) -> Result<R, JoinError>
    where
        F: FnOnce() -> R + Send + 'static,
        R: Send + 'static,
    {
        let current = Self::current();
        spawn_blocking(move || match current {
            Some(id) => TRACE_ID.sync_scope(id, work),
            None => work(),
        })
        .await
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for TraceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}
