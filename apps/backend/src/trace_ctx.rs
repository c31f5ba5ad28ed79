//! Task-local trace id for the request being served.
//!
//! `RequestTrace` opens the scope; anything running inside the request
//! future (error rendering, extractors) can read the id without threading
//! the request through.

use std::future::Future;

use tokio::task_local;

task_local! {
    static TRACE_ID: String;
}

const UNKNOWN: &str = "unknown";

/// Trace id of the current request, or `"unknown"` outside a request scope.
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(Clone::clone)
        .unwrap_or_else(|_| UNKNOWN.to_string())
}

/// Run `future` with `trace_id` as the current trace id.
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: Future<Output = R>,
{
    TRACE_ID.scope(trace_id, future).await
}

/// Synchronous counterpart of [`with_trace_id`].
pub fn sync_with_trace_id<F, R>(trace_id: String, f: F) -> R
where
    F: FnOnce() -> R,
{
    TRACE_ID.sync_scope(trace_id, f)
}
