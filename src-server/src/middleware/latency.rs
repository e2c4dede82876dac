//! Simulated network latency.
//!
//! Every request waits for the configured duration before it reaches a
//! handler, so the UI's pending states stay visible during development.

use std::time::Duration;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

pub async fn artificial_latency(
    State(delay): State<Duration>,
    request: Request,
    next: Next,
) -> Response {
    if !delay.is_zero() {
        tracing::trace!(delay_ms = delay.as_millis() as u64, path = %request.uri().path(), "delaying request");
        tokio::time::sleep(delay).await;
    }
    next.run(request).await
}
