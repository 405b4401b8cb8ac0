//! Request logging middleware.

use axum::{extract::Request, middleware::Next, response::Response};

/// Logs method, path, status, and latency for every request.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let start = std::time::Instant::now();
    let response = next.run(request).await;

    tracing::info!(
        "{} {} -> {} in {:.2?}",
        method,
        uri,
        response.status(),
        start.elapsed()
    );

    response
}
