//! Per-request metrics.

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};

use crate::config::ServiceRole;
use crate::observability::metrics;

/// Record status and latency for every request, labelled by matched route.
///
/// Unmatched paths share one label to keep cardinality bounded.
pub async fn track_requests(
    State(role): State<ServiceRole>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_owned());

    let response = next.run(request).await;

    tracing::debug!(
        service = role.name(),
        route = %route,
        status = response.status().as_u16(),
        "Request completed"
    );
    metrics::record_request(role.name(), &route, response.status().as_u16(), start);
    response
}
