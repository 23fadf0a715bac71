//! Counter route handlers.
//!
//! - `GET /{backend}` : timed increment against one backend
//! - `GET /reset`     : zero every registered backend

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use tracing::{info, warn};

use kvbench_core::{reset_all, timed_increment, KvBenchError, StatusClass};

use crate::app_state::AppState;
use crate::render;

pub async fn increment(
    State(state): State<AppState>,
    Path(route): Path<String>,
) -> Response {
    let Some(backend) = state.registry().lookup(&route) else {
        return (StatusCode::NOT_FOUND, format!("unknown backend: {route}")).into_response();
    };

    match timed_increment(backend.as_ref()).await {
        Ok(outcome) => {
            let metrics = state.metrics();
            let name = outcome.backend.as_str();
            metrics.increments.inc(&[("backend", name)]);
            metrics.op_duration.observe(&[("backend", name), ("phase", "read")], outcome.sample.read);
            metrics.op_duration.observe(&[("backend", name), ("phase", "write")], outcome.sample.write);
            metrics.op_duration.observe(&[("backend", name), ("phase", "total")], outcome.sample.total);

            info!(
                backend = name,
                count = outcome.count,
                total_us = outcome.sample.total.as_micros() as u64,
                "increment served"
            );
            Html(render::increment_fragment(&outcome)).into_response()
        }
        Err(e) => {
            let name = backend.name();
            state.metrics().backend_errors.inc(&[("backend", name), ("op", e.phase.op())]);
            warn!(backend = name, op = e.phase.op(), %e, "increment failed");
            error_response(&e.error)
        }
    }
}

pub async fn reset(State(state): State<AppState>) -> Response {
    let backends = state.registry().all();
    let report = reset_all(&backends).await;
    state.metrics().resets.inc(&[]);

    if report.all_ok() {
        info!(backends = backends.len(), "reset counter");
        return Html(render::reset_fragment()).into_response();
    }

    let failed = report.failed().join(", ");
    warn!(%failed, "reset partially failed");
    (StatusCode::BAD_GATEWAY, format!("reset failed for: {failed}")).into_response()
}

/// No HTML fragment on error, just the status and the error text.
fn error_response(e: &KvBenchError) -> Response {
    let status = match e.status_class() {
        StatusClass::BadRequest => StatusCode::BAD_REQUEST,
        StatusClass::NotFound => StatusCode::NOT_FOUND,
        StatusClass::BadGateway => StatusCode::BAD_GATEWAY,
        StatusClass::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, e.to_string()).into_response()
}
