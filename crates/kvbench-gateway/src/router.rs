//! Axum router wiring.
//!
//! Static operational routes are registered first; the trailing
//! `/:backend` capture serves whatever slugs the registry holds and lets
//! axum's default 404 handle the rest.

use axum::{routing::get, Router};

use crate::{app_state::AppState, handlers, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/reset", get(handlers::reset))
        .route("/healthz", get(ops::healthz))
        .route("/metrics", get(ops::metrics))
        .route("/:backend", get(handlers::increment))
        .with_state(state)
}
