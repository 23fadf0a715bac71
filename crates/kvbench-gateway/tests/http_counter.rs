#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

//! Handler-level route tests over memory backends.

use axum::body::to_bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;

use kvbench_gateway::{app_state::AppState, config, handlers, ops};

async fn test_state() -> AppState {
    let cfg = config::load_from_str(
        r#"
version: 1
backends:
  - kind: memory
    route: mem-a
    name: "Memory A"
  - kind: memory
    route: mem-b
    name: "Memory B"
"#,
    )
    .unwrap();
    AppState::new(cfg).await.unwrap()
}

async fn body_string(resp: Response) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn hit(state: &AppState, route: &str) -> Response {
    handlers::increment(State(state.clone()), Path(route.to_string())).await
}

#[tokio::test]
async fn increment_route_serves_fragment() {
    let state = test_state().await;

    let resp = hit(&state, "mem-a").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let html = body_string(resp).await;
    assert!(html.starts_with("<h1>Counter from Memory A [0]</h1>"));
    assert!(html.contains("<dt>Read duration</dt>"));
    assert!(html.contains("<dt>Write duration</dt>"));
    assert!(html.contains("<dt>Total duration</dt>"));
}

#[tokio::test]
async fn unknown_route_is_404() {
    let state = test_state().await;

    let resp = hit(&state, "nope").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn counts_advance_independently_per_backend() {
    let state = test_state().await;

    let first = body_string(hit(&state, "mem-a").await).await;
    assert!(first.contains("Memory A [0]"));

    let second = body_string(hit(&state, "mem-a").await).await;
    assert!(second.contains("Memory A [1]"));

    // B is untouched by A's increments.
    let other = body_string(hit(&state, "mem-b").await).await;
    assert!(other.contains("Memory B [0]"));
}

#[tokio::test]
async fn reset_route_zeroes_every_backend() {
    let state = test_state().await;

    hit(&state, "mem-a").await;
    hit(&state, "mem-a").await;
    hit(&state, "mem-b").await;

    let resp = handlers::reset(State(state.clone())).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_string(resp).await, "<h1>Reset counter</h1>");

    let after = body_string(hit(&state, "mem-a").await).await;
    assert!(after.contains("Memory A [0]"));
    let after_b = body_string(hit(&state, "mem-b").await).await;
    assert!(after_b.contains("Memory B [0]"));
}

#[tokio::test]
async fn healthz_is_ok() {
    use axum::response::IntoResponse;

    let resp = ops::healthz().await.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_string(resp).await, "ok");
}

/// Backend that fails one of its ops, for the error-metric path.
struct BrokenBackend {
    name: &'static str,
    fail_get: bool,
}

#[async_trait::async_trait]
impl kvbench_core::CounterBackend for BrokenBackend {
    fn name(&self) -> &str {
        self.name
    }

    async fn get(&self, _key: &str) -> kvbench_core::Result<Option<u64>> {
        if self.fail_get {
            return Err(kvbench_core::KvBenchError::BackendUnavailable("get refused".into()));
        }
        Ok(None)
    }

    async fn set(&self, _key: &str, _value: u64) -> kvbench_core::Result<()> {
        Err(kvbench_core::KvBenchError::BackendUnavailable("set refused".into()))
    }
}

#[tokio::test]
async fn failed_ops_are_counted_by_display_name_and_op() {
    use std::sync::Arc;

    let state = test_state().await;
    state
        .registry()
        .register("broken-get", Arc::new(BrokenBackend { name: "Broken Get", fail_get: true }));
    state
        .registry()
        .register("broken-set", Arc::new(BrokenBackend { name: "Broken Set", fail_get: false }));

    assert_eq!(hit(&state, "broken-get").await.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(hit(&state, "broken-set").await.status(), StatusCode::BAD_GATEWAY);

    let body = body_string(ops::metrics(State(state.clone())).await).await;
    // Error series carry the failed op and the same display-name label the
    // success series use; route slugs never appear as label values.
    assert!(body.contains("kvbench_backend_errors_total{backend=\"Broken Get\",op=\"get\"} 1"));
    assert!(body.contains("kvbench_backend_errors_total{backend=\"Broken Set\",op=\"set\"} 1"));
    assert!(!body.contains("backend=\"broken-get\""));
    assert!(!body.contains("backend=\"broken-set\""));
}

#[tokio::test]
async fn metrics_report_increments() {
    let state = test_state().await;

    hit(&state, "mem-a").await;
    handlers::reset(State(state.clone())).await;

    let resp = ops::metrics(State(state.clone())).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_string(resp).await;
    assert!(body.contains("kvbench_increments_total{backend=\"Memory A\"} 1"));
    assert!(body.contains("kvbench_resets_total{} 1"));
    assert!(body.contains("# TYPE kvbench_op_duration_micros histogram"));
}
