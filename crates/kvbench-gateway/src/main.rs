//! kvbench gateway binary.
//!
//! Reads the YAML config (path from the first CLI argument, default
//! `kvbench.yaml`), builds the backend registry, and serves the counter
//! routes.

use std::net::SocketAddr;

use tracing_subscriber::{fmt, EnvFilter};

use kvbench_gateway::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg_path = std::env::args().nth(1).unwrap_or_else(|| "kvbench.yaml".to_string());
    let cfg = config::load_from_file(&cfg_path).expect("config load failed");
    let listen: SocketAddr = cfg
        .gateway
        .listen
        .parse()
        .expect("gateway.listen must be a valid SocketAddr");

    let state = app_state::AppState::new(cfg).await.expect("backend construction failed");
    let routes = state.registry().routes();
    let app = router::build_router(state);

    tracing::info!(%listen, backends = ?routes, "kvbench-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
