//! roomrelay server binary.
//!
//! Ephemeral room relay: WebSocket clients join numbered rooms, chat frames
//! are fanned out to the rest of the room, and a room is deleted the moment
//! its last member leaves. Nothing survives a restart by design.

use std::net::SocketAddr;
use tracing_subscriber::{fmt, EnvFilter};

use roomrelay_server::{app_state, config, router};

const CONFIG_PATH: &str = "roomrelay.yaml";

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = config::load_or_default(CONFIG_PATH).expect("config load failed");
    let listen: SocketAddr = cfg
        .server
        .listen
        .parse()
        .expect("server.listen must be a valid SocketAddr");

    let state = app_state::AppState::new(cfg);
    let app = router::build_router(state);

    tracing::info!(%listen, "roomrelay starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server failed");
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutdown signal received");
}
