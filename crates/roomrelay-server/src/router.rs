//! Axum router wiring (HTTP -> WS upgrade).
//!
//! The WS upgrade is served at both `/` and `/ws`: the stock browser client
//! connects to the server root.

use axum::{extract::State, routing::get, Router};

use crate::{app_state::AppState, transport};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(transport::ws::ws_upgrade))
        .route("/ws", get(transport::ws::ws_upgrade))
        .route("/healthz", get(healthz))
        .route("/metrics", get(metrics))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn metrics(State(app): State<AppState>) -> String {
    app.metrics()
        .render(&[("roomrelay_rooms_open", app.registry().room_count() as u64)])
}
