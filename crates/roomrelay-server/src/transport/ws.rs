//! WebSocket session handler.
//!
//! Responsibilities:
//! - Upgrade HTTP -> WS
//! - One task per session: bounded outbound queue + inbound frame loop
//! - Lifecycle: ping/pong + idle timeout so dead peers cannot pin room
//!   membership forever
//! - Cheap length check before decode, decode once, then dispatch
//! - Deterministic cleanup: `handle_close` runs exactly once when the loop
//!   exits, whatever made it exit

use axum::{
    extract::{ws::Message, ws::WebSocket, ws::WebSocketUpgrade, State},
    response::Response,
};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio::time::{Duration, Instant};

use crate::app_state::AppState;
use crate::rooms::{next_conn_id, Connection};
use crate::transport::codec::{self, Inbound};

pub async fn ws_upgrade(State(app): State<AppState>, ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(move |socket| run_session(app, socket))
}

async fn run_session(app: AppState, socket: WebSocket) {
    let conn_id = next_conn_id();
    app.metrics().ws_upgrades.inc();
    app.metrics().sessions_active.inc();
    tracing::debug!(conn = conn_id, "session opened");

    let srv = &app.cfg().server;
    let ping_every = Duration::from_millis(srv.ping_interval_ms);
    let idle_timeout = Duration::from_millis(srv.idle_timeout_ms);
    let max_frame_bytes = srv.max_frame_bytes;

    let (out_tx, mut out_rx) = mpsc::channel::<Message>(srv.outbound_queue);
    let conn = Connection::new(conn_id, out_tx.clone());

    let (mut ws_tx, mut ws_rx) = socket.split();

    let mut ping_tick = tokio::time::interval(ping_every);
    ping_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    let mut last_activity = Instant::now();

    loop {
        tokio::select! {
            // outbound writer
            maybe_out = out_rx.recv() => {
                match maybe_out {
                    Some(m) => {
                        if ws_tx.send(m).await.is_err() {
                            break;
                        }
                    }
                    None => break,
                }
            }

            // inbound reader
            incoming = ws_rx.next() => {
                let Some(incoming) = incoming else { break; };
                let Ok(msg) = incoming else { break; };

                last_activity = Instant::now();

                // length before decode
                if codec::is_oversized(&msg, max_frame_bytes) {
                    tracing::debug!(conn = conn_id, "oversized frame dropped");
                    app.metrics().frames_dropped.inc();
                    continue;
                }

                match codec::decode(msg) {
                    Ok(Inbound::Frame { msg, .. }) => {
                        app.dispatcher().handle_message(&conn, msg);
                    }
                    Ok(Inbound::Ping(payload)) => {
                        let _ = out_tx.send(Message::Pong(payload)).await;
                    }
                    Ok(Inbound::Pong) => {}
                    Ok(Inbound::Close) => break,
                    Err(e) => {
                        // recoverable protocol error: drop the frame, keep the
                        // connection open
                        tracing::debug!(conn = conn_id, "frame rejected: {e}");
                        app.metrics().decode_errors.inc();
                    }
                }
            }

            // ping
            _ = ping_tick.tick() => {
                let _ = out_tx.send(Message::Ping(Vec::new())).await;
            }

            // idle timeout
            _ = tokio::time::sleep(Duration::from_millis(250)) => {
                if last_activity.elapsed() >= idle_timeout {
                    tracing::debug!(conn = conn_id, "idle timeout");
                    break;
                }
            }
        }
    }

    app.dispatcher().handle_close(conn_id);
    app.metrics().sessions_active.dec();
    tracing::debug!(conn = conn_id, "session closed");
}
