//! Minimal metrics registry for the relay.
//!
//! No external crates; plain atomic counters/gauges rendered in Prometheus
//! text format. The relay has no per-tenant or per-room label dimensions, so
//! unlabeled series are enough.

use std::fmt::Write;
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};

#[derive(Default)]
pub struct Counter(AtomicU64);

impl Counter {
    /// Increment by 1.
    pub fn inc(&self) {
        self.add(1);
    }

    /// Increment by an arbitrary value.
    pub fn add(&self, v: u64) {
        self.0.fetch_add(v, Ordering::Relaxed);
    }

    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }

    fn render(&self, name: &str, out: &mut String) {
        let _ = writeln!(out, "# TYPE {name} counter");
        let _ = writeln!(out, "{name} {}", self.get());
    }
}

#[derive(Default)]
pub struct Gauge(AtomicI64);

impl Gauge {
    pub fn inc(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }

    pub fn dec(&self) {
        self.0.fetch_sub(1, Ordering::Relaxed);
    }

    pub fn get(&self) -> i64 {
        self.0.load(Ordering::Relaxed)
    }

    fn render(&self, name: &str, out: &mut String) {
        let _ = writeln!(out, "# TYPE {name} gauge");
        let _ = writeln!(out, "{name} {}", self.get());
    }
}

#[derive(Default)]
pub struct RelayMetrics {
    pub ws_upgrades: Counter,
    pub sessions_active: Gauge,
    pub decode_errors: Counter,
    pub frames_dropped: Counter,
    pub messages_relayed: Counter,
    pub send_failures: Counter,
}

impl RelayMetrics {
    /// Render all registered metrics plus any extra gauges provided by callers
    /// (e.g. the live open-room count, which the registry owns).
    pub fn render(&self, extra: &[(&str, u64)]) -> String {
        let mut out = String::new();
        self.ws_upgrades.render("roomrelay_ws_upgrades_total", &mut out);
        self.sessions_active.render("roomrelay_sessions_active", &mut out);
        self.decode_errors.render("roomrelay_decode_errors_total", &mut out);
        self.frames_dropped.render("roomrelay_frames_dropped_total", &mut out);
        self.messages_relayed.render("roomrelay_messages_relayed_total", &mut out);
        self.send_failures.render("roomrelay_send_failures_total", &mut out);
        for (k, v) in extra {
            let _ = writeln!(out, "# TYPE {k} gauge");
            let _ = writeln!(out, "{k} {v}");
        }
        out
    }
}
