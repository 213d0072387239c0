//! Shared application state for the relay.

use std::sync::Arc;

use crate::config::RelayConfig;
use crate::dispatch::MessageRouter;
use crate::obs::RelayMetrics;
use crate::rooms::RoomRegistry;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: RelayConfig,
    registry: Arc<RoomRegistry>,
    dispatcher: Arc<MessageRouter>,
    metrics: Arc<RelayMetrics>,
}

impl AppState {
    pub fn new(cfg: RelayConfig) -> Self {
        let registry = Arc::new(RoomRegistry::new());
        let metrics = Arc::new(RelayMetrics::default());
        let dispatcher = Arc::new(MessageRouter::new(Arc::clone(&registry), Arc::clone(&metrics)));
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                registry,
                dispatcher,
                metrics,
            }),
        }
    }

    pub fn cfg(&self) -> &RelayConfig {
        &self.inner.cfg
    }

    pub fn registry(&self) -> &RoomRegistry {
        &self.inner.registry
    }

    pub fn dispatcher(&self) -> &MessageRouter {
        &self.inner.dispatcher
    }

    pub fn metrics(&self) -> &RelayMetrics {
        &self.inner.metrics
    }
}
