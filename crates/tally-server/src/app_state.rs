//! Shared application state for the tally server.
//!
//! Owns the single counter; handlers reach it through axum `State`.

use std::sync::Arc;

use tally_core::Counter;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServerConfig,
    counter: Counter,
}

impl AppState {
    pub fn new(cfg: ServerConfig) -> Self {
        let counter = Counter::new(cfg.counter.decrement_policy);
        Self {
            inner: Arc::new(AppStateInner { cfg, counter }),
        }
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn counter(&self) -> &Counter {
        &self.inner.counter
    }
}
