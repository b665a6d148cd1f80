//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::graph::GraphClient;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; provides access to configuration and the
/// Graph client.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    graph: GraphClient,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let graph = GraphClient::new(config.graph.clone());

        Self {
            inner: Arc::new(AppStateInner { config, graph }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the Graph client.
    #[must_use]
    pub fn graph(&self) -> &GraphClient {
        &self.inner.graph
    }
}
