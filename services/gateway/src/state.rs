use std::sync::Arc;

use crate::config::GatewayConfig;
use crate::upstream::UpstreamStore;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<GatewayConfig>,
    /// Handle to the upstream store; implements both pipeline boundaries
    /// (listing source and author lookup).
    pub store: Arc<UpstreamStore>,
}

impl AppState {
    pub fn new(config: GatewayConfig) -> Self {
        let store = Arc::new(UpstreamStore::new(&config));
        Self {
            config: Arc::new(config),
            store,
        }
    }
}
