// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::gateway::ChatGateway;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Arc<Config>,
    pub gateway: ChatGateway,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let gateway = ChatGateway::from_config(&config);
        Self { config: Arc::new(config), gateway }
    }

    /// State with an explicit gateway, e.g. one backed by a stub provider.
    pub fn with_gateway(config: Config, gateway: ChatGateway) -> Self {
        Self { config: Arc::new(config), gateway }
    }
}
