use std::sync::Arc;

use crate::domain::MintRelayService;

/// Shared, read-only state handed to every request handler.
pub struct AppState {
    pub relay: Arc<MintRelayService>,
}

impl AppState {
    pub fn new(relay: MintRelayService) -> Self {
        Self {
            relay: Arc::new(relay),
        }
    }
}
