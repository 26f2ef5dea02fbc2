use crate::{
    clock::{Clock, MonotonicClock},
    service::ApiService,
};
use std::sync::Arc;

// ============================================================================
// APPLICATION STATE - Shared data across all requests
// ============================================================================
/// Everything here is read-only once the server starts, so cloning the
/// state per request only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<ApiService>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(api: ApiService, clock: Arc<dyn Clock>) -> Self {
        Self {
            api: Arc::new(api),
            clock,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ApiService::default(), Arc::new(MonotonicClock::default()))
    }
}
