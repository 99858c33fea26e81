use coach_core::config::CoachConfig;
use coach_core::pipeline::GenerationBackend;
use std::sync::Arc;

/// Shared application state passed to all route handlers.
///
/// The façade itself is stateless per request: callers carry the product
/// description and intake answers across calls, so nothing here mutates.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<CoachConfig>,
    pub backend: Arc<dyn GenerationBackend + Send + Sync>,
}

impl AppState {
    pub fn new(
        config: CoachConfig,
        backend: Arc<dyn GenerationBackend + Send + Sync>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            backend,
        }
    }
}
