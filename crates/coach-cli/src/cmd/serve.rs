use coach_core::backend::OllamaBackend;
use coach_core::config::CoachConfig;
use coach_server::state::AppState;
use std::path::Path;
use std::sync::Arc;

/// Start the HTTP API over the same pipeline the chat uses.
pub fn run(config_dir: &Path, port: u16) -> anyhow::Result<()> {
    // Fail fast on definition problems before binding the port.
    let config = CoachConfig::load(config_dir)?;
    let state = AppState::new(config, Arc::new(OllamaBackend::from_env()));

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(coach_server::serve(state, port))
}
