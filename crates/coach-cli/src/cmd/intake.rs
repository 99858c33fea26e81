use crate::output;
use coach_core::backend::OllamaBackend;
use coach_core::config::CoachConfig;
use coach_core::report;
use std::path::Path;

/// One-shot intake: product description in, numbered questions out.
pub fn run(config_dir: &Path, description: &str, json: bool) -> anyhow::Result<()> {
    let config = CoachConfig::load(config_dir)?;
    let backend = OllamaBackend::from_env();

    let intake = report::run_intake(&config, &backend, description)?;

    if json {
        output::print_json(&serde_json::json!({ "intake": intake }))?;
    } else {
        println!("{intake}");
    }
    Ok(())
}
