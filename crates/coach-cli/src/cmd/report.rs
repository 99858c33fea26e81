use crate::output;
use coach_core::backend::OllamaBackend;
use coach_core::config::CoachConfig;
use coach_core::report;
use std::path::Path;

/// One-shot report: description plus numbered answers in, three sections out.
pub fn run(
    config_dir: &Path,
    description: &str,
    answers: &str,
    json: bool,
) -> anyhow::Result<()> {
    let config = CoachConfig::load(config_dir)?;
    let backend = OllamaBackend::from_env();

    let context = report::final_context(description, answers);
    let generated = report::run_report(&config, &backend, &context)?;

    if json {
        output::print_json(&generated)?;
    } else {
        println!("## Risk Register\n{}\n", generated.risk_register);
        println!("## Action Plan\n{}\n", generated.action_plan);
        println!("## Templates\n{}", generated.templates);
    }
    Ok(())
}
