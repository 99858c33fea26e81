use anyhow::Context;
use coach_core::config::{AGENTS_FILE, TASKS_FILE};
use coach_core::{io, scaffold};
use std::path::Path;

/// Scaffold `agents.yaml` and `tasks.yaml` in the config directory.
/// Existing files are left untouched, so edits survive re-running init.
pub fn run(config_dir: &Path) -> anyhow::Result<()> {
    io::ensure_dir(config_dir)
        .with_context(|| format!("failed to create {}", config_dir.display()))?;

    for (name, content) in [
        (AGENTS_FILE, scaffold::DEFAULT_AGENTS_YAML),
        (TASKS_FILE, scaffold::DEFAULT_TASKS_YAML),
    ] {
        let path = config_dir.join(name);
        if io::write_if_missing(&path, content.as_bytes())? {
            println!("  created: {}", path.display());
        } else {
            println!("  exists:  {}", path.display());
        }
    }

    Ok(())
}
