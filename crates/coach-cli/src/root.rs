use coach_core::config::AGENTS_FILE;
use std::path::{Path, PathBuf};

/// Resolve the directory holding `agents.yaml` and `tasks.yaml`.
///
/// Priority:
/// 1. `--config` flag / `COACH_CONFIG` env var (passed in as `explicit`)
/// 2. Walk upward from `cwd` looking for `config/agents.yaml`
/// 3. Fall back to `cwd/config`
pub fn resolve_config_dir(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let mut dir = cwd.clone();
    loop {
        let candidate = dir.join("config");
        if candidate.join(AGENTS_FILE).is_file() {
            return candidate;
        }
        match dir.parent() {
            Some(p) => dir = p.to_path_buf(),
            None => break,
        }
    }

    cwd.join("config")
}
