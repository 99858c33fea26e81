use crate::error::{CoachError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

pub const AGENTS_FILE: &str = "agents.yaml";
pub const TASKS_FILE: &str = "tasks.yaml";

// ---------------------------------------------------------------------------
// AgentDefinition / TaskDefinition
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentDefinition {
    pub role: String,
    #[serde(default)]
    pub goal: String,
    #[serde(default)]
    pub backstory: String,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
}

fn default_verbose() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskDefinition {
    /// Prompt template; `{{user_input}}` is substituted at assembly time.
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub expected_output: String,
    /// Key into the agent map. Validated eagerly on load.
    pub agent: String,
}

// ---------------------------------------------------------------------------
// CoachConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
struct AgentsFile {
    #[serde(default)]
    agents: HashMap<String, AgentDefinition>,
}

#[derive(Debug, Clone, Deserialize)]
struct TasksFile {
    #[serde(default)]
    tasks: HashMap<String, TaskDefinition>,
}

#[derive(Debug, Clone)]
pub struct CoachConfig {
    pub agents: HashMap<String, AgentDefinition>,
    pub tasks: HashMap<String, TaskDefinition>,
}

impl CoachConfig {
    /// Load `agents.yaml` and `tasks.yaml` from `dir` and validate all
    /// task→agent references. Fails fast before any backend call.
    pub fn load(dir: &Path) -> Result<Self> {
        let agents_path = dir.join(AGENTS_FILE);
        if !agents_path.exists() {
            return Err(CoachError::ConfigNotFound(agents_path));
        }
        let tasks_path = dir.join(TASKS_FILE);
        if !tasks_path.exists() {
            return Err(CoachError::ConfigNotFound(tasks_path));
        }

        let agents: AgentsFile = serde_yaml::from_str(&std::fs::read_to_string(&agents_path)?)?;
        let tasks: TasksFile = serde_yaml::from_str(&std::fs::read_to_string(&tasks_path)?)?;

        let config = Self {
            agents: agents.agents,
            tasks: tasks.tasks,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.agents.is_empty() {
            return Err(CoachError::NoAgents);
        }
        if self.tasks.is_empty() {
            return Err(CoachError::NoTasks);
        }
        for (key, task) in &self.tasks {
            if !self.agents.contains_key(&task.agent) {
                return Err(CoachError::UnknownAgent {
                    task: key.clone(),
                    agent: task.agent.clone(),
                });
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// ModelConfig
// ---------------------------------------------------------------------------

/// Language-model endpoint selection, read from the environment.
#[derive(Debug, Clone)]
pub struct ModelConfig {
    pub model: String,
    pub base_url: String,
}

impl ModelConfig {
    /// `OLLAMA_MODEL` / `OLLAMA_BASE_URL` with local defaults. The model
    /// name must match `ollama list` exactly.
    pub fn from_env() -> Self {
        let model =
            std::env::var("OLLAMA_MODEL").unwrap_or_else(|_| "llama3.2:3b".to_string());
        let base_url = std::env::var("OLLAMA_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:11434".to_string());
        Self {
            model,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &Path, agents: &str, tasks: &str) {
        std::fs::write(dir.join(AGENTS_FILE), agents).unwrap();
        std::fs::write(dir.join(TASKS_FILE), tasks).unwrap();
    }

    #[test]
    fn load_valid_config() {
        let dir = TempDir::new().unwrap();
        write_config(
            dir.path(),
            "agents:\n  coach:\n    role: Coach\n    goal: Guide\n",
            "tasks:\n  intake:\n    description: \"Ask about {{user_input}}\"\n    expected_output: questions\n    agent: coach\n",
        );

        let config = CoachConfig::load(dir.path()).unwrap();
        assert_eq!(config.agents.len(), 1);
        assert_eq!(config.tasks["intake"].agent, "coach");
        assert!(config.agents["coach"].verbose);
    }

    #[test]
    fn missing_files_reported() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            CoachConfig::load(dir.path()),
            Err(CoachError::ConfigNotFound(_))
        ));
    }

    #[test]
    fn empty_agents_rejected() {
        let dir = TempDir::new().unwrap();
        write_config(
            dir.path(),
            "agents: {}\n",
            "tasks:\n  intake:\n    agent: coach\n",
        );
        assert!(matches!(
            CoachConfig::load(dir.path()),
            Err(CoachError::NoAgents)
        ));
    }

    #[test]
    fn empty_tasks_rejected() {
        let dir = TempDir::new().unwrap();
        write_config(
            dir.path(),
            "agents:\n  coach:\n    role: Coach\n",
            "tasks: {}\n",
        );
        assert!(matches!(
            CoachConfig::load(dir.path()),
            Err(CoachError::NoTasks)
        ));
    }

    #[test]
    fn unresolved_agent_reference_rejected() {
        let dir = TempDir::new().unwrap();
        write_config(
            dir.path(),
            "agents:\n  coach:\n    role: Coach\n",
            "tasks:\n  intake:\n    agent: ghost\n",
        );
        match CoachConfig::load(dir.path()) {
            Err(CoachError::UnknownAgent { task, agent }) => {
                assert_eq!(task, "intake");
                assert_eq!(agent, "ghost");
            }
            other => panic!("expected UnknownAgent, got {other:?}"),
        }
    }

    #[test]
    fn model_config_defaults() {
        // Only meaningful when the env vars are unset, which is the normal
        // test environment.
        let mc = ModelConfig::from_env();
        assert!(!mc.model.is_empty());
        assert!(mc.base_url.starts_with("http"));
    }
}
