use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoachError {
    #[error("config file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("agents.yaml did not load any agents")]
    NoAgents,

    #[error("tasks.yaml did not load any tasks")]
    NoTasks,

    #[error("task not found: {0}")]
    TaskNotFound(String),

    #[error("task '{task}' references agent '{agent}', which is not defined")]
    UnknownAgent { task: String, agent: String },

    #[error("generation failed: {0}")]
    Generation(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, CoachError>;
