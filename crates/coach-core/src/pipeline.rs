use crate::config::{AgentDefinition, CoachConfig};
use crate::error::{CoachError, Result};
use crate::prompt;

// ---------------------------------------------------------------------------
// ExecutablePipeline
// ---------------------------------------------------------------------------

/// One task bound to its agent, with the description template already
/// rendered against the user input.
#[derive(Debug, Clone)]
pub struct BoundTask {
    pub key: String,
    pub description: String,
    pub expected_output: String,
    pub agent: AgentDefinition,
}

/// An ordered, validated group of tasks ready for the generation backend.
///
/// Tasks run strictly in sequence; a later task may build on the output of
/// the one before it within the same run.
#[derive(Debug, Clone)]
pub struct ExecutablePipeline {
    pub tasks: Vec<BoundTask>,
}

/// Resolve `task_keys` against the loaded definitions and bind each task to
/// its agent, rendering the description template against `input`.
///
/// All referential checks happen here, before any backend call.
pub fn assemble(config: &CoachConfig, task_keys: &[&str], input: &str) -> Result<ExecutablePipeline> {
    config.validate()?;

    let mut tasks = Vec::with_capacity(task_keys.len());
    for key in task_keys {
        let def = config
            .tasks
            .get(*key)
            .ok_or_else(|| CoachError::TaskNotFound(key.to_string()))?;
        let agent = config
            .agents
            .get(&def.agent)
            .ok_or_else(|| CoachError::UnknownAgent {
                task: key.to_string(),
                agent: def.agent.clone(),
            })?;
        tasks.push(BoundTask {
            key: key.to_string(),
            description: prompt::render(&def.description, input),
            expected_output: def.expected_output.clone(),
            agent: agent.clone(),
        });
    }

    Ok(ExecutablePipeline { tasks })
}

// ---------------------------------------------------------------------------
// GenerationBackend
// ---------------------------------------------------------------------------

/// Seam to the external language-model runner.
///
/// Implementations execute the pipeline's tasks in order and return the
/// final task's textual output. No retries or timeouts at this layer;
/// whatever the backend does on failure surfaces as `CoachError::Generation`.
pub trait GenerationBackend {
    fn execute(&self, pipeline: &ExecutablePipeline) -> Result<String>;
}
