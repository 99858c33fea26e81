use crate::config::ModelConfig;
use crate::error::{CoachError, Result};
use crate::pipeline::{BoundTask, ExecutablePipeline, GenerationBackend};
use ollama_agent::OllamaClient;

/// Runs pipelines against a local Ollama model, one chat call per task.
///
/// Each task's agent definition becomes the system prompt; the prior task's
/// output is threaded into the next task's prompt so a grouped pipeline
/// behaves sequentially. The final task's text is the pipeline result.
pub struct OllamaBackend {
    client: OllamaClient,
}

impl OllamaBackend {
    pub fn new(client: OllamaClient) -> Self {
        Self { client }
    }

    pub fn from_env() -> Self {
        let mc = ModelConfig::from_env();
        Self::new(OllamaClient::new(mc.base_url, mc.model))
    }
}

impl GenerationBackend for OllamaBackend {
    fn execute(&self, pipeline: &ExecutablePipeline) -> Result<String> {
        let mut previous: Option<String> = None;
        for task in &pipeline.tasks {
            let system = system_prompt(task);
            let prompt = task_prompt(task, previous.as_deref());
            if task.agent.verbose {
                tracing::info!(task = %task.key, agent = %task.agent.role, "running task");
            }
            let output = self
                .client
                .chat(Some(&system), &prompt)
                .map_err(|e| CoachError::Generation(e.to_string()))?;
            previous = Some(output);
        }
        previous.ok_or_else(|| CoachError::Generation("empty pipeline".to_string()))
    }
}

fn system_prompt(task: &BoundTask) -> String {
    let mut parts = vec![format!("You are {}.", task.agent.role)];
    if !task.agent.goal.is_empty() {
        parts.push(format!("Your goal: {}", task.agent.goal));
    }
    if !task.agent.backstory.is_empty() {
        parts.push(task.agent.backstory.clone());
    }
    parts.join("\n")
}

fn task_prompt(task: &BoundTask, previous: Option<&str>) -> String {
    let mut prompt = task.description.clone();
    if let Some(previous) = previous {
        prompt = format!("{prompt}\n\nOutput of the previous task:\n{previous}");
    }
    if !task.expected_output.is_empty() {
        prompt = format!("{prompt}\n\nExpected output: {}", task.expected_output);
    }
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AgentDefinition;

    fn task(description: &str) -> BoundTask {
        BoundTask {
            key: "intake".to_string(),
            description: description.to_string(),
            expected_output: "A numbered list".to_string(),
            agent: AgentDefinition {
                role: "Intake Coach".to_string(),
                goal: "Understand context".to_string(),
                backstory: "Years of AI governance reviews.".to_string(),
                verbose: false,
            },
        }
    }

    #[test]
    fn system_prompt_includes_role_goal_backstory() {
        let sp = system_prompt(&task("d"));
        assert!(sp.starts_with("You are Intake Coach."));
        assert!(sp.contains("Your goal: Understand context"));
        assert!(sp.contains("governance reviews"));
    }

    #[test]
    fn task_prompt_threads_previous_output() {
        let p = task_prompt(&task("Review the product."), Some("earlier findings"));
        assert!(p.starts_with("Review the product."));
        assert!(p.contains("Output of the previous task:\nearlier findings"));
        assert!(p.ends_with("Expected output: A numbered list"));
    }

    #[test]
    fn task_prompt_without_previous() {
        let p = task_prompt(&task("Review."), None);
        assert!(!p.contains("previous task"));
    }
}
