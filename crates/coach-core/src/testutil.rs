//! Shared test fixtures: an in-memory config and a scripted backend.

use crate::config::{AgentDefinition, CoachConfig, TaskDefinition};
use crate::error::{CoachError, Result};
use crate::pipeline::{ExecutablePipeline, GenerationBackend};
use crate::report;
use std::cell::RefCell;
use std::collections::HashMap;

/// Backend that pops one canned result per `execute` call and records the
/// task keys of the pipelines it saw.
pub(crate) struct ScriptedBackend {
    results: RefCell<Vec<Result<String>>>,
    pub seen: RefCell<Vec<String>>,
}

impl ScriptedBackend {
    pub(crate) fn new(results: Vec<Result<String>>) -> Self {
        Self {
            results: RefCell::new(results),
            seen: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn failing(msg: &str) -> Self {
        Self::new(vec![Err(CoachError::Generation(msg.to_string()))])
    }
}

impl GenerationBackend for ScriptedBackend {
    fn execute(&self, pipeline: &ExecutablePipeline) -> Result<String> {
        self.seen.borrow_mut().push(pipeline.tasks[0].key.clone());
        let mut results = self.results.borrow_mut();
        if results.is_empty() {
            return Err(CoachError::Generation("script exhausted".to_string()));
        }
        results.remove(0)
    }
}

/// One agent, all four standard task groups.
pub(crate) fn coach_config() -> CoachConfig {
    let mut agents = HashMap::new();
    agents.insert(
        "coach".to_string(),
        AgentDefinition {
            role: "Coach".to_string(),
            goal: String::new(),
            backstory: String::new(),
            verbose: false,
        },
    );
    let mut tasks = HashMap::new();
    for key in [
        report::INTAKE,
        report::RISK_REGISTER,
        report::ACTION_PLAN,
        report::TEMPLATES,
    ] {
        tasks.insert(
            key.to_string(),
            TaskDefinition {
                description: format!("{key}: {{{{user_input}}}}"),
                expected_output: String::new(),
                agent: "coach".to_string(),
            },
        );
    }
    CoachConfig { agents, tasks }
}
