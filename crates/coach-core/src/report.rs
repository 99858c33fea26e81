use crate::config::CoachConfig;
use crate::error::Result;
use crate::pipeline::{self, GenerationBackend};
use serde::{Deserialize, Serialize};

/// Task-group keys, matching `tasks.yaml`.
pub const INTAKE: &str = "intake";
pub const RISK_REGISTER: &str = "risk_register";
pub const ACTION_PLAN: &str = "action_plan";
pub const TEMPLATES: &str = "templates";

/// The three generated report sections, produced atomically: a `Report`
/// only exists once every section succeeded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub risk_register: String,
    pub action_plan: String,
    pub templates: String,
}

/// Generate intake questions from a product description.
pub fn run_intake(
    config: &CoachConfig,
    backend: &dyn GenerationBackend,
    product_description: &str,
) -> Result<String> {
    let pipeline = pipeline::assemble(config, &[INTAKE], product_description)?;
    backend.execute(&pipeline)
}

/// Generate the full report: three independent single-task pipelines run
/// one after another, each over the same context. The first failure aborts
/// the whole call; no partial report is returned.
pub fn run_report(
    config: &CoachConfig,
    backend: &dyn GenerationBackend,
    final_context: &str,
) -> Result<Report> {
    let risk_register =
        backend.execute(&pipeline::assemble(config, &[RISK_REGISTER], final_context)?)?;
    let action_plan =
        backend.execute(&pipeline::assemble(config, &[ACTION_PLAN], final_context)?)?;
    let templates =
        backend.execute(&pipeline::assemble(config, &[TEMPLATES], final_context)?)?;

    Ok(Report {
        risk_register,
        action_plan,
        templates,
    })
}

/// Compose the context fed to every report task.
pub fn final_context(product_description: &str, intake_answers: &str) -> String {
    format!(
        "AI Product Description:\n{}\n\nUser Intake Answers:\n{}",
        product_description.trim(),
        intake_answers.trim()
    )
}

/// Augment a final context with a post-completion refinement request.
pub fn refinement_context(final_context: &str, request: &str) -> String {
    format!(
        "{final_context}\n\nUser refinement request:\n{}\n\nInstructions:\n\
         - Keep tone supportive and objective.\n\
         - Only change what the user asked to refine.\n\
         - If the user asks to switch domain/case, instruct them to type: new case\n\
         - Output updated sections clearly with headings.",
        request.trim()
    )
}
