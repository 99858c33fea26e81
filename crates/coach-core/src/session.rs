use crate::commands;
use crate::config::CoachConfig;
use crate::pipeline::GenerationBackend;
use crate::report::{self, Report};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Case
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    AwaitDescription,
    AwaitAnswers,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    InProgress,
    Completed,
}

/// One end-to-end assessment: description → intake → answers → report.
///
/// The stage only advances forward; the only way back is a reset, which
/// replaces the whole value. Fields are committed exclusively on backend
/// success so a failed call leaves the case exactly as it was.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Case {
    pub stage: Stage,
    pub status: CaseStatus,
    pub product_description: String,
    pub intake_questions: String,
    pub intake_answers: String,
    pub report: Option<Report>,
}

impl Case {
    pub fn new() -> Self {
        Self {
            stage: Stage::AwaitDescription,
            status: CaseStatus::InProgress,
            product_description: String::new(),
            intake_questions: String::new(),
            intake_answers: String::new(),
            report: None,
        }
    }
}

impl Default for Case {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Conversation log
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    pub at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// Outcome of one turn, named after the transition that was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Reset command: case reinitialized, greeting appended.
    Reset,
    /// Intake questions generated; now awaiting numbered answers.
    IntakeReady,
    /// Answers did not look numbered; user asked to retry.
    NeedNumberedAnswers,
    /// Full report generated; case completed.
    ReportReady,
    /// Post-completion refinement: report regenerated wholesale.
    Refined,
    /// Backend call failed; case unchanged, error shown to the user.
    Failed,
}

const DESCRIBE_GUIDE: &str = "Describe your AI product in 4-8 lines:\n\
- domain (HR/healthcare/finance/etc.)\n\
- who uses it and who is impacted\n\
- what decision it supports\n\
- what data it uses\n\
- where it's deployed\n\
- human oversight / fallback";

/// One chat session: the active case plus the append-only message log.
#[derive(Debug)]
pub struct Session {
    pub case: Case,
    pub messages: Vec<ChatMessage>,
}

impl Session {
    /// Fresh session with the welcome message seeded.
    pub fn new() -> Self {
        let mut session = Self {
            case: Case::new(),
            messages: Vec::new(),
        };
        session.push(
            Role::Assistant,
            &format!(
                "Hi, I'm your Responsible AI Coach.\n\n{DESCRIBE_GUIDE}\n\n\
                 Tip: when you finish a case, type \"new case\" to start another."
            ),
        );
        session
    }

    /// Start a new case in this chat, optionally keeping the message log.
    /// Appends exactly one new-case greeting either way.
    pub fn reset(&mut self, keep_history: bool) {
        self.case = Case::new();
        if !keep_history {
            self.messages.clear();
        }
        self.push(
            Role::Assistant,
            &format!("New case started.\n\n{DESCRIBE_GUIDE}"),
        );
    }

    /// Drive one turn of the conversation.
    ///
    /// Appends the user message, handles reset commands at any stage, then
    /// dispatches on the current stage. Appends at most one assistant
    /// message before returning.
    pub fn handle_input(
        &mut self,
        text: &str,
        config: &CoachConfig,
        backend: &dyn GenerationBackend,
    ) -> Turn {
        self.push(Role::User, text);

        if commands::is_reset_command(text) {
            tracing::debug!("reset command received");
            self.reset(true);
            return Turn::Reset;
        }

        match self.case.stage {
            Stage::AwaitDescription => self.on_description(text, config, backend),
            Stage::AwaitAnswers => self.on_answers(text, config, backend),
            Stage::Done => self.on_refinement(text, config, backend),
        }
    }

    fn on_description(
        &mut self,
        text: &str,
        config: &CoachConfig,
        backend: &dyn GenerationBackend,
    ) -> Turn {
        match report::run_intake(config, backend, text) {
            Ok(intake) => {
                self.case.product_description = text.to_string();
                self.case.intake_questions = intake.clone();
                self.case.stage = Stage::AwaitAnswers;
                self.push(
                    Role::Assistant,
                    &format!(
                        "Thanks, I'll start with a short intake to understand context.\n\n\
                         {intake}\n\n\
                         Reply with your numbered answers (1-10). After that, I'll generate:\n\
                         - a Risk Register table\n\
                         - a step-by-step Action Plan\n\
                         - templates/checklists"
                    ),
                );
                Turn::IntakeReady
            }
            Err(e) => {
                self.push(
                    Role::Assistant,
                    &format!("I couldn't generate intake questions.\n\nError: {e}"),
                );
                Turn::Failed
            }
        }
    }

    fn on_answers(
        &mut self,
        text: &str,
        config: &CoachConfig,
        backend: &dyn GenerationBackend,
    ) -> Turn {
        if !commands::is_numbered_answers(text) {
            self.push(
                Role::Assistant,
                "Got it. Please reply in a numbered format so I can use it reliably.\n\n\
                 Example:\n\
                 1. Healthcare / hospital clinical decision support\n\
                 2. Primary users are doctors...\n\
                 3. The AI predicts...",
            );
            return Turn::NeedNumberedAnswers;
        }

        let context = report::final_context(&self.case.product_description, text);
        match report::run_report(config, backend, &context) {
            Ok(generated) => {
                self.case.intake_answers = text.to_string();
                self.case.stage = Stage::Done;
                self.case.status = CaseStatus::Completed;
                let body = format_report(&generated);
                self.case.report = Some(generated);
                self.push(
                    Role::Assistant,
                    &format!(
                        "Report generated.\n\n{body}\n\n\
                         You can:\n\
                         - ask follow-up questions (same case)\n\
                         - request refinements (e.g. \"add EU AI Act mapping\")\n\
                         - start a fresh scenario by typing: new case"
                    ),
                );
                Turn::ReportReady
            }
            Err(e) => {
                self.push(
                    Role::Assistant,
                    &format!("Something went wrong while generating the report.\n\nError: {e}"),
                );
                Turn::Failed
            }
        }
    }

    fn on_refinement(
        &mut self,
        text: &str,
        config: &CoachConfig,
        backend: &dyn GenerationBackend,
    ) -> Turn {
        let base = report::final_context(
            &self.case.product_description,
            &self.case.intake_answers,
        );
        let improved = report::refinement_context(&base, text);
        match report::run_report(config, backend, &improved) {
            Ok(updated) => {
                let body = format_report(&updated);
                // Refinement replaces the report wholesale.
                self.case.report = Some(updated);
                self.push(
                    Role::Assistant,
                    &format!(
                        "Updated version:\n\n{body}\n\n\
                         For a completely different scenario, type: new case"
                    ),
                );
                Turn::Refined
            }
            Err(e) => {
                self.push(
                    Role::Assistant,
                    &format!("Error while refining:\n{e}"),
                );
                Turn::Failed
            }
        }
    }

    fn push(&mut self, role: Role, content: &str) {
        self.messages.push(ChatMessage {
            role,
            content: content.to_string(),
            at: Utc::now(),
        });
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

fn format_report(report: &Report) -> String {
    format!(
        "## Risk Register\n{}\n\n## Action Plan\n{}\n\n## Templates\n{}",
        report.risk_register, report.action_plan, report.templates
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
