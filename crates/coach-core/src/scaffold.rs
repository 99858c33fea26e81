//! Default agent and task definitions written by `coach init`.

pub const DEFAULT_AGENTS_YAML: &str = r#"agents:
  intake_coach:
    role: "Responsible AI Intake Coach"
    goal: "Ask the smallest set of questions needed to understand an AI product's context, users, and impact."
    backstory: "You run intake interviews for AI governance reviews. You are concise, structured, and never ask for information the product description already gives you."

  risk_analyst:
    role: "AI Risk Analyst"
    goal: "Identify concrete fairness, safety, privacy, and accountability risks for the described AI product."
    backstory: "You have assessed AI systems in HR, healthcare, and finance. You name specific failure modes, affected groups, and severity, not generic concerns."

  governance_planner:
    role: "Responsible AI Governance Planner"
    goal: "Turn identified risks into an ordered, practical mitigation plan the team can actually execute."
    backstory: "You translate risk registers into engineering and process work: owners, sequencing, and checkpoints."

  documentation_writer:
    role: "AI Documentation Writer"
    goal: "Produce ready-to-fill templates and checklists for responsible AI documentation."
    backstory: "You write model cards, impact assessments, and review checklists that teams fill in without further guidance."
"#;

pub const DEFAULT_TASKS_YAML: &str = r#"tasks:
  intake:
    description: |
      An AI product has been described as follows:

      {{user_input}}

      Write up to 10 numbered intake questions that uncover what the
      description leaves out: affected people, decision stakes, data
      sources and consent, deployment context, and human oversight.
      Ask only what is missing.
    expected_output: "A numbered list of at most 10 intake questions."
    agent: intake_coach

  risk_register:
    description: |
      Using the product context below, build a Responsible AI risk register.

      {{user_input}}

      Cover fairness, safety, privacy, transparency, and accountability.
      For each risk give: risk, affected group, severity (low/medium/high),
      likelihood, and an early warning signal.
    expected_output: "A markdown table with one row per risk."
    agent: risk_analyst

  action_plan:
    description: |
      Using the product context below, produce a step-by-step mitigation
      and governance action plan.

      {{user_input}}

      Order steps by priority, name a responsible role for each, and mark
      which steps must complete before launch.
    expected_output: "A numbered action plan with owners and pre-launch markers."
    agent: governance_planner

  templates:
    description: |
      Using the product context below, produce documentation templates the
      team should fill in.

      {{user_input}}

      Include a short model card skeleton, an impact assessment outline,
      and a pre-deployment review checklist.
    expected_output: "Three fill-in templates in markdown."
    agent: documentation_writer
"#;
