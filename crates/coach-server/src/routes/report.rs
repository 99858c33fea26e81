use axum::extract::State;
use axum::Json;

use crate::error::AppError;
use crate::state::AppState;
use coach_core::report;

#[derive(serde::Deserialize)]
pub struct ReportBody {
    pub product_description: String,
    pub intake_answers: String,
}

/// POST /report — generate the full report (risk register, action plan,
/// templates) from a description plus numbered intake answers.
pub async fn generate_report(
    State(app): State<AppState>,
    Json(body): Json<ReportBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let config = app.config.clone();
    let backend = app.backend.clone();
    let generated = tokio::task::spawn_blocking(move || {
        let context = report::final_context(&body.product_description, &body.intake_answers);
        report::run_report(&config, backend.as_ref(), &context)
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(serde_json::json!({
        "intake": serde_json::Value::Null,
        "risk_register": generated.risk_register,
        "action_plan": generated.action_plan,
        "templates": generated.templates,
    })))
}
