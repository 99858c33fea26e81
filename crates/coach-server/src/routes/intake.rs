use axum::extract::State;
use axum::Json;

use crate::error::AppError;
use crate::state::AppState;
use coach_core::report;

#[derive(serde::Deserialize)]
pub struct IntakeBody {
    pub product_description: String,
}

/// POST /intake — generate intake questions from a product description.
pub async fn generate_intake(
    State(app): State<AppState>,
    Json(body): Json<IntakeBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let config = app.config.clone();
    let backend = app.backend.clone();
    let intake = tokio::task::spawn_blocking(move || {
        report::run_intake(&config, backend.as_ref(), &body.product_description)
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(serde_json::json!({ "intake": intake })))
}
