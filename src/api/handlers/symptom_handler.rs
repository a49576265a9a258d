//! Symptom check handler - proxy to the external prediction model.

use axum::{extract::State, response::Json, routing::post, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::errors::AppResult;
use crate::services::PredictionService;

/// Symptom check request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CheckSymptomsRequest {
    /// Comma-separated symptom list, e.g. "skin rash, itching"
    #[validate(length(min = 1, message = "Symptoms are required"))]
    #[schema(example = "skin rash, itching, fatigue")]
    pub symptoms: String,
}

/// Prediction relay response
#[derive(Debug, Serialize, ToSchema)]
pub struct CheckSymptomsResponse {
    #[schema(example = "Prediction successful")]
    pub message: String,
    /// Model service response, relayed unchanged
    pub result: serde_json::Value,
}

/// Create symptom check routes
pub fn symptom_routes() -> Router<AppState> {
    Router::new().route("/", post(check_symptoms))
}

/// Forward symptoms to the prediction model and relay its verdict
#[utoipa::path(
    post,
    path = "/api/check-symptoms",
    tag = "Predictions",
    request_body = CheckSymptomsRequest,
    responses(
        (status = 200, description = "Prediction successful", body = CheckSymptomsResponse),
        (status = 400, description = "No symptoms supplied"),
        (status = 500, description = "Model unreachable or prediction failed")
    )
)]
pub async fn check_symptoms(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CheckSymptomsRequest>,
) -> AppResult<Json<CheckSymptomsResponse>> {
    let result = state
        .prediction_service
        .check_symptoms(&payload.symptoms)
        .await?;

    Ok(Json(CheckSymptomsResponse {
        message: "Prediction successful".to_string(),
        result,
    }))
}
