//! Symptom prediction proxy.
//!
//! Forwards normalized symptom lists to the external model service and
//! relays its JSON verdict unchanged. The upstream is reached over HTTP
//! and treated as untrusted: its failures surface as upstream errors,
//! never as internal ones.

use async_trait::async_trait;
use serde_json::json;
use std::time::Duration;

use crate::config::PREDICTOR_CONNECT_TIMEOUT_SECS;
use crate::errors::{AppError, AppResult};

/// Prediction service trait for dependency injection.
#[async_trait]
pub trait PredictionService: Send + Sync {
    /// Run the raw symptom text through the model and return its JSON response
    async fn check_symptoms(&self, symptoms: &str) -> AppResult<serde_json::Value>;
}

/// Concrete implementation backed by the external model service.
pub struct Predictor {
    http: reqwest::Client,
    base_url: String,
}

impl Predictor {
    /// Create a predictor targeting the given model service base URL
    pub fn new(base_url: String) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(PREDICTOR_CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { http, base_url })
    }
}

/// Split comma-separated symptom text into the tokens the model expects.
///
/// Each entry is trimmed, lowercased, and has internal spaces replaced
/// with underscores. Empty entries are dropped.
fn normalize_symptoms(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_lowercase().replace(' ', "_"))
        .filter(|s| !s.is_empty())
        .collect()
}

#[async_trait]
impl PredictionService for Predictor {
    async fn check_symptoms(&self, symptoms: &str) -> AppResult<serde_json::Value> {
        let tokens = normalize_symptoms(symptoms);
        if tokens.is_empty() {
            return Err(AppError::validation("Symptoms are required"));
        }

        let url = format!("{}/predict", self.base_url.trim_end_matches('/'));
        let response = self
            .http
            .post(&url)
            .json(&json!({ "symptoms": tokens }))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Model service unreachable: {}", e);
                AppError::upstream("Server error connecting to model")
            })?;

        let status = response.status();
        let body: serde_json::Value = response.json().await.map_err(|e| {
            tracing::error!("Model service returned invalid JSON: {}", e);
            AppError::upstream("Server error connecting to model")
        })?;

        if !status.is_success() {
            // Relay the model's own error message when it sent one
            let message = body
                .get("error")
                .and_then(|v| v.as_str())
                .unwrap_or("Model prediction failed")
                .to_string();
            tracing::warn!(status = %status, "Model prediction failed: {}", message);
            return Err(AppError::upstream(message));
        }

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_case_whitespace_and_spaces() {
        let tokens = normalize_symptoms("  Skin Rash , ITCHING,joint pain ");
        assert_eq!(tokens, vec!["skin_rash", "itching", "joint_pain"]);
    }

    #[test]
    fn drops_empty_entries() {
        let tokens = normalize_symptoms("fever,, ,cough");
        assert_eq!(tokens, vec!["fever", "cough"]);
    }

    #[test]
    fn blank_input_yields_no_tokens() {
        assert!(normalize_symptoms("   ").is_empty());
        assert!(normalize_symptoms(",,,").is_empty());
    }

    #[tokio::test]
    async fn empty_symptoms_rejected_without_network() {
        // Unroutable base URL: a request would fail loudly, proving the
        // validation short-circuits before any call is attempted.
        let predictor = Predictor::new("http://127.0.0.1:1".to_string()).unwrap();
        let err = predictor.check_symptoms("   ").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
