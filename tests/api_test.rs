//! API contract tests.
//!
//! These tests pin the exact wire shapes: error bodies, status codes,
//! and response field naming, without requiring a database or Redis.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Utc;
use http_body_util::BodyExt;
use serde_json::json;
use uuid::Uuid;

use mediviz::domain::{User, UserResponse, UserRole};
use mediviz::errors::AppError;
use mediviz::types::MessageResponse;

async fn response_parts(error: AppError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    let body = serde_json::from_slice(&bytes).expect("body should be JSON");
    (status, body)
}

// =============================================================================
// Error Body Contract
// =============================================================================

#[tokio::test]
async fn missing_token_is_401_with_exact_body() {
    let (status, body) = response_parts(AppError::TokenMissing).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({"error": "Access denied. Token missing."}));
}

#[tokio::test]
async fn invalid_token_is_403_with_exact_body() {
    let (status, body) = response_parts(AppError::TokenInvalid).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body, json!({"error": "Invalid or expired token."}));
}

#[tokio::test]
async fn invalid_credentials_is_401_generic() {
    let (status, body) = response_parts(AppError::InvalidCredentials).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({"error": "Invalid credentials"}));
}

#[tokio::test]
async fn duplicate_email_is_400_with_exact_body() {
    let (status, body) = response_parts(AppError::DuplicateEmail).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Email already registered"}));
}

#[tokio::test]
async fn validation_message_is_relayed() {
    let (status, body) = response_parts(AppError::validation("Symptoms are required")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Symptoms are required"}));
}

#[tokio::test]
async fn upstream_failure_is_500_with_relayed_message() {
    let (status, body) = response_parts(AppError::upstream("Model prediction failed")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Model prediction failed"}));
}

#[tokio::test]
async fn internal_details_never_reach_the_client() {
    let (status, body) = response_parts(AppError::internal("connection pool exhausted")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let message = body["error"].as_str().expect("error message");
    assert!(!message.contains("pool"));
}

// =============================================================================
// Response Shapes
// =============================================================================

#[test]
fn user_response_is_camel_case_without_hash() {
    let user = User {
        id: Uuid::new_v4(),
        email: "jane@example.com".to_string(),
        password_hash: "secret-hash".to_string(),
        full_name: "Jane Doe".to_string(),
        role: UserRole::Patient,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    };

    let value = serde_json::to_value(UserResponse::from(user)).unwrap();
    assert_eq!(value["fullName"], "Jane Doe");
    assert_eq!(value["email"], "jane@example.com");
    assert_eq!(value["role"], "patient");
    assert!(value.get("passwordHash").is_none());
    assert!(value.get("password_hash").is_none());
}

#[test]
fn message_response_serializes_flat() {
    let value = serde_json::to_value(MessageResponse::new("Login successful")).unwrap();
    assert_eq!(value, json!({"message": "Login successful"}));
}

#[test]
fn dashboard_greeting_format() {
    let message = format!(
        "Welcome {}! You are logged in as {}.",
        "jane@example.com",
        UserRole::Doctor
    );
    assert_eq!(
        message,
        "Welcome jane@example.com! You are logged in as doctor."
    );
}

// =============================================================================
// Role Semantics
// =============================================================================

#[test]
fn roles_serialize_lowercase() {
    assert_eq!(UserRole::Patient.to_string(), "patient");
    assert_eq!(UserRole::Doctor.to_string(), "doctor");
    assert_eq!(UserRole::Admin.to_string(), "admin");
}

#[test]
fn registration_role_set_excludes_admin() {
    assert!(UserRole::from_registration("patient").is_ok());
    assert!(UserRole::from_registration("doctor").is_ok());
    assert!(UserRole::from_registration("admin").is_err());
    assert!(UserRole::from_registration("superuser").is_err());
}
