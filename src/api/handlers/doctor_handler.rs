//! Doctor profile, marketplace, and admin verification handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Extension, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::{require_admin, require_role, CurrentUser};
use crate::api::AppState;
use crate::domain::{DoctorProfile, UserRole};
use crate::errors::AppResult;
use crate::services::{DoctorService, NewProfile, VerificationAction};

/// Doctor profile submission request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProfileRequest {
    #[validate(length(min = 2, max = 100, message = "Specialization must be 2-100 characters"))]
    #[schema(example = "Cardiology")]
    pub specialization: String,
    #[validate(length(min = 5, max = 50, message = "License number must be 5-50 characters"))]
    #[schema(example = "MD-123456")]
    pub license_number: String,
    #[validate(range(min = 0, max = 60, message = "Experience must be 0-60 years"))]
    #[schema(example = 12)]
    pub years_of_experience: i32,
    #[validate(length(min = 2, max = 200, message = "Qualification must be 2-200 characters"))]
    #[schema(example = "MBBS, MD")]
    pub qualification: String,
    #[validate(length(max = 1000, message = "Bio must be at most 1000 characters"))]
    pub bio: Option<String>,
    #[validate(range(min = 0.0, max = 10000.0, message = "Fee must be 0-10000"))]
    #[schema(example = 150.0)]
    pub consultation_fee: f64,
}

/// Admin verification request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct VerifyRequest {
    /// "approved" or "rejected"
    #[schema(example = "approved")]
    pub action: String,
}

/// Doctor profile as returned to clients
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DoctorProfileResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub specialization: String,
    pub license_number: String,
    pub years_of_experience: i32,
    pub qualification: String,
    pub bio: Option<String>,
    pub consultation_fee: f64,
    #[schema(example = "pending")]
    pub verification_status: String,
    pub verified_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<DoctorProfile> for DoctorProfileResponse {
    fn from(profile: DoctorProfile) -> Self {
        Self {
            id: profile.id,
            user_id: profile.user_id,
            specialization: profile.specialization,
            license_number: profile.license_number,
            years_of_experience: profile.years_of_experience,
            qualification: profile.qualification,
            bio: profile.bio,
            consultation_fee: profile.consultation_fee,
            verification_status: profile.verification_status.to_string(),
            verified_at: profile.verified_at,
            created_at: profile.created_at,
        }
    }
}

/// Verification decision response
#[derive(Debug, Serialize, ToSchema)]
pub struct VerifyResponse {
    #[schema(example = "Doctor verification updated")]
    pub message: String,
    pub profile: DoctorProfileResponse,
}

/// Public marketplace routes
pub fn public_doctor_routes() -> Router<AppState> {
    Router::new().route("/", get(list_approved_doctors))
}

/// Doctor-owned profile routes (require authentication)
pub fn doctor_profile_routes() -> Router<AppState> {
    Router::new()
        .route("/profile", get(get_own_profile))
        .route("/profile", post(create_profile))
}

/// Admin verification routes (require authentication)
pub fn admin_doctor_routes() -> Router<AppState> {
    Router::new()
        .route("/doctors/pending", get(list_pending_doctors))
        .route("/doctors/:id/verify", post(verify_doctor))
}

/// List approved doctors (public marketplace)
#[utoipa::path(
    get,
    path = "/api/doctors",
    tag = "Doctors",
    responses(
        (status = 200, description = "Approved doctor profiles", body = Vec<DoctorProfileResponse>)
    )
)]
pub async fn list_approved_doctors(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<DoctorProfileResponse>>> {
    let profiles = state.doctor_service.list_approved().await?;

    Ok(Json(
        profiles.into_iter().map(DoctorProfileResponse::from).collect(),
    ))
}

/// Submit own doctor profile
#[utoipa::path(
    post,
    path = "/api/doctors/profile",
    tag = "Doctors",
    security(("bearer_auth" = [])),
    request_body = CreateProfileRequest,
    responses(
        (status = 201, description = "Profile submitted for verification", body = DoctorProfileResponse),
        (status = 400, description = "Validation error or profile already exists"),
        (status = 403, description = "Caller is not a doctor")
    )
)]
pub async fn create_profile(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<CreateProfileRequest>,
) -> AppResult<(StatusCode, Json<DoctorProfileResponse>)> {
    require_role(&user, UserRole::Doctor)?;

    let profile = state
        .doctor_service
        .create_profile(
            user.id,
            NewProfile {
                specialization: payload.specialization,
                license_number: payload.license_number,
                years_of_experience: payload.years_of_experience,
                qualification: payload.qualification,
                bio: payload.bio,
                consultation_fee: payload.consultation_fee,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(DoctorProfileResponse::from(profile))))
}

/// Get own doctor profile
#[utoipa::path(
    get,
    path = "/api/doctors/profile",
    tag = "Doctors",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Own doctor profile", body = DoctorProfileResponse),
        (status = 404, description = "No profile submitted yet")
    )
)]
pub async fn get_own_profile(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Json<DoctorProfileResponse>> {
    require_role(&user, UserRole::Doctor)?;

    let profile = state.doctor_service.get_own_profile(user.id).await?;

    Ok(Json(DoctorProfileResponse::from(profile)))
}

/// List doctors awaiting verification (admin only)
#[utoipa::path(
    get,
    path = "/api/admin/doctors/pending",
    tag = "Admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Pending doctor profiles", body = Vec<DoctorProfileResponse>),
        (status = 403, description = "Caller is not an admin")
    )
)]
pub async fn list_pending_doctors(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Json<Vec<DoctorProfileResponse>>> {
    require_admin(&user)?;

    let profiles = state.doctor_service.list_pending().await?;

    Ok(Json(
        profiles.into_iter().map(DoctorProfileResponse::from).collect(),
    ))
}

/// Approve or reject a pending doctor (admin only)
#[utoipa::path(
    post,
    path = "/api/admin/doctors/{id}/verify",
    tag = "Admin",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Doctor profile ID")),
    request_body = VerifyRequest,
    responses(
        (status = 200, description = "Verification decision applied", body = VerifyResponse),
        (status = 400, description = "Unknown action"),
        (status = 403, description = "Caller is not an admin"),
        (status = 404, description = "Profile not found")
    )
)]
pub async fn verify_doctor(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<VerifyRequest>,
) -> AppResult<Json<VerifyResponse>> {
    require_admin(&user)?;

    let action = VerificationAction::parse(&payload.action)?;
    let profile = state.doctor_service.verify(id, action, user.id).await?;

    Ok(Json(VerifyResponse {
        message: "Doctor verification updated".to_string(),
        profile: DoctorProfileResponse::from(profile),
    }))
}
