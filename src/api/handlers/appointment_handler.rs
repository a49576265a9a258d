//! Appointment booking and status handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, patch, post},
    Extension, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::{Appointment, AppointmentStatus, UserRole};
use crate::errors::{AppError, AppResult};
use crate::services::AppointmentService;
use crate::types::Created;

/// Appointment booking request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookAppointmentRequest {
    /// User ID of the doctor to book with
    pub doctor_id: Uuid,
    /// When the appointment takes place
    pub scheduled_at: DateTime<Utc>,
    /// Optional reason for the visit
    #[validate(length(max = 500, message = "Reason must be at most 500 characters"))]
    pub reason: Option<String>,
}

/// Appointment status update request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateStatusRequest {
    /// "completed" or "cancelled"
    #[schema(example = "completed")]
    pub status: String,
}

/// Appointment as returned to clients
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentResponse {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub doctor_id: Uuid,
    pub scheduled_at: DateTime<Utc>,
    #[schema(example = "scheduled")]
    pub status: String,
    pub reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Appointment> for AppointmentResponse {
    fn from(a: Appointment) -> Self {
        Self {
            id: a.id,
            patient_id: a.patient_id,
            doctor_id: a.doctor_id,
            scheduled_at: a.scheduled_at,
            status: a.status.to_string(),
            reason: a.reason,
            created_at: a.created_at,
        }
    }
}

/// Create appointment routes (all require authentication)
pub fn appointment_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_appointments))
        .route("/", post(book_appointment))
        .route("/:id/status", patch(update_status))
}

/// Book an appointment with an approved doctor
#[utoipa::path(
    post,
    path = "/api/appointments",
    tag = "Appointments",
    security(("bearer_auth" = [])),
    request_body = BookAppointmentRequest,
    responses(
        (status = 201, description = "Appointment booked", body = AppointmentResponse),
        (status = 400, description = "Doctor is not approved"),
        (status = 403, description = "Caller is not a patient"),
        (status = 404, description = "Doctor not found")
    )
)]
pub async fn book_appointment(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<BookAppointmentRequest>,
) -> AppResult<Created<AppointmentResponse>> {
    // Booking is strictly the patient's action; the caller becomes the
    // appointment's patient, so no other role may reach this path
    if user.role != UserRole::Patient {
        return Err(AppError::Forbidden);
    }

    let appointment = state
        .appointment_service
        .book(user.id, payload.doctor_id, payload.scheduled_at, payload.reason)
        .await?;

    Ok(Created(AppointmentResponse::from(appointment)))
}

/// List own appointments (patient or doctor side by role)
#[utoipa::path(
    get,
    path = "/api/appointments",
    tag = "Appointments",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Appointments for the caller", body = Vec<AppointmentResponse>)
    )
)]
pub async fn list_appointments(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Json<Vec<AppointmentResponse>>> {
    let appointments = state
        .appointment_service
        .list_for_user(user.id, user.role)
        .await?;

    Ok(Json(
        appointments
            .into_iter()
            .map(AppointmentResponse::from)
            .collect(),
    ))
}

/// Mark an appointment completed or cancelled (its doctor only)
#[utoipa::path(
    patch,
    path = "/api/appointments/{id}/status",
    tag = "Appointments",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Appointment ID")),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = AppointmentResponse),
        (status = 400, description = "Unknown status"),
        (status = 403, description = "Caller is not this appointment's doctor"),
        (status = 404, description = "Appointment not found")
    )
)]
pub async fn update_status(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateStatusRequest>,
) -> AppResult<Json<AppointmentResponse>> {
    let status = AppointmentStatus::from_update(&payload.status)?;

    let appointment = state
        .appointment_service
        .update_status(id, user.id, status)
        .await?;

    Ok(Json(AppointmentResponse::from(appointment)))
}
