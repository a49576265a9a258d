//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{
    appointment_handler, auth_handler, dashboard_handler, doctor_handler, symptom_handler,
    user_handler,
};
use crate::domain::{AppointmentStatus, UserResponse, UserRole, VerificationStatus};
use crate::types::MessageResponse;

/// OpenAPI documentation for the MediViz telehealth API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "MediViz API",
        version = "0.1.0",
        description = "Telehealth backend: accounts, doctor verification, appointments, and symptom predictions",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        // Authentication endpoints
        auth_handler::register,
        auth_handler::login,
        // Dashboard
        dashboard_handler::dashboard,
        // Users
        user_handler::list_users,
        // Doctors
        doctor_handler::list_approved_doctors,
        doctor_handler::create_profile,
        doctor_handler::get_own_profile,
        doctor_handler::list_pending_doctors,
        doctor_handler::verify_doctor,
        // Appointments
        appointment_handler::book_appointment,
        appointment_handler::list_appointments,
        appointment_handler::update_status,
        // Predictions
        symptom_handler::check_symptoms,
    ),
    components(
        schemas(
            // Domain types
            UserRole,
            UserResponse,
            VerificationStatus,
            AppointmentStatus,
            MessageResponse,
            // Auth types
            auth_handler::RegisterRequest,
            auth_handler::LoginRequest,
            auth_handler::RegisterResponse,
            auth_handler::LoginResponse,
            // Doctor types
            doctor_handler::CreateProfileRequest,
            doctor_handler::VerifyRequest,
            doctor_handler::DoctorProfileResponse,
            doctor_handler::VerifyResponse,
            // Appointment types
            appointment_handler::BookAppointmentRequest,
            appointment_handler::UpdateStatusRequest,
            appointment_handler::AppointmentResponse,
            // Prediction types
            symptom_handler::CheckSymptomsRequest,
            symptom_handler::CheckSymptomsResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "User registration and login"),
        (name = "Dashboard", description = "Authenticated greeting"),
        (name = "Users", description = "User listing"),
        (name = "Doctors", description = "Doctor profiles and marketplace"),
        (name = "Admin", description = "Doctor verification"),
        (name = "Appointments", description = "Appointment booking and lifecycle"),
        (name = "Predictions", description = "Symptom prediction proxy")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT token obtained from /api/login"))
                        .build(),
                ),
            );
        }
    }
}
