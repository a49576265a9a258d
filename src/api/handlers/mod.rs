//! HTTP request handlers.

pub mod appointment_handler;
pub mod auth_handler;
pub mod dashboard_handler;
pub mod doctor_handler;
pub mod symptom_handler;
pub mod user_handler;

pub use appointment_handler::appointment_routes;
pub use auth_handler::auth_routes;
pub use dashboard_handler::dashboard_routes;
pub use doctor_handler::{admin_doctor_routes, doctor_profile_routes, public_doctor_routes};
pub use symptom_handler::symptom_routes;
pub use user_handler::user_routes;
