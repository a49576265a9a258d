//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.

mod appointment_service;
mod auth_service;
pub mod container;
mod doctor_service;
mod prediction_service;
mod user_service;

// Service wiring
pub use container::Services;

// Service traits and implementations
pub use appointment_service::{AppointmentScheduler, AppointmentService};
pub use auth_service::{AuthService, Authenticator, Claims, LoginResult};
pub use doctor_service::{DoctorDirectory, DoctorService, NewProfile, VerificationAction};
pub use prediction_service::{PredictionService, Predictor};
pub use user_service::{UserDirectory, UserService};
