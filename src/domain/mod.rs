//! Domain layer - Core business entities and logic
//!
//! Contains the core domain models that represent telehealth concepts
//! independent of infrastructure concerns.

pub mod appointment;
pub mod doctor;
pub mod password;
pub mod user;

pub use appointment::{Appointment, AppointmentStatus};
pub use doctor::{DoctorProfile, VerificationStatus};
pub use password::Password;
pub use user::{User, UserResponse, UserRole};
