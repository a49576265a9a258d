//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections and repositories
//! - Redis cache (rate limiting)
//! - Persistence facade over all repositories

pub mod cache;
pub mod db;
pub mod persistence;
pub mod repositories;

pub use cache::{Cache, CacheStore};
pub use db::{Database, DatabaseHealth, Migrator};
pub use persistence::{Persistence, UnitOfWork};
pub use repositories::{
    AppointmentRepository, AppointmentStore, DoctorRepository, DoctorStore, NewDoctorProfile,
    UserRepository, UserStore,
};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockAppointmentRepository, MockDoctorRepository, MockUserRepository};
