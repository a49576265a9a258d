//! Persistence facade - centralized repository access.
//!
//! Services depend on the `UnitOfWork` trait instead of concrete
//! stores, which keeps them mockable at the repository level.
//! Cross-record consistency (unique email, unique doctor profile) is
//! enforced by database constraints rather than application-level
//! read-then-write sequences.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::repositories::{
    AppointmentRepository, AppointmentStore, DoctorRepository, DoctorStore, UserRepository,
    UserStore,
};

/// Repository access trait for dependency injection.
pub trait UnitOfWork: Send + Sync {
    /// Get user repository
    fn users(&self) -> Arc<dyn UserRepository>;

    /// Get doctor profile repository
    fn doctors(&self) -> Arc<dyn DoctorRepository>;

    /// Get appointment repository
    fn appointments(&self) -> Arc<dyn AppointmentRepository>;
}

/// Concrete implementation of UnitOfWork backed by SeaORM stores.
pub struct Persistence {
    user_repo: Arc<UserStore>,
    doctor_repo: Arc<DoctorStore>,
    appointment_repo: Arc<AppointmentStore>,
}

impl Persistence {
    /// Create the persistence facade over one connection pool
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            user_repo: Arc::new(UserStore::new(db.clone())),
            doctor_repo: Arc::new(DoctorStore::new(db.clone())),
            appointment_repo: Arc::new(AppointmentStore::new(db)),
        }
    }
}

impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn doctors(&self) -> Arc<dyn DoctorRepository> {
        self.doctor_repo.clone()
    }

    fn appointments(&self) -> Arc<dyn AppointmentRepository> {
        self.appointment_repo.clone()
    }
}
