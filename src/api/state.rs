//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::errors::AppResult;
use crate::infra::{Cache, CacheStore, Database, DatabaseHealth};
use crate::services::{
    AppointmentService, AuthService, DoctorService, PredictionService, Services, UserService,
};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Doctor verification service
    pub doctor_service: Arc<dyn DoctorService>,
    /// Appointment service
    pub appointment_service: Arc<dyn AppointmentService>,
    /// Symptom prediction proxy
    pub prediction_service: Arc<dyn PredictionService>,
    /// Rate limit counters (Redis in production)
    pub cache: Arc<dyn CacheStore>,
    /// Database connectivity check for the health endpoint
    pub database: Arc<dyn DatabaseHealth>,
    /// Front-end origins allowed by CORS
    pub cors_origins: Vec<String>,
}

impl AppState {
    /// Create application state from database connection and config.
    pub fn from_config(
        database: Arc<Database>,
        cache: Arc<Cache>,
        config: crate::config::Config,
    ) -> AppResult<Self> {
        let cors_origins = config.cors_origins.clone();
        let services = Services::from_connection(database.get_connection(), config)?;

        Ok(Self {
            auth_service: services.auth,
            user_service: services.users,
            doctor_service: services.doctors,
            appointment_service: services.appointments,
            prediction_service: services.predictions,
            cache,
            database,
            cors_origins,
        })
    }

    /// Create application state with individually injected services
    /// and infrastructure. Router tests build their state here.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        user_service: Arc<dyn UserService>,
        doctor_service: Arc<dyn DoctorService>,
        appointment_service: Arc<dyn AppointmentService>,
        prediction_service: Arc<dyn PredictionService>,
        cache: Arc<dyn CacheStore>,
        database: Arc<dyn DatabaseHealth>,
        cors_origins: Vec<String>,
    ) -> Self {
        Self {
            auth_service,
            user_service,
            doctor_service,
            appointment_service,
            prediction_service,
            cache,
            database,
            cors_origins,
        }
    }
}
