//! Service wiring - builds the concrete service graph.
//!
//! Downstream code receives trait objects, never implementations, so
//! handlers and tests can substitute any service independently.

use std::sync::Arc;

use super::{
    AppointmentScheduler, AppointmentService, AuthService, Authenticator, DoctorDirectory,
    DoctorService, PredictionService, Predictor, UserDirectory, UserService,
};
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::Persistence;

/// The full set of application services built over one connection pool.
pub struct Services {
    pub auth: Arc<dyn AuthService>,
    pub users: Arc<dyn UserService>,
    pub doctors: Arc<dyn DoctorService>,
    pub appointments: Arc<dyn AppointmentService>,
    pub predictions: Arc<dyn PredictionService>,
}

impl Services {
    /// Wire every service from a database connection and config
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: Config) -> AppResult<Self> {
        let predictor_url = config.predictor_url.clone();
        let uow = Arc::new(Persistence::new(db));

        Ok(Self {
            auth: Arc::new(Authenticator::new(uow.clone(), config)),
            users: Arc::new(UserDirectory::new(uow.clone())),
            doctors: Arc::new(DoctorDirectory::new(uow.clone())),
            appointments: Arc::new(AppointmentScheduler::new(uow)),
            predictions: Arc::new(Predictor::new(predictor_url)?),
        })
    }
}
