//! Appointment repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::entities::appointment::{self, ActiveModel, Entity as AppointmentEntity};
use crate::domain::{Appointment, AppointmentStatus};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Appointment repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    /// Find appointment by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Appointment>>;

    /// Create a scheduled appointment
    async fn create(
        &self,
        patient_id: Uuid,
        doctor_id: Uuid,
        scheduled_at: DateTime<Utc>,
        reason: Option<String>,
    ) -> AppResult<Appointment>;

    /// List appointments where the user is the patient
    async fn list_for_patient(&self, patient_id: Uuid) -> AppResult<Vec<Appointment>>;

    /// List appointments where the user is the doctor
    async fn list_for_doctor(&self, doctor_id: Uuid) -> AppResult<Vec<Appointment>>;

    /// Update the status of an appointment
    async fn set_status(&self, id: Uuid, status: AppointmentStatus) -> AppResult<Appointment>;
}

/// Concrete implementation of AppointmentRepository
pub struct AppointmentStore {
    db: DatabaseConnection,
}

impl AppointmentStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AppointmentRepository for AppointmentStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Appointment>> {
        let result = AppointmentEntity::find_by_id(id).one(&self.db).await?;
        Ok(result.map(Appointment::from))
    }

    async fn create(
        &self,
        patient_id: Uuid,
        doctor_id: Uuid,
        scheduled_at: DateTime<Utc>,
        reason: Option<String>,
    ) -> AppResult<Appointment> {
        let now = Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            patient_id: Set(patient_id),
            doctor_id: Set(doctor_id),
            scheduled_at: Set(scheduled_at),
            status: Set(AppointmentStatus::Scheduled.to_string()),
            reason: Set(reason),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await?;
        Ok(Appointment::from(model))
    }

    async fn list_for_patient(&self, patient_id: Uuid) -> AppResult<Vec<Appointment>> {
        let models = AppointmentEntity::find()
            .filter(appointment::Column::PatientId.eq(patient_id))
            .order_by_asc(appointment::Column::ScheduledAt)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Appointment::from).collect())
    }

    async fn list_for_doctor(&self, doctor_id: Uuid) -> AppResult<Vec<Appointment>> {
        let models = AppointmentEntity::find()
            .filter(appointment::Column::DoctorId.eq(doctor_id))
            .order_by_asc(appointment::Column::ScheduledAt)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Appointment::from).collect())
    }

    async fn set_status(&self, id: Uuid, status: AppointmentStatus) -> AppResult<Appointment> {
        let existing = AppointmentEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = existing.into();
        active.status = Set(status.to_string());
        active.updated_at = Set(Utc::now());

        let model = active.update(&self.db).await?;
        Ok(Appointment::from(model))
    }
}
