//! Appointment service - booking and lifecycle.
//!
//! Patients book against approved doctors; each participant lists
//! their own side; only the appointment's doctor can move its status
//! forward. No scheduling-conflict detection is performed.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Appointment, AppointmentStatus, UserRole};
use crate::errors::{AppError, AppResult};
use crate::infra::{AppointmentRepository, DoctorRepository, UnitOfWork};

/// Appointment service trait for dependency injection.
#[async_trait]
pub trait AppointmentService: Send + Sync {
    /// Book an appointment with an approved doctor
    async fn book(
        &self,
        patient_id: Uuid,
        doctor_user_id: Uuid,
        scheduled_at: DateTime<Utc>,
        reason: Option<String>,
    ) -> AppResult<Appointment>;

    /// List the caller's appointments (patient or doctor side by role)
    async fn list_for_user(&self, user_id: Uuid, role: UserRole) -> AppResult<Vec<Appointment>>;

    /// Doctor updates the status of one of their appointments
    async fn update_status(
        &self,
        appointment_id: Uuid,
        doctor_user_id: Uuid,
        status: AppointmentStatus,
    ) -> AppResult<Appointment>;
}

/// Concrete implementation of AppointmentService.
pub struct AppointmentScheduler<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> AppointmentScheduler<U> {
    /// Create new appointment service instance
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> AppointmentService for AppointmentScheduler<U> {
    async fn book(
        &self,
        patient_id: Uuid,
        doctor_user_id: Uuid,
        scheduled_at: DateTime<Utc>,
        reason: Option<String>,
    ) -> AppResult<Appointment> {
        // Only verified doctors are bookable
        let profile = self
            .uow
            .doctors()
            .find_by_user_id(doctor_user_id)
            .await?
            .ok_or(AppError::NotFound)?;

        if !profile.is_approved() {
            return Err(AppError::validation("Doctor is not approved"));
        }

        self.uow
            .appointments()
            .create(patient_id, doctor_user_id, scheduled_at, reason)
            .await
    }

    async fn list_for_user(&self, user_id: Uuid, role: UserRole) -> AppResult<Vec<Appointment>> {
        match role {
            UserRole::Doctor => self.uow.appointments().list_for_doctor(user_id).await,
            _ => self.uow.appointments().list_for_patient(user_id).await,
        }
    }

    async fn update_status(
        &self,
        appointment_id: Uuid,
        doctor_user_id: Uuid,
        status: AppointmentStatus,
    ) -> AppResult<Appointment> {
        let appointment = self
            .uow
            .appointments()
            .find_by_id(appointment_id)
            .await?
            .ok_or(AppError::NotFound)?;

        if appointment.doctor_id != doctor_user_id {
            return Err(AppError::Forbidden);
        }

        self.uow
            .appointments()
            .set_status(appointment_id, status)
            .await
    }
}
