//! Doctor service - profile creation, marketplace listing, verification.
//!
//! Verification is a single conditional update: an admin approves or
//! rejects a pending profile, recording who decided and when. Approval
//! is what makes a profile visible in the public marketplace.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{DoctorProfile, VerificationStatus};
use crate::errors::{AppError, AppResult};
use crate::infra::{DoctorRepository, NewDoctorProfile, UnitOfWork};

/// Profile fields supplied by a doctor at submission.
#[derive(Debug, Clone)]
pub struct NewProfile {
    pub specialization: String,
    pub license_number: String,
    pub years_of_experience: i32,
    pub qualification: String,
    pub bio: Option<String>,
    pub consultation_fee: f64,
}

/// Admin verification decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationAction {
    Approved,
    Rejected,
}

impl VerificationAction {
    /// Parse the action string from the request body
    pub fn parse(s: &str) -> AppResult<Self> {
        match s {
            "approved" => Ok(VerificationAction::Approved),
            "rejected" => Ok(VerificationAction::Rejected),
            _ => Err(AppError::validation("Action must be approved or rejected")),
        }
    }
}

/// Doctor service trait for dependency injection.
#[async_trait]
pub trait DoctorService: Send + Sync {
    /// Submit a profile for the given doctor user (one per user)
    async fn create_profile(&self, user_id: Uuid, profile: NewProfile)
        -> AppResult<DoctorProfile>;

    /// Get the profile owned by a user
    async fn get_own_profile(&self, user_id: Uuid) -> AppResult<DoctorProfile>;

    /// List approved profiles (public marketplace)
    async fn list_approved(&self) -> AppResult<Vec<DoctorProfile>>;

    /// List profiles awaiting verification (admin)
    async fn list_pending(&self) -> AppResult<Vec<DoctorProfile>>;

    /// Apply an admin verification decision to a profile
    async fn verify(
        &self,
        profile_id: Uuid,
        action: VerificationAction,
        admin_id: Uuid,
    ) -> AppResult<DoctorProfile>;
}

/// Concrete implementation of DoctorService.
pub struct DoctorDirectory<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> DoctorDirectory<U> {
    /// Create new doctor service instance
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> DoctorService for DoctorDirectory<U> {
    async fn create_profile(
        &self,
        user_id: Uuid,
        profile: NewProfile,
    ) -> AppResult<DoctorProfile> {
        if self.uow.doctors().find_by_user_id(user_id).await?.is_some() {
            return Err(AppError::validation("Doctor profile already exists"));
        }

        self.uow
            .doctors()
            .create(NewDoctorProfile {
                user_id,
                specialization: profile.specialization,
                license_number: profile.license_number,
                years_of_experience: profile.years_of_experience,
                qualification: profile.qualification,
                bio: profile.bio,
                consultation_fee: profile.consultation_fee,
            })
            .await
    }

    async fn get_own_profile(&self, user_id: Uuid) -> AppResult<DoctorProfile> {
        self.uow
            .doctors()
            .find_by_user_id(user_id)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn list_approved(&self) -> AppResult<Vec<DoctorProfile>> {
        self.uow
            .doctors()
            .list_by_status(VerificationStatus::Approved)
            .await
    }

    async fn list_pending(&self) -> AppResult<Vec<DoctorProfile>> {
        self.uow
            .doctors()
            .list_by_status(VerificationStatus::Pending)
            .await
    }

    async fn verify(
        &self,
        profile_id: Uuid,
        action: VerificationAction,
        admin_id: Uuid,
    ) -> AppResult<DoctorProfile> {
        let (status, verified_at) = match action {
            // verified_at marks the approval moment only
            VerificationAction::Approved => (VerificationStatus::Approved, Some(Utc::now())),
            VerificationAction::Rejected => (VerificationStatus::Rejected, None),
        };

        self.uow
            .doctors()
            .set_verification(profile_id, status, verified_at, admin_id)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verification_action_is_a_closed_set() {
        assert!(VerificationAction::parse("approved").is_ok());
        assert!(VerificationAction::parse("rejected").is_ok());
        assert!(VerificationAction::parse("pending").is_err());
        assert!(VerificationAction::parse("APPROVED").is_err());
    }
}
