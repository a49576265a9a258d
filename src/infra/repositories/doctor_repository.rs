//! Doctor profile repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    SqlErr,
};
use uuid::Uuid;

use super::entities::doctor_profile::{self, ActiveModel, Entity as ProfileEntity};
use crate::domain::{DoctorProfile, VerificationStatus};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// New profile fields supplied at creation time.
#[derive(Debug, Clone)]
pub struct NewDoctorProfile {
    pub user_id: Uuid,
    pub specialization: String,
    pub license_number: String,
    pub years_of_experience: i32,
    pub qualification: String,
    pub bio: Option<String>,
    pub consultation_fee: f64,
}

/// Doctor profile repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait DoctorRepository: Send + Sync {
    /// Find profile by its ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<DoctorProfile>>;

    /// Find the profile owned by a user
    async fn find_by_user_id(&self, user_id: Uuid) -> AppResult<Option<DoctorProfile>>;

    /// Create a profile with pending verification status.
    ///
    /// The unique user_id column enforces the 1:1 ownership; a second
    /// profile for the same user is rejected.
    async fn create(&self, profile: NewDoctorProfile) -> AppResult<DoctorProfile>;

    /// List profiles with the given verification status
    async fn list_by_status(&self, status: VerificationStatus) -> AppResult<Vec<DoctorProfile>>;

    /// Record an admin verification decision: status plus audit fields.
    async fn set_verification(
        &self,
        id: Uuid,
        status: VerificationStatus,
        verified_at: Option<DateTime<Utc>>,
        verified_by: Uuid,
    ) -> AppResult<DoctorProfile>;
}

/// Concrete implementation of DoctorRepository
pub struct DoctorStore {
    db: DatabaseConnection,
}

impl DoctorStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DoctorRepository for DoctorStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<DoctorProfile>> {
        let result = ProfileEntity::find_by_id(id).one(&self.db).await?;
        Ok(result.map(DoctorProfile::from))
    }

    async fn find_by_user_id(&self, user_id: Uuid) -> AppResult<Option<DoctorProfile>> {
        let result = ProfileEntity::find()
            .filter(doctor_profile::Column::UserId.eq(user_id))
            .one(&self.db)
            .await?;
        Ok(result.map(DoctorProfile::from))
    }

    async fn create(&self, profile: NewDoctorProfile) -> AppResult<DoctorProfile> {
        let now = Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(profile.user_id),
            specialization: Set(profile.specialization),
            license_number: Set(profile.license_number),
            years_of_experience: Set(profile.years_of_experience),
            qualification: Set(profile.qualification),
            bio: Set(profile.bio),
            consultation_fee: Set(profile.consultation_fee),
            verification_status: Set(VerificationStatus::Pending.to_string()),
            verified_at: Set(None),
            verified_by: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(|e| {
            match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    AppError::validation("Doctor profile already exists")
                }
                _ => AppError::from(e),
            }
        })?;

        Ok(DoctorProfile::from(model))
    }

    async fn list_by_status(&self, status: VerificationStatus) -> AppResult<Vec<DoctorProfile>> {
        let models = ProfileEntity::find()
            .filter(doctor_profile::Column::VerificationStatus.eq(status.to_string()))
            .order_by_asc(doctor_profile::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(DoctorProfile::from).collect())
    }

    async fn set_verification(
        &self,
        id: Uuid,
        status: VerificationStatus,
        verified_at: Option<DateTime<Utc>>,
        verified_by: Uuid,
    ) -> AppResult<DoctorProfile> {
        let profile = ProfileEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = profile.into();
        active.verification_status = Set(status.to_string());
        active.verified_at = Set(verified_at);
        active.verified_by = Set(Some(verified_by));
        active.updated_at = Set(Utc::now());

        let model = active.update(&self.db).await?;
        Ok(DoctorProfile::from(model))
    }
}
