//! Doctor profile database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{DoctorProfile, VerificationStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "doctor_profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    pub specialization: String,
    pub license_number: String,
    pub years_of_experience: i32,
    pub qualification: String,
    pub bio: Option<String>,
    pub consultation_fee: f64,
    pub verification_status: String,
    pub verified_at: Option<DateTimeUtc>,
    pub verified_by: Option<Uuid>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for DoctorProfile {
    fn from(model: Model) -> Self {
        DoctorProfile {
            id: model.id,
            user_id: model.user_id,
            specialization: model.specialization,
            license_number: model.license_number,
            years_of_experience: model.years_of_experience,
            qualification: model.qualification,
            bio: model.bio,
            consultation_fee: model.consultation_fee,
            verification_status: VerificationStatus::from(model.verification_status.as_str()),
            verified_at: model.verified_at,
            verified_by: model.verified_by,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
