//! Appointment database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{Appointment, AppointmentStatus};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "appointments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub patient_id: Uuid,
    pub doctor_id: Uuid,
    pub scheduled_at: DateTimeUtc,
    pub status: String,
    pub reason: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Appointment {
    fn from(model: Model) -> Self {
        Appointment {
            id: model.id,
            patient_id: model.patient_id,
            doctor_id: model.doctor_id,
            scheduled_at: model.scheduled_at,
            status: AppointmentStatus::from(model.status.as_str()),
            reason: model.reason,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
