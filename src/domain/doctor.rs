//! Doctor profile domain entity.
//!
//! A doctor profile is owned 1:1 by a user with the doctor role.
//! Its verification status controls marketplace visibility: only
//! approved profiles are listed publicly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Doctor-profile lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    Pending,
    Approved,
    Rejected,
}

impl From<&str> for VerificationStatus {
    fn from(s: &str) -> Self {
        match s {
            "approved" => VerificationStatus::Approved,
            "rejected" => VerificationStatus::Rejected,
            _ => VerificationStatus::Pending,
        }
    }
}

impl std::fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VerificationStatus::Pending => write!(f, "pending"),
            VerificationStatus::Approved => write!(f, "approved"),
            VerificationStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// Doctor profile domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub specialization: String,
    pub license_number: String,
    pub years_of_experience: i32,
    pub qualification: String,
    pub bio: Option<String>,
    pub consultation_fee: f64,
    pub verification_status: VerificationStatus,
    /// Set when an admin approves the profile
    pub verified_at: Option<DateTime<Utc>>,
    /// Admin who made the verification decision
    pub verified_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DoctorProfile {
    /// Whether the profile is visible in the public marketplace
    pub fn is_approved(&self) -> bool {
        self.verification_status == VerificationStatus::Approved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_status_defaults_to_pending() {
        assert_eq!(VerificationStatus::from("???"), VerificationStatus::Pending);
        assert_eq!(
            VerificationStatus::from("approved"),
            VerificationStatus::Approved
        );
        assert_eq!(
            VerificationStatus::from("rejected"),
            VerificationStatus::Rejected
        );
    }
}
