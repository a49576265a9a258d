//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::{ROLE_ADMIN, ROLE_DOCTOR, ROLE_PATIENT};
use crate::errors::{AppError, AppResult};

/// User roles enumeration (closed set, validated server-side)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Patient,
    Doctor,
    Admin,
}

impl UserRole {
    /// Check if this role has admin privileges
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    /// Parse a role supplied at registration.
    ///
    /// Only `patient` and `doctor` are client-assignable; `admin` and
    /// anything else are rejected.
    pub fn from_registration(s: &str) -> AppResult<Self> {
        match s {
            ROLE_PATIENT => Ok(UserRole::Patient),
            ROLE_DOCTOR => Ok(UserRole::Doctor),
            _ => Err(AppError::validation("Role must be patient or doctor")),
        }
    }
}

impl From<&str> for UserRole {
    fn from(s: &str) -> Self {
        match s {
            ROLE_ADMIN => UserRole::Admin,
            ROLE_DOCTOR => UserRole::Doctor,
            _ => UserRole::Patient,
        }
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        role.to_string()
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Patient => write!(f, "{}", ROLE_PATIENT),
            UserRole::Doctor => write!(f, "{}", ROLE_DOCTOR),
            UserRole::Admin => write!(f, "{}", ROLE_ADMIN),
        }
    }
}

/// User domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub full_name: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if user has admin role
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Sanitized user summary (safe to return to clients: no hash, no token)
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// Unique user identifier
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    /// User full name
    #[schema(example = "Jane Doe")]
    pub full_name: String,
    /// User email address
    #[schema(example = "user@example.com")]
    pub email: String,
    /// User role
    #[schema(example = "patient")]
    pub role: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name,
            email: user.email,
            role: user.role.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_roles_are_a_closed_set() {
        assert!(UserRole::from_registration("patient").is_ok());
        assert!(UserRole::from_registration("doctor").is_ok());
        assert!(UserRole::from_registration("admin").is_err());
        assert!(UserRole::from_registration("superuser").is_err());
        assert!(UserRole::from_registration("").is_err());
    }

    #[test]
    fn role_round_trips_through_display() {
        for role in [UserRole::Patient, UserRole::Doctor, UserRole::Admin] {
            assert_eq!(UserRole::from(role.to_string().as_str()), role);
        }
    }

    #[test]
    fn response_omits_password_hash() {
        let user = User {
            id: Uuid::new_v4(),
            email: "a@b.c".into(),
            password_hash: "secret-hash".into(),
            full_name: "A".into(),
            role: UserRole::Patient,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_string(&UserResponse::from(user)).unwrap();
        assert!(!json.contains("secret-hash"));
    }
}
