//! Authentication service unit tests.

use std::sync::Arc;

use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use mockall::predicate::eq;
use serde_json::json;
use uuid::Uuid;

use mediviz::config::Config;
use mediviz::domain::{Password, User, UserRole};
use mediviz::errors::AppError;
use mediviz::infra::repositories::{
    MockAppointmentRepository, MockDoctorRepository, MockUserRepository,
};
use mediviz::infra::{
    AppointmentRepository, DoctorRepository, UnitOfWork, UserRepository,
};
use mediviz::services::{AuthService, Authenticator};

/// Test mock for UnitOfWork that wraps mock repositories
struct TestUnitOfWork {
    user_repo: Arc<MockUserRepository>,
    doctor_repo: Arc<MockDoctorRepository>,
    appointment_repo: Arc<MockAppointmentRepository>,
}

impl TestUnitOfWork {
    fn new(user_repo: MockUserRepository) -> Self {
        Self {
            user_repo: Arc::new(user_repo),
            doctor_repo: Arc::new(MockDoctorRepository::new()),
            appointment_repo: Arc::new(MockAppointmentRepository::new()),
        }
    }
}

impl UnitOfWork for TestUnitOfWork {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn doctors(&self) -> Arc<dyn DoctorRepository> {
        self.doctor_repo.clone()
    }

    fn appointments(&self) -> Arc<dyn AppointmentRepository> {
        self.appointment_repo.clone()
    }
}

fn test_config() -> Config {
    Config::for_tests("test-secret-key-for-testing-only-32ch")
}

fn test_user(email: &str, password: &str, role: UserRole) -> User {
    User {
        id: Uuid::new_v4(),
        email: email.to_string(),
        password_hash: Password::new(password).unwrap().into_string(),
        full_name: "Test User".to_string(),
        role,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn authenticator(repo: MockUserRepository) -> Authenticator<TestUnitOfWork> {
    Authenticator::new(Arc::new(TestUnitOfWork::new(repo)), test_config())
}

// =============================================================================
// Registration
// =============================================================================

#[tokio::test]
async fn register_stores_hash_not_plaintext() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_email()
        .with(eq("new@example.com"))
        .returning(|_| Ok(None));
    repo.expect_create()
        .withf(|_, _, hash, _| {
            hash.as_str() != "plaintext-pw-123"
                && Password::from_hash(hash.to_string()).verify("plaintext-pw-123")
        })
        .returning(|full_name, email, password_hash, role| {
            Ok(User {
                id: Uuid::new_v4(),
                email,
                password_hash,
                full_name,
                role,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            })
        });

    let service = authenticator(repo);
    let user = service
        .register(
            "New User".to_string(),
            "new@example.com".to_string(),
            "plaintext-pw-123".to_string(),
            UserRole::Patient,
        )
        .await
        .unwrap();

    assert_eq!(user.email, "new@example.com");
    assert_eq!(user.role, UserRole::Patient);
}

#[tokio::test]
async fn register_rejects_admin_role_before_touching_storage() {
    // No expectations set: any repository call would panic
    let service = authenticator(MockUserRepository::new());

    let err = service
        .register(
            "Sneaky".to_string(),
            "admin@example.com".to_string(),
            "password123".to_string(),
            UserRole::Admin,
        )
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn register_rejects_duplicate_email() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_email()
        .with(eq("taken@example.com"))
        .returning(|_| Ok(Some(test_user("taken@example.com", "password123", UserRole::Patient))));

    let service = authenticator(repo);
    let err = service
        .register(
            "Jane".to_string(),
            "taken@example.com".to_string(),
            "password123".to_string(),
            UserRole::Patient,
        )
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::DuplicateEmail));
}

// =============================================================================
// Login and Tokens
// =============================================================================

#[tokio::test]
async fn login_issues_token_that_verifies_back_to_the_user() {
    let user = test_user("doc@example.com", "correct-password", UserRole::Doctor);
    let user_id = user.id;

    let mut repo = MockUserRepository::new();
    repo.expect_find_by_email()
        .with(eq("doc@example.com"))
        .returning(move |_| Ok(Some(user.clone())));

    let service = authenticator(repo);
    let result = service
        .login("doc@example.com".to_string(), "correct-password".to_string())
        .await
        .unwrap();

    let claims = service.verify_token(&result.token).unwrap();
    assert_eq!(claims.sub, user_id);
    assert_eq!(claims.email, "doc@example.com");
    assert_eq!(claims.role, "doctor");
    // One hour expiry
    assert!(claims.exp - claims.iat == 3600);
}

#[tokio::test]
async fn login_failures_are_indistinguishable() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_email()
        .with(eq("nobody@example.com"))
        .returning(|_| Ok(None));
    repo.expect_find_by_email()
        .with(eq("jane@example.com"))
        .returning(|_| Ok(Some(test_user("jane@example.com", "right-password", UserRole::Patient))));

    let service = authenticator(repo);

    let unknown_email = service
        .login("nobody@example.com".to_string(), "whatever123".to_string())
        .await
        .unwrap_err();
    let wrong_password = service
        .login("jane@example.com".to_string(), "wrong-password".to_string())
        .await
        .unwrap_err();

    assert!(matches!(unknown_email, AppError::InvalidCredentials));
    assert!(matches!(wrong_password, AppError::InvalidCredentials));
    assert_eq!(unknown_email.to_string(), wrong_password.to_string());
}

#[tokio::test]
async fn expired_token_is_rejected() {
    let config = test_config();
    let now = Utc::now().timestamp();
    // Expired well past the default 60s decoding leeway
    let claims = json!({
        "sub": Uuid::new_v4(),
        "email": "old@example.com",
        "role": "patient",
        "exp": now - 7200,
        "iat": now - 10800,
    });
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret_bytes()),
    )
    .unwrap();

    let service = authenticator(MockUserRepository::new());
    let err = service.verify_token(&token).unwrap_err();
    assert!(matches!(err, AppError::TokenInvalid));
}

#[tokio::test]
async fn token_signed_with_another_secret_is_rejected() {
    let now = Utc::now().timestamp();
    let claims = json!({
        "sub": Uuid::new_v4(),
        "email": "forged@example.com",
        "role": "admin",
        "exp": now + 3600,
        "iat": now,
    });
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"a-completely-different-secret-key-32c"),
    )
    .unwrap();

    let service = authenticator(MockUserRepository::new());
    let err = service.verify_token(&token).unwrap_err();
    assert!(matches!(err, AppError::TokenInvalid));
}
