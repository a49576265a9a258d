//! Authentication service - registration, login, and token handling.
//!
//! Issues and verifies the stateless session token: a signed JWT
//! embedding {sub, email, role} with a fixed expiry. Validity is
//! purely cryptographic plus expiry; there is no revocation list.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::config::Config;
use crate::domain::{Password, User, UserRole};
use crate::errors::{AppError, AppResult};
use crate::infra::{UnitOfWork, UserRepository};

/// JWT claims payload
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

/// Successful login: the signed token plus the authenticated user.
#[derive(Debug)]
pub struct LoginResult {
    pub token: String,
    pub user: User,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user with a client-assignable role
    async fn register(
        &self,
        full_name: String,
        email: String,
        password: String,
        role: UserRole,
    ) -> AppResult<User>;

    /// Login and return a signed session token
    async fn login(&self, email: String, password: String) -> AppResult<LoginResult>;

    /// Verify a session token and extract its claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

/// Generate a signed session token for a user
fn generate_token(user: &User, config: &Config) -> AppResult<String> {
    let now = Utc::now();
    let expires_at = now + Duration::hours(config.jwt_expiration_hours);

    let claims = Claims {
        sub: user.id,
        email: user.email.clone(),
        role: user.role.to_string(),
        exp: expires_at.timestamp(),
        iat: now.timestamp(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret_bytes()),
    )
    .map_err(|e| AppError::internal(format!("Token signing failed: {}", e)))?;

    Ok(token)
}

/// Concrete implementation of AuthService.
pub struct Authenticator<U: UnitOfWork> {
    uow: Arc<U>,
    config: Config,
}

impl<U: UnitOfWork> Authenticator<U> {
    /// Create new auth service instance
    pub fn new(uow: Arc<U>, config: Config) -> Self {
        Self { uow, config }
    }
}

#[async_trait]
impl<U: UnitOfWork> AuthService for Authenticator<U> {
    async fn register(
        &self,
        full_name: String,
        email: String,
        password: String,
        role: UserRole,
    ) -> AppResult<User> {
        // Admin accounts are provisioned out of band, never self-registered
        if role.is_admin() {
            return Err(AppError::validation("Role must be patient or doctor"));
        }

        // Friendly fast-path check; the unique email column is the
        // authoritative guard against concurrent duplicates.
        if self.uow.users().find_by_email(&email).await?.is_some() {
            return Err(AppError::DuplicateEmail);
        }

        let password_hash = Password::new(&password)?.into_string();
        self.uow
            .users()
            .create(full_name, email, password_hash, role)
            .await
    }

    async fn login(&self, email: String, password: String) -> AppResult<LoginResult> {
        let user_result = self.uow.users().find_by_email(&email).await?;

        // Verify against a dummy hash when the user is absent so the
        // unknown-email and wrong-password paths are indistinguishable,
        // in both response and timing.
        let dummy_hash =
            "$argon2id$v=19$m=19456,t=2,p=1$dummysalt123456$dummyhash1234567890123456789012";

        let (password_hash, user_exists) = match &user_result {
            Some(user) => (user.password_hash.as_str(), true),
            None => (dummy_hash, false),
        };

        let password_valid = Password::from_hash(password_hash.to_string()).verify(&password);

        if !user_exists || !password_valid {
            return Err(AppError::InvalidCredentials);
        }

        // user_exists was checked above
        let user = user_result.ok_or(AppError::InvalidCredentials)?;
        let token = generate_token(&user, &self.config)?;

        Ok(LoginResult { token, user })
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }
}
