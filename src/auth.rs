//! Sign-in and registration glue around the external identity collaborators.
//!
//! Nothing here talks to a network or hashes a password itself: the identity
//! provider, the password hasher and the user store are capabilities supplied
//! by the caller. Failed sign-ins never reveal whether the email exists.

use crate::constants::{ERROR_INVALID_CREDENTIALS, PASSWORD_HASH_COST};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Provider id used for email/password sign-in
pub const CREDENTIALS_PROVIDER: &str = "credentials";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    fn validate(&self) -> Result<(), AuthError> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err(AuthError::MissingFields);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub email: String,
    pub token: String,
}

/// What the identity provider answers to a sign-in attempt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignInResponse {
    pub error: Option<String>,
    pub session: Option<Session>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("{}", ERROR_INVALID_CREDENTIALS)]
    InvalidCredentials,
    #[error("Email and password are required")]
    MissingFields,
    #[error("Sign-in with {0} failed")]
    OAuth(String),
    #[error("User already exists")]
    UserExists,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_in(&self, provider_id: &str, credentials: Option<&Credentials>) -> SignInResponse;
}

pub trait PasswordHasher: Send + Sync {
    fn hash(&self, plaintext: &str, cost: u32) -> String;
    fn compare(&self, plaintext: &str, digest: &str) -> bool;
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_user_by_email(&self, email: &str) -> Option<User>;
    async fn create_user(&self, name: &str, email: &str, password_hash: &str) -> User;
}

/// Email/password sign-in; every provider failure becomes the generic message
pub async fn sign_in_with_password<P: IdentityProvider + ?Sized>(
    provider: &P,
    credentials: &Credentials,
) -> Result<Session, AuthError> {
    credentials.validate()?;

    let response = provider.sign_in(CREDENTIALS_PROVIDER, Some(credentials)).await;
    match response {
        SignInResponse {
            error: None,
            session: Some(session),
        } => Ok(session),
        SignInResponse { error, .. } => {
            log::info!("Credential sign-in rejected ({})", error.as_deref().unwrap_or("no session"));
            Err(AuthError::InvalidCredentials)
        }
    }
}

pub async fn sign_in_with_oauth<P: IdentityProvider + ?Sized>(provider: &P, provider_id: &str) -> Result<Session, AuthError> {
    let response = provider.sign_in(provider_id, None).await;
    match response {
        SignInResponse {
            error: None,
            session: Some(session),
        } => Ok(session),
        SignInResponse { error, .. } => {
            log::info!(
                "OAuth sign-in with {} failed ({})",
                provider_id,
                error.as_deref().unwrap_or("no session")
            );
            Err(AuthError::OAuth(provider_id.to_string()))
        }
    }
}

/// Credentials-provider callback: unknown email and wrong password look the same
pub async fn authorize<S, H>(store: &S, hasher: &H, credentials: &Credentials) -> Option<User>
where
    S: UserStore + ?Sized,
    H: PasswordHasher + ?Sized,
{
    credentials.validate().ok()?;
    let user = store.find_user_by_email(&credentials.email).await?;
    hasher.compare(&credentials.password, &user.password_hash).then_some(user)
}

pub async fn register<S, H>(store: &S, hasher: &H, name: &str, credentials: &Credentials) -> Result<User, AuthError>
where
    S: UserStore + ?Sized,
    H: PasswordHasher + ?Sized,
{
    credentials.validate()?;
    if store.find_user_by_email(&credentials.email).await.is_some() {
        return Err(AuthError::UserExists);
    }

    let digest = hasher.hash(&credentials.password, PASSWORD_HASH_COST);
    let user = store.create_user(name, &credentials.email, &digest).await;
    log::info!("Registered user {}", user.id);
    Ok(user)
}
