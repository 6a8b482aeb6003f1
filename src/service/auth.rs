//! Credential service for login checks and registration.
//!
//! The observable contract of authentication is an exact-match check: a
//! login succeeds iff a credential exists for exactly that email whose
//! stored hash verifies against exactly that password. Storage uses salted
//! hashing rather than plaintext comparison.

use sea_orm::DatabaseConnection;

use crate::{
    data::credential::CredentialRepository,
    error::{auth::AuthError, AppError},
    model::auth::{AuthenticateParam, Credential, RegisterParam},
    util::hash,
};

/// Service providing business logic for credential checks.
pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks a login attempt against stored credentials.
    ///
    /// Both an unknown email and a wrong password produce the same error so
    /// the response does not reveal which part failed.
    ///
    /// # Returns
    /// - `Ok(())` - The attempt matched a stored credential exactly
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - No match
    pub async fn authenticate(&self, param: AuthenticateParam) -> Result<(), AppError> {
        let Some(credential) = CredentialRepository::new(self.db)
            .find_by_email(&param.email)
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !hash::verify_password(
            &credential.password_salt,
            &credential.password_hash,
            &param.password,
        ) {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(())
    }

    /// Registers a new credential with a fresh salt.
    pub async fn register(&self, param: RegisterParam) -> Result<Credential, AppError> {
        let salt = hash::generate_salt();
        let password_hash = hash::hash_password(&salt, &param.password);

        let credential = CredentialRepository::new(self.db)
            .create(param.email, salt, password_hash)
            .await?;

        Ok(credential)
    }
}
