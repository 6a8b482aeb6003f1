//! Credential data repository for database operations.
//!
//! The salt and hash columns never leave the data and service layers;
//! reads used for verification return the entity model, while creation
//! returns the secret-free domain model.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::model::auth::Credential;

/// Repository providing database operations for stored credentials.
///
/// Generic over the connection so it works on the pooled connection and
/// inside transactions alike.
pub struct CredentialRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CredentialRepository<'a, C> {
    /// Creates a new CredentialRepository instance.
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new credential with pre-hashed secret material.
    ///
    /// # Arguments
    /// - `email` - Login email for the credential
    /// - `password_salt` - Hex-encoded random salt
    /// - `password_hash` - Hex-encoded salted digest
    ///
    /// # Returns
    /// - `Ok(Credential)` - The persisted credential without secret columns
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        email: String,
        password_salt: String,
        password_hash: String,
    ) -> Result<Credential, DbErr> {
        let entity = entity::credential::ActiveModel {
            email: ActiveValue::Set(email),
            password_salt: ActiveValue::Set(password_salt),
            password_hash: ActiveValue::Set(password_hash),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Credential::from_entity(entity))
    }

    /// Finds a credential by exact email match, including secret material.
    ///
    /// Returns the raw entity so the service can verify a password attempt
    /// against the stored salt and hash.
    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::credential::Model>, DbErr> {
        entity::prelude::Credential::find()
            .filter(entity::credential::Column::Email.eq(email))
            .one(self.db)
            .await
    }
}
