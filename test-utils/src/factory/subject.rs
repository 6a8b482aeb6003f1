//! Subject factory for creating test subject entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test subjects with customizable fields.
pub struct SubjectFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> SubjectFactory<'a> {
    /// Creates a new SubjectFactory with a default `"Subject {id}"` name.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Subject {}", id),
        }
    }

    /// Sets the name for the subject.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the subject entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::subject::Model)` - Created subject entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::subject::Model, DbErr> {
        entity::subject::ActiveModel {
            name: ActiveValue::Set(self.name),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a subject with default values.
pub async fn create_subject(db: &DatabaseConnection) -> Result<entity::subject::Model, DbErr> {
    SubjectFactory::new(db).build().await
}
