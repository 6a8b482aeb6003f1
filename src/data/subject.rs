//! Subject data repository for database operations.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::model::subject::Subject;

/// Repository providing database operations for the subject catalog.
///
/// Roster rows live in the enrollment table and are managed by
/// `EnrollmentRepository`; this repository only touches the subject record
/// itself. Generic over the connection so it works on the pooled connection
/// and inside transactions alike.
pub struct SubjectRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SubjectRepository<'a, C> {
    /// Creates a new SubjectRepository instance.
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new subject with an empty roster.
    ///
    /// # Returns
    /// - `Ok(Subject)` - The persisted subject with its generated id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, name: String) -> Result<Subject, DbErr> {
        let entity = entity::subject::ActiveModel {
            name: ActiveValue::Set(name),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Subject::from_entity(entity))
    }

    /// Gets all subjects in natural storage order.
    pub async fn get_all(&self) -> Result<Vec<Subject>, DbErr> {
        let entities = entity::prelude::Subject::find().all(self.db).await?;

        Ok(entities.into_iter().map(Subject::from_entity).collect())
    }

    /// Finds a subject by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Subject>, DbErr> {
        let entity = entity::prelude::Subject::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Subject::from_entity))
    }

    /// Finds subjects for a set of ids.
    ///
    /// Ids that no longer resolve are absent from the result; callers doing
    /// reference resolution treat those as dangling.
    pub async fn find_by_ids(&self, ids: Vec<i32>) -> Result<Vec<Subject>, DbErr> {
        use sea_orm::{ColumnTrait, QueryFilter};

        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Subject::find()
            .filter(entity::subject::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Subject::from_entity).collect())
    }

    /// Renames a subject.
    ///
    /// # Returns
    /// - `Ok(Some(Subject))` - The renamed subject
    /// - `Ok(None)` - No subject with that id
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update_name(&self, id: i32, name: String) -> Result<Option<Subject>, DbErr> {
        let Some(subject) = entity::prelude::Subject::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::subject::ActiveModel = subject.into();
        active_model.name = ActiveValue::Set(name);

        let updated = active_model.update(self.db).await?;

        Ok(Some(Subject::from_entity(updated)))
    }

    /// Deletes a subject record.
    ///
    /// Idempotent. Grades referencing the subject are left in place; roster
    /// rows are removed separately by the service through
    /// `EnrollmentRepository::delete_by_subject`.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Subject::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
