//! Grade data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::model::grade::{Grade, RecordGradeParam};

/// Repository providing database operations for the grade book.
///
/// Generic over the connection so it works on the pooled connection and
/// inside transactions alike.
pub struct GradeRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GradeRepository<'a, C> {
    /// Creates a new GradeRepository instance.
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new grade row.
    ///
    /// The unique index on (student_id, subject_id) makes this insert the
    /// atomic arbiter of grade uniqueness: a duplicate insert fails with a
    /// unique constraint violation, which the service maps to the duplicate
    /// business error.
    ///
    /// # Returns
    /// - `Ok(Grade)` - The persisted grade with its generated id
    /// - `Err(DbErr)` - Constraint violation or other database error
    pub async fn create(&self, param: RecordGradeParam) -> Result<Grade, DbErr> {
        let entity = entity::grade::ActiveModel {
            student_id: ActiveValue::Set(param.student_id),
            subject_id: ActiveValue::Set(param.subject_id),
            score: ActiveValue::Set(param.score),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Grade::from_entity(entity))
    }

    /// Finds the grade for an exact (student, subject) pair, if any.
    pub async fn find_by_pair(
        &self,
        student_id: i32,
        subject_id: i32,
    ) -> Result<Option<Grade>, DbErr> {
        let entity = entity::prelude::Grade::find()
            .filter(entity::grade::Column::StudentId.eq(student_id))
            .filter(entity::grade::Column::SubjectId.eq(subject_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Grade::from_entity))
    }

    /// Gets all grades in natural storage order.
    pub async fn get_all(&self) -> Result<Vec<Grade>, DbErr> {
        let entities = entity::prelude::Grade::find().all(self.db).await?;

        Ok(entities.into_iter().map(Grade::from_entity).collect())
    }

    /// Gets all grades recorded for one student.
    pub async fn get_by_student(&self, student_id: i32) -> Result<Vec<Grade>, DbErr> {
        let entities = entity::prelude::Grade::find()
            .filter(entity::grade::Column::StudentId.eq(student_id))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Grade::from_entity).collect())
    }

    /// Updates the score of an existing grade.
    ///
    /// # Returns
    /// - `Ok(Some(Grade))` - The updated grade
    /// - `Ok(None)` - No grade with that id; nothing was written
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update_score(&self, id: i32, score: f64) -> Result<Option<Grade>, DbErr> {
        let Some(grade) = entity::prelude::Grade::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::grade::ActiveModel = grade.into();
        active_model.score = ActiveValue::Set(score);

        let updated = active_model.update(self.db).await?;

        Ok(Some(Grade::from_entity(updated)))
    }

    /// Deletes a grade record.
    ///
    /// Idempotent: deleting an id that does not exist is still a success.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Grade::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
