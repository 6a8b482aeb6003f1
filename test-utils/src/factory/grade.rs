//! Grade factory for creating test grade entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test grades with customizable score.
///
/// The referenced student and subject ids are required because a grade is
/// meaningless without them; the score defaults to `85.0`.
pub struct GradeFactory<'a> {
    db: &'a DatabaseConnection,
    student_id: i32,
    subject_id: i32,
    score: f64,
}

impl<'a> GradeFactory<'a> {
    /// Creates a new GradeFactory for the given (student, subject) pair.
    pub fn new(db: &'a DatabaseConnection, student_id: i32, subject_id: i32) -> Self {
        Self {
            db,
            student_id,
            subject_id,
            score: 85.0,
        }
    }

    /// Sets the score for the grade.
    pub fn score(mut self, score: f64) -> Self {
        self.score = score;
        self
    }

    /// Builds and inserts the grade entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::grade::Model)` - Created grade entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::grade::Model, DbErr> {
        entity::grade::ActiveModel {
            student_id: ActiveValue::Set(self.student_id),
            subject_id: ActiveValue::Set(self.subject_id),
            score: ActiveValue::Set(self.score),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a grade with the default score.
pub async fn create_grade(
    db: &DatabaseConnection,
    student_id: i32,
    subject_id: i32,
) -> Result<entity::grade::Model, DbErr> {
    GradeFactory::new(db, student_id, subject_id).build().await
}
