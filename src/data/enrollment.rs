//! Enrollment data repository for roster rows.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

/// Repository providing database operations for subject rosters.
///
/// A roster is the ordered list of enrollment rows for a subject. Append
/// order is preserved by the auto-increment id, and duplicate
/// (subject, student) rows are allowed: enrolling twice appends twice.
/// Generic over the connection so it works on the pooled connection and
/// inside transactions alike.
pub struct EnrollmentRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EnrollmentRepository<'a, C> {
    /// Creates a new EnrollmentRepository instance.
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Appends a roster row for the given subject and student.
    ///
    /// No duplicate check: re-enrolling the same student appends another
    /// row.
    pub async fn create(
        &self,
        subject_id: i32,
        student_id: i32,
    ) -> Result<entity::enrollment::Model, DbErr> {
        entity::enrollment::ActiveModel {
            subject_id: ActiveValue::Set(subject_id),
            student_id: ActiveValue::Set(student_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets the roster rows for one subject in enrollment order.
    pub async fn get_by_subject(
        &self,
        subject_id: i32,
    ) -> Result<Vec<entity::enrollment::Model>, DbErr> {
        entity::prelude::Enrollment::find()
            .filter(entity::enrollment::Column::SubjectId.eq(subject_id))
            .order_by_asc(entity::enrollment::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets every roster row in enrollment order.
    ///
    /// Used when populating the full subject catalog in one query instead of
    /// one query per subject.
    pub async fn get_all(&self) -> Result<Vec<entity::enrollment::Model>, DbErr> {
        entity::prelude::Enrollment::find()
            .order_by_asc(entity::enrollment::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the roster rows a student appears in.
    pub async fn get_by_student(
        &self,
        student_id: i32,
    ) -> Result<Vec<entity::enrollment::Model>, DbErr> {
        entity::prelude::Enrollment::find()
            .filter(entity::enrollment::Column::StudentId.eq(student_id))
            .order_by_asc(entity::enrollment::Column::Id)
            .all(self.db)
            .await
    }

    /// Removes every roster row for a subject.
    ///
    /// Used by roster replacement (before inserting the new roster) and by
    /// subject deletion.
    pub async fn delete_by_subject(&self, subject_id: i32) -> Result<(), DbErr> {
        entity::prelude::Enrollment::delete_many()
            .filter(entity::enrollment::Column::SubjectId.eq(subject_id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
