//! Enrollment factory for seeding roster rows.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a roster row enrolling `student_id` into `subject_id`.
///
/// Duplicate rows are allowed, matching the append-only roster semantics.
pub async fn enroll(
    db: &DatabaseConnection,
    subject_id: i32,
    student_id: i32,
) -> Result<entity::enrollment::Model, DbErr> {
    entity::enrollment::ActiveModel {
        subject_id: ActiveValue::Set(subject_id),
        student_id: ActiveValue::Set(student_id),
        ..Default::default()
    }
    .insert(db)
    .await
}
