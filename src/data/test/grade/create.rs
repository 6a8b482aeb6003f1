use sea_orm::{ConnectionTrait, SqlErr};
use test_utils::builder::grade_unique_index_sql;

use super::*;

/// Tests recording a grade.
///
/// Expected: Ok with the score persisted for the pair
#[tokio::test]
async fn creates_grade() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::student::create_student(db).await?;
    let subject = factory::subject::create_subject(db).await?;

    let repo = GradeRepository::new(db);
    let grade = repo.create(record_param(student.id, subject.id, 91.5)).await?;

    assert!(grade.id > 0);
    assert_eq!(grade.student_id, student.id);
    assert_eq!(grade.subject_id, subject.id);
    assert_eq!(grade.score, 91.5);

    Ok(())
}

/// Tests that the unique pair index rejects a second grade.
///
/// The index is what makes the insert the atomic arbiter of uniqueness
/// under concurrent requests, so the violation must surface as a
/// recognizable `SqlErr`.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    db.execute_unprepared(grade_unique_index_sql()).await?;

    let student = factory::student::create_student(db).await?;
    let subject = factory::subject::create_subject(db).await?;

    let repo = GradeRepository::new(db);
    repo.create(record_param(student.id, subject.id, 91.5)).await?;

    let err = repo
        .create(record_param(student.id, subject.id, 75.0))
        .await
        .unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

/// Tests that a grade does not require the referenced records to exist.
///
/// Expected: Ok with the dangling grade stored
#[tokio::test]
async fn allows_dangling_references() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GradeRepository::new(db);
    let grade = repo.create(record_param(9998, 9999, 50.0)).await?;

    assert_eq!(grade.student_id, 9998);
    assert_eq!(grade.subject_id, 9999);

    Ok(())
}
