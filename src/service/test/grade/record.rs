use crate::data::grade::GradeRepository;
use crate::error::grade::GradeError;
use crate::model::grade::RecordGradeParam;

use super::*;

/// Tests recording a grade for an ungraded pair.
///
/// Expected: Ok with the grade stored
#[tokio::test]
async fn records_grade() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::student::create_student(db).await?;
    let subject = factory::subject::create_subject(db).await?;

    let service = GradeService::new(db);
    let grade = service
        .record(RecordGradeParam {
            student_id: student.id,
            subject_id: subject.id,
            score: 91.5,
        })
        .await?;

    assert_eq!(grade.score, 91.5);

    Ok(())
}

/// Tests that a second grade for the same pair is refused.
///
/// The first call mutates state; the second fails without touching the
/// stored grade.
///
/// Expected: Err(Duplicate) with exactly one grade in storage
#[tokio::test]
async fn rejects_second_grade_for_pair() {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::student::create_student(db).await.unwrap();
    let subject = factory::subject::create_subject(db).await.unwrap();

    let service = GradeService::new(db);
    service
        .record(RecordGradeParam {
            student_id: student.id,
            subject_id: subject.id,
            score: 91.5,
        })
        .await
        .unwrap();

    let result = service
        .record(RecordGradeParam {
            student_id: student.id,
            subject_id: subject.id,
            score: 40.0,
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::GradeErr(GradeError::Duplicate))
    ));

    let stored = GradeRepository::new(db).get_all().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].score, 91.5);
}

/// Tests that the same student can be graded in a different subject.
///
/// Uniqueness is per (student, subject) pair, not per student.
///
/// Expected: Ok for each distinct pair
#[tokio::test]
async fn allows_grades_across_subjects() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::student::create_student(db).await?;
    let math = factory::subject::create_subject(db).await?;
    let physics = factory::subject::create_subject(db).await?;

    let service = GradeService::new(db);
    service
        .record(RecordGradeParam {
            student_id: student.id,
            subject_id: math.id,
            score: 80.0,
        })
        .await?;
    service
        .record(RecordGradeParam {
            student_id: student.id,
            subject_id: physics.id,
            score: 70.0,
        })
        .await?;

    assert_eq!(GradeRepository::new(db).get_all().await?.len(), 2);

    Ok(())
}
