use super::*;

/// Tests the set difference between enrolled and graded subjects.
///
/// A student enrolled in two subjects with a grade in one has exactly the
/// other subject pending.
///
/// Expected: Ok with only the ungraded subject
#[tokio::test]
async fn returns_enrolled_subjects_without_grade() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::student::create_student(db).await?;
    let math = factory::subject::create_subject(db).await?;
    let physics = factory::subject::create_subject(db).await?;
    factory::enrollment::enroll(db, math.id, student.id).await?;
    factory::enrollment::enroll(db, physics.id, student.id).await?;
    factory::grade::create_grade(db, student.id, math.id).await?;

    let service = GradeService::new(db);
    let pending = service.ungraded_subjects(student.id).await?;

    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, physics.id);

    Ok(())
}

/// Tests that duplicate enrollments collapse to one pending entry.
///
/// Expected: Ok with the subject listed once
#[tokio::test]
async fn collapses_duplicate_enrollments() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::student::create_student(db).await?;
    let subject = factory::subject::create_subject(db).await?;
    factory::enrollment::enroll(db, subject.id, student.id).await?;
    factory::enrollment::enroll(db, subject.id, student.id).await?;

    let service = GradeService::new(db);
    let pending = service.ungraded_subjects(student.id).await?;

    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, subject.id);

    Ok(())
}

/// Tests a student whose every enrollment has a grade.
///
/// Expected: Ok with empty result
#[tokio::test]
async fn returns_empty_when_fully_graded() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::student::create_student(db).await?;
    let subject = factory::subject::create_subject(db).await?;
    factory::enrollment::enroll(db, subject.id, student.id).await?;
    factory::grade::create_grade(db, student.id, subject.id).await?;

    let service = GradeService::new(db);
    let pending = service.ungraded_subjects(student.id).await?;

    assert!(pending.is_empty());

    Ok(())
}

/// Tests an enrollment whose subject has been deleted.
///
/// The dangling subject reference cannot be resolved, so it drops out of
/// the pending list instead of erroring.
///
/// Expected: Ok with the dangling subject absent
#[tokio::test]
async fn drops_dangling_subject_references() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::student::create_student(db).await?;
    let subject = factory::subject::create_subject(db).await?;
    factory::enrollment::enroll(db, subject.id, student.id).await?;
    factory::enrollment::enroll(db, 9999, student.id).await?;

    let service = GradeService::new(db);
    let pending = service.ungraded_subjects(student.id).await?;

    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, subject.id);

    Ok(())
}
