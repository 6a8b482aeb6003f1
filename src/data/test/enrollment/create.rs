use super::*;

/// Tests appending a roster row.
///
/// Expected: Ok with the row referencing the given subject and student
#[tokio::test]
async fn appends_roster_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let subject = factory::subject::create_subject(db).await?;
    let student = factory::student::create_student(db).await?;

    let repo = EnrollmentRepository::new(db);
    let row = repo.create(subject.id, student.id).await?;

    assert_eq!(row.subject_id, subject.id);
    assert_eq!(row.student_id, student.id);

    Ok(())
}

/// Tests that enrolling the same student twice appends twice.
///
/// Rosters carry no uniqueness constraint, so a duplicate enrollment is a
/// second row rather than a no-op.
///
/// Expected: Ok with two rows for the pair
#[tokio::test]
async fn allows_duplicate_enrollment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let subject = factory::subject::create_subject(db).await?;
    let student = factory::student::create_student(db).await?;

    let repo = EnrollmentRepository::new(db);
    repo.create(subject.id, student.id).await?;
    repo.create(subject.id, student.id).await?;

    let roster = repo.get_by_subject(subject.id).await?;
    assert_eq!(roster.len(), 2);

    Ok(())
}

/// Tests that a roster row does not require the student to exist.
///
/// References are not enforced, so rows can point at ids that never
/// resolved or were deleted later.
///
/// Expected: Ok with the dangling row stored
#[tokio::test]
async fn allows_dangling_student_reference() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let subject = factory::subject::create_subject(db).await?;

    let repo = EnrollmentRepository::new(db);
    let row = repo.create(subject.id, 9999).await?;

    assert_eq!(row.student_id, 9999);

    Ok(())
}
