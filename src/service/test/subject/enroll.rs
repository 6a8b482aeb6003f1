use super::*;

/// Tests enrolling a student into a subject.
///
/// Expected: Ok with the student on the returned roster
#[tokio::test]
async fn adds_student_to_roster() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let subject = factory::subject::create_subject(db).await?;
    let student = factory::student::create_student(db).await?;

    let service = SubjectService::new(db);
    let populated = service.enroll(subject.id, student.id).await?;

    assert_eq!(populated.students.len(), 1);
    assert_eq!(populated.students[0].id, student.id);

    Ok(())
}

/// Tests that enrolling the same student twice grows the roster by two.
///
/// Enrollment is append-only without deduplication.
///
/// Expected: Ok with two roster entries for the student
#[tokio::test]
async fn appends_duplicate_enrollment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let subject = factory::subject::create_subject(db).await?;
    let student = factory::student::create_student(db).await?;

    let service = SubjectService::new(db);
    service.enroll(subject.id, student.id).await?;
    let populated = service.enroll(subject.id, student.id).await?;

    assert_eq!(populated.students.len(), 2);
    assert_eq!(populated.students[0].id, student.id);
    assert_eq!(populated.students[1].id, student.id);

    Ok(())
}

/// Tests that the returned roster is scoped to the enrolled subject.
///
/// Population after enroll reads only that subject's roster rows, so other
/// subjects' enrollments never leak into the response.
///
/// Expected: Ok with only the target subject's roster
#[tokio::test]
async fn scopes_returned_roster_to_subject() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let math = factory::subject::create_subject(db).await?;
    let physics = factory::subject::create_subject(db).await?;
    let ada = factory::student::create_student(db).await?;
    let grace = factory::student::create_student(db).await?;
    factory::enrollment::enroll(db, physics.id, grace.id).await?;

    let service = SubjectService::new(db);
    let populated = service.enroll(math.id, ada.id).await?;

    assert_eq!(populated.id, math.id);
    assert_eq!(populated.students.len(), 1);
    assert_eq!(populated.students[0].id, ada.id);

    Ok(())
}

/// Tests enrolling into a subject that does not exist.
///
/// Expected: Err(NotFound) and no roster row created
#[tokio::test]
async fn rejects_unknown_subject() {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::student::create_student(db).await.unwrap();

    let service = SubjectService::new(db);
    let result = service.enroll(9999, student.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    let rows = crate::data::enrollment::EnrollmentRepository::new(db)
        .get_all()
        .await
        .unwrap();
    assert!(rows.is_empty());
}
