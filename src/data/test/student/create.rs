use super::*;

/// Tests creating a student record.
///
/// Verifies that the repository persists the supplied fields and that the
/// storage assigns a generated id.
///
/// Expected: Ok with student created
#[tokio::test]
async fn creates_student_with_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let student = repo
        .create(create_param("Ada Lovelace", 17, "ada@example.com"))
        .await?;

    assert!(student.id > 0);
    assert_eq!(student.name, "Ada Lovelace");
    assert_eq!(student.age, 17);
    assert_eq!(student.email, "ada@example.com");

    Ok(())
}

/// Tests that email is not unique.
///
/// The directory applies no uniqueness check on email, so two students may
/// share an address.
///
/// Expected: Ok with both students created
#[tokio::test]
async fn allows_duplicate_emails() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let first = repo
        .create(create_param("Ada", 17, "shared@example.com"))
        .await?;
    let second = repo
        .create(create_param("Grace", 18, "shared@example.com"))
        .await?;

    assert_ne!(first.id, second.id);
    assert_eq!(first.email, second.email);

    Ok(())
}
