use super::*;

/// Tests creating a subject.
///
/// Expected: Ok with the name persisted and a generated id
#[tokio::test]
async fn creates_subject() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Subject)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SubjectRepository::new(db);
    let subject = repo.create("Mathematics".to_string()).await?;

    assert!(subject.id > 0);
    assert_eq!(subject.name, "Mathematics");

    Ok(())
}

/// Tests that subject names are not unique.
///
/// Expected: Ok with two subjects sharing a name
#[tokio::test]
async fn allows_duplicate_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Subject)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SubjectRepository::new(db);
    let first = repo.create("Mathematics".to_string()).await?;
    let second = repo.create("Mathematics".to_string()).await?;

    assert_ne!(first.id, second.id);

    Ok(())
}
