use super::*;

/// Tests renaming a subject.
///
/// Expected: Ok with the new name persisted
#[tokio::test]
async fn renames_subject() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Subject)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::subject::SubjectFactory::new(db)
        .name("Maths")
        .build()
        .await?;

    let repo = SubjectRepository::new(db);
    let renamed = repo
        .update_name(created.id, "Mathematics".to_string())
        .await?;

    assert_eq!(renamed.unwrap().name, "Mathematics");

    Ok(())
}

/// Tests renaming an id that does not resolve.
///
/// Expected: Ok(None) and nothing created
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Subject)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SubjectRepository::new(db);
    let renamed = repo.update_name(9999, "Mathematics".to_string()).await?;

    assert!(renamed.is_none());
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
