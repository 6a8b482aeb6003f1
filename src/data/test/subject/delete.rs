use super::*;

/// Tests deleting a subject.
///
/// Expected: Ok with the record gone afterwards
#[tokio::test]
async fn deletes_subject() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Subject)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::subject::create_subject(db).await?;

    let repo = SubjectRepository::new(db);
    repo.delete(created.id).await?;

    assert!(repo.find_by_id(created.id).await?.is_none());

    Ok(())
}

/// Tests deleting an id that does not resolve.
///
/// Expected: Ok
#[tokio::test]
async fn is_idempotent_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Subject)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SubjectRepository::new(db);
    repo.delete(9999).await?;

    Ok(())
}
