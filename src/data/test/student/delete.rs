use super::*;

/// Tests deleting a student.
///
/// Expected: Ok with the record gone afterwards
#[tokio::test]
async fn deletes_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::student::create_student(db).await?;

    let repo = StudentRepository::new(db);
    repo.delete(created.id).await?;

    assert!(repo.find_by_id(created.id).await?.is_none());

    Ok(())
}

/// Tests deleting an id that does not resolve.
///
/// Delete is idempotent, so an unknown id is not an error.
///
/// Expected: Ok
#[tokio::test]
async fn is_idempotent_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    repo.delete(9999).await?;

    Ok(())
}
