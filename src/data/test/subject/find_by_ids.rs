use super::*;

/// Tests batch lookup by id set.
///
/// Ids that no longer resolve are simply absent so callers can detect
/// dangling references.
///
/// Expected: Ok with only the resolvable subjects
#[tokio::test]
async fn skips_unresolvable_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Subject)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let math = factory::subject::create_subject(db).await?;

    let repo = SubjectRepository::new(db);
    let found = repo.find_by_ids(vec![math.id, 9999]).await?;

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, math.id);

    Ok(())
}

/// Tests batch lookup with an empty id set.
///
/// Expected: Ok with empty vector and no query issued
#[tokio::test]
async fn returns_empty_for_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Subject)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SubjectRepository::new(db);
    let found = repo.find_by_ids(Vec::new()).await?;

    assert!(found.is_empty());

    Ok(())
}
