use super::*;

/// Tests replacing the score of an existing grade.
///
/// Expected: Ok with the new score persisted
#[tokio::test]
async fn updates_score() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::student::create_student(db).await?;
    let subject = factory::subject::create_subject(db).await?;
    let created = factory::grade::GradeFactory::new(db, student.id, subject.id)
        .score(60.0)
        .build()
        .await?;

    let repo = GradeRepository::new(db);
    let updated = repo.update_score(created.id, 88.0).await?;

    assert_eq!(updated.unwrap().score, 88.0);

    let found = repo.find_by_pair(student.id, subject.id).await?;
    assert_eq!(found.unwrap().score, 88.0);

    Ok(())
}

/// Tests updating an id that does not resolve.
///
/// Expected: Ok(None) and nothing written
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_school_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GradeRepository::new(db);
    let updated = repo.update_score(9999, 88.0).await?;

    assert!(updated.is_none());
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
