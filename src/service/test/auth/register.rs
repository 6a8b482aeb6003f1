use crate::data::credential::CredentialRepository;

use super::*;

/// Tests registering a credential.
///
/// The stored row must not contain the password itself; only the salted
/// hash is persisted, and the original password still verifies through the
/// login path.
///
/// Expected: Ok with hashed storage and a working login
#[tokio::test]
async fn stores_hashed_credential() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Credential)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    let credential = service
        .register(RegisterParam {
            email: "teacher@example.com".to_string(),
            password: "s3cret!".to_string(),
        })
        .await?;

    assert_eq!(credential.email, "teacher@example.com");

    let stored = CredentialRepository::new(db)
        .find_by_email("teacher@example.com")
        .await?
        .unwrap();
    assert_ne!(stored.password_hash, "s3cret!");
    assert!(!stored.password_salt.is_empty());

    service
        .authenticate(attempt("teacher@example.com", "s3cret!"))
        .await?;

    Ok(())
}

/// Tests that each registration draws a fresh salt.
///
/// Two credentials with the same password end up with different hashes.
///
/// Expected: Ok with distinct salt and hash per credential
#[tokio::test]
async fn salts_each_credential_independently() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Credential)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    service
        .register(RegisterParam {
            email: "first@example.com".to_string(),
            password: "same-password".to_string(),
        })
        .await?;
    service
        .register(RegisterParam {
            email: "second@example.com".to_string(),
            password: "same-password".to_string(),
        })
        .await?;

    let repo = CredentialRepository::new(db);
    let first = repo.find_by_email("first@example.com").await?.unwrap();
    let second = repo.find_by_email("second@example.com").await?.unwrap();

    assert_ne!(first.password_salt, second.password_salt);
    assert_ne!(first.password_hash, second.password_hash);

    Ok(())
}
