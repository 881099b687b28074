use super::*;

/// Tests looking up the credential of a registered email.
///
/// Expected: Found with the stored bcrypt hash, which verifies against the
/// factory's plain-text password
#[tokio::test]
async fn returns_credential_for_known_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("carol@example.com")
        .password("secret")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let lookup = repo.verify_credential("carol@example.com").await?;

    let CredentialLookup::Found(credential) = lookup else {
        panic!("expected credential to be found");
    };
    assert_eq!(credential.user.id, user.id);
    assert!(bcrypt::verify("secret", &credential.password_hash).unwrap());

    Ok(())
}

/// Tests looking up an unknown email.
///
/// Expected: NotFound
#[tokio::test]
async fn returns_not_found_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let lookup = repo.verify_credential("ghost@example.com").await?;

    assert_eq!(lookup, CredentialLookup::NotFound);

    Ok(())
}
