use super::*;

/// Tests looking up login credentials by email.
///
/// Expected: Ok(Some) with the character's ID and stored hash
#[tokio::test]
async fn finds_credentials_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_character_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::character::CharacterFactory::new(db)
        .email("hero@example.com")
        .build()
        .await?;

    let repo = CharacterRepository::new(db);
    let credentials = repo.find_credentials("hero@example.com").await?.unwrap();

    assert_eq!(credentials.id, stored.id);
    assert_eq!(credentials.password_hash, stored.password_hash);
    assert!(repo.email_exists("hero@example.com").await?);

    Ok(())
}

/// Tests looking up an unregistered email.
///
/// Expected: Ok(None) and email_exists false
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_character_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_character(db).await?;

    let repo = CharacterRepository::new(db);

    assert!(repo.find_credentials("nobody@example.com").await?.is_none());
    assert!(!repo.email_exists("nobody@example.com").await?);

    Ok(())
}
