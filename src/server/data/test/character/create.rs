use super::*;

/// Tests creating a character at signup.
///
/// Verifies that a new character starts at level 1 with full health and mana,
/// the starting experience threshold and every default permission key.
///
/// Expected: Ok with a level 1 character at version 0
#[tokio::test]
async fn creates_level_one_character() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_character_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CharacterRepository::new(db);
    let character = repo
        .create(CreateCharacterParams::new(
            "hero@example.com".to_string(),
            "Hero".to_string(),
            "hash".to_string(),
        ))
        .await?;

    assert_eq!(character.email, "hero@example.com");
    assert_eq!(character.level, 1);
    assert_eq!(character.current_exp, 0);
    assert_eq!(character.next_level_exp, 100);
    assert_eq!(character.current_health, character.max_health);
    assert_eq!(character.current_mana, character.max_mana);
    assert_eq!(character.permissions, PermissionKey::DEFAULT.to_vec());
    assert_eq!(character.version, 0);

    Ok(())
}

/// Tests creating a character with an email that is already registered.
///
/// Verifies that the unique constraint on email rejects the second insert.
///
/// Expected: Err on the second create
#[tokio::test]
async fn fails_for_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_character_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CharacterRepository::new(db);
    let params = CreateCharacterParams::new(
        "hero@example.com".to_string(),
        "Hero".to_string(),
        "hash".to_string(),
    );
    repo.create(params.clone()).await?;

    let result = repo.create(params).await;

    assert!(result.is_err());

    Ok(())
}
