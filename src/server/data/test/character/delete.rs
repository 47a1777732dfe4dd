use super::*;

/// Tests deleting a character without equipment.
///
/// Expected: Ok(true) and the character is gone
#[tokio::test]
async fn deletes_character() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_character_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_character(db).await?;

    let repo = CharacterRepository::new(db);

    assert!(repo.delete(stored.id).await?);
    assert!(repo.find_by_id(stored.id).await?.is_none());

    Ok(())
}

/// Tests deleting a character that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_character() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_character_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CharacterRepository::new(db);

    assert!(!repo.delete(999).await?);

    Ok(())
}
