use super::*;

/// Tests writing mutated stats back.
///
/// Verifies that the stat columns are written and the stored version is bumped.
///
/// Expected: Ok(true) and version incremented
#[tokio::test]
async fn writes_stats_and_bumps_version() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_character_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_character(db).await?;

    let repo = CharacterRepository::new(db);
    let mut character = repo.find_by_id(stored.id).await?.unwrap();
    character.attack = 42;
    character.current_exp = 77;

    assert!(repo.update_stats(&character).await?);

    let reloaded = repo.find_by_id(stored.id).await?.unwrap();
    assert_eq!(reloaded.attack, 42);
    assert_eq!(reloaded.current_exp, 77);
    assert_eq!(reloaded.version, character.version + 1);

    Ok(())
}

/// Tests writing stats read at an outdated version.
///
/// Verifies that once one writer has saved, a second writer holding the same
/// earlier read is rejected and its values are not stored.
///
/// Expected: Ok(false) for the stale write, stored values from the first write
#[tokio::test]
async fn rejects_stale_version() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_character_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_character(db).await?;

    let repo = CharacterRepository::new(db);
    let mut first = repo.find_by_id(stored.id).await?.unwrap();
    let mut second = first.clone();

    first.attack = 20;
    second.attack = 30;

    assert!(repo.update_stats(&first).await?);
    assert!(!repo.update_stats(&second).await?);

    let reloaded = repo.find_by_id(stored.id).await?.unwrap();
    assert_eq!(reloaded.attack, 20);

    Ok(())
}

/// Tests writing stats for a character that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_character() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_character_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_character(db).await?;

    let repo = CharacterRepository::new(db);
    let mut character = repo.find_by_id(stored.id).await?.unwrap();
    character.id = 999;

    assert!(!repo.update_stats(&character).await?);

    Ok(())
}
