use super::*;

/// Tests writing back a character that another request already modified.
///
/// Verifies that two copies loaded at the same version cannot both be saved: the
/// first write wins and bumps the version, the stale copy is rejected and its
/// changes are not stored.
///
/// Expected: Ok for the first save, Err(AppError::Conflict) for the second
#[tokio::test]
async fn stale_version_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new().with_character_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_character(db).await?;
    let repo = CharacterRepository::new(db);

    let mut first = load_character(&repo, created.id).await?;
    let mut second = load_character(&repo, created.id).await?;

    first.add_experience(50).unwrap();
    let saved = save_character(&repo, first).await?;
    assert_eq!(saved.version, 1);

    second.add_experience(70).unwrap();
    let result = save_character(&repo, second).await;
    assert!(matches!(result, Err(AppError::Conflict(_))));

    let stored = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!((stored.current_exp, stored.version), (50, 1));

    Ok(())
}
