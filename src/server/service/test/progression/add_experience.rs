use super::*;

/// Tests depositing experience.
///
/// Verifies that experience is banked without levelling even past the threshold.
///
/// Expected: Ok with current_exp raised and level unchanged
#[tokio::test]
async fn banks_experience_without_levelling() -> Result<(), AppError> {
    let test = TestBuilder::new().with_character_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let character = factory::create_character(db).await?;

    let service = ProgressionService::new(db, HealthGrowth::Replace);
    let updated = service.add_experience(character.id, 180).await?;

    assert_eq!(updated.current_exp, 180);
    assert_eq!(updated.level, 1);

    let stored = CharacterRepository::new(db)
        .find_by_id(character.id)
        .await?
        .unwrap();
    assert_eq!(stored.current_exp, 180);

    Ok(())
}

/// Tests depositing a negative amount.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_negative_amount() -> Result<(), AppError> {
    let test = TestBuilder::new().with_character_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let character = factory::create_character(db).await?;

    let service = ProgressionService::new(db, HealthGrowth::Replace);
    let result = service.add_experience(character.id, -5).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests depositing an amount that would overflow the stored total.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_overflowing_amount() -> Result<(), AppError> {
    let test = TestBuilder::new().with_character_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let character = factory::character::CharacterFactory::new(db)
        .experience(10, 100)
        .build()
        .await?;

    let service = ProgressionService::new(db, HealthGrowth::Replace);
    let result = service.add_experience(character.id, i32::MAX).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests depositing into a character that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_character() -> Result<(), AppError> {
    let test = TestBuilder::new().with_character_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ProgressionService::new(db, HealthGrowth::Replace);
    let result = service.add_experience(999, 10).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
