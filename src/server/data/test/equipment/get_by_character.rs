use super::*;

/// Tests listing a character's equipment.
///
/// Verifies that every slot is returned and other characters' items are excluded.
///
/// Expected: Ok with three items
#[tokio::test]
async fn returns_items_for_character_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_character_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (character, _) = factory::helpers::create_fully_equipped_character(db).await?;
    let other = factory::create_character(db).await?;
    factory::create_equipment(db, other.id, "armor").await?;

    let repo = EquipmentRepository::new(db);
    let items = repo.get_by_character(character.id).await?;

    assert_eq!(items.len(), 3);
    assert!(items.iter().all(|i| i.character_id == character.id));

    Ok(())
}

/// Tests listing equipment for a character with nothing equipped.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_unequipped_character() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_character_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let character = factory::create_character(db).await?;

    let repo = EquipmentRepository::new(db);
    let items = repo.get_by_character(character.id).await?;

    assert!(items.is_empty());

    Ok(())
}
