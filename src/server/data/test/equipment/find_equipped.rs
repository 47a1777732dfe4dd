use super::*;

/// Tests finding the item in an occupied slot.
///
/// Verifies that only the requested slot of the requested character matches.
///
/// Expected: Ok(Some) with the weapon
#[tokio::test]
async fn finds_item_in_slot() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_character_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (character, items) = factory::helpers::create_fully_equipped_character(db).await?;
    let other = factory::create_character(db).await?;
    factory::create_equipment(db, other.id, "weapon").await?;

    let repo = EquipmentRepository::new(db);
    let weapon = repo.find_equipped(character.id, Slot::Weapon).await?.unwrap();

    assert_eq!(weapon.id, items[0].id);
    assert_eq!(weapon.slot, Slot::Weapon);

    Ok(())
}

/// Tests finding the item in an empty slot.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_empty_slot() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_character_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let character = factory::create_character(db).await?;
    factory::create_equipment(db, character.id, "weapon").await?;

    let repo = EquipmentRepository::new(db);
    let result = repo.find_equipped(character.id, Slot::Skill).await?;

    assert!(result.is_none());

    Ok(())
}
