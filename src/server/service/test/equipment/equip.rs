use super::*;
use sea_orm::ConnectionTrait;

/// Tests equipping a weapon and then swapping it for another.
///
/// Verifies that a character with attack 10 and defense 5 goes to 13/6 after
/// equipping a 3/1 weapon and to 12/5 after replacing it with a 2/0 weapon, with
/// only the second weapon left equipped.
///
/// Expected: Ok with stats 13/6, then 12/5 and one weapon row
#[tokio::test]
async fn swapping_weapons_keeps_only_new_bonus() -> Result<(), AppError> {
    let test = TestBuilder::new().with_character_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let character = factory::create_character(db).await?;
    let service = EquipmentService::new(db);
    let character_repo = CharacterRepository::new(db);

    service
        .equip(item(character.id, Slot::Weapon, "Short Sword", 3, 1))
        .await?;
    let after_first = character_repo.find_by_id(character.id).await?.unwrap();
    assert_eq!((after_first.attack, after_first.defense), (13, 6));

    let second = service
        .equip(item(character.id, Slot::Weapon, "Club", 2, 0))
        .await?;
    let after_second = character_repo.find_by_id(character.id).await?.unwrap();
    assert_eq!((after_second.attack, after_second.defense), (12, 5));

    let items = EquipmentRepository::new(db)
        .get_by_character(character.id)
        .await?;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, second.id);
    assert_eq!(items[0].name, "Club");

    Ok(())
}

/// Tests that weapon and armor bonuses stack across slots.
///
/// Expected: Ok with both bonuses applied
#[tokio::test]
async fn weapon_and_armor_bonuses_stack() -> Result<(), AppError> {
    let test = TestBuilder::new().with_character_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let character = factory::create_character(db).await?;
    let service = EquipmentService::new(db);

    service
        .equip(item(character.id, Slot::Weapon, "Axe", 4, 0))
        .await?;
    service
        .equip(item(character.id, Slot::Armor, "Plate", 0, 6))
        .await?;

    let stored = CharacterRepository::new(db)
        .find_by_id(character.id)
        .await?
        .unwrap();
    assert_eq!((stored.attack, stored.defense), (14, 11));

    Ok(())
}

/// Tests equipping a skill.
///
/// Verifies that skills occupy their slot without changing attack or defense,
/// even when the skill item carries stat values.
///
/// Expected: Ok with stats unchanged and the skill equipped
#[tokio::test]
async fn skill_does_not_change_stats() -> Result<(), AppError> {
    let test = TestBuilder::new().with_character_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let character = factory::create_character(db).await?;
    let service = EquipmentService::new(db);

    service
        .equip(item(character.id, Slot::Skill, "Fireball", 9, 9))
        .await?;
    service
        .equip(item(character.id, Slot::Skill, "Frostbolt", 7, 7))
        .await?;

    let stored = CharacterRepository::new(db)
        .find_by_id(character.id)
        .await?
        .unwrap();
    assert_eq!((stored.attack, stored.defense), (10, 5));

    let skill = service
        .get_equipped(character.id, Slot::Skill)
        .await?
        .unwrap();
    assert_eq!(skill.name, "Frostbolt");

    Ok(())
}

/// Tests equipping onto a character that does not exist.
///
/// Verifies that nothing is written when the character is missing.
///
/// Expected: Err(AppError::NotFound) and no equipment rows
#[tokio::test]
async fn fails_for_missing_character() -> Result<(), AppError> {
    let test = TestBuilder::new().with_character_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = EquipmentService::new(db);
    let result = service.equip(item(999, Slot::Weapon, "Dagger", 1, 0)).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(EquipmentRepository::new(db)
        .get_by_character(999)
        .await?
        .is_empty());

    Ok(())
}

/// Tests that each equip bumps the character's version.
///
/// Expected: Ok with version 2 after two equips
#[tokio::test]
async fn bumps_version_per_operation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_character_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let character = factory::create_character(db).await?;
    let service = EquipmentService::new(db);

    service
        .equip(item(character.id, Slot::Weapon, "Axe", 4, 0))
        .await?;
    service
        .equip(item(character.id, Slot::Armor, "Plate", 0, 6))
        .await?;

    let stored = CharacterRepository::new(db)
        .find_by_id(character.id)
        .await?
        .unwrap();
    assert_eq!(stored.version, 2);

    Ok(())
}

/// Tests equipping an item whose bonus cannot fit in the character's stats.
///
/// Expected: Err(AppError::BadRequest) with nothing stored and version unchanged
#[tokio::test]
async fn rejects_bonus_that_overflows_stats() -> Result<(), AppError> {
    let test = TestBuilder::new().with_character_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let character = factory::create_character(db).await?;
    let service = EquipmentService::new(db);

    let result = service
        .equip(item(character.id, Slot::Weapon, "Worldbreaker", i32::MAX, 0))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let stored = CharacterRepository::new(db)
        .find_by_id(character.id)
        .await?
        .unwrap();
    assert_eq!((stored.attack, stored.defense, stored.version), (10, 5, 0));
    assert!(EquipmentRepository::new(db)
        .find_equipped(character.id, Slot::Weapon)
        .await?
        .is_none());

    Ok(())
}

/// Tests swapping two weapons whose bonuses are both close to the stat limit.
///
/// Verifies that only the final attack has to fit: adding the new bonus before
/// removing the old one would overflow, the net change does not.
///
/// Expected: Ok with attack equal to base plus the new weapon's bonus
#[tokio::test]
async fn swaps_large_bonuses_by_net_change() -> Result<(), AppError> {
    let test = TestBuilder::new().with_character_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let character = factory::character::CharacterFactory::new(db)
        .attack(10 + (i32::MAX - 20))
        .build()
        .await?;
    factory::equipment::EquipmentFactory::new(db, character.id, "weapon")
        .stats(i32::MAX - 20, 0)
        .build()
        .await?;

    EquipmentService::new(db)
        .equip(item(character.id, Slot::Weapon, "Greatsword", i32::MAX - 15, 0))
        .await?;

    let stored = CharacterRepository::new(db)
        .find_by_id(character.id)
        .await?
        .unwrap();
    assert_eq!(stored.attack, i32::MAX - 5);

    Ok(())
}

/// Tests that a failed equip leaves no partial state behind.
///
/// Verifies that when storing the new item fails after the old weapon was deleted
/// and the character rewritten, the whole transaction rolls back: the old weapon is
/// still equipped and attack, defense and version are unchanged.
///
/// Expected: Err(AppError::DbErr) with the stored state untouched
#[tokio::test]
async fn failed_insert_rolls_back_swap() -> Result<(), AppError> {
    let test = TestBuilder::new().with_character_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (character, items) = factory::helpers::create_fully_equipped_character(db).await?;
    db.execute_unprepared(
        "CREATE TRIGGER reject_cursed_items BEFORE INSERT ON equipment \
         WHEN NEW.name = 'Cursed Blade' \
         BEGIN SELECT RAISE(ABORT, 'cursed item'); END",
    )
    .await?;

    let result = EquipmentService::new(db)
        .equip(item(character.id, Slot::Weapon, "Cursed Blade", 9, 9))
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    let stored = CharacterRepository::new(db)
        .find_by_id(character.id)
        .await?
        .unwrap();
    assert_eq!(
        (stored.attack, stored.defense, stored.version),
        (character.attack, character.defense, 0)
    );

    let weapon = EquipmentRepository::new(db)
        .find_equipped(character.id, Slot::Weapon)
        .await?;
    assert_eq!(weapon.map(|w| w.id), Some(items[0].id));

    Ok(())
}
