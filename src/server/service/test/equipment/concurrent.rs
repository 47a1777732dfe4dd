use super::*;

/// Tests overlapping equips on one character from separate pool connections.
///
/// Verifies that every request either commits or reports a conflict, never an
/// internal error, and that the stored attack and defense still equal the base
/// stats plus the bonus of the one weapon left equipped.
///
/// Expected: only Ok or Err(AppError::Conflict), stats consistent afterwards
#[tokio::test]
async fn overlapping_equips_commit_or_conflict() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_connection_pool(8)
        .with_character_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let character = factory::create_character(db).await?;
    let service = EquipmentService::new(db);

    for round in 0..5 {
        let (sword, axe, mace, spear) = tokio::join!(
            service.equip(item(character.id, Slot::Weapon, "Sword", round + 1, 0)),
            service.equip(item(character.id, Slot::Weapon, "Axe", round + 2, 0)),
            service.equip(item(character.id, Slot::Weapon, "Mace", round + 3, 1)),
            service.equip(item(character.id, Slot::Weapon, "Spear", round + 4, 2)),
        );

        for result in [sword, axe, mace, spear] {
            assert!(
                matches!(result, Ok(_) | Err(AppError::Conflict(_))),
                "unexpected result: {:?}",
                result
            );
        }
    }

    let stored = CharacterRepository::new(db)
        .find_by_id(character.id)
        .await?
        .unwrap();
    let bonus = EquipmentRepository::new(db)
        .find_equipped(character.id, Slot::Weapon)
        .await?
        .map(|w| w.bonus())
        .unwrap_or_default();

    assert_eq!(stored.attack, 10 + bonus.attack);
    assert_eq!(stored.defense, 5 + bonus.defense);

    Ok(())
}
