//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Used to keep factory-generated emails and names unique across a test run.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a character wearing a weapon, an armor piece and a skill.
///
/// Item stats are folded into the character's attack and defense so the
/// stored totals stay consistent with the equipped items.
///
/// # Returns
/// - `Ok((character, items))` - Character row as stored after the items were applied,
///   and the items in weapon, armor, skill order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_fully_equipped_character(
    db: &DatabaseConnection,
) -> Result<(entity::character::Model, Vec<entity::equipment::Model>), DbErr> {
    let weapon = (3, 1);
    let armor = (0, 4);

    let character = crate::factory::character::CharacterFactory::new(db)
        .attack(10 + weapon.0 + armor.0)
        .defense(5 + weapon.1 + armor.1)
        .build()
        .await?;

    let items = vec![
        crate::factory::equipment::EquipmentFactory::new(db, character.id, "weapon")
            .stats(weapon.0, weapon.1)
            .build()
            .await?,
        crate::factory::equipment::EquipmentFactory::new(db, character.id, "armor")
            .stats(armor.0, armor.1)
            .build()
            .await?,
        crate::factory::equipment::EquipmentFactory::new(db, character.id, "skill")
            .build()
            .await?,
    ];

    Ok((character, items))
}
