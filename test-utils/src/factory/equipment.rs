//! Equipment factory for creating test equipment entities.
//!
//! Factories insert rows directly and do not touch the owning character's
//! stats; callers that care about the attack/defense totals set them on the
//! character themselves.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct EquipmentFactory<'a> {
    db: &'a DatabaseConnection,
    character_id: i32,
    slot: String,
    name: String,
    attack: i32,
    defense: i32,
}

impl<'a> EquipmentFactory<'a> {
    /// Creates a new EquipmentFactory with default values.
    ///
    /// Defaults:
    /// - name: `"{slot} {id}"`
    /// - attack 0, defense 0
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `character_id` - Character that has the item equipped
    /// - `slot` - Slot name (`weapon`, `armor` or `skill`)
    pub fn new(db: &'a DatabaseConnection, character_id: i32, slot: impl Into<String>) -> Self {
        let slot = slot.into();
        Self {
            db,
            character_id,
            name: format!("{} {}", slot, next_id()),
            slot,
            attack: 0,
            defense: 0,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the attack and defense the item grants.
    pub fn stats(mut self, attack: i32, defense: i32) -> Self {
        self.attack = attack;
        self.defense = defense;
        self
    }

    /// Builds and inserts the equipment entity into the database.
    pub async fn build(self) -> Result<entity::equipment::Model, DbErr> {
        entity::equipment::ActiveModel {
            character_id: ActiveValue::Set(self.character_id),
            slot: ActiveValue::Set(self.slot),
            name: ActiveValue::Set(self.name),
            attack: ActiveValue::Set(self.attack),
            defense: ActiveValue::Set(self.defense),
            equipped_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a zero-stat item in the given slot.
///
/// Shorthand for `EquipmentFactory::new(db, character_id, slot).build().await`.
pub async fn create_equipment(
    db: &DatabaseConnection,
    character_id: i32,
    slot: impl Into<String>,
) -> Result<entity::equipment::Model, DbErr> {
    EquipmentFactory::new(db, character_id, slot).build().await
}
