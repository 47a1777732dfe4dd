//! Equipping and unequipping items.
//!
//! A character's attack and defense always equal its base values plus the bonuses of
//! its equipped weapon and armor. The service keeps that true incrementally: every item
//! that enters a slot adds its bonus and every item that leaves subtracts it. Each
//! operation reads the character, adjusts it and writes it back inside one transaction,
//! and the write fails with a conflict if the character changed in between.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{character::CharacterRepository, equipment::EquipmentRepository},
    error::AppError,
    model::equipment::{CreateEquipmentParams, Equipment, Loadout, Slot},
    service::character::{load_character, save_character},
};

pub struct EquipmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EquipmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Equips an item, replacing whatever the character had in that slot.
    ///
    /// The new item's bonus is added and the replaced item's bonus is subtracted, so
    /// swapping a weapon leaves the character with exactly the new weapon's bonus.
    /// Skills replace each other without touching stats.
    ///
    /// # Returns
    /// - `Ok(Equipment)` - The newly equipped item
    /// - `Err(AppError::BadRequest)` - Resulting attack or defense would overflow
    /// - `Err(AppError::NotFound)` - Character does not exist
    /// - `Err(AppError::Conflict)` - Character changed during the operation
    pub async fn equip(&self, params: CreateEquipmentParams) -> Result<Equipment, AppError> {
        let txn = self.db.begin().await?;
        let character_repo = CharacterRepository::new(&txn);
        let equipment_repo = EquipmentRepository::new(&txn);

        let mut character = load_character(&character_repo, params.character_id).await?;
        let replaced = equipment_repo
            .find_equipped(params.character_id, params.slot)
            .await?;

        let removed = replaced
            .as_ref()
            .map(Equipment::bonus)
            .unwrap_or_default();
        character
            .swap_bonus(params.bonus(), removed)
            .map_err(AppError::BadRequest)?;

        if let Some(existing) = replaced {
            equipment_repo.delete(existing.id).await?;

            tracing::debug!(
                "Replacing {} '{}' on character {}",
                existing.slot,
                existing.name,
                existing.character_id
            );
        }

        save_character(&character_repo, character).await?;
        let item = equipment_repo.create(params).await?;

        txn.commit().await?;

        Ok(item)
    }

    /// Removes the item in a slot and subtracts its bonus from the character.
    ///
    /// # Returns
    /// - `Ok(())` - Item removed
    /// - `Err(AppError::NotFound)` - Slot is empty or character does not exist
    /// - `Err(AppError::Conflict)` - Character changed during the operation
    pub async fn unequip(&self, character_id: i32, slot: Slot) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let character_repo = CharacterRepository::new(&txn);
        let equipment_repo = EquipmentRepository::new(&txn);

        let Some(item) = equipment_repo.find_equipped(character_id, slot).await? else {
            return Err(AppError::NotFound(format!(
                "Character {} has no {} equipped",
                character_id, slot
            )));
        };

        let mut character = load_character(&character_repo, character_id).await?;
        character
            .remove_bonus(item.bonus())
            .map_err(AppError::BadRequest)?;

        equipment_repo.delete(item.id).await?;
        save_character(&character_repo, character).await?;

        txn.commit().await?;

        Ok(())
    }

    /// Gets the item a character has in a slot, if any.
    pub async fn get_equipped(
        &self,
        character_id: i32,
        slot: Slot,
    ) -> Result<Option<Equipment>, AppError> {
        let repo = EquipmentRepository::new(self.db);

        Ok(repo.find_equipped(character_id, slot).await?)
    }

    /// Gets everything a character has equipped.
    pub async fn get_loadout(&self, character_id: i32) -> Result<Loadout, AppError> {
        let repo = EquipmentRepository::new(self.db);

        let items = repo.get_by_character(character_id).await?;

        Ok(Loadout::from_items(items))
    }
}
