use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{character::CharacterRepository, equipment::EquipmentRepository},
    error::AppError,
    model::character::Character,
};

pub struct CharacterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Deletes a character together with its weapon, armor and skill.
    ///
    /// Equipment is removed before the character in the same transaction, so either
    /// everything is gone afterwards or nothing changed.
    ///
    /// # Returns
    /// - `Ok(true)` - Character and equipment deleted
    /// - `Ok(false)` - No character with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        let removed_items = EquipmentRepository::new(&txn)
            .delete_by_character(id)
            .await?;
        let deleted = CharacterRepository::new(&txn).delete(id).await?;

        txn.commit().await?;

        if deleted {
            tracing::info!(
                "Deleted character {} and {} equipped item(s)",
                id,
                removed_items
            );
        }

        Ok(deleted)
    }
}

/// Loads a character for a read-modify-write sequence.
///
/// # Returns
/// - `Ok(Character)` - Character as stored, carrying its current version
/// - `Err(AppError::NotFound)` - No character with that ID
pub(super) async fn load_character<C: ConnectionTrait>(
    repo: &CharacterRepository<'_, C>,
    id: i32,
) -> Result<Character, AppError> {
    repo.find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Character {} not found", id)))
}

/// Writes back a character loaded with [`load_character`].
///
/// # Returns
/// - `Ok(Character)` - Character as stored after the write, version bumped
/// - `Err(AppError::Conflict)` - Another request modified the character first
pub(super) async fn save_character<C: ConnectionTrait>(
    repo: &CharacterRepository<'_, C>,
    mut character: Character,
) -> Result<Character, AppError> {
    if !repo.update_stats(&character).await? {
        tracing::warn!(
            "Lost update on character {} at version {}",
            character.id,
            character.version
        );
        return Err(AppError::Conflict(format!(
            "Character {} was modified by another request, retry",
            character.id
        )));
    }

    character.version += 1;

    Ok(character)
}
