use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::character::CharacterRepository,
    error::AppError,
    model::{character::Character, progression::HealthGrowth},
    service::character::{load_character, save_character},
};

/// Experience deposits and level-ups.
pub struct ProgressionService<'a> {
    db: &'a DatabaseConnection,
    health_growth: HealthGrowth,
}

impl<'a> ProgressionService<'a> {
    pub fn new(db: &'a DatabaseConnection, health_growth: HealthGrowth) -> Self {
        Self { db, health_growth }
    }

    /// Spends the character's banked experience on as many levels as it covers.
    ///
    /// When the experience is short of the next threshold the character is returned
    /// unchanged and nothing is written.
    ///
    /// # Returns
    /// - `Ok((levels_gained, character))` - Levels gained and the character afterwards
    /// - `Err(AppError::BadRequest)` - A stat would overflow
    /// - `Err(AppError::NotFound)` - Character does not exist
    /// - `Err(AppError::Conflict)` - Character changed during the operation
    pub async fn level_up(&self, character_id: i32) -> Result<(i32, Character), AppError> {
        let txn = self.db.begin().await?;
        let repo = CharacterRepository::new(&txn);

        let mut character = load_character(&repo, character_id).await?;

        let levels = character
            .level_up(self.health_growth)
            .map_err(AppError::BadRequest)?;
        if levels == 0 {
            txn.commit().await?;
            return Ok((0, character));
        }

        let character = save_character(&repo, character).await?;
        txn.commit().await?;

        tracing::info!(
            "Character {} gained {} level(s), now level {}",
            character.id,
            levels,
            character.level
        );

        Ok((levels, character))
    }

    /// Banks experience without levelling.
    ///
    /// # Returns
    /// - `Ok(Character)` - Character with the experience added
    /// - `Err(AppError::BadRequest)` - Negative amount, or a total that would overflow
    /// - `Err(AppError::NotFound)` - Character does not exist
    /// - `Err(AppError::Conflict)` - Character changed during the operation
    pub async fn add_experience(
        &self,
        character_id: i32,
        amount: i32,
    ) -> Result<Character, AppError> {
        if amount < 0 {
            return Err(AppError::BadRequest(format!(
                "Experience amount must not be negative, got {}",
                amount
            )));
        }

        let txn = self.db.begin().await?;
        let repo = CharacterRepository::new(&txn);

        let mut character = load_character(&repo, character_id).await?;
        if amount == 0 {
            txn.commit().await?;
            return Ok(character);
        }
        character
            .add_experience(amount)
            .map_err(AppError::BadRequest)?;
        let character = save_character(&repo, character).await?;

        txn.commit().await?;

        Ok(character)
    }
}
