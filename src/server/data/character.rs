//! Character data repository for database operations.
//!
//! This module provides the `CharacterRepository` for managing character records. Stat
//! writes are compare-and-swap on the `version` column so two overlapping
//! read-modify-write sequences cannot silently overwrite each other.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter,
};

use crate::server::model::{
    character::{Character, CharacterCredentials, CreateCharacterParams},
    permission::PermissionKey,
};

/// Repository providing database operations for characters.
///
/// Generic over the connection so the same queries run against a plain connection or
/// inside a transaction.
pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    /// Creates a new CharacterRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new level 1 character.
    ///
    /// Current health and mana start full.
    ///
    /// # Arguments
    /// - `params` - Identity, password hash, starting stats and permissions
    ///
    /// # Returns
    /// - `Ok(Character)` - The created character with generated ID
    /// - `Err(DbErr)` - Database error during insert, including a duplicate email
    pub async fn create(&self, params: CreateCharacterParams) -> Result<Character, DbErr> {
        let permissions = PermissionKey::encode(&params.permissions)?;

        let entity = entity::character::ActiveModel {
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(params.password_hash),
            name: ActiveValue::Set(params.name),
            level: ActiveValue::Set(1),
            current_exp: ActiveValue::Set(0),
            next_level_exp: ActiveValue::Set(params.next_level_exp),
            attack: ActiveValue::Set(params.attack),
            defense: ActiveValue::Set(params.defense),
            max_health: ActiveValue::Set(params.health),
            current_health: ActiveValue::Set(params.health),
            max_mana: ActiveValue::Set(params.mana),
            current_mana: ActiveValue::Set(params.mana),
            permissions: ActiveValue::Set(permissions),
            version: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Character::from_entity(entity)
    }

    /// Finds a character by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Character))` - Character found
    /// - `Ok(None)` - No character with that ID
    /// - `Err(DbErr)` - Database error or unreadable stored permissions
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Character>, DbErr> {
        let entity = entity::prelude::Character::find_by_id(id)
            .one(self.db)
            .await?;

        entity.map(Character::from_entity).transpose()
    }

    /// Finds the stored password hash for a login email.
    ///
    /// # Returns
    /// - `Ok(Some(CharacterCredentials))` - Character ID and password hash
    /// - `Ok(None)` - No character registered with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_credentials(
        &self,
        email: &str,
    ) -> Result<Option<CharacterCredentials>, DbErr> {
        let entity = entity::prelude::Character::find()
            .filter(entity::character::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(|e| CharacterCredentials {
            id: e.id,
            password_hash: e.password_hash,
        }))
    }

    /// Checks whether an email is already registered.
    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Character::find()
            .filter(entity::character::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Writes a character's level, experience and stats back to the database.
    ///
    /// The write only applies while the stored version equals `character.version`,
    /// and bumps the stored version by one. Identity, permissions and creation time
    /// are never touched.
    ///
    /// # Arguments
    /// - `character` - Character as mutated in memory, carrying the version it was read at
    ///
    /// # Returns
    /// - `Ok(true)` - Row updated
    /// - `Ok(false)` - Row missing or modified since it was read
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_stats(&self, character: &Character) -> Result<bool, DbErr> {
        use entity::character::Column;

        let result = entity::prelude::Character::update_many()
            .col_expr(Column::Level, Expr::value(character.level))
            .col_expr(Column::CurrentExp, Expr::value(character.current_exp))
            .col_expr(Column::NextLevelExp, Expr::value(character.next_level_exp))
            .col_expr(Column::Attack, Expr::value(character.attack))
            .col_expr(Column::Defense, Expr::value(character.defense))
            .col_expr(Column::MaxHealth, Expr::value(character.max_health))
            .col_expr(Column::CurrentHealth, Expr::value(character.current_health))
            .col_expr(Column::MaxMana, Expr::value(character.max_mana))
            .col_expr(Column::CurrentMana, Expr::value(character.current_mana))
            .col_expr(Column::Version, Expr::value(character.version + 1))
            .filter(Column::Id.eq(character.id))
            .filter(Column::Version.eq(character.version))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Deletes a character row.
    ///
    /// Equipment must be removed first; see `EquipmentRepository::delete_by_character`.
    ///
    /// # Returns
    /// - `Ok(true)` - Character deleted
    /// - `Ok(false)` - No character with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Character::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
