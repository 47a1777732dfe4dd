//! Character factory for creating test character entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Permission keys every signed-up character holds.
const DEFAULT_PERMISSIONS: [&str; 4] = [
    "ViewOwnUser",
    "CreateUser",
    "UpdateOwnUser",
    "DeleteOwnUser",
];

/// Factory for creating test characters with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::character::CharacterFactory;
///
/// let character = CharacterFactory::new(&db)
///     .level(3)
///     .experience(250, 100)
///     .build()
///     .await?;
/// ```
pub struct CharacterFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    name: String,
    password_hash: String,
    level: i32,
    current_exp: i32,
    next_level_exp: i32,
    attack: i32,
    defense: i32,
    max_health: i32,
    current_health: i32,
    max_mana: i32,
    current_mana: i32,
    permissions: Vec<String>,
}

impl<'a> CharacterFactory<'a> {
    /// Creates a new CharacterFactory with default values.
    ///
    /// Defaults:
    /// - email: `"character{id}@example.com"` where id is auto-incremented
    /// - name: `"Character {id}"`
    /// - level 1, 0 / 100 experience
    /// - attack 10, defense 5, health 10/10, mana 5/5
    /// - all four default permission keys
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            email: format!("character{}@example.com", id),
            name: format!("Character {}", id),
            password_hash: "unusable".to_string(),
            level: 1,
            current_exp: 0,
            next_level_exp: 100,
            attack: 10,
            defense: 5,
            max_health: 10,
            current_health: 10,
            max_mana: 5,
            current_mana: 5,
            permissions: DEFAULT_PERMISSIONS.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn level(mut self, level: i32) -> Self {
        self.level = level;
        self
    }

    /// Sets the current experience and the experience needed for the next level.
    pub fn experience(mut self, current_exp: i32, next_level_exp: i32) -> Self {
        self.current_exp = current_exp;
        self.next_level_exp = next_level_exp;
        self
    }

    pub fn attack(mut self, attack: i32) -> Self {
        self.attack = attack;
        self
    }

    pub fn defense(mut self, defense: i32) -> Self {
        self.defense = defense;
        self
    }

    /// Sets maximum and current health to the same value.
    pub fn health(mut self, health: i32) -> Self {
        self.max_health = health;
        self.current_health = health;
        self
    }

    /// Sets maximum and current mana to the same value.
    pub fn mana(mut self, mana: i32) -> Self {
        self.max_mana = mana;
        self.current_mana = mana;
        self
    }

    /// Replaces the permission keys granted to the character.
    pub fn permissions(mut self, permissions: &[&str]) -> Self {
        self.permissions = permissions.iter().map(|p| p.to_string()).collect();
        self
    }

    /// Builds and inserts the character entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::character::Model)` - Created character entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::character::Model, DbErr> {
        let permissions = serde_json::to_string(&self.permissions)
            .map_err(|e| DbErr::Custom(format!("Failed to encode permissions: {}", e)))?;

        entity::character::ActiveModel {
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set(self.password_hash),
            name: ActiveValue::Set(self.name),
            level: ActiveValue::Set(self.level),
            current_exp: ActiveValue::Set(self.current_exp),
            next_level_exp: ActiveValue::Set(self.next_level_exp),
            attack: ActiveValue::Set(self.attack),
            defense: ActiveValue::Set(self.defense),
            max_health: ActiveValue::Set(self.max_health),
            current_health: ActiveValue::Set(self.current_health),
            max_mana: ActiveValue::Set(self.max_mana),
            current_mana: ActiveValue::Set(self.current_mana),
            permissions: ActiveValue::Set(permissions),
            version: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a character with default values.
///
/// Shorthand for `CharacterFactory::new(db).build().await`.
pub async fn create_character(db: &DatabaseConnection) -> Result<entity::character::Model, DbErr> {
    CharacterFactory::new(db).build().await
}
