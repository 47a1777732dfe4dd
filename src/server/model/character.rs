//! Character domain models and parameters.
//!
//! A character is both the player's game avatar and their login identity. Its
//! combat stats are maintained incrementally: equipping adds an item's bonus,
//! unequipping subtracts it, and levelling adds fixed growth per level gained.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::{
        auth::{ProfileDto, SignupDto},
        character::CharacterDto,
    },
    server::model::{
        equipment::StatBonus,
        permission::PermissionKey,
        progression::{
            convert_experience, grow, HealthGrowth, ATTACK_PER_LEVEL, DEFENSE_PER_LEVEL,
            MANA_PER_LEVEL,
        },
    },
};

pub const STARTING_ATTACK: i32 = 10;
pub const STARTING_DEFENSE: i32 = 5;
pub const STARTING_HEALTH: i32 = 10;
pub const STARTING_MANA: i32 = 5;
pub const STARTING_NEXT_LEVEL_EXP: i32 = 100;
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Character with stats, permissions and optimistic concurrency version.
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub level: i32,
    pub current_exp: i32,
    pub next_level_exp: i32,
    /// Base attack plus weapon/armor bonuses plus level growth.
    pub attack: i32,
    /// Base defense plus weapon/armor bonuses plus level growth.
    pub defense: i32,
    pub max_health: i32,
    pub current_health: i32,
    pub max_mana: i32,
    pub current_mana: i32,
    pub permissions: Vec<PermissionKey>,
    /// Version the character was read at. Writes only succeed while the stored
    /// version still matches.
    pub version: i32,
    pub created_at: DateTime<Utc>,
}

impl Character {
    /// Converts an entity model to a character domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(Character)` - The converted character
    /// - `Err(DbErr::Custom)` - Stored permissions are not a JSON array of known keys
    pub fn from_entity(entity: entity::character::Model) -> Result<Self, DbErr> {
        let permissions = PermissionKey::decode(&entity.permissions)?;

        Ok(Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            level: entity.level,
            current_exp: entity.current_exp,
            next_level_exp: entity.next_level_exp,
            attack: entity.attack,
            defense: entity.defense,
            max_health: entity.max_health,
            current_health: entity.current_health,
            max_mana: entity.max_mana,
            current_mana: entity.current_mana,
            permissions,
            version: entity.version,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> CharacterDto {
        CharacterDto {
            id: self.id,
            email: self.email,
            name: self.name,
            level: self.level,
            current_exp: self.current_exp,
            next_level_exp: self.next_level_exp,
            attack: self.attack,
            defense: self.defense,
            max_health: self.max_health,
            current_health: self.current_health,
            max_mana: self.max_mana,
            current_mana: self.current_mana,
            permissions: permission_names(&self.permissions),
            created_at: self.created_at,
        }
    }

    pub fn into_profile_dto(self) -> ProfileDto {
        ProfileDto {
            id: self.id,
            email: self.email,
            name: self.name,
            permissions: permission_names(&self.permissions),
        }
    }

    pub fn has_permission(&self, key: PermissionKey) -> bool {
        self.permissions.contains(&key)
    }

    /// Replaces the `removed` bonus with the `added` one in attack and defense.
    ///
    /// Only the net result has to fit in an `i32`; on error nothing changes.
    pub fn swap_bonus(&mut self, added: StatBonus, removed: StatBonus) -> Result<(), String> {
        let attack = net_stat(self.attack, added.attack, removed.attack);
        let defense = net_stat(self.defense, added.defense, removed.defense);

        let (Some(attack), Some(defense)) = (attack, defense) else {
            return Err(format!(
                "Equipment bonus would overflow the stats of character {}",
                self.id
            ));
        };

        self.attack = attack;
        self.defense = defense;

        Ok(())
    }

    /// Subtracts a previously applied bonus from attack and defense.
    pub fn remove_bonus(&mut self, bonus: StatBonus) -> Result<(), String> {
        self.swap_bonus(StatBonus::default(), bonus)
    }

    /// Banks experience without converting it into levels.
    pub fn add_experience(&mut self, amount: i32) -> Result<(), String> {
        self.current_exp = self.current_exp.checked_add(amount).ok_or_else(|| {
            format!(
                "Adding {} experience to character {} overflows its total",
                amount, self.id
            )
        })?;

        Ok(())
    }

    /// Converts banked experience into levels and applies per-level stat growth.
    ///
    /// Health and mana are refilled to their new maximums. When no level is
    /// gained nothing changes, including current health and mana.
    ///
    /// # Returns
    /// - `Ok(levels)` - Number of levels gained
    /// - `Err(String)` - A stat or the experience threshold would overflow; nothing changed
    pub fn level_up(&mut self, growth: HealthGrowth) -> Result<i32, String> {
        let overflow = || format!("Level-up would overflow the stats of character {}", self.id);

        let conversion =
            convert_experience(self.current_exp, self.next_level_exp).ok_or_else(overflow)?;
        let levels = conversion.levels;
        if levels == 0 {
            return Ok(0);
        }

        let level = self.level.checked_add(levels).ok_or_else(overflow)?;
        let max_health = growth.apply(self.max_health, levels).ok_or_else(overflow)?;
        let max_mana = grow(self.max_mana, MANA_PER_LEVEL, levels).ok_or_else(overflow)?;
        let attack = grow(self.attack, ATTACK_PER_LEVEL, levels).ok_or_else(overflow)?;
        let defense = grow(self.defense, DEFENSE_PER_LEVEL, levels).ok_or_else(overflow)?;

        self.level = level;
        self.current_exp = conversion.current_exp;
        self.next_level_exp = conversion.next_level_exp;
        self.max_health = max_health;
        self.current_health = max_health;
        self.max_mana = max_mana;
        self.current_mana = max_mana;
        self.attack = attack;
        self.defense = defense;

        Ok(levels)
    }
}

fn net_stat(value: i32, added: i32, removed: i32) -> Option<i32> {
    i32::try_from(i64::from(value) + i64::from(added) - i64::from(removed)).ok()
}

fn permission_names(keys: &[PermissionKey]) -> Vec<String> {
    keys.iter().map(|k| k.as_str().to_string()).collect()
}

/// Parameters for creating a character at signup.
#[derive(Debug, Clone)]
pub struct CreateCharacterParams {
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub attack: i32,
    pub defense: i32,
    pub health: i32,
    pub mana: i32,
    pub next_level_exp: i32,
    pub permissions: Vec<PermissionKey>,
}

impl CreateCharacterParams {
    /// Level 1 character with starting stats and every default permission.
    pub fn new(email: String, name: String, password_hash: String) -> Self {
        Self {
            email,
            name,
            password_hash,
            attack: STARTING_ATTACK,
            defense: STARTING_DEFENSE,
            health: STARTING_HEALTH,
            mana: STARTING_MANA,
            next_level_exp: STARTING_NEXT_LEVEL_EXP,
            permissions: PermissionKey::DEFAULT.to_vec(),
        }
    }
}

/// Signup request before the password is hashed.
#[derive(Debug, Clone)]
pub struct SignupParams {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl SignupParams {
    /// Trims email and name; the password is kept verbatim.
    pub fn from_dto(dto: SignupDto) -> Self {
        Self {
            email: dto.email.trim().to_string(),
            password: dto.password,
            name: dto.name.trim().to_string(),
        }
    }

    /// Checks the request before any database access.
    ///
    /// # Returns
    /// - `Ok(())` - Request is acceptable
    /// - `Err(String)` - Message describing the first problem found
    pub fn validate(&self) -> Result<(), String> {
        let valid_email = match self.email.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
            }
            None => false,
        };
        if !valid_email {
            return Err(format!("'{}' is not a valid email address", self.email));
        }

        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            ));
        }

        if self.name.is_empty() {
            return Err("Name must not be empty".to_string());
        }

        Ok(())
    }
}

/// Login lookup result: the stored hash to verify a password against.
#[derive(Debug, Clone)]
pub struct CharacterCredentials {
    pub id: i32,
    pub password_hash: String,
}
