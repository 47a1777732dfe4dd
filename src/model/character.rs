use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CharacterDto {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub level: i32,
    pub current_exp: i32,
    pub next_level_exp: i32,
    pub attack: i32,
    pub defense: i32,
    pub max_health: i32,
    pub current_health: i32,
    pub max_mana: i32,
    pub current_mana: i32,
    pub permissions: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExperienceDto {
    /// Experience points to add. Must not be negative.
    pub amount: i32,
}

/// Result of a level-up request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LevelUpDto {
    /// Levels gained by this request; 0 when experience was insufficient.
    pub levels_gained: i32,
    pub character: CharacterDto,
}
