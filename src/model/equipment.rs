use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Item to equip. Its slot comes from the request path.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EquipItemDto {
    pub name: String,
    pub attack: i32,
    pub defense: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EquipmentDto {
    pub id: i32,
    pub character_id: i32,
    pub slot: String,
    pub name: String,
    pub attack: i32,
    pub defense: i32,
    pub equipped_at: DateTime<Utc>,
}

/// Everything a character currently has equipped, one entry per filled slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LoadoutDto {
    pub weapon: Option<EquipmentDto>,
    pub armor: Option<EquipmentDto>,
    pub skill: Option<EquipmentDto>,
}
