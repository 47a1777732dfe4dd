//! Equipment domain models and parameters.
//!
//! A character has three slots. Weapons and armor add their attack and defense
//! to the character while equipped; skills occupy a slot without touching stats.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

use crate::model::equipment::{EquipItemDto, EquipmentDto, LoadoutDto};

/// Equipment category a character can hold exactly one item of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Weapon,
    Armor,
    Skill,
}

impl Slot {
    /// Name stored in the `equipment.slot` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weapon => "weapon",
            Self::Armor => "armor",
            Self::Skill => "skill",
        }
    }

    /// Whether items in this slot contribute attack and defense.
    pub fn grants_stats(&self) -> bool {
        match self {
            Self::Weapon | Self::Armor => true,
            Self::Skill => false,
        }
    }
}

impl FromStr for Slot {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "weapon" => Ok(Self::Weapon),
            "armor" => Ok(Self::Armor),
            "skill" => Ok(Self::Skill),
            other => Err(format!("unknown equipment slot '{}'", other)),
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attack and defense an equipped item adds to its character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatBonus {
    pub attack: i32,
    pub defense: i32,
}

impl StatBonus {
    /// Bonus for an item in `slot`; zero for slots that don't grant stats.
    pub fn for_slot(slot: Slot, attack: i32, defense: i32) -> Self {
        if slot.grants_stats() {
            Self { attack, defense }
        } else {
            Self::default()
        }
    }
}

/// An item currently equipped by a character.
#[derive(Debug, Clone, PartialEq)]
pub struct Equipment {
    pub id: i32,
    pub character_id: i32,
    pub slot: Slot,
    pub name: String,
    pub attack: i32,
    pub defense: i32,
    pub equipped_at: DateTime<Utc>,
}

impl Equipment {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Equipment)` - Converted domain model
    /// - `Err(DbErr::Custom)` - Stored slot name is not a known slot
    pub fn from_entity(entity: entity::equipment::Model) -> Result<Self, DbErr> {
        let slot = entity
            .slot
            .parse::<Slot>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse slot: {}", e)))?;

        Ok(Self {
            id: entity.id,
            character_id: entity.character_id,
            slot,
            name: entity.name,
            attack: entity.attack,
            defense: entity.defense,
            equipped_at: entity.equipped_at,
        })
    }

    /// Stats this item contributes to its character.
    pub fn bonus(&self) -> StatBonus {
        StatBonus::for_slot(self.slot, self.attack, self.defense)
    }

    pub fn into_dto(self) -> EquipmentDto {
        EquipmentDto {
            id: self.id,
            character_id: self.character_id,
            slot: self.slot.to_string(),
            name: self.name,
            attack: self.attack,
            defense: self.defense,
            equipped_at: self.equipped_at,
        }
    }
}

/// Parameters for equipping a new item into a character's slot.
#[derive(Debug, Clone)]
pub struct CreateEquipmentParams {
    pub character_id: i32,
    pub slot: Slot,
    pub name: String,
    pub attack: i32,
    pub defense: i32,
}

impl CreateEquipmentParams {
    pub fn from_dto(character_id: i32, slot: Slot, dto: EquipItemDto) -> Self {
        Self {
            character_id,
            slot,
            name: dto.name,
            attack: dto.attack,
            defense: dto.defense,
        }
    }

    /// Stats the item will contribute once equipped.
    pub fn bonus(&self) -> StatBonus {
        StatBonus::for_slot(self.slot, self.attack, self.defense)
    }
}

/// A character's equipped items keyed by slot.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Loadout {
    pub weapon: Option<Equipment>,
    pub armor: Option<Equipment>,
    pub skill: Option<Equipment>,
}

impl Loadout {
    /// Sorts items into their slots. A later item replaces an earlier one in
    /// the same slot.
    pub fn from_items(items: Vec<Equipment>) -> Self {
        let mut loadout = Self::default();
        for item in items {
            match item.slot {
                Slot::Weapon => loadout.weapon = Some(item),
                Slot::Armor => loadout.armor = Some(item),
                Slot::Skill => loadout.skill = Some(item),
            }
        }
        loadout
    }

    pub fn into_dto(self) -> LoadoutDto {
        LoadoutDto {
            weapon: self.weapon.map(Equipment::into_dto),
            armor: self.armor.map(Equipment::into_dto),
            skill: self.skill.map(Equipment::into_dto),
        }
    }
}
