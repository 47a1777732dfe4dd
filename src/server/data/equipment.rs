//! Equipment data repository for database operations.
//!
//! Rows here only record what is equipped. Keeping the owning character's attack and
//! defense in step with these rows is the equipment service's job.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::equipment::{CreateEquipmentParams, Equipment, Slot};

pub struct EquipmentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EquipmentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an equipped item.
    ///
    /// # Returns
    /// - `Ok(Equipment)` - The created item with generated ID and equip timestamp
    /// - `Err(DbErr)` - Database error, including a second item in an occupied slot
    pub async fn create(&self, params: CreateEquipmentParams) -> Result<Equipment, DbErr> {
        let entity = entity::equipment::ActiveModel {
            character_id: ActiveValue::Set(params.character_id),
            slot: ActiveValue::Set(params.slot.as_str().to_string()),
            name: ActiveValue::Set(params.name),
            attack: ActiveValue::Set(params.attack),
            defense: ActiveValue::Set(params.defense),
            equipped_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Equipment::from_entity(entity)
    }

    /// Finds the item a character has in a slot.
    ///
    /// # Returns
    /// - `Ok(Some(Equipment))` - Slot is occupied
    /// - `Ok(None)` - Slot is empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_equipped(
        &self,
        character_id: i32,
        slot: Slot,
    ) -> Result<Option<Equipment>, DbErr> {
        let entity = entity::prelude::Equipment::find()
            .filter(entity::equipment::Column::CharacterId.eq(character_id))
            .filter(entity::equipment::Column::Slot.eq(slot.as_str()))
            .one(self.db)
            .await?;

        entity.map(Equipment::from_entity).transpose()
    }

    /// Gets every item a character has equipped, oldest first.
    pub async fn get_by_character(&self, character_id: i32) -> Result<Vec<Equipment>, DbErr> {
        entity::prelude::Equipment::find()
            .filter(entity::equipment::Column::CharacterId.eq(character_id))
            .order_by_asc(entity::equipment::Column::EquippedAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(Equipment::from_entity)
            .collect()
    }

    /// Deletes a single item.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Equipment::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes every item a character has equipped.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of items deleted
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_by_character(&self, character_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Equipment::delete_many()
            .filter(entity::equipment::Column::CharacterId.eq(character_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
