use sea_orm_migration::{prelude::*, schema::*};

use super::m20251019_000001_create_character_table::Character;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Equipment::Table)
                    .if_not_exists()
                    .col(pk_auto(Equipment::Id))
                    .col(integer(Equipment::CharacterId))
                    .col(string(Equipment::Slot))
                    .col(string(Equipment::Name))
                    .col(integer(Equipment::Attack))
                    .col(integer(Equipment::Defense))
                    .col(
                        timestamp(Equipment::EquippedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_equipment_character_id")
                            .from(Equipment::Table, Equipment::CharacterId)
                            .to(Character::Table, Character::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One item per slot per character
        manager
            .create_index(
                Index::create()
                    .name("idx_equipment_character_slot")
                    .table(Equipment::Table)
                    .col(Equipment::CharacterId)
                    .col(Equipment::Slot)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Equipment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Equipment {
    Table,
    Id,
    CharacterId,
    Slot,
    Name,
    Attack,
    Defense,
    EquippedAt,
}
