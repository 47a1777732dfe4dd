use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Character::Table)
                    .if_not_exists()
                    .col(pk_auto(Character::Id))
                    .col(string_uniq(Character::Email))
                    .col(string(Character::PasswordHash))
                    .col(string(Character::Name))
                    .col(integer(Character::Level).default(1))
                    .col(integer(Character::CurrentExp).default(0))
                    .col(integer(Character::NextLevelExp).default(100))
                    .col(integer(Character::Attack))
                    .col(integer(Character::Defense))
                    .col(integer(Character::MaxHealth))
                    .col(integer(Character::CurrentHealth))
                    .col(integer(Character::MaxMana))
                    .col(integer(Character::CurrentMana))
                    .col(text(Character::Permissions))
                    .col(integer(Character::Version).default(0))
                    .col(
                        timestamp(Character::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Character::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Character {
    Table,
    Id,
    Email,
    PasswordHash,
    Name,
    Level,
    CurrentExp,
    NextLevelExp,
    Attack,
    Defense,
    MaxHealth,
    CurrentHealth,
    MaxMana,
    CurrentMana,
    Permissions,
    Version,
    CreatedAt,
}
