use crate::server::{
    data::character::CharacterRepository,
    model::{character::CreateCharacterParams, permission::PermissionKey},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_credentials;
mod update_stats;
