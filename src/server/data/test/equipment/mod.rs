use crate::server::{
    data::equipment::EquipmentRepository,
    model::equipment::{CreateEquipmentParams, Slot},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_equipped;
mod get_by_character;
