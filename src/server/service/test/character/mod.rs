use crate::server::{
    data::{character::CharacterRepository, equipment::EquipmentRepository},
    error::AppError,
    service::character::{load_character, save_character, CharacterService},
};
use test_utils::{builder::TestBuilder, factory};

mod save;
