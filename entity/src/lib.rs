//! SeaORM entity models for the questboard database schema.
//!
//! Each module mirrors one table created by the `migration` crate. The
//! `prelude` module re-exports the `Entity` types under table-style names so
//! callers can write `entity::prelude::Character::find()`.

pub mod character;
pub mod equipment;
pub mod prelude;
