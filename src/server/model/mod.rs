//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Stat arithmetic for equipment
//! and progression lives here so it can be tested without a database.

pub mod character;
pub mod equipment;
pub mod permission;
pub mod progression;
