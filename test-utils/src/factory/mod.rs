//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let character = factory::create_character(&db).await?;
//! let sword = factory::create_equipment(&db, character.id, "weapon").await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let character = factory::character::CharacterFactory::new(&db)
//!     .attack(10)
//!     .defense(5)
//!     .build()
//!     .await?;
//! ```

pub mod character;
pub mod equipment;
pub mod helpers;

pub use character::create_character;
pub use equipment::create_equipment;
