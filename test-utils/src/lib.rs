//! Questboard Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the questboard
//! backend. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and session
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders that insert characters and equipment with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn equips_a_weapon() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_character_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let character = factory::create_character(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
