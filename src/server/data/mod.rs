//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models, keeping
//! the data layer and business logic separate. Each repository borrows any
//! `ConnectionTrait` so services can run several repository calls in one transaction.

pub mod character;
pub mod equipment;
