pub use super::character::Entity as Character;
pub use super::equipment::Entity as Equipment;
