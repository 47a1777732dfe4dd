//! Capability tags granted to characters.
//!
//! Permissions are stored on the character row as a JSON array of key names and
//! checked by the auth guard: a request passes only when the character holds
//! every key the endpoint requires.

use sea_orm::DbErr;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PermissionKey {
    ViewOwnUser,
    CreateUser,
    UpdateOwnUser,
    DeleteOwnUser,
}

impl PermissionKey {
    /// Keys granted to every newly signed up character.
    pub const DEFAULT: [PermissionKey; 4] = [
        PermissionKey::ViewOwnUser,
        PermissionKey::CreateUser,
        PermissionKey::UpdateOwnUser,
        PermissionKey::DeleteOwnUser,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ViewOwnUser => "ViewOwnUser",
            Self::CreateUser => "CreateUser",
            Self::UpdateOwnUser => "UpdateOwnUser",
            Self::DeleteOwnUser => "DeleteOwnUser",
        }
    }

    /// Encodes a permission set into the JSON text stored in the database.
    ///
    /// # Returns
    /// - `Ok(String)` - JSON array of key names
    /// - `Err(DbErr::Custom)` - Serialization failed
    pub fn encode(keys: &[PermissionKey]) -> Result<String, DbErr> {
        serde_json::to_string(keys)
            .map_err(|e| DbErr::Custom(format!("Failed to encode permissions: {}", e)))
    }

    /// Decodes the JSON text stored in the database into a permission set.
    ///
    /// # Returns
    /// - `Ok(Vec<PermissionKey>)` - Decoded keys
    /// - `Err(DbErr::Custom)` - Stored value is not a JSON array of known keys
    pub fn decode(value: &str) -> Result<Vec<PermissionKey>, DbErr> {
        serde_json::from_str(value)
            .map_err(|e| DbErr::Custom(format!("Failed to decode permissions '{}': {}", value, e)))
    }
}
