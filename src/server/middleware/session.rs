//! Type-safe session management wrapper.
//!
//! `AuthSession` wraps the tower-sessions `Session` and exposes only the login state
//! the application keeps: the ID of the character the caller logged in as. Keeping the
//! key and value type in one place prevents typos and type mismatches across handlers.

use tower_sessions::Session;

use crate::server::error::AppError;

const SESSION_AUTH_CHARACTER_ID: &str = "auth:character";

/// Authentication session management.
///
/// Handles storing and retrieving the logged in character's ID and session lifecycle
/// operations.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    ///
    /// # Arguments
    /// - `session` - Reference to the tower-sessions Session to wrap
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the character's ID in the session after a successful login.
    ///
    /// # Returns
    /// - `Ok(())` - Character ID successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_character_id(&self, character_id: i32) -> Result<(), AppError> {
        self.session
            .insert(SESSION_AUTH_CHARACTER_ID, character_id)
            .await?;
        Ok(())
    }

    /// Retrieves the logged in character's ID.
    ///
    /// # Returns
    /// - `Ok(Some(character_id))` - A character is logged in
    /// - `Ok(None)` - No character in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_character_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_AUTH_CHARACTER_ID).await?)
    }

    /// Clears all data from the session.
    ///
    /// Used during logout and after the logged in character is deleted.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}
