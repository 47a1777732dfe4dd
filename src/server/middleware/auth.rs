use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::character::CharacterRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::{character::Character, permission::PermissionKey},
};

/// Access requirement checked by [`AuthGuard::require`].
///
/// Variants carrying a character ID also require the logged in character to be that
/// character.
pub enum Permission {
    /// View the logged in character itself.
    ViewSelf,
    /// Delete the logged in character itself.
    DeleteSelf,
    ViewCharacter(i32),
    UpdateCharacter(i32),
    DeleteCharacter(i32),
}

impl Permission {
    fn key(&self) -> PermissionKey {
        match self {
            Self::ViewSelf | Self::ViewCharacter(_) => PermissionKey::ViewOwnUser,
            Self::UpdateCharacter(_) => PermissionKey::UpdateOwnUser,
            Self::DeleteSelf | Self::DeleteCharacter(_) => PermissionKey::DeleteOwnUser,
        }
    }

    fn target(&self) -> Option<i32> {
        match self {
            Self::ViewSelf | Self::DeleteSelf => None,
            Self::ViewCharacter(id) | Self::UpdateCharacter(id) | Self::DeleteCharacter(id) => {
                Some(*id)
            }
        }
    }
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the logged in character and checks every requirement.
    ///
    /// All requirements must pass; the first failing one is reported.
    ///
    /// # Returns
    /// - `Ok(Character)` - The logged in character
    /// - `Err(AuthError::UserNotInSession)` - Nobody is logged in
    /// - `Err(AuthError::UserNotInDatabase)` - Session refers to a deleted character
    /// - `Err(AuthError::MissingPermission)` - A required key is not held
    /// - `Err(AuthError::NotOwner)` - A requirement targets another character
    pub async fn require(&self, permissions: &[Permission]) -> Result<Character, AppError> {
        let character_repo = CharacterRepository::new(self.db);

        let Some(character_id) = AuthSession::new(self.session).get_character_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(character) = character_repo.find_by_id(character_id).await? else {
            return Err(AuthError::UserNotInDatabase(character_id).into());
        };

        for permission in permissions {
            let key = permission.key();
            if !character.has_permission(key) {
                return Err(AuthError::MissingPermission(character_id, key).into());
            }

            if let Some(target) = permission.target() {
                if target != character_id {
                    return Err(AuthError::NotOwner(character_id, target).into());
                }
            }
        }

        Ok(character)
    }
}
