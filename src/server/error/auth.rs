use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::model::permission::PermissionKey};

#[derive(Error, Debug)]
pub enum AuthError {
    /// No character ID is stored in the request's session.
    ///
    /// The caller never logged in, logged out, or the session expired.
    /// Results in a 401 Unauthorized response.
    #[error("No character is logged in for this session")]
    UserNotInSession,

    /// The session refers to a character that no longer exists.
    ///
    /// Happens after the character was deleted while a session for it was still alive.
    /// Results in a 404 Not Found response.
    #[error("Character {0} from session was not found in database")]
    UserNotInDatabase(i32),

    /// Email unknown or password does not match.
    ///
    /// Both cases share one message so login responses don't reveal which emails exist.
    /// Results in a 401 Unauthorized response.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Logged in character lacks a required permission key.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Character {0} lacks permission {1:?}")]
    MissingPermission(i32, PermissionKey),

    /// Logged in character tried to act on another character.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Character {0} denied access to character {1}")]
    NotOwner(i32, i32),
}

/// Converts authentication errors into HTTP responses.
///
/// All errors are logged at debug level while the client-facing messages stay generic.
///
/// # Returns
/// - 401 Unauthorized - For missing sessions and bad credentials
/// - 403 Forbidden - For missing permissions and foreign characters
/// - 404 Not Found - For sessions pointing at deleted characters
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession => (StatusCode::UNAUTHORIZED, "Not logged in"),
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid email or password"),
            Self::UserNotInDatabase(_) => (StatusCode::NOT_FOUND, "Character not found"),
            Self::MissingPermission(_, _) | Self::NotOwner(_, _) => {
                (StatusCode::FORBIDDEN, "Access denied")
            }
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
