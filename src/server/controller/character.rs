use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, character::CharacterDto},
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            session::AuthSession,
        },
        service::character::CharacterService,
        state::AppState,
    },
};

/// Tag for grouping character endpoints in OpenAPI documentation
pub static CHARACTER_TAG: &str = "character";

/// Get the logged in character with all stats.
///
/// # Access Control
/// - `ViewOwnUser` - Required permission key
///
/// # Returns
/// - `200 OK` - Logged in character
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Missing `ViewOwnUser`
/// - `404 Not Found` - Session refers to a deleted character
#[utoipa::path(
    get,
    path = "/characters",
    tag = CHARACTER_TAG,
    responses(
        (status = 200, description = "Logged in character", body = CharacterDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 404, description = "Character no longer exists", body = ErrorDto)
    ),
)]
pub async fn get_current_character(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let character = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ViewSelf])
        .await?;

    Ok((StatusCode::OK, Json(character.into_dto())))
}

/// Delete the logged in character.
///
/// Removes the character's weapon, armor and skill before the character itself, then
/// ends the session.
///
/// # Access Control
/// - `DeleteOwnUser` - Required permission key
///
/// # Returns
/// - `204 No Content` - Character and equipment deleted
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Missing `DeleteOwnUser`
#[utoipa::path(
    delete,
    path = "/characters",
    tag = CHARACTER_TAG,
    responses(
        (status = 204, description = "Character deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_current_character(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let character = AuthGuard::new(&state.db, &session)
        .require(&[Permission::DeleteSelf])
        .await?;

    delete_and_logout(&state, &session, character.id).await
}

/// Delete a character by ID.
///
/// Same cascade as deleting the logged in character; the ID must be the caller's own.
///
/// # Access Control
/// - `DeleteOwnUser` - Required permission key, and `id` must be the logged in character
///
/// # Returns
/// - `204 No Content` - Character and equipment deleted
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Missing `DeleteOwnUser` or not the caller's character
#[utoipa::path(
    delete,
    path = "/characters/{id}",
    tag = CHARACTER_TAG,
    params(
        ("id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 204, description = "Character deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission or not owner", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_character(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::DeleteCharacter(id)])
        .await?;

    delete_and_logout(&state, &session, id).await
}

async fn delete_and_logout(
    state: &AppState,
    session: &Session,
    id: i32,
) -> Result<StatusCode, AppError> {
    if !CharacterService::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound(format!("Character {} not found", id)));
    }

    AuthSession::new(session).clear().await;

    Ok(StatusCode::NO_CONTENT)
}
