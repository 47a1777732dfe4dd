use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        character::{CharacterDto, ExperienceDto, LevelUpDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::progression::ProgressionService,
        state::AppState,
    },
};

/// Tag for grouping progression endpoints in OpenAPI documentation
pub static PROGRESSION_TAG: &str = "progression";

/// Add experience to a character without levelling.
///
/// # Access Control
/// - `UpdateOwnUser` - Required permission key, and `id` must be the logged in character
///
/// # Returns
/// - `200 OK` - Character with the experience banked
/// - `400 Bad Request` - Negative or overflowing amount
/// - `403 Forbidden` - Missing permission or not owner
/// - `409 Conflict` - Character was modified concurrently, retry
#[utoipa::path(
    patch,
    path = "/updatecharacter/{id}/experience",
    tag = PROGRESSION_TAG,
    params(
        ("id" = i32, Path, description = "Character ID")
    ),
    request_body = ExperienceDto,
    responses(
        (status = 200, description = "Experience added", body = CharacterDto),
        (status = 400, description = "Invalid amount", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission or not owner", body = ErrorDto),
        (status = 409, description = "Concurrent modification", body = ErrorDto)
    ),
)]
pub async fn add_experience(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<ExperienceDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::UpdateCharacter(id)])
        .await?;

    let character = ProgressionService::new(&state.db, state.health_growth)
        .add_experience(id, payload.amount)
        .await?;

    Ok((StatusCode::OK, Json(character.into_dto())))
}

/// Convert banked experience into levels.
///
/// Gains as many levels as the experience covers, raising the threshold by 100 per
/// level, and applies per-level growth. With too little experience nothing changes
/// and `levels_gained` is 0.
///
/// # Access Control
/// - `UpdateOwnUser` - Required permission key, and `id` must be the logged in character
///
/// # Returns
/// - `200 OK` - Levels gained and the character afterwards
/// - `400 Bad Request` - Growth would overflow a stat
/// - `403 Forbidden` - Missing permission or not owner
/// - `409 Conflict` - Character was modified concurrently, retry
#[utoipa::path(
    patch,
    path = "/updatecharacter/{id}/levelup",
    tag = PROGRESSION_TAG,
    params(
        ("id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Level-up applied", body = LevelUpDto),
        (status = 400, description = "Stat overflow", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission or not owner", body = ErrorDto),
        (status = 409, description = "Concurrent modification", body = ErrorDto)
    ),
)]
pub async fn level_up(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::UpdateCharacter(id)])
        .await?;

    let (levels_gained, character) = ProgressionService::new(&state.db, state.health_growth)
        .level_up(id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(LevelUpDto {
            levels_gained,
            character: character.into_dto(),
        }),
    ))
}
