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
        equipment::{EquipItemDto, EquipmentDto, LoadoutDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::equipment::{CreateEquipmentParams, Slot},
        service::equipment::EquipmentService,
        state::AppState,
    },
};

/// Tag for grouping equipment endpoints in OpenAPI documentation
pub static EQUIPMENT_TAG: &str = "equipment";

/// Get everything a character has equipped.
///
/// # Access Control
/// - `ViewOwnUser` - Required permission key, and `id` must be the logged in character
///
/// # Returns
/// - `200 OK` - Loadout with one entry per slot, `null` for empty slots
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Missing permission or not owner
#[utoipa::path(
    get,
    path = "/characters/{id}/equipment",
    tag = EQUIPMENT_TAG,
    params(
        ("id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Equipped items", body = LoadoutDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission or not owner", body = ErrorDto)
    ),
)]
pub async fn get_loadout(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ViewCharacter(id)])
        .await?;

    let loadout = EquipmentService::new(&state.db).get_loadout(id).await?;

    Ok((StatusCode::OK, Json(loadout.into_dto())))
}

/// Get the item a character has in one slot.
///
/// # Access Control
/// - `ViewOwnUser` - Required permission key, and `id` must be the logged in character
///
/// # Returns
/// - `200 OK` - The equipped item
/// - `400 Bad Request` - Unknown slot name
/// - `403 Forbidden` - Missing permission or not owner
/// - `404 Not Found` - Slot is empty
#[utoipa::path(
    get,
    path = "/characters/{id}/{slot}",
    tag = EQUIPMENT_TAG,
    params(
        ("id" = i32, Path, description = "Character ID"),
        ("slot" = Slot, Path, description = "weapon, armor or skill")
    ),
    responses(
        (status = 200, description = "Equipped item", body = EquipmentDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission or not owner", body = ErrorDto),
        (status = 404, description = "Nothing equipped in slot", body = ErrorDto)
    ),
)]
pub async fn get_equipped(
    State(state): State<AppState>,
    session: Session,
    Path((id, slot)): Path<(i32, Slot)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ViewCharacter(id)])
        .await?;

    let Some(item) = EquipmentService::new(&state.db)
        .get_equipped(id, slot)
        .await?
    else {
        return Err(AppError::NotFound(format!(
            "Character {} has no {} equipped",
            id, slot
        )));
    };

    Ok((StatusCode::OK, Json(item.into_dto())))
}

/// Equip an item, replacing whatever was in the slot.
///
/// Weapons and armor add their attack and defense to the character; the replaced
/// item's bonus is removed. Skills never change stats.
///
/// # Access Control
/// - `UpdateOwnUser` - Required permission key, and `id` must be the logged in character
///
/// # Returns
/// - `200 OK` - The newly equipped item
/// - `400 Bad Request` - Unknown slot name, malformed body or the bonus would overflow a stat
/// - `403 Forbidden` - Missing permission or not owner
/// - `409 Conflict` - Character was modified concurrently, retry
#[utoipa::path(
    patch,
    path = "/updatecharacter/{id}/{slot}",
    tag = EQUIPMENT_TAG,
    params(
        ("id" = i32, Path, description = "Character ID"),
        ("slot" = Slot, Path, description = "weapon, armor or skill")
    ),
    request_body = EquipItemDto,
    responses(
        (status = 200, description = "Item equipped", body = EquipmentDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission or not owner", body = ErrorDto),
        (status = 409, description = "Concurrent modification", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn equip(
    State(state): State<AppState>,
    session: Session,
    Path((id, slot)): Path<(i32, Slot)>,
    Json(payload): Json<EquipItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::UpdateCharacter(id)])
        .await?;

    let params = CreateEquipmentParams::from_dto(id, slot, payload);
    let item = EquipmentService::new(&state.db).equip(params).await?;

    Ok((StatusCode::OK, Json(item.into_dto())))
}

/// Unequip the item in a slot.
///
/// # Access Control
/// - `UpdateOwnUser` - Required permission key, and `id` must be the logged in character
///
/// # Returns
/// - `204 No Content` - Item removed and its bonus subtracted
/// - `403 Forbidden` - Missing permission or not owner
/// - `404 Not Found` - Slot is empty
/// - `409 Conflict` - Character was modified concurrently, retry
#[utoipa::path(
    delete,
    path = "/updatecharacter/{id}/{slot}",
    tag = EQUIPMENT_TAG,
    params(
        ("id" = i32, Path, description = "Character ID"),
        ("slot" = Slot, Path, description = "weapon, armor or skill")
    ),
    responses(
        (status = 204, description = "Item unequipped"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission or not owner", body = ErrorDto),
        (status = 404, description = "Nothing equipped in slot", body = ErrorDto),
        (status = 409, description = "Concurrent modification", body = ErrorDto)
    ),
)]
pub async fn unequip(
    State(state): State<AppState>,
    session: Session,
    Path((id, slot)): Path<(i32, Slot)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::UpdateCharacter(id)])
        .await?;

    EquipmentService::new(&state.db).unequip(id, slot).await?;

    Ok(StatusCode::NO_CONTENT)
}
