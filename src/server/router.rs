use axum::{routing::get, Json, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{
    controller::{
        auth::{self, AUTH_TAG},
        character::{self, CHARACTER_TAG},
        equipment::{self, EQUIPMENT_TAG},
        progression::{self, PROGRESSION_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Questboard", description = "Character, equipment and progression API"),
    tags(
        (name = AUTH_TAG, description = "Signup, login and session"),
        (name = CHARACTER_TAG, description = "Character lookup and deletion"),
        (name = EQUIPMENT_TAG, description = "Weapon, armor and skill slots"),
        (name = PROGRESSION_TAG, description = "Experience and levelling")
    )
)]
struct ApiDoc;

/// Builds every API route plus `/openapi.json` describing them.
///
/// Static segments (`me`, `login`, `equipment`, `experience`, `levelup`) take priority
/// over the `{id}` and `{slot}` captures at the same position.
pub fn router() -> Router<AppState> {
    let (router, api) = api_router().split_for_parts();

    router.route(
        "/openapi.json",
        get(move || {
            let api = api.clone();
            async move { Json(api) }
        }),
    )
}

fn api_router() -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            auth::signup,
            character::get_current_character,
            character::delete_current_character
        ))
        .routes(routes!(auth::login))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_me))
        .routes(routes!(character::delete_character))
        .routes(routes!(equipment::get_loadout))
        .routes(routes!(equipment::get_equipped))
        .routes(routes!(progression::add_experience))
        .routes(routes!(progression::level_up))
        .routes(routes!(equipment::equip, equipment::unequip))
}
