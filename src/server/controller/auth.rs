use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        auth::{CredentialsDto, ProfileDto, SignupDto},
        character::CharacterDto,
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            session::AuthSession,
        },
        model::character::SignupParams,
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Sign up a new character.
///
/// Creates a level 1 character with starting stats that doubles as the login
/// identity. The new character holds every default permission key. Does not log in.
///
/// # Returns
/// - `201 Created` - Character created
/// - `400 Bad Request` - Malformed email, password shorter than 8 characters or blank name
/// - `409 Conflict` - Email already registered
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/characters",
    tag = AUTH_TAG,
    request_body = SignupDto,
    responses(
        (status = 201, description = "Character created", body = CharacterDto),
        (status = 400, description = "Invalid signup data", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = SignupParams::from_dto(payload);
    let character = AuthService::new(&state.db).signup(params).await?;

    Ok((StatusCode::CREATED, Json(character.into_dto())))
}

/// Log in with email and password.
///
/// Stores the character in the session so later requests are authenticated by the
/// session cookie.
///
/// # Returns
/// - `200 OK` - Logged in, returns the character's profile
/// - `401 Unauthorized` - Unknown email or wrong password
/// - `500 Internal Server Error` - Database or session error
#[utoipa::path(
    post,
    path = "/characters/login",
    tag = AUTH_TAG,
    request_body = CredentialsDto,
    responses(
        (status = 200, description = "Logged in", body = ProfileDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CredentialsDto>,
) -> Result<impl IntoResponse, AppError> {
    let character = AuthService::new(&state.db)
        .login(&payload.email, &payload.password)
        .await?;

    AuthSession::new(&session)
        .set_character_id(character.id)
        .await?;

    tracing::debug!("Character {} logged in", character.id);

    Ok((StatusCode::OK, Json(character.into_profile_dto())))
}

/// Log out.
///
/// Clears the session. Succeeds whether or not anyone was logged in.
#[utoipa::path(
    post,
    path = "/characters/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Logged out")
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the logged in character's profile.
///
/// # Access Control
/// - `ViewOwnUser` - Required permission key
///
/// # Returns
/// - `200 OK` - Profile of the logged in character
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Missing `ViewOwnUser`
/// - `404 Not Found` - Session refers to a deleted character
#[utoipa::path(
    get,
    path = "/characters/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current profile", body = ProfileDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 404, description = "Character no longer exists", body = ErrorDto)
    ),
)]
pub async fn get_me(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let character = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ViewSelf])
        .await?;

    Ok((StatusCode::OK, Json(character.into_profile_dto())))
}
