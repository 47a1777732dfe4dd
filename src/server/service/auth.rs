//! Signup and login.
//!
//! Passwords are stored as Argon2 PHC strings. Login looks the character up by email
//! and verifies the password against the stored hash; unknown emails and wrong
//! passwords produce the same error.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::Rng;
use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    data::character::CharacterRepository,
    error::{auth::AuthError, AppError},
    model::character::{Character, CreateCharacterParams, SignupParams},
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a character that can log in with the given email and password.
    ///
    /// # Returns
    /// - `Ok(Character)` - New level 1 character holding every default permission
    /// - `Err(AppError::BadRequest)` - Malformed email, short password or blank name
    /// - `Err(AppError::Conflict)` - Email already registered
    pub async fn signup(&self, params: SignupParams) -> Result<Character, AppError> {
        params.validate().map_err(AppError::BadRequest)?;

        let repo = CharacterRepository::new(self.db);

        if repo.email_exists(&params.email).await? {
            return Err(AppError::Conflict(format!(
                "Email {} is already registered",
                params.email
            )));
        }

        let password_hash = hash_password(&params.password)?;
        let email = params.email.clone();
        let character = repo
            .create(CreateCharacterParams::new(
                params.email,
                params.name,
                password_hash,
            ))
            .await
            .map_err(|e| match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    AppError::Conflict(format!("Email {} is already registered", email))
                }
                _ => e.into(),
            })?;

        tracing::info!("Created character {} ({})", character.id, character.name);

        Ok(character)
    }

    /// Verifies credentials and returns the matching character.
    ///
    /// # Returns
    /// - `Ok(Character)` - Credentials are valid
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    pub async fn login(&self, email: &str, password: &str) -> Result<Character, AppError> {
        let repo = CharacterRepository::new(self.db);

        let Some(credentials) = repo.find_credentials(email.trim()).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &credentials.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        let Some(character) = repo.find_by_id(credentials.id).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        Ok(character)
    }
}

fn hash_password(password: &str) -> Result<String, AppError> {
    let mut salt_bytes = [0u8; 16];
    rand::rng().fill(&mut salt_bytes);

    let salt = SaltString::encode_b64(&salt_bytes)
        .map_err(|e| AppError::InternalError(format!("Failed to encode password salt: {}", e)))?;

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))?;

    Ok(hash.to_string())
}

fn verify_password(password: &str, stored_hash: &str) -> bool {
    let parsed = match PasswordHash::new(stored_hash) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::warn!("Stored password hash is unreadable: {}", e);
            return false;
        }
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}
