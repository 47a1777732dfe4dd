use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Signup payload. Creates a character that doubles as the login identity.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SignupDto {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CredentialsDto {
    pub email: String,
    pub password: String,
}

/// Reduced view of the logged in character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProfileDto {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub permissions: Vec<String>,
}
