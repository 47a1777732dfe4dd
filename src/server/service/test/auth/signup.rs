use super::*;
use sea_orm::EntityTrait;

/// Tests signing up a new character.
///
/// Verifies that the character receives every default permission and that the
/// password is not stored in plain text.
///
/// Expected: Ok with a level 1 character
#[tokio::test]
async fn creates_character_with_default_permissions() -> Result<(), AppError> {
    let test = TestBuilder::new().with_character_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    let character = service
        .signup(signup_params("hero@example.com", "hunter2222"))
        .await?;

    assert_eq!(character.level, 1);
    assert_eq!(character.permissions, PermissionKey::DEFAULT.to_vec());

    let stored = entity::prelude::Character::find_by_id(character.id)
        .one(db)
        .await?
        .unwrap();
    assert_ne!(stored.password_hash, "hunter2222");

    Ok(())
}

/// Tests signing up with an email that is already registered.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn fails_for_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_character_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    service
        .signup(signup_params("hero@example.com", "hunter2222"))
        .await?;

    let result = service
        .signup(signup_params("hero@example.com", "another-password"))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests signing up with a password below the minimum length.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn fails_for_short_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_character_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    let result = service
        .signup(signup_params("hero@example.com", "short"))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}


/// Tests two inserts racing for the same email past the existence check.
///
/// Verifies that the unique email index violation surfaces as a conflict rather
/// than an internal error.
///
/// Expected: Err(AppError::Conflict) for the second insert
#[tokio::test]
async fn duplicate_insert_maps_to_conflict() -> Result<(), AppError> {
    let test = TestBuilder::new().with_character_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CharacterRepository::new(db);
    let params = || {
        CreateCharacterParams::new(
            "twin@example.com".to_string(),
            "Twin".to_string(),
            "hash".to_string(),
        )
    };

    repo.create(params()).await?;
    let result = repo.create(params()).await.map_err(AppError::from);

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}
