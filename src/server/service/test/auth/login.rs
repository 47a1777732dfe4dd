use super::*;

/// Tests logging in with the credentials used at signup.
///
/// Expected: Ok with the signed up character
#[tokio::test]
async fn accepts_valid_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new().with_character_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    let created = service
        .signup(signup_params("hero@example.com", "hunter2222"))
        .await?;

    let character = service.login("hero@example.com", "hunter2222").await?;

    assert_eq!(character.id, created.id);

    Ok(())
}

/// Tests logging in with a wrong password.
///
/// Expected: Err(AuthError::InvalidCredentials)
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_character_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    service
        .signup(signup_params("hero@example.com", "hunter2222"))
        .await?;

    let result = service.login("hero@example.com", "hunter3333").await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests logging in with an unregistered email.
///
/// Expected: Err(AuthError::InvalidCredentials), same as a wrong password
#[tokio::test]
async fn rejects_unknown_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_character_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    let result = service.login("nobody@example.com", "hunter2222").await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}
