//! Tests for AuthService sign-in with Google.

use digibridge::{
    model::user::Role,
    server::{
        error::{auth::AuthError, Error},
        service::auth::{google::GoogleVerifier, token::TokenService, AuthService},
    },
};
use digibridge_test_utils::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};

fn services(test: &TestContext) -> (TokenService, GoogleVerifier) {
    (
        TokenService::new(TEST_JWT_SECRET, 24),
        GoogleVerifier::new(TEST_GOOGLE_CLIENT_ID, test.jwks_url()),
    )
}

/// Expected: first sign-in creates a `user` profile, second sign-in reuses it
#[tokio::test]
async fn creates_profile_once() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_google_jwks_endpoint(1)
        .build()
        .await?;
    let (tokens, google) = services(&test);
    let service = AuthService::new(&test.db, &tokens, &google);

    let credential = auth_factory::sign_google_id_token(&auth_factory::mock_google_claims(
        "google-123",
        "amira@example.com",
        "Amira Ben Salah",
    ))?;

    let first = service.login_with_google(&credential).await;
    assert!(first.is_ok());
    let first = first.unwrap();
    assert_eq!(first.user.email, "amira@example.com");
    assert_eq!(first.user.full_name, "Amira Ben Salah");
    assert_eq!(first.user.role, Role::User);

    let claims = tokens.decode(&first.token);
    assert!(claims.is_ok());
    assert_eq!(claims.unwrap().user.id, first.user.id);

    let second = service.login_with_google(&credential).await;
    assert!(second.is_ok());
    assert_eq!(second.unwrap().user.id, first.user.id);

    let profiles = entity::prelude::UserProfile::find().count(&test.db).await?;
    assert_eq!(profiles, 1);

    test.assert_mocks();

    Ok(())
}

/// Expected: an existing admin keeps their role when signing in again
#[tokio::test]
async fn keeps_existing_role() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_all_tables()
        .with_google_jwks_endpoint(1)
        .build()
        .await?;
    let admin = test.user().insert_admin("google-admin").await?;
    let (tokens, google) = services(&test);

    let credential = auth_factory::sign_google_id_token(&auth_factory::mock_google_claims(
        "google-admin",
        "new-address@example.com",
        "Renamed Admin",
    ))?;
    let result = AuthService::new(&test.db, &tokens, &google)
        .login_with_google(&credential)
        .await;

    assert!(result.is_ok());
    let login = result.unwrap();
    assert_eq!(login.user.id, admin.id);
    assert_eq!(login.user.role, Role::Admin);
    assert_eq!(login.user.email, "new-address@example.com");

    Ok(())
}

/// Expected: Err(InvalidGoogleToken) for a token issued to another client
#[tokio::test]
async fn rejects_foreign_audience() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_google_jwks_endpoint(1)
        .build()
        .await?;
    let (tokens, google) = services(&test);

    let mut claims = auth_factory::mock_google_claims("google-123", "a@example.com", "A");
    claims["aud"] = "another-client.apps.googleusercontent.com".into();
    let credential = auth_factory::sign_google_id_token(&claims)?;

    let result = AuthService::new(&test.db, &tokens, &google)
        .login_with_google(&credential)
        .await;

    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::InvalidGoogleToken(_)))
    ));
    let profiles = entity::prelude::UserProfile::find().count(&test.db).await?;
    assert_eq!(profiles, 0);

    Ok(())
}

/// Expected: Err(InvalidGoogleToken) without contacting the JWKS endpoint
#[tokio::test]
async fn rejects_malformed_credential() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_google_jwks_endpoint(0)
        .build()
        .await?;
    let (tokens, google) = services(&test);

    let result = AuthService::new(&test.db, &tokens, &google)
        .login_with_google("not-a-jwt")
        .await;

    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::InvalidGoogleToken(_)))
    ));
    test.assert_mocks();

    Ok(())
}

/// Expected: forged key IDs are rejected after a single JWKS fetch
#[tokio::test]
async fn forged_key_ids_fetch_keys_once() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_google_jwks_endpoint(1)
        .build()
        .await?;
    let (tokens, google) = services(&test);
    let service = AuthService::new(&test.db, &tokens, &google);
    let claims = auth_factory::mock_google_claims("google-123", "a@example.com", "A");

    for i in 0..5 {
        let credential =
            auth_factory::sign_google_id_token_with_kid(&claims, &format!("bogus-{}", i))?;
        let result = service.login_with_google(&credential).await;

        assert!(matches!(
            result,
            Err(Error::AuthError(AuthError::UnknownSigningKey(_)))
        ));
    }

    test.assert_mocks();

    Ok(())
}
