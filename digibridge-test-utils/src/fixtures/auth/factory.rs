//! Factory functions for Google ID tokens.

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::{json, Value};

use crate::{
    constant::{TEST_GOOGLE_CLIENT_ID, TEST_GOOGLE_ISSUER, TEST_RSA_KEY_ID},
    error::TestError,
};

static PRIVATE_TEST_RSA_KEY: &[u8] = include_bytes!("./keys/private_test_rsa_key.pem");

/// Create ID token claims as Google would issue them for the test client.
///
/// The claims expire one hour from now.
pub fn mock_google_claims(sub: &str, email: &str, name: &str) -> Value {
    let now = Utc::now();
    json!({
        "iss": TEST_GOOGLE_ISSUER,
        "aud": TEST_GOOGLE_CLIENT_ID,
        "azp": TEST_GOOGLE_CLIENT_ID,
        "sub": sub,
        "email": email,
        "email_verified": true,
        "name": name,
        "picture": "https://example.com/avatar.png",
        "iat": now.timestamp(),
        "exp": (now + Duration::hours(1)).timestamp(),
    })
}

/// Sign `claims` with the test RSA key, using the key ID published by the mock JWKS.
pub fn sign_google_id_token(claims: &Value) -> Result<String, TestError> {
    sign_google_id_token_with_kid(claims, TEST_RSA_KEY_ID)
}

/// Sign `claims` with the test RSA key under an arbitrary key ID.
pub fn sign_google_id_token_with_kid(claims: &Value, kid: &str) -> Result<String, TestError> {
    let encoding_key = EncodingKey::from_rsa_pem(PRIVATE_TEST_RSA_KEY)?;

    let mut header = Header::new(Algorithm::RS256);
    header.kid = Some(kid.to_string());

    Ok(encode(&header, claims, &encoding_key)?)
}
