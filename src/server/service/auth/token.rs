use std::sync::Arc;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::{
    model::user::Role,
    server::error::{auth::AuthError, Error},
};

/// The `user` object embedded in session tokens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUser {
    pub id: i32,
    pub role: Role,
}

/// Claims of a DigiBridge session token: `{user: {id, role}, iat, exp}`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    pub user: TokenUser,
    pub iat: i64,
    pub exp: i64,
}

/// Issues and decodes HS256 session tokens.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: Arc<EncodingKey>,
    decoding_key: Arc<DecodingKey>,
    expiry: Duration,
}

impl TokenService {
    /// Creates a token service signing with `secret`, tokens expire after `expiry_hours`.
    pub fn new(secret: &str, expiry_hours: i64) -> Self {
        Self {
            encoding_key: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding_key: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
            expiry: Duration::hours(expiry_hours),
        }
    }

    /// Issues a session token for a user.
    ///
    /// # Returns
    /// - `Ok(String)` - The signed token
    /// - `Err(Error::JwtError)` - Signing failed
    pub fn issue(&self, user_id: i32, role: Role) -> Result<String, Error> {
        let now = Utc::now();
        let claims = SessionClaims {
            user: TokenUser { id: user_id, role },
            iat: now.timestamp(),
            exp: (now + self.expiry).timestamp(),
        };

        Ok(encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &self.encoding_key,
        )?)
    }

    /// Decodes and validates a session token, including its expiry.
    pub fn decode(&self, token: &str) -> Result<SessionClaims, AuthError> {
        let validation = Validation::new(Algorithm::HS256);

        decode::<SessionClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(AuthError::InvalidToken)
    }
}
