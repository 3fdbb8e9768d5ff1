//! Verification of Google Identity Services ID tokens.

use std::{collections::HashMap, sync::Arc, time::Duration};

use jsonwebtoken::{
    decode, decode_header,
    jwk::{Jwk, JwkSet},
    Algorithm, DecodingKey, Validation,
};
use serde::Deserialize;
use tokio::{sync::RwLock, time::Instant};

use crate::server::{data::user::GoogleProfile, error::auth::AuthError};

static GOOGLE_ISSUERS: [&str; 2] = ["accounts.google.com", "https://accounts.google.com"];

/// Minimum time between two JWKS fetches triggered by unknown key IDs
pub const MIN_KEY_REFRESH_INTERVAL: Duration = Duration::from_secs(60);

/// Claims read from a Google ID token.
#[derive(Debug, Deserialize)]
struct GoogleClaims {
    sub: String,
    email: String,
    name: Option<String>,
    picture: Option<String>,
}

/// Verifies Google ID tokens against Google's published signing keys.
///
/// Keys are fetched from the JWKS endpoint on first use and cached. A token naming a key ID
/// that is not cached refreshes the cache, at most once per refresh interval; within the
/// interval such tokens are rejected without contacting Google.
#[derive(Clone)]
pub struct GoogleVerifier {
    client_id: String,
    jwks_url: String,
    http: reqwest::Client,
    refresh_interval: Duration,
    keys: Arc<RwLock<KeyCache>>,
}

#[derive(Default)]
struct KeyCache {
    keys: HashMap<String, DecodingKey>,
    refreshed_at: Option<Instant>,
}

impl KeyCache {
    fn refreshed_within(&self, interval: Duration) -> bool {
        self.refreshed_at
            .is_some_and(|refreshed_at| refreshed_at.elapsed() < interval)
    }
}

impl GoogleVerifier {
    /// Creates a verifier accepting tokens issued for `client_id`.
    ///
    /// # Arguments
    /// - `client_id` - Google OAuth client ID, the expected `aud` claim
    /// - `jwks_url` - URL of the JWKS document
    pub fn new(client_id: impl Into<String>, jwks_url: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            jwks_url: jwks_url.into(),
            http: reqwest::Client::new(),
            refresh_interval: MIN_KEY_REFRESH_INTERVAL,
            keys: Arc::new(RwLock::new(KeyCache::default())),
        }
    }

    /// Overrides the minimum time between key refreshes.
    pub fn with_refresh_interval(mut self, refresh_interval: Duration) -> Self {
        self.refresh_interval = refresh_interval;
        self
    }

    /// Verifies an ID token and extracts the profile it describes.
    ///
    /// Checks the RS256 signature, expiry, audience and issuer.
    ///
    /// # Returns
    /// - `Ok(GoogleProfile)` - Token is valid
    /// - `Err(AuthError::InvalidGoogleToken)` - Malformed token or failed claim validation
    /// - `Err(AuthError::UnknownSigningKey)` - Key ID not published, or keys were refreshed too
    ///   recently to fetch them again
    /// - `Err(AuthError::JwksFetchFailed)` - Signing keys could not be fetched
    pub async fn verify(&self, credential: &str) -> Result<GoogleProfile, AuthError> {
        let header =
            decode_header(credential).map_err(|e| AuthError::InvalidGoogleToken(e.to_string()))?;

        if header.alg != Algorithm::RS256 {
            return Err(AuthError::InvalidGoogleToken(format!(
                "unexpected algorithm {:?}",
                header.alg
            )));
        }

        let kid = header
            .kid
            .ok_or_else(|| AuthError::InvalidGoogleToken("missing key ID".to_string()))?;
        let key = self.signing_key(&kid).await?;

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[&self.client_id]);
        validation.set_issuer(&GOOGLE_ISSUERS);

        let claims = decode::<GoogleClaims>(credential, &key, &validation)
            .map_err(|e| AuthError::InvalidGoogleToken(e.to_string()))?
            .claims;

        Ok(GoogleProfile {
            full_name: claims.name.unwrap_or_else(|| claims.email.clone()),
            google_id: claims.sub,
            email: claims.email,
            avatar_url: claims.picture,
        })
    }

    async fn signing_key(&self, kid: &str) -> Result<DecodingKey, AuthError> {
        {
            let cache = self.keys.read().await;
            if let Some(key) = cache.keys.get(kid) {
                return Ok(key.clone());
            }
            if cache.refreshed_within(self.refresh_interval) {
                return Err(AuthError::UnknownSigningKey(kid.to_string()));
            }
        }

        let mut cache = self.keys.write().await;

        // Another request may have refreshed the keys while this one waited for the lock
        if let Some(key) = cache.keys.get(kid) {
            return Ok(key.clone());
        }
        if cache.refreshed_within(self.refresh_interval) {
            return Err(AuthError::UnknownSigningKey(kid.to_string()));
        }

        tracing::debug!(kid = %kid, "Refreshing Google signing keys");
        cache.keys = self.fetch_keys().await?;
        cache.refreshed_at = Some(Instant::now());

        cache
            .keys
            .get(kid)
            .cloned()
            .ok_or_else(|| AuthError::UnknownSigningKey(kid.to_string()))
    }

    async fn fetch_keys(&self) -> Result<HashMap<String, DecodingKey>, AuthError> {
        let jwks: JwkSet = self
            .http
            .get(&self.jwks_url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(jwks.keys.iter().filter_map(decoding_key).collect())
    }
}

fn decoding_key(jwk: &Jwk) -> Option<(String, DecodingKey)> {
    let kid = jwk.common.key_id.clone()?;

    match DecodingKey::from_jwk(jwk) {
        Ok(key) => Some((kid, key)),
        Err(e) => {
            tracing::warn!(kid = %kid, "Skipping unusable Google signing key: {}", e);
            None
        }
    }
}
