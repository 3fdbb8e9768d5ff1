//! Mock Google JWKS endpoint.

use mockito::Mock;
use serde_json::json;

use crate::{
    constant::{TEST_GOOGLE_JWKS_PATH, TEST_RSA_EXPONENT, TEST_RSA_KEY_ID, TEST_RSA_MODULUS},
    fixtures::auth::AuthFixtures,
};

impl<'a> AuthFixtures<'a> {
    /// Create a mock `GET /oauth2/v3/certs` endpoint publishing the test RSA public key.
    ///
    /// # Arguments
    /// - `expected_requests` - Number of times the endpoint should be called
    pub fn create_google_jwks_endpoint(&mut self, expected_requests: usize) -> Mock {
        let keys = json!({
            "keys": [
                {
                    "kty": "RSA",
                    "alg": "RS256",
                    "use": "sig",
                    "kid": TEST_RSA_KEY_ID,
                    "n": TEST_RSA_MODULUS,
                    "e": TEST_RSA_EXPONENT,
                }
            ]
        });

        self.setup
            .server
            .mock("GET", TEST_GOOGLE_JWKS_PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(keys.to_string())
            .expect(expected_requests)
            .create()
    }
}
