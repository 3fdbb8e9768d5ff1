//! Test configuration constants.
//!
//! None of these values are real credentials. They configure the token service and the
//! Google ID token verifier used by tests so that tokens signed by the fixtures validate.

/// Secret used to sign DigiBridge session JWTs in tests.
pub static TEST_JWT_SECRET: &str = "digibridge-test-jwt-secret";

/// Google OAuth client ID expected as the audience of test ID tokens.
pub static TEST_GOOGLE_CLIENT_ID: &str = "test-client-id.apps.googleusercontent.com";

/// Issuer placed in test ID tokens.
pub static TEST_GOOGLE_ISSUER: &str = "https://accounts.google.com";

/// Path of the mock JWKS endpoint on the test server.
pub static TEST_GOOGLE_JWKS_PATH: &str = "/oauth2/v3/certs";

/// Key ID of the test RSA key.
pub static TEST_RSA_KEY_ID: &str = "digibridge-test-key-1";

/// Base64url encoded modulus of `keys/private_test_rsa_key.pem`.
pub static TEST_RSA_MODULUS: &str = "1dGRXNxw7Uj1uP16VCHpAXxO5lRQiKzLUpdqN2S-TZ_MnVJf22f8JegQCFGrAvGkSIX03JJP-9OnbNB3sx7li3i1o44-1TqcCXh37NXkfALu87M380FMMqrcGy8s3jM-RwmDZ0GZSGBpJca6N1sM2AWwcOZ-6AsEJgqPS69iOEKKplgkKbHmfAvUzmWVu5cWNQQViKlQF4e44DAELDftA1zCYqUCgVDZ2sFV1jtuqUHu7N1afQInVFcCbxZtKWqqhu8f5nKVO65OvjRXKYHFIUlbZLMUinnSFdC-qPDXyQAOvOowViGyB_64Bh0xotcQvNODv7crGvNQDuxyRKaxfw";

/// Base64url encoded public exponent of the test RSA key (65537).
pub static TEST_RSA_EXPONENT: &str = "AQAB";
