//! Google sign-in fixture utilities.
//!
//! Provides ID tokens signed with the checked-in test RSA key and a mock JWKS endpoint
//! publishing the matching public key.

pub mod factory;
pub mod mockito;

use crate::TestContext;

impl TestContext {
    pub fn auth<'a>(&'a mut self) -> AuthFixtures<'a> {
        AuthFixtures { setup: self }
    }
}

pub struct AuthFixtures<'a> {
    setup: &'a mut TestContext,
}
