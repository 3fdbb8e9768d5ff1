//! Shared test harness for the DigiBridge workspace.
//!
//! Provides an in-memory SQLite database, a declarative [`TestBuilder`], database fixtures
//! and a mock Google JWKS endpoint.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{TEST_GOOGLE_CLIENT_ID, TEST_JWT_SECRET},
        fixtures::{
            auth::factory as auth_factory, resource::FixtureCategory, user::factory as user_factory,
        },
        TestBuilder, TestContext, TestError,
    };
}
