//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context includes an
//! in-memory SQLite database and a mock HTTP server standing in for Google's JWKS endpoint.

use mockito::{Mock, Server, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::{constant::TEST_GOOGLE_JWKS_PATH, error::TestError};

/// Test context structure returned by `TestBuilder`
///
/// Provides access to the test environment:
/// - Database connection to an in-memory SQLite database
/// - Mock HTTP server serving the Google JWKS
/// - Collection of mock endpoints for assertion
///
/// ```ignore
/// let mut test = TestBuilder::new().with_all_tables().build().await?;
///
/// let (university, domain, subject) = test.catalog().insert_hierarchy("MIT").await?;
/// let admin = test.user().insert_admin("google-admin").await?;
///
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,

    /// Mock HTTP server for external endpoints
    pub(crate) server: ServerGuard,
    /// Collection of mock HTTP endpoints for assertion
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    /// Create a new test context with an empty in-memory database and a fresh mock server.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub(crate) async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext {
            db,
            server,
            mocks: Vec::new(),
        })
    }

    /// URL of the mock Google JWKS endpoint.
    ///
    /// The endpoint only answers once it has been registered with
    /// [`TestBuilder::with_google_jwks_endpoint`](crate::TestBuilder::with_google_jwks_endpoint).
    pub fn jwks_url(&self) -> String {
        format!("{}{}", self.server.url(), TEST_GOOGLE_JWKS_PATH)
    }

    /// Base URL of the mock HTTP server.
    pub fn server_url(&self) -> String {
        self.server.url()
    }

    /// Execute CREATE TABLE statements for the provided schemas.
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
