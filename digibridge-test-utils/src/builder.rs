//! Declarative test builder.
//!
//! `TestBuilder` queues tables, fixtures and mock endpoints, then creates all of them in
//! `build()`.

use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_all_tables: bool,

    users: Vec<(String, &'static str)>, // (google_id, role)
    hierarchies: Vec<String>,           // university names

    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,
    jwks_endpoints: Vec<usize>, // expected requests
}

impl TestBuilder {
    /// Create a new builder with nothing configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_all_tables: false,
            users: Vec::new(),
            hierarchies: Vec::new(),
            mock_builders: Vec::new(),
            jwks_endpoints: Vec::new(),
        }
    }

    /// Create every DigiBridge table.
    pub fn with_all_tables(mut self) -> Self {
        self.include_all_tables = true;
        self
    }

    /// Add a single entity table.
    ///
    /// Chain multiple calls to add multiple tables. Tables are created in the order added.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a user profile with the `user` role.
    pub fn with_user(mut self, google_id: impl Into<String>) -> Self {
        self.users.push((google_id.into(), "user"));
        self
    }

    /// Insert a user profile with the `admin` role.
    pub fn with_admin(mut self, google_id: impl Into<String>) -> Self {
        self.users.push((google_id.into(), "admin"));
        self
    }

    /// Insert a university with one domain and one subject.
    pub fn with_hierarchy(mut self, university_name: impl Into<String>) -> Self {
        self.hierarchies.push(university_name.into());
        self
    }

    /// Serve the Google JWKS containing the test RSA key.
    ///
    /// The mock verifies it was requested exactly `expected_requests` times when
    /// [`TestContext::assert_mocks`] is called.
    pub fn with_google_jwks_endpoint(mut self, expected_requests: usize) -> Self {
        self.jwks_endpoints.push(expected_requests);
        self
    }

    /// Add a custom mock endpoint with full control over the mockito server.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test context.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables
    /// 2. Inserts database fixtures
    /// 3. Creates mock HTTP endpoints
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_all_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::University),
                schema.create_table_from_entity(entity::prelude::Domain),
                schema.create_table_from_entity(entity::prelude::Subject),
                schema.create_table_from_entity(entity::prelude::SkillCategory),
                schema.create_table_from_entity(entity::prelude::Skill),
                schema.create_table_from_entity(entity::prelude::ExamCategory),
                schema.create_table_from_entity(entity::prelude::Exam),
                schema.create_table_from_entity(entity::prelude::UserProfile),
                schema.create_table_from_entity(entity::prelude::Resource),
                schema.create_table_from_entity(entity::prelude::ResourceSubmission),
                schema.create_table_from_entity(entity::prelude::ResourceRequest),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        for (google_id, role) in self.users {
            setup.user().insert_user_with_role(&google_id, role).await?;
        }

        for university_name in self.hierarchies {
            setup.catalog().insert_hierarchy(&university_name).await?;
        }

        // Custom endpoints first so tests can layer error-then-success mocks on one path
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for expected in self.jwks_endpoints {
            mocks.push(setup.auth().create_google_jwks_endpoint(expected));
        }

        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
