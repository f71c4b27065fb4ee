//! Declarative test builder.
//!
//! The builder pattern allows chaining multiple configuration methods together, with all
//! operations queued and executed during the final `build()` call.

use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables,
/// mock fixtures, and HTTP endpoints. Methods can be chained together and finalized
/// with `build()` to create a complete test setup.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_tracker_tables: bool,

    // Database fixtures to insert
    passengers: Vec<i32>,

    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,
    status_endpoints: Vec<(String, String, serde_json::Value, usize)>,
    status_error_endpoints: Vec<(String, String, usize, usize)>,
}

impl TestBuilder {
    /// Create a new TestBuilder with nothing configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_tracker_tables: false,
            passengers: Vec::new(),
            mock_builders: Vec::new(),
            status_endpoints: Vec::new(),
            status_error_endpoints: Vec::new(),
        }
    }

    /// Add the passenger, flight status, upload batch and flight alert tables to the test database.
    pub fn with_tracker_tables(mut self) -> Self {
        self.include_tracker_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use skyward_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), skyward_test_utils::TestError> {
    /// let test = TestBuilder::new().with_table(Passenger).build().await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert mock passenger `n` during `build()`.
    ///
    /// Requires the tracker tables.
    pub fn with_mock_passenger(mut self, n: i32) -> Self {
        self.passengers.push(n);
        self
    }

    /// Add a provider endpoint for a flight returning the given JSON body.
    ///
    /// # Arguments
    /// - `airline` / `flight_number` - Flight the endpoint answers for
    /// - `body` - JSON payload returned with status 200
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn with_status_endpoint(
        mut self,
        airline: impl Into<String>,
        flight_number: impl Into<String>,
        body: serde_json::Value,
        expected_requests: usize,
    ) -> Self {
        self.status_endpoints.push((
            airline.into(),
            flight_number.into(),
            body,
            expected_requests,
        ));
        self
    }

    /// Add a provider endpoint for a flight that fails with the given HTTP status.
    pub fn with_status_error_endpoint(
        mut self,
        airline: impl Into<String>,
        flight_number: impl Into<String>,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        self.status_error_endpoints.push((
            airline.into(),
            flight_number.into(),
            status,
            expected_requests,
        ));
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

    /// Build the test setup by creating all configured tables, fixtures, and mock endpoints.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (tracker tables if specified, then custom tables)
    /// 2. Inserts passenger fixtures
    /// 3. Creates mock HTTP endpoints (custom endpoints first, then status endpoints)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_tracker_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Passenger),
                schema.create_table_from_entity(entity::prelude::FlightStatus),
                schema.create_table_from_entity(entity::prelude::UploadBatch),
                schema.create_table_from_entity(entity::prelude::FlightAlert),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for n in self.passengers {
            setup.passenger().insert_mock_passenger(n).await?;
        }

        // 3. Create mock endpoints
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (airline, flight_number, body, expected) in self.status_endpoints {
            mocks.push(setup.create_status_endpoint(&airline, &flight_number, body, expected));
        }

        for (airline, flight_number, status, expected) in self.status_error_endpoints {
            mocks.push(setup.create_status_error_endpoint(
                &airline,
                &flight_number,
                status,
                expected,
            ));
        }

        // Store mocks in setup so they live as long as the test
        setup.mocks.extend(mocks);

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
