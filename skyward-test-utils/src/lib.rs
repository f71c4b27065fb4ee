//! Test utilities for the Skyward tracker.
//!
//! Tests are written in two phases. [`TestBuilder`] declares the tables, fixtures and mock
//! provider endpoints a test needs, and `build()` returns a [`TestContext`] holding an
//! in-memory SQLite database and a mockito server standing in for the flight status provider.

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
    pub use crate::{fixtures::factory, TestBuilder, TestContext, TestError};
}
