//! Test fixture modules for database and HTTP mock creation.
//!
//! - `passenger` - Passenger records
//! - `flight_status` - Stored status observations
//! - `provider` - Mock flight status provider endpoints
//! - `factory` - In-memory models that never touch the database

pub mod factory;
pub mod flight_status;
pub mod passenger;
pub mod provider;
