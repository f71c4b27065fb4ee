//! Data access layer repositories.
//!
//! This module contains the database repository implementations for the tracker.
//! Repositories provide a thin abstraction over SeaORM operations and are generic over
//! [`sea_orm::ConnectionTrait`] so they run equally against a connection or a transaction.

pub mod flight_alert;
pub mod flight_status;
pub mod passenger;
pub mod upload_batch;

#[cfg(test)]
mod tests;
