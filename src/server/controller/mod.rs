//! HTTP controller endpoints for the Skyward web API.
//!
//! Handlers extract [`AppState`](crate::server::model::app::AppState), call into the
//! services and return DTOs. Failures are returned as [`Error`](crate::server::error::Error),
//! which converts itself into the right status code.

pub mod flight;
pub mod history;
pub mod passenger;
