//! Skyward keeps a roster of air-travel passengers and the latest known status of each
//! passenger's flight.
//!
//! The [`server`] module holds the ingest, storage, refresh and read paths; [`model`] holds
//! the wire types returned by the HTTP API.

pub mod model;
pub mod server;
