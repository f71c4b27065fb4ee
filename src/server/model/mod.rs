//! Server application models and type definitions.
//!
//! This module contains data models for the server application, including application state,
//! database model type aliases, inputs accepted by the tracker store (passengers, observations,
//! upload batches and alerts) and the resolved flight view handed to the HTTP layer.

pub mod app;
pub mod db;
pub mod history;
pub mod manifest;
pub mod observation;
pub mod view;
