//! Server application core modules.
//!
//! This module contains the server side of Skyward: manifest ingestion, the tracker store
//! with its latest-observation index, the status provider client, the refresh scheduler,
//! the read-side resolver and the HTTP layer that exposes them.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod provider;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod store;
