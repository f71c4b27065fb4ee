//! Wire types shared by the HTTP API and its consumers.

pub mod api;
pub mod flight;
pub mod history;
pub mod report;
