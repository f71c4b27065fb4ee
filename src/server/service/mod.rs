//! Service layer for business logic and orchestration.
//!
//! Services sit between the HTTP controllers and scheduler on one side and the tracker
//! store and status provider on the other: manifest ingestion, the refresh cycle, delay and
//! cancellation alerts and the read-side resolution of the current flight view.

pub mod alert;
pub mod manifest;
pub mod refresh;
pub mod view;
