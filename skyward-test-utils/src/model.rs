//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main skyward crate to keep tests consistent.

/// Type alias for the passenger database model.
pub type PassengerModel = entity::passenger::Model;

/// Type alias for the flight status observation database model.
pub type StatusObservationModel = entity::flight_status::Model;

/// Type alias for the upload batch database model.
pub type UploadBatchModel = entity::upload_batch::Model;

/// Type alias for the flight alert database model.
pub type FlightAlertModel = entity::flight_alert::Model;
