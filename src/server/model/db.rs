//! Database model type aliases.
//!
//! This module provides convenient type aliases for SeaORM database entity models used
//! throughout the application, so callers do not need to reach into the generated `entity`
//! crate directly.

/// Type alias for the passenger database model.
///
/// One traveller loaded from a manifest, together with the flight they are booked on.
///
/// # Fields (from `entity::passenger::Model`)
/// - `id` - Primary key, assigned on ingestion and stable for the passenger's lifetime
/// - `name` - Passenger name
/// - `airline` - Airline code used for provider lookups
/// - `flight_number` - Flight number used for provider lookups
/// - `departure_airport` - Departure airport code
/// - `arrival_airport` - Arrival airport code
/// - `departure_date` - Departure date as written in the manifest
/// - `created_at` - Timestamp when the passenger was ingested
pub type PassengerModel = entity::passenger::Model;

/// Type alias for the flight status observation database model.
///
/// One status report for a passenger's flight. Observations are append-only; the latest
/// one per passenger is tracked by the store's index.
///
/// # Fields (from `entity::flight_status::Model`)
/// - `id` - Primary key, strictly increasing in insertion order
/// - `passenger_id` - Foreign key to the observed passenger
/// - `status` - Flight state as its kebab-case string form
/// - `latitude` / `longitude` / `altitude` / `velocity` / `heading` - Optional telemetry
/// - `observed_at` - Time the observation was taken
pub type StatusObservationModel = entity::flight_status::Model;

/// Type alias for the upload batch database model.
///
/// One manifest upload, kept in the upload history whether it succeeded or not.
pub type UploadBatchModel = entity::upload_batch::Model;

/// Type alias for the flight alert database model.
pub type FlightAlertModel = entity::flight_alert::Model;
