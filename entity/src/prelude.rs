pub use super::flight_alert::Entity as FlightAlert;
pub use super::flight_status::Entity as FlightStatus;
pub use super::passenger::Entity as Passenger;
pub use super::upload_batch::Entity as UploadBatch;
