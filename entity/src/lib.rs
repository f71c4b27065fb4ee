pub mod prelude;

pub mod flight_alert;
pub mod flight_status;
pub mod passenger;
pub mod upload_batch;
