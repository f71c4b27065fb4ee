mod create_many;
mod exists;

use skyward_test_utils::prelude::*;

use crate::server::{data::passenger::PassengerRepository, model::manifest::NewPassenger};

fn new_passenger(name: &str, flight_number: &str) -> NewPassenger {
    NewPassenger {
        name: name.to_string(),
        airline: "SKY".to_string(),
        flight_number: flight_number.to_string(),
        departure_airport: "LHR".to_string(),
        arrival_airport: "JFK".to_string(),
        departure_date: "2025-11-01".to_string(),
    }
}
