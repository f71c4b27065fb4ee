/// A validated manifest row ready to be stored as a passenger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPassenger {
    pub name: String,
    pub airline: String,
    pub flight_number: String,
    pub departure_airport: String,
    pub arrival_airport: String,
    pub departure_date: String,
}
