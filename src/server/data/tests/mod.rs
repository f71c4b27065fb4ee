mod passenger;
