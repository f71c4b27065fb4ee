
use chrono::{Duration, Utc};
use skyward_test_utils::prelude::*;

use super::*;
use crate::{
    model::flight::{FlightDto, FlightState},
    server::model::observation::Observation,
};
