
use chrono::{Duration, Utc};
use sea_orm::{ConnectionTrait, EntityTrait};
use skyward_test_utils::prelude::*;

use super::*;
use crate::{
    model::{flight::FlightState, report::ClearReport},
    server::{
        error::clear::ClearError,
        model::{
            history::{NewAlert, NewBatch},
            manifest::NewPassenger,
            observation::Observation,
        },
    },
};

fn observation_at(status: FlightState, minutes_ago: i64) -> Observation {
    Observation {
        observed_at: Some(Utc::now().naive_utc() - Duration::minutes(minutes_ago)),
        ..Observation::status_only(status)
    }
}
