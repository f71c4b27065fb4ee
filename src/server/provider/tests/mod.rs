
use std::time::Duration;

use skyward_test_utils::{constant::TEST_USER_AGENT, prelude::*};

use super::*;
use crate::model::flight::FlightState;

fn provider_for(test: &TestContext, api_key: Option<&str>) -> HttpStatusProvider {
    HttpStatusProvider::new(
        &test.provider_url(),
        api_key.map(str::to_string),
        TEST_USER_AGENT,
        Duration::from_secs(5),
    )
    .expect("provider should build for mock server URL")
}
