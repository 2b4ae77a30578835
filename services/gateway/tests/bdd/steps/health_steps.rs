//! BDD step definitions for the health feature

use std::time::Duration;

use cucumber::{given, then};

use adintel_gateway::health::HealthReport;

use crate::world::GatewayWorld;

#[given(expr = "the health timeout is {int} ms")]
fn health_timeout(world: &mut GatewayWorld, millis: u64) {
    world.health_timeout = Some(Duration::from_millis(millis));
}

fn report(world: &GatewayWorld) -> HealthReport {
    let body = world.response_body.as_ref().expect("no response body");
    serde_json::from_str(body).expect("health body is not a report")
}

#[then(expr = "the health report says backend is {string}")]
fn backend_is(world: &mut GatewayWorld, expected: String) {
    let report = report(world);
    assert_eq!(
        serde_json::to_value(report.backend).unwrap(),
        serde_json::Value::String(expected)
    );
}

#[then(expr = "the health report says frontend is {string}")]
fn frontend_is(world: &mut GatewayWorld, expected: String) {
    assert_eq!(report(world).frontend, expected);
}
