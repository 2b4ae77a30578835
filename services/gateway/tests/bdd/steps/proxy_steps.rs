//! BDD step definitions for the proxy feature

use std::time::Duration;

use cucumber::gherkin::Step;
use cucumber::{given, then, when};

use crate::world::GatewayWorld;

/// A port nothing listens on
const UNREACHABLE_BACKEND: &str = "http://127.0.0.1:1";

#[given("a running backend")]
async fn running_backend(world: &mut GatewayWorld) {
    world.start_backend().await;
}

#[given("the backend is unreachable")]
fn unreachable_backend(world: &mut GatewayWorld) {
    world.backend_url = Some(UNREACHABLE_BACKEND.to_string());
}

#[given(regex = r#"^the backend answers "(\w+) (\S+)" with status (\d+) and body "(.*)"$"#)]
async fn backend_answers(
    world: &mut GatewayWorld,
    method: String,
    path: String,
    status: u16,
    body: String,
) {
    world.start_backend().await;
    world
        .script
        .lock()
        .unwrap()
        .responses
        .insert(format!("{} {}", method, path), (status, body));
}

#[given(expr = "the backend delays every response by {int} ms")]
async fn backend_delays(world: &mut GatewayWorld, millis: u64) {
    world.start_backend().await;
    world.script.lock().unwrap().delay = Some(Duration::from_millis(millis));
}

#[given(expr = "the proxy timeout is {int} ms")]
fn proxy_timeout(world: &mut GatewayWorld, millis: u64) {
    world.proxy_timeout = Some(Duration::from_millis(millis));
}

#[when(regex = r#"^the client sends "(\w+) (\S+)"$"#)]
async fn client_sends(world: &mut GatewayWorld, method: String, path: String) {
    world.send(&method, &path, &[], None).await;
}

#[when(regex = r#"^the client sends "(\w+) (\S+)" with headers$"#)]
async fn client_sends_with_headers(
    world: &mut GatewayWorld,
    step: &Step,
    method: String,
    path: String,
) {
    let table = step.table.as_ref().expect("header table missing");
    let headers: Vec<(String, String)> = table
        .rows
        .iter()
        .skip(1)
        .map(|row| (row[0].clone(), row[1].clone()))
        .collect();
    let borrowed: Vec<(&str, &str)> = headers
        .iter()
        .map(|(name, value)| (name.as_str(), value.as_str()))
        .collect();
    let body = headers
        .iter()
        .any(|(name, _)| name.eq_ignore_ascii_case("content-type"))
        .then(|| "{}".to_string());
    world.send(&method, &path, &borrowed, body).await;
}

#[then(expr = "the response status is {int}")]
fn response_status(world: &mut GatewayWorld, expected: u16) {
    assert_eq!(world.response_status, Some(expected));
}

#[then(regex = r#"^the response body is "(.*)"$"#)]
fn response_body(world: &mut GatewayWorld, expected: String) {
    assert_eq!(world.response_body.as_deref(), Some(expected.as_str()));
}

#[then(expr = "the backend received a {string} request for {string}")]
fn backend_received(world: &mut GatewayWorld, method: String, path_and_query: String) {
    let request = world.last_received();
    assert_eq!(request.method, method);
    assert_eq!(request.path_and_query, path_and_query);
}

#[then(expr = "the backend saw header {string} as {string}")]
fn backend_saw_header(world: &mut GatewayWorld, name: String, value: String) {
    let request = world.last_received();
    let actual = request
        .headers
        .get(name.as_str())
        .unwrap_or_else(|| panic!("backend did not receive header {name}"));
    assert_eq!(actual.to_str().unwrap(), value);
}

#[then(expr = "the backend did not see header {string}")]
fn backend_did_not_see_header(world: &mut GatewayWorld, name: String) {
    let request = world.last_received();
    assert!(
        request.headers.get(name.as_str()).is_none(),
        "backend unexpectedly received {name}: {:?}",
        request.headers.get(name.as_str())
    );
}

#[then("the response has permissive CORS headers")]
fn permissive_cors(world: &mut GatewayWorld) {
    let headers = world.response_headers.as_ref().expect("no response");
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(
        headers["access-control-allow-methods"],
        "GET, POST, PUT, DELETE, PATCH, OPTIONS"
    );
    assert_eq!(
        headers["access-control-allow-headers"],
        "Content-Type, Authorization"
    );
}
