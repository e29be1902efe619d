// Hub lifecycle against a mock Ambientika cloud.

use std::sync::Arc;
use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use tokio_util::sync::CancellationToken;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ambientika_api::Credentials;
use ambientika_core::{CoreError, Hub, HubConfig, HubState, RefreshError};

fn config(server: &MockServer) -> HubConfig {
    HubConfig::new(Credentials::new("user@example.com", "hunter2"))
        .with_host(Url::parse(&server.uri()).expect("mock server URI parses"))
        .with_poll_interval(Duration::from_millis(20))
}

async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/users/authenticate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "jwtToken": "test-token" })))
        .mount(server)
        .await;
}

fn houses_body(serials: &[&str]) -> serde_json::Value {
    let devices: Vec<_> = serials
        .iter()
        .map(|s| json!({ "serialNumber": s, "name": format!("Vent {s}") }))
        .collect();
    json!([{
        "id": 1,
        "name": "Home",
        "rooms": [{ "id": 10, "name": "Living room", "devices": devices }]
    }])
}

async fn mount_houses(server: &MockServer, serials: &[&str]) {
    Mock::given(method("GET"))
        .and(path("/house/houses-info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(houses_body(serials)))
        .mount(server)
        .await;
}

#[tokio::test]
async fn login_discovers_devices_and_authenticates() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    mount_houses(&server, &["SN-A", "SN-B"]).await;

    let hub = Hub::new(config(&server));
    assert_eq!(hub.state(), HubState::Unauthenticated);

    hub.login().await.expect("login succeeds");

    assert_eq!(hub.state(), HubState::Authenticated);
    let serials: Vec<_> = hub
        .devices()
        .iter()
        .map(|d| d.serial_number().to_owned())
        .collect();
    assert_eq!(serials, vec!["SN-A", "SN-B"]);
    assert!(hub.device("SN-B").is_some());
    assert!(hub.device("SN-Z").is_none());
}

#[tokio::test]
async fn login_with_bad_credentials_is_fatal() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users/authenticate"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let hub = Hub::new(config(&server));
    let err = hub.login().await.expect_err("login must fail");

    assert!(matches!(err, CoreError::InvalidCredentials(_)));
    assert_eq!(hub.state(), HubState::Unauthenticated);
    assert!(hub.devices().is_empty());
}

#[tokio::test]
async fn login_without_devices_aborts_setup() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    mount_houses(&server, &[]).await;

    let hub = Hub::new(config(&server));
    let err = hub.login().await.expect_err("login must fail");

    assert!(matches!(err, CoreError::NoDevicesFound));
    assert_eq!(hub.state(), HubState::Unauthenticated);
}

#[tokio::test]
async fn login_without_houses_aborts_setup() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    Mock::given(method("GET"))
        .and(path("/house/houses-info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let hub = Hub::new(config(&server));
    let err = hub.login().await.expect_err("login must fail");
    assert!(matches!(err, CoreError::NoDevicesFound));
}

#[tokio::test]
async fn state_transitions_land_without_any_subscriber() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    mount_houses(&server, &["SN-A"]).await;

    // No subscribe_state() receiver exists at any point here.
    let hub = Hub::new(config(&server));
    hub.login().await.expect("login succeeds");
    assert_eq!(hub.state(), HubState::Authenticated);

    hub.refresh().await.expect("refresh succeeds");
    assert_eq!(hub.state(), HubState::Authenticated);

    // A late subscriber sees the current state, not the initial one.
    let receiver = hub.subscribe_state();
    assert_eq!(*receiver.borrow(), HubState::Authenticated);
}

#[tokio::test]
async fn refresh_without_login_demands_authentication() {
    let server = MockServer::start().await;
    let hub = Hub::new(config(&server));

    let err = hub.refresh().await.expect_err("refresh must fail");
    assert!(matches!(err, RefreshError::AuthExpired(_)));
}

#[tokio::test]
async fn transient_refresh_failure_keeps_the_device_list() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    Mock::given(method("GET"))
        .and(path("/house/houses-info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(houses_body(&["SN-A"])))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/house/houses-info"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let hub = Hub::new(config(&server));
    hub.login().await.expect("login succeeds");

    let err = hub.refresh().await.expect_err("refresh must fail");
    assert!(matches!(err, RefreshError::UpdateFailed(_)));
    // Entities bound to the known devices keep their handles.
    assert_eq!(hub.devices().len(), 1);
    assert_eq!(hub.state(), HubState::Authenticated);
}

#[tokio::test]
async fn expired_session_flips_the_hub_to_auth_failed() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    Mock::given(method("GET"))
        .and(path("/house/houses-info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(houses_body(&["SN-A"])))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/house/houses-info"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let hub = Hub::new(config(&server));
    hub.login().await.expect("login succeeds");

    let err = hub.refresh().await.expect_err("refresh must fail");
    assert!(matches!(err, RefreshError::AuthExpired(_)));
    assert_eq!(hub.state(), HubState::AuthFailed);
}

#[tokio::test]
async fn refresh_reuses_handles_for_known_serials() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    mount_houses(&server, &["SN-A", "SN-B"]).await;

    let hub = Hub::new(config(&server));
    hub.login().await.expect("login succeeds");
    let before = hub.device("SN-A").expect("SN-A known");

    hub.refresh().await.expect("refresh succeeds");
    let after = hub.device("SN-A").expect("SN-A still known");

    assert!(Arc::ptr_eq(&before, &after));
}

#[tokio::test]
async fn refresh_task_stops_once_the_session_expires() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    Mock::given(method("GET"))
        .and(path("/house/houses-info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(houses_body(&["SN-A"])))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/house/houses-info"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let hub = Arc::new(Hub::new(config(&server)));
    hub.login().await.expect("login succeeds");

    let cancel = CancellationToken::new();
    let handle = hub.spawn_refresh_task(cancel.clone());

    // The first tick hits the 401 and the task winds itself down.
    tokio::time::timeout(Duration::from_secs(2), handle)
        .await
        .expect("task stops on its own")
        .expect("task does not panic");
    assert_eq!(hub.state(), HubState::AuthFailed);
}

#[tokio::test]
async fn refresh_task_is_cancellable() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    mount_houses(&server, &["SN-A"]).await;

    let hub = Arc::new(Hub::new(config(&server)));
    hub.login().await.expect("login succeeds");

    let cancel = CancellationToken::new();
    let handle = hub.spawn_refresh_task(cancel.clone());
    tokio::time::sleep(Duration::from_millis(60)).await;
    cancel.cancel();

    tokio::time::timeout(Duration::from_secs(2), handle)
        .await
        .expect("task honors cancellation")
        .expect("task does not panic");
    assert_eq!(hub.state(), HubState::Authenticated);
}
