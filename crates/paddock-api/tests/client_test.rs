#![allow(clippy::unwrap_used)]
// Integration tests for `FacilityClient` using wiremock.

use serde_json::{Value, json};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use paddock_api::{Error, FacilityClient, Resource};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, FacilityClient) {
    let server = MockServer::start().await;
    let client = FacilityClient::from_reqwest(&server.uri(), reqwest::Client::new()).unwrap();
    (server, client)
}

// ── Happy-path tests ────────────────────────────────────────────────

#[tokio::test]
async fn test_list_animals() {
    let (server, client) = setup().await;

    let body = json!([
        { "id": "A002", "name": "Bella", "species": "Cow" },
        { "id": "A001", "name": "Rex", "species": "Dog" },
    ]);

    Mock::given(method("GET"))
        .and(path("/api/animals"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let animals: Vec<Value> = client.list(Resource::Animals).await.unwrap();

    assert_eq!(animals.len(), 2);
    assert_eq!(animals[0]["id"], "A002");
    assert_eq!(animals[1]["name"], "Rex");
}

#[tokio::test]
async fn test_fetch_health_record() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/health-records/H007"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "id": "H007", "status": "Ongoing" })),
        )
        .mount(&server)
        .await;

    let record: Value = client.fetch(Resource::HealthRecords, "H007").await.unwrap();
    assert_eq!(record["status"], "Ongoing");
}

#[tokio::test]
async fn test_create_sends_body_and_returns_entity() {
    let (server, client) = setup().await;

    let request = json!({ "name": "Hay", "category": "Food", "quantity": 3.0 });

    Mock::given(method("POST"))
        .and(path("/api/inventory"))
        .and(body_json(&request))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "I001",
            "name": "Hay",
            "category": "Food",
            "quantity": 3.0,
            "status": "Low Stock",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let created: Value = client.create(Resource::Inventory, &request).await.unwrap();
    assert_eq!(created["id"], "I001");
    assert_eq!(created["status"], "Low Stock");
}

#[tokio::test]
async fn test_update_uses_put_on_entity_path() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/api/feeding-tasks/F003"))
        .and(body_json(json!({ "status": "Completed" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "id": "F003", "status": "Completed" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let updated: Value = client
        .update(Resource::FeedingTasks, "F003", &json!({ "status": "Completed" }))
        .await
        .unwrap();
    assert_eq!(updated["status"], "Completed");
}

#[tokio::test]
async fn test_delete_returns_message() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/api/staff/S002"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "message": "Staff member deleted successfully" })),
        )
        .mount(&server)
        .await;

    let resp = client.delete(Resource::Staff, "S002").await.unwrap();
    assert_eq!(resp.message, "Staff member deleted successfully");
}

#[tokio::test]
async fn test_settings_round_trip() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/settings"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "facilityName": "Green Valley" })),
        )
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/api/settings"))
        .and(body_json(json!({ "phone": "(555) 000-0000" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "facilityName": "Green Valley",
            "phone": "(555) 000-0000",
        })))
        .mount(&server)
        .await;

    let current: Value = client.get_settings().await.unwrap();
    assert_eq!(current["facilityName"], "Green Valley");

    let updated: Value = client
        .update_settings(&json!({ "phone": "(555) 000-0000" }))
        .await
        .unwrap();
    assert_eq!(updated["phone"], "(555) 000-0000");
}

#[tokio::test]
async fn test_health_probe() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "status": "OK", "message": "Server is running" })),
        )
        .mount(&server)
        .await;

    let health = client.health().await.unwrap();
    assert!(health.is_ok());
}

// ── Error-path tests ────────────────────────────────────────────────

#[tokio::test]
async fn test_error_field_becomes_message() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/animals/A404"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "error": "Animal not found" })),
        )
        .mount(&server)
        .await;

    let result: Result<Value, Error> = client.fetch(Resource::Animals, "A404").await;
    let err = result.unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "Animal not found");
}

#[tokio::test]
async fn test_unreadable_body_is_network_error() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/breeding-records"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let result: Result<Value, Error> = client
        .create(Resource::BreedingRecords, &json!({}))
        .await;

    match result {
        Err(Error::Api { status, message }) => {
            assert_eq!(status, 502);
            assert_eq!(message, "Network error");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_json_body_without_error_field_uses_status_code() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/api/settings"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "detail": "boom" })))
        .mount(&server)
        .await;

    let result: Result<Value, Error> = client.update_settings(&json!({})).await;
    assert_eq!(result.unwrap_err().to_string(), "500");
}

#[tokio::test]
async fn test_bad_success_body_is_deserialization_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/staff"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let result: Result<Vec<Value>, Error> = client.list(Resource::Staff).await;
    assert!(matches!(result, Err(Error::Deserialization { .. })));
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() {
    // Bind then release a port so nothing is listening on it.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let uri = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let client = FacilityClient::from_reqwest(&uri, reqwest::Client::new()).unwrap();
    let err = client.list::<Value>(Resource::Animals).await.unwrap_err();

    assert!(matches!(err, Error::Transport(_)));
    assert!(err.is_transport());
}
