use std::collections::HashMap;
use std::time::Duration;

use mockito::{Matcher, Server};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use shared_core_http::{parse_json_response, Client, HttpError, StatusCode, DEFAULT_TIMEOUT};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Item {
    name: String,
    quantity: u32,
}

fn auth_headers() -> HashMap<String, String> {
    HashMap::from([("Authorization".to_string(), "Bearer token".to_string())])
}

#[test]
fn new_client_defaults() {
    let client = Client::new("https://api.example.com").unwrap();
    assert_eq!(client.base_url(), "https://api.example.com");
    assert_eq!(client.timeout(), Duration::from_secs(30));
    assert_eq!(DEFAULT_TIMEOUT, Duration::from_secs(30));

    let client = Client::with_timeout("https://api.example.com", Duration::from_secs(10)).unwrap();
    assert_eq!(client.timeout(), Duration::from_secs(10));
}

#[tokio::test]
async fn get_sends_headers_and_returns_response() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/test")
        .match_header("authorization", "Bearer token")
        .with_status(200)
        .with_body(r#"{"message": "success"}"#)
        .create_async()
        .await;

    let client = Client::new(server.url()).unwrap();
    let headers = auth_headers();
    let response = client.get("/test", Some(&headers)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = parse_json_response(response).await.unwrap();
    assert_eq!(body["message"], "success");
    mock.assert_async().await;
}

#[tokio::test]
async fn post_encodes_json_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/items")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"name": "widget", "quantity": 3})))
        .with_status(201)
        .with_body(r#"{"id": "item-1"}"#)
        .create_async()
        .await;

    let client = Client::new(server.url()).unwrap();
    let item = Item {
        name: "widget".into(),
        quantity: 3,
    };
    let response = client.post("/items", Some(&item), None).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    mock.assert_async().await;
}

#[tokio::test]
async fn post_without_body_sends_no_content_type() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/ping")
        .match_header("content-type", Matcher::Missing)
        .with_status(204)
        .create_async()
        .await;

    let client = Client::new(server.url()).unwrap();
    let response = client.post::<Value>("/ping", None, None).await.unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    mock.assert_async().await;
}

#[tokio::test]
async fn caller_headers_override_content_type() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", "/items/1")
        .match_header("content-type", "application/merge-patch+json")
        .match_header("authorization", "Bearer token")
        .with_status(200)
        .create_async()
        .await;

    let client = Client::new(server.url()).unwrap();
    let mut headers = auth_headers();
    headers.insert(
        "Content-Type".to_string(),
        "application/merge-patch+json".to_string(),
    );
    let body = json!({"quantity": 4});
    let response = client
        .put("/items/1", Some(&body), Some(&headers))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    mock.assert_async().await;
}

#[tokio::test]
async fn delete_returns_status_untouched() {
    let mut server = Server::new_async().await;
    let deleted = server
        .mock("DELETE", "/items/1")
        .with_status(204)
        .create_async()
        .await;
    let missing = server
        .mock("DELETE", "/items/2")
        .with_status(404)
        .create_async()
        .await;

    let client = Client::new(server.url()).unwrap();
    assert_eq!(
        client.delete("/items/1", None).await.unwrap().status(),
        StatusCode::NO_CONTENT
    );
    assert_eq!(
        client.delete("/items/2", None).await.unwrap().status(),
        StatusCode::NOT_FOUND
    );
    deleted.assert_async().await;
    missing.assert_async().await;
}

#[tokio::test]
async fn parse_json_response_into_typed_value() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/items/1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"name": "widget", "quantity": 3}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/broken")
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let client = Client::new(server.url()).unwrap();

    let item: Item = parse_json_response(client.get("/items/1", None).await.unwrap())
        .await
        .unwrap();
    assert_eq!(
        item,
        Item {
            name: "widget".into(),
            quantity: 3
        }
    );

    let err = parse_json_response::<Item>(client.get("/broken", None).await.unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, HttpError::Decode(_)), "{err}");
}

#[tokio::test]
async fn invalid_header_is_reported_before_sending() {
    let client = Client::new("http://127.0.0.1:9").unwrap();
    let headers = HashMap::from([("bad header".to_string(), "x".to_string())]);
    let err = client.get("/x", Some(&headers)).await.unwrap_err();
    assert!(matches!(err, HttpError::InvalidHeader { .. }), "{err}");
}

#[tokio::test]
async fn unreachable_server_is_a_request_error() {
    let client = Client::with_timeout("http://127.0.0.1:9", Duration::from_millis(500)).unwrap();
    let err = client.get("/x", None).await.unwrap_err();
    assert!(matches!(err, HttpError::Request(_)), "{err}");
}
