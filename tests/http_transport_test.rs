//! `HttpTransport` and the forms against a local HTTP server.

use std::sync::Arc;
use std::time::Duration;

use product_forms::config::ConsoleConfig;
use product_forms::forms::{LookupInput, UpdateInput, UploadInput};
use product_forms::framework::{AlwaysConfirm, FormState, SubmitError};
use product_forms::model::ImageFile;
use product_forms::runtime::ProductConsole;
use product_forms::transport::{ApiRequest, HttpTransport, Method, Transport, TransportError};
use product_forms::view::Panel;
use serde_json::json;
use wiremock::matchers::{body_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn connect(server: &MockServer) -> ProductConsole {
    let config = ConsoleConfig::new(server.uri());
    ProductConsole::connect(&config, Arc::new(AlwaysConfirm)).expect("valid config")
}

#[tokio::test]
async fn test_lookup_sends_no_cache() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/product/7"))
        .and(header("cache-control", "no-cache"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7,
            "product_name": "Mug",
            "features": ["ceramic"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let console = connect(&server);
    let snapshot = console.lookup.submit(LookupInput::new("7")).await.unwrap();

    assert_eq!(snapshot.state, FormState::Success);
    assert!(matches!(snapshot.panel, Panel::Product(ref card) if card.title == "Mug"));
    console.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_update_puts_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/product/3"))
        .and(body_json(json!({
            "product_name": "Teapot",
            "price": "",
            "features": [],
            "brand": "",
            "dimensions": ""
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Product updated"})))
        .expect(1)
        .mount(&server)
        .await;

    let console = connect(&server);
    let mut input = UpdateInput::new("3");
    input.product_name = "Teapot".into();
    let snapshot = console.update.submit(input).await.unwrap();

    assert_eq!(snapshot.state, FormState::Success);
    assert!(snapshot.reset_inputs);
}

#[tokio::test]
async fn test_upload_is_multipart() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .and(body_string_contains("name=\"image\""))
        .and(body_string_contains("filename=\"mug.png\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Product information extracted successfully",
            "product": {"product_name": "Mug", "brand": "Acme", "price": "Not available"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let console = connect(&server);
    let image = ImageFile::new("mug.png", b"\x89PNG".to_vec());
    let snapshot = console.upload.submit(UploadInput::new(image)).await.unwrap();

    assert_eq!(snapshot.state, FormState::Success);
    match &snapshot.panel {
        Panel::Product(card) => {
            assert_eq!(card.field("Brand"), Some("Acme"));
            assert_eq!(card.field("Price"), None);
            assert_eq!(card.field("Features"), Some("No features available"));
        }
        other => panic!("expected product panel, got {:?}", other),
    }
}

#[tokio::test]
async fn test_html_error_page() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/product/3"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let console = connect(&server);
    let snapshot = console
        .delete
        .submit(product_forms::forms::DeleteInput::new("3"))
        .await
        .unwrap();

    assert_eq!(snapshot.state, FormState::Error);
    assert_eq!(snapshot.status.text, "Error: Server error: 502");
}

#[tokio::test]
async fn test_product_id_cannot_leave_its_segment() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/product/..%2Fupload"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "Product not found"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let console = connect(&server);
    let snapshot = console
        .delete
        .submit(product_forms::forms::DeleteInput::new("../upload"))
        .await
        .unwrap();

    assert_eq!(snapshot.state, FormState::Error);
    assert_eq!(snapshot.status.text, "Error: Product not found");
}

#[tokio::test]
async fn test_transport_returns_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/product/404"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "Product not found"})))
        .mount(&server)
        .await;

    let transport = HttpTransport::new(&ConsoleConfig::new(server.uri())).unwrap();
    let response = transport
        .send(ApiRequest::new(Method::Get, "/product/404"))
        .await
        .unwrap();

    assert_eq!(response.status, 404);
    assert!(response.body.contains("Product not found"));
}

#[tokio::test]
async fn test_slow_server_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;

    let config = ConsoleConfig::new(server.uri()).with_timeout(Duration::from_millis(100));
    let transport = HttpTransport::new(&config).unwrap();
    let result = transport.send(ApiRequest::new(Method::Get, "/product/1")).await;

    assert!(matches!(result, Err(TransportError::Timeout(_))));
}

#[tokio::test]
async fn test_refused_connection() {
    // Nothing listens on the discard port.
    let config = ConsoleConfig::new("http://127.0.0.1:9");
    let console = ProductConsole::connect(&config, Arc::new(AlwaysConfirm)).unwrap();

    let snapshot = console.lookup.submit(LookupInput::new("1")).await.unwrap();

    assert_eq!(snapshot.state, FormState::Error);
    assert!(matches!(
        snapshot.error,
        Some(SubmitError::Transport { status: None, .. })
    ));
    assert!(snapshot.status.text.starts_with("Failed to reach server"));
}
