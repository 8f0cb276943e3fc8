use std::sync::{Arc, Mutex};
use std::time::Duration;

use product_forms::forms::{DeleteInput, LookupInput, UpdateInput, UploadInput};
use product_forms::framework::mock::MockTransport;
use product_forms::framework::{AlwaysConfirm, FormError, FormState, NeverConfirm, SubmitError};
use product_forms::model::ImageFile;
use product_forms::runtime::ProductConsole;
use product_forms::transport::{Method, RequestBody, TransportError};
use product_forms::view::{Panel, StatusColor, StatusLine};
use serde_json::json;

fn console(mock: &Arc<MockTransport>) -> ProductConsole {
    ProductConsole::new(mock.clone(), Arc::new(AlwaysConfirm))
}

#[tokio::test]
async fn test_lookup_not_found() {
    let mock = Arc::new(MockTransport::new());
    mock.expect(Method::Get, "/product/7")
        .respond_json(404, json!({"error": "not found"}));
    let console = console(&mock);

    let snapshot = console
        .lookup
        .submit(LookupInput::new("7"))
        .await
        .expect("form closed");

    assert_eq!(snapshot.state, FormState::Error);
    assert_eq!(snapshot.status, StatusLine::new("not found", StatusColor::Red));
    assert!(matches!(
        snapshot.error,
        Some(SubmitError::Transport { status: Some(404), .. })
    ));
    mock.verify();
    console.shutdown().await.expect("shutdown failed");
}

#[tokio::test]
async fn test_lookup_success_renders_card() {
    let mock = Arc::new(MockTransport::new());
    mock.expect(Method::Get, "/product/3").respond_json(
        200,
        json!({
            "id": 3,
            "product_name": "Desk Lamp",
            "brand": "Lumo",
            "price": "$24.99",
            "features": "[\"LED\", \"dimmable\"]",
            "dimensions": "40cm",
            "created_at": "2024-05-02 09:30:00"
        }),
    );
    let console = console(&mock);

    let snapshot = console.lookup.submit(LookupInput::new("3")).await.unwrap();

    assert_eq!(snapshot.state, FormState::Success);
    assert_eq!(snapshot.status, StatusLine::new("Product loaded", StatusColor::Green));
    match &snapshot.panel {
        Panel::Product(card) => {
            assert_eq!(card.title, "Desk Lamp");
            assert_eq!(card.field("Features"), Some("LED, dimmable"));
            assert_eq!(card.field("Created"), Some("2024-05-02 09:30:00"));
        }
        other => panic!("expected product panel, got {:?}", other),
    }
    assert_eq!(
        mock.requests()[0].headers,
        vec![("Cache-Control", "no-cache".to_string())]
    );
}

#[tokio::test]
async fn test_upload_raw_text_fallback() {
    let mock = Arc::new(MockTransport::new());
    mock.expect(Method::Post, "/upload")
        .respond_json(200, json!({"raw_text": "A blue mug"}));
    let console = console(&mock);

    let image = ImageFile::new("mug.jpg", vec![0xff, 0xd8, 0xff]);
    let snapshot = console.upload.submit(UploadInput::new(image)).await.unwrap();

    assert_eq!(snapshot.state, FormState::Success);
    assert_eq!(snapshot.status.text, "Analysis complete!");
    match &snapshot.panel {
        Panel::RawText(card) => {
            assert_eq!(card.heading, "Basic Product Information");
            assert_eq!(card.description, "A blue mug");
            assert_eq!(card.notice, "Note: Full specifications not available");
        }
        other => panic!("expected raw text panel, got {:?}", other),
    }
    match &mock.requests()[0].body {
        RequestBody::Multipart { field, file } => {
            assert_eq!(*field, "image");
            assert_eq!(file.content_type, "image/jpeg");
        }
        other => panic!("expected multipart body, got {:?}", other),
    }
}

#[tokio::test]
async fn test_upload_empty_object_is_format_error() {
    let mock = Arc::new(MockTransport::new());
    mock.expect(Method::Post, "/upload").respond_json(200, json!({}));
    let console = console(&mock);

    let image = ImageFile::new("mug.png", vec![1]);
    let snapshot = console.upload.submit(UploadInput::new(image)).await.unwrap();

    assert_eq!(snapshot.state, FormState::Error);
    assert_eq!(
        snapshot.status,
        StatusLine::new("Error processing image", StatusColor::Red)
    );
    assert!(matches!(snapshot.error, Some(SubmitError::Format { .. })));
    assert_eq!(
        snapshot.error_message().as_deref(),
        Some("Invalid response format from server")
    );
}

#[tokio::test]
async fn test_upload_server_error_shows_snippet() {
    let raw = "x".repeat(400);
    let mock = Arc::new(MockTransport::new());
    mock.expect(Method::Post, "/upload").respond_json(
        500,
        json!({"error": "AI processing failed: Expecting value", "raw_response": raw}),
    );
    let console = console(&mock);

    let image = ImageFile::new("mug.png", vec![1]);
    let snapshot = console.upload.submit(UploadInput::new(image)).await.unwrap();

    match &snapshot.panel {
        Panel::Error(card) => {
            assert_eq!(card.message, "AI processing failed: Expecting value");
            assert_eq!(card.tips.len(), 3);
            let snippet = card.snippet.as_deref().unwrap();
            assert_eq!(snippet.len(), 153);
            assert!(snippet.ends_with("..."));
        }
        other => panic!("expected error panel, got {:?}", other),
    }
}

#[tokio::test]
async fn test_upload_without_image_sends_nothing() {
    let mock = Arc::new(MockTransport::new());
    let console = console(&mock);

    let snapshot = console.upload.submit(UploadInput::default()).await.unwrap();

    assert_eq!(snapshot.state, FormState::Error);
    assert_eq!(snapshot.status.text, "Please select an image file");
    assert_eq!(mock.request_count(), 0);
}

#[tokio::test]
async fn test_update_blank_fields_sends_nothing() {
    let mock = Arc::new(MockTransport::new());
    let console = console(&mock);

    let snapshot = console.update.submit(UpdateInput::new("5")).await.unwrap();

    assert_eq!(snapshot.state, FormState::Error);
    assert_eq!(
        snapshot.status,
        StatusLine::new("Please provide at least one field to update", StatusColor::Red)
    );
    assert!(matches!(snapshot.error, Some(SubmitError::Validation(_))));
    assert_eq!(mock.request_count(), 0);
}

#[tokio::test]
async fn test_update_sends_five_keys_and_resets() {
    let mock = Arc::new(MockTransport::new());
    mock.expect(Method::Put, "/product/5")
        .respond_json(200, json!({"message": "Product updated"}));
    let console = console(&mock);

    let mut input = UpdateInput::new("5");
    input.price = "9.99".into();
    input.features = "ceramic, 350ml".into();
    let snapshot = console.update.submit(input).await.unwrap();

    assert_eq!(snapshot.state, FormState::Success);
    assert_eq!(
        snapshot.status,
        StatusLine::new("Product updated successfully!", StatusColor::Green)
    );
    assert!(snapshot.reset_inputs);

    let body = match &mock.requests()[0].body {
        RequestBody::Json(body) => body.clone(),
        other => panic!("expected json body, got {:?}", other),
    };
    assert_eq!(
        body,
        json!({
            "product_name": "",
            "price": "9.99",
            "features": ["ceramic", "350ml"],
            "brand": "",
            "dimensions": ""
        })
    );
}

#[tokio::test]
async fn test_update_failure_uses_fallback() {
    let mock = Arc::new(MockTransport::new());
    mock.expect(Method::Put, "/product/5").respond_json(400, json!({}));
    let console = console(&mock);

    let mut input = UpdateInput::new("5");
    input.brand = "Acme".into();
    let snapshot = console.update.submit(input).await.unwrap();

    assert_eq!(snapshot.status.text, "Error: Failed to update product");
    assert!(!snapshot.reset_inputs);
}

#[tokio::test]
async fn test_second_submit_while_loading_is_rejected() {
    let mock = Arc::new(MockTransport::new());
    mock.expect(Method::Get, "/product/1")
        .after(Duration::from_millis(50))
        .respond_json(200, json!({"id": 1, "product_name": "Kettle"}));
    let console = console(&mock);
    let other = console.lookup.clone();

    let (first, second) = tokio::join!(
        console.lookup.submit(LookupInput::new("1")),
        other.submit(LookupInput::new("2")),
    );

    assert_eq!(second, Err(FormError::Busy));
    let first = first.unwrap();
    assert_eq!(first.state, FormState::Success);
    assert_eq!(mock.request_count(), 1);
    assert!(!console.lookup.is_busy());

    let snapshot = console.lookup.snapshot().await.unwrap();
    assert_eq!(snapshot, first);
}

#[tokio::test]
async fn test_forms_are_independent() {
    let mock = Arc::new(MockTransport::new());
    mock.expect(Method::Get, "/product/1")
        .after(Duration::from_millis(50))
        .respond_json(200, json!({"id": 1}));
    mock.expect(Method::Delete, "/product/2").respond(200, "");
    let console = console(&mock);

    let (lookup, delete) = tokio::join!(
        console.lookup.submit(LookupInput::new("1")),
        console.delete.submit(DeleteInput::new("2")),
    );

    assert_eq!(lookup.unwrap().state, FormState::Success);
    assert_eq!(delete.unwrap().state, FormState::Success);
}

#[tokio::test]
async fn test_declined_delete_sends_nothing() {
    let mock = Arc::new(MockTransport::new());
    let console = ProductConsole::new(mock.clone(), Arc::new(NeverConfirm));

    let snapshot = console.delete.submit(DeleteInput::new("9")).await.unwrap();

    assert_eq!(snapshot.state, FormState::Idle);
    assert_eq!(snapshot.status, StatusLine::default());
    assert_eq!(mock.request_count(), 0);
}

#[tokio::test]
async fn test_confirmed_delete_resets_inputs() {
    let mock = Arc::new(MockTransport::new());
    mock.expect(Method::Delete, "/product/9").respond(204, "");
    let prompts = Arc::new(Mutex::new(Vec::new()));
    let seen = prompts.clone();
    let confirm = move |prompt: &str| {
        seen.lock().unwrap().push(prompt.to_string());
        true
    };
    let console = ProductConsole::new(mock.clone(), Arc::new(confirm));

    let snapshot = console.delete.submit(DeleteInput::new("9")).await.unwrap();

    assert_eq!(
        *prompts.lock().unwrap(),
        vec!["Are you sure you want to delete product #9?".to_string()]
    );
    assert_eq!(snapshot.state, FormState::Success);
    assert_eq!(
        snapshot.status,
        StatusLine::new("Product deleted successfully!", StatusColor::Green)
    );
    assert!(snapshot.reset_inputs);
    mock.verify();
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    let mock = Arc::new(MockTransport::new());
    mock.expect(Method::Delete, "/product/4")
        .fail(TransportError::Connect("connection refused".into()));
    let console = console(&mock);

    let snapshot = console.delete.submit(DeleteInput::new("4")).await.unwrap();

    assert_eq!(snapshot.state, FormState::Error);
    assert_eq!(
        snapshot.status.text,
        "Error: Failed to reach server: connection refused"
    );
    assert!(matches!(
        snapshot.error,
        Some(SubmitError::Transport { status: None, .. })
    ));
}

#[tokio::test]
async fn test_shutdown_after_use() {
    let mock = Arc::new(MockTransport::new());
    let console = console(&mock);
    console.lookup.submit(LookupInput::new("")).await.unwrap();
    console.shutdown().await.expect("shutdown failed");
}
