use ceremic_admin::{AdminApi, ApiConfig, ApiError};
use httpmock::prelude::*;
use serde_json::json;
use tokio_test::assert_err;

fn admin_api(base_url: &str) -> AdminApi {
    AdminApi::from_config(&ApiConfig::new(base_url)).unwrap()
}

#[tokio::test]
async fn test_not_found_keeps_status_and_body() {
    let server = MockServer::start_async().await;

    let order_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/orders/999");
            then.status(404).body("Order not found");
        })
        .await;

    let err: ApiError = assert_err!(admin_api(&server.base_url()).orders.get_order_by_id(999).await);

    order_mock.assert_async().await;
    assert_eq!(err.status, Some(404));
    assert_eq!(err.message, "Request failed with status code 404");
    assert_eq!(err.body.as_deref(), Some("Order not found"));
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
    let server = MockServer::start_async().await;

    let faq_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/faqs");
            then.status(500)
                .json_body(json!({"error": "database unavailable"}));
        })
        .await;

    let err = assert_err!(
        admin_api(&server.base_url())
            .faqs
            .create_faq(&json!({"question": "q"}))
            .await
    );

    assert_eq!(faq_mock.hits_async().await, 1);
    assert_eq!(err.status, Some(500));
    assert!(err.body.unwrap().contains("database unavailable"));
}

#[tokio::test]
async fn test_client_error_on_update() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(PUT).path("/blog/8");
            then.status(400).body("title is required");
        })
        .await;

    let err = assert_err!(
        admin_api(&server.base_url())
            .blogs
            .update_blog(8, &json!({}))
            .await
    );
    assert_eq!(err.status, Some(400));
    assert!(err.is_status());
}

#[tokio::test]
async fn test_connection_failure_has_no_status() {
    // 沒有服務在監聽的端口
    let api = admin_api("http://127.0.0.1:1");

    let err = assert_err!(api.products.get_benefits().await);

    assert!(err.status.is_none());
    assert!(!err.message.is_empty());
    assert!(std::error::Error::source(&err).is_some());
}

#[tokio::test]
async fn test_truncated_error_body_keeps_status() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    // 宣告的 Content-Length 比實際送出的 body 長，讀取 body 會失敗
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0_u8; 1024];
        let _ = socket.read(&mut buf).await;
        socket
            .write_all(b"HTTP/1.1 503 Service Unavailable\r\nContent-Length: 100\r\n\r\npartial")
            .await
            .unwrap();
        socket.shutdown().await.unwrap();
    });

    let err = assert_err!(admin_api(&format!("http://{}", addr)).orders.get_orders().await);

    assert_eq!(err.status, Some(503));
    assert_eq!(err.message, "Request failed with status code 503");
}
