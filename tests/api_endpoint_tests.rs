//! API endpoint tests
//!
//! Status codes, response bodies and the no-write guarantees of every
//! rejected upload.

use axum::http::{Method, StatusCode};
use tower::ServiceExt;

use test_fixtures::{factories, http, TestEnvironment};

#[tokio::test]
async fn test_landing_page() {
    let env = TestEnvironment::new().await;

    let response = env
        .router
        .clone()
        .oneshot(http::get_request("/"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));
    let body = http::body_text(response).await;
    assert!(body.contains("<h1>"));
    assert!(body.contains("multipart/form-data"));
}

#[tokio::test]
async fn test_unsupported_methods_on_root() {
    let env = TestEnvironment::new().await;

    for method in [Method::PUT, Method::DELETE, Method::PATCH] {
        let response = env
            .router
            .clone()
            .oneshot(http::request(method.clone(), "/"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            http::body_text(response).await,
            format!("HTTP Method type {} is unsupported on /\n", method)
        );
    }
}

#[tokio::test]
async fn test_private_mode_missing_key() {
    let env = TestEnvironment::builder()
        .private()
        .key("secret123")
        .build()
        .await;

    let response = env
        .router
        .clone()
        .oneshot(http::upload_request(None, "a.txt", b"data"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(http::body_text(response).await.contains("key is required"));
    assert_eq!(env.stored_file_count(), 0);
    assert_eq!(env.hash_entry_count(), 0);
}

#[tokio::test]
async fn test_private_mode_empty_key_counts_as_missing() {
    let env = TestEnvironment::builder()
        .private()
        .key("secret123")
        .build()
        .await;

    let response = env
        .router
        .clone()
        .oneshot(http::upload_request(Some(""), "a.txt", b"data"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(env.stored_file_count(), 0);
}

#[tokio::test]
async fn test_private_mode_wrong_key() {
    let env = TestEnvironment::builder()
        .private()
        .key("secret123")
        .build()
        .await;

    let response = env
        .router
        .clone()
        .oneshot(http::upload_request(Some("secret12"), "a.txt", b"data"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(http::body_text(response).await, "Incorrect upload key\n");
    assert_eq!(env.stored_file_count(), 0);
    assert_eq!(env.hash_entry_count(), 0);
}

#[tokio::test]
async fn test_public_mode_ignores_key() {
    let env = TestEnvironment::new().await;

    let response = env
        .router
        .clone()
        .oneshot(http::upload_request(Some("whatever"), "a.txt", b"data"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_file_one_byte_over_limit() {
    let env = TestEnvironment::builder().max_file_size_mb(1).build().await;
    let data = factories::payload(5, (1 << 20) + 1);

    let response = env
        .router
        .clone()
        .oneshot(http::upload_request(None, "big.bin", &data))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(
        http::body_text(response).await,
        "The maximum file size is currently 1MB, you uploaded a 1.00MB file\n"
    );
    assert_eq!(env.stored_file_count(), 0);
    assert_eq!(env.hash_entry_count(), 0);
}

#[tokio::test]
async fn test_file_at_limit_is_accepted() {
    let env = TestEnvironment::builder().max_file_size_mb(1).build().await;
    let data = factories::payload(6, 1 << 20);

    let response = env
        .router
        .clone()
        .oneshot(http::upload_request(None, "edge.bin", &data))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(env.stored_file_count(), 1);
}

#[tokio::test]
async fn test_body_far_over_limit() {
    let env = TestEnvironment::builder().max_file_size_mb(1).build().await;
    let data = factories::payload(7, 3 << 20);

    let response = env
        .router
        .clone()
        .oneshot(http::upload_request(None, "huge.iso", &data))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(
        http::body_text(response).await,
        "The maximum file size is currently 1MB, you uploaded a 3.00MB file\n"
    );
    assert_eq!(env.stored_file_count(), 0);
    assert_eq!(env.hash_entry_count(), 0);
}

#[tokio::test]
async fn test_form_without_file_field() {
    let env = TestEnvironment::new().await;

    let request = http::multipart_request(&[http::Part::Text("note", "no file here")]);
    let response = env.router.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(env.stored_file_count(), 0);
}

#[tokio::test]
async fn test_post_without_multipart_body() {
    let env = TestEnvironment::new().await;

    let response = env
        .router
        .clone()
        .oneshot(http::request(Method::POST, "/"))
        .await
        .unwrap();

    assert!(response.status().is_client_error());
    assert_eq!(env.stored_file_count(), 0);
}

#[tokio::test]
async fn test_storage_directory_listing_disabled() {
    let env = TestEnvironment::new().await;
    env.router
        .clone()
        .oneshot(http::upload_request(None, "a.txt", b"listed?"))
        .await
        .unwrap();

    let response = env
        .router
        .clone()
        .oneshot(http::get_request("/storage/"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(!http::body_text(response).await.contains("test000001"));
}

#[tokio::test]
async fn test_storage_missing_file() {
    let env = TestEnvironment::new().await;

    let response = env
        .router
        .clone()
        .oneshot(http::get_request("/storage/nothere.txt"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_storage_path_traversal_rejected() {
    let env = TestEnvironment::new().await;

    let response = env
        .router
        .clone()
        .oneshot(http::get_request("/storage/../keys"))
        .await
        .unwrap();

    assert_ne!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_health_endpoint() {
    let env = TestEnvironment::new().await;

    let response = env
        .router
        .clone()
        .oneshot(http::get_request("/health"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value =
        serde_json::from_slice(&http::body_bytes(response).await).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["service"], "hashdrop");
}

#[tokio::test]
async fn test_unknown_route() {
    let env = TestEnvironment::new().await;

    let response = env
        .router
        .clone()
        .oneshot(http::get_request("/admin"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
