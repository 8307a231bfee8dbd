//! Request contract of the API client against a live mock backend.

mod common;

use common::{client, MockBackend};
use hirelink_lib::models::ApplicationStatus;
use hirelink_lib::services::{RequestOptions, UploadForm};
use serde_json::{json, Value};

#[tokio::test]
async fn test_bearer_header_only_with_non_empty_token() {
    let mock = MockBackend::new().route("GET", "/users/profile/", 200, "{}");
    let api = client(&mock.spawn().await);

    api.request("/users/profile/", RequestOptions::get(), Some("abc"))
        .await
        .unwrap();
    assert_eq!(mock.last_request().authorization.as_deref(), Some("Bearer abc"));

    api.request("/users/profile/", RequestOptions::get(), None)
        .await
        .unwrap();
    assert_eq!(mock.last_request().authorization, None);

    api.request("/users/profile/", RequestOptions::get(), Some(""))
        .await
        .unwrap();
    assert_eq!(mock.last_request().authorization, None);
}

#[tokio::test]
async fn test_json_content_type_and_caller_override() {
    let mock = MockBackend::new().route("POST", "/users/login/", 200, "{}");
    let api = client(&mock.spawn().await);

    let options = RequestOptions::post(json!({ "email": "a@b.c" })).unwrap();
    api.request("/users/login/", options, None).await.unwrap();
    let recorded = mock.last_request();
    assert_eq!(recorded.content_type.as_deref(), Some("application/json"));
    assert_eq!(
        serde_json::from_str::<Value>(&recorded.body).unwrap(),
        json!({ "email": "a@b.c" })
    );

    let options = RequestOptions::post(json!({}))
        .unwrap()
        .with_header("Content-Type", "text/plain");
    api.request("/users/login/", options, None).await.unwrap();
    assert_eq!(mock.last_request().content_type.as_deref(), Some("text/plain"));
}

#[tokio::test]
async fn test_error_body_is_the_message() {
    let mock = MockBackend::new()
        .route("GET", "/jobs/", 403, r#"{"detail":"Forbidden"}"#)
        .route("GET", "/interviews/", 500, "");
    let api = client(&mock.spawn().await);

    let err = api
        .request("/jobs/", RequestOptions::get(), Some("t"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), r#"{"detail":"Forbidden"}"#);
    assert_eq!(err.status_code(), Some(403));

    let err = api
        .request("/interviews/", RequestOptions::get(), Some("t"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Request failed with status 500");
}

#[tokio::test]
async fn test_success_bodies() {
    let mock = MockBackend::new()
        .route("GET", "/json/", 200, r#"{"ok":true}"#)
        .route("GET", "/text/", 200, "plain words")
        .route("DELETE", "/applications/4/", 204, "");
    let api = client(&mock.spawn().await);

    let value = api.request("/json/", RequestOptions::get(), None).await.unwrap();
    assert_eq!(value, json!({ "ok": true }));

    let value = api.request("/text/", RequestOptions::get(), None).await.unwrap();
    assert_eq!(value, Value::String("plain words".to_string()));

    let value = api
        .request("/applications/4/", RequestOptions::delete(), Some("t"))
        .await
        .unwrap();
    assert_eq!(value, json!({}));
}

#[tokio::test]
async fn test_url_join_uses_a_single_slash() {
    let mock = MockBackend::new().route("GET", "/jobs/", 200, "[]");
    let base = mock.spawn().await;
    let api = client(&format!("{}/", base));

    api.request("jobs/", RequestOptions::get(), None).await.unwrap();
    api.request("/jobs/", RequestOptions::get(), None).await.unwrap();

    let paths: Vec<String> = mock.requests().into_iter().map(|r| r.path).collect();
    assert_eq!(paths, vec!["/jobs/", "/jobs/"]);
}

#[tokio::test]
async fn test_upload_is_multipart_with_bearer() {
    let mock = MockBackend::new().route("POST", "/applications/", 201, r#"{"id":9}"#);
    let api = client(&mock.spawn().await);

    let form = UploadForm::new()
        .text("job", "3")
        .text("cover_letter", "Hello")
        .file("resume", "cv.pdf", b"%PDF-1.4".to_vec());
    let value = api.upload_file("/applications/", form, Some("tok")).await.unwrap();
    assert_eq!(value["id"], 9);

    let recorded = mock.last_request();
    let content_type = recorded.content_type.unwrap();
    assert!(content_type.starts_with("multipart/form-data"));
    assert!(!content_type.contains("application/json"));
    assert_eq!(recorded.authorization.as_deref(), Some("Bearer tok"));
    assert!(recorded.body.contains("name=\"cover_letter\""));
    assert!(recorded.body.contains("filename=\"cv.pdf\""));
    assert!(recorded.body.contains("Content-Type: application/pdf"));
}

#[tokio::test]
async fn test_resume_upload_sends_the_file_type() {
    let mock = MockBackend::new().route("POST", "/users/upload-resume/", 200, r#"{"message":"ok"}"#);
    let api = client(&mock.spawn().await);

    api.upload_resume("tok", "cv.docx", b"PK".to_vec()).await.unwrap();

    let body = mock.last_request().body;
    assert!(body.contains("name=\"resume\"; filename=\"cv.docx\""));
    assert!(body.contains(
        "Content-Type: application/vnd.openxmlformats-officedocument.wordprocessingml.document"
    ));
}

#[tokio::test]
async fn test_status_filter_goes_in_the_query() {
    let mock = MockBackend::new().route("GET", "/applications/", 200, "[]");
    let api = client(&mock.spawn().await);

    let list = api
        .list_applications("t", Some(ApplicationStatus::UnderReview))
        .await
        .unwrap();
    assert!(list.is_empty());
    assert_eq!(mock.last_request().query.as_deref(), Some("status=under_review"));

    api.list_applications("t", None).await.unwrap();
    assert_eq!(mock.last_request().query, None);
}

#[tokio::test]
async fn test_unreachable_backend_is_a_network_error() {
    // Bind and drop to get a port nothing listens on.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let err = client(&base)
        .request("/jobs/", RequestOptions::get(), None)
        .await
        .unwrap_err();
    assert!(matches!(err, hirelink_lib::error::AppError::Network { .. }));
}
