/// Integration tests for the `/api/shareholder` endpoints: apply, list, read,
/// approval updates, delete, and the JSON content-type guard.

use actix_web::{http::StatusCode, test};
use serde_json::Value;

use ramaera::models::shareholder::{ApprovalStatus, ShareholderStore};

mod common;
use common::*;

async fn apply(store: &ShareholderStore) -> Value {
    let app = test::init_service(test_app(store.clone())).await;
    let req = test::TestRequest::post()
        .uri("/api/shareholder/apply")
        .set_json(application_json())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    test::read_body_json(resp).await
}

// ---------------------------------------------------------------------------
// Apply
// ---------------------------------------------------------------------------

#[actix_rt::test]
async fn test_apply_creates_pending_application() {
    let store = ShareholderStore::new();
    let body = apply(&store).await;

    assert_eq!(body["message"], "Application submitted successfully");
    let data = &body["data"];
    assert_eq!(data["approvalStatus"], "pending");
    assert_eq!(data["email"], "asha@example.com");
    assert_eq!(data["sharePurchase"], 2);
    assert_eq!(data["_id"].as_str().map(str::len), Some(24));
    assert_eq!(store.list().len(), 1);
}

#[actix_rt::test]
async fn test_apply_rejects_invalid_fields() {
    let store = ShareholderStore::new();
    let app = test::init_service(test_app(store.clone())).await;

    let mut body = application_json();
    body["panNumber"] = Value::from("abc");
    body["mobile"] = Value::from("12345");
    body["termsAgreed"] = Value::from(false);

    let req = test::TestRequest::post()
        .uri("/api/shareholder/apply")
        .set_json(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let json: Value = test::read_body_json(resp).await;
    assert_eq!(json["message"], "Validation failed");
    assert_eq!(json["details"].as_array().map(Vec::len), Some(3));
    assert!(store.list().is_empty());
}

#[actix_rt::test]
async fn test_apply_missing_field_gets_json_error() {
    let store = ShareholderStore::new();
    let app = test::init_service(test_app(store.clone())).await;

    let mut body = application_json();
    body.as_object_mut().expect("object").remove("fullName");

    let req = test::TestRequest::post()
        .uri("/api/shareholder/apply")
        .set_json(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let json: Value = test::read_body_json(resp).await;
    assert_eq!(json["message"], "Validation failed");
    let details = json["details"].as_array().expect("details");
    assert_eq!(details.len(), 1);
    assert!(details[0].as_str().is_some_and(|d| d.contains("fullName")));
    assert!(store.list().is_empty());
}

#[actix_rt::test]
async fn test_apply_wrong_type_gets_json_error() {
    let app = test::init_service(test_app(ShareholderStore::new())).await;

    let mut body = application_json();
    body["sharePurchase"] = Value::from("two");

    let req = test::TestRequest::post()
        .uri("/api/shareholder/apply")
        .set_json(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let json: Value = test::read_body_json(resp).await;
    assert_eq!(json["message"], "Validation failed");
}

#[actix_rt::test]
async fn test_apply_requires_json_content_type() {
    let store = ShareholderStore::new();
    let app = test::init_service(test_app(store.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/shareholder/apply")
        .insert_header(("content-type", "application/x-www-form-urlencoded"))
        .set_payload("fullName=Asha")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(store.list().is_empty());
}

// ---------------------------------------------------------------------------
// Read / list
// ---------------------------------------------------------------------------

#[actix_rt::test]
async fn test_list_and_read() {
    let store = ShareholderStore::new();
    let created = apply(&store).await;
    let id = created["data"]["_id"].as_str().expect("id").to_string();

    let app = test::init_service(test_app(store.clone())).await;

    let req = test::TestRequest::get().uri("/api/shareholder").to_request();
    let list: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(list.as_array().map(Vec::len), Some(1));

    let req = test::TestRequest::get().uri(&format!("/api/shareholder/{id}")).to_request();
    let one: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(one["fullName"], "Asha Verma");
}

#[actix_rt::test]
async fn test_read_unknown_is_404() {
    let app = test::init_service(test_app(ShareholderStore::new())).await;
    let req = test::TestRequest::get().uri("/api/shareholder/deadbeef").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let json: Value = test::read_body_json(resp).await;
    assert_eq!(json["message"], "Not found");
}

// ---------------------------------------------------------------------------
// Approval / delete
// ---------------------------------------------------------------------------

#[actix_rt::test]
async fn test_update_approval() {
    let store = ShareholderStore::new();
    let created = store.create(valid_application());
    let app = test::init_service(test_app(store.clone())).await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/shareholder/approval/{}", created.id))
        .set_json(serde_json::json!({ "status": "approved" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let stored = store.find_by_id(&created.id).expect("still stored");
    assert_eq!(stored.approval_status, ApprovalStatus::Approved);
    assert!(stored.updated_at >= created.updated_at);
}

#[actix_rt::test]
async fn test_update_approval_rejects_unknown_status() {
    let store = ShareholderStore::new();
    let created = store.create(valid_application());
    let app = test::init_service(test_app(store.clone())).await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/shareholder/approval/{}", created.id))
        .set_json(serde_json::json!({ "status": "maybe" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json: Value = test::read_body_json(resp).await;
    assert_eq!(json["message"], "Validation failed");
    assert_eq!(
        store.find_by_id(&created.id).map(|s| s.approval_status),
        Some(ApprovalStatus::Pending)
    );
}

#[actix_rt::test]
async fn test_update_approval_unknown_id_is_404() {
    let app = test::init_service(test_app(ShareholderStore::new())).await;
    let req = test::TestRequest::put()
        .uri("/api/shareholder/approval/nope")
        .set_json(serde_json::json!({ "status": "rejected" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn test_delete_without_content_type() {
    let store = ShareholderStore::new();
    let created = store.create(valid_application());
    let app = test::init_service(test_app(store.clone())).await;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/shareholder/{}", created.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(store.find_by_id(&created.id).is_none());

    let req = test::TestRequest::delete()
        .uri(&format!("/api/shareholder/{}", created.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
