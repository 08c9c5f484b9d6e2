//! Integration tests for contact endpoints

mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};
use uuid::Uuid;

fn contacts_path(user_id: Uuid) -> String {
    format!("/api/v1/users/{}/contacts", user_id)
}

fn parse(body: &str) -> Value {
    serde_json::from_str(body).unwrap()
}

#[tokio::test]
async fn test_address_book_walkthrough() {
    let app = common::TestApp::new();
    let alice = app.create_test_user().await;

    let bob = app.create_contact(alice.id, "Bob", "555-1").await;
    assert_eq!(bob["userId"], alice.id.to_string());
    let carol = app.create_contact(alice.id, "Carol", "555-2").await;
    let carol_id = carol["id"].as_str().unwrap().to_string();

    let (status, body) = app
        .get(&format!("{}/search?text=Bo", contacts_path(alice.id)))
        .await;
    assert_eq!(status, StatusCode::OK);
    let found = parse(&body);
    assert_eq!(found.as_array().unwrap().len(), 1);
    assert_eq!(found[0]["name"], "Bob");

    let update = json!({"name": "Carol", "phone": "555-9"});
    let (status, body) = app
        .put(
            &format!("{}/{}", contacts_path(alice.id), carol_id),
            &update.to_string(),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse(&body)["phone"], "555-9");

    let (status, body) = app
        .delete(&format!("{}/{}", contacts_path(alice.id), bob["id"].as_str().unwrap()))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse(&body)["name"], "Bob");

    let (status, body) = app.get(&contacts_path(alice.id)).await;
    assert_eq!(status, StatusCode::OK);
    let remaining = parse(&body);
    assert_eq!(remaining.as_array().unwrap().len(), 1);
    assert_eq!(remaining[0]["id"], carol_id);
    assert_eq!(remaining[0]["phone"], "555-9");
}

#[tokio::test]
async fn test_contacts_are_invisible_to_other_users() {
    let app = common::TestApp::new();
    let owner = app.create_test_user().await;
    let intruder = app.create_test_user().await;

    let contact = app.create_contact(owner.id, "Bob", "555-1").await;
    let contact_path = format!("{}/{}", contacts_path(intruder.id), contact["id"].as_str().unwrap());

    let (status, body) = app.get(&contacts_path(intruder.id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse(&body), json!([]));

    let (status, body) = app
        .get(&format!("{}/search?text=Bob", contacts_path(intruder.id)))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse(&body), json!([]));

    let update = json!({"name": "Mallory", "phone": "0"});
    let (status, body) = app.put(&contact_path, &update.to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(parse(&body)["error"]["message"], "Contact not found.");

    let (status, _) = app.delete(&contact_path).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = app.get(&contacts_path(owner.id)).await;
    let owned = parse(&body);
    assert_eq!(owned.as_array().unwrap().len(), 1);
    assert_eq!(owned[0]["name"], "Bob");
}

#[tokio::test]
async fn test_search_without_text_lists_everything() {
    let app = common::TestApp::new();
    let user = app.create_test_user().await;
    app.create_contact(user.id, "Bob", "555-1").await;
    app.create_contact(user.id, "Carol", "555-2").await;

    let (_, listed) = app.get(&contacts_path(user.id)).await;
    let (status, searched) = app.get(&format!("{}/search", contacts_path(user.id))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse(&listed), parse(&searched));
}

#[tokio::test]
async fn test_search_matches_phone_case_sensitively() {
    let app = common::TestApp::new();
    let user = app.create_test_user().await;
    app.create_contact(user.id, "Bob", "555-1").await;
    app.create_contact(user.id, "Carol", "777-2").await;

    let (_, body) = app
        .get(&format!("{}/search?text=777", contacts_path(user.id)))
        .await;
    let found = parse(&body);
    assert_eq!(found.as_array().unwrap().len(), 1);
    assert_eq!(found[0]["name"], "Carol");

    let (_, body) = app
        .get(&format!("{}/search?text=bob", contacts_path(user.id)))
        .await;
    assert_eq!(parse(&body), json!([]));
}

#[tokio::test]
async fn test_second_delete_reports_not_found() {
    let app = common::TestApp::new();
    let user = app.create_test_user().await;
    let contact = app.create_contact(user.id, "Bob", "555-1").await;
    let path = format!("{}/{}", contacts_path(user.id), contact["id"].as_str().unwrap());

    let (status, _) = app.delete(&path).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app.delete(&path).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(parse(&body)["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_create_for_nil_user_is_rejected() {
    let app = common::TestApp::new();

    let body = json!({"name": "Bob", "phone": "555-1"});
    let (status, response) = app.post(&contacts_path(Uuid::nil()), &body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(response.contains("Invalid user ID"));
}

#[tokio::test]
async fn test_malformed_user_id_is_rejected() {
    let app = common::TestApp::new();

    let (status, _) = app.get("/api/v1/users/not-a-uuid/contacts").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_address_book_on_postgres() {
    let app = common::TestApp::postgres().await;
    app.cleanup().await;

    let user = app.create_test_user().await;
    let contact = app.create_contact(user.id, "Bob", "555-1").await;
    assert_eq!(contact["userId"], user.id.to_string());

    let (status, body) = app
        .get(&format!("{}/search?text=55", contacts_path(user.id)))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse(&body).as_array().unwrap().len(), 1);

    app.cleanup().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_orphan_contact_is_refused_by_postgres() {
    let app = common::TestApp::postgres().await;

    let body = json!({"name": "Bob", "phone": "555-1"});
    let (status, response) = app.post(&contacts_path(Uuid::new_v4()), &body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(response.contains("Invalid user ID"));
}
