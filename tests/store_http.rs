//! Store operations against a mock REST resource.

mod common;

use common::mock_resource::{MockResource, MockResponse};
use common::{http_store, sample_user, sample_users, users_json};
use user_console::model::User;
use user_console::store::StoreIntent;

#[tokio::test]
async fn load_replaces_list_in_server_order() {
    let mock = MockResource::start().await;
    mock.enqueue_response(MockResponse::json(&users_json(&sample_users(&[3, 1, 2]))))
        .await;

    let store = http_store(&mock.base_url());
    store.load_users().await;

    let ids: Vec<u64> = store.users().iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![3, 1, 2]);
    assert!(!store.is_loading());
    assert!(store.error().is_empty());

    let requests = mock.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/users");
}

#[tokio::test]
async fn load_accepts_bare_company_string() {
    let mock = MockResource::start().await;
    mock.enqueue_response(MockResponse::json(
        r#"[{"id":1,"name":"Leanne Graham","username":"Bret","email":"a@b.c","company":"Acme"}]"#,
    ))
    .await;

    let store = http_store(&mock.base_url());
    store.load_users().await;

    let users = store.users();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].company.name, "Acme");
    assert!(users[0].phone.is_empty());
}

#[tokio::test]
async fn delete_removes_user_and_clears_loading() {
    let mock = MockResource::start().await;
    mock.enqueue_response(MockResponse::json(&users_json(&sample_users(&[1]))))
        .await;
    mock.enqueue_response(MockResponse::json("{}")).await;

    let store = http_store(&mock.base_url());
    store.load_users().await;
    store.delete_user(1).await;

    assert!(store.users().is_empty());
    assert!(!store.is_loading());

    let requests = mock.captured_requests().await;
    assert_eq!(requests[1].method, "DELETE");
    assert_eq!(requests[1].path, "/users/1");
}

#[tokio::test]
async fn delete_ignores_error_status() {
    let mock = MockResource::start().await;
    mock.enqueue_response(MockResponse::json(&users_json(&sample_users(&[1, 2]))))
        .await;
    mock.enqueue_response(MockResponse::status(500)).await;

    let store = http_store(&mock.base_url());
    store.load_users().await;
    store.delete_user(2).await;

    let ids: Vec<u64> = store.users().iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![1]);
    assert!(store.error().is_empty());
}

#[tokio::test]
async fn delete_of_missing_id_leaves_list_unchanged() {
    let mock = MockResource::start().await;
    mock.enqueue_response(MockResponse::json(&users_json(&sample_users(&[1, 2]))))
        .await;
    mock.enqueue_response(MockResponse::status(404)).await;

    let store = http_store(&mock.base_url());
    store.load_users().await;
    let before = store.users();
    store.delete_user(99).await;

    assert_eq!(store.users(), before);
    assert!(!store.is_loading());
}

#[tokio::test]
async fn edit_replaces_matching_user() {
    let mock = MockResource::start().await;
    mock.enqueue_response(MockResponse::json(&users_json(&sample_users(&[1, 2, 3]))))
        .await;
    let mut updated = sample_user(2);
    updated.name = "Renamed User".to_string();
    mock.enqueue_response(MockResponse::json(&serde_json::to_string(&updated).unwrap()))
        .await;

    let store = http_store(&mock.base_url());
    store.load_users().await;
    store.edit_user(2, updated.clone()).await;

    let users = store.users();
    assert_eq!(users.len(), 3);
    assert_eq!(users[1], updated);
    assert_eq!(users[0].name, "User 1");

    let requests = mock.captured_requests().await;
    assert_eq!(requests[1].method, "PUT");
    assert_eq!(requests[1].path, "/users/2");
    assert_eq!(requests[1].json()["name"], "Renamed User");
}

#[tokio::test]
async fn edit_error_status_sets_message_and_keeps_users() {
    let mock = MockResource::start().await;
    mock.enqueue_response(MockResponse::json(&users_json(&sample_users(&[1]))))
        .await;
    mock.enqueue_response(MockResponse::status(404)).await;

    let store = http_store(&mock.base_url());
    store.load_users().await;
    let before = store.users();
    store.edit_user(1, sample_user(1)).await;

    assert_eq!(store.error(), "Error: 404 - Not Found");
    assert_eq!(store.users(), before);
    assert!(!store.is_loading());
}

#[tokio::test]
async fn edit_of_missing_id_leaves_list_unchanged() {
    let mock = MockResource::start().await;
    mock.enqueue_response(MockResponse::json(&users_json(&sample_users(&[1, 2]))))
        .await;
    mock.enqueue_response(MockResponse::json(
        &serde_json::to_string(&sample_user(42)).unwrap(),
    ))
    .await;

    let store = http_store(&mock.base_url());
    store.load_users().await;
    let before = store.users();
    store.edit_user(42, sample_user(42)).await;

    assert_eq!(store.users(), before);
    assert!(store.error().is_empty());
}

#[tokio::test]
async fn create_appends_server_record_and_sends_json() {
    let mock = MockResource::start().await;
    mock.enqueue_response(MockResponse::json(&users_json(&sample_users(&[1, 2]))))
        .await;
    let mut created = sample_user(3);
    created.name = "New Person".to_string();
    mock.enqueue_response(
        MockResponse::json(&serde_json::to_string(&created).unwrap()).with_status(201),
    )
    .await;

    let store = http_store(&mock.base_url());
    store.load_users().await;
    let candidate = User {
        id: store.next_user_id(),
        ..created.clone()
    };
    store.create_user(candidate).await;

    let users = store.users();
    assert_eq!(users.len(), 3);
    assert_eq!(users[2], created);

    let requests = mock.captured_requests().await;
    let post = &requests[1];
    assert_eq!(post.method, "POST");
    assert_eq!(post.path, "/users");
    assert_eq!(post.content_type.as_deref(), Some("application/json"));
    let body = post.json();
    assert_eq!(body["id"], 3);
    assert_eq!(body["address"]["city"], "Gwenborough");
    assert_eq!(body["company"]["name"], "Acme");
}

#[tokio::test]
async fn repeated_server_id_on_create_is_reassigned() {
    let mock = MockResource::start().await;
    mock.enqueue_response(MockResponse::json(&users_json(&sample_users(&[1, 2]))))
        .await;
    let echoed = serde_json::to_string(&sample_user(3)).unwrap();
    mock.enqueue_response(MockResponse::json(&echoed)).await;
    mock.enqueue_response(MockResponse::json(&echoed)).await;

    let store = http_store(&mock.base_url());
    store.load_users().await;
    store.create_user(sample_user(3)).await;
    store.create_user(sample_user(4)).await;

    let ids: Vec<u64> = store.users().iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn transport_failure_sets_error_and_keeps_users() {
    // Nothing listens on port 1.
    let store = http_store("http://127.0.0.1:1");
    store.dispatch(StoreIntent::Loaded {
        users: sample_users(&[1, 2]),
    });

    store.load_users().await;

    assert!(!store.error().is_empty());
    assert_eq!(store.users().len(), 2);
    assert!(!store.is_loading());
}

#[tokio::test]
async fn malformed_body_is_a_failure() {
    let mock = MockResource::start().await;
    mock.enqueue_response(MockResponse::json("not json")).await;

    let store = http_store(&mock.base_url());
    store.load_users().await;

    assert!(store.users().is_empty());
    assert!(store.error().contains("Invalid response"));
}

#[tokio::test]
async fn next_operation_clears_previous_error() {
    let mock = MockResource::start().await;
    mock.enqueue_response(MockResponse::status(503)).await;
    mock.enqueue_response(MockResponse::json(&users_json(&sample_users(&[1]))))
        .await;

    let store = http_store(&mock.base_url());
    store.edit_user(1, sample_user(1)).await;
    assert_eq!(store.error(), "Error: 503 - Service Unavailable");

    store.load_users().await;
    assert!(store.error().is_empty());
    assert_eq!(store.users().len(), 1);
}

#[tokio::test]
async fn overlapping_operations_both_apply() {
    let mock = MockResource::start().await;
    mock.enqueue_response(MockResponse::json(&users_json(&sample_users(&[1, 2]))).with_delay(50))
        .await;
    mock.enqueue_response(MockResponse::json("{}")).await;

    let store = http_store(&mock.base_url());
    store.dispatch(StoreIntent::Loaded {
        users: sample_users(&[1, 2]),
    });

    let loader = store.clone();
    let load = tokio::spawn(async move { loader.load_users().await });
    tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    store.delete_user(1).await;
    load.await.unwrap();

    // The late list response wins.
    let ids: Vec<u64> = store.users().iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert!(!store.is_loading());
}

#[tokio::test]
async fn loading_flag_is_set_while_request_is_in_flight() {
    let mock = MockResource::start().await;
    mock.enqueue_response(MockResponse::json(&users_json(&sample_users(&[1]))).with_delay(200))
        .await;

    let store = http_store(&mock.base_url());
    let loader = store.clone();
    let load = tokio::spawn(async move { loader.load_users().await });

    tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    assert!(store.is_loading());
    assert!(store.users().is_empty());

    load.await.unwrap();
    assert!(!store.is_loading());
    assert_eq!(store.users().len(), 1);
}
