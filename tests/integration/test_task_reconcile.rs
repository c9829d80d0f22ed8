use chrono::NaiveDate;
use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wl::core::types::ErrorKind;
use wl::models::Task;
use wl::{Client, ClientConfig};

fn client(server: &MockServer) -> Client {
    Client::new(ClientConfig::new("tok", "cid").with_api_url(server.uri())).unwrap()
}

fn base_task() -> Task {
    Task {
        id: 42,
        list_id: 3,
        title: "T".to_string(),
        revision: 3,
        ..Task::default()
    }
}

/// Serve `original` on GET and expect `patch` as the PATCH body.
async fn update_and_expect(original: Value, supplied: &Task, patch: Value) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tasks/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(original))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/tasks/42"))
        .and(body_json(patch))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": 42, "title": "T", "revision": 4})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let updated = client(&server).update_task(supplied).await.unwrap();
    assert_eq!(updated.revision, 4);
}

#[tokio::test]
async fn test_clearing_assignee_emits_removal() {
    update_and_expect(
        json!({"id": 42, "title": "T", "revision": 3, "assignee_id": 1}),
        &Task {
            assignee_id: Some(0),
            ..base_task()
        },
        json!({"title": "T", "revision": 3, "completed": false, "starred": false, "remove": ["assignee_id"]}),
    )
    .await;
}

#[tokio::test]
async fn test_unchanged_assignee_is_echoed() {
    update_and_expect(
        json!({"id": 42, "title": "T", "revision": 3, "assignee_id": 1}),
        &Task {
            assignee_id: Some(1),
            ..base_task()
        },
        json!({"title": "T", "revision": 3, "completed": false, "starred": false, "assignee_id": 1}),
    )
    .await;
}

#[tokio::test]
async fn test_changed_assignee_is_sent() {
    update_and_expect(
        json!({"id": 42, "title": "T", "revision": 3, "assignee_id": 1}),
        &Task {
            assignee_id: Some(2),
            ..base_task()
        },
        json!({"title": "T", "revision": 3, "completed": false, "starred": false, "assignee_id": 2}),
    )
    .await;
}

#[tokio::test]
async fn test_new_due_date_is_sent_as_calendar_day() {
    update_and_expect(
        json!({"id": 42, "title": "T", "revision": 3}),
        &Task {
            due_date: NaiveDate::from_ymd_opt(1921, 12, 24),
            ..base_task()
        },
        json!({"title": "T", "revision": 3, "completed": false, "starred": false, "due_date": "1921-12-24"}),
    )
    .await;
}

#[tokio::test]
async fn test_clearing_recurrence_removes_both_fields() {
    update_and_expect(
        json!({"id": 42, "title": "T", "revision": 3, "recurrence_type": "day", "recurrence_count": 1}),
        &base_task(),
        json!({
            "title": "T", "revision": 3, "completed": false, "starred": false,
            "remove": ["recurrence_type", "recurrence_count"]
        }),
    )
    .await;
}

#[tokio::test]
async fn test_changed_recurrence_is_sent() {
    update_and_expect(
        json!({"id": 42, "title": "T", "revision": 3, "recurrence_type": "day", "recurrence_count": 1}),
        &Task {
            recurrence_type: "week".to_string(),
            recurrence_count: 1,
            ..base_task()
        },
        json!({
            "title": "T", "revision": 3, "completed": false, "starred": false,
            "recurrence_type": "week", "recurrence_count": 1
        }),
    )
    .await;
}

#[tokio::test]
async fn test_failed_fetch_aborts_without_patch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tasks/42"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client(&server).update_task(&base_task()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnexpectedStatus);
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn test_stale_revision_surfaces_conflict() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tasks/42"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": 42, "title": "T", "revision": 5})),
        )
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/tasks/42"))
        .respond_with(ResponseTemplate::new(409))
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server).update_task(&base_task()).await.unwrap_err();
    assert_eq!(err.status(), Some(409));
}
