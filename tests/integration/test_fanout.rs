use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wl::core::types::ErrorKind;
use wl::{Client, ClientConfig, ClientError};

fn client(server: &MockServer) -> Client {
    Client::new(ClientConfig::new("tok", "cid").with_api_url(server.uri())).unwrap()
}

async fn mount_three_lists(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/lists"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "title": "inbox", "revision": 1, "list_type": "inbox"},
            {"id": 2, "title": "work", "revision": 1, "list_type": "list"},
            {"id": 3, "title": "home", "revision": 1, "list_type": "list"}
        ])))
        .mount(server)
        .await;
}

async fn mount_per_list(server: &MockServer, route: &str, list_id: &str, status: u16, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .and(query_param("list_id", list_id))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

fn reminder(id: u64) -> serde_json::Value {
    json!({"id": id, "task_id": 100 + id, "date": "2026-10-20T09:00:00.000Z", "revision": 1})
}

#[tokio::test]
async fn test_reminders_partial_failure_keeps_successful_items() {
    let server = MockServer::start().await;
    mount_three_lists(&server).await;
    mount_per_list(&server, "/reminders", "1", 200, json!([reminder(11), reminder(12)])).await;
    mount_per_list(&server, "/reminders", "2", 500, json!({"error": "boom"})).await;
    mount_per_list(&server, "/reminders", "3", 200, json!([reminder(31)])).await;

    let partial = client(&server).all_reminders().await.unwrap();
    assert!(!partial.is_complete());
    assert_eq!(partial.items.len(), 3);

    let mut ids: Vec<u64> = partial.items.iter().map(|r| r.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![11, 12, 31]);

    let error = partial.error.as_ref().expect("one list failed");
    assert_eq!(error.len(), 1);
    assert_eq!(error.subject_ids(), vec![2]);
    assert_eq!(error.failures[0].subject_kind, "list");
    assert_eq!(error.failures[0].error.status(), Some(500));
}

#[tokio::test]
async fn test_complete_fanout_has_no_error() {
    let server = MockServer::start().await;
    mount_three_lists(&server).await;
    for list_id in ["1", "2", "3"] {
        mount_per_list(
            &server,
            "/task_comments",
            list_id,
            200,
            json!([{"id": list_id.parse::<u64>().unwrap(), "task_id": 9, "text": "hi", "revision": 1}]),
        )
        .await;
    }

    let comments = client(&server)
        .all_task_comments()
        .await
        .unwrap()
        .into_result()
        .unwrap();
    assert_eq!(comments.len(), 3);
}

#[tokio::test]
async fn test_subtask_positions_fanout_into_result_surfaces_composite() {
    let server = MockServer::start().await;
    mount_three_lists(&server).await;
    mount_per_list(&server, "/subtask_positions", "1", 200, json!([{"id": 1, "values": [], "revision": 1}])).await;
    mount_per_list(&server, "/subtask_positions", "2", 404, json!({})).await;
    mount_per_list(&server, "/subtask_positions", "3", 404, json!({})).await;

    let err = client(&server)
        .all_subtask_positions()
        .await
        .unwrap()
        .into_result()
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Composite);
    match err {
        ClientError::Composite(composite) => {
            let mut ids = composite.subject_ids();
            ids.sort_unstable();
            assert_eq!(ids, vec![2, 3]);
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[tokio::test]
async fn test_tasks_fanout_forwards_completed_filter() {
    let server = MockServer::start().await;
    mount_three_lists(&server).await;
    for list_id in ["1", "2", "3"] {
        Mock::given(method("GET"))
            .and(path("/tasks"))
            .and(query_param("list_id", list_id))
            .and(query_param("completed", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": list_id.parse::<u64>().unwrap() * 10, "title": "t", "revision": 1, "completed": true}
            ])))
            .expect(1)
            .mount(&server)
            .await;
    }

    let partial = client(&server).all_tasks(Some(true)).await.unwrap();
    assert!(partial.is_complete());
    assert!(partial.items.iter().all(|task| task.completed));
    assert_eq!(partial.items.len(), 3);
}

#[tokio::test]
async fn test_failing_list_enumeration_is_a_plain_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lists"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = client(&server).all_notes().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnexpectedStatus);
    assert_eq!(err.status(), Some(401));
}

#[tokio::test]
async fn test_no_lists_yields_empty_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lists"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let files = client(&server).all_files().await.unwrap();
    assert!(files.is_complete());
    assert!(files.items.is_empty());
}
