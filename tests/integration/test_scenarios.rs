use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wl::models::Task;
use wl::{Client, ClientConfig};

fn client(server: &MockServer) -> Client {
    Client::new(ClientConfig::new("tok", "cid").with_api_url(server.uri())).unwrap()
}

#[tokio::test]
async fn test_create_rename_and_delete_list() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/lists"))
        .and(body_json(json!({"title": "a list"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(
            json!({"id": 2345, "title": "a list", "revision": 1, "list_type": "list"}),
        ))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/lists/2345"))
        .and(body_json(
            json!({"id": 2345, "title": "renamed", "revision": 1, "list_type": "list"}),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({"id": 2345, "title": "renamed", "revision": 2, "list_type": "list"}),
        ))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/lists/2345"))
        .and(query_param("revision", "2"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/lists"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!([{"id": 1, "title": "inbox", "revision": 9, "list_type": "inbox"}]),
        ))
        .mount(&server)
        .await;

    let client = client(&server);
    let mut list = client.create_list("a list").await.unwrap();
    assert_eq!((list.id, list.revision), (2345, 1));

    list.title = "renamed".to_string();
    let renamed = client.update_list(&list).await.unwrap();
    assert_eq!(renamed.revision, 2);

    client.delete_list(&renamed).await.unwrap();
    let remaining = client.lists().await.unwrap();
    assert!(remaining.iter().all(|l| l.id != 2345));
}

#[tokio::test]
async fn test_removing_a_due_date() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tasks/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 42, "title": "T", "revision": 3,
            "due_date": "1970-01-01", "completed": false, "starred": false
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/tasks/42"))
        .and(body_json(json!({
            "title": "T", "revision": 3, "completed": false, "starred": false,
            "remove": ["due_date"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 42, "title": "T", "revision": 4, "completed": false, "starred": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let mut task: Task = client.task(42).await.unwrap();
    task.due_date = None;
    let updated = client.update_task(&task).await.unwrap();
    assert_eq!(updated.revision, 4);
    assert_eq!(updated.due_date, None);
}

#[tokio::test]
async fn test_upload_and_bind_to_task() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/uploads"))
        .and(body_json(json!({"content_type": "text", "file_name": "X", "file_size": 9})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 7,
            "part": {"url": format!("{}/s3/put", server.uri()), "date": "D", "authorization": "A"}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/s3/put"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/uploads/7"))
        .and(body_json(json!({"state": "finished"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 7, "state": "finished"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/files"))
        .and(body_json(json!({"upload_id": 7, "task_id": 42})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 99, "task_id": 42, "revision": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let upload = client
        .upload_bytes(b"some-text".to_vec(), "X", "text", None)
        .await
        .unwrap();
    let file = client.create_file(upload.id, 42).await.unwrap();
    assert_eq!((file.id, file.task_id), (99, 42));
}
