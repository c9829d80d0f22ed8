use serde_json::json;
use std::io::Write;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wl::client::UploadPhase;
use wl::core::types::ErrorKind;
use wl::{Client, ClientConfig};

fn client(server: &MockServer) -> Client {
    Client::new(ClientConfig::new("tok", "cid").with_api_url(server.uri())).unwrap()
}

async fn mount_reservation(server: &MockServer, file_size: u64) {
    Mock::given(method("POST"))
        .and(path("/uploads"))
        .and(body_json(json!({"content_type": "text", "file_name": "X", "file_size": file_size})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 7,
            "state": "pending",
            "part": {
                "url": format!("{}/put", server.uri()),
                "date": "D",
                "authorization": "A"
            }
        })))
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_finish(server: &MockServer) {
    Mock::given(method("PATCH"))
        .and(path("/uploads/7"))
        .and(body_json(json!({"state": "finished"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 7, "state": "finished"})))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_part_transfer_uses_presigned_headers_only() {
    let server = MockServer::start().await;
    mount_reservation(&server, 9).await;
    Mock::given(method("PUT"))
        .and(path("/put"))
        .and(header("x-amz-date", "D"))
        .and(header("Authorization", "A"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    mount_finish(&server).await;

    let upload = client(&server)
        .upload_bytes(b"some-text".to_vec(), "X", "text", None)
        .await
        .unwrap();
    assert!(upload.is_finished());

    let requests = server.received_requests().await.unwrap();
    let put = requests
        .iter()
        .find(|request| request.method.as_str() == "PUT")
        .expect("part PUT was sent");
    assert_eq!(put.body, b"some-text");
    assert_eq!(
        put.headers.get("content-type").map(|value| value.as_bytes()),
        Some(&b""[..])
    );
    assert!(put.headers.get("x-access-token").is_none());
    assert!(put.headers.get("x-client-id").is_none());
}

#[tokio::test]
async fn test_steps_must_run_in_order() {
    let server = MockServer::start().await;
    mount_reservation(&server, 9).await;

    let mut session = client(&server)
        .reserve_upload("X", "text", 9, None)
        .await
        .unwrap();
    assert_eq!(session.phase(), UploadPhase::Reserved);
    assert_eq!(session.upload().id, 7);

    let err = session.finish().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(session.phase(), UploadPhase::Reserved);
}

#[tokio::test]
async fn test_failed_transfer_leaves_session_failed() {
    let server = MockServer::start().await;
    mount_reservation(&server, 9).await;
    Mock::given(method("PUT"))
        .and(path("/put"))
        .respond_with(ResponseTemplate::new(403))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut session = client(&server)
        .reserve_upload("X", "text", 9, None)
        .await
        .unwrap();
    let err = session.transfer(b"some-text".to_vec()).await.unwrap_err();
    assert_eq!(err.status(), Some(403));
    assert_eq!(session.phase(), UploadPhase::Failed);
    assert!(session.finish().await.is_err());
}

#[tokio::test]
async fn test_reservation_without_part_cannot_transfer() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/uploads"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 7})))
        .mount(&server)
        .await;

    let mut session = client(&server)
        .reserve_upload("X", "text", 1, None)
        .await
        .unwrap();
    let err = session.transfer(vec![1]).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
    assert_eq!(session.phase(), UploadPhase::Failed);
}

#[tokio::test]
async fn test_upload_file_reads_local_bytes() {
    let server = MockServer::start().await;
    mount_reservation(&server, 9).await;
    Mock::given(method("PUT"))
        .and(path("/put"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    mount_finish(&server).await;

    let mut local = tempfile::NamedTempFile::new().unwrap();
    local.write_all(b"some-text").unwrap();

    let upload = client(&server)
        .upload_file(local.path(), "X", "text", None)
        .await
        .unwrap();
    assert_eq!(upload.id, 7);
}

#[tokio::test]
async fn test_missing_local_file_is_io_error() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let err = client(&server)
        .upload_file(dir.path().join("absent.txt"), "X", "text", None)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
    assert!(server.received_requests().await.unwrap().is_empty());
}
