use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wl::client::AVATAR_SIZES;
use wl::core::types::ErrorKind;
use wl::{Client, ClientConfig};

fn client(server: &MockServer) -> Client {
    Client::new(ClientConfig::new("tok", "cid").with_api_url(server.uri())).unwrap()
}

async fn probe_with_status(status: u16) -> wl::core::error::Result<bool> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(status))
        .expect(1)
        .mount(&server)
        .await;
    client(&server).authed().await
}

#[tokio::test]
async fn test_default_size_with_fallback_follows_location() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/avatar"))
        .and(query_param("user_id", "1234"))
        .and(query_param_is_missing("size"))
        .and(query_param_is_missing("fallback"))
        .respond_with(
            ResponseTemplate::new(302).insert_header("Location", "https://example/avatar/1234.png"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let url = client(&server).avatar_url(1234, 0, true).await.unwrap();
    assert_eq!(url, "https://example/avatar/1234.png");
}

#[tokio::test]
async fn test_no_fallback_and_no_avatar_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/avatar"))
        .and(query_param("user_id", "1234"))
        .and(query_param("fallback", "false"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let url = client(&server).avatar_url(1234, 0, false).await.unwrap();
    assert_eq!(url, "");
}

#[tokio::test]
async fn test_allowed_size_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/avatar"))
        .and(query_param("size", "128"))
        .and(query_param("fallback", "false"))
        .respond_with(ResponseTemplate::new(302).insert_header("Location", "https://example/a.png"))
        .expect(1)
        .mount(&server)
        .await;

    let url = client(&server).avatar_url(1234, 128, false).await.unwrap();
    assert_eq!(url, "https://example/a.png");
}

#[tokio::test]
async fn test_sizes_outside_allow_list_are_rejected() {
    let server = MockServer::start().await;
    let client = client(&server);
    for size in [1, 24, 100, 129, 1024] {
        assert!(!AVATAR_SIZES.contains(&size));
        let err = client.avatar_url(1234, size, true).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_fallback_requires_redirect() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/avatar"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let err = client(&server).avatar_url(1234, 0, true).await.unwrap_err();
    assert_eq!(err.status(), Some(204));
}

#[tokio::test]
async fn test_redirect_without_location_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/avatar"))
        .respond_with(ResponseTemplate::new(302))
        .mount(&server)
        .await;

    let err = client(&server).avatar_url(1234, 0, true).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[tokio::test]
async fn test_authed_probe_classifications() {
    assert!(probe_with_status(200).await.unwrap());
    assert!(!probe_with_status(401).await.unwrap());
    assert!(!probe_with_status(403).await.unwrap());

    let err = probe_with_status(404).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnexpectedStatus);
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn test_authed_probe_surfaces_transport_errors() {
    let config = ClientConfig::new("tok", "cid").with_api_url("http://127.0.0.1:1");
    let err = Client::new(config).unwrap().authed().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
}
