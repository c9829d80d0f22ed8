use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn wl() -> Command {
    let mut cmd = Command::cargo_bin("wl").unwrap();
    cmd.env_remove("WL_ACCESS_TOKEN")
        .env_remove("WL_CLIENT_ID")
        .env_remove("WL_API_URL")
        .env_remove("WL_LOG_LEVEL")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_version_command() {
    wl().arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("wl {}", env!("CARGO_PKG_VERSION"))));
}

#[test]
fn test_version_flag() {
    wl().arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("wl"));
}

#[test]
fn test_help_lists_resource_commands() {
    wl().arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("create-list"))
        .stdout(predicate::str::contains("update-task"))
        .stdout(predicate::str::contains("upload-file"));
}

#[test]
fn test_missing_credentials_exit_2() {
    wl().arg("lists")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("WL_ACCESS_TOKEN"));
}

#[test]
fn test_missing_client_id_exit_2() {
    wl().args(["--accessToken", "tok", "lists"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("WL_CLIENT_ID"));
}

#[test]
fn test_usage_error_exit_2() {
    wl().args(["list", "--id", "not-a-number"]).assert().code(2);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_lists_renders_yaml_by_default() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lists"))
        .and(header("X-Access-Token", "tok"))
        .and(header("X-Client-ID", "cid"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 2345, "title": "a list", "revision": 1, "list_type": "list"}
        ])))
        .mount(&server)
        .await;

    let uri = server.uri();
    let output = tokio::task::spawn_blocking(move || {
        wl().env("WL_API_URL", uri)
            .args(["--accessToken", "tok", "--clientID", "cid", "lists"])
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("- id: 2345"));
    assert!(stdout.contains("title: a list"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_json_output_and_env_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1, "name": "Ada", "email": "ada@example.com"})))
        .mount(&server)
        .await;

    let uri = server.uri();
    let output = tokio::task::spawn_blocking(move || {
        wl().env("WL_API_URL", uri)
            .env("WL_ACCESS_TOKEN", "tok")
            .env("WL_CLIENT_ID", "cid")
            .args(["-j", "user"])
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    assert!(output.status.success());
    let user: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(user["name"], "Ada");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_request_failure_exit_1() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lists/7"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let uri = server.uri();
    let output = tokio::task::spawn_blocking(move || {
        wl().env("WL_API_URL", uri)
            .args(["--accessToken", "tok", "--clientID", "cid", "list", "--id", "7"])
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("exiting - error: unexpected status 404 (expected 200)"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_verbose_transcripts_are_redacted() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/root"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1, "revision": 2})))
        .mount(&server)
        .await;

    let uri = server.uri();
    let output = tokio::task::spawn_blocking(move || {
        wl().env("WL_API_URL", uri)
            .args(["-v", "--accessToken", "tok-very-secret", "--clientID", "cid-very-secret", "root"])
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("sending request"));
    assert!(!stderr.contains("tok-very-secret"));
    assert!(!stderr.contains("cid-very-secret"));
}
