use mockito::{Matcher, Server, ServerGuard};
use pretty_assertions::assert_eq;
use quillsign_sdk::{Client, ClientConfig, RequestOptions, RetryPolicy};
use url::Url;

fn config(server: &ServerGuard) -> ClientConfig {
    ClientConfig::new("sk_test_123")
        .base_url(Url::parse(&server.url()).unwrap())
        .retry(RetryPolicy::default().base_delay_ms(1u64).max_delay_ms(5u64))
}

#[tokio::test]
async fn test_me_decodes_account() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/me")
        .match_header("authorization", "Bearer sk_test_123")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": "acc_1", "email": "ada@example.com", "name": "Ada", "plan": "team"}"#)
        .create_async()
        .await;

    let client = Client::new(config(&server)).unwrap();
    let account = client.me().await.unwrap().unwrap();

    assert_eq!(account.id, "acc_1");
    assert_eq!(account.email, "ada@example.com");
    assert_eq!(account.plan.as_deref(), Some("team"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_no_content_yields_none() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/health")
        .with_status(204)
        .with_header("content-type", "application/json")
        .create_async()
        .await;

    let client = Client::new(config(&server)).unwrap();
    let health = client.health().await.unwrap();

    assert_eq!(health, None);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_non_json_success_yields_none() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/v1/health")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body("<html>ok</html>")
        .create_async()
        .await;

    let client = Client::new(config(&server)).unwrap();

    assert_eq!(client.health().await.unwrap(), None);
}

#[tokio::test]
async fn test_undecodable_json_success_yields_none() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/v1/me")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"unexpected": "shape"}"#)
        .create_async()
        .await;

    let client = Client::new(config(&server)).unwrap();

    // Decode failures on a 2xx response are absorbed into "no payload"
    assert_eq!(client.me().await.unwrap(), None);
}

#[tokio::test]
async fn test_unauthorized_is_not_retried() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/me")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message": "invalid secret key"}"#)
        .expect(1)
        .create_async()
        .await;

    let client = Client::new(config(&server)).unwrap();
    let error = client.me().await.unwrap_err();

    assert_eq!(error.status_code(), Some(401));
    assert!(!error.is_retryable());
    assert_eq!(error.to_string(), "invalid secret key");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_status_error_without_message_field() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/v1/documents/doc_404")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(r#"{"code": "not_found"}"#)
        .create_async()
        .await;

    let client = Client::new(config(&server)).unwrap();
    let error = client
        .documents()
        .get("doc_404", &RequestOptions::default())
        .await
        .unwrap_err();

    assert_eq!(error.to_string(), "request failed with status 404");
    assert_eq!(
        error.response().and_then(|body| body.get("code")).and_then(|code| code.as_str()),
        Some("not_found")
    );
}

#[tokio::test]
async fn test_per_call_headers_win_over_defaults() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/documents/doc_1")
        .match_header("x-environment", "call")
        .match_header("x-team", "platform")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"id": "doc_1", "name": "NDA", "status": "draft", "createdAt": "2026-08-24T10:00:00Z"}"#,
        )
        .create_async()
        .await;

    let config = config(&server).default_headers(vec![
        ("x-environment".to_string(), "default".to_string()),
        ("x-team".to_string(), "platform".to_string()),
    ]);
    let client = Client::new(config).unwrap();
    let options = RequestOptions::default().header("x-environment", "call");

    let document = client.documents().get("doc_1", &options).await.unwrap().unwrap();

    assert_eq!(document.name, "NDA");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_body_and_path_shaping() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v1/signatures/requests")
        .match_header("content-type", "application/json")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "documentId": "doc_1",
            "signers": [{"name": "Ada", "email": "ada@example.com"}]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "id": "sig_1",
                "documentId": "doc_1",
                "status": "pending",
                "signers": [{"name": "Ada", "email": "ada@example.com"}],
                "createdAt": "2026-08-24T10:00:00Z"
            }"#,
        )
        .create_async()
        .await;

    let client = Client::new(config(&server)).unwrap();
    let request = quillsign_sdk::CreateSignatureRequest::new(
        "doc_1",
        vec![quillsign_sdk::Signer::new("Ada", "ada@example.com")],
    );
    let created = client
        .signatures()
        .create(&request, &RequestOptions::default())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(created.id, "sig_1");
    assert_eq!(created.status, quillsign_sdk::SignatureStatus::Pending);
    mock.assert_async().await;
}
