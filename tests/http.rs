use dnspod::record::{ListParams, Record};
use dnspod::{Client, ClientError, Method as RemoteMethod};
use url::Url;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// The blocking client has to be built and dropped off the async runtime.
fn client_for(uri: &str) -> Client {
    let endpoint: Url = format!("{uri}/").parse().unwrap();
    Client::builder()
        .endpoint(&endpoint)
        .login_token("13490,6b5976c68aba5b14a0558b77c17c3932")
        .user_agent("dnspod-tests/0.1")
        .build()
        .unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn posts_form_to_method_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/Domain.List"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(header("user-agent", "dnspod-tests/0.1"))
        .and(body_string_contains(
            "login_token=13490%2C6b5976c68aba5b14a0558b77c17c3932",
        ))
        .and(body_string_contains("format=json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"status":{"code":"1","message":"OK"},"domains":[{"id":"1","name":"example.com"}],"info":{"domain_total":1}}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let (domains, info) =
        tokio::task::spawn_blocking(move || client_for(&uri).domains().list_with_info())
            .await
            .unwrap()
            .unwrap();

    assert_eq!(domains.len(), 1);
    assert_eq!(domains[0].name.as_deref(), Some("example.com"));
    assert_eq!(info.domain_total.as_deref(), Some("1"));
}

#[tokio::test(flavor = "multi_thread")]
async fn omitted_fields_never_reach_the_wire() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/Record.Create"))
        .and(body_string_contains("sub_domain=www"))
        .and(body_string_contains("weight=0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"status":{"code":"1","message":"OK"},"record":{"id":"16894439","name":"www","status":"enable"}}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let record = tokio::task::spawn_blocking(move || {
        client_for(&uri).records().create(
            "example.com",
            "",
            &Record {
                name: Some("www".to_string()),
                type_: Some("A".to_string()),
                value: Some("192.0.2.1".to_string()),
                weight: Some(0),
                ..Default::default()
            },
        )
    })
    .await
    .unwrap()
    .unwrap();
    assert_eq!(record.id.as_deref(), Some("16894439"));

    let requests = server.received_requests().await.unwrap();
    let body = String::from_utf8(requests[0].body.clone()).unwrap();
    assert!(!body.contains("domain_id="));
    assert!(!body.contains("mx="));
    assert!(!body.contains("ttl="));
}

#[tokio::test(flavor = "multi_thread")]
async fn api_status_error_carries_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/Record.List"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"status":{"code":"-8","message":"Login failed too many times"}}"#,
        ))
        .mount(&server)
        .await;

    let uri = server.uri();
    let err = tokio::task::spawn_blocking(move || {
        client_for(&uri).records().list(&ListParams::for_domain("example.com"))
    })
    .await
    .unwrap()
    .unwrap_err();

    match err {
        ClientError::Api(api) => {
            assert_eq!(api.method, RemoteMethod::RecordList);
            assert_eq!(api.code, "-8");
            assert_eq!(api.message, "Login failed too many times");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn http_failure_is_a_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let uri = server.uri();
    let err =
        tokio::task::spawn_blocking(move || client_for(&uri).domains().get("1", "example.com"))
            .await
            .unwrap()
            .unwrap_err();

    match err {
        ClientError::Http(http) => {
            assert_eq!(http.status.as_u16(), 503);
            assert_eq!(http.body, "maintenance");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn malformed_body_is_a_decoding_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/Domain.Remove"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let uri = server.uri();
    let err = tokio::task::spawn_blocking(move || client_for(&uri).domains().delete("1", ""))
        .await
        .unwrap()
        .unwrap_err();

    assert!(matches!(err, ClientError::Json(_)));
}
