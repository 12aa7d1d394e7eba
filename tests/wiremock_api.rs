//! HTTP tests against wiremock.
//!
//! Uses wiremock to check what actually goes over the wire: path, query,
//! and the `api-key` header.

use scripture_api::{
    BiblesParams, CommonFetchParams, ScriptureClient, ScriptureError, SearchParams,
};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BIBLE: &str = "de4e12af7f28f599-02";

#[tokio::test]
async fn test_bibles_request_on_the_wire() {
    let mock_server = MockServer::start().await;

    let response = serde_json::json!({
        "data": [
            { "id": BIBLE, "abbreviation": "engKJV", "language": { "id": "eng" } }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/bibles"))
        .and(query_param("language", "eng"))
        .and(query_param("ids", BIBLE))
        .and(header("api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&response))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ScriptureClient::with_base_url("test-key", &mock_server.uri()).unwrap();
    let body = client
        .get_bibles(&BiblesParams::new().language("eng").ids(BIBLE))
        .await
        .unwrap();

    assert_eq!(body, response);

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].url.query(),
        Some(format!("language=eng&ids={BIBLE}").as_str())
    );
}

#[tokio::test]
async fn test_not_found_carries_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/bibles/{BIBLE}/verses/XYZ.1.1")))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(serde_json::json!({"error": "not found"})),
        )
        .mount(&mock_server)
        .await;

    let client = ScriptureClient::with_base_url("test-key", &mock_server.uri()).unwrap();
    let err = client
        .get_bible_verse(BIBLE, "XYZ.1.1", &CommonFetchParams::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ScriptureError::ApiRequest { .. }));
    assert_eq!(err.status_code(), Some(404));
    assert_eq!(err.payload(), Some(&serde_json::json!({"error": "not found"})));
}

#[tokio::test]
async fn test_empty_bible_id_requests_bible_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bibles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ScriptureClient::with_base_url("test-key", &mock_server.uri()).unwrap();
    let body = client.get_bible("").await.unwrap();

    assert_eq!(body["data"], serde_json::json!([]));

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn test_search_sends_defaults_for_invalid_numbers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/bibles/{BIBLE}/search")))
        .and(query_param("query", "love one another"))
        .and(query_param("limit", "10"))
        .and(query_param("offset", "-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": {}})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ScriptureClient::with_base_url("test-key", &mock_server.uri()).unwrap();
    client
        .search(
            BIBLE,
            &SearchParams::new("love one another").limit("abc").offset(-1),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_server_error_without_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&mock_server)
        .await;

    let client = ScriptureClient::with_base_url("test-key", &mock_server.uri()).unwrap();
    let err = client.get_bible_book_chapters(BIBLE, "GEN").await.unwrap_err();

    assert_eq!(err.status_code(), Some(500));
    assert!(err.payload().is_none());
    assert!(err.to_string().contains("upstream exploded"));
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    // Grab a free port, then release it so nothing is listening
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let client =
        ScriptureClient::with_base_url("test-key", &format!("http://127.0.0.1:{port}")).unwrap();
    let err = client.get_bible(BIBLE).await.unwrap_err();

    assert!(matches!(err, ScriptureError::Network(_)), "got {err:?}");
    assert!(!err.is_api_error());
}
