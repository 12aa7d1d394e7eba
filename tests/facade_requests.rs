//! Facade request tests with a recording transport.
//!
//! Every client method is called against an in-process transport that
//! records the URL and key it was given, so URL construction is checked
//! without any network.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use scripture_api::{
    ApiKey, BibleBookParams, BibleBooksParams, BiblesParams, CommonFetchParams, RawResponse,
    ScriptureClient, ScriptureError, SearchParams, SearchSort, Transport,
};
use url::Url;

const BASE: &str = "https://api.example.test/v1";
const BIBLE: &str = "de4e12af7f28f599-02";

#[derive(Clone, Default)]
struct RecordingTransport {
    calls: Arc<Mutex<Vec<(Url, String)>>>,
}

impl RecordingTransport {
    fn urls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(url, _)| url.to_string())
            .collect()
    }

    fn keys(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(_, key)| key.clone())
            .collect()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn get(&self, url: Url, api_key: &ApiKey) -> scripture_api::Result<RawResponse> {
        self.calls
            .lock()
            .unwrap()
            .push((url.clone(), api_key.expose().to_string()));

        Ok(RawResponse {
            status: 200,
            body: serde_json::json!({ "data": { "url": url.as_str() } }).to_string(),
        })
    }
}

/// Transport that always answers with a fixed status and body.
struct FixedTransport(u16, &'static str);

#[async_trait]
impl Transport for FixedTransport {
    async fn get(&self, _url: Url, _api_key: &ApiKey) -> scripture_api::Result<RawResponse> {
        Ok(RawResponse {
            status: self.0,
            body: self.1.to_string(),
        })
    }
}

fn client() -> (ScriptureClient, RecordingTransport) {
    let transport = RecordingTransport::default();
    let client = ScriptureClient::with_transport("secret-key", BASE, transport.clone()).unwrap();
    (client, transport)
}

#[tokio::test]
async fn test_bibles_url_in_declaration_order() {
    let (client, transport) = client();

    let params = BiblesParams::new().language("eng").ids(BIBLE);
    let body = client.get_bibles(&params).await.unwrap();

    let expected = format!("{BASE}/bibles?language=eng&ids={BIBLE}");
    assert_eq!(transport.urls(), vec![expected.clone()]);
    assert_eq!(transport.keys(), vec!["secret-key".to_string()]);
    assert_eq!(body["data"]["url"], expected);
}

#[tokio::test]
async fn test_get_bible_with_empty_id_lists_bibles() {
    let (client, transport) = client();

    let from_empty = client.get_bible("").await.unwrap();
    let listed = client.get_bibles(&BiblesParams::default()).await.unwrap();

    assert_eq!(from_empty, listed);
    assert_eq!(transport.urls(), vec![format!("{BASE}/bibles"); 2]);
}

#[tokio::test]
async fn test_get_bible_with_whitespace_id_is_sent_as_is() {
    let (client, transport) = client();

    client.get_bible(" ").await.unwrap();

    assert_eq!(transport.urls(), vec![format!("{BASE}/bibles/%20")]);
}

#[tokio::test]
async fn test_dot_segment_ids_are_rejected_before_sending() {
    let (client, transport) = client();

    let err = client.get_bible("..").await.unwrap_err();
    assert!(matches!(err, ScriptureError::InvalidParameter(_)));

    let err = client
        .get_bible_verse(BIBLE, ".", &CommonFetchParams::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ScriptureError::InvalidParameter(_)));

    assert!(transport.urls().is_empty());
}

#[tokio::test]
async fn test_get_bible_by_id() {
    let (client, transport) = client();

    client.get_bible(BIBLE).await.unwrap();

    assert_eq!(transport.urls(), vec![format!("{BASE}/bibles/{BIBLE}")]);
}

#[tokio::test]
async fn test_every_resource_url() {
    let (client, transport) = client();
    let common = CommonFetchParams::new()
        .include_verse_numbers(true)
        .content_type("TEXT");

    client
        .get_bible_books(BIBLE, &BibleBooksParams::new().include_chapters(true))
        .await
        .unwrap();
    client
        .get_bible_book(BIBLE, "GEN", &BibleBookParams::default())
        .await
        .unwrap();
    client.get_bible_book_chapters(BIBLE, "GEN").await.unwrap();
    client
        .get_bible_book_chapter(BIBLE, "GEN.1", &common)
        .await
        .unwrap();
    client
        .get_bible_passage(BIBLE, "JHN.3.16-JHN.3.18", &CommonFetchParams::default())
        .await
        .unwrap();
    client
        .search(
            BIBLE,
            &SearchParams::new("love").limit("abc").sort(SearchSort::Canonical),
        )
        .await
        .unwrap();
    client
        .get_bible_book_sections(BIBLE, "GEN", &common)
        .await
        .unwrap();
    client.get_bible_chapter_sections(BIBLE, "GEN.1").await.unwrap();
    client
        .get_bible_section(BIBLE, "GEN.S1", &common)
        .await
        .unwrap();
    client.get_bible_chapter_verses(BIBLE, "GEN.1").await.unwrap();
    client
        .get_bible_verse(BIBLE, "JHN.3.16", &common)
        .await
        .unwrap();

    let flags = "include-verse-numbers=true&content-type=text";
    let expected = vec![
        format!("{BASE}/bibles/{BIBLE}/books?include-chapters=true"),
        format!("{BASE}/bibles/{BIBLE}/books/GEN"),
        format!("{BASE}/bibles/{BIBLE}/books/GEN/chapters"),
        format!("{BASE}/bibles/{BIBLE}/chapters/GEN.1?{flags}"),
        format!("{BASE}/bibles/{BIBLE}/passages/JHN.3.16-JHN.3.18?content-type=json"),
        format!("{BASE}/bibles/{BIBLE}/search?query=love&limit=10&offset=0&sort=canonical"),
        format!("{BASE}/bibles/{BIBLE}/books/GEN/sections?{flags}"),
        format!("{BASE}/bibles/{BIBLE}/chapters/GEN.1/sections"),
        format!("{BASE}/bibles/{BIBLE}/sections/GEN.S1?{flags}"),
        format!("{BASE}/bibles/{BIBLE}/chapters/GEN.1/verses"),
        format!("{BASE}/bibles/{BIBLE}/verses/JHN.3.16?{flags}"),
    ];

    assert_eq!(transport.urls(), expected);
    assert!(transport.keys().iter().all(|k| k == "secret-key"));
}

#[tokio::test]
async fn test_concurrent_calls_build_independent_urls() {
    let (client, transport) = client();
    let params = CommonFetchParams::default();

    let verse_ids: Vec<String> = (1..=20).map(|n| format!("JHN.3.{n}")).collect();
    let calls = verse_ids.iter().map(|id| {
        let client = client.clone();
        let params = params.clone();
        let id = id.clone();
        tokio::spawn(async move { client.get_bible_verse(BIBLE, &id, &params).await })
    });

    for handle in calls.collect::<Vec<_>>() {
        handle.await.unwrap().unwrap();
    }

    let mut urls = transport.urls();
    urls.sort();
    let mut expected: Vec<String> = verse_ids
        .iter()
        .map(|id| format!("{BASE}/bibles/{BIBLE}/verses/{id}?content-type=json"))
        .collect();
    expected.sort();
    assert_eq!(urls, expected);
}

#[tokio::test]
async fn test_non_success_status_becomes_api_request_error() {
    let client =
        ScriptureClient::with_transport("k", BASE, FixedTransport(404, r#"{"error":"not found"}"#))
            .unwrap();

    let err = client.get_bible(BIBLE).await.unwrap_err();

    match &err {
        ScriptureError::ApiRequest {
            status_code,
            payload,
            ..
        } => {
            assert_eq!(*status_code, Some(404));
            assert_eq!(payload.as_ref(), Some(&serde_json::json!({"error": "not found"})));
        }
        other => panic!("Expected ApiRequest, got {other:?}"),
    }
}

#[tokio::test]
async fn test_undecodable_success_body_is_api_request_error() {
    let client = ScriptureClient::with_transport("k", BASE, FixedTransport(200, "not json")).unwrap();

    let err = client
        .get_bible_chapter_verses(BIBLE, "GEN.1")
        .await
        .unwrap_err();

    assert!(err.is_api_error());
    assert!(err.payload().is_none());
}
