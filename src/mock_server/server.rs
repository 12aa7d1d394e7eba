//! Mock scripture API server.
//!
//! Provides an axum-based HTTP server that simulates the scripture API.

use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use super::fixtures::Fixtures;
use super::handlers;
use super::state::{MockState, RecordedRequest};

/// A mock scripture API server for testing.
///
/// The server runs in the background and can be used to test the client
/// against a realistic API implementation.
pub struct MockServer {
    /// The URL where the server is listening.
    url: String,
    /// Handle to the server task.
    handle: JoinHandle<()>,
    /// Shared state that can be modified during tests.
    state: Arc<RwLock<MockState>>,
}

impl MockServer {
    /// Start a new mock server with default fixtures.
    ///
    /// The server listens on a random available port and returns immediately.
    /// Use `url()` to get the server's base URL.
    pub async fn start() -> Self {
        Self::with_state(Fixtures::default_state()).await
    }

    /// Start a mock server with empty state.
    ///
    /// Useful when you want to control exactly what data is available.
    pub async fn start_empty() -> Self {
        Self::with_state(MockState::new()).await
    }

    /// Start a mock server with custom state.
    pub async fn with_state(state: MockState) -> Self {
        let shared_state = state.shared();
        let app = Self::create_router(shared_state.clone());

        // Bind to a random available port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to address");
        let addr = listener.local_addr().expect("Failed to get local address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server error");
        });

        Self {
            url: format!("http://{}", addr),
            handle,
            state: shared_state,
        }
    }

    /// Get the base URL of the mock server.
    ///
    /// Use this URL when creating a `ScriptureClient` for testing.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get access to the server's shared state.
    ///
    /// This allows modifying the mock data during a test.
    pub fn state(&self) -> Arc<RwLock<MockState>> {
        self.state.clone()
    }

    /// Requests received so far, in arrival order.
    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.state.read().await.requests.clone()
    }

    /// Shutdown the server.
    ///
    /// This aborts the server task. It's safe to call multiple times.
    pub async fn shutdown(self) {
        self.handle.abort();
        let _ = self.handle.await;
    }

    /// Create the axum router with all routes.
    fn create_router(state: Arc<RwLock<MockState>>) -> Router {
        Router::new()
            // Bible routes
            .route("/bibles", get(handlers::list_bibles))
            .route("/bibles/:bible_id", get(handlers::get_bible))
            // Book routes
            .route("/bibles/:bible_id/books", get(handlers::list_books))
            .route("/bibles/:bible_id/books/:book_id", get(handlers::get_book))
            .route(
                "/bibles/:bible_id/books/:book_id/chapters",
                get(handlers::list_chapters),
            )
            .route(
                "/bibles/:bible_id/books/:book_id/sections",
                get(handlers::list_book_sections),
            )
            // Chapter routes
            .route(
                "/bibles/:bible_id/chapters/:chapter_id",
                get(handlers::get_chapter),
            )
            .route(
                "/bibles/:bible_id/chapters/:chapter_id/sections",
                get(handlers::list_chapter_sections),
            )
            .route(
                "/bibles/:bible_id/chapters/:chapter_id/verses",
                get(handlers::list_chapter_verses),
            )
            // Content routes
            .route(
                "/bibles/:bible_id/passages/:passage_id",
                get(handlers::get_passage),
            )
            .route(
                "/bibles/:bible_id/sections/:section_id",
                get(handlers::get_section),
            )
            .route("/bibles/:bible_id/verses/:verse_id", get(handlers::get_verse))
            // Search
            .route("/bibles/:bible_id/search", get(handlers::search))
            // Health check
            .route("/health", get(health_check))
            .with_state(state)
    }
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BiblesParams, ScriptureClient};

    #[tokio::test]
    async fn test_server_starts_and_responds() {
        let server = MockServer::start().await;

        // Server should be accessible
        let client = reqwest::Client::new();
        let response = client
            .get(format!("{}/health", server.url()))
            .send()
            .await
            .expect("Failed to send request");

        assert!(response.status().is_success());
        assert_eq!(response.text().await.unwrap(), "ok");

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_get_bible_with_scripture_client() {
        let server = MockServer::start().await;
        let client = ScriptureClient::with_base_url("test-key", server.url()).unwrap();

        let bible = client
            .get_bible(Fixtures::KJV_ID)
            .await
            .expect("Failed to get bible");

        assert_eq!(bible["data"]["abbreviation"], "engKJV");

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_empty_server() {
        let server = MockServer::start_empty().await;
        let client = ScriptureClient::with_base_url("test-key", server.url()).unwrap();

        let bibles = client.get_bibles(&BiblesParams::default()).await.unwrap();
        assert_eq!(bibles["data"], serde_json::json!([]));

        let result = client.get_bible(Fixtures::KJV_ID).await;
        assert_eq!(result.unwrap_err().status_code(), Some(404));

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_custom_state_requires_key() {
        let state = MockState::new()
            .with_bible(Fixtures::bible("custom", "CST", "Custom Bible", ("eng", "English")))
            .with_required_api_key("right-key");
        let server = MockServer::with_state(state).await;

        let wrong = ScriptureClient::with_base_url("wrong-key", server.url()).unwrap();
        let err = wrong.get_bible("custom").await.unwrap_err();
        assert_eq!(err.status_code(), Some(401));

        let right = ScriptureClient::with_base_url("right-key", server.url()).unwrap();
        let bible = right.get_bible("custom").await.unwrap();
        assert_eq!(bible["data"]["name"], "Custom Bible");

        let requests = server.requests().await;
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].api_key.as_deref(), Some("wrong-key"));
        assert_eq!(requests[1].path, "/bibles/custom");

        server.shutdown().await;
    }
}
