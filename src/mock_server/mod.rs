//! Mock scripture API server for E2E testing.
//!
//! This module provides an in-memory mock server that simulates the
//! scripture API for integration and end-to-end testing. Unlike wiremock,
//! which mocks responses per test, this server answers every endpoint from
//! a fixture store, checks the `api-key` header and records each request.
//!
//! # Example
//!
//! ```ignore
//! use scripture_api::mock_server::{Fixtures, MockServer};
//! use scripture_api::{CommonFetchParams, ScriptureClient};
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let client = ScriptureClient::with_base_url("test-key", server.url()).unwrap();
//!
//!     // Server comes with default fixtures
//!     let verse = client
//!         .get_bible_verse(Fixtures::KJV_ID, "JHN.3.16", &CommonFetchParams::default())
//!         .await
//!         .unwrap();
//!     assert_eq!(verse["data"]["reference"], "John 3:16");
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::{DefaultScenario, Fixtures};
pub use server::MockServer;
pub use state::{
    MockBible, MockBook, MockChapter, MockLanguage, MockSection, MockState, MockVerse,
    RecordedRequest,
};
