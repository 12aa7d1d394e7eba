//! API.Bible client library.
//!
//! A Rust client for the [API.Bible](https://scripture.api.bible/) scripture
//! REST API. Each API resource (bibles, books, chapters, passages, sections,
//! verses, search) is a typed method on [`ScriptureClient`] that issues one
//! GET request and returns the decoded JSON body.
//!
//! # Quick Start
//!
//! ```no_run
//! use scripture_api::{CommonFetchParams, ContentType, ScriptureClient, SearchParams};
//!
//! #[tokio::main]
//! async fn main() -> scripture_api::Result<()> {
//!     let client = ScriptureClient::new("your-api-key")?;
//!
//!     // A single verse as plain text
//!     let verse = client
//!         .get_bible_verse(
//!             "de4e12af7f28f599-02",
//!             "JHN.3.16",
//!             &CommonFetchParams::new().content_type(ContentType::Text),
//!         )
//!         .await?;
//!     println!("{}", verse["data"]["content"]);
//!
//!     // Keyword search, second page of five
//!     let results = client
//!         .search("de4e12af7f28f599-02", &SearchParams::new("love").limit(5).offset(5))
//!         .await?;
//!     println!("{}", results["data"]["total"]);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`query`] builds query strings from parameter structs.
//! - Request types (e.g. [`BibleVerse`]) implement [`Endpoint`], describing
//!   the path and query of one resource.
//! - [`Transport`] performs the authenticated GET; [`HttpTransport`] is the
//!   `reqwest` implementation.
//! - [`ScriptureClient`] ties them together and normalises failures into
//!   [`ScriptureError`].
//!
//! Responses are returned as [`serde_json::Value`] without validation.
//!
//! # Lenient parameters
//!
//! Some parameters are corrected instead of rejected: an unsupported
//! `content_type` is sent as `json`, and a `limit`/`offset` that is not a
//! finite number is sent as `10`/`0`.

mod client;
mod error;
pub mod query;
mod resources;
mod traits;
mod transport;

#[cfg(feature = "test-server")]
pub mod mock_server;

// Re-export core types
pub use client::{ScriptureClient, DEFAULT_BASE_URL};
pub use error::{Result, ScriptureError};
pub use transport::{ApiKey, HttpTransport, RawResponse, Transport, API_KEY_HEADER, USER_AGENT};

// Re-export traits
pub use traits::Endpoint;

// Re-export parameter types
pub use query::{CommonFetchParams, ContentType, NumericParam, Query};

// Re-export request types
pub use resources::{
    // Bibles
    Bible,
    Bibles,
    BiblesParams,
    // Books
    BibleBook,
    BibleBookParams,
    BibleBooks,
    BibleBooksParams,
    // Chapters
    BibleBookChapter,
    BibleBookChapters,
    // Passages
    BiblePassage,
    // Search
    Fuzziness,
    Search,
    SearchParams,
    SearchSort,
    DEFAULT_SEARCH_LIMIT,
    DEFAULT_SEARCH_OFFSET,
    // Sections
    BibleBookSections,
    BibleChapterSections,
    BibleSection,
    // Verses
    BibleChapterVerses,
    BibleVerse,
};
