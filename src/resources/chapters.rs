//! Chapters of a book.

use serde_json::Value;

use crate::client::ScriptureClient;
use crate::error::Result;
use crate::query::{common_flags, CommonFetchParams, Query};
use crate::traits::Endpoint;

/// `GET /bibles/{bibleId}/books/{bookId}/chapters`
#[derive(Debug, Clone, Copy)]
pub struct BibleBookChapters<'a> {
    pub bible_id: &'a str,
    pub book_id: &'a str,
}

impl Endpoint for BibleBookChapters<'_> {
    fn segments(&self) -> Vec<&str> {
        vec!["bibles", self.bible_id, "books", self.book_id, "chapters"]
    }
}

/// `GET /bibles/{bibleId}/chapters/{chapterId}`
#[derive(Debug, Clone, Copy)]
pub struct BibleBookChapter<'a> {
    pub bible_id: &'a str,
    pub chapter_id: &'a str,
    pub params: &'a CommonFetchParams,
}

impl Endpoint for BibleBookChapter<'_> {
    fn segments(&self) -> Vec<&str> {
        vec!["bibles", self.bible_id, "chapters", self.chapter_id]
    }

    fn query(&self) -> Query {
        common_flags(self.params)
    }
}

impl ScriptureClient {
    /// List the chapters of a book.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    #[tracing::instrument(skip(self))]
    pub async fn get_bible_book_chapters(&self, bible_id: &str, book_id: &str) -> Result<Value> {
        self.fetch(&BibleBookChapters { bible_id, book_id }).await
    }

    /// Get a chapter, including the content of all its verses.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    #[tracing::instrument(skip(self))]
    pub async fn get_bible_book_chapter(
        &self,
        bible_id: &str,
        chapter_id: &str,
        params: &CommonFetchParams,
    ) -> Result<Value> {
        self.fetch(&BibleBookChapter {
            bible_id,
            chapter_id,
            params,
        })
        .await
    }
}
