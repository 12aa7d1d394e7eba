//! Sections: titled groupings of verses within books and chapters.

use serde_json::Value;

use crate::client::ScriptureClient;
use crate::error::Result;
use crate::query::{common_flags, CommonFetchParams, Query};
use crate::traits::Endpoint;

/// `GET /bibles/{bibleId}/books/{bookId}/sections`
#[derive(Debug, Clone, Copy)]
pub struct BibleBookSections<'a> {
    pub bible_id: &'a str,
    pub book_id: &'a str,
    pub params: &'a CommonFetchParams,
}

impl Endpoint for BibleBookSections<'_> {
    fn segments(&self) -> Vec<&str> {
        vec!["bibles", self.bible_id, "books", self.book_id, "sections"]
    }

    fn query(&self) -> Query {
        common_flags(self.params)
    }
}

/// `GET /bibles/{bibleId}/chapters/{chapterId}/sections`
#[derive(Debug, Clone, Copy)]
pub struct BibleChapterSections<'a> {
    pub bible_id: &'a str,
    pub chapter_id: &'a str,
}

impl Endpoint for BibleChapterSections<'_> {
    fn segments(&self) -> Vec<&str> {
        vec!["bibles", self.bible_id, "chapters", self.chapter_id, "sections"]
    }
}

/// `GET /bibles/{bibleId}/sections/{sectionId}`
#[derive(Debug, Clone, Copy)]
pub struct BibleSection<'a> {
    pub bible_id: &'a str,
    pub section_id: &'a str,
    pub params: &'a CommonFetchParams,
}

impl Endpoint for BibleSection<'_> {
    fn segments(&self) -> Vec<&str> {
        vec!["bibles", self.bible_id, "sections", self.section_id]
    }

    fn query(&self) -> Query {
        common_flags(self.params)
    }
}

impl ScriptureClient {
    /// List the sections of a book.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    #[tracing::instrument(skip(self))]
    pub async fn get_bible_book_sections(
        &self,
        bible_id: &str,
        book_id: &str,
        params: &CommonFetchParams,
    ) -> Result<Value> {
        self.fetch(&BibleBookSections {
            bible_id,
            book_id,
            params,
        })
        .await
    }

    /// List the sections of a chapter.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    #[tracing::instrument(skip(self))]
    pub async fn get_bible_chapter_sections(
        &self,
        bible_id: &str,
        chapter_id: &str,
    ) -> Result<Value> {
        self.fetch(&BibleChapterSections {
            bible_id,
            chapter_id,
        })
        .await
    }

    /// Get a section with the content of all its verses.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    #[tracing::instrument(skip(self))]
    pub async fn get_bible_section(
        &self,
        bible_id: &str,
        section_id: &str,
        params: &CommonFetchParams,
    ) -> Result<Value> {
        self.fetch(&BibleSection {
            bible_id,
            section_id,
            params,
        })
        .await
    }
}
