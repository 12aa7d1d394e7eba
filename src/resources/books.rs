//! Books of a bible.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::ScriptureClient;
use crate::error::Result;
use crate::query::Query;
use crate::traits::Endpoint;

/// Options for listing the books of a bible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BibleBooksParams {
    /// Include a chapter summary for each book.
    pub include_chapters: bool,
    /// Include chapters and their sections for each book.
    pub include_chapters_and_sections: bool,
}

impl BibleBooksParams {
    /// Create params with both includes off.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn include_chapters(mut self, value: bool) -> Self {
        self.include_chapters = value;
        self
    }

    #[must_use]
    pub fn include_chapters_and_sections(mut self, value: bool) -> Self {
        self.include_chapters_and_sections = value;
        self
    }
}

/// Options for fetching one book.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BibleBookParams {
    /// Include a chapter summary for the book.
    pub include_chapters: bool,
}

impl BibleBookParams {
    /// Create params without the chapter summary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn include_chapters(mut self, value: bool) -> Self {
        self.include_chapters = value;
        self
    }
}

/// `GET /bibles/{bibleId}/books`
#[derive(Debug, Clone, Copy)]
pub struct BibleBooks<'a> {
    pub bible_id: &'a str,
    pub params: &'a BibleBooksParams,
}

impl Endpoint for BibleBooks<'_> {
    fn segments(&self) -> Vec<&str> {
        vec!["bibles", self.bible_id, "books"]
    }

    fn query(&self) -> Query {
        let mut query = Query::new();
        query
            .push_flag("include-chapters", self.params.include_chapters)
            .push_flag(
                "include-chapters-and-sections",
                self.params.include_chapters_and_sections,
            );
        query
    }
}

/// `GET /bibles/{bibleId}/books/{bookId}`
#[derive(Debug, Clone, Copy)]
pub struct BibleBook<'a> {
    pub bible_id: &'a str,
    pub book_id: &'a str,
    pub params: &'a BibleBookParams,
}

impl Endpoint for BibleBook<'_> {
    fn segments(&self) -> Vec<&str> {
        vec!["bibles", self.bible_id, "books", self.book_id]
    }

    fn query(&self) -> Query {
        let mut query = Query::new();
        query.push_flag("include-chapters", self.params.include_chapters);
        query
    }
}

impl ScriptureClient {
    /// List the books of a bible.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    #[tracing::instrument(skip(self))]
    pub async fn get_bible_books(&self, bible_id: &str, params: &BibleBooksParams) -> Result<Value> {
        self.fetch(&BibleBooks { bible_id, params }).await
    }

    /// Get a single book of a bible.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    #[tracing::instrument(skip(self))]
    pub async fn get_bible_book(
        &self,
        bible_id: &str,
        book_id: &str,
        params: &BibleBookParams,
    ) -> Result<Value> {
        self.fetch(&BibleBook {
            bible_id,
            book_id,
            params,
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_books_flags() {
        let none = BibleBooksParams::default();
        let chapters = BibleBooksParams::new().include_chapters(true);
        let both = chapters.include_chapters_and_sections(true);

        let render = |params: &BibleBooksParams| {
            BibleBooks {
                bible_id: "b",
                params,
            }
            .query()
            .to_query_string()
        };

        assert_eq!(render(&none), "");
        assert_eq!(render(&chapters), "include-chapters=true");
        assert_eq!(
            render(&both),
            "include-chapters=true&include-chapters-and-sections=true"
        );
    }

    #[test]
    fn test_book_path_and_flag() {
        let params = BibleBookParams::new().include_chapters(true);
        let request = BibleBook {
            bible_id: "de4e12af7f28f599-02",
            book_id: "GEN",
            params: &params,
        };

        assert_eq!(request.path(), "bibles/de4e12af7f28f599-02/books/GEN");
        assert_eq!(request.query().to_query_string(), "include-chapters=true");
    }

    #[test]
    fn test_books_params_from_json() {
        let params: BibleBooksParams =
            serde_json::from_str(r#"{"includeChaptersAndSections": true}"#).unwrap();
        assert!(!params.include_chapters);
        assert!(params.include_chapters_and_sections);
    }
}
