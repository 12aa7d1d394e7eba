//! Verses of a chapter.

use serde_json::Value;

use crate::client::ScriptureClient;
use crate::error::Result;
use crate::query::{common_flags, CommonFetchParams, Query};
use crate::traits::Endpoint;

/// `GET /bibles/{bibleId}/chapters/{chapterId}/verses`
#[derive(Debug, Clone, Copy)]
pub struct BibleChapterVerses<'a> {
    pub bible_id: &'a str,
    pub chapter_id: &'a str,
}

impl Endpoint for BibleChapterVerses<'_> {
    fn segments(&self) -> Vec<&str> {
        vec!["bibles", self.bible_id, "chapters", self.chapter_id, "verses"]
    }
}

/// `GET /bibles/{bibleId}/verses/{verseId}`
#[derive(Debug, Clone, Copy)]
pub struct BibleVerse<'a> {
    pub bible_id: &'a str,
    pub verse_id: &'a str,
    pub params: &'a CommonFetchParams,
}

impl Endpoint for BibleVerse<'_> {
    fn segments(&self) -> Vec<&str> {
        vec!["bibles", self.bible_id, "verses", self.verse_id]
    }

    fn query(&self) -> Query {
        common_flags(self.params)
    }
}

impl ScriptureClient {
    /// List the verses of a chapter.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    #[tracing::instrument(skip(self))]
    pub async fn get_bible_chapter_verses(&self, bible_id: &str, chapter_id: &str) -> Result<Value> {
        self.fetch(&BibleChapterVerses {
            bible_id,
            chapter_id,
        })
        .await
    }

    /// Get a single verse with its content.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    #[tracing::instrument(skip(self))]
    pub async fn get_bible_verse(
        &self,
        bible_id: &str,
        verse_id: &str,
        params: &CommonFetchParams,
    ) -> Result<Value> {
        self.fetch(&BibleVerse {
            bible_id,
            verse_id,
            params,
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verse_request() {
        let params = CommonFetchParams::new()
            .include_notes(true)
            .content_type("text");
        let request = BibleVerse {
            bible_id: "de4e12af7f28f599-02",
            verse_id: "JHN.3.16",
            params: &params,
        };

        assert_eq!(request.path(), "bibles/de4e12af7f28f599-02/verses/JHN.3.16");
        assert_eq!(
            request.query().to_query_string(),
            "include-notes=true&content-type=text"
        );
    }

    #[test]
    fn test_chapter_verses_has_no_query() {
        let request = BibleChapterVerses {
            bible_id: "de4e12af7f28f599-02",
            chapter_id: "JHN.3",
        };
        assert_eq!(request.path(), "bibles/de4e12af7f28f599-02/chapters/JHN.3/verses");
        assert!(request.query().is_empty());
    }
}
