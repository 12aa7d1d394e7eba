//! Passages: a chapter, a verse or a verse range.

use serde_json::Value;

use crate::client::ScriptureClient;
use crate::error::Result;
use crate::query::{common_flags, CommonFetchParams, Query};
use crate::traits::Endpoint;

/// `GET /bibles/{bibleId}/passages/{passageId}`
///
/// `passage_id` may name a chapter (`JHN.3`), a verse (`JHN.3.16`) or a
/// range (`JHN.3.16-JHN.3.18`).
#[derive(Debug, Clone, Copy)]
pub struct BiblePassage<'a> {
    pub bible_id: &'a str,
    pub passage_id: &'a str,
    pub params: &'a CommonFetchParams,
}

impl Endpoint for BiblePassage<'_> {
    fn segments(&self) -> Vec<&str> {
        vec!["bibles", self.bible_id, "passages", self.passage_id]
    }

    fn query(&self) -> Query {
        common_flags(self.params)
    }
}

impl ScriptureClient {
    /// Get a passage with the content of every verse it covers.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    #[tracing::instrument(skip(self))]
    pub async fn get_bible_passage(
        &self,
        bible_id: &str,
        passage_id: &str,
        params: &CommonFetchParams,
    ) -> Result<Value> {
        self.fetch(&BiblePassage {
            bible_id,
            passage_id,
            params,
        })
        .await
    }
}
