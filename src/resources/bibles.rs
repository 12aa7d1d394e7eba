//! Bible listing and lookup.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::ScriptureClient;
use crate::error::Result;
use crate::query::Query;
use crate::traits::Endpoint;

/// Filters for listing bibles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BiblesParams {
    /// ISO 639-3 three letter language code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Bible abbreviation to search for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abbreviation: Option<String>,

    /// Bible name to search for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Comma separated list of bible ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<String>,
}

impl BiblesParams {
    /// Create params with no filters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn language(mut self, value: impl Into<String>) -> Self {
        self.language = Some(value.into());
        self
    }

    #[must_use]
    pub fn abbreviation(mut self, value: impl Into<String>) -> Self {
        self.abbreviation = Some(value.into());
        self
    }

    #[must_use]
    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    #[must_use]
    pub fn ids(mut self, value: impl Into<String>) -> Self {
        self.ids = Some(value.into());
        self
    }
}

/// `GET /bibles`
#[derive(Debug, Clone, Copy)]
pub struct Bibles<'a> {
    pub params: &'a BiblesParams,
}

impl Endpoint for Bibles<'_> {
    fn segments(&self) -> Vec<&str> {
        vec!["bibles"]
    }

    fn query(&self) -> Query {
        let mut query = Query::new();
        query
            .push_opt("language", self.params.language.as_deref())
            .push_opt("abbreviation", self.params.abbreviation.as_deref())
            .push_opt("name", self.params.name.as_deref())
            .push_opt("ids", self.params.ids.as_deref());
        query
    }
}

/// `GET /bibles/{bibleId}`
#[derive(Debug, Clone, Copy)]
pub struct Bible<'a> {
    pub bible_id: &'a str,
}

impl Endpoint for Bible<'_> {
    fn segments(&self) -> Vec<&str> {
        vec!["bibles", self.bible_id]
    }
}

impl ScriptureClient {
    /// List bibles, optionally filtered.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    #[tracing::instrument(skip(self))]
    pub async fn get_bibles(&self, params: &BiblesParams) -> Result<Value> {
        self.fetch(&Bibles { params }).await
    }

    /// Get a single bible.
    ///
    /// An empty `bible_id` lists all bibles instead, as
    /// [`get_bibles`](Self::get_bibles) with no filters.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    #[tracing::instrument(skip(self))]
    pub async fn get_bible(&self, bible_id: &str) -> Result<Value> {
        if bible_id.is_empty() {
            tracing::debug!("no bible id given, listing bibles");
            return self.get_bibles(&BiblesParams::default()).await;
        }

        self.fetch(&Bible { bible_id }).await
    }
}
