//! Keyword search within a bible.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::ScriptureClient;
use crate::error::{Result, ScriptureError};
use crate::query::{number_or_default, NumericParam, Query};
use crate::traits::Endpoint;

/// Page size used when `limit` is missing or not a number.
pub const DEFAULT_SEARCH_LIMIT: i64 = 10;

/// Offset used when `offset` is missing or not a number.
pub const DEFAULT_SEARCH_OFFSET: i64 = 0;

/// Result ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchSort {
    Relevance,
    Canonical,
    ReverseCanonical,
}

impl SearchSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchSort::Relevance => "relevance",
            SearchSort::Canonical => "canonical",
            SearchSort::ReverseCanonical => "reverse-canonical",
        }
    }
}

impl FromStr for SearchSort {
    type Err = ScriptureError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "relevance" => Ok(SearchSort::Relevance),
            "canonical" => Ok(SearchSort::Canonical),
            "reverse-canonical" => Ok(SearchSort::ReverseCanonical),
            _ => Err(ScriptureError::InvalidParameter(format!(
                "sort '{s}': expected relevance, canonical or reverse-canonical"
            ))),
        }
    }
}

impl fmt::Display for SearchSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Spelling tolerance for keyword matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Fuzziness {
    /// Let the API pick based on keyword length.
    #[serde(rename = "AUTO")]
    Auto,
    #[serde(rename = "0")]
    Zero,
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
}

impl Fuzziness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Fuzziness::Auto => "AUTO",
            Fuzziness::Zero => "0",
            Fuzziness::One => "1",
            Fuzziness::Two => "2",
        }
    }
}

impl FromStr for Fuzziness {
    type Err = ScriptureError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            v if v.eq_ignore_ascii_case("auto") => Ok(Fuzziness::Auto),
            "0" => Ok(Fuzziness::Zero),
            "1" => Ok(Fuzziness::One),
            "2" => Ok(Fuzziness::Two),
            _ => Err(ScriptureError::InvalidParameter(format!(
                "fuzziness '{s}': expected AUTO, 0, 1 or 2"
            ))),
        }
    }
}

impl fmt::Display for Fuzziness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Search parameters.
///
/// `limit` and `offset` accept numbers or numeric strings. Values that are
/// not finite numbers are replaced by [`DEFAULT_SEARCH_LIMIT`] and
/// [`DEFAULT_SEARCH_OFFSET`]; both are always sent. Zero is a valid number,
/// so `limit(0)` is sent as `limit=0` rather than the default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    /// Keywords; every keyword must appear in a matching verse.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    /// Maximum number of results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<NumericParam>,

    /// Number of results to skip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<NumericParam>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SearchSort>,

    /// Comma separated passage ids limiting the search, e.g. `gen.1,gen.5`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuzziness: Option<Fuzziness>,
}

impl SearchParams {
    /// Search for the given keywords.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn limit(mut self, value: impl Into<NumericParam>) -> Self {
        self.limit = Some(value.into());
        self
    }

    #[must_use]
    pub fn offset(mut self, value: impl Into<NumericParam>) -> Self {
        self.offset = Some(value.into());
        self
    }

    #[must_use]
    pub fn sort(mut self, value: SearchSort) -> Self {
        self.sort = Some(value);
        self
    }

    #[must_use]
    pub fn range(mut self, value: impl Into<String>) -> Self {
        self.range = Some(value.into());
        self
    }

    #[must_use]
    pub fn fuzziness(mut self, value: Fuzziness) -> Self {
        self.fuzziness = Some(value);
        self
    }
}

/// `GET /bibles/{bibleId}/search`
#[derive(Debug, Clone, Copy)]
pub struct Search<'a> {
    pub bible_id: &'a str,
    pub params: &'a SearchParams,
}

impl Endpoint for Search<'_> {
    fn segments(&self) -> Vec<&str> {
        vec!["bibles", self.bible_id, "search"]
    }

    fn query(&self) -> Query {
        let params = self.params;
        let limit = number_or_default(params.limit.as_ref(), DEFAULT_SEARCH_LIMIT);
        let offset = number_or_default(params.offset.as_ref(), DEFAULT_SEARCH_OFFSET);

        let mut query = Query::new();
        query
            .push_opt("query", params.query.as_deref())
            .push("limit", limit)
            .push("offset", offset)
            .push_opt("sort", params.sort.as_ref().map(SearchSort::as_str))
            .push_opt("range", params.range.as_deref())
            .push_opt("fuzziness", params.fuzziness.as_ref().map(Fuzziness::as_str));
        query
    }
}

impl ScriptureClient {
    /// Search a bible for verses matching all keywords.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    #[tracing::instrument(skip(self))]
    pub async fn search(&self, bible_id: &str, params: &SearchParams) -> Result<Value> {
        self.fetch(&Search { bible_id, params }).await
    }
}
