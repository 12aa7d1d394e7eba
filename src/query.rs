//! Query-string construction for scripture API requests.
//!
//! Every request type renders its parameters into a [`Query`], an ordered
//! list of `key=value` pairs. Two rendering styles exist:
//!
//! - Plain parameter lists (bibles, books, search) append each parameter
//!   that is present, in declaration order.
//! - Content endpoints (chapters, passages, sections, verses) share the
//!   [`CommonFetchParams`] flags rendered by [`common_flags`].
//!
//! Rendering is a pure function of the parameter values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScriptureError;

/// An ordered set of query parameters.
///
/// Keys are the API's kebab-case parameter names. Values are stored
/// unencoded and percent-encoded by [`Query::to_query_string`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(&'static str, String)>,
}

impl Query {
    /// Create an empty query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter unconditionally.
    pub fn push(&mut self, key: &'static str, value: impl Into<String>) -> &mut Self {
        self.pairs.push((key, value.into()));
        self
    }

    /// Append a parameter only when a non-empty value is present.
    pub fn push_opt(&mut self, key: &'static str, value: Option<&str>) -> &mut Self {
        match value {
            Some(v) if !v.is_empty() => self.push(key, v),
            _ => self,
        }
    }

    /// Append `key=true` when the flag is set; skip it otherwise.
    pub fn push_flag(&mut self, key: &'static str, flag: bool) -> &mut Self {
        if flag {
            self.push(key, "true");
        }
        self
    }

    /// Look up the value of a parameter.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// The parameters in the order they were appended.
    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }

    /// Returns true if no parameters were appended.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns the number of parameters.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Render as `key=value&key=value` with percent-encoded values.
    ///
    /// No leading `?` and no trailing `&`. An empty query renders as an
    /// empty string.
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

/// Response body format for content endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    #[default]
    Json,
    Html,
    Text,
}

impl ContentType {
    /// The lower-case wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Json => "json",
            ContentType::Html => "html",
            ContentType::Text => "text",
        }
    }

    /// Resolve a caller-supplied value, falling back to [`ContentType::Json`]
    /// when it is absent or not one of `json`, `html`, `text`.
    ///
    /// Invalid values are replaced rather than rejected.
    pub fn resolve(raw: Option<&str>) -> Self {
        match raw {
            None => ContentType::default(),
            Some(value) => value.parse().unwrap_or_else(|_| {
                tracing::debug!(value, "unsupported content-type, using json");
                ContentType::default()
            }),
        }
    }
}

impl FromStr for ContentType {
    type Err = ScriptureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ContentType::Json),
            "html" => Ok(ContentType::Html),
            "text" => Ok(ContentType::Text),
            _ => Err(ScriptureError::InvalidParameter(format!(
                "content-type '{s}': expected json, html or text"
            ))),
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ContentType> for String {
    fn from(value: ContentType) -> Self {
        value.as_str().to_string()
    }
}

/// Flags shared by the chapter, passage, section and verse endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommonFetchParams {
    /// Response format (`json`, `html` or `text`, case-insensitive).
    /// Anything else is sent as `json`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Include footnotes in content.
    pub include_notes: bool,
    /// Include section titles in content.
    pub include_titles: bool,
    /// Include chapter numbers in content.
    pub include_chapter_numbers: bool,
    /// Include verse numbers in content.
    pub include_verse_numbers: bool,
    /// Include spans that wrap verse numbers and verse text.
    pub include_verse_spans: bool,
    /// Comma separated list of bible ids to include as parallels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallels: Option<String>,
}

impl CommonFetchParams {
    /// Create params with every flag unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the response format.
    #[must_use]
    pub fn content_type(mut self, value: impl Into<String>) -> Self {
        self.content_type = Some(value.into());
        self
    }

    #[must_use]
    pub fn include_notes(mut self, value: bool) -> Self {
        self.include_notes = value;
        self
    }

    #[must_use]
    pub fn include_titles(mut self, value: bool) -> Self {
        self.include_titles = value;
        self
    }

    #[must_use]
    pub fn include_chapter_numbers(mut self, value: bool) -> Self {
        self.include_chapter_numbers = value;
        self
    }

    #[must_use]
    pub fn include_verse_numbers(mut self, value: bool) -> Self {
        self.include_verse_numbers = value;
        self
    }

    #[must_use]
    pub fn include_verse_spans(mut self, value: bool) -> Self {
        self.include_verse_spans = value;
        self
    }

    /// Set the parallel bible ids (comma separated).
    #[must_use]
    pub fn parallels(mut self, value: impl Into<String>) -> Self {
        self.parallels = Some(value.into());
        self
    }
}

/// Render the shared content flags.
///
/// Flags appear only when set, followed by `parallels` when present and
/// always by `content-type`.
pub fn common_flags(params: &CommonFetchParams) -> Query {
    let content_type = ContentType::resolve(params.content_type.as_deref());

    let mut query = Query::new();
    query
        .push_flag("include-notes", params.include_notes)
        .push_flag("include-titles", params.include_titles)
        .push_flag("include-chapter-numbers", params.include_chapter_numbers)
        .push_flag("include-verse-numbers", params.include_verse_numbers)
        .push_flag("include-verse-spans", params.include_verse_spans)
        .push_opt("parallels", params.parallels.as_deref())
        .push("content-type", content_type.as_str());
    query
}

/// A numeric query parameter that may arrive as a number or as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericParam {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl NumericParam {
    /// The wire value, or `None` if this is not a finite number.
    pub fn valid_value(&self) -> Option<String> {
        match self {
            NumericParam::Integer(n) => Some(n.to_string()),
            NumericParam::Float(n) if n.is_finite() => Some(n.to_string()),
            NumericParam::Float(_) => None,
            NumericParam::Text(s) => is_valid_number(s).then(|| s.trim().to_string()),
        }
    }

    /// Returns true if the value is a finite number.
    pub fn is_valid(&self) -> bool {
        self.valid_value().is_some()
    }
}

/// Returns true if `text` parses as a finite decimal number.
///
/// Surrounding whitespace is ignored. Empty strings, `NaN` and infinities
/// are rejected. Signs and exponents are accepted.
pub fn is_valid_number(text: &str) -> bool {
    let trimmed = text.trim();
    !trimmed.is_empty()
        && trimmed
            .parse::<f64>()
            .map(|n| n.is_finite())
            .unwrap_or(false)
}

/// Render a numeric parameter, substituting `default` when it is missing or invalid.
pub fn number_or_default(value: Option<&NumericParam>, default: i64) -> String {
    value
        .and_then(NumericParam::valid_value)
        .unwrap_or_else(|| default.to_string())
}

macro_rules! numeric_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for NumericParam {
                fn from(value: $t) -> Self {
                    NumericParam::Integer(i64::from(value))
                }
            }
        )*
    };
}

numeric_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for NumericParam {
    fn from(value: u64) -> Self {
        i64::try_from(value)
            .map(NumericParam::Integer)
            .unwrap_or_else(|_| NumericParam::Text(value.to_string()))
    }
}

impl From<usize> for NumericParam {
    fn from(value: usize) -> Self {
        i64::try_from(value)
            .map(NumericParam::Integer)
            .unwrap_or_else(|_| NumericParam::Text(value.to_string()))
    }
}

impl From<f64> for NumericParam {
    fn from(value: f64) -> Self {
        NumericParam::Float(value)
    }
}

impl From<&str> for NumericParam {
    fn from(value: &str) -> Self {
        NumericParam::Text(value.to_string())
    }
}

impl From<String> for NumericParam {
    fn from(value: String) -> Self {
        NumericParam::Text(value)
    }
}
