//! Endpoint trait describing a single API request.

use crate::query::Query;

/// A request against one API resource.
///
/// Implement this trait for request types. The client joins the
/// percent-encoded [`segments`](Endpoint::segments) onto its base URL and
/// appends the rendered [`query`](Endpoint::query).
///
/// # Example
///
/// ```
/// use scripture_api::{BibleBookChapters, Endpoint};
///
/// let request = BibleBookChapters {
///     bible_id: "de4e12af7f28f599-02",
///     book_id: "GEN",
/// };
/// assert_eq!(request.path(), "bibles/de4e12af7f28f599-02/books/GEN/chapters");
/// assert!(request.query().is_empty());
/// ```
pub trait Endpoint {
    /// Unencoded path segments below the base URL.
    fn segments(&self) -> Vec<&str>;

    /// Query parameters. Endpoints without parameters use the default.
    fn query(&self) -> Query {
        Query::new()
    }

    /// Relative path with each segment percent-encoded.
    fn path(&self) -> String {
        self.segments()
            .into_iter()
            .map(|s| urlencoding::encode(s).into_owned())
            .collect::<Vec<_>>()
            .join("/")
    }
}
