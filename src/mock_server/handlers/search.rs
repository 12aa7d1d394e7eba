//! Search handler.

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, Uri},
    response::Response,
};
use serde_json::json;

use super::{admit, data, not_found, param, Params, SharedState};

/// GET /bibles/{bibleId}/search
///
/// Pages through verses containing every keyword. Unparseable `limit` and
/// `offset` values fall back to 10 and 0.
pub async fn search(
    State(state): State<SharedState>,
    headers: HeaderMap,
    uri: Uri,
    Path(bible_id): Path<String>,
    Query(params): Query<Params>,
) -> Response {
    if let Err(rejection) = admit(&state, &headers, &uri).await {
        return rejection;
    }

    let state = state.read().await;
    if state.get_bible(&bible_id).is_none() {
        return not_found(format!("No bible found with id: {bible_id}"));
    }

    let query = param(&params, "query").unwrap_or_default();
    let limit: usize = param(&params, "limit")
        .and_then(|v| v.parse().ok())
        .unwrap_or(10);
    let offset: usize = param(&params, "offset")
        .and_then(|v| v.parse::<i64>().ok())
        .map_or(0, |v| usize::try_from(v).unwrap_or(0));

    let matches = state.search(&bible_id, query);
    let total = matches.len();
    let verses: Vec<_> = matches.into_iter().skip(offset).take(limit).collect();

    data(json!({
        "query": query,
        "limit": limit,
        "offset": offset,
        "total": total,
        "verseCount": verses.len(),
        "verses": verses,
    }))
}
