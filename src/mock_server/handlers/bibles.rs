//! Bible endpoint handlers.

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, Uri},
    response::Response,
};

use super::{admit, data, not_found, param, Params, SharedState};

/// GET /bibles
pub async fn list_bibles(
    State(state): State<SharedState>,
    headers: HeaderMap,
    uri: Uri,
    Query(params): Query<Params>,
) -> Response {
    if let Err(rejection) = admit(&state, &headers, &uri).await {
        return rejection;
    }

    let state = state.read().await;
    let bibles = state.list_bibles(
        param(&params, "language"),
        param(&params, "abbreviation"),
        param(&params, "name"),
        param(&params, "ids"),
    );

    data(bibles)
}

/// GET /bibles/{bibleId}
pub async fn get_bible(
    State(state): State<SharedState>,
    headers: HeaderMap,
    uri: Uri,
    Path(bible_id): Path<String>,
) -> Response {
    if let Err(rejection) = admit(&state, &headers, &uri).await {
        return rejection;
    }

    let state = state.read().await;
    match state.get_bible(&bible_id) {
        Some(bible) => data(bible),
        None => not_found(format!("No bible found with id: {bible_id}")),
    }
}
