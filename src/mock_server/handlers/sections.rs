//! Section endpoint handlers.

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, Uri},
    response::Response,
};

use super::content::render_content;
use super::{admit, data, not_found, Params, SharedState};

/// GET /bibles/{bibleId}/books/{bookId}/sections
pub async fn list_book_sections(
    State(state): State<SharedState>,
    headers: HeaderMap,
    uri: Uri,
    Path((bible_id, book_id)): Path<(String, String)>,
) -> Response {
    if let Err(rejection) = admit(&state, &headers, &uri).await {
        return rejection;
    }

    let state = state.read().await;
    if state.get_book(&bible_id, &book_id).is_none() {
        return not_found(format!("No book found with id: {book_id}"));
    }

    data(state.sections_of_book(&bible_id, &book_id))
}

/// GET /bibles/{bibleId}/chapters/{chapterId}/sections
pub async fn list_chapter_sections(
    State(state): State<SharedState>,
    headers: HeaderMap,
    uri: Uri,
    Path((bible_id, chapter_id)): Path<(String, String)>,
) -> Response {
    if let Err(rejection) = admit(&state, &headers, &uri).await {
        return rejection;
    }

    let state = state.read().await;
    if state.get_chapter(&bible_id, &chapter_id).is_none() {
        return not_found(format!("No chapter found with id: {chapter_id}"));
    }

    data(state.sections_of_chapter(&bible_id, &chapter_id))
}

/// GET /bibles/{bibleId}/sections/{sectionId}
pub async fn get_section(
    State(state): State<SharedState>,
    headers: HeaderMap,
    uri: Uri,
    Path((bible_id, section_id)): Path<(String, String)>,
    Query(params): Query<Params>,
) -> Response {
    if let Err(rejection) = admit(&state, &headers, &uri).await {
        return rejection;
    }

    let state = state.read().await;
    match state.get_section(&bible_id, &section_id) {
        Some(section) => {
            let verses = state.section_verses(section);
            let mut value = serde_json::to_value(section).unwrap_or_default();
            value["content"] = render_content(&verses, &params);
            data(value)
        }
        None => not_found(format!("No section found with id: {section_id}")),
    }
}
