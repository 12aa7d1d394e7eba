//! Book and chapter listing handlers.

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, Uri},
    response::Response,
};
use serde_json::Value;

use super::{admit, data, flag, not_found, Params, SharedState};
use crate::mock_server::state::{MockBook, MockState};

/// Book JSON, with its chapters (and their sections) when requested.
fn book_json(state: &MockState, book: &MockBook, chapters: bool, sections: bool) -> Value {
    let mut value = serde_json::to_value(book).unwrap_or_default();

    if chapters || sections {
        let chapter_list: Vec<Value> = state
            .chapters_of(&book.bible_id, &book.id)
            .into_iter()
            .map(|chapter| {
                let mut chapter_value = serde_json::to_value(chapter).unwrap_or_default();
                if sections {
                    chapter_value["sections"] = serde_json::json!(
                        state.sections_of_chapter(&chapter.bible_id, &chapter.id)
                    );
                }
                chapter_value
            })
            .collect();
        value["chapters"] = Value::Array(chapter_list);
    }

    value
}

/// GET /bibles/{bibleId}/books
pub async fn list_books(
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

    let chapters = flag(&params, "include-chapters");
    let sections = flag(&params, "include-chapters-and-sections");
    let books: Vec<Value> = state
        .books_of(&bible_id)
        .into_iter()
        .map(|book| book_json(&state, book, chapters, sections))
        .collect();

    data(books)
}

/// GET /bibles/{bibleId}/books/{bookId}
pub async fn get_book(
    State(state): State<SharedState>,
    headers: HeaderMap,
    uri: Uri,
    Path((bible_id, book_id)): Path<(String, String)>,
    Query(params): Query<Params>,
) -> Response {
    if let Err(rejection) = admit(&state, &headers, &uri).await {
        return rejection;
    }

    let state = state.read().await;
    match state.get_book(&bible_id, &book_id) {
        Some(book) => data(book_json(
            &state,
            book,
            flag(&params, "include-chapters"),
            false,
        )),
        None => not_found(format!("No book found with id: {book_id}")),
    }
}

/// GET /bibles/{bibleId}/books/{bookId}/chapters
pub async fn list_chapters(
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

    data(state.chapters_of(&bible_id, &book_id))
}
