//! Chapter, passage and verse handlers.
//!
//! Content endpoints honour `content-type` and `include-verse-numbers`;
//! the other content flags are accepted and ignored.

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, Uri},
    response::Response,
};
use serde_json::{json, Value};

use super::{admit, data, error_response, flag, not_found, param, Params, SharedState};
use crate::mock_server::state::MockVerse;

/// Render verses in the requested content type.
pub fn render_content(verses: &[&MockVerse], params: &Params) -> Value {
    let numbers = flag(params, "include-verse-numbers");

    match param(params, "content-type").unwrap_or("json") {
        "text" => {
            let text = verses
                .iter()
                .map(|v| {
                    if numbers {
                        format!("[{}] {}", v.number, v.text)
                    } else {
                        v.text.clone()
                    }
                })
                .collect::<Vec<_>>()
                .join(" ");
            Value::String(text)
        }
        "html" => {
            let body: String = verses
                .iter()
                .map(|v| {
                    if numbers {
                        format!(
                            r#"<span data-number="{0}" class="v">{0}</span>{1}"#,
                            v.number, v.text
                        )
                    } else {
                        v.text.clone()
                    }
                })
                .collect::<Vec<_>>()
                .join(" ");
            Value::String(format!(r#"<p class="p">{body}</p>"#))
        }
        _ => Value::Array(
            verses
                .iter()
                .map(|v| {
                    json!({
                        "type": "verse",
                        "verseId": v.id,
                        "number": v.number,
                        "text": v.text,
                    })
                })
                .collect(),
        ),
    }
}

/// A content document: the base object plus rendered `content`.
fn with_content(mut base: Value, verses: &[&MockVerse], params: &Params) -> Value {
    base["content"] = render_content(verses, params);
    base["verseCount"] = json!(verses.len());
    base
}

/// GET /bibles/{bibleId}/chapters/{chapterId}
pub async fn get_chapter(
    State(state): State<SharedState>,
    headers: HeaderMap,
    uri: Uri,
    Path((bible_id, chapter_id)): Path<(String, String)>,
    Query(params): Query<Params>,
) -> Response {
    if let Err(rejection) = admit(&state, &headers, &uri).await {
        return rejection;
    }

    let state = state.read().await;
    match state.get_chapter(&bible_id, &chapter_id) {
        Some(chapter) => {
            let verses = state.verses_of(&bible_id, &chapter_id);
            let base = serde_json::to_value(chapter).unwrap_or_default();
            data(with_content(base, &verses, &params))
        }
        None => not_found(format!("No chapter found with id: {chapter_id}")),
    }
}

/// GET /bibles/{bibleId}/chapters/{chapterId}/verses
pub async fn list_chapter_verses(
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

    let verses: Vec<Value> = state
        .verses_of(&bible_id, &chapter_id)
        .into_iter()
        .map(|v| {
            json!({
                "id": v.id,
                "bibleId": v.bible_id,
                "bookId": v.book_id,
                "chapterId": v.chapter_id,
                "reference": v.reference,
            })
        })
        .collect();

    data(verses)
}

/// GET /bibles/{bibleId}/passages/{passageId}
pub async fn get_passage(
    State(state): State<SharedState>,
    headers: HeaderMap,
    uri: Uri,
    Path((bible_id, passage_id)): Path<(String, String)>,
    Query(params): Query<Params>,
) -> Response {
    if let Err(rejection) = admit(&state, &headers, &uri).await {
        return rejection;
    }

    let state = state.read().await;
    if state.get_bible(&bible_id).is_none() {
        return not_found(format!("No bible found with id: {bible_id}"));
    }

    match state.passage(&bible_id, &passage_id) {
        Some(verses) => {
            let reference = match (verses.first(), verses.last()) {
                (Some(first), Some(last)) if first.id != last.id => {
                    format!("{}-{}", first.reference, last.number)
                }
                (Some(first), _) => first.reference.clone(),
                _ => String::new(),
            };
            let base = json!({
                "id": passage_id,
                "bibleId": bible_id,
                "reference": reference,
            });
            data(with_content(base, &verses, &params))
        }
        None => error_response(
            StatusCode::BAD_REQUEST,
            format!("Invalid passage id: {passage_id}"),
        ),
    }
}

/// GET /bibles/{bibleId}/verses/{verseId}
pub async fn get_verse(
    State(state): State<SharedState>,
    headers: HeaderMap,
    uri: Uri,
    Path((bible_id, verse_id)): Path<(String, String)>,
    Query(params): Query<Params>,
) -> Response {
    if let Err(rejection) = admit(&state, &headers, &uri).await {
        return rejection;
    }

    let state = state.read().await;
    match state.get_verse(&bible_id, &verse_id) {
        Some(verse) => {
            let base = json!({
                "id": verse.id,
                "bibleId": verse.bible_id,
                "bookId": verse.book_id,
                "chapterId": verse.chapter_id,
                "reference": verse.reference,
            });
            data(with_content(base, &[verse], &params))
        }
        None => not_found(format!("No verse found with id: {verse_id}")),
    }
}
