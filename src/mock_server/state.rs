//! Mock server state management.
//!
//! Provides the in-memory scripture store for the mock API server.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;

/// Language of a bible.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MockLanguage {
    /// ISO 639-3 code.
    pub id: String,
    pub name: String,
}

/// A bible translation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MockBible {
    pub id: String,
    pub abbreviation: String,
    pub name: String,
    pub language: MockLanguage,
}

/// A book of a bible.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MockBook {
    pub id: String,
    pub bible_id: String,
    pub abbreviation: String,
    pub name: String,
}

/// A chapter of a book.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MockChapter {
    pub id: String,
    pub bible_id: String,
    pub book_id: String,
    pub number: String,
    pub reference: String,
}

/// A verse. Verses are kept in canonical order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MockVerse {
    pub id: String,
    pub bible_id: String,
    pub book_id: String,
    pub chapter_id: String,
    pub number: String,
    pub reference: String,
    pub text: String,
}

/// A titled run of verses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MockSection {
    pub id: String,
    pub bible_id: String,
    pub book_id: String,
    pub chapter_id: String,
    pub title: String,
    pub first_verse_id: String,
    pub last_verse_id: String,
}

/// A request as seen by the mock server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub path: String,
    /// Raw query string, without the leading `?`.
    pub query: Option<String>,
    /// Value of the `api-key` header.
    pub api_key: Option<String>,
}

/// Shared state for the mock server.
///
/// This struct holds all the mock data that the server will serve.
/// It's wrapped in `Arc<RwLock<_>>` for concurrent access.
#[derive(Debug, Default)]
pub struct MockState {
    /// Bibles indexed by id.
    pub bibles: BTreeMap<String, MockBible>,

    /// Books of all bibles, in canonical order.
    pub books: Vec<MockBook>,

    /// Chapters of all bibles, in canonical order.
    pub chapters: Vec<MockChapter>,

    /// Verses of all bibles, in canonical order.
    pub verses: Vec<MockVerse>,

    /// Sections of all bibles.
    pub sections: Vec<MockSection>,

    /// If set, requests must carry this value in the `api-key` header.
    pub required_api_key: Option<String>,

    /// Every request received, in arrival order.
    pub requests: Vec<RecordedRequest>,
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Add a bible to the state.
    pub fn with_bible(mut self, bible: MockBible) -> Self {
        self.bibles.insert(bible.id.clone(), bible);
        self
    }

    /// Add a book to the state.
    pub fn with_book(mut self, book: MockBook) -> Self {
        self.books.push(book);
        self
    }

    /// Add a chapter to the state.
    pub fn with_chapter(mut self, chapter: MockChapter) -> Self {
        self.chapters.push(chapter);
        self
    }

    /// Add a verse to the state.
    pub fn with_verse(mut self, verse: MockVerse) -> Self {
        self.verses.push(verse);
        self
    }

    /// Add a section to the state.
    pub fn with_section(mut self, section: MockSection) -> Self {
        self.sections.push(section);
        self
    }

    /// Require an API key on every request.
    pub fn with_required_api_key(mut self, api_key: &str) -> Self {
        self.required_api_key = Some(api_key.to_string());
        self
    }

    /// Get a bible by id.
    pub fn get_bible(&self, bible_id: &str) -> Option<&MockBible> {
        self.bibles.get(bible_id)
    }

    /// List bibles matching the given filters.
    ///
    /// `name` matches case-insensitively as a substring; `ids` is a comma
    /// separated list.
    pub fn list_bibles(
        &self,
        language: Option<&str>,
        abbreviation: Option<&str>,
        name: Option<&str>,
        ids: Option<&str>,
    ) -> Vec<&MockBible> {
        let ids: Option<Vec<&str>> = ids.map(|list| list.split(',').map(str::trim).collect());

        self.bibles
            .values()
            .filter(|b| language.map_or(true, |l| b.language.id.eq_ignore_ascii_case(l)))
            .filter(|b| abbreviation.map_or(true, |a| b.abbreviation.eq_ignore_ascii_case(a)))
            .filter(|b| {
                name.map_or(true, |n| b.name.to_lowercase().contains(&n.to_lowercase()))
            })
            .filter(|b| ids.as_ref().map_or(true, |ids| ids.contains(&b.id.as_str())))
            .collect()
    }

    /// Books of a bible.
    pub fn books_of(&self, bible_id: &str) -> Vec<&MockBook> {
        self.books.iter().filter(|b| b.bible_id == bible_id).collect()
    }

    /// Get a book by id.
    pub fn get_book(&self, bible_id: &str, book_id: &str) -> Option<&MockBook> {
        self.books
            .iter()
            .find(|b| b.bible_id == bible_id && b.id == book_id)
    }

    /// Chapters of a book.
    pub fn chapters_of(&self, bible_id: &str, book_id: &str) -> Vec<&MockChapter> {
        self.chapters
            .iter()
            .filter(|c| c.bible_id == bible_id && c.book_id == book_id)
            .collect()
    }

    /// Get a chapter by id.
    pub fn get_chapter(&self, bible_id: &str, chapter_id: &str) -> Option<&MockChapter> {
        self.chapters
            .iter()
            .find(|c| c.bible_id == bible_id && c.id == chapter_id)
    }

    /// Verses of a chapter.
    pub fn verses_of(&self, bible_id: &str, chapter_id: &str) -> Vec<&MockVerse> {
        self.verses
            .iter()
            .filter(|v| v.bible_id == bible_id && v.chapter_id == chapter_id)
            .collect()
    }

    /// Get a verse by id.
    pub fn get_verse(&self, bible_id: &str, verse_id: &str) -> Option<&MockVerse> {
        self.verses
            .iter()
            .find(|v| v.bible_id == bible_id && v.id == verse_id)
    }

    /// Resolve a passage id to its verses.
    ///
    /// Accepts a chapter id, a verse id, or a `start-end` range of either.
    /// Returns `None` if an endpoint is unknown or the range is reversed.
    pub fn passage(&self, bible_id: &str, passage_id: &str) -> Option<Vec<&MockVerse>> {
        let verses: Vec<&MockVerse> = self
            .verses
            .iter()
            .filter(|v| v.bible_id == bible_id)
            .collect();

        // Index range covered by a chapter or verse id.
        let span = |id: &str| -> Option<(usize, usize)> {
            let positions: Vec<usize> = verses
                .iter()
                .enumerate()
                .filter(|(_, v)| v.id == id || v.chapter_id == id)
                .map(|(i, _)| i)
                .collect();
            Some((*positions.first()?, *positions.last()?))
        };

        let (start, end) = match passage_id.split_once('-') {
            Some((from, to)) => (span(from)?.0, span(to)?.1),
            None => span(passage_id)?,
        };

        if start > end {
            return None;
        }
        Some(verses[start..=end].to_vec())
    }

    /// Sections of a book.
    pub fn sections_of_book(&self, bible_id: &str, book_id: &str) -> Vec<&MockSection> {
        self.sections
            .iter()
            .filter(|s| s.bible_id == bible_id && s.book_id == book_id)
            .collect()
    }

    /// Sections of a chapter.
    pub fn sections_of_chapter(&self, bible_id: &str, chapter_id: &str) -> Vec<&MockSection> {
        self.sections
            .iter()
            .filter(|s| s.bible_id == bible_id && s.chapter_id == chapter_id)
            .collect()
    }

    /// Get a section by id.
    pub fn get_section(&self, bible_id: &str, section_id: &str) -> Option<&MockSection> {
        self.sections
            .iter()
            .find(|s| s.bible_id == bible_id && s.id == section_id)
    }

    /// Verses of a section.
    pub fn section_verses(&self, section: &MockSection) -> Vec<&MockVerse> {
        let range = format!("{}-{}", section.first_verse_id, section.last_verse_id);
        self.passage(&section.bible_id, &range).unwrap_or_default()
    }

    /// Verses containing every keyword of `query`, case-insensitively.
    pub fn search(&self, bible_id: &str, query: &str) -> Vec<&MockVerse> {
        let keywords: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();
        if keywords.is_empty() {
            return vec![];
        }

        self.verses
            .iter()
            .filter(|v| v.bible_id == bible_id)
            .filter(|v| {
                let text = v.text.to_lowercase();
                keywords.iter().all(|k| text.contains(k.as_str()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_server::Fixtures;

    fn state() -> MockState {
        Fixtures::default_state()
    }

    #[test]
    fn test_list_bibles_with_filters() {
        let state = state();

        assert_eq!(state.list_bibles(None, None, None, None).len(), 3);
        assert_eq!(state.list_bibles(Some("eng"), None, None, None).len(), 2);
        assert_eq!(state.list_bibles(None, None, Some("king james"), None).len(), 1);

        let ids = state.list_bibles(
            Some("eng"),
            None,
            None,
            Some(&format!("{},{}", Fixtures::KJV_ID, Fixtures::RVR_ID)),
        );
        assert_eq!(ids.len(), 1);
        assert_eq!(ids[0].id, Fixtures::KJV_ID);
    }

    #[test]
    fn test_passage_resolution() {
        let state = state();

        let verse = state.passage(Fixtures::KJV_ID, "JHN.3.16").unwrap();
        assert_eq!(verse.len(), 1);

        let range = state.passage(Fixtures::KJV_ID, "JHN.3.16-JHN.3.17").unwrap();
        assert_eq!(range.len(), 2);

        let chapter = state.passage(Fixtures::KJV_ID, "GEN.1").unwrap();
        assert_eq!(chapter.len(), 3);

        assert!(state.passage(Fixtures::KJV_ID, "JHN.3.17-JHN.3.16").is_none());
        assert!(state.passage(Fixtures::KJV_ID, "REV.1.1").is_none());
    }

    #[test]
    fn test_search_requires_all_keywords() {
        let state = state();

        assert_eq!(state.search(Fixtures::KJV_ID, "light").len(), 1);
        assert_eq!(state.search(Fixtures::KJV_ID, "World God").len(), 2);
        assert!(state.search(Fixtures::KJV_ID, "").is_empty());
    }

    #[test]
    fn test_section_verses() {
        let state = state();
        let section = state.get_section(Fixtures::KJV_ID, "JHN.S1").unwrap();
        assert_eq!(state.section_verses(section).len(), 3);
    }
}
