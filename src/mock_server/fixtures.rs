//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic test data.

use super::state::{
    MockBible, MockBook, MockChapter, MockLanguage, MockSection, MockState, MockVerse,
};

/// Collection of fixture factories for test data.
pub struct Fixtures;

/// Complete test scenario with related bibles, books and verses.
pub struct DefaultScenario {
    pub bibles: Vec<MockBible>,
    pub books: Vec<MockBook>,
    pub chapters: Vec<MockChapter>,
    pub verses: Vec<MockVerse>,
    pub sections: Vec<MockSection>,
}

impl Fixtures {
    /// King James Version, English.
    pub const KJV_ID: &'static str = "de4e12af7f28f599-02";
    /// World English Bible, English.
    pub const WEB_ID: &'static str = "9879dbb7cfe39e4d-04";
    /// Reina Valera 1909, Spanish.
    pub const RVR_ID: &'static str = "592420522e16049f-01";

    // =========================================================================
    // Bible Fixtures
    // =========================================================================

    /// Create a bible.
    pub fn bible(id: &str, abbreviation: &str, name: &str, language: (&str, &str)) -> MockBible {
        MockBible {
            id: id.to_string(),
            abbreviation: abbreviation.to_string(),
            name: name.to_string(),
            language: MockLanguage {
                id: language.0.to_string(),
                name: language.1.to_string(),
            },
        }
    }

    // =========================================================================
    // Book / Chapter / Verse Fixtures
    // =========================================================================

    /// Create a book.
    pub fn book(bible_id: &str, id: &str, name: &str) -> MockBook {
        MockBook {
            id: id.to_string(),
            bible_id: bible_id.to_string(),
            abbreviation: name.chars().take(3).collect(),
            name: name.to_string(),
        }
    }

    /// Create a chapter; `id` has the form `BOOK.N`.
    pub fn chapter(bible_id: &str, id: &str, book_name: &str) -> MockChapter {
        let (book_id, number) = id.split_once('.').unwrap_or((id, ""));
        MockChapter {
            id: id.to_string(),
            bible_id: bible_id.to_string(),
            book_id: book_id.to_string(),
            number: number.to_string(),
            reference: format!("{book_name} {number}"),
        }
    }

    /// Create a verse; `id` has the form `BOOK.CHAPTER.N`.
    pub fn verse(bible_id: &str, id: &str, book_name: &str, text: &str) -> MockVerse {
        let mut parts = id.splitn(3, '.');
        let book_id = parts.next().unwrap_or_default();
        let chapter = parts.next().unwrap_or_default();
        let number = parts.next().unwrap_or_default();

        MockVerse {
            id: id.to_string(),
            bible_id: bible_id.to_string(),
            book_id: book_id.to_string(),
            chapter_id: format!("{book_id}.{chapter}"),
            number: number.to_string(),
            reference: format!("{book_name} {chapter}:{number}"),
            text: text.to_string(),
        }
    }

    /// Create a section spanning `first..=last` verse ids.
    pub fn section(bible_id: &str, id: &str, title: &str, first: &str, last: &str) -> MockSection {
        let chapter_id = first.rsplit_once('.').map_or(first, |(c, _)| c);
        let book_id = first.split('.').next().unwrap_or(first);

        MockSection {
            id: id.to_string(),
            bible_id: bible_id.to_string(),
            book_id: book_id.to_string(),
            chapter_id: chapter_id.to_string(),
            title: title.to_string(),
            first_verse_id: first.to_string(),
            last_verse_id: last.to_string(),
        }
    }

    // =========================================================================
    // Scenarios
    // =========================================================================

    /// Three bibles; the KJV carries Genesis 1:1-3 and John 3:16-18.
    pub fn default_scenario() -> DefaultScenario {
        let kjv = Self::KJV_ID;

        DefaultScenario {
            bibles: vec![
                Self::bible(kjv, "engKJV", "King James (Authorised) Version", ("eng", "English")),
                Self::bible(Self::WEB_ID, "WEB", "World English Bible", ("eng", "English")),
                Self::bible(Self::RVR_ID, "RVR09", "Reina Valera 1909", ("spa", "Spanish")),
            ],
            books: vec![
                Self::book(kjv, "GEN", "Genesis"),
                Self::book(kjv, "JHN", "John"),
            ],
            chapters: vec![
                Self::chapter(kjv, "GEN.1", "Genesis"),
                Self::chapter(kjv, "JHN.3", "John"),
            ],
            verses: vec![
                Self::verse(
                    kjv,
                    "GEN.1.1",
                    "Genesis",
                    "In the beginning God created the heaven and the earth.",
                ),
                Self::verse(
                    kjv,
                    "GEN.1.2",
                    "Genesis",
                    "And the earth was without form, and void; and darkness was upon the face \
                     of the deep. And the Spirit of God moved upon the face of the waters.",
                ),
                Self::verse(
                    kjv,
                    "GEN.1.3",
                    "Genesis",
                    "And God said, Let there be light: and there was light.",
                ),
                Self::verse(
                    kjv,
                    "JHN.3.16",
                    "John",
                    "For God so loved the world, that he gave his only begotten Son, that \
                     whosoever believeth in him should not perish, but have everlasting life.",
                ),
                Self::verse(
                    kjv,
                    "JHN.3.17",
                    "John",
                    "For God sent not his Son into the world to condemn the world; but that \
                     the world through him might be saved.",
                ),
                Self::verse(
                    kjv,
                    "JHN.3.18",
                    "John",
                    "He that believeth on him is not condemned: but he that believeth not is \
                     condemned already, because he hath not believed in the name of the only \
                     begotten Son of God.",
                ),
            ],
            sections: vec![
                Self::section(kjv, "GEN.S1", "The Creation", "GEN.1.1", "GEN.1.3"),
                Self::section(kjv, "JHN.S1", "God so loved the world", "JHN.3.16", "JHN.3.18"),
            ],
        }
    }

    /// State built from [`default_scenario`](Self::default_scenario).
    pub fn default_state() -> MockState {
        let scenario = Self::default_scenario();
        let mut state = MockState::new();

        for bible in scenario.bibles {
            state.bibles.insert(bible.id.clone(), bible);
        }
        state.books = scenario.books;
        state.chapters = scenario.chapters;
        state.verses = scenario.verses;
        state.sections = scenario.sections;

        state
    }
}
