//! Cross-reference resolution between verses, words, and page positions.

use serde::Serialize;

use crate::corpus::VerseKey;
use crate::error::Result;
use crate::store::{LayoutIndex, WordStore};

/// A position in the paginated layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Location {
    pub page: u16,
    pub line: u16,
}

impl Location {
    pub fn new(page: u16, line: u16) -> Self {
        Self { page, line }
    }
}

/// Answers "where is verse X" and "what verse is word Y".
///
/// A thin composition over the layout index and the word store; performs no
/// rendering and holds no state of its own.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a, W, L> {
    words: &'a W,
    layout: &'a L,
}

impl<'a, W: WordStore, L: LayoutIndex> Resolver<'a, W, L> {
    pub fn new(words: &'a W, layout: &'a L) -> Self {
        Self { words, layout }
    }

    /// First line containing the verse (minimal page, then minimal line).
    pub fn locate_verse(&self, key: VerseKey) -> Result<Location> {
        self.layout.locate_verse(key)
    }

    /// Every line the verse spans, in page/line order. Long verses wrap
    /// across lines and page boundaries, so this can exceed one entry.
    pub fn locate_verse_all(&self, key: VerseKey) -> Result<Vec<Location>> {
        self.layout.locate_verse_all(key)
    }

    /// The page containing the word.
    pub fn locate_word(&self, id: u32) -> Result<u16> {
        self.layout.locate_word(id)
    }

    /// The verse a word belongs to.
    pub fn verse_for_word(&self, id: u32) -> Result<VerseKey> {
        Ok(self.words.word(id)?.key)
    }

    /// The verse's full text, words joined in position order.
    pub fn verse_text(&self, key: VerseKey) -> Result<String> {
        let words = self.words.words_for_verse(key)?;
        Ok(words
            .iter()
            .map(|word| word.text.as_str())
            .collect::<Vec<_>>()
            .join(" "))
    }
}
