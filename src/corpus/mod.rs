//! Reference data model for a paginated Mushaf corpus.
//!
//! A corpus is three immutable tables: the word table (every word of the
//! text, globally numbered), the surah catalog (chapter metadata), and the
//! layout table (one row per rendered line of every page). [`Corpus`] bundles
//! the in-memory form of all three behind the store traits.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::locate::Resolver;
use crate::memory::{MemoryLayoutIndex, MemorySurahCatalog, MemoryWordStore};
use crate::render::Renderer;
use crate::store::{LayoutIndex, SurahCatalog, WordStore};

mod load;

/// Identifies a verse as a (surah, ayah) pair, e.g. `2:255`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VerseKey {
    pub surah: u16,
    pub ayah: u16,
}

impl VerseKey {
    pub fn new(surah: u16, ayah: u16) -> Self {
        Self { surah, ayah }
    }
}

impl fmt::Display for VerseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.surah, self.ayah)
    }
}

impl FromStr for VerseKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (surah, ayah) = s
            .split_once(':')
            .ok_or_else(|| Error::InvalidCorpus(format!("malformed verse key {s:?}")))?;
        let parse = |part: &str| {
            part.parse::<u16>()
                .map_err(|_| Error::InvalidCorpus(format!("malformed verse key {s:?}")))
        };
        Ok(Self::new(parse(surah)?, parse(ayah)?))
    }
}

/// A single word of the text.
///
/// Word ids are dense and globally unique across the corpus (not per-surah).
/// `position` is the word's 1-based position within its verse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Word {
    pub id: u32,
    pub key: VerseKey,
    pub position: u16,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transliteration: Option<String>,
}

impl Word {
    pub fn new(id: u32, key: VerseKey, position: u16, text: impl Into<String>) -> Self {
        Self {
            id,
            key,
            position,
            text: text.into(),
            translation: None,
            transliteration: None,
        }
    }

    pub fn with_translation(mut self, translation: impl Into<String>) -> Self {
        self.translation = Some(translation.into());
        self
    }

    pub fn with_transliteration(mut self, transliteration: impl Into<String>) -> Self {
        self.transliteration = Some(transliteration.into());
        self
    }
}

/// Chapter metadata; one entry per surah, numbered 1..=114.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Surah {
    pub number: u16,
    pub name_arabic: String,
    pub name_english: String,
    pub verse_count: u16,
}

/// A contiguous, inclusive span of word ids.
///
/// Construction enforces `first <= last`; a descriptor can therefore never
/// carry an inverted range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WordRange {
    pub first: u32,
    pub last: u32,
}

impl WordRange {
    pub fn new(first: u32, last: u32) -> Result<Self> {
        if first > last {
            return Err(Error::InvalidRange { first, last });
        }
        Ok(Self { first, last })
    }

    /// Number of word ids spanned (always at least 1).
    pub fn len(&self) -> u32 {
        self.last - self.first + 1
    }

    pub fn contains(&self, id: u32) -> bool {
        self.first <= id && id <= self.last
    }

    pub fn iter(self) -> impl Iterator<Item = u32> {
        self.first..=self.last
    }
}

/// The semantic role of a rendered line.
///
/// The three roles carry different payloads: verse-text lines span a word
/// range, title lines name a surah, and the basmallah line is a fixed
/// formula with no reference data behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LineKind {
    Ayah { range: WordRange },
    #[serde(rename = "surah_name")]
    SurahTitle { surah: u16 },
    #[serde(rename = "basmallah")]
    Invocation,
}

/// One row of the layout table: a single line of a single page.
///
/// Within a page, line numbers are unique and define render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineDescriptor {
    pub page: u16,
    pub line: u16,
    #[serde(flatten)]
    pub kind: LineKind,
    pub centered: bool,
}

/// Layout-level metadata (name, page geometry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutInfo {
    pub name: String,
    pub total_pages: u16,
    pub lines_per_page: u16,
}

/// An immutable, fully indexed corpus: word table, surah catalog, and page
/// layout, ready to serve concurrent queries.
///
/// `Corpus` implements all three store traits by delegation, so it can be
/// injected wherever a single backing object is more convenient than three.
///
/// # Example
///
/// ```no_run
/// use mushaf::Corpus;
///
/// let corpus = Corpus::load("uthmani-hafs.json")?;
/// let page = corpus.renderer().render_page(1)?;
/// println!("{} lines", page.lines.len());
/// # Ok::<(), mushaf::Error>(())
/// ```
#[derive(Debug)]
pub struct Corpus {
    words: MemoryWordStore,
    surahs: MemorySurahCatalog,
    layout: MemoryLayoutIndex,
}

impl Corpus {
    /// Build a corpus from typed rows.
    ///
    /// Fails with [`Error::InvalidCorpus`] on duplicate word ids, duplicate
    /// surah numbers, or duplicate (page, line) pairs.
    pub fn new(
        words: Vec<Word>,
        surahs: Vec<Surah>,
        info: LayoutInfo,
        lines: Vec<LineDescriptor>,
    ) -> Result<Self> {
        let words = MemoryWordStore::new(words)?;
        let surahs = MemorySurahCatalog::new(surahs)?;
        let layout = MemoryLayoutIndex::build(info, lines, &words)?;
        Ok(Self {
            words,
            surahs,
            layout,
        })
    }

    /// The word table.
    pub fn word_store(&self) -> &MemoryWordStore {
        &self.words
    }

    /// The surah catalog.
    pub fn surah_catalog(&self) -> &MemorySurahCatalog {
        &self.surahs
    }

    /// The page layout index.
    pub fn layout_index(&self) -> &MemoryLayoutIndex {
        &self.layout
    }

    /// A page renderer over this corpus.
    pub fn renderer(&self) -> Renderer<'_, MemoryWordStore, MemorySurahCatalog, MemoryLayoutIndex> {
        Renderer::new(&self.words, &self.surahs, &self.layout)
    }

    /// A location resolver over this corpus.
    pub fn resolver(&self) -> Resolver<'_, MemoryWordStore, MemoryLayoutIndex> {
        Resolver::new(&self.words, &self.layout)
    }
}

impl WordStore for Corpus {
    fn words_in_range(&self, first: u32, last: u32) -> Result<Vec<Word>> {
        self.words.words_in_range(first, last)
    }

    fn words_for_verse(&self, key: VerseKey) -> Result<Vec<Word>> {
        self.words.words_for_verse(key)
    }

    fn word(&self, id: u32) -> Result<Word> {
        self.words.word(id)
    }
}

impl SurahCatalog for Corpus {
    fn surah(&self, number: u16) -> Result<Surah> {
        self.surahs.surah(number)
    }

    fn surahs(&self) -> Vec<Surah> {
        self.surahs.surahs()
    }
}

impl LayoutIndex for Corpus {
    fn lines_for_page(&self, page: u16) -> Result<Vec<LineDescriptor>> {
        self.layout.lines_for_page(page)
    }

    fn locate_verse(&self, key: VerseKey) -> Result<crate::locate::Location> {
        self.layout.locate_verse(key)
    }

    fn locate_verse_all(&self, key: VerseKey) -> Result<Vec<crate::locate::Location>> {
        self.layout.locate_verse_all(key)
    }

    fn locate_word(&self, id: u32) -> Result<u16> {
        self.layout.locate_word(id)
    }

    fn info(&self) -> &LayoutInfo {
        self.layout.info()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verse_key_roundtrips_through_display() {
        let key = VerseKey::new(2, 255);
        assert_eq!(key.to_string(), "2:255");
        assert_eq!("2:255".parse::<VerseKey>().unwrap(), key);
    }

    #[test]
    fn verse_key_rejects_garbage() {
        assert!("2".parse::<VerseKey>().is_err());
        assert!("a:b".parse::<VerseKey>().is_err());
        assert!("1:2:3:4".parse::<VerseKey>().is_err());
    }

    #[test]
    fn word_range_rejects_inverted_bounds() {
        assert!(matches!(
            WordRange::new(500, 499),
            Err(Error::InvalidRange {
                first: 500,
                last: 499
            })
        ));
    }

    #[test]
    fn word_range_single_id() {
        let range = WordRange::new(7, 7).unwrap();
        assert_eq!(range.len(), 1);
        assert!(range.contains(7));
        assert!(!range.contains(8));
        assert_eq!(range.iter().collect::<Vec<_>>(), vec![7]);
    }
}
