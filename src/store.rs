//! Read-only store traits.
//!
//! The renderer and resolver are written against these three accessor
//! traits rather than a concrete backing store, so reference data can live
//! in memory, in a relational store, or in a flat file, and tests can inject
//! small fakes. All implementations must honor the ordering and
//! range-containment semantics documented per method; the data behind them
//! is immutable for the lifetime of a serving process.

use crate::corpus::{LayoutInfo, LineDescriptor, Surah, VerseKey, Word};
use crate::error::Result;
use crate::locate::Location;

/// Resolves word ids (single or contiguous range) to word records.
pub trait WordStore {
    /// All words with `first <= id <= last`, ascending by id.
    ///
    /// Fails with [`Error::InvalidRange`](crate::Error::InvalidRange) when
    /// `first > last`. Ids outside the corpus domain truncate the result
    /// (possibly to empty) rather than fail; classifying an unexpectedly
    /// empty result is the caller's concern.
    fn words_in_range(&self, first: u32, last: u32) -> Result<Vec<Word>>;

    /// All words of one verse, ascending by position.
    ///
    /// Fails with [`Error::VerseNotFound`](crate::Error::VerseNotFound)
    /// when no word carries the key.
    fn words_for_verse(&self, key: VerseKey) -> Result<Vec<Word>>;

    /// A single word by id.
    ///
    /// Fails with [`Error::WordNotFound`](crate::Error::WordNotFound).
    fn word(&self, id: u32) -> Result<Word>;
}

/// Resolves a surah number to its display metadata.
pub trait SurahCatalog {
    /// Fails with [`Error::SurahNotFound`](crate::Error::SurahNotFound) for
    /// numbers absent from the catalog.
    fn surah(&self, number: u16) -> Result<Surah>;

    /// Every surah, ascending by number.
    fn surahs(&self) -> Vec<Surah>;
}

/// Resolves pages to their line descriptors and the inverse: verse keys and
/// word ids back to the pages and lines that contain them.
pub trait LayoutIndex {
    /// The page's descriptors, ascending by line number.
    ///
    /// Fails with [`Error::PageNotFound`](crate::Error::PageNotFound) when
    /// the page has no descriptors.
    fn lines_for_page(&self, page: u16) -> Result<Vec<LineDescriptor>>;

    /// The page/line of the lowest-numbered word of the verse — the first
    /// occurrence only (minimal page, then minimal line). A verse wrapped
    /// across lines or pages has further occurrences; see
    /// [`locate_verse_all`](Self::locate_verse_all).
    ///
    /// Fails with [`Error::VerseNotFound`](crate::Error::VerseNotFound).
    fn locate_verse(&self, key: VerseKey) -> Result<Location>;

    /// Every line whose word range intersects the verse, in page/line order.
    ///
    /// Fails with [`Error::VerseNotFound`](crate::Error::VerseNotFound).
    fn locate_verse_all(&self, key: VerseKey) -> Result<Vec<Location>>;

    /// The page whose line ranges contain the word id.
    ///
    /// Fails with [`Error::WordNotFound`](crate::Error::WordNotFound) when
    /// no verse-text line's range contains it.
    fn locate_word(&self, id: u32) -> Result<u16>;

    /// Layout-level metadata.
    fn info(&self) -> &LayoutInfo;
}
