//! In-memory store implementations.
//!
//! Each store is built once from its row set and is immutable afterwards;
//! every index a query needs (id order, verse membership, page grouping,
//! range containment) is prebuilt at construction so lookups are a single
//! bounded map access rather than a per-id round trip.

use std::collections::{BTreeMap, HashMap};

use crate::corpus::{LayoutInfo, LineDescriptor, LineKind, Surah, VerseKey, Word};
use crate::error::{Error, Result};
use crate::locate::Location;
use crate::store::{LayoutIndex, SurahCatalog, WordStore};

/// Word table indexed by id and by verse key.
#[derive(Debug)]
pub struct MemoryWordStore {
    by_id: BTreeMap<u32, Word>,
    /// Verse key -> word ids, ascending by position within the verse.
    by_verse: HashMap<VerseKey, Vec<u32>>,
}

impl MemoryWordStore {
    pub fn new(words: Vec<Word>) -> Result<Self> {
        let mut by_id = BTreeMap::new();
        let mut verse_members: HashMap<VerseKey, Vec<(u16, u32)>> = HashMap::new();

        for word in words {
            verse_members
                .entry(word.key)
                .or_default()
                .push((word.position, word.id));
            if let Some(dup) = by_id.insert(word.id, word) {
                return Err(Error::InvalidCorpus(format!(
                    "duplicate word id {}",
                    dup.id
                )));
            }
        }

        let by_verse = verse_members
            .into_iter()
            .map(|(key, mut members)| {
                members.sort_unstable();
                (key, members.into_iter().map(|(_, id)| id).collect())
            })
            .collect();

        Ok(Self { by_id, by_verse })
    }

    /// Number of words in the corpus.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    pub(crate) fn range_refs(&self, first: u32, last: u32) -> impl Iterator<Item = &Word> {
        self.by_id.range(first..=last).map(|(_, word)| word)
    }
}

impl WordStore for MemoryWordStore {
    fn words_in_range(&self, first: u32, last: u32) -> Result<Vec<Word>> {
        if first > last {
            return Err(Error::InvalidRange { first, last });
        }
        Ok(self.range_refs(first, last).cloned().collect())
    }

    fn words_for_verse(&self, key: VerseKey) -> Result<Vec<Word>> {
        let ids = self
            .by_verse
            .get(&key)
            .ok_or(Error::VerseNotFound(key))?;
        Ok(ids.iter().map(|id| self.by_id[id].clone()).collect())
    }

    fn word(&self, id: u32) -> Result<Word> {
        self.by_id.get(&id).cloned().ok_or(Error::WordNotFound(id))
    }
}

/// Surah catalog indexed by number.
#[derive(Debug)]
pub struct MemorySurahCatalog {
    by_number: BTreeMap<u16, Surah>,
}

impl MemorySurahCatalog {
    pub fn new(surahs: Vec<Surah>) -> Result<Self> {
        let mut by_number = BTreeMap::new();
        for surah in surahs {
            if let Some(dup) = by_number.insert(surah.number, surah) {
                return Err(Error::InvalidCorpus(format!(
                    "duplicate surah number {}",
                    dup.number
                )));
            }
        }
        Ok(Self { by_number })
    }
}

impl SurahCatalog for MemorySurahCatalog {
    fn surah(&self, number: u16) -> Result<Surah> {
        self.by_number
            .get(&number)
            .cloned()
            .ok_or(Error::SurahNotFound(number))
    }

    fn surahs(&self) -> Vec<Surah> {
        self.by_number.values().cloned().collect()
    }
}

/// Page layout plus the inverse mappings back from verses and words.
///
/// Built once by joining every verse-text line's word range against the word
/// table, in the same spirit as link resolution: a forward table (page ->
/// lines) plus reverse tables (verse -> locations, word range -> page) so
/// both directions are cheap.
#[derive(Debug)]
pub struct MemoryLayoutIndex {
    info: LayoutInfo,
    /// Page -> descriptors, ascending by line number.
    pages: BTreeMap<u16, Vec<LineDescriptor>>,
    /// Verse key -> every containing line, ascending by (page, line).
    verse_lines: HashMap<VerseKey, Vec<Location>>,
    /// (first, last, page) ascending by first id; ranges never overlap.
    ranges: Vec<(u32, u32, u16)>,
}

impl MemoryLayoutIndex {
    /// Index the layout rows against the word table.
    ///
    /// Fails with [`Error::InvalidCorpus`] on duplicate (page, line) pairs
    /// or overlapping word ranges: a word belongs to exactly one line of a
    /// physical layout.
    pub fn build(
        info: LayoutInfo,
        lines: Vec<LineDescriptor>,
        words: &MemoryWordStore,
    ) -> Result<Self> {
        let mut pages: BTreeMap<u16, Vec<LineDescriptor>> = BTreeMap::new();
        let mut verse_lines: HashMap<VerseKey, Vec<Location>> = HashMap::new();
        let mut ranges = Vec::new();

        for descriptor in lines {
            let page_lines = pages.entry(descriptor.page).or_default();
            if page_lines.iter().any(|d| d.line == descriptor.line) {
                return Err(Error::InvalidCorpus(format!(
                    "duplicate line {} on page {}",
                    descriptor.line, descriptor.page
                )));
            }
            page_lines.push(descriptor);

            if let LineKind::Ayah { range } = descriptor.kind {
                ranges.push((range.first, range.last, descriptor.page));
                let location = Location::new(descriptor.page, descriptor.line);
                let mut previous = None;
                for word in words.range_refs(range.first, range.last) {
                    // a line's range typically covers several verses; record
                    // each verse once per line
                    if previous != Some(word.key) {
                        verse_lines.entry(word.key).or_default().push(location);
                        previous = Some(word.key);
                    }
                }
            }
        }

        for page_lines in pages.values_mut() {
            page_lines.sort_unstable_by_key(|d| d.line);
        }
        for locations in verse_lines.values_mut() {
            locations.sort_unstable_by_key(|l| (l.page, l.line));
            locations.dedup();
        }

        ranges.sort_unstable_by_key(|&(first, _, _)| first);
        for pair in ranges.windows(2) {
            let (_, prev_last, _) = pair[0];
            let (next_first, _, _) = pair[1];
            if next_first <= prev_last {
                return Err(Error::InvalidCorpus(format!(
                    "overlapping word ranges at id {next_first}"
                )));
            }
        }

        Ok(Self {
            info,
            pages,
            verse_lines,
            ranges,
        })
    }

    /// Page numbers present in the layout, ascending.
    pub fn page_numbers(&self) -> impl Iterator<Item = u16> {
        self.pages.keys().copied()
    }
}

impl LayoutIndex for MemoryLayoutIndex {
    fn lines_for_page(&self, page: u16) -> Result<Vec<LineDescriptor>> {
        self.pages
            .get(&page)
            .cloned()
            .ok_or(Error::PageNotFound(page))
    }

    fn locate_verse(&self, key: VerseKey) -> Result<Location> {
        let locations = self.verse_lines.get(&key).ok_or(Error::VerseNotFound(key))?;
        // non-empty by construction; first entry is minimal (page, line)
        Ok(locations[0])
    }

    fn locate_verse_all(&self, key: VerseKey) -> Result<Vec<Location>> {
        self.verse_lines
            .get(&key)
            .cloned()
            .ok_or(Error::VerseNotFound(key))
    }

    fn locate_word(&self, id: u32) -> Result<u16> {
        let idx = self.ranges.partition_point(|&(first, _, _)| first <= id);
        if idx > 0 {
            let (_, last, page) = self.ranges[idx - 1];
            if id <= last {
                return Ok(page);
            }
        }
        Err(Error::WordNotFound(id))
    }

    fn info(&self) -> &LayoutInfo {
        &self.info
    }
}
