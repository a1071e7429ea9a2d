//! Corpus document loading.
//!
//! A corpus ships as a single JSON document with four sections: `layout`
//! metadata, the `surahs` catalog, the `words` table, and the `lines`
//! layout table. Row and column names follow the upstream layout data
//! (`word_index`, `word_key`, `line_type`, `first_word_id`, ...). Rows are
//! validated here so every descriptor the stores hand out is well formed.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use super::{Corpus, LayoutInfo, LineDescriptor, LineKind, Surah, VerseKey, Word, WordRange};
use crate::error::{Error, Result};

#[derive(Debug, Deserialize)]
struct CorpusDocument {
    layout: Option<LayoutInfo>,
    surahs: Vec<SurahRow>,
    words: Vec<WordRow>,
    lines: Vec<LineRow>,
}

#[derive(Debug, Deserialize)]
struct SurahRow {
    surah_number: u16,
    name_arabic: String,
    name_english: String,
    total_ayahs: u16,
}

#[derive(Debug, Deserialize)]
struct WordRow {
    word_index: u32,
    /// `surah:ayah:position`, e.g. `"1:2:1"`.
    word_key: String,
    text: String,
    #[serde(default)]
    translation: Option<String>,
    #[serde(default)]
    transliteration: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LineRow {
    page_number: u16,
    line_number: u16,
    line_type: LineType,
    #[serde(default = "default_centered")]
    is_centered: bool,
    first_word_id: Option<u32>,
    last_word_id: Option<u32>,
    surah_number: Option<u16>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
enum LineType {
    Ayah,
    SurahName,
    Basmallah,
}

fn default_centered() -> bool {
    true
}

impl Corpus {
    /// Load a corpus document from disk.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use mushaf::Corpus;
    ///
    /// let corpus = Corpus::load("uthmani-hafs.json")?;
    /// # Ok::<(), mushaf::Error>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Load a corpus document from any [`Read`] source.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let document: CorpusDocument = serde_json::from_reader(reader)?;
        document.build()
    }

    /// Load a corpus document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let document: CorpusDocument = serde_json::from_str(json)?;
        document.build()
    }
}

impl CorpusDocument {
    fn build(self) -> Result<Corpus> {
        let surahs: Vec<Surah> = self
            .surahs
            .into_iter()
            .map(|row| Surah {
                number: row.surah_number,
                name_arabic: row.name_arabic,
                name_english: row.name_english,
                verse_count: row.total_ayahs,
            })
            .collect();

        let words = self
            .words
            .into_iter()
            .map(parse_word)
            .collect::<Result<Vec<_>>>()?;
        let max_word_id = words.iter().map(|w| w.id).max().unwrap_or(0);

        let lines = self
            .lines
            .iter()
            .map(|row| parse_line(row, max_word_id))
            .collect::<Result<Vec<_>>>()?;

        let info = match self.layout {
            Some(info) => info,
            None => infer_layout(&lines),
        };

        Corpus::new(words, surahs, info, lines)
    }
}

fn parse_word(row: WordRow) -> Result<Word> {
    let mut parts = row.word_key.splitn(3, ':');
    let mut next = |name: &str| {
        parts
            .next()
            .and_then(|part| part.parse::<u16>().ok())
            .ok_or_else(|| {
                Error::InvalidCorpus(format!(
                    "word {}: malformed {name} in key {:?}",
                    row.word_index, row.word_key
                ))
            })
    };
    let surah = next("surah")?;
    let ayah = next("ayah")?;
    let position = next("position")?;

    let mut word = Word::new(row.word_index, VerseKey::new(surah, ayah), position, row.text);
    word.translation = row.translation;
    word.transliteration = row.transliteration;
    Ok(word)
}

fn parse_line(row: &LineRow, max_word_id: u32) -> Result<LineDescriptor> {
    let context = |detail: String| {
        Error::InvalidCorpus(format!(
            "page {} line {}: {detail}",
            row.page_number, row.line_number
        ))
    };

    let kind = match row.line_type {
        LineType::Ayah => {
            let (first, last) = match (row.first_word_id, row.last_word_id) {
                (Some(first), Some(last)) => (first, last),
                _ => return Err(context("ayah line without a word range".into())),
            };
            let range = WordRange::new(first, last)
                .map_err(|_| context(format!("inverted word range {first}..={last}")))?;
            if first == 0 || last > max_word_id {
                return Err(context(format!(
                    "word range {first}..={last} outside corpus domain 1..={max_word_id}"
                )));
            }
            LineKind::Ayah { range }
        }
        LineType::SurahName => {
            let surah = row
                .surah_number
                .ok_or_else(|| context("surah title line without a surah number".into()))?;
            LineKind::SurahTitle { surah }
        }
        LineType::Basmallah => LineKind::Invocation,
    };

    Ok(LineDescriptor {
        page: row.page_number,
        line: row.line_number,
        kind,
        centered: row.is_centered,
    })
}

/// Fallback layout metadata for documents without a `layout` section.
fn infer_layout(lines: &[LineDescriptor]) -> LayoutInfo {
    let total_pages = lines.iter().map(|l| l.page).max().unwrap_or(0);
    let lines_per_page = lines
        .iter()
        .map(|l| l.line)
        .max()
        .unwrap_or(0);
    LayoutInfo {
        name: String::new(),
        total_pages,
        lines_per_page,
    }
}
