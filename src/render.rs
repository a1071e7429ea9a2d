//! Page assembly.
//!
//! [`Renderer`] turns a page's ordered line descriptors into a [`Page`]
//! document: each descriptor is dispatched on its kind and materialized
//! against the word store or surah catalog. Rendering is a pure function of
//! the page number and the reference data, so identical inputs always
//! produce an identical document.

use log::{debug, warn};
use serde::Serialize;

use crate::corpus::{LineDescriptor, LineKind};
use crate::error::{Error, Result};
use crate::store::{LayoutIndex, SurahCatalog, WordStore};

/// The basmallah formula that opens most surahs. Rendered verbatim for every
/// invocation line; carries no reference data.
pub const BASMALLAH: &str = "بِسۡمِ ٱللَّهِ ٱلرَّحۡمَٰنِ ٱلرَّحِيمِ";

/// Label word prefixed to a surah's Arabic name on title lines.
pub const SURAH_LABEL: &str = "سورة";

/// Word id used for the synthetic entries of title and invocation lines.
/// Corpus word ids start at 1, so 0 never collides with a real word.
pub const SYNTHETIC_WORD_ID: u32 = 0;

/// One word of a rendered line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedWord {
    pub id: u32,
    pub text: String,
}

/// A fully materialized line.
///
/// Every kind of line carries the same shape: `content` is the display text
/// and `words` its ordered parts. Title and invocation lines hold a single
/// synthetic entry so consumers never branch on kind to read the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedLine {
    pub line: u16,
    #[serde(flatten)]
    pub kind: LineKind,
    pub centered: bool,
    pub content: String,
    pub words: Vec<RenderedWord>,
}

/// A fully materialized page, lines ascending by line number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub page: u16,
    pub lines: Vec<RenderedLine>,
}

/// Assembles pages from the three reference stores.
///
/// Holds borrowed stores only; construct once per corpus and share freely,
/// or rebuild per request — there is no state beyond the references.
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'a, W, S, L> {
    words: &'a W,
    surahs: &'a S,
    layout: &'a L,
}

impl<'a, W: WordStore, S: SurahCatalog, L: LayoutIndex> Renderer<'a, W, S, L> {
    pub fn new(words: &'a W, surahs: &'a S, layout: &'a L) -> Self {
        Self {
            words,
            surahs,
            layout,
        }
    }

    /// Render a whole page.
    ///
    /// Fails with [`Error::PageNotFound`] for a page with no descriptors and
    /// with [`Error::DataInconsistency`] when a descriptor references words
    /// or a surah the stores do not hold.
    pub fn render_page(&self, page: u16) -> Result<Page> {
        let descriptors = self.layout.lines_for_page(page)?;
        let lines = descriptors
            .iter()
            .map(|descriptor| self.render_line(descriptor))
            .collect::<Result<Vec<_>>>()?;
        Ok(Page { page, lines })
    }

    fn render_line(&self, descriptor: &LineDescriptor) -> Result<RenderedLine> {
        let words = match descriptor.kind {
            LineKind::Ayah { range } => {
                let stored = self.words.words_in_range(range.first, range.last)?;
                if stored.is_empty() {
                    return Err(self.inconsistent(
                        descriptor,
                        format!(
                            "word range {}..={} matches no stored words",
                            range.first, range.last
                        ),
                    ));
                }
                if (stored.len() as u32) < range.len() {
                    debug!(
                        "page {} line {}: word range {}..={} truncated to {} words",
                        descriptor.page,
                        descriptor.line,
                        range.first,
                        range.last,
                        stored.len()
                    );
                }
                stored
                    .into_iter()
                    .map(|word| RenderedWord {
                        id: word.id,
                        text: word.text,
                    })
                    .collect()
            }

            LineKind::SurahTitle { surah } => {
                let surah = match self.surahs.surah(surah) {
                    Ok(surah) => surah,
                    Err(Error::SurahNotFound(number)) => {
                        return Err(self.inconsistent(
                            descriptor,
                            format!("surah {number} absent from catalog"),
                        ));
                    }
                    Err(other) => return Err(other),
                };
                vec![RenderedWord {
                    id: SYNTHETIC_WORD_ID,
                    text: format!("{SURAH_LABEL} {}", surah.name_arabic),
                }]
            }

            LineKind::Invocation => vec![RenderedWord {
                id: SYNTHETIC_WORD_ID,
                text: BASMALLAH.to_string(),
            }],
        };

        let content = words
            .iter()
            .map(|word| word.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        Ok(RenderedLine {
            line: descriptor.line,
            kind: descriptor.kind,
            centered: descriptor.centered,
            content,
            words,
        })
    }

    fn inconsistent(&self, descriptor: &LineDescriptor, detail: String) -> Error {
        warn!(
            "page {} line {}: {detail}",
            descriptor.page, descriptor.line
        );
        Error::DataInconsistency {
            page: descriptor.page,
            line: descriptor.line,
            detail,
        }
    }
}
