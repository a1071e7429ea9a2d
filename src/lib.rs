//! # mushaf
//!
//! A library for rendering paginated Mushaf layouts and resolving locations
//! within them.
//!
//! A Mushaf layout describes every line of every page of a printed Quran:
//! verse-text lines spanning a contiguous run of globally numbered words,
//! surah title lines, and basmallah lines. This crate loads that reference
//! data, assembles renderable page documents from it, and answers the
//! cross-reference questions a reader UI needs — which page holds a verse,
//! which verse a word belongs to, which lines a wrapped verse spans.
//!
//! ## Quick Start
//!
//! ```no_run
//! use mushaf::{Corpus, VerseKey};
//!
//! let corpus = Corpus::load("uthmani-hafs.json")?;
//!
//! // Assemble a page document
//! let page = corpus.renderer().render_page(1)?;
//! for line in &page.lines {
//!     println!("{:2} {}", line.line, line.content);
//! }
//!
//! // Find a verse
//! let location = corpus.resolver().locate_verse(VerseKey::new(1, 5))?;
//! println!("1:5 is on page {} line {}", location.page, location.line);
//! # Ok::<(), mushaf::Error>(())
//! ```
//!
//! ## Injecting other backends
//!
//! [`Renderer`] and [`Resolver`] are generic over the [`WordStore`],
//! [`SurahCatalog`], and [`LayoutIndex`] traits, so the reference data can
//! come from any backing that honors the same ordering semantics; the
//! in-memory stores behind [`Corpus`] are one implementation. All stores
//! are read-only after construction, so every query is safely concurrent.

pub mod corpus;
mod error;
mod locate;
mod memory;
mod render;
mod store;

pub use corpus::{
    Corpus, LayoutInfo, LineDescriptor, LineKind, Surah, VerseKey, Word, WordRange,
};
pub use error::{Error, Result};
pub use locate::{Location, Resolver};
pub use memory::{MemoryLayoutIndex, MemorySurahCatalog, MemoryWordStore};
pub use render::{
    BASMALLAH, Page, RenderedLine, RenderedWord, Renderer, SURAH_LABEL, SYNTHETIC_WORD_ID,
};
pub use store::{LayoutIndex, SurahCatalog, WordStore};
