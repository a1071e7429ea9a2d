//! Benchmarks for page assembly and location resolution.
//!
//! Run with: cargo bench

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use mushaf::{
    Corpus, LayoutInfo, LineDescriptor, LineKind, Surah, VerseKey, Word, WordRange,
};

const CORPUS_JSON: &str = include_str!("../tests/fixtures/al-fatiha.json");

/// A full-size synthetic layout: 604 pages of 15 lines, 9 words per line.
fn synthetic_corpus() -> Corpus {
    const PAGES: u16 = 604;
    const LINES_PER_PAGE: u16 = 15;
    const WORDS_PER_LINE: u32 = 9;

    let mut words = Vec::new();
    let mut lines = Vec::new();
    let mut id = 1u32;

    for page in 1..=PAGES {
        for line in 1..=LINES_PER_PAGE {
            let first = id;
            for position in 1..=WORDS_PER_LINE {
                let verse = (id - 1) / WORDS_PER_LINE + 1;
                words.push(Word::new(
                    id,
                    VerseKey::new(1, verse as u16),
                    position as u16,
                    format!("كلمة{id}"),
                ));
                id += 1;
            }
            lines.push(LineDescriptor {
                page,
                line,
                kind: LineKind::Ayah {
                    range: WordRange::new(first, id - 1).unwrap(),
                },
                centered: false,
            });
        }
    }

    let surahs = vec![Surah {
        number: 1,
        name_arabic: "الفاتحة".into(),
        name_english: "Al-Fatiha".into(),
        verse_count: (id / WORDS_PER_LINE) as u16,
    }];
    let info = LayoutInfo {
        name: "synthetic".into(),
        total_pages: PAGES,
        lines_per_page: LINES_PER_PAGE,
    };

    Corpus::new(words, surahs, info, lines).unwrap()
}

fn bench_load_corpus(c: &mut Criterion) {
    c.bench_function("load_corpus_json", |b| {
        b.iter(|| Corpus::from_json(black_box(CORPUS_JSON)).unwrap());
    });
}

fn bench_build_index(c: &mut Criterion) {
    c.bench_function("build_synthetic_corpus", |b| {
        b.iter(synthetic_corpus);
    });
}

fn bench_render_page(c: &mut Criterion) {
    let corpus = synthetic_corpus();
    let renderer = corpus.renderer();

    c.bench_function("render_page", |b| {
        b.iter(|| renderer.render_page(black_box(302)).unwrap());
    });
}

fn bench_locate_verse(c: &mut Criterion) {
    let corpus = synthetic_corpus();
    let resolver = corpus.resolver();

    c.bench_function("locate_verse", |b| {
        b.iter(|| resolver.locate_verse(black_box(VerseKey::new(1, 5000))).unwrap());
    });
}

fn bench_locate_word(c: &mut Criterion) {
    let corpus = synthetic_corpus();
    let resolver = corpus.resolver();

    c.bench_function("locate_word", |b| {
        b.iter(|| resolver.locate_word(black_box(45000)).unwrap());
    });
}

criterion_group!(
    benches,
    bench_load_corpus,
    bench_build_index,
    bench_render_page,
    bench_locate_verse,
    bench_locate_word
);
criterion_main!(benches);
