//! Location resolution tests against the Al-Fatiha fixture corpus.

use mushaf::{Corpus, Error, LineKind, Location, VerseKey, WordStore};

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn load_fixture() -> Corpus {
    Corpus::load(format!("{FIXTURES_DIR}/al-fatiha.json")).expect("fixture should load")
}

#[test]
fn locate_verse_finds_the_first_line_of_the_verse() {
    let corpus = load_fixture();
    let resolver = corpus.resolver();

    // 1:1 is the bismillah rendered as the first verse-text line of page 1
    let location = resolver.locate_verse(VerseKey::new(1, 1)).unwrap();
    assert_eq!(location, Location::new(1, 2));

    let location = resolver.locate_verse(VerseKey::new(1, 5)).unwrap();
    assert_eq!(location, Location::new(1, 6));
}

#[test]
fn wrapped_verse_reports_only_its_first_line() {
    let corpus = load_fixture();
    let resolver = corpus.resolver();

    // verse 1:7 wraps onto a second line of the same page
    let location = resolver.locate_verse(VerseKey::new(1, 7)).unwrap();
    assert_eq!(location, Location::new(1, 8));
}

#[test]
fn locate_verse_all_reports_every_line_of_a_wrapped_verse() {
    let corpus = load_fixture();
    let resolver = corpus.resolver();

    let locations = resolver.locate_verse_all(VerseKey::new(1, 7)).unwrap();
    assert_eq!(locations, vec![Location::new(1, 8), Location::new(1, 9)]);
}

#[test]
fn verse_split_across_pages_spans_both() {
    let corpus = load_fixture();
    let resolver = corpus.resolver();

    // verse 2:2 starts on page 2 and continues onto page 3
    let key = VerseKey::new(2, 2);
    assert_eq!(resolver.locate_verse(key).unwrap(), Location::new(2, 3));
    assert_eq!(
        resolver.locate_verse_all(key).unwrap(),
        vec![Location::new(2, 3), Location::new(3, 1)]
    );
}

#[test]
fn unknown_verse_fails_with_verse_not_found() {
    let corpus = load_fixture();
    let resolver = corpus.resolver();

    let missing = VerseKey::new(1, 8);
    match resolver.locate_verse(missing) {
        Err(Error::VerseNotFound(key)) => assert_eq!(key, missing),
        other => panic!("expected VerseNotFound, got {other:?}"),
    }
    assert!(resolver.locate_verse_all(missing).is_err());
}

#[test]
fn locate_word_finds_the_containing_page() {
    let corpus = load_fixture();
    let resolver = corpus.resolver();

    assert_eq!(resolver.locate_word(1).unwrap(), 1);
    assert_eq!(resolver.locate_word(29).unwrap(), 1);
    assert_eq!(resolver.locate_word(30).unwrap(), 2);
    assert_eq!(resolver.locate_word(36).unwrap(), 3);
}

#[test]
fn word_outside_every_range_fails_with_word_not_found() {
    let corpus = load_fixture();
    let resolver = corpus.resolver();

    assert!(matches!(
        resolver.locate_word(0),
        Err(Error::WordNotFound(0))
    ));
    assert!(matches!(
        resolver.locate_word(999),
        Err(Error::WordNotFound(999))
    ));
}

#[test]
fn verse_for_word_reads_the_word_key() {
    let corpus = load_fixture();
    let resolver = corpus.resolver();

    assert_eq!(resolver.verse_for_word(9).unwrap(), VerseKey::new(1, 3));
    assert_eq!(resolver.verse_for_word(37).unwrap(), VerseKey::new(2, 2));
    assert!(matches!(
        resolver.verse_for_word(999),
        Err(Error::WordNotFound(999))
    ));
}

#[test]
fn verse_text_joins_words_in_position_order() {
    let corpus = load_fixture();
    let resolver = corpus.resolver();

    assert_eq!(
        resolver.verse_text(VerseKey::new(1, 2)).unwrap(),
        "ٱلۡحَمۡدُ لِلَّهِ رَبِّ ٱلۡعَٰلَمِينَ"
    );
    assert_eq!(
        resolver.verse_text(VerseKey::new(2, 2)).unwrap(),
        "ذَٰلِكَ ٱلۡكِتَٰبُ لَا رَيۡبَۛ فِيهِۛ هُدٗى لِّلۡمُتَّقِينَ"
    );
}

#[test]
fn located_line_contains_a_word_of_the_verse() {
    let corpus = load_fixture();
    let resolver = corpus.resolver();
    let renderer = corpus.renderer();

    // every verse in the fixture: the line locate_verse points at must hold
    // at least one of the verse's own words
    for surah in [1u16, 2] {
        for ayah in 1..=7u16 {
            let key = VerseKey::new(surah, ayah);
            let Ok(words) = corpus.words_for_verse(key) else {
                continue;
            };
            let ids: Vec<u32> = words.iter().map(|w| w.id).collect();

            let location = resolver.locate_verse(key).unwrap();
            let page = renderer.render_page(location.page).unwrap();
            let line = page
                .lines
                .iter()
                .find(|l| l.line == location.line)
                .expect("located line must exist on its page");

            assert!(
                matches!(line.kind, LineKind::Ayah { .. }),
                "{key}: located line must be a verse-text line"
            );
            assert!(
                line.words.iter().any(|w| ids.contains(&w.id)),
                "{key}: located line holds none of the verse's words"
            );
        }
    }
}
