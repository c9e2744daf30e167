//! Integration tests for segmentation over a small hand-built dictionary

use kotowari_core::lexicon::PARTICLE_TAG;
use kotowari_core::{
    build_index, parse_sentence, ConjugationRule, ConjugationTable, DictionaryIndex,
    IndexBuilder, LexiconEntry, ReadingPriority, Sense, Sentence,
};

fn toy_index() -> DictionaryIndex {
    build_index(vec![
        LexiconEntry::new(
            Vec::<String>::new(),
            ["パン"],
            vec![Sense::new(["bread"], ["noun"])],
        ),
        LexiconEntry::new(
            Vec::<String>::new(),
            ["を"],
            vec![Sense::new(["indicates direct object"], [PARTICLE_TAG])],
        ),
        LexiconEntry::new(
            ["食べる"],
            ["たべる"],
            vec![Sense::new(["to eat"], ["Ichidan verb"])],
        ),
    ])
}

fn past_form_table() -> ConjugationTable {
    ConjugationTable::new(vec![ConjugationRule::new(
        "た",
        "る",
        "Ichidan verb",
        "Past form",
    )])
    .unwrap()
}

fn originals(sentence: &Sentence) -> Vec<&str> {
    sentence.iter().map(|w| w.original.as_str()).collect()
}

#[test]
fn test_empty_input_gives_empty_sentence() {
    let sentence = parse_sentence(&toy_index(), &past_form_table(), "");
    assert!(sentence.is_empty());
}

#[test]
fn test_single_delimiter() {
    let sentence = parse_sentence(&toy_index(), &past_form_table(), "。");
    assert_eq!(sentence.len(), 1);
    assert_eq!(sentence.words()[0].original, "。");
    assert!(sentence.words()[0].definitions.is_empty());
}

#[test]
fn test_plain_sentence() {
    let sentence = parse_sentence(&toy_index(), &past_form_table(), "パンを食べる");
    assert_eq!(originals(&sentence), ["パン", "を", "食べる"]);
    for word in sentence.words() {
        assert_eq!(word.definitions.len(), 1, "word {}", word.original);
        assert!(word.definitions[0].conjugation.is_none());
    }
}

#[test]
fn test_past_form_sentence() {
    let sentence = parse_sentence(&toy_index(), &past_form_table(), "パンを食べた");
    assert_eq!(originals(&sentence), ["パン", "を", "食べた"]);

    let eaten = &sentence.words()[2];
    assert_eq!(eaten.definitions.len(), 1);
    let matched = &eaten.definitions[0];
    assert_eq!(matched.entry.kanji, ["食べる"]);
    let rule = matched.conjugation.as_ref().unwrap();
    assert_eq!(rule.name, "Past form");
    assert_eq!(rule.ending, "た");
    assert_eq!(rule.base, "る");
}

#[test]
fn test_latin_text_is_split_per_character() {
    let sentence = parse_sentence(&toy_index(), &past_form_table(), "latin");
    assert_eq!(originals(&sentence), ["l", "a", "t", "i", "n"]);
    assert!(sentence.iter().all(|w| w.definitions.is_empty()));
}

#[test]
fn test_direct_matches_come_before_conjugated() {
    let index = build_index(vec![
        LexiconEntry::new(
            ["見る"],
            ["みる"],
            vec![Sense::new(["to see"], ["Ichidan verb"])],
        ),
        LexiconEntry::new(
            ["見た"],
            ["みた"],
            vec![Sense::new(["appearance"], ["noun"])],
        ),
    ]);
    let sentence = parse_sentence(&index, &past_form_table(), "見た");
    assert_eq!(originals(&sentence), ["見た"]);

    let definitions = &sentence.words()[0].definitions;
    assert_eq!(definitions.len(), 2);
    assert!(!definitions[0].is_conjugated());
    assert_eq!(definitions[0].entry.primary_gloss(), Some("appearance"));
    assert!(definitions[1].is_conjugated());
    assert_eq!(definitions[1].entry.primary_gloss(), Some("to see"));
}

#[test]
fn test_conjugation_requires_matching_pos() {
    let index = build_index(vec![LexiconEntry::new(
        ["丸"],
        ["まる"],
        vec![Sense::new(["circle"], ["noun"])],
    )]);
    // まる exists but is a noun, so また must not resolve to it
    let sentence = parse_sentence(&index, &past_form_table(), "また");
    assert_eq!(originals(&sentence), ["ま", "た"]);
    assert_eq!(sentence.matched_count(), 0);
}

#[test]
fn test_particle_outranks_compound_with_same_reading() {
    let entries = vec![
        LexiconEntry::new(
            ["二"],
            ["に"],
            vec![Sense::new(["two"], ["numeric"])],
        ),
        LexiconEntry::new(
            Vec::<String>::new(),
            ["に"],
            vec![Sense::new(["at", "in"], [PARTICLE_TAG])],
        ),
    ];
    let index = build_index(entries);
    let found = index.lookup("に");
    assert_eq!(found.len(), 2);
    assert!(found[0].is_particle());

    let sentence = parse_sentence(&index, &ConjugationTable::empty(), "に");
    assert!(sentence.words()[0].definitions[0].entry.is_particle());
}

#[test]
fn test_reading_priority_policies_differ_on_kanji_particles() {
    let entries = vec![
        LexiconEntry::new(
            ["荷"],
            ["に"],
            vec![Sense::new(["load", "baggage"], ["noun"])],
        ),
        LexiconEntry::new(
            ["爾"],
            ["に"],
            vec![Sense::new(["at", "in"], [PARTICLE_TAG])],
        ),
    ];

    let revised = IndexBuilder::new()
        .reading_priority(ReadingPriority::KanjiLessOrParticle)
        .build(entries.clone());
    assert!(revised.lookup("に")[0].is_particle());

    let legacy = IndexBuilder::new()
        .reading_priority(ReadingPriority::KanjiLessFirst)
        .build(entries);
    assert!(!legacy.lookup("に")[0].is_particle());
    assert!(legacy.lookup("に")[1].is_particle());

    // kanji keys are unaffected by either policy
    assert_eq!(revised.lookup("爾").len(), 1);
    assert_eq!(legacy.lookup("荷").len(), 1);
}

#[test]
fn test_round_trip_on_mixed_text() {
    let text = "「パンを食べた」と彼は言った。abc！？";
    let sentence = parse_sentence(&toy_index(), &past_form_table(), text);
    assert_eq!(sentence.text(), text);
}
