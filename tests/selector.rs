// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

mod helpers;

use hecele::domain::{Origin, SyllableColor};
use hecele::services::safety::{validate_entry, word_blocklist};
use hecele::services::selector::{SAFE_FALLBACK, WORD_POOL, select_safe_word, try_entry};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn single_word_pool() {
    let entry = select_safe_word(&["kalem"], &mut helpers::rng());
    assert_eq!(entry.word, "Kalem");
    assert_eq!(entry.hyphenated(), "Ka-lem");
    assert_eq!(entry.syllables[0].color, SyllableColor::Primary);
    assert_eq!(entry.syllables[1].color, SyllableColor::Secondary);
    assert_eq!(entry.origin, Origin::Random);
    assert!(!entry.safe_fallback);
}

#[test]
fn blocked_pool_falls_back() {
    let entry = select_safe_word(&["sik", "bok"], &mut helpers::rng());
    assert!(entry.safe_fallback);
    assert_eq!(entry.word, "Elma");
    assert_eq!(entry.hyphenated(), "El-ma");
}

#[test]
fn empty_pool_falls_back() {
    let pool: &[&str] = &[];
    let entry = select_safe_word(pool, &mut helpers::rng());
    assert!(entry.safe_fallback);
    assert_eq!(entry.word, "Elma");
}

#[test]
fn pool_with_bad_syllables_falls_back() {
    // passes the word check but splits into "Lam" and "ba"
    let entry = select_safe_word(&["lamba"], &mut helpers::rng());
    assert!(entry.safe_fallback);
}

#[test]
fn owned_strings_work_as_pool() {
    let pool = vec![String::from("kedi")];
    let entry = select_safe_word(&pool, &mut helpers::rng());
    assert_eq!(entry.word, "Kedi");
}

#[test]
fn try_entry_rejects_blocked_word() {
    assert!(try_entry("aptal", Origin::Random).is_none());
    assert!(try_entry("kitap", Origin::Random).is_some());
}

#[test]
fn fallback_words_are_all_safe() {
    for word in SAFE_FALLBACK {
        let entry = try_entry(word, Origin::Random).expect("fallback word must validate");
        assert!(validate_entry(&entry.word, entry.syllable_texts()).is_ok());
    }
}

#[test]
fn word_pool_is_lowercase_and_unique() {
    let mut seen = std::collections::HashSet::new();
    for word in WORD_POOL {
        assert_eq!(hecele::services::turkish::to_lowercase(word), *word);
        assert!(seen.insert(*word), "duplicate pool word {word}");
    }
}

fn pool_word() -> impl Strategy<Value = String> {
    let blocked: Vec<&'static str> = word_blocklist().collect();
    prop_oneof![
        proptest::sample::select(blocked).prop_map(String::from),
        proptest::sample::select(WORD_POOL.to_vec()).prop_map(String::from),
        "[a-zçğıöşü]{2,12}",
        "[a-z]{1,4}[0-9!._-][a-z]{0,4}",
        "[a-zçğıöşü]{21,30}",
        "[a-z ]{0,6}",
    ]
}

proptest! {
    #[test]
    fn any_pool_yields_a_valid_entry(
        pool in proptest::collection::vec(pool_word(), 0..12),
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let entry = select_safe_word(&pool[..], &mut rng);
        prop_assert!(!entry.syllables.is_empty());
        prop_assert!(validate_entry(&entry.word, entry.syllable_texts()).is_ok());
    }

    #[test]
    fn selection_always_passes_validation(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let entry = select_safe_word(WORD_POOL, &mut rng);
        prop_assert!(validate_entry(&entry.word, entry.syllable_texts()).is_ok());
    }
}
