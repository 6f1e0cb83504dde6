// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use hecele::domain::RejectReason;
use hecele::services::safety::{
    PARTIAL_ROOTS, contains_sensitive_root, is_blocked_syllable, syllable_blocklist,
    validate_entry, validate_syllable, validate_word, word_blocklist,
};

fn word_reason(w: &str) -> Option<RejectReason> {
    validate_word(w).reason
}

fn syllable_reason(s: &str) -> Option<RejectReason> {
    validate_syllable(s).reason
}

// ─── Word checks ─────────────────────────────────────────────────────────────

#[test]
fn two_letters_is_enough() {
    assert!(validate_word("ab").accepted);
    assert_eq!(word_reason("a"), Some(RejectReason::TooShort));
    assert_eq!(word_reason("   "), Some(RejectReason::TooShort));
    assert_eq!(word_reason(" a "), Some(RejectReason::TooShort));
}

#[test]
fn only_turkish_letters_and_spaces() {
    assert!(validate_word("Çiçek").accepted);
    assert!(validate_word("İyi günler").accepted);
    assert!(validate_word("IĞDIR").accepted);
    assert_eq!(word_reason("kitap1"), Some(RejectReason::DisallowedCharacters));
    assert_eq!(word_reason("ki-tap"), Some(RejectReason::DisallowedCharacters));
    assert_eq!(word_reason("straße"), Some(RejectReason::DisallowedCharacters));
}

#[test]
fn every_blocklisted_word_is_rejected() {
    for w in word_blocklist() {
        assert!(!validate_word(w).accepted, "{w} should be rejected");
    }
}

#[test]
fn blocklist_match_is_case_insensitive() {
    assert_eq!(word_reason("SİK"), Some(RejectReason::Inappropriate));
    assert_eq!(word_reason(" Aptal "), Some(RejectReason::Inappropriate));
}

#[test]
fn blocklist_is_exact_match() {
    assert!(validate_word("malzeme").accepted);
    assert!(validate_word("kesir").accepted);
}

#[test]
fn length_limit() {
    assert!(validate_word("abcdefghijklmnopqrst").accepted);
    assert_eq!(
        word_reason("abcdefghijklmnopqrstu"),
        Some(RejectReason::TooLong)
    );
}

#[test]
fn four_repeats_rejected_three_allowed() {
    assert_eq!(word_reason("aaaa"), Some(RejectReason::RepeatedCharacters));
    assert_eq!(word_reason("baaaab"), Some(RejectReason::RepeatedCharacters));
    assert!(validate_word("aaa").accepted);
    assert!(validate_word("aaabaaa").accepted);
}

#[test]
fn first_failure_wins() {
    // disallowed characters are reported before length
    assert_eq!(
        word_reason("1234567890123456789012"),
        Some(RejectReason::DisallowedCharacters)
    );
    // too long is reported before repeats
    assert_eq!(
        word_reason("aaaaaaaaaaaaaaaaaaaaaaa"),
        Some(RejectReason::TooLong)
    );
}

// ─── Syllable checks ─────────────────────────────────────────────────────────

#[test]
fn syllable_empty() {
    assert_eq!(syllable_reason(""), Some(RejectReason::Empty));
    assert_eq!(syllable_reason("  "), Some(RejectReason::Empty));
}

#[test]
fn syllable_longer_than_eight_rejected() {
    assert!(validate_syllable("abcdefgh").accepted);
    assert_eq!(syllable_reason("abcdefghi"), Some(RejectReason::TooLong));
    assert_eq!(syllable_reason("123456789"), Some(RejectReason::TooLong));
}

#[test]
fn syllable_without_whitespace() {
    assert_eq!(syllable_reason("a b"), Some(RejectReason::DisallowedCharacters));
    assert_eq!(syllable_reason("ki1"), Some(RejectReason::DisallowedCharacters));
}

#[test]
fn every_blocklisted_syllable_is_rejected() {
    for s in syllable_blocklist() {
        assert!(!validate_syllable(s).accepted, "{s} should be rejected");
    }
}

#[test]
fn syllable_blocklist_differs_from_word_blocklist() {
    assert!(is_blocked_syllable("top"));
    assert!(validate_word("top").accepted);
    assert_eq!(syllable_reason("Top"), Some(RejectReason::Inappropriate));
}

// ─── Partial roots ───────────────────────────────────────────────────────────

#[test]
fn roots_caught_within_two_extra_characters() {
    assert!(contains_sensitive_root("boks"));
    assert!(contains_sensitive_root("bokçu"));
    assert!(contains_sensitive_root("kamp"));
    assert_eq!(syllable_reason("Sikk"), Some(RejectReason::Inappropriate));
    assert_eq!(syllable_reason("lam"), Some(RejectReason::Inappropriate));
}

#[test]
fn longer_syllables_with_root_pass() {
    assert!(!contains_sensitive_root("bokser"));
    assert!(!contains_sensitive_root("kampa"));
    assert!(validate_syllable("bokser").accepted);
    assert!(validate_syllable("memeler").accepted);
}

#[test]
fn every_root_is_rejected_on_its_own() {
    for root in PARTIAL_ROOTS {
        assert!(!validate_syllable(root).accepted, "{root}");
    }
}

// ─── Whole entries ───────────────────────────────────────────────────────────

#[test]
fn entry_passes_when_word_and_syllables_pass() {
    assert!(validate_entry("Kitap", ["Ki", "tap"]).is_ok());
}

#[test]
fn entry_reports_offending_syllable() {
    let (text, result) = validate_entry("siktap", ["sik", "tap"]).unwrap_err();
    assert_eq!(text, "sik");
    assert_eq!(result.reason, Some(RejectReason::Inappropriate));
}

#[test]
fn entry_without_syllables_is_rejected() {
    let (text, result) = validate_entry("Kalem", std::iter::empty()).unwrap_err();
    assert_eq!(text, "Kalem");
    assert_eq!(result.reason, Some(RejectReason::Empty));
}

#[test]
fn entry_reports_word_first() {
    let (text, result) = validate_entry("a", ["a"]).unwrap_err();
    assert_eq!(text, "a");
    assert_eq!(result.reason, Some(RejectReason::TooShort));
}

// ─── Proptest: never-panic guarantees ─────────────────────────────────────────

proptest::proptest! {
    #[test]
    fn word_check_never_panics(input in proptest::prelude::any::<String>()) {
        let _ = validate_word(&input);
    }

    #[test]
    fn syllable_check_never_panics(input in proptest::prelude::any::<String>()) {
        let _ = validate_syllable(&input);
    }

    #[test]
    fn long_syllables_always_rejected(input in "[a-zçğıöşü]{9,16}") {
        proptest::prop_assert_eq!(syllable_reason(&input), Some(RejectReason::TooLong));
    }
}
