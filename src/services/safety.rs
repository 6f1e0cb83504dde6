// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use super::turkish;
use crate::domain::{RejectReason, ValidationResult};

pub const MIN_WORD_CHARS: usize = 2;
pub const MAX_WORD_CHARS: usize = 20;
pub const MAX_SYLLABLE_CHARS: usize = 8;
/// A run of this many identical characters rejects a word.
pub const MAX_REPEAT_RUN: usize = 4;
/// How much longer than a sensitive root a syllable may be and still be
/// treated as a variant of it.
pub const PARTIAL_ROOT_SLACK: usize = 2;

static WORD_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zçğıöşü\s]+$").unwrap());

static SYLLABLE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zçğıöşü]+$").unwrap());

const WORD_BLOCKLIST: &[&str] = &[
    // sexual
    "sik", "sık", "sex", "seks", "am", "amcık", "amcik", "göt", "meme", "penis", "vajina",
    "taşak", "taşşak", "yarrak", "yarrağ", "sül", "döl", "sikim", "sikik", "sikiş", "sikis",
    "gotten", "götün", "göte", "amın", "ama", "amı", "memek", "memen", "memesi",
    // profanity
    "oç", "oc", "piç", "pic", "ibne", "gay", "lezbiyen", "fahişe", "fahise", "orospu",
    "orospı", "kaltak", "sürtük", "surtuk", "pezevenk", "gavat", "züppe", "zıkkım",
    "kerhaneci", "pimp",
    // insults and crude
    "aptal", "salak", "gerizekalı", "mal", "ahmak", "budala", "dangalak", "bok", "kaka",
    "çiş", "cis", "pislik", "leş", "les", "çürük", "iğrenç", "kusma", "kustu", "kustum",
    "osuruk", "gaz", "geğirme",
    // sensitive
    "lanet", "kahretsin", "cehennem", "şeytan", "allah", "tanrı", "din", "peygamber",
    "namaz", "oruç", "hac", "zakat",
    // interjections and slang
    "ah", "oh", "uh", "eh", "ih", "hıh", "hah", "heh", "hih", "lan", "ulan", "moruk", "aga",
    "reis", "kanka",
    // violence
    "öldür", "öl", "gebertmek", "gebersin", "kes", "doğra", "vur", "vurmak", "dayak",
    "dövmek", "saldır", "kavga",
];

const SYLLABLE_BLOCKLIST: &[&str] = &[
    // sexual
    "sik", "sık", "sex", "seks", "am", "göt", "meme", "penis", "vajina", "amcık", "amcik",
    "taşak", "taşşak", "yarrak", "yarrağ", "sül", "döl", "sikim", "sikik", "gotten", "götün",
    "göte", "amın", "ama", "amı", "memek", "memen", "memesi", "siki", "sikti", "sikis",
    "sikiş",
    // profanity
    "oç", "oc", "piç", "pic", "ibne", "top", "gay", "lezbiyen", "fahişe", "fahise", "orospı",
    "orospu", "kaltak", "sürtük", "surtuk", "pezevenk", "pimp", "kerhaneci", "gavat", "züppe",
    "zıkkım",
    // crude
    "bok", "kaka", "çiş", "cis", "işe", "pislik", "pis", "leş", "les", "çürük", "kötü",
    "iğrenç", "mide", "kusma", "kustu", "kustum",
    // rude noises
    "pırt", "pirt", "osur", "gaz", "geğir", "gegir", "tükür", "tukur", "hırr", "grrr", "öfff",
    "puff", "ıyyy", "iyy", "ekşi",
    // insults and curses
    "salak", "aptal", "mal", "geri", "ahmak", "budala", "dangalak", "lanet", "şeytan",
    "cehennem", "kahret", "lan", "ulan", "moruk",
    // interjections
    "hıh", "hah", "heh", "hih", "hooo", "haaa", "heee", "hiiii",
];

/// The most severe roots, also caught inside slightly longer syllables.
pub const PARTIAL_ROOTS: &[&str] = &["sik", "am", "göt", "meme", "bok", "piç", "oç"];

static WORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| WORD_BLOCKLIST.iter().copied().collect());

static SYLLABLES: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| SYLLABLE_BLOCKLIST.iter().copied().collect());

pub fn word_blocklist() -> impl Iterator<Item = &'static str> {
    WORD_BLOCKLIST.iter().copied()
}

pub fn syllable_blocklist() -> impl Iterator<Item = &'static str> {
    SYLLABLE_BLOCKLIST.iter().copied()
}

/// Check a whole word. The first failing check decides the reason.
pub fn validate_word(word: &str) -> ValidationResult {
    let clean = turkish::to_lowercase(word.trim());
    let len = clean.chars().count();

    if len < MIN_WORD_CHARS {
        return ValidationResult::reject(RejectReason::TooShort);
    }
    if !WORD_CHARS.is_match(&clean) {
        return ValidationResult::reject(RejectReason::DisallowedCharacters);
    }
    if is_blocked_word(&clean) {
        return ValidationResult::reject(RejectReason::Inappropriate);
    }
    if len > MAX_WORD_CHARS {
        return ValidationResult::reject(RejectReason::TooLong);
    }
    if has_repeat_run(&clean, MAX_REPEAT_RUN) {
        return ValidationResult::reject(RejectReason::RepeatedCharacters);
    }
    ValidationResult::accept()
}

/// Check one syllable. The first failing check decides the reason.
pub fn validate_syllable(syllable: &str) -> ValidationResult {
    let clean = turkish::to_lowercase(syllable.trim());

    if clean.is_empty() {
        return ValidationResult::reject(RejectReason::Empty);
    }
    if clean.chars().count() > MAX_SYLLABLE_CHARS {
        return ValidationResult::reject(RejectReason::TooLong);
    }
    if !SYLLABLE_CHARS.is_match(&clean) {
        return ValidationResult::reject(RejectReason::DisallowedCharacters);
    }
    if is_blocked_syllable(&clean) {
        return ValidationResult::reject(RejectReason::Inappropriate);
    }
    if contains_sensitive_root(&clean) {
        return ValidationResult::reject(RejectReason::Inappropriate);
    }
    ValidationResult::accept()
}

/// Validate a word and every one of its syllables.
///
/// Returns the offending text alongside the result when something fails. A
/// word without any syllables fails as [`RejectReason::Empty`].
pub fn validate_entry<'a, I>(word: &'a str, syllables: I) -> Result<(), (&'a str, ValidationResult)>
where
    I: IntoIterator<Item = &'a str>,
{
    let result = validate_word(word);
    if !result.accepted {
        return Err((word, result));
    }
    let mut count = 0;
    for syllable in syllables {
        let result = validate_syllable(syllable);
        if !result.accepted {
            return Err((syllable, result));
        }
        count += 1;
    }
    if count == 0 {
        return Err((word, ValidationResult::reject(RejectReason::Empty)));
    }
    Ok(())
}

/// Exact match against the word blocklist. Expects lowercase input.
pub fn is_blocked_word(word: &str) -> bool {
    WORDS.contains(word)
}

/// Exact match against the syllable blocklist. Expects lowercase input.
pub fn is_blocked_syllable(syllable: &str) -> bool {
    SYLLABLES.contains(syllable)
}

/// Whether a lowercase syllable contains a sensitive root and is at most
/// [`PARTIAL_ROOT_SLACK`] characters longer than it.
pub fn contains_sensitive_root(syllable: &str) -> bool {
    let len = syllable.chars().count();
    PARTIAL_ROOTS
        .iter()
        .any(|root| syllable.contains(root) && len <= root.chars().count() + PARTIAL_ROOT_SLACK)
}

/// Whether any character repeats `run` or more times in a row.
fn has_repeat_run(s: &str, run: usize) -> bool {
    let mut prev = None;
    let mut count = 0;
    for c in s.chars() {
        if Some(c) == prev {
            count += 1;
        } else {
            prev = Some(c);
            count = 1;
        }
        if count >= run {
            return true;
        }
    }
    false
}
