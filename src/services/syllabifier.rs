// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use std::collections::HashMap;
use std::sync::LazyLock;

use super::turkish;

/// Words the heuristic gets wrong, with their correct syllables.
///
/// Mostly short loanwords with an initial consonant cluster, which the
/// lookahead would split (`tren` -> `t-ren`).
const KNOWN_WORDS: &[(&str, &[&str])] = &[
    ("anne", &["An", "ne"]),
    ("baba", &["Ba", "ba"]),
    ("efe", &["E", "fe"]),
    ("okul", &["O", "kul"]),
    ("kitap", &["Ki", "tap"]),
    ("defter", &["Def", "ter"]),
    ("öğretmen", &["Öğ", "ret", "men"]),
    ("bilgisayar", &["Bil", "gi", "sa", "yar"]),
    ("çiçekler", &["Çi", "çek", "ler"]),
    ("cumhuriyet", &["Cum", "hu", "ri", "yet"]),
    // single syllable
    ("flüt", &["Flüt"]),
    ("spor", &["Spor"]),
    ("tren", &["Tren"]),
    ("plan", &["Plan"]),
    ("krem", &["Krem"]),
    ("gres", &["Gres"]),
    ("fren", &["Fren"]),
    ("pres", &["Pres"]),
    ("kral", &["Kral"]),
    ("gram", &["Gram"]),
    ("tram", &["Tram"]),
    ("frak", &["Frak"]),
    ("prim", &["Prim"]),
    ("trim", &["Trim"]),
    ("klep", &["Klep"]),
    ("klon", &["Klon"]),
    ("plak", &["Plak"]),
    ("stil", &["Stil"]),
    ("stok", &["Stok"]),
    ("stop", &["Stop"]),
    ("grup", &["Grup"]),
    ("bluz", &["Bluz"]),
    ("plus", &["Plus"]),
    ("prens", &["Prens"]),
    ("trans", &["Trans"]),
    ("stres", &["Stres"]),
];

static KNOWN: LazyLock<HashMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| KNOWN_WORDS.iter().copied().collect());

/// Look up a lowercase word in the known-word table.
pub fn known_syllables(word: &str) -> Option<&'static [&'static str]> {
    KNOWN.get(word).copied()
}

pub fn known_words() -> impl Iterator<Item = (&'static str, &'static [&'static str])> {
    KNOWN_WORDS.iter().copied()
}

/// Split a word into syllables.
///
/// Never returns an empty vector: if segmentation yields nothing, the whole
/// (normalized) word comes back as a single syllable. Each whitespace
/// separated part is split on its own and the whitespace itself is dropped.
/// The first character of the first syllable is uppercased with the Turkish
/// rule, the rest is lowercase.
pub fn syllabify(word: &str) -> Vec<String> {
    let normalized = turkish::to_lowercase(word.trim());

    if let Some(known) = known_syllables(&normalized) {
        return known.iter().map(|s| s.to_string()).collect();
    }

    let mut syllables: Vec<String> = normalized.split_whitespace().flat_map(split_part).collect();

    if syllables.is_empty() {
        syllables.push(normalized);
    }

    if let Some(first) = syllables.first_mut() {
        *first = turkish::capitalize(first);
    }
    syllables
}

/// Heuristic split of a single lowercase part without whitespace.
fn split_part(part: &str) -> Vec<String> {
    let chars: Vec<char> = part.chars().collect();
    let mut syllables: Vec<String> = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        current.push(c);

        let is_last = i + 1 == chars.len();
        if !is_last && breaks_after(window(&chars, i)) {
            syllables.push(std::mem::take(&mut current));
        }
    }
    syllables.push(current);
    syllables.retain(|s| !s.is_empty());
    syllables
}

/// Current character and the three after it.
fn window(chars: &[char], i: usize) -> [Option<char>; 4] {
    [
        chars.get(i).copied(),
        chars.get(i + 1).copied(),
        chars.get(i + 2).copied(),
        chars.get(i + 3).copied(),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Class {
    Vowel,
    Consonant,
}

fn class(c: Option<char>) -> Option<Class> {
    c.map(|c| {
        if turkish::is_vowel(c) {
            Class::Vowel
        } else {
            Class::Consonant
        }
    })
}

/// Whether the current syllable closes after `window[0]`.
fn breaks_after(window: [Option<char>; 4]) -> bool {
    use Class::{Consonant as C, Vowel as V};

    match window.map(class) {
        // a-ra: V | C V
        [Some(V), Some(C), Some(V), _] => true,
        // ar-ka: V C C V keeps the vowel open until the cluster splits
        [Some(V), Some(C), Some(C), Some(V)] => false,
        // ar-ka: C | C V
        [Some(C), Some(C), Some(V), _] => true,
        _ => false,
    }
}
