// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

//! Turkish case mapping.
//!
//! Unicode default case mapping turns `I` into `i` and `İ` into `i̇`
//! (with a combining dot), which is wrong for Turkish. The letters below
//! are mapped explicitly; everything else goes through `char` case mapping.

/// `(uppercase, lowercase)` pairs that must not go through default mapping.
const CASE_PAIRS: &[(char, char)] = &[
    ('I', 'ı'),
    ('İ', 'i'),
    ('Ğ', 'ğ'),
    ('Ü', 'ü'),
    ('Ş', 'ş'),
    ('Ö', 'ö'),
    ('Ç', 'ç'),
];

pub const VOWELS: &[char] = &['a', 'e', 'ı', 'i', 'o', 'ö', 'u', 'ü'];

pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

pub fn lower_char(c: char, out: &mut String) {
    match CASE_PAIRS.iter().find(|(upper, _)| *upper == c) {
        Some(&(_, lower)) => out.push(lower),
        None => out.extend(c.to_lowercase()),
    }
}

pub fn upper_char(c: char, out: &mut String) {
    match CASE_PAIRS.iter().find(|(_, lower)| *lower == c) {
        Some(&(upper, _)) => out.push(upper),
        None => out.extend(c.to_uppercase()),
    }
}

pub fn to_lowercase(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        lower_char(c, &mut out);
    }
    out
}

pub fn to_uppercase(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        upper_char(c, &mut out);
    }
    out
}

/// Uppercase the first character and lowercase the rest.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut out = String::with_capacity(s.len());
    upper_char(first, &mut out);
    for c in chars {
        lower_char(c, &mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dotted_and_dotless_i_round_trip() {
        assert_eq!(to_lowercase("IİIİ"), "ıiıi");
        assert_eq!(to_uppercase("ıiıi"), "IİIİ");
    }

    #[test]
    fn diacritics_map_both_ways() {
        assert_eq!(to_lowercase("ĞÜŞÖÇ"), "ğüşöç");
        assert_eq!(to_uppercase("ğüşöç"), "ĞÜŞÖÇ");
    }

    #[test]
    fn capitalize_uses_turkish_rule() {
        assert_eq!(capitalize("inek"), "İnek");
        assert_eq!(capitalize("ırmak"), "Irmak");
        assert_eq!(capitalize("ÇİÇEK"), "Çiçek");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn vowels() {
        assert!("aeıioöuü".chars().all(is_vowel));
        assert!(!"bcçdfgğhjklmnprsştvyz".chars().any(is_vowel));
    }
}
