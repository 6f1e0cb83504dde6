// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

#![no_main]

use hecele::services::turkish;
use libfuzzer_sys::fuzz_target;

fn is_turkish_letter(c: char) -> bool {
    c.is_ascii_lowercase() || "çğıöşü".contains(c)
}

fuzz_target!(|data: &str| {
    let syllables = hecele::syllabify(data);
    assert!(!syllables.is_empty());

    let normalized = turkish::to_lowercase(data.trim());
    if !normalized.is_empty() && normalized.chars().all(is_turkish_letter) {
        assert_eq!(turkish::to_lowercase(&syllables.concat()), normalized);
    }
});
