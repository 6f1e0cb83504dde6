// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let word = hecele::validate_word(data);
    let syllable = hecele::validate_syllable(data);
    assert_eq!(word.accepted, word.reason.is_none());
    assert_eq!(syllable.accepted, syllable.reason.is_none());
});
