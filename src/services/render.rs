// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use std::time::SystemTime;

use console::{StyledObject, style};

use crate::domain::{Syllable, SyllableColor, WordEntry};

pub fn styled_syllable(syllable: &Syllable) -> StyledObject<&str> {
    let s = style(syllable.text.as_str()).bold();
    match syllable.color {
        SyllableColor::Primary => s.red(),
        SyllableColor::Secondary => s.blue(),
    }
}

/// One word card: syllables side by side in alternating colors.
pub fn card(entry: &WordEntry) -> String {
    entry
        .syllables
        .iter()
        .map(|s| styled_syllable(s).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// `Anne (An-ne)`
pub fn list_line(entry: &WordEntry) -> String {
    format!("{} ({})", entry.word, entry.hyphenated())
}

pub fn word_count(count: usize) -> String {
    match count {
        1 => "1 word".to_string(),
        n => format!("{n} words"),
    }
}

/// Human readable age of the last save.
pub fn storage_status(last_saved: Option<SystemTime>) -> String {
    let Some(at) = last_saved else {
        return "not saved yet".to_string();
    };
    let secs = SystemTime::now()
        .duration_since(at)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    match secs {
        0..60 => "last saved just now".to_string(),
        60..3_600 => format!("last saved {} min ago", secs / 60),
        3_600..86_400 => format!("last saved {} h ago", secs / 3_600),
        _ => format!("last saved {} days ago", secs / 86_400),
    }
}
