// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use serde::{Deserialize, Serialize};

/// Display color of a syllable. Alternates by position within a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyllableColor {
    #[serde(alias = "red")]
    Primary,
    #[serde(alias = "blue")]
    Secondary,
}

impl SyllableColor {
    pub fn for_position(index: usize) -> Self {
        if index % 2 == 0 {
            Self::Primary
        } else {
            Self::Secondary
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Syllable {
    pub text: String,
    pub color: SyllableColor,
}

impl Syllable {
    pub fn new(text: impl Into<String>, position: usize) -> Self {
        Self {
            text: text.into(),
            color: SyllableColor::for_position(position),
        }
    }
}

/// Color a sequence of syllable texts, primary first.
pub fn colorize<I, S>(texts: I) -> Vec<Syllable>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    texts
        .into_iter()
        .enumerate()
        .map(|(i, text)| Syllable::new(text, i))
        .collect()
}
