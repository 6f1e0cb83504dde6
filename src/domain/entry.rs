// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::syllable::{Syllable, colorize};

/// How an entry entered the word list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    #[default]
    Manual,
    Default,
    Random,
}

/// A word together with its colored syllables.
///
/// Entries are never edited in place; the word list replaces them whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordEntry {
    pub word: String,
    pub syllables: Vec<Syllable>,
    /// Seconds since the unix epoch. Older lists stored an RFC 3339 string.
    #[serde(default, deserialize_with = "timestamp_secs")]
    pub date_added: u64,
    #[serde(default)]
    pub origin: Origin,
    /// Set when random selection ran out of attempts and used a vetted word
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub safe_fallback: bool,
}

impl WordEntry {
    pub fn new<I, S>(word: impl Into<String>, syllables: I, origin: Origin) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            word: word.into(),
            syllables: colorize(syllables),
            date_added: now_secs(),
            origin,
            safe_fallback: false,
        }
    }

    pub fn syllable_texts(&self) -> impl Iterator<Item = &str> {
        self.syllables.iter().map(|s| s.text.as_str())
    }

    /// Syllables joined with `-`, e.g. `An-ne`.
    pub fn hyphenated(&self) -> String {
        self.syllable_texts().collect::<Vec<_>>().join("-")
    }
}

fn now_secs() -> u64 {
    u64::try_from(Utc::now().timestamp()).unwrap_or(0)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Timestamp {
    Secs(u64),
    Text(String),
}

/// Accepts unix seconds or an RFC 3339 date such as `2024-05-01T10:00:00.000Z`.
/// Dates before the epoch read as 0.
fn timestamp_secs<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    match Timestamp::deserialize(deserializer)? {
        Timestamp::Secs(secs) => Ok(secs),
        Timestamp::Text(text) => DateTime::parse_from_rfc3339(text.trim())
            .map(|at| u64::try_from(at.timestamp()).unwrap_or(0))
            .map_err(serde::de::Error::custom),
    }
}
