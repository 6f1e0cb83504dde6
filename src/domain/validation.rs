// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    TooShort,
    DisallowedCharacters,
    Inappropriate,
    TooLong,
    RepeatedCharacters,
    Empty,
}

impl RejectReason {
    pub fn code(self) -> &'static str {
        match self {
            Self::TooShort => "too_short",
            Self::DisallowedCharacters => "disallowed_characters",
            Self::Inappropriate => "inappropriate",
            Self::TooLong => "too_long",
            Self::RepeatedCharacters => "repeated_characters",
            Self::Empty => "empty",
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::TooShort => "too short",
            Self::DisallowedCharacters => "disallowed characters",
            Self::Inappropriate => "inappropriate",
            Self::TooLong => "too long",
            Self::RepeatedCharacters => "repeated characters",
            Self::Empty => "empty",
        };
        f.write_str(msg)
    }
}

/// Outcome of a single word or syllable check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationResult {
    pub accepted: bool,
    pub reason: Option<RejectReason>,
}

impl ValidationResult {
    pub const fn accept() -> Self {
        Self {
            accepted: true,
            reason: None,
        }
    }

    pub const fn reject(reason: RejectReason) -> Self {
        Self {
            accepted: false,
            reason: Some(reason),
        }
    }
}
