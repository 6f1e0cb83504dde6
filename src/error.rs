// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

// miette's Diagnostic derive generates code that triggers this false positive
#![allow(unused_assignments)]

use miette::Diagnostic;
use thiserror::Error;

use crate::domain::RejectReason;

#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error("'{text}' rejected: {reason}")]
    #[diagnostic(
        code(hecele::safety::rejected),
        help("Only child-friendly words of Turkish letters are accepted")
    )]
    Rejected { text: String, reason: RejectReason },

    #[error("No word given")]
    #[diagnostic(code(hecele::input::empty))]
    EmptyInput,

    #[error("No syllables given")]
    #[diagnostic(
        code(hecele::input::no_syllables),
        help("Separate syllables with commas, e.g. --syllables \"An,ne\"")
    )]
    NoSyllables,

    #[error("Syllables '{syllables}' do not spell '{word}'")]
    #[diagnostic(
        code(hecele::input::mismatch),
        help("Run `hecele split <word>` for a suggestion")
    )]
    SyllableMismatch { word: String, syllables: String },

    #[error("No word at position {position}; the list has {len}")]
    #[diagnostic(code(hecele::list::position), help("See positions with: hecele list"))]
    IndexOutOfRange { position: usize, len: usize },

    #[error("No usable voice found")]
    #[diagnostic(
        code(hecele::speech::no_voice),
        help("Install a Turkish voice for espeak-ng or set speech.voice in the config")
    )]
    NoVoice,

    #[error("Speech error: {0}")]
    #[diagnostic(
        code(hecele::speech::error),
        help("Check that the speech program (speech.command) is installed")
    )]
    Speech(String),

    #[error("Storage error: {0}")]
    #[diagnostic(code(hecele::storage::error))]
    Storage(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(hecele::config::error))]
    Config(String),

    #[error("Operation cancelled by user")]
    Cancelled,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("Dialog error: {0}")]
    Dialog(String),
}

impl From<dialoguer::Error> for Error {
    fn from(e: dialoguer::Error) -> Self {
        Error::Dialog(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
