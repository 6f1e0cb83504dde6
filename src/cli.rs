// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

#[derive(Parser, Debug, Default)]
#[command(name = "hecele")]
#[command(version)]
#[command(about = "Turkish reading helper with colored syllables", long_about = None)]
pub struct Cli {
    /// Word list file
    #[arg(long, global = true, env = "HECELE_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Speech voice name or language (e.g. "tr")
    #[arg(long, global = true)]
    pub voice: Option<String>,

    /// Speech rate (0.1-2.0)
    #[arg(long, global = true)]
    pub rate: Option<f32>,

    /// Answer yes to every confirmation
    #[arg(short = 'y', long, global = true)]
    pub yes: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(clap::Subcommand, Debug, Clone)]
pub enum Commands {
    /// Show every word with colored syllables
    Show,
    /// List words with their positions
    List,
    /// Add a word
    Add {
        word: String,
        /// Comma-separated syllables; split automatically when omitted
        #[arg(short, long)]
        syllables: Option<String>,
        /// Add even if the word is already in the list
        #[arg(long)]
        allow_duplicate: bool,
    },
    /// Suggest syllables for a word
    Split { word: String },
    /// Check whether a word and its syllables are acceptable
    Check { word: String },
    /// Delete the word at a position (see `list`)
    Delete { position: usize },
    /// Replace the list with the default words
    Reset,
    /// Delete every word
    Clear,
    /// Replace the list with random words
    Random {
        /// How many words to generate
        #[arg(short, long)]
        count: Option<usize>,
    },
    /// Save the list now
    Save,
    /// Speak a text
    Say { text: String },
    /// Pick words and syllables to hear them
    Practice,
    /// List speech voices
    Voices,
    /// Show current configuration
    Config,
    /// Initialize config file
    Init,
    /// Print shell completions
    Completions { shell: Shell },
}
