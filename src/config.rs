// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use directories::ProjectDirs;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::cli::Cli;
use crate::error::{Error, Result};

/// Speech synthesis settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// espeak-compatible program (default: espeak-ng)
    #[serde(default = "default_speech_command")]
    pub command: String,

    /// Voice name or language; the best Turkish voice when unset
    #[serde(default)]
    pub voice: Option<String>,

    /// Relative speaking rate (0.1-2.0, default 0.7)
    #[serde(default = "default_rate")]
    pub rate: f32,

    /// Relative pitch (0.0-2.0, default 1.1)
    #[serde(default = "default_pitch")]
    pub pitch: f32,

    /// Volume (0.0-1.0, default 0.9)
    #[serde(default = "default_volume")]
    pub volume: f32,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            command: default_speech_command(),
            voice: None,
            rate: default_rate(),
            pitch: default_pitch(),
            volume: default_volume(),
        }
    }
}

fn default_speech_command() -> String {
    "espeak-ng".into()
}
fn default_rate() -> f32 {
    0.7
}
fn default_pitch() -> f32 {
    1.1
}
fn default_volume() -> f32 {
    0.9
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Word list location (default: <data dir>/hecele/words.json)
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// Words produced by `random` (default 10)
    #[serde(default = "default_random_count")]
    pub random_count: usize,

    /// A stored list shorter than this is replaced by the defaults (default 3)
    #[serde(default = "default_min_words")]
    pub min_words: usize,

    #[serde(default)]
    pub speech: SpeechConfig,
}

fn default_random_count() -> usize {
    10
}
fn default_min_words() -> usize {
    3
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: None,
            random_count: default_random_count(),
            min_words: default_min_words(),
            speech: SpeechConfig::default(),
        }
    }
}

impl Config {
    /// Load with priority: CLI > ENV > user config > project config > defaults
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        // Project-level config (.hecele.toml in the working directory)
        if let Ok(cwd) = std::env::current_dir() {
            let project_config = cwd.join(".hecele.toml");
            if project_config.exists() {
                figment = figment.merge(Toml::file(&project_config));
            }
        }

        if let Some(path) = Self::config_path() {
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
            }
        }

        // HECELE_RANDOM_COUNT, HECELE_SPEECH__VOICE, ...
        figment = figment.merge(Env::prefixed("HECELE_").split("__"));

        let mut config: Config = figment
            .extract()
            .map_err(|e| Error::Config(e.to_string()))?;

        config.apply_cli(cli);
        config.validate()?;
        Ok(config)
    }

    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "hecele").map(|dirs| dirs.config_dir().to_path_buf())
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("config.toml"))
    }

    /// Where the word list lives.
    pub fn data_path(&self) -> Result<PathBuf> {
        if let Some(ref path) = self.data_file {
            return Ok(path.clone());
        }
        ProjectDirs::from("", "", "hecele")
            .map(|dirs| dirs.data_dir().join("words.json"))
            .ok_or_else(|| Error::Config("Cannot determine data directory".into()))
    }

    fn apply_cli(&mut self, cli: &Cli) {
        if let Some(ref path) = cli.data_file {
            self.data_file = Some(path.clone());
        }
        if let Some(ref voice) = cli.voice {
            self.speech.voice = Some(voice.clone());
        }
        if let Some(rate) = cli.rate {
            self.speech.rate = rate;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=100).contains(&self.random_count) {
            return Err(Error::Config(format!(
                "random_count must be 1–100, got {}",
                self.random_count
            )));
        }

        if self.min_words > 100 {
            return Err(Error::Config(format!(
                "min_words must be 0–100, got {}",
                self.min_words
            )));
        }

        if self.speech.command.trim().is_empty() {
            return Err(Error::Config("speech.command cannot be empty".into()));
        }

        if !(0.1..=2.0).contains(&self.speech.rate) {
            return Err(Error::Config(format!(
                "speech.rate must be 0.1–2.0, got {}",
                self.speech.rate
            )));
        }

        if !(0.0..=2.0).contains(&self.speech.pitch) {
            return Err(Error::Config(format!(
                "speech.pitch must be 0.0–2.0, got {}",
                self.speech.pitch
            )));
        }

        if !(0.0..=1.0).contains(&self.speech.volume) {
            return Err(Error::Config(format!(
                "speech.volume must be 0.0–1.0, got {}",
                self.speech.volume
            )));
        }

        Ok(())
    }

    /// Create default config file with owner-only permissions
    pub fn create_default() -> Result<PathBuf> {
        let Some(dir) = Self::config_dir() else {
            return Err(Error::Config("Cannot determine config directory".into()));
        };

        fs::create_dir_all(&dir)?;

        let path = dir.join("config.toml");
        let content = r#"# hecele configuration

# Word list file (default: platform data directory)
# data_file = "/home/me/words.json"

# Words created by `hecele random`
random_count = 10

# A saved list with fewer words than this is replaced by the defaults
min_words = 3

[speech]
# espeak-compatible speech program
command = "espeak-ng"

# Voice name or language; the best Turkish voice is used when unset
# voice = "tr"

# Relative speaking rate (0.1-2.0)
rate = 0.7

# Relative pitch (0.0-2.0)
pitch = 1.1

# Volume (0.0-1.0)
volume = 0.9
"#;

        fs::write(&path, content)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&path, perms)?;
        }

        Ok(path)
    }
}
