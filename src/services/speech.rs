// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use std::borrow::Cow;

use tokio::process::Command;
use tracing::debug;

use crate::config::SpeechConfig;
use crate::error::{Error, Result};

/// espeak-ng defaults that the relative settings scale.
const BASE_WPM: f32 = 175.0;
const BASE_PITCH: f32 = 50.0;
const BASE_AMPLITUDE: f32 = 100.0;
/// Syllables are spoken a little slower than the configured rate.
const RATE_FACTOR: f32 = 0.9;

/// Consonants whose `Ce` syllable gets a lengthened vowel.
const LENGTHEN_E_AFTER: &str = "mdnstlkrbfghjvz";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voice {
    pub name: String,
    pub lang: String,
}

impl Voice {
    pub fn is_turkish(&self) -> bool {
        self.lang.to_lowercase().starts_with("tr")
    }

    fn preference(&self) -> u8 {
        let name = self.name.to_lowercase();
        if name.contains("emel") {
            0
        } else if name.contains("zira") {
            1
        } else {
            2
        }
    }

    /// Name with a hint for the voices known to read Turkish well.
    pub fn label(&self) -> String {
        if !self.is_turkish() {
            return format!("{} ({})", self.name, self.lang);
        }
        match self.preference() {
            0 => format!("{} (recommended)", self.name),
            1 => format!("{} (good quality)", self.name),
            _ => self.name.clone(),
        }
    }
}

/// Parse the table printed by `espeak-ng --voices`.
///
/// ```text
/// Pty Language       Age/Gender VoiceName          File        Other Languages
///  5  tr              --/M      Turkish            trk/tr
/// ```
pub fn parse_voice_list(output: &str) -> Vec<Voice> {
    output
        .lines()
        .skip(1)
        .filter_map(|line| {
            let cols: Vec<&str> = line.split_whitespace().collect();
            match cols.as_slice() {
                [_, lang, _, name, ..] => Some(Voice {
                    name: (*name).to_string(),
                    lang: (*lang).to_string(),
                }),
                _ => None,
            }
        })
        .collect()
}

/// Turkish voices first, preferred names at the top; otherwise stable.
pub fn rank_voices(mut voices: Vec<Voice>) -> Vec<Voice> {
    voices.sort_by_key(|v| (!v.is_turkish(), v.preference()));
    voices
}

/// Pick the configured voice (by name or language), else the best Turkish one.
pub fn choose_voice<'a>(ranked: &'a [Voice], preferred: Option<&str>) -> Option<&'a Voice> {
    if let Some(wanted) = preferred {
        let wanted = wanted.to_lowercase();
        if let Some(v) = ranked
            .iter()
            .find(|v| v.name.to_lowercase() == wanted || v.lang.to_lowercase() == wanted)
        {
            return Some(v);
        }
    }
    ranked.iter().find(|v| v.is_turkish())
}

/// Spell a syllable so a Turkish voice pronounces it clearly.
///
/// Lone `e` and consonant + `e` syllables are read clipped, so the vowel is
/// lengthened. Other voices get the text unchanged.
pub fn correct_pronunciation<'a>(text: &'a str, voice: &Voice) -> Cow<'a, str> {
    if !voice.is_turkish() {
        return Cow::Borrowed(text);
    }

    let chars: Vec<char> = text.chars().collect();
    match chars.as_slice() {
        ['E'] => Cow::Borrowed("Eee"),
        ['e'] => Cow::Borrowed("eee"),
        [c, 'e'] if LENGTHEN_E_AFTER.contains(c.to_ascii_lowercase()) => {
            let corrected = format!("{text}e");
            debug!(from = text, to = %corrected, "pronunciation corrected");
            Cow::Owned(corrected)
        }
        _ => Cow::Borrowed(text),
    }
}

/// Command-line arguments for one utterance.
pub fn speech_args(text: &str, voice: &Voice, config: &SpeechConfig) -> Vec<String> {
    let wpm = (BASE_WPM * config.rate * RATE_FACTOR).round().max(1.0);
    let pitch = (BASE_PITCH * config.pitch).round().clamp(0.0, 99.0);
    let amplitude = (BASE_AMPLITUDE * config.volume).round().clamp(0.0, 200.0);

    vec![
        "-v".into(),
        voice.name.clone(),
        "-s".into(),
        format!("{wpm}"),
        "-p".into(),
        format!("{pitch}"),
        "-a".into(),
        format!("{amplitude}"),
        text.to_string(),
    ]
}

/// Speaks through an espeak-compatible program.
pub struct Speaker {
    config: SpeechConfig,
}

impl Speaker {
    pub fn new(config: &SpeechConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Available voices, ranked.
    pub async fn voices(&self) -> Result<Vec<Voice>> {
        let output = Command::new(&self.config.command)
            .arg("--voices")
            .output()
            .await
            .map_err(|e| Error::Speech(format!("{}: {}", self.config.command, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Speech(stderr.trim().to_string()));
        }

        let voices = rank_voices(parse_voice_list(&String::from_utf8_lossy(&output.stdout)));
        debug!(
            total = voices.len(),
            turkish = voices.iter().filter(|v| v.is_turkish()).count(),
            "voices loaded"
        );
        Ok(voices)
    }

    pub async fn selected_voice(&self) -> Result<Voice> {
        let voices = self.voices().await?;
        choose_voice(&voices, self.config.voice.as_deref())
            .cloned()
            .ok_or(Error::NoVoice)
    }

    pub async fn speak(&self, text: &str) -> Result<()> {
        let voice = self.selected_voice().await?;
        self.speak_with(text, &voice).await
    }

    pub async fn speak_with(&self, text: &str, voice: &Voice) -> Result<()> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(());
        }

        let spoken = correct_pronunciation(text, voice);
        let status = Command::new(&self.config.command)
            .args(speech_args(&spoken, voice, &self.config))
            .status()
            .await
            .map_err(|e| Error::Speech(format!("{}: {}", self.config.command, e)))?;

        if !status.success() {
            return Err(Error::Speech(format!(
                "{} exited with {}",
                self.config.command, status
            )));
        }
        Ok(())
    }
}
