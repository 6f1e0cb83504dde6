// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use rand::Rng;
use tracing::{debug, info, warn};

use super::selector::{self, WORD_POOL};
use super::storage::WordStore;
use super::{safety, syllabifier, turkish};
use crate::domain::{Origin, RejectReason, WordEntry};
use crate::error::{Error, Result};

/// Words shown on first start and after a reset.
pub const DEFAULT_WORDS: &[&str] = &["Anne", "Baba", "Efe", "Okul", "Kitap", "Defter"];

pub fn default_entries() -> Vec<WordEntry> {
    DEFAULT_WORDS
        .iter()
        .map(|w| WordEntry::new(*w, syllabifier::syllabify(w), Origin::Default))
        .collect()
}

/// Split comma-separated syllable text, dropping blanks.
pub fn parse_syllables(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Whether the syllables spell `word`, ignoring case and whitespace.
pub fn spells_word<S: AsRef<str>>(word: &str, syllables: &[S]) -> bool {
    let strip = |s: &str| -> String {
        turkish::to_lowercase(s)
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect()
    };
    let joined: String = syllables.iter().map(|s| strip(s.as_ref())).collect();
    strip(word) == joined
}

/// The in-memory word list, saved through a [`WordStore`] after every change.
///
/// A failed save never fails the operation; it is kept as a warning for the
/// caller to show once.
pub struct WordBook<S: WordStore> {
    words: Vec<WordEntry>,
    store: S,
    save_warning: Option<String>,
}

impl<S: WordStore> WordBook<S> {
    /// Load from `store`, falling back to the defaults when nothing usable is
    /// stored or fewer than `min_words` entries exist, then re-check every
    /// entry against the current blocklists.
    pub fn open<R: Rng + ?Sized>(store: S, min_words: usize, rng: &mut R) -> Self {
        let loaded = match store.load() {
            Ok(Some(words)) if !words.is_empty() => Some(words),
            Ok(_) => None,
            Err(e) => {
                warn!(error = %e, "could not load word list, starting from defaults");
                None
            }
        };

        let mut book = Self {
            words: Vec::new(),
            store,
            save_warning: None,
        };

        match loaded {
            Some(words) if words.len() >= min_words => book.words = words,
            Some(words) => {
                info!(count = words.len(), min_words, "too few words, loading defaults");
                book.reset_to_defaults();
            }
            None => book.reset_to_defaults(),
        }

        book.revalidate(rng);
        book
    }

    /// Wrap already loaded words without touching the store.
    pub fn with_words(store: S, words: Vec<WordEntry>) -> Self {
        Self {
            words,
            store,
            save_warning: None,
        }
    }

    pub fn words(&self) -> &[WordEntry] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Case-insensitive lookup of an existing word.
    pub fn contains(&self, word: &str) -> bool {
        let needle = turkish::to_lowercase(word.trim());
        self.words
            .iter()
            .any(|e| turkish::to_lowercase(&e.word) == needle)
    }

    /// Validate and append a word.
    ///
    /// `syllables` is comma-separated text; when `None` the word is split
    /// automatically. Nothing changes unless every check passes.
    pub fn add(&mut self, word: &str, syllables: Option<&str>) -> Result<&WordEntry> {
        let word = word.trim();
        if word.is_empty() {
            return Err(Error::EmptyInput);
        }

        let result = safety::validate_word(word);
        if let Some(reason) = result.reason {
            return Err(Error::Rejected {
                text: word.to_string(),
                reason,
            });
        }

        let parts = match syllables {
            Some(text) => parse_syllables(text),
            None => syllabifier::syllabify(word),
        };

        for part in &parts {
            if let Some(reason) = safety::validate_syllable(part).reason {
                return Err(Error::Rejected {
                    text: part.clone(),
                    reason,
                });
            }
        }

        if parts.is_empty() {
            return Err(Error::NoSyllables);
        }

        if !spells_word(word, &parts) {
            return Err(Error::SyllableMismatch {
                word: word.to_string(),
                syllables: parts.join("-"),
            });
        }

        self.words.push(WordEntry::new(word, parts, Origin::Manual));
        debug!(word, "word added");
        self.persist();
        Ok(&self.words[self.words.len() - 1])
    }

    /// Remove the entry at `index` (0-based).
    pub fn delete(&mut self, index: usize) -> Result<WordEntry> {
        if index >= self.words.len() {
            return Err(Error::IndexOutOfRange {
                position: index.saturating_add(1),
                len: self.words.len(),
            });
        }
        let removed = self.words.remove(index);
        debug!(word = %removed.word, "word deleted");
        self.persist();
        Ok(removed)
    }

    pub fn reset_to_defaults(&mut self) {
        self.words = default_entries();
        self.persist();
    }

    pub fn clear(&mut self) {
        self.words.clear();
        self.persist();
    }

    /// Replace the list with `count` safe random words from the built-in pool.
    pub fn generate_random<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) -> &[WordEntry] {
        self.generate_random_from(WORD_POOL, count, rng)
    }

    pub fn generate_random_from<P, R>(&mut self, pool: &[P], count: usize, rng: &mut R) -> &[WordEntry]
    where
        P: AsRef<str>,
        R: Rng + ?Sized,
    {
        self.words.clear();
        for _ in 0..count {
            self.words.push(selector::select_safe_word(pool, rng));
        }
        self.persist();
        &self.words
    }

    /// Drop entries that no longer pass validation and append a safe random
    /// word for each one. Returns how many were replaced.
    pub fn revalidate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        let before = self.words.len();
        self.words.retain(|entry| {
            match safety::validate_entry(&entry.word, entry.syllable_texts()) {
                Ok(()) => true,
                Err((text, result)) => {
                    warn!(
                        word = %entry.word,
                        offending = text,
                        reason = result.reason.map_or("", RejectReason::code),
                        "stored word failed validation, replacing"
                    );
                    false
                }
            }
        });

        let removed = before - self.words.len();
        if removed > 0 {
            for _ in 0..removed {
                self.words.push(selector::select_safe_word(WORD_POOL, rng));
            }
            info!(removed, "replaced inappropriate words");
            self.persist();
        }
        removed
    }

    /// Save now. Returns whether the write succeeded.
    pub fn save(&mut self) -> bool {
        self.persist()
    }

    /// Take the pending save warning, if any. Each failure is reported once.
    pub fn take_save_warning(&mut self) -> Option<String> {
        self.save_warning.take()
    }

    fn persist(&mut self) -> bool {
        match self.store.save(&self.words) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "word list not saved");
                self.save_warning = Some(e.to_string());
                false
            }
        }
    }
}
