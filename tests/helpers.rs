// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use std::cell::{Cell, RefCell};

use hecele::domain::{Origin, WordEntry};
use hecele::error::{Error, Result};
use hecele::services::storage::WordStore;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// In-memory store that records every save.
#[allow(dead_code)]
#[derive(Default)]
pub struct MemoryStore {
    pub stored: RefCell<Option<Vec<WordEntry>>>,
    pub saves: Cell<usize>,
}

#[allow(dead_code)]
impl MemoryStore {
    pub fn with(words: Vec<WordEntry>) -> Self {
        Self {
            stored: RefCell::new(Some(words)),
            saves: Cell::new(0),
        }
    }

    pub fn saved_words(&self) -> Vec<String> {
        self.stored
            .borrow()
            .as_ref()
            .map(|w| w.iter().map(|e| e.word.clone()).collect())
            .unwrap_or_default()
    }
}

impl WordStore for MemoryStore {
    fn load(&self) -> Result<Option<Vec<WordEntry>>> {
        Ok(self.stored.borrow().clone())
    }

    fn save(&self, words: &[WordEntry]) -> Result<()> {
        *self.stored.borrow_mut() = Some(words.to_vec());
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}

/// Store whose reads and writes always fail.
#[allow(dead_code)]
pub struct BrokenStore;

impl WordStore for BrokenStore {
    fn load(&self) -> Result<Option<Vec<WordEntry>>> {
        Err(Error::Storage("disk unavailable".into()))
    }

    fn save(&self, _words: &[WordEntry]) -> Result<()> {
        Err(Error::Storage("quota exceeded".into()))
    }
}

#[allow(dead_code)]
pub fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

/// Entry with the given syllables, bypassing validation.
#[allow(dead_code)]
pub fn make_entry(word: &str, syllables: &[&str]) -> WordEntry {
    WordEntry::new(word, syllables.iter().copied(), Origin::Manual)
}
