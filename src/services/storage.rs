// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::domain::WordEntry;
use crate::error::{Error, Result};

/// Persistence for the word list.
pub trait WordStore {
    /// `Ok(None)` means nothing has been saved yet.
    fn load(&self) -> Result<Option<Vec<WordEntry>>>;

    fn save(&self, words: &[WordEntry]) -> Result<()>;

    /// When the list was last written, if known.
    fn last_saved(&self) -> Option<SystemTime> {
        None
    }
}

/// Word list stored as a JSON array, with a `.bak` copy next to it.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn backup_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".bak");
        PathBuf::from(name)
    }

    fn read(path: &Path) -> Result<Vec<WordEntry>> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    fn write_atomic(path: &Path, words: &[WordEntry]) -> Result<()> {
        let dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let tmp = NamedTempFile::new_in(dir)?;
        {
            let mut writer = BufWriter::new(tmp.as_file());
            serde_json::to_writer_pretty(&mut writer, words)?;
            writer.flush()?;
        }
        tmp.persist(path)
            .map_err(|e| Error::Storage(format!("{}: {}", path.display(), e.error)))?;
        Ok(())
    }
}

impl WordStore for JsonFileStore {
    fn load(&self) -> Result<Option<Vec<WordEntry>>> {
        if !self.path.exists() {
            return Ok(None);
        }

        match Self::read(&self.path) {
            Ok(words) => {
                debug!(count = words.len(), path = %self.path.display(), "word list loaded");
                Ok(Some(words))
            }
            Err(e) => {
                let backup = self.backup_path();
                if !backup.exists() {
                    return Err(e);
                }
                warn!(error = %e, "word list unreadable, trying backup");
                Self::read(&backup).map(Some)
            }
        }
    }

    fn save(&self, words: &[WordEntry]) -> Result<()> {
        Self::write_atomic(&self.path, words)?;
        if let Err(e) = Self::write_atomic(&self.backup_path(), words) {
            warn!(error = %e, "backup copy not written");
        }
        debug!(count = words.len(), path = %self.path.display(), "word list saved");
        Ok(())
    }

    fn last_saved(&self) -> Option<SystemTime> {
        fs::metadata(&self.path).and_then(|m| m.modified()).ok()
    }
}
