use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::Peg;
use crate::system::MnemonicSystem;

#[derive(Debug, thiserror::Error)]
pub enum PegStoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no peg with id {0}")]
    NotFound(u64),
}

/// One persisted peg.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PegRecord {
    pub id: u64,
    pub digits: String,
    pub words: Vec<String>,
    pub system: MnemonicSystem,
    /// Unix seconds.
    pub created_at: i64,
}

impl PegRecord {
    pub fn peg(&self) -> Peg {
        Peg::new(self.digits.clone(), self.words.clone(), self.system)
    }
}

/// File-backed list of pegs, stored as a JSON array of records.
#[derive(Debug, Default)]
pub struct PegStore {
    records: Vec<PegRecord>,
}

impl PegStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, PegStoreError> {
        let records: Vec<PegRecord> = serde_json::from_str(json)?;
        Ok(Self { records })
    }

    pub fn to_json(&self) -> Result<String, PegStoreError> {
        Ok(serde_json::to_string_pretty(&self.records)?)
    }

    /// Open from file, returning an empty store if the file doesn't exist.
    pub fn open(path: &Path) -> Result<Self, PegStoreError> {
        match fs::read_to_string(path) {
            Ok(text) => Self::from_json(&text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Atomic write: write to .tmp then rename.
    pub fn save(&self, path: &Path) -> Result<(), PegStoreError> {
        let json = self.to_json()?;
        let tmp = path.with_extension("tmp");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&tmp, json)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }

    /// Add a peg. Returns `None` if the same peg is already stored.
    pub fn add(
        &mut self,
        digits: &str,
        words: Vec<String>,
        system: MnemonicSystem,
    ) -> Option<&PegRecord> {
        let words: Vec<String> = words
            .into_iter()
            .map(|w| w.trim().to_string())
            .filter(|w| !w.is_empty())
            .collect();
        let exists = self
            .records
            .iter()
            .any(|r| r.system == system && r.digits == digits && r.words == words);
        if exists {
            return None;
        }
        let id = self.records.iter().map(|r| r.id).max().map_or(1, |m| m + 1);
        self.records.push(PegRecord {
            id,
            digits: digits.to_string(),
            words,
            system,
            created_at: time::OffsetDateTime::now_utc().unix_timestamp(),
        });
        self.records.last()
    }

    pub fn remove(&mut self, id: u64) -> Result<PegRecord, PegStoreError> {
        let pos = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or(PegStoreError::NotFound(id))?;
        Ok(self.records.remove(pos))
    }

    /// Records in insertion order.
    pub fn records(&self) -> &[PegRecord] {
        &self.records
    }

    /// Pegs for the engine, in insertion order.
    pub fn pegs(&self) -> Vec<Peg> {
        self.records.iter().map(PegRecord::peg).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
