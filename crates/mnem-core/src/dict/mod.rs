//! Bridge-code dictionary storage.
//!
//! `BridgeDictionary` stores bridge code → ranked word lists. Codes are
//! system-agnostic; each lookup translates digits through the active
//! `MnemonicSystem`, so one corpus serves every system.

mod bridge;
mod bridge_io;

pub use bridge::{BridgeDictionary, BridgeEntry, MAX_WORDS_PER_CODE};
pub use bridge_io::LICENSE_KEY;

use std::io;

use crate::system::MnemonicSystem;

/// Error type for loading, building and saving dictionary artifacts.
#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid header (too short)")]
    InvalidHeader,

    #[error("invalid magic bytes (expected MNDX)")]
    InvalidMagic,

    #[error("unsupported version: {0}")]
    UnsupportedVersion(u8),

    #[error("serialization error: {0}")]
    Serialize(bincode::Error),

    #[error("deserialization error: {0}")]
    Deserialize(bincode::Error),

    #[error("invalid bridge code: {0:?}")]
    InvalidCode(String),

    #[error("invalid entry for {code:?}: {reason}")]
    InvalidEntry { code: String, reason: String },
}

/// Words stored under the bridge codes whose digits prefix a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The matched digit prefix.
    pub digits: String,
    /// Codes translating to `digits`, in code order.
    pub codes: Vec<String>,
    /// Words of every code, merged by corpus rank.
    pub words: Vec<String>,
}

pub trait Dictionary: Send + Sync {
    /// Ranked words whose bridge code translates exactly to `digits`.
    fn lookup_exact(&self, digits: &str, system: MnemonicSystem) -> Vec<String>;

    /// One result per non-empty prefix of `digits` that some code
    /// translates to, longest match first.
    fn lookup_prefixes(&self, digits: &str, system: MnemonicSystem) -> Vec<SearchResult>;
}
