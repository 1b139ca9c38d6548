use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, debug_span};

use super::bridge::{BridgeDictionary, BridgeEntry};
use super::DictError;

pub(super) const MAGIC: &[u8; 4] = b"MNDX";
pub(super) const VERSION: u8 = 1;
const HEADER_SIZE: usize = 5; // 4 bytes magic + 1 byte version

/// Reserved metadata key in the JSON artifact; never treated as a code.
pub const LICENSE_KEY: &str = "_license";

#[derive(Serialize, Deserialize)]
struct ArtifactData {
    license: Option<String>,
    entries: Vec<BridgeEntry>,
}

impl BridgeDictionary {
    /// Parse the JSON artifact: an object of bridge code → array of words.
    pub fn from_json(json: &str) -> Result<Self, DictError> {
        let raw: BTreeMap<String, Value> = serde_json::from_str(json)?;
        let mut license = None;
        let mut entries = Vec::with_capacity(raw.len());

        for (code, value) in raw {
            if code == LICENSE_KEY {
                debug!("skipping metadata key {LICENSE_KEY}");
                license = value.as_str().map(str::to_string);
                continue;
            }
            let Value::Array(items) = value else {
                return Err(DictError::InvalidEntry {
                    code,
                    reason: "expected an array of words".to_string(),
                });
            };
            let mut words = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::String(word) => words.push(word),
                    other => {
                        return Err(DictError::InvalidEntry {
                            code,
                            reason: format!("expected a string, found {other}"),
                        })
                    }
                }
            }
            entries.push((code, words));
        }

        Ok(Self::from_entries(entries)?.with_license(license))
    }

    /// Serialize back to the JSON artifact shape.
    pub fn to_json(&self) -> Result<String, DictError> {
        let mut map = serde_json::Map::new();
        if let Some(license) = self.license() {
            map.insert(LICENSE_KEY.to_string(), Value::String(license.to_string()));
        }
        for entry in self.entries() {
            let words = entry.words.iter().cloned().map(Value::String).collect();
            map.insert(entry.code.clone(), Value::Array(words));
        }
        Ok(serde_json::to_string_pretty(&Value::Object(map))?)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, DictError> {
        let data = ArtifactData {
            license: self.license().map(str::to_string),
            entries: self.entries().to_vec(),
        };
        let body = bincode::serialize(&data).map_err(DictError::Serialize)?;
        let mut buf = Vec::with_capacity(HEADER_SIZE + body.len());
        buf.extend_from_slice(MAGIC);
        buf.push(VERSION);
        buf.extend_from_slice(&body);
        Ok(buf)
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self, DictError> {
        if data.len() < HEADER_SIZE {
            return Err(DictError::InvalidHeader);
        }
        if &data[..4] != MAGIC {
            return Err(DictError::InvalidMagic);
        }
        if data[4] != VERSION {
            return Err(DictError::UnsupportedVersion(data[4]));
        }
        let artifact: ArtifactData =
            bincode::deserialize(&data[HEADER_SIZE..]).map_err(DictError::Deserialize)?;
        // Codes are validated again on load.
        let pairs = artifact.entries.into_iter().map(|e| (e.code, e.words));
        Ok(Self::from_entries(pairs)?.with_license(artifact.license))
    }

    /// Open a compiled (`MNDX`) or JSON artifact, detected by magic bytes.
    pub fn open(path: &Path) -> Result<Self, DictError> {
        let _span = debug_span!("dict_open", path = %path.display()).entered();
        let data = fs::read(path)?;
        let dict = if data.starts_with(MAGIC) {
            Self::from_bytes(&data)?
        } else {
            let text = String::from_utf8(data).map_err(|e| {
                DictError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
            })?;
            Self::from_json(&text)?
        };
        let (codes, words) = dict.stats();
        debug!(codes, words, "dictionary loaded");
        Ok(dict)
    }

    /// Write the compiled binary form.
    pub fn save(&self, path: &Path) -> Result<(), DictError> {
        fs::write(path, self.to_bytes()?)?;
        Ok(())
    }
}
