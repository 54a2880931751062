//! Snapshot persistence for built dictionaries
//!
//! A snapshot is a `bincode` encoding of a small versioned envelope around the
//! word store and indices, so a large word list only has to be ingested once.
//! The byte layout is not a stable format; it only has to round-trip within
//! the same build.

use super::{Dictionary, WordIndex};
use crate::core::WordStore;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

const MAGIC: [u8; 4] = *b"WSVE";
const FORMAT_VERSION: u32 = 1;

/// Errors raised while writing or reading a snapshot
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("snapshot encoding failed: {0}")]
    Codec(#[from] bincode::Error),
    #[error("not a dictionary snapshot")]
    BadMagic,
    #[error("unsupported snapshot version {found}")]
    UnsupportedVersion { found: u32 },
}

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    magic: [u8; 4],
    version: u32,
    store: &'a WordStore,
    index: &'a WordIndex,
}

#[derive(Deserialize)]
struct Envelope {
    magic: [u8; 4],
    version: u32,
    store: WordStore,
    index: WordIndex,
}

impl Envelope {
    fn into_dictionary(self) -> Result<Dictionary, SnapshotError> {
        if self.magic != MAGIC {
            return Err(SnapshotError::BadMagic);
        }
        if self.version != FORMAT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
            });
        }
        Ok(Dictionary {
            store: self.store,
            index: self.index,
        })
    }
}

impl Dictionary {
    fn envelope(&self) -> EnvelopeRef<'_> {
        EnvelopeRef {
            magic: MAGIC,
            version: FORMAT_VERSION,
            store: &self.store,
            index: &self.index,
        }
    }

    /// Encode the dictionary as an opaque snapshot blob
    ///
    /// # Errors
    /// Returns `SnapshotError::Codec` if encoding fails.
    pub fn export_snapshot(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(&self.envelope())?)
    }

    /// Rebuild a dictionary from a blob produced by [`Dictionary::export_snapshot`]
    ///
    /// # Errors
    /// Returns an error if the blob cannot be decoded or carries a foreign
    /// magic tag or version.
    pub fn load_from_snapshot(blob: &[u8]) -> Result<Self, SnapshotError> {
        let envelope: Envelope = bincode::deserialize(blob)?;
        envelope.into_dictionary()
    }

    /// Write a snapshot to `path`, replacing any existing file atomically
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or the file cannot
    /// be written.
    pub fn save_snapshot(&self, path: &Path) -> Result<(), SnapshotError> {
        let parent_dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent_dir)?;

        let temp_file = NamedTempFile::new_in(parent_dir)?;
        {
            let mut writer = BufWriter::new(temp_file.as_file());
            bincode::serialize_into(&mut writer, &self.envelope())?;
            writer.flush()?;
        }
        temp_file.persist(path).map_err(|e| e.error)?;

        info!(path = %path.display(), words = self.len(), "snapshot saved");
        Ok(())
    }

    /// Read a snapshot written by [`Dictionary::save_snapshot`]
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or decoded.
    pub fn load_snapshot(path: &Path) -> Result<Self, SnapshotError> {
        let reader = BufReader::new(File::open(path)?);
        let envelope: Envelope = bincode::deserialize_from(reader)?;
        let dictionary = envelope.into_dictionary()?;

        info!(path = %path.display(), words = dictionary.len(), "snapshot loaded");
        Ok(dictionary)
    }
}
