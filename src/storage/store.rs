// SledStore - Persistent versioned key-value storage using sled
//
// Keeps three trees:
// - state:   key -> current value (absent after a delete)
// - history: len(key) || key || sequence -> revision envelope
// - heads:   key -> sequence of the latest revision

use crate::storage::{HistoryCursor, Revision};
use chrono::Utc;
use sled::transaction::{ConflictableTransactionError, TransactionError};
use sled::Transactional;
use std::path::Path;
use thiserror::Error;

/// Tree names
mod trees {
    pub const STATE: &[u8] = b"state";
    pub const HISTORY: &[u8] = b"history";
    pub const HEADS: &[u8] = b"heads";
}

/// Errors from storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to open database: {0}")]
    OpenFailed(String),

    #[error("Database operation failed: {0}")]
    DatabaseError(String),

    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    #[error("Flush failed: {0}")]
    FlushFailed(String),
}

impl From<sled::Error> for StoreError {
    fn from(err: sled::Error) -> Self {
        StoreError::DatabaseError(err.to_string())
    }
}

/// A key-value store that records every write as a revision
///
/// Commits to one key are totally ordered; `history_of` yields them in that order.
pub trait StateStore {
    /// Write `value` under `key`, replacing any current value
    fn put(&self, key: &str, value: &[u8]) -> Result<Revision, StoreError>;

    /// Write `value` only if `key` holds no live value
    ///
    /// Returns None, without writing, when the key is already taken.
    fn put_if_absent(&self, key: &str, value: &[u8]) -> Result<Option<Revision>, StoreError>;

    /// Current value of `key`
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Remove the current value, recording a tombstone revision
    fn delete(&self, key: &str) -> Result<Revision, StoreError>;

    /// All revisions of `key`, oldest first
    fn history_of(&self, key: &str) -> Result<HistoryCursor, StoreError>;

    /// Make all committed writes durable
    fn flush(&self) -> Result<(), StoreError>;
}

/// Statistics about the storage
#[derive(Clone, Debug)]
pub struct StorageStats {
    /// Number of keys holding a live value
    pub key_count: usize,
    /// Number of revisions across all keys
    pub revision_count: usize,
    /// Approximate disk size in bytes
    pub disk_size_bytes: u64,
}

/// Versioned state store backed by sled
///
/// A write updates the current value, the revision log and the key's head
/// inside a single sled transaction, so they always commit together.
pub struct SledStore {
    db: sled::Db,
    state: sled::Tree,
    history: sled::Tree,
    heads: sled::Tree,
    flush_every_write: bool,
}

impl SledStore {
    /// Open or create a store at the given path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let db = sled::open(path).map_err(|e| StoreError::OpenFailed(e.to_string()))?;
        let state = db.open_tree(trees::STATE)?;
        let history = db.open_tree(trees::HISTORY)?;
        let heads = db.open_tree(trees::HEADS)?;
        Ok(Self {
            db,
            state,
            history,
            heads,
            flush_every_write: false,
        })
    }

    /// Flush to disk after every committed write
    pub fn with_flush_every_write(mut self, enabled: bool) -> Self {
        self.flush_every_write = enabled;
        self
    }

    /// Check if the store holds no live keys
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Get storage statistics
    pub fn stats(&self) -> Result<StorageStats, StoreError> {
        Ok(StorageStats {
            key_count: self.state.len(),
            revision_count: self.history.len(),
            disk_size_bytes: self.db.size_on_disk().unwrap_or(0),
        })
    }

    /// Commit one revision of `key`
    ///
    /// `value == None` writes a tombstone. With `only_if_absent` the commit is
    /// skipped (Ok(None)) when the key already holds a live value.
    fn commit(
        &self,
        key: &str,
        value: Option<&[u8]>,
        only_if_absent: bool,
    ) -> Result<Option<Revision>, StoreError> {
        let commit = self.db.generate_id()?;
        let key_bytes = key.as_bytes();

        let result = (&self.state, &self.history, &self.heads).transaction(
            |(state, history, heads)| {
                if only_if_absent && state.get(key_bytes)?.is_some() {
                    return Ok(None);
                }

                let sequence = match heads.get(key_bytes)? {
                    Some(raw) => decode_sequence(&raw).map_err(ConflictableTransactionError::Abort)? + 1,
                    None => 1,
                };

                let timestamp = Utc::now();
                let nanos = timestamp.timestamp_nanos_opt().unwrap_or(i64::MAX);
                let tx_id = Revision::compute_tx_id(key_bytes, sequence, commit, nanos, value);
                let revision = Revision::new(tx_id, sequence, timestamp, value.map(<[u8]>::to_vec));
                let envelope = revision.to_bytes().map_err(|e| {
                    ConflictableTransactionError::Abort(StoreError::SerializationFailed(
                        e.to_string(),
                    ))
                })?;

                match value {
                    Some(bytes) => {
                        state.insert(key_bytes, bytes)?;
                    }
                    None => {
                        state.remove(key_bytes)?;
                    }
                }
                history.insert(history_key(key_bytes, sequence), envelope)?;
                heads.insert(key_bytes, sequence.to_be_bytes().to_vec())?;

                Ok(Some(revision))
            },
        );

        let revision = result.map_err(|e| match e {
            TransactionError::Abort(err) => err,
            TransactionError::Storage(err) => StoreError::from(err),
        })?;

        if revision.is_some() && self.flush_every_write {
            self.flush()?;
        }
        Ok(revision)
    }
}

impl StateStore for SledStore {
    fn put(&self, key: &str, value: &[u8]) -> Result<Revision, StoreError> {
        self.commit(key, Some(value), false)?.ok_or_else(|| {
            StoreError::DatabaseError(format!("write to {} was not committed", key))
        })
    }

    fn put_if_absent(&self, key: &str, value: &[u8]) -> Result<Option<Revision>, StoreError> {
        self.commit(key, Some(value), true)
    }

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.state.get(key.as_bytes())?.map(|v| v.to_vec()))
    }

    fn delete(&self, key: &str) -> Result<Revision, StoreError> {
        self.commit(key, None, false)?.ok_or_else(|| {
            StoreError::DatabaseError(format!("delete of {} was not committed", key))
        })
    }

    fn history_of(&self, key: &str) -> Result<HistoryCursor, StoreError> {
        let scan = self
            .history
            .scan_prefix(history_prefix(key.as_bytes()))
            .map(|entry| {
                let (_, envelope) = entry?;
                Revision::from_bytes(&envelope)
                    .map_err(|e| StoreError::DeserializationFailed(e.to_string()))
            });
        Ok(HistoryCursor::new(key, scan))
    }

    fn flush(&self) -> Result<(), StoreError> {
        self.db
            .flush()
            .map_err(|e| StoreError::FlushFailed(e.to_string()))?;
        Ok(())
    }
}

/// Length-prefixed key, so no key's prefix scan can reach another key's revisions
fn history_prefix(key: &[u8]) -> Vec<u8> {
    let mut prefix = Vec::with_capacity(4 + key.len());
    prefix.extend_from_slice(&(key.len() as u32).to_be_bytes());
    prefix.extend_from_slice(key);
    prefix
}

/// Big-endian sequence suffix keeps sled's byte order equal to commit order
fn history_key(key: &[u8], sequence: u64) -> Vec<u8> {
    let mut full = history_prefix(key);
    full.extend_from_slice(&sequence.to_be_bytes());
    full
}

fn decode_sequence(raw: &[u8]) -> Result<u64, StoreError> {
    let bytes: [u8; 8] = raw
        .try_into()
        .map_err(|_| StoreError::DeserializationFailed("Invalid head sequence length".to_string()))?;
    Ok(u64::from_be_bytes(bytes))
}
