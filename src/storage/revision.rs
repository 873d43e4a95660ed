// Revision - one committed version of a key

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// One immutable, timestamped version of a key's value
///
/// A `None` value marks a tombstone (the key was deleted by this commit).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Revision {
    tx_id: String,
    sequence: u64,
    timestamp: DateTime<Utc>,
    value: Option<Vec<u8>>,
}

impl Revision {
    pub fn new(
        tx_id: String,
        sequence: u64,
        timestamp: DateTime<Utc>,
        value: Option<Vec<u8>>,
    ) -> Self {
        Self {
            tx_id,
            sequence,
            timestamp,
            value,
        }
    }

    /// Identifier of the commit that produced this revision
    pub fn tx_id(&self) -> &str {
        &self.tx_id
    }

    /// Position of this revision in the key's commit order (starts at 1)
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Store-assigned commit time
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Stored bytes, or None for a tombstone
    pub fn value(&self) -> Option<&[u8]> {
        self.value.as_deref()
    }

    pub fn is_delete(&self) -> bool {
        self.value.is_none()
    }

    /// Derive a commit id (hex SHA256 over everything the commit wrote)
    pub(crate) fn compute_tx_id(
        key: &[u8],
        sequence: u64,
        commit: u64,
        timestamp_nanos: i64,
        value: Option<&[u8]>,
    ) -> String {
        let mut hasher = Sha256::new();
        hasher.update(b"revision:");
        hasher.update((key.len() as u32).to_be_bytes());
        hasher.update(key);
        hasher.update(sequence.to_be_bytes());
        hasher.update(commit.to_be_bytes());
        hasher.update(timestamp_nanos.to_be_bytes());
        match value {
            Some(bytes) => {
                hasher.update([1u8]);
                hasher.update(bytes);
            }
            None => hasher.update([0u8]),
        }
        hex::encode(hasher.finalize())
    }

    pub(crate) fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        let stored = StoredRevision {
            tx_id: self.tx_id.clone(),
            sequence: self.sequence,
            timestamp_nanos: self.timestamp.timestamp_nanos_opt().unwrap_or(i64::MAX),
            value: self.value.clone(),
        };
        postcard::to_allocvec(&stored)
    }

    pub(crate) fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        let stored: StoredRevision = postcard::from_bytes(bytes)?;
        Ok(Self {
            tx_id: stored.tx_id,
            sequence: stored.sequence,
            timestamp: DateTime::from_timestamp_nanos(stored.timestamp_nanos),
            value: stored.value,
        })
    }
}

/// On-disk envelope of a revision
#[derive(Serialize, Deserialize)]
struct StoredRevision {
    tx_id: String,
    sequence: u64,
    timestamp_nanos: i64,
    value: Option<Vec<u8>>,
}
