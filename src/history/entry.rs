use crate::asset::{Asset, AssetCodec};
use crate::storage::Revision;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Content of an asset at one revision
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Snapshot {
    /// The stored record decoded cleanly
    Asset(Asset),
    /// The revision deleted the key
    Tombstone,
    /// Bytes that are not an asset record, kept verbatim
    Undecodable(Vec<u8>),
}

impl Snapshot {
    fn from_value(value: Option<&[u8]>) -> Self {
        match value {
            None => Snapshot::Tombstone,
            Some(bytes) => match AssetCodec::decode(bytes) {
                Ok(asset) => Snapshot::Asset(asset),
                Err(_) => Snapshot::Undecodable(bytes.to_vec()),
            },
        }
    }

    /// Get the asset, if this revision holds one
    pub fn asset(&self) -> Option<&Asset> {
        match self {
            Snapshot::Asset(asset) => Some(asset),
            _ => None,
        }
    }
}

impl Serialize for Snapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Snapshot::Asset(asset) => asset.serialize(serializer),
            Snapshot::Tombstone => serializer.serialize_none(),
            Snapshot::Undecodable(bytes) => {
                serializer.serialize_str(&format!("<undecodable: {}>", hex::encode(bytes)))
            }
        }
    }
}

/// Read-only projection of one revision
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    tx_id: String,
    timestamp: DateTime<Utc>,
    snapshot: Snapshot,
}

impl HistoryEntry {
    pub fn from_revision(revision: &Revision) -> Self {
        Self {
            tx_id: revision.tx_id().to_string(),
            timestamp: revision.timestamp(),
            snapshot: Snapshot::from_value(revision.value()),
        }
    }

    pub fn tx_id(&self) -> &str {
        &self.tx_id
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Fixed textual form of the commit time (RFC 3339, UTC, nanoseconds)
    pub fn timestamp_text(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Nanos, true)
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn is_delete(&self) -> bool {
        matches!(self.snapshot, Snapshot::Tombstone)
    }
}

impl Serialize for HistoryEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut entry = serializer.serialize_struct("HistoryEntry", 4)?;
        entry.serialize_field("TxId", &self.tx_id)?;
        entry.serialize_field("Timestamp", &self.timestamp_text())?;
        entry.serialize_field("IsDelete", &self.is_delete())?;
        entry.serialize_field("Value", &self.snapshot)?;
        entry.end()
    }
}
