// AssetRegistry - typed accessor over a StateStore
//
// Encodes assets on the way in, decodes them on the way out, and hands
// history cursors through untouched.

use crate::asset::{Asset, AssetCodec, AssetId};
use crate::storage::{HistoryCursor, Revision, StateStore, StoreError};
use thiserror::Error;

/// Errors from registry operations
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Asset not found: {0}")]
    NotFound(AssetId),

    #[error("Asset already exists: {0}")]
    AlreadyExists(AssetId),

    #[error("Corrupt record for {id}: {reason}")]
    CorruptRecord { id: AssetId, reason: String },

    #[error("State store unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),
}

/// Typed view of assets kept in a state store
pub struct AssetRegistry<S> {
    store: S,
}

impl<S: StateStore> AssetRegistry<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Store `asset` under `id`, overwriting whatever was there
    pub fn write(&self, id: &AssetId, asset: &Asset) -> Result<Revision, RegistryError> {
        let bytes = encode(id, asset)?;
        let revision = self.store.put(id.as_str(), &bytes)?;
        tracing::debug!(asset = %id, tx = revision.tx_id(), "asset written");
        Ok(revision)
    }

    /// Store `asset` under `id` only if no asset lives there yet
    pub fn create(&self, id: &AssetId, asset: &Asset) -> Result<Revision, RegistryError> {
        let bytes = encode(id, asset)?;
        match self.store.put_if_absent(id.as_str(), &bytes)? {
            Some(revision) => {
                tracing::debug!(asset = %id, tx = revision.tx_id(), "asset created");
                Ok(revision)
            }
            None => Err(RegistryError::AlreadyExists(id.clone())),
        }
    }

    /// Load the current asset stored under `id`
    pub fn read(&self, id: &AssetId) -> Result<Asset, RegistryError> {
        let bytes = self
            .store
            .get(id.as_str())?
            .ok_or_else(|| RegistryError::NotFound(id.clone()))?;

        let mut asset = AssetCodec::decode(&bytes).map_err(|e| RegistryError::CorruptRecord {
            id: id.clone(),
            reason: e.to_string(),
        })?;
        asset.bind_id(id);
        Ok(asset)
    }

    /// Check whether a live asset is stored under `id`
    pub fn exists(&self, id: &AssetId) -> Result<bool, RegistryError> {
        Ok(self.store.get(id.as_str())?.is_some())
    }

    /// Every revision ever committed under `id`, oldest first
    pub fn history_of(&self, id: &AssetId) -> Result<HistoryCursor, RegistryError> {
        Ok(self.store.history_of(id.as_str())?)
    }
}

fn encode(id: &AssetId, asset: &Asset) -> Result<Vec<u8>, RegistryError> {
    AssetCodec::encode(asset).map_err(|e| RegistryError::CorruptRecord {
        id: id.clone(),
        reason: e.to_string(),
    })
}
