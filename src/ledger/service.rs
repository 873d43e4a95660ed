// LedgerService - create, transfer and trace assets
//
// Stateless between calls: every operation validates its arguments,
// then goes through the registry. Nothing is written when validation fails.

use crate::asset::{Asset, AssetBuilder, AssetCodec, AssetId};
use crate::config::CreatePolicy;
use crate::history::{HistoryEntry, HistoryFormatter};
use crate::ledger::{demo_assets, LedgerError, OperationSchema};
use crate::registry::AssetRegistry;
use crate::storage::StateStore;

/// Business logic over an asset registry
pub struct LedgerService<S> {
    registry: AssetRegistry<S>,
    create_policy: CreatePolicy,
}

impl<S: StateStore> LedgerService<S> {
    /// Create a service over `store` with the default (overwrite) create policy
    pub fn new(store: S) -> Self {
        Self {
            registry: AssetRegistry::new(store),
            create_policy: CreatePolicy::default(),
        }
    }

    /// Choose what `createAsset` does with an id that is already taken
    pub fn with_create_policy(mut self, policy: CreatePolicy) -> Self {
        self.create_policy = policy;
        self
    }

    pub fn create_policy(&self) -> CreatePolicy {
        self.create_policy
    }

    pub fn registry(&self) -> &AssetRegistry<S> {
        &self.registry
    }

    /// createAsset(id, manufacturerName, batchNo, itemName, quantity, expiryDate, owner, ownerType)
    pub fn create_asset<A: AsRef<str>>(&self, args: &[A]) -> Result<(), LedgerError> {
        let mut values = OperationSchema::CREATE_ASSET.validate(args)?;
        let id = AssetId::new(values.text());
        let asset = AssetBuilder::new()
            .asset_id(id.clone())
            .manufacturer_name(values.text())
            .batch_no(values.text())
            .item_name(values.text())
            .quantity(values.quantity())
            .expiry_date(values.text())
            .owner(values.text())
            .owner_type(values.text().as_str())
            .build()?;

        self.store_new(&id, &asset)
    }

    /// Write a freshly built asset according to the create policy
    pub fn store_new(&self, id: &AssetId, asset: &Asset) -> Result<(), LedgerError> {
        let revision = match self.create_policy {
            CreatePolicy::Overwrite => self.registry.write(id, asset)?,
            CreatePolicy::RejectExisting => self.registry.create(id, asset)?,
        };
        tracing::info!(
            asset = %id,
            owner = asset.owner(),
            quantity = asset.quantity(),
            tx = revision.tx_id(),
            "asset created"
        );
        Ok(())
    }

    /// transferOwnership(id, newOwner)
    pub fn transfer_ownership<A: AsRef<str>>(&self, args: &[A]) -> Result<(), LedgerError> {
        let mut values = OperationSchema::TRANSFER_OWNERSHIP.validate(args)?;
        let id = AssetId::new(values.text());
        let new_owner = values.text();
        self.transfer(&id, new_owner)
    }

    /// Move `id` to `new_owner`, keeping every other field of the current record
    pub fn transfer(&self, id: &AssetId, new_owner: String) -> Result<(), LedgerError> {
        let mut asset = self.registry.read(id)?;
        let previous = asset.owner().to_string();
        asset.transfer_to(new_owner);

        let revision = self.registry.write(id, &asset)?;
        tracing::info!(
            asset = %id,
            from = %previous,
            to = asset.owner(),
            tx = revision.tx_id(),
            "ownership transferred"
        );
        Ok(())
    }

    /// seedLedger()
    ///
    /// Writes the demonstration assets unconditionally; calling it again
    /// rewrites the same content and adds one revision per key.
    pub fn seed_ledger<A: AsRef<str>>(&self, args: &[A]) -> Result<(), LedgerError> {
        OperationSchema::SEED_LEDGER.validate(args)?;
        for (id, asset) in demo_assets() {
            let revision = self.registry.write(&id, &asset)?;
            tracing::debug!(asset = %id, tx = revision.tx_id(), "seed asset written");
        }
        tracing::info!("ledger seeded");
        Ok(())
    }

    /// getAssetHistory(id) - JSON array of history entries, oldest first
    pub fn get_asset_history<A: AsRef<str>>(&self, args: &[A]) -> Result<Vec<u8>, LedgerError> {
        let mut values = OperationSchema::GET_ASSET_HISTORY.validate(args)?;
        let id = AssetId::new(values.text());
        let entries = self.history(&id)?;
        tracing::debug!(asset = %id, entries = entries.len(), "history retrieved");
        Ok(HistoryFormatter::render(&entries)?)
    }

    /// All revisions of `id` as history entries
    ///
    /// The store cursor is consumed here and released on every return path.
    pub fn history(&self, id: &AssetId) -> Result<Vec<HistoryEntry>, LedgerError> {
        let cursor = self.registry.history_of(id)?;
        Ok(HistoryFormatter::collect(cursor)?)
    }

    /// queryAsset(id) - current record as JSON
    pub fn query_asset<A: AsRef<str>>(&self, args: &[A]) -> Result<Vec<u8>, LedgerError> {
        let mut values = OperationSchema::QUERY_ASSET.validate(args)?;
        let id = AssetId::new(values.text());
        let asset = self.registry.read(&id)?;
        tracing::debug!(asset = %id, "asset queried");
        AssetCodec::encode(&asset).map_err(|e| LedgerError::CorruptRecord {
            id,
            reason: e.to_string(),
        })
    }
}
