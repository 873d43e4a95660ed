use serde::{Deserialize, Serialize};
use std::fmt;

/// Caller-assigned key of an asset in the state store
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetId(String);

impl AssetId {
    /// Create an asset id from any string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Key used by the seed data for the n-th demonstration asset
    pub fn seeded(index: usize) -> Self {
        Self(format!("ASSET{}", index))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AssetId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for AssetId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Role tag of the current holder (Manufacturer, Distributor, Retailer, ...)
///
/// Any string is accepted. The well-known roles are only recognised, never enforced.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerType(String);

impl OwnerType {
    pub const MANUFACTURER: &'static str = "Manufacturer";
    pub const DISTRIBUTOR: &'static str = "Distributor";
    pub const RETAILER: &'static str = "Retailer";

    pub fn new(role: impl Into<String>) -> Self {
        Self(role.into())
    }

    pub fn manufacturer() -> Self {
        Self::new(Self::MANUFACTURER)
    }

    pub fn distributor() -> Self {
        Self::new(Self::DISTRIBUTOR)
    }

    pub fn retailer() -> Self {
        Self::new(Self::RETAILER)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for one of the supply-chain roles the ledger knows by name
    pub fn is_known_role(&self) -> bool {
        matches!(
            self.0.as_str(),
            Self::MANUFACTURER | Self::DISTRIBUTOR | Self::RETAILER
        )
    }
}

impl fmt::Display for OwnerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OwnerType {
    fn from(role: &str) -> Self {
        Self::new(role)
    }
}

/// A tracked batch of goods
///
/// Everything except `owner` and `owner_type` is fixed at creation.
/// Field names on the wire are PascalCase so records stay readable by
/// other clients of the same store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Asset {
    // Records written by older clients carry no id of their own
    #[serde(default)]
    asset_id: AssetId,
    #[serde(alias = "ManufactureName")]
    manufacturer_name: String,
    batch_no: String,
    item_name: String,
    quantity: u64,
    expiry_date: String,
    owner: String,
    owner_type: OwnerType,
}

impl Asset {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(
        asset_id: AssetId,
        manufacturer_name: String,
        batch_no: String,
        item_name: String,
        quantity: u64,
        expiry_date: String,
        owner: String,
        owner_type: OwnerType,
    ) -> Self {
        Self {
            asset_id,
            manufacturer_name,
            batch_no,
            item_name,
            quantity,
            expiry_date,
            owner,
            owner_type,
        }
    }

    pub fn asset_id(&self) -> &AssetId {
        &self.asset_id
    }

    pub fn manufacturer_name(&self) -> &str {
        &self.manufacturer_name
    }

    pub fn batch_no(&self) -> &str {
        &self.batch_no
    }

    pub fn item_name(&self) -> &str {
        &self.item_name
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub fn expiry_date(&self) -> &str {
        &self.expiry_date
    }

    /// Get the current holder
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Get the current holder's role
    pub fn owner_type(&self) -> &OwnerType {
        &self.owner_type
    }

    /// Hand the asset to a new holder
    ///
    /// Only `owner` changes. The role tag is carried over from the prior holder.
    pub fn transfer_to(&mut self, new_owner: impl Into<String>) {
        self.owner = new_owner.into();
    }

    /// Stamp the record with the key it is stored under
    pub(crate) fn bind_id(&mut self, id: &AssetId) {
        if self.asset_id.is_empty() {
            self.asset_id = id.clone();
        }
    }
}
