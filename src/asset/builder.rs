use crate::asset::{Asset, AssetId, OwnerType};
use thiserror::Error;

/// Errors that can occur when building an asset
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AssetError {
    #[error("Missing field: {0} is required")]
    MissingField(&'static str),

    #[error("Invalid asset id: asset id cannot be empty")]
    EmptyAssetId,
}

/// Builder for creating asset records
#[derive(Default)]
pub struct AssetBuilder {
    asset_id: Option<AssetId>,
    manufacturer_name: Option<String>,
    batch_no: Option<String>,
    item_name: Option<String>,
    quantity: Option<u64>,
    expiry_date: Option<String>,
    owner: Option<String>,
    owner_type: Option<OwnerType>,
}

impl AssetBuilder {
    /// Create a new AssetBuilder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the asset id (required)
    pub fn asset_id(mut self, id: impl Into<AssetId>) -> Self {
        self.asset_id = Some(id.into());
        self
    }

    /// Set the manufacturer (required)
    pub fn manufacturer_name(mut self, name: impl Into<String>) -> Self {
        self.manufacturer_name = Some(name.into());
        self
    }

    /// Set the batch number (required)
    pub fn batch_no(mut self, batch_no: impl Into<String>) -> Self {
        self.batch_no = Some(batch_no.into());
        self
    }

    /// Set the item name (required)
    pub fn item_name(mut self, name: impl Into<String>) -> Self {
        self.item_name = Some(name.into());
        self
    }

    /// Set the quantity (required)
    pub fn quantity(mut self, quantity: u64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Set the expiry date (required, format is not checked)
    pub fn expiry_date(mut self, date: impl Into<String>) -> Self {
        self.expiry_date = Some(date.into());
        self
    }

    /// Set the initial holder (required)
    pub fn owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Set the initial holder's role (required)
    pub fn owner_type(mut self, owner_type: impl Into<OwnerType>) -> Self {
        self.owner_type = Some(owner_type.into());
        self
    }

    /// Build the asset
    pub fn build(self) -> Result<Asset, AssetError> {
        let asset_id = self.asset_id.ok_or(AssetError::MissingField("AssetId"))?;
        if asset_id.is_empty() {
            return Err(AssetError::EmptyAssetId);
        }

        Ok(Asset::from_parts(
            asset_id,
            self.manufacturer_name
                .ok_or(AssetError::MissingField("ManufacturerName"))?,
            self.batch_no.ok_or(AssetError::MissingField("BatchNo"))?,
            self.item_name.ok_or(AssetError::MissingField("ItemName"))?,
            self.quantity.ok_or(AssetError::MissingField("Quantity"))?,
            self.expiry_date.ok_or(AssetError::MissingField("ExpiryDate"))?,
            self.owner.ok_or(AssetError::MissingField("Owner"))?,
            self.owner_type.ok_or(AssetError::MissingField("OwnerType"))?,
        ))
    }
}
