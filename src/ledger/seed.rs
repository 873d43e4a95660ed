// Demonstration assets written by seedLedger

use crate::asset::{Asset, AssetId, OwnerType};

/// Number of demonstration assets
pub const SEED_ASSET_COUNT: usize = 6;

/// The fixed demonstration records, keyed `ASSET0`..`ASSET5`
pub fn demo_assets() -> Vec<(AssetId, Asset)> {
    (0..SEED_ASSET_COUNT)
        .map(|i| {
            let id = AssetId::seeded(i);
            let asset = Asset::from_parts(
                id.clone(),
                "ReddyLabs".to_string(),
                "1/2018".to_string(),
                "paracetamol".to_string(),
                100,
                "01/01/2020".to_string(),
                "ReddyLabs".to_string(),
                OwnerType::manufacturer(),
            );
            (id, asset)
        })
        .collect()
}
