// Asset module - THE TRACKED UNIT
// Data model for a pharmaceutical batch and its stored byte representation

mod builder;
mod codec;
mod model;

pub use builder::{AssetBuilder, AssetError};
pub use codec::{AssetCodec, CodecError};
pub use model::{Asset, AssetId, OwnerType};
