// Registry module - TYPED ACCESS
// Reads and writes asset records through the versioned state store

mod asset_registry;

pub use asset_registry::{AssetRegistry, RegistryError};
