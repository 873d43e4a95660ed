// Storage module - PERSISTENCE
// Versioned key-value state store: current value plus a per-key revision log

mod cursor;
mod revision;
mod store;

pub use cursor::HistoryCursor;
pub use revision::Revision;
pub use store::{SledStore, StateStore, StorageStats, StoreError};
