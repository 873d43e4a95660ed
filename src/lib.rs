// drugchain - provenance ledger for pharmaceutical batches
//
// Assets live in a versioned key-value store; every write becomes a
// revision, and an asset's history is that store's per-key revision log.

pub mod asset;
pub mod config;
pub mod dispatch;
pub mod history;
pub mod ledger;
pub mod registry;
pub mod storage;
