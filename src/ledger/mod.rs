// Ledger module - THE BUSINESS LOGIC
// Validates requests and applies create/transfer/history operations

mod error;
mod schema;
mod seed;
mod service;

pub use error::{ErrorKind, LedgerError};
pub use schema::{FieldKind, FieldSpec, FieldValue, FieldValues, FieldViolation, OperationSchema};
pub use seed::{demo_assets, SEED_ASSET_COUNT};
pub use service::LedgerService;
