use crate::asset::{AssetError, AssetId};
use crate::history::HistoryError;
use crate::ledger::{FieldViolation, OperationSchema};
use crate::registry::RegistryError;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Category of a failed operation, reported to callers next to the message
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    ArgumentCountError,
    ArgumentFormatError,
    NotFound,
    CorruptRecord,
    StoreUnavailable,
    UnknownOperation,
    AlreadyExists,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::ArgumentCountError => "ArgumentCountError",
            ErrorKind::ArgumentFormatError => "ArgumentFormatError",
            ErrorKind::NotFound => "NotFound",
            ErrorKind::CorruptRecord => "CorruptRecord",
            ErrorKind::StoreUnavailable => "StoreUnavailable",
            ErrorKind::UnknownOperation => "UnknownOperation",
            ErrorKind::AlreadyExists => "AlreadyExists",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur during ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Incorrect number of arguments for {operation}: expecting {expected}, got {actual}")]
    ArgumentCount {
        operation: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid arguments for {operation}: {}", join_violations(.violations))]
    ArgumentFormat {
        operation: &'static str,
        violations: Vec<FieldViolation>,
    },

    #[error("Asset not found: {0}")]
    NotFound(AssetId),

    #[error("Asset already exists: {0}")]
    AlreadyExists(AssetId),

    #[error("Corrupt record for {id}: {reason}")]
    CorruptRecord { id: AssetId, reason: String },

    #[error("State store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),
}

impl LedgerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LedgerError::ArgumentCount { .. } => ErrorKind::ArgumentCountError,
            LedgerError::ArgumentFormat { .. } => ErrorKind::ArgumentFormatError,
            LedgerError::NotFound(_) => ErrorKind::NotFound,
            LedgerError::AlreadyExists(_) => ErrorKind::AlreadyExists,
            LedgerError::CorruptRecord { .. } => ErrorKind::CorruptRecord,
            LedgerError::StoreUnavailable(_) => ErrorKind::StoreUnavailable,
            LedgerError::UnknownOperation(_) => ErrorKind::UnknownOperation,
        }
    }
}

impl From<RegistryError> for LedgerError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::NotFound(id) => LedgerError::NotFound(id),
            RegistryError::AlreadyExists(id) => LedgerError::AlreadyExists(id),
            RegistryError::CorruptRecord { id, reason } => LedgerError::CorruptRecord { id, reason },
            RegistryError::StoreUnavailable(e) => LedgerError::StoreUnavailable(e.to_string()),
        }
    }
}

impl From<AssetError> for LedgerError {
    fn from(err: AssetError) -> Self {
        let field = match &err {
            AssetError::MissingField(field) => *field,
            AssetError::EmptyAssetId => "AssetId",
        };
        let schema = OperationSchema::CREATE_ASSET;
        LedgerError::ArgumentFormat {
            operation: schema.operation,
            violations: vec![FieldViolation {
                field,
                position: schema.fields.iter().position(|f| f.name == field).unwrap_or(0),
                reason: err.to_string(),
            }],
        }
    }
}

impl From<HistoryError> for LedgerError {
    fn from(err: HistoryError) -> Self {
        match err {
            HistoryError::Retrieval(e) => LedgerError::StoreUnavailable(e.to_string()),
            HistoryError::Render(reason) => LedgerError::StoreUnavailable(reason),
        }
    }
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
