// Dispatcher - single (operation, arguments) entry point
//
// Every call ends in a Response; failures carry an error kind and message
// instead of escaping as panics.

use crate::dispatch::Operation;
use crate::ledger::{ErrorKind, LedgerError, LedgerService};
use crate::storage::StateStore;
use serde::Serialize;

/// Outcome of an invocation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Status {
    Ok,
    Error,
}

/// Error half of a response
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResponseError {
    pub kind: ErrorKind,
    pub message: String,
}

/// Response returned to the caller of `Dispatcher::invoke`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    status: Status,
    payload: Option<Vec<u8>>,
    error: Option<ResponseError>,
}

impl Response {
    pub fn success(payload: Option<Vec<u8>>) -> Self {
        Self {
            status: Status::Ok,
            payload,
            error: None,
        }
    }

    pub fn failure(err: &LedgerError) -> Self {
        Self {
            status: Status::Error,
            payload: None,
            error: Some(ResponseError {
                kind: err.kind(),
                message: err.to_string(),
            }),
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }

    /// Raw payload bytes of a successful call
    pub fn payload(&self) -> Option<&[u8]> {
        self.payload.as_deref()
    }

    pub fn error(&self) -> Option<&ResponseError> {
        self.error.as_ref()
    }

    /// Error kind of a failed call
    pub fn error_kind(&self) -> Option<ErrorKind> {
        self.error.as_ref().map(|e| e.kind)
    }

    /// Render as a JSON document: status, payload (embedded as JSON) and error
    pub fn to_json(&self) -> serde_json::Value {
        let payload = self.payload.as_deref().map(|bytes| {
            serde_json::from_slice(bytes)
                .unwrap_or_else(|_| serde_json::Value::String(String::from_utf8_lossy(bytes).into_owned()))
        });
        serde_json::json!({
            "status": self.status,
            "payload": payload,
            "error": self.error,
        })
    }
}

/// Routes named operations to a ledger service
pub struct Dispatcher<S> {
    ledger: LedgerService<S>,
}

impl<S: StateStore> Dispatcher<S> {
    pub fn new(ledger: LedgerService<S>) -> Self {
        Self { ledger }
    }

    pub fn ledger(&self) -> &LedgerService<S> {
        &self.ledger
    }

    /// Invoke `operation` with positional `args`
    pub fn invoke<A: AsRef<str>>(&self, operation: &str, args: &[A]) -> Response {
        match self.try_invoke(operation, args) {
            Ok(payload) => Response::success(payload),
            Err(err) => {
                tracing::warn!(operation, kind = %err.kind(), error = %err, "request rejected");
                Response::failure(&err)
            }
        }
    }

    /// Invoke and return the raw result
    pub fn try_invoke<A: AsRef<str>>(
        &self,
        operation: &str,
        args: &[A],
    ) -> Result<Option<Vec<u8>>, LedgerError> {
        let operation: Operation = operation.parse()?;
        tracing::debug!(%operation, args = args.len(), "dispatching");

        match operation {
            Operation::CreateAsset => self.ledger.create_asset(args).map(|_| None),
            Operation::TransferOwnership => self.ledger.transfer_ownership(args).map(|_| None),
            Operation::SeedLedger => self.ledger.seed_ledger(args).map(|_| None),
            Operation::GetAssetHistory => self.ledger.get_asset_history(args).map(Some),
            Operation::QueryAsset => self.ledger.query_asset(args).map(Some),
        }
    }
}
