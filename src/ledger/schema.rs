// Argument schemas - one declaration per operation
//
// Positional arguments are checked against the schema in a single pass:
// a wrong count fails immediately, otherwise every field is checked and
// all violations are reported together.

use crate::ledger::LedgerError;
use std::fmt;

/// How a positional argument must look
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Any string, including empty
    Text,
    /// A string with at least one non-whitespace character
    NonEmptyText,
    /// A non-negative integer in decimal
    Quantity,
}

/// One named positional argument
#[derive(Clone, Copy, Debug)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }
}

/// A field that failed its check
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldViolation {
    /// Field name from the schema
    pub field: &'static str,
    /// Zero-based argument position
    pub position: usize,
    pub reason: String,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (argument {}): {}", self.field, self.position, self.reason)
    }
}

/// A checked argument value
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Quantity(u64),
}

/// Argument schema of one operation
#[derive(Clone, Copy, Debug)]
pub struct OperationSchema {
    pub operation: &'static str,
    pub fields: &'static [FieldSpec],
}

impl OperationSchema {
    pub const CREATE_ASSET: OperationSchema = OperationSchema {
        operation: "createAsset",
        fields: &[
            FieldSpec::new("AssetId", FieldKind::NonEmptyText),
            FieldSpec::new("ManufacturerName", FieldKind::Text),
            FieldSpec::new("BatchNo", FieldKind::Text),
            FieldSpec::new("ItemName", FieldKind::Text),
            FieldSpec::new("Quantity", FieldKind::Quantity),
            FieldSpec::new("ExpiryDate", FieldKind::Text),
            FieldSpec::new("Owner", FieldKind::Text),
            FieldSpec::new("OwnerType", FieldKind::Text),
        ],
    };

    pub const TRANSFER_OWNERSHIP: OperationSchema = OperationSchema {
        operation: "transferOwnership",
        fields: &[
            FieldSpec::new("AssetId", FieldKind::NonEmptyText),
            FieldSpec::new("NewOwner", FieldKind::Text),
        ],
    };

    pub const SEED_LEDGER: OperationSchema = OperationSchema {
        operation: "seedLedger",
        fields: &[],
    };

    pub const GET_ASSET_HISTORY: OperationSchema = OperationSchema {
        operation: "getAssetHistory",
        fields: &[FieldSpec::new("AssetId", FieldKind::NonEmptyText)],
    };

    pub const QUERY_ASSET: OperationSchema = OperationSchema {
        operation: "queryAsset",
        fields: &[FieldSpec::new("AssetId", FieldKind::NonEmptyText)],
    };

    /// Number of positional arguments the operation takes
    pub fn arity(&self) -> usize {
        self.fields.len()
    }

    /// Check `args` against the schema
    pub fn validate<A: AsRef<str>>(&self, args: &[A]) -> Result<FieldValues, LedgerError> {
        if args.len() != self.arity() {
            return Err(LedgerError::ArgumentCount {
                operation: self.operation,
                expected: self.arity(),
                actual: args.len(),
            });
        }

        let mut values = Vec::with_capacity(args.len());
        let mut violations = Vec::new();
        for (position, (spec, arg)) in self.fields.iter().zip(args).enumerate() {
            match check(spec.kind, arg.as_ref()) {
                Ok(value) => values.push(value),
                Err(reason) => violations.push(FieldViolation {
                    field: spec.name,
                    position,
                    reason,
                }),
            }
        }

        if !violations.is_empty() {
            return Err(LedgerError::ArgumentFormat {
                operation: self.operation,
                violations,
            });
        }
        Ok(FieldValues {
            values: values.into_iter(),
        })
    }
}

fn check(kind: FieldKind, arg: &str) -> Result<FieldValue, String> {
    match kind {
        FieldKind::Text => Ok(FieldValue::Text(arg.to_string())),
        FieldKind::NonEmptyText => {
            if arg.trim().is_empty() {
                Err("must not be empty".to_string())
            } else {
                Ok(FieldValue::Text(arg.to_string()))
            }
        }
        FieldKind::Quantity => arg
            .parse::<u64>()
            .map(FieldValue::Quantity)
            .map_err(|_| format!("expected a non-negative integer, got {:?}", arg)),
    }
}

/// Validated values, consumed in schema order
pub struct FieldValues {
    values: std::vec::IntoIter<FieldValue>,
}

impl FieldValues {
    /// Take the next value as text
    pub fn text(&mut self) -> String {
        match self.values.next() {
            Some(FieldValue::Text(text)) => text,
            Some(FieldValue::Quantity(q)) => q.to_string(),
            None => String::new(),
        }
    }

    /// Take the next value as a quantity
    pub fn quantity(&mut self) -> u64 {
        match self.values.next() {
            Some(FieldValue::Quantity(q)) => q,
            _ => 0,
        }
    }
}
