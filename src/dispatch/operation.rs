use crate::ledger::LedgerError;
use std::fmt;
use std::str::FromStr;

/// Operations callers can invoke by name
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    CreateAsset,
    TransferOwnership,
    SeedLedger,
    GetAssetHistory,
    QueryAsset,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::CreateAsset,
        Operation::TransferOwnership,
        Operation::SeedLedger,
        Operation::GetAssetHistory,
        Operation::QueryAsset,
    ];

    /// Canonical name on the dispatch surface
    pub fn name(&self) -> &'static str {
        match self {
            Operation::CreateAsset => "createAsset",
            Operation::TransferOwnership => "transferOwnership",
            Operation::SeedLedger => "seedLedger",
            Operation::GetAssetHistory => "getAssetHistory",
            Operation::QueryAsset => "queryAsset",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = LedgerError;

    /// Accepts the canonical names plus the legacy chaincode names
    /// (`initLedger`, `changeAssetOwner`, `getItemHistory`)
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "createAsset" => Ok(Operation::CreateAsset),
            "transferOwnership" | "changeAssetOwner" => Ok(Operation::TransferOwnership),
            "seedLedger" | "initLedger" => Ok(Operation::SeedLedger),
            "getAssetHistory" | "getItemHistory" => Ok(Operation::GetAssetHistory),
            "queryAsset" => Ok(Operation::QueryAsset),
            other => Err(LedgerError::UnknownOperation(other.to_string())),
        }
    }
}
