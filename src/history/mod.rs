// History module - PROVENANCE TRAIL
// Turns a key's raw revisions into an ordered, serializable list of entries

mod entry;
mod formatter;

pub use entry::{HistoryEntry, Snapshot};
pub use formatter::{HistoryError, HistoryFormatter};
