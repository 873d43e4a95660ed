// HistoryFormatter - renders a revision sequence for callers

use crate::history::HistoryEntry;
use crate::storage::{Revision, StoreError};
use thiserror::Error;

/// Errors from history formatting
#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("History retrieval failed: {0}")]
    Retrieval(#[from] StoreError),

    #[error("Failed to render history: {0}")]
    Render(String),
}

/// Converts revisions into history entries and their JSON payload
///
/// Output order is exactly the input order (oldest first), so the same
/// revisions always render to the same bytes.
pub struct HistoryFormatter;

impl HistoryFormatter {
    /// Drain `revisions` into entries, stopping at the first retrieval error
    pub fn collect<I>(revisions: I) -> Result<Vec<HistoryEntry>, HistoryError>
    where
        I: IntoIterator<Item = Result<Revision, StoreError>>,
    {
        let mut entries = Vec::new();
        for revision in revisions {
            entries.push(HistoryEntry::from_revision(&revision?));
        }
        Ok(entries)
    }

    /// Render entries as a JSON array
    pub fn render(entries: &[HistoryEntry]) -> Result<Vec<u8>, HistoryError> {
        serde_json::to_vec(entries).map_err(|e| HistoryError::Render(e.to_string()))
    }

    /// Collect and render in one pass
    pub fn format<I>(revisions: I) -> Result<Vec<u8>, HistoryError>
    where
        I: IntoIterator<Item = Result<Revision, StoreError>>,
    {
        let entries = Self::collect(revisions)?;
        Self::render(&entries)
    }
}
