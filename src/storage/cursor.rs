// HistoryCursor - scoped iteration over one key's revisions

use crate::storage::{Revision, StoreError};

/// Iterator over a key's revisions, oldest first
///
/// The cursor owns the underlying scan. Dropping it releases the scan,
/// whether iteration ran to the end or stopped on an error.
pub struct HistoryCursor {
    key: String,
    inner: Box<dyn Iterator<Item = Result<Revision, StoreError>>>,
    yielded: usize,
}

impl HistoryCursor {
    pub fn new<I>(key: impl Into<String>, inner: I) -> Self
    where
        I: Iterator<Item = Result<Revision, StoreError>> + 'static,
    {
        let key = key.into();
        tracing::trace!(key = %key, "history cursor opened");
        Self {
            key,
            inner: Box::new(inner),
            yielded: 0,
        }
    }

    /// Key whose history this cursor walks
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Number of revisions handed out so far
    pub fn yielded(&self) -> usize {
        self.yielded
    }
}

impl Iterator for HistoryCursor {
    type Item = Result<Revision, StoreError>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next();
        if item.is_some() {
            self.yielded += 1;
        }
        item
    }
}

impl Drop for HistoryCursor {
    fn drop(&mut self) {
        tracing::trace!(key = %self.key, yielded = self.yielded, "history cursor released");
    }
}
