//! The record store: an in-memory list of submitted requests mirrored to
//! one JSON file. The whole collection is rewritten on every append, so
//! a single file is the unit of atomicity and there is exactly one
//! logical writer.

use crate::domain::{RequestDraft, RequestRecord};
use crate::error::{RecyclePickupError, Result};
use std::path::PathBuf;

/// File name used when no explicit location is configured.
pub const STORE_FILE_NAME: &str = "recycle-records.json";

/// Resolve the store location: the `RECYCLE_PICKUP_STORE` environment
/// variable when set, otherwise [`STORE_FILE_NAME`] in the working
/// directory.
#[must_use]
pub fn default_store_path() -> PathBuf {
    match std::env::var("RECYCLE_PICKUP_STORE") {
        Ok(path) if !path.is_empty() => PathBuf::from(path),
        _ => PathBuf::from(STORE_FILE_NAME),
    }
}

#[derive(Debug)]
pub struct RecordStore {
    path: PathBuf,
    records: Vec<RequestRecord>,
}

impl RecordStore {
    /// Open the store at `path`, reading any previously persisted records.
    #[must_use]
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let mut store = Self {
            path: path.into(),
            records: Vec::new(),
        };
        store.reload();
        store
    }

    /// Replace the in-memory list with whatever the file currently holds.
    ///
    /// A missing file yields the empty store. So does a payload that no
    /// longer parses: the corruption is logged and dropped, never
    /// surfaced to the caller.
    pub fn reload(&mut self) {
        self.records = match std::fs::read_to_string(&self.path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(records) => records,
                Err(e) => {
                    tracing::warn!(
                        path = %self.path.display(),
                        error = %e,
                        "discarding unreadable record store"
                    );
                    Vec::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "failed to read record store"
                );
                Vec::new()
            }
        };
    }

    /// Assign an id to `draft`, insert it at the front and rewrite the
    /// file.
    ///
    /// # Errors
    ///
    /// Returns an error when the collection cannot be written back; the
    /// record stays in memory either way.
    pub fn append(&mut self, draft: RequestDraft) -> Result<&RequestRecord> {
        let record = draft.into_record(self.next_id());
        self.records.insert(0, record);
        self.persist()?;
        Ok(&self.records[0])
    }

    /// Every record, most recent first.
    #[must_use]
    pub fn all(&self) -> &[RequestRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Ids are the submission time in Unix milliseconds, nudged past the
    /// newest stored id so two submissions within the same millisecond
    /// stay distinct.
    fn next_id(&self) -> i64 {
        let now = chrono::Utc::now().timestamp_millis();
        match self.records.first() {
            Some(latest) if latest.id >= now => latest.id + 1,
            _ => now,
        }
    }

    fn persist(&self) -> Result {
        let raw = serde_json::to_string(&self.records)
            .map_err(|e| RecyclePickupError::StorePersistFailed(e.to_string()))?;
        std::fs::write(&self.path, raw).map_err(|e| {
            RecyclePickupError::StorePersistFailed(format!("{}: {}", self.path.display(), e))
        })?;
        tracing::debug!(
            path = %self.path.display(),
            records = self.records.len(),
            "record store persisted"
        );
        Ok(())
    }
}
