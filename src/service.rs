use crate::builder::RequestBuilder;
use crate::domain::RequestRecord;
use crate::error::Result;
use crate::filter::{filter_records, Pagination, StatusFilter};
use crate::store::{default_store_path, RecordStore};

/// Open the record store at its configured location.
#[must_use]
pub fn open_default_store() -> RecordStore {
    RecordStore::load(default_store_path())
}

/// Validate the form and append the resulting record to the store.
///
/// # Errors
///
/// Returns the first validation error, or a persistence error if the
/// record could not be written. Nothing is stored on failure.
pub fn submit_request(builder: &RequestBuilder, store: &mut RecordStore) -> Result<RequestRecord> {
    let draft = builder.validate_and_build()?;
    let record = store.append(draft)?;
    Ok(record.clone())
}

/// The window of records the list view should currently show.
#[must_use]
pub fn visible_records<'a>(
    store: &'a RecordStore,
    status: StatusFilter,
    search: &str,
    pagination: Pagination,
) -> Vec<&'a RequestRecord> {
    let filtered = filter_records(store.all(), status, search);
    pagination.page(&filtered).to_vec()
}
