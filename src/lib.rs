pub mod builder;
pub mod domain;
pub mod error;
pub mod filter;
#[cfg(feature = "geocoding")]
pub mod geocode;
pub mod picker;
pub mod service;
pub mod store;

// Public, stable-ish API surface for consumers (UI / other crates)

pub use crate::builder::{ItemSlot, RequestBuilder, MIN_PICKUP_NOTICE_DAYS};

pub use crate::domain::{
    Coordinates, Item, RequestDraft, RequestRecord, RequestStatus, WasteCategory,
};

pub use crate::error::{RecyclePickupError, Result};

pub use crate::filter::{filter_records, Pagination, StatusFilter, PAGE_SIZE};

pub use crate::picker::{LocationPicker, MapRegion, PickerPhase, ResolveToken, HONG_KONG};

pub use crate::service::{open_default_store, submit_request, visible_records};

pub use crate::store::{default_store_path, RecordStore, STORE_FILE_NAME};

pub mod prelude {
    pub use crate::builder::{ItemSlot, RequestBuilder};
    pub use crate::domain::{
        Coordinates, Item, RequestRecord, RequestStatus, WasteCategory,
    };
    pub use crate::error::{RecyclePickupError, Result};
    pub use crate::filter::{filter_records, Pagination, StatusFilter};
    pub use crate::picker::{LocationPicker, PickerPhase};
    pub use crate::service::{open_default_store, submit_request, visible_records};
    pub use crate::store::RecordStore;
}
