use thiserror::Error;

pub type Result<T = (), E = RecyclePickupError> = std::result::Result<T, E>;

#[derive(Error, Debug, Clone)]
pub enum RecyclePickupError {
    #[error("Failed to persist records: {0}")]
    StorePersistFailed(String),

    #[error("Please enter a pickup location")]
    LocationMissing,

    #[error("Please choose a pickup date")]
    PickupDateMissing,

    #[error("Pickup date must look like YYYY-MM-DD, got \"{0}\"")]
    PickupDateUnparseable(String),

    #[error("Please select a date at least {0} days from today")]
    PickupDateTooSoon(i64),

    #[error("Please select a waste category for item {slot}")]
    ItemCategoryMissing { slot: usize },

    #[error("Please enter a description for item {slot}")]
    ItemDescriptionMissing { slot: usize },

    #[error("Quantity for item {slot} must be a whole number of at least 1")]
    ItemQuantityInvalid { slot: usize },

    #[error("You need at least one item in your request")]
    LastItemSlot,

    #[error("No item row with id {0}")]
    UnknownItemSlot(u64),
}
