//! The request form model: a variable-length list of item rows plus the
//! shared location/date fields, validated as a whole at submission time.

use crate::domain::{Coordinates, Item, RequestDraft, RequestStatus, WasteCategory};
use crate::error::{RecyclePickupError, Result};
use chrono::{Duration, NaiveDate, Utc};

/// Days between submission and the earliest selectable pickup date.
pub const MIN_PICKUP_NOTICE_DAYS: i64 = 2;

/// One user-editable item row. Values stay raw strings until validation
/// so the form can hold whatever the user typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemSlot {
    id: u64,
    pub category: Option<WasteCategory>,
    pub description: String,
    pub quantity: String,
    pub photo_ref: String,
}

impl ItemSlot {
    fn new(id: u64) -> Self {
        Self {
            id,
            quantity: "1".to_string(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Debug, Clone)]
pub struct RequestBuilder {
    slots: Vec<ItemSlot>,
    next_slot_id: u64,
    pub location: String,
    pub coordinates: Option<Coordinates>,
    pub pickup_date: String,
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestBuilder {
    /// An empty form with a single blank item row.
    #[must_use]
    pub fn new() -> Self {
        let mut builder = Self {
            slots: Vec::new(),
            next_slot_id: 0,
            location: String::new(),
            coordinates: None,
            pickup_date: String::new(),
        };
        builder.add_item_slot();
        builder
    }

    /// Append a fresh blank row and return its id. Ids count up for the
    /// lifetime of the builder and are never reused after removal.
    pub fn add_item_slot(&mut self) -> u64 {
        self.next_slot_id += 1;
        self.slots.push(ItemSlot::new(self.next_slot_id));
        self.next_slot_id
    }

    /// Remove a row. The last remaining row cannot be removed: a request
    /// must keep at least one item.
    ///
    /// # Errors
    ///
    /// Returns [`RecyclePickupError::LastItemSlot`] for the sole remaining
    /// row and [`RecyclePickupError::UnknownItemSlot`] for an id that is
    /// not present.
    pub fn remove_item_slot(&mut self, id: u64) -> Result {
        if self.slots.len() == 1 {
            return Err(RecyclePickupError::LastItemSlot);
        }
        let index = self
            .slots
            .iter()
            .position(|slot| slot.id == id)
            .ok_or(RecyclePickupError::UnknownItemSlot(id))?;
        self.slots.remove(index);
        Ok(())
    }

    #[must_use]
    pub fn slots(&self) -> &[ItemSlot] {
        &self.slots
    }

    pub fn slot_mut(&mut self, id: u64) -> Option<&mut ItemSlot> {
        self.slots.iter_mut().find(|slot| slot.id == id)
    }

    /// Clear the form back to a single blank row. The slot counter keeps
    /// counting.
    pub fn reset(&mut self) {
        self.slots.clear();
        self.location.clear();
        self.coordinates = None;
        self.pickup_date.clear();
        self.add_item_slot();
    }

    /// Validate every field and assemble a submittable draft. Nothing is
    /// partially accepted: the first invalid field aborts the whole build,
    /// naming the offending row where one is involved.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure encountered.
    pub fn validate_and_build(&self) -> Result<RequestDraft> {
        self.build_for_date(chrono::Local::now().date_naive())
    }

    fn build_for_date(&self, today: NaiveDate) -> Result<RequestDraft> {
        if self.location.trim().is_empty() {
            return Err(RecyclePickupError::LocationMissing);
        }

        let raw_date = self.pickup_date.trim();
        if raw_date.is_empty() {
            return Err(RecyclePickupError::PickupDateMissing);
        }
        let pickup_date = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d")
            .map_err(|_| RecyclePickupError::PickupDateUnparseable(raw_date.to_string()))?;
        if pickup_date < today + Duration::days(MIN_PICKUP_NOTICE_DAYS) {
            return Err(RecyclePickupError::PickupDateTooSoon(MIN_PICKUP_NOTICE_DAYS));
        }

        let mut items = Vec::with_capacity(self.slots.len());
        for (position, slot) in self.slots.iter().enumerate() {
            let row = position + 1;
            let category = slot
                .category
                .ok_or(RecyclePickupError::ItemCategoryMissing { slot: row })?;

            let description = slot.description.trim();
            if description.is_empty() {
                return Err(RecyclePickupError::ItemDescriptionMissing { slot: row });
            }

            let quantity = slot
                .quantity
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|quantity| *quantity >= 1)
                .ok_or(RecyclePickupError::ItemQuantityInvalid { slot: row })?;

            let photo_ref = slot.photo_ref.trim();
            items.push(Item {
                description: description.to_string(),
                quantity,
                category,
                photo_ref: (!photo_ref.is_empty()).then(|| photo_ref.to_string()),
            });
        }

        Ok(RequestDraft {
            location: self.location.trim().to_string(),
            coordinates: self.coordinates,
            pickup_date,
            items,
            status: RequestStatus::Pending,
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
    }

    /// A builder whose single row and shared fields all validate, with a
    /// pickup date `days_ahead` days past [`today`].
    fn valid_builder(days_ahead: i64) -> RequestBuilder {
        let mut builder = RequestBuilder::new();
        builder.location = "123 Nathan Road, Kowloon".to_string();
        builder.pickup_date = (today() + Duration::days(days_ahead))
            .format("%Y-%m-%d")
            .to_string();
        let id = builder.slots()[0].id();
        let slot = builder.slot_mut(id).unwrap();
        slot.category = Some(WasteCategory::Appliances);
        slot.description = "Broken rice cooker".to_string();
        slot.quantity = "1".to_string();
        builder
    }

    #[test]
    fn new_form_starts_with_one_row() {
        let builder = RequestBuilder::new();
        assert_eq!(builder.slots().len(), 1);
    }

    #[test]
    fn removing_the_last_row_is_rejected_and_changes_nothing() {
        let mut builder = RequestBuilder::new();
        let id = builder.slots()[0].id();
        let before = builder.slots().to_vec();

        let result = builder.remove_item_slot(id);
        assert!(matches!(result, Err(RecyclePickupError::LastItemSlot)));
        assert_eq!(before, builder.slots());
    }

    #[test]
    fn slot_ids_are_never_reused() {
        let mut builder = RequestBuilder::new();
        let first = builder.slots()[0].id();
        let second = builder.add_item_slot();
        builder.remove_item_slot(first).unwrap();
        let third = builder.add_item_slot();
        assert!(third > second);
        assert_ne!(third, first);
    }

    #[test]
    fn reset_keeps_the_counter_running() {
        let mut builder = RequestBuilder::new();
        builder.add_item_slot();
        let highest = builder.add_item_slot();
        builder.reset();
        assert_eq!(builder.slots().len(), 1);
        assert!(builder.slots()[0].id() > highest);
    }

    #[test]
    fn pickup_date_boundary_is_two_days_out() {
        let too_soon = valid_builder(1).build_for_date(today());
        assert!(matches!(
            too_soon,
            Err(RecyclePickupError::PickupDateTooSoon(_))
        ));

        assert!(valid_builder(2).build_for_date(today()).is_ok());
        assert!(valid_builder(3).build_for_date(today()).is_ok());
    }

    #[test]
    fn unparseable_date_is_its_own_error() {
        let mut builder = valid_builder(3);
        builder.pickup_date = "20/08/2026".to_string();
        assert!(matches!(
            builder.build_for_date(today()),
            Err(RecyclePickupError::PickupDateUnparseable(_))
        ));
    }

    #[test]
    fn missing_location_aborts_the_build() {
        let mut builder = valid_builder(3);
        builder.location = "   ".to_string();
        assert!(matches!(
            builder.build_for_date(today()),
            Err(RecyclePickupError::LocationMissing)
        ));
    }

    #[test]
    fn invalid_row_is_reported_by_position() {
        let mut builder = valid_builder(3);
        let second = builder.add_item_slot();
        let slot = builder.slot_mut(second).unwrap();
        slot.category = Some(WasteCategory::BeautyProducts);
        slot.quantity = "4".to_string();
        // description left empty

        assert!(matches!(
            builder.build_for_date(today()),
            Err(RecyclePickupError::ItemDescriptionMissing { slot: 2 })
        ));
    }

    #[test]
    fn quantity_must_be_a_positive_integer() {
        for bad in ["0", "-3", "2.5", "many", ""] {
            let mut builder = valid_builder(3);
            let id = builder.slots()[0].id();
            builder.slot_mut(id).unwrap().quantity = bad.to_string();
            assert!(
                matches!(
                    builder.build_for_date(today()),
                    Err(RecyclePickupError::ItemQuantityInvalid { slot: 1 })
                ),
                "quantity {bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn successful_build_is_pending_and_keeps_row_order() {
        let mut builder = valid_builder(2);
        let second = builder.add_item_slot();
        let slot = builder.slot_mut(second).unwrap();
        slot.category = Some(WasteCategory::ElectronicComponents);
        slot.description = "Tangled cables".to_string();
        slot.quantity = "7".to_string();
        slot.photo_ref = "cables.jpg".to_string();

        let draft = builder.build_for_date(today()).unwrap();
        assert_eq!(draft.status, RequestStatus::Pending);
        assert_eq!(draft.items.len(), 2);
        assert_eq!(draft.items[0].description, "Broken rice cooker");
        assert_eq!(draft.items[1].quantity, 7);
        assert_eq!(draft.items[1].photo_ref.as_deref(), Some("cables.jpg"));
    }
}
