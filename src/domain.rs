//! Domain types for the recycle pickup application.
//!
//! Everything here is a pure data structure shared between the form,
//! the record store and the list view, with no UI concerns attached.
//! Serialized field names are part of the persisted-file format and
//! must not change without migrating stored data.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Fixed set of waste categories a pickup request can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WasteCategory {
    ElectronicComponents,
    PhoneAccessories,
    Appliances,
    PreciousMetalProducts,
    DestructionService,
    BeautyProducts,
}

impl WasteCategory {
    pub const ALL: [WasteCategory; 6] = [
        WasteCategory::ElectronicComponents,
        WasteCategory::PhoneAccessories,
        WasteCategory::Appliances,
        WasteCategory::PreciousMetalProducts,
        WasteCategory::DestructionService,
        WasteCategory::BeautyProducts,
    ];

    /// English label shown in the category selector and record lists.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            WasteCategory::ElectronicComponents => "Electronic Components",
            WasteCategory::PhoneAccessories => "Phone Accessories",
            WasteCategory::Appliances => "Appliances",
            WasteCategory::PreciousMetalProducts => "Precious Metal Products",
            WasteCategory::DestructionService => "Destruction Service",
            WasteCategory::BeautyProducts => "Beauty Products",
        }
    }
}

impl std::fmt::Display for WasteCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Lifecycle state of a request. Only `Pending` is produced here; the
/// other values are set by whoever services the requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl RequestStatus {
    pub const ALL: [RequestStatus; 4] = [
        RequestStatus::Pending,
        RequestStatus::Confirmed,
        RequestStatus::Completed,
        RequestStatus::Cancelled,
    ];

    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::Confirmed => "Confirmed",
            RequestStatus::Completed => "Completed",
            RequestStatus::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A picked point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// One line of a request: what is being recycled and how much of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub description: String,
    pub quantity: u32,
    pub category: WasteCategory,
    /// Filename of an optional photo; the image itself is never stored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_ref: Option<String>,
}

/// One submitted pickup request, exactly as persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestRecord {
    /// Unix-milliseconds of submission; also serves as the identifier.
    pub id: i64,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    pub pickup_date: NaiveDate,
    pub items: Vec<Item>,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
}

impl RequestRecord {
    /// Short reference shown to the user, e.g. "RC-0123".
    #[must_use]
    pub fn reference(&self) -> String {
        let digits = self.id.to_string();
        let tail = &digits[digits.len().saturating_sub(4)..];
        format!("RC-{tail}")
    }

    /// Sum of the quantities across every item line.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }
}

/// A validated request that has not yet been assigned an id by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDraft {
    pub location: String,
    pub coordinates: Option<Coordinates>,
    pub pickup_date: NaiveDate,
    pub items: Vec<Item>,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
}

impl RequestDraft {
    pub(crate) fn into_record(self, id: i64) -> RequestRecord {
        RequestRecord {
            id,
            location: self.location,
            coordinates: self.coordinates,
            pickup_date: self.pickup_date,
            items: self.items,
            status: self.status,
            created_at: self.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_record() -> RequestRecord {
        RequestRecord {
            id: 1_722_931_200_123,
            location: "123 Nathan Road, Kowloon".to_string(),
            coordinates: Some(Coordinates {
                lat: 22.3167,
                lng: 114.1708,
            }),
            pickup_date: NaiveDate::from_ymd_opt(2026, 8, 20).unwrap(),
            items: vec![
                Item {
                    description: "Broken laptops".to_string(),
                    quantity: 3,
                    category: WasteCategory::ElectronicComponents,
                    photo_ref: Some("laptops.jpg".to_string()),
                },
                Item {
                    description: "Phone cases".to_string(),
                    quantity: 10,
                    category: WasteCategory::PhoneAccessories,
                    photo_ref: None,
                },
            ],
            status: RequestStatus::Pending,
            created_at: Utc.with_ymd_and_hms(2026, 8, 6, 9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn categories_serialize_in_kebab_case() {
        assert_eq!(
            serde_json::to_string(&WasteCategory::ElectronicComponents).unwrap(),
            "\"electronic-components\""
        );
        assert_eq!(
            serde_json::to_string(&WasteCategory::PreciousMetalProducts).unwrap(),
            "\"precious-metal-products\""
        );
        let parsed: WasteCategory = serde_json::from_str("\"destruction-service\"").unwrap();
        assert_eq!(parsed, WasteCategory::DestructionService);
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&RequestStatus::Pending).unwrap(),
            "\"pending\""
        );
        let parsed: RequestStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(parsed, RequestStatus::Cancelled);
    }

    #[test]
    fn record_round_trips_field_for_field() {
        let record = sample_record();
        let raw = serde_json::to_string(&record).unwrap();
        let parsed: RequestRecord = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn persisted_keys_are_camel_case() {
        let raw = serde_json::to_string(&sample_record()).unwrap();
        assert!(raw.contains("\"pickupDate\""));
        assert!(raw.contains("\"createdAt\""));
        assert!(raw.contains("\"photoRef\""));
        assert!(!raw.contains("\"pickup_date\""));
    }

    #[test]
    fn absent_photo_ref_is_omitted_and_tolerated() {
        let raw = r#"{"description":"Cardboard","quantity":2,"category":"appliances"}"#;
        let item: Item = serde_json::from_str(raw).unwrap();
        assert_eq!(item.photo_ref, None);
        let back = serde_json::to_string(&item).unwrap();
        assert!(!back.contains("photoRef"));
    }

    #[test]
    fn reference_uses_last_four_digits() {
        let record = sample_record();
        assert_eq!(record.reference(), "RC-0123");
    }

    #[test]
    fn total_quantity_sums_all_items() {
        assert_eq!(sample_record().total_quantity(), 13);
    }
}
