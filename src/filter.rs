//! Filtering and pagination for the records list. Filters always run
//! against the full store, never a previously filtered subset.

use crate::domain::{RequestRecord, RequestStatus};

/// Status facet of the records view. `All` is the wildcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(RequestStatus),
}

impl StatusFilter {
    /// Every selectable facet, in display order.
    pub const OPTIONS: [StatusFilter; 5] = [
        StatusFilter::All,
        StatusFilter::Only(RequestStatus::Pending),
        StatusFilter::Only(RequestStatus::Confirmed),
        StatusFilter::Only(RequestStatus::Completed),
        StatusFilter::Only(RequestStatus::Cancelled),
    ];

    fn matches(self, status: RequestStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => wanted == status,
        }
    }
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusFilter::All => f.write_str("All Statuses"),
            StatusFilter::Only(status) => f.write_str(status.display_name()),
        }
    }
}

/// Project the records matching `status` and `search`, preserving the
/// input order. Search is a case-insensitive substring match against the
/// location or any item's description.
#[must_use]
pub fn filter_records<'a>(
    records: &'a [RequestRecord],
    status: StatusFilter,
    search: &str,
) -> Vec<&'a RequestRecord> {
    let needle = search.trim().to_lowercase();
    records
        .iter()
        .filter(|record| status.matches(record.status))
        .filter(|record| {
            needle.is_empty()
                || record.location.to_lowercase().contains(&needle)
                || record
                    .items
                    .iter()
                    .any(|item| item.description.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Records revealed per "load more" press, and initially.
pub const PAGE_SIZE: usize = 5;

/// Grow-only window over the filtered result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    visible: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { visible: PAGE_SIZE }
    }
}

impl Pagination {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_more(&mut self) {
        self.visible += PAGE_SIZE;
    }

    pub fn reset(&mut self) {
        self.visible = PAGE_SIZE;
    }

    #[must_use]
    pub fn visible(&self) -> usize {
        self.visible
    }

    /// True once the window covers the whole filtered result, at which
    /// point "load more" has nothing left to reveal.
    #[must_use]
    pub fn exhausted(&self, filtered_len: usize) -> bool {
        self.visible >= filtered_len
    }

    /// The slice of `filtered` that should currently be on screen.
    #[must_use]
    pub fn page<'a, 'b>(&self, filtered: &'b [&'a RequestRecord]) -> &'b [&'a RequestRecord] {
        &filtered[..filtered.len().min(self.visible)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Item, WasteCategory};
    use chrono::{NaiveDate, TimeZone, Utc};

    fn record(id: i64, location: &str, status: RequestStatus, items: &[&str]) -> RequestRecord {
        RequestRecord {
            id,
            location: location.to_string(),
            coordinates: None,
            pickup_date: NaiveDate::from_ymd_opt(2026, 8, 20).unwrap(),
            items: items
                .iter()
                .map(|description| Item {
                    description: (*description).to_string(),
                    quantity: 1,
                    category: WasteCategory::Appliances,
                    photo_ref: None,
                })
                .collect(),
            status,
            created_at: Utc.with_ymd_and_hms(2026, 8, 6, 9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn status_filter_keeps_exact_matches_in_order() {
        let records = vec![
            record(4, "Kwun Tong", RequestStatus::Pending, &["Old fans"]),
            record(3, "Mong Kok", RequestStatus::Completed, &["Batteries"]),
            record(2, "Sham Shui Po", RequestStatus::Pending, &["Monitors"]),
            record(1, "Tsim Sha Tsui", RequestStatus::Cancelled, &["Keyboards"]),
        ];

        let filtered = filter_records(
            &records,
            StatusFilter::Only(RequestStatus::Pending),
            "",
        );
        let ids: Vec<i64> = filtered.iter().map(|r| r.id).collect();
        assert_eq!(ids, [4, 2]);
    }

    #[test]
    fn search_matches_location_or_any_item_description() {
        let records = vec![
            record(3, "123 Bottle Street", RequestStatus::Pending, &["Old fans"]),
            record(2, "Mong Kok", RequestStatus::Pending, &["plastic bottles"]),
            record(1, "Kwun Tong", RequestStatus::Pending, &["Cardboard"]),
        ];

        let filtered = filter_records(&records, StatusFilter::All, "bottle");
        let ids: Vec<i64> = filtered.iter().map(|r| r.id).collect();
        assert_eq!(ids, [3, 2]);
    }

    #[test]
    fn search_is_case_insensitive() {
        let records = vec![record(1, "Mong Kok", RequestStatus::Pending, &["Plastic Bottles"])];
        assert_eq!(filter_records(&records, StatusFilter::All, "BOTTLE").len(), 1);
    }

    #[test]
    fn filters_compose_from_the_full_list_every_time() {
        let records = vec![
            record(2, "Bottle depot", RequestStatus::Pending, &["Glass"]),
            record(1, "Mong Kok", RequestStatus::Completed, &["Cans"]),
        ];

        // A narrow search followed by a different one still sees record 1.
        let first = filter_records(&records, StatusFilter::All, "bottle");
        assert_eq!(first.len(), 1);
        let second = filter_records(&records, StatusFilter::All, "cans");
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].id, 1);
    }

    #[test]
    fn pagination_reveals_five_more_per_press() {
        let records: Vec<RequestRecord> = (1..=12)
            .map(|id| record(id, "Mong Kok", RequestStatus::Pending, &["Cans"]))
            .collect();
        let filtered = filter_records(&records, StatusFilter::All, "");

        let mut pagination = Pagination::new();
        assert_eq!(pagination.page(&filtered).len(), 5);
        assert!(!pagination.exhausted(filtered.len()));

        pagination.load_more();
        assert_eq!(pagination.page(&filtered).len(), 10);
        assert!(!pagination.exhausted(filtered.len()));

        pagination.load_more();
        assert_eq!(pagination.page(&filtered).len(), 12);
        assert!(pagination.exhausted(filtered.len()));
    }

    #[test]
    fn reset_shrinks_the_window_back_to_one_page() {
        let mut pagination = Pagination::new();
        pagination.load_more();
        pagination.load_more();
        pagination.reset();
        assert_eq!(pagination.visible(), PAGE_SIZE);
    }
}
