use chrono::NaiveDate;
use serde::Serialize;
use shipdash_types::FetchStatus;

use super::shipments::ShipmentRowViewModel;

/// Weekly preview: one entry per day of the window, oldest first.
#[derive(Debug, Serialize)]
pub struct DashboardViewModel {
    pub status: FetchStatus,
    pub today: NaiveDate,
    pub window_days: usize,
    pub days: Vec<DayBucketViewModel>,
    /// Shipments in the fetched list, bucketed or not
    pub total_shipments: usize,
    pub arriving_in_window: usize,
    pub outside_window: usize,
    /// Text-mode cap on rows listed per day; JSON always carries every row
    pub per_day: usize,
}

#[derive(Debug, Serialize)]
pub struct DayBucketViewModel {
    pub date: NaiveDate,
    /// `MM/DD/YY`, the same key format the shipments carry
    pub key: String,
    pub shipments: Vec<ShipmentRowViewModel>,
}
