use serde::Serialize;
use shipdash_types::FetchStatus;

#[derive(Debug, Clone, Serialize)]
pub struct ShipmentRowViewModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub house_bill_number: String,
    pub client: String,
    pub origin: String,
    pub destination: String,
    pub mode: String,
    pub estimated_departure: String,
    pub estimated_arrival: String,
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct ShipmentTableViewModel {
    pub status: FetchStatus,
    pub rows: Vec<ShipmentRowViewModel>,
    pub total_shipments: usize,
    pub total_matches: usize,
    pub search: Option<String>,
    pub page: usize,
    pub page_count: usize,
    pub page_size: usize,
    pub first_row: usize,
    pub last_row: usize,
}
