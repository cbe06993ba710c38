//! Shipment list generation.

use chrono::{Days, NaiveDate};
use serde_json::{Value, json};
use shipdash_types::format_date_key;

/// Builds a JSON shipment list in the wire format the CLI fetches.
///
/// ```
/// use chrono::NaiveDate;
/// use shipdash_testing::ShipmentFixture;
///
/// let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
/// let json = ShipmentFixture::new(today)
///     .arriving_in("HB-1", "Acme Corp", 0)
///     .arriving_in("HB-2", "Globex", 2)
///     .to_json();
/// assert!(json.contains("01/12/24"));
/// ```
pub struct ShipmentFixture {
    today: NaiveDate,
    shipments: Vec<Value>,
}

impl ShipmentFixture {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            shipments: Vec::new(),
        }
    }

    /// Add an ocean shipment arriving `days` after the anchor date.
    pub fn arriving_in(self, house_bill: &str, client: &str, days: u64) -> Self {
        let arrival = self.today + Days::new(days);
        self.arriving_on(house_bill, client, &format_date_key(arrival))
    }

    /// Add a shipment with a literal `estimatedArrival` value (may be malformed).
    pub fn arriving_on(mut self, house_bill: &str, client: &str, arrival: &str) -> Self {
        let id = self.shipments.len() + 1;
        self.shipments.push(json!({
            "id": id,
            "houseBillNumber": house_bill,
            "client": client,
            "origin": "Shanghai, CN",
            "destination": "Los Angeles, US",
            "mode": if id % 2 == 0 { "Air" } else { "Ocean" },
            "estimatedDeparture": format_date_key(self.today),
            "estimatedArrival": arrival,
            "status": "In Transit",
        }));
        self
    }

    pub fn len(&self) -> usize {
        self.shipments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shipments.is_empty()
    }

    pub fn to_json(&self) -> String {
        Value::Array(self.shipments.clone()).to_string()
    }
}
