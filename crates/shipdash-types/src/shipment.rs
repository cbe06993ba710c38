use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::date::parse_date_key;
use crate::error::Result;

/// A single freight movement as delivered by the shipments endpoint.
///
/// Dates stay in their wire form (`MM/DD/YY`); use [`Shipment::arrival_date`]
/// for calendar comparisons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    #[serde(
        default,
        deserialize_with = "deserialize_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub house_bill_number: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub client: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub origin: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub destination: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub mode: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub estimated_departure: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub estimated_arrival: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub status: String,
}

impl Shipment {
    /// Estimated arrival as a calendar date, `None` when the wire value is not `MM/DD/YY`.
    pub fn arrival_date(&self) -> Option<NaiveDate> {
        parse_date_key(&self.estimated_arrival)
    }

    pub fn departure_date(&self) -> Option<NaiveDate> {
        parse_date_key(&self.estimated_departure)
    }

    /// Every user-visible text column, in table order.
    pub fn text_fields(&self) -> [&str; 8] {
        [
            &self.house_bill_number,
            &self.client,
            &self.origin,
            &self.destination,
            &self.mode,
            &self.estimated_departure,
            &self.estimated_arrival,
            &self.status,
        ]
    }
}

/// Decode a JSON array of shipments.
pub fn parse_shipments(json: &[u8]) -> Result<Vec<Shipment>> {
    Ok(serde_json::from_slice(json)?)
}

// Missing and null text both read as empty, so one sparse record never
// sinks the whole list.
fn deserialize_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// Grid rows are keyed by `id`, which some exports emit as a number.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

fn deserialize_id<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawId>::deserialize(deserializer)?;
    Ok(raw.map(|id| match id {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    }))
}
