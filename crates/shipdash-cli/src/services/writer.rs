use anyhow::{Context, Result};
use shipdash_types::Shipment;
use std::path::Path;

const HEADERS: [&str; 8] = [
    "House Bill",
    "Shipper",
    "Origin",
    "Destination",
    "Mode",
    "Estimated Departure",
    "Estimated Arrival",
    "Status",
];

/// Write `shipments` as CSV with a header row. Returns the number of data rows.
pub fn write_csv(path: &Path, shipments: &[&Shipment]) -> Result<usize> {
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create file: {}", path.display()))?;

    wtr.write_record(HEADERS)?;

    for shipment in shipments {
        wtr.write_record([
            shipment.house_bill_number.as_str(),
            shipment.client.as_str(),
            shipment.origin.as_str(),
            shipment.destination.as_str(),
            shipment.mode.as_str(),
            shipment.estimated_departure.as_str(),
            shipment.estimated_arrival.as_str(),
            shipment.status.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(shipments.len())
}
