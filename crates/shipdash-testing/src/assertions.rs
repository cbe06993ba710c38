//! Assertions against the `{badge, content, suggestions}` JSON envelope.

use anyhow::{Context, Result, bail};
use serde_json::Value;

/// Assert `content.status` equals `expected` (`SUCCESS`, `ERROR`, ...).
pub fn assert_fetch_status(json: &Value, expected: &str) -> Result<()> {
    let status = json["content"]["status"]
        .as_str()
        .context("Expected 'content.status' string in JSON")?;

    if status != expected {
        bail!("Expected status {}, got {}", expected, status);
    }

    Ok(())
}

/// Assert the dashboard's day keys, in order.
pub fn assert_day_keys(json: &Value, expected: &[&str]) -> Result<()> {
    let days = json["content"]["days"]
        .as_array()
        .context("Expected 'content.days' array in JSON")?;

    let keys: Vec<&str> = days.iter().filter_map(|d| d["key"].as_str()).collect();
    if keys != expected {
        bail!("Expected day keys {:?}, got {:?}", expected, keys);
    }

    Ok(())
}

/// House bill numbers listed under the dashboard day with `key`.
pub fn house_bills_on(json: &Value, key: &str) -> Result<Vec<String>> {
    let days = json["content"]["days"]
        .as_array()
        .context("Expected 'content.days' array in JSON")?;

    let day = days
        .iter()
        .find(|d| d["key"] == key)
        .with_context(|| format!("No day with key {}", key))?;

    Ok(day["shipments"]
        .as_array()
        .context("Expected 'shipments' array on day")?
        .iter()
        .filter_map(|s| s["house_bill_number"].as_str().map(String::from))
        .collect())
}

/// House bill numbers on the current shipments table page.
pub fn table_house_bills(json: &Value) -> Result<Vec<String>> {
    Ok(json["content"]["rows"]
        .as_array()
        .context("Expected 'content.rows' array in JSON")?
        .iter()
        .filter_map(|s| s["house_bill_number"].as_str().map(String::from))
        .collect())
}
