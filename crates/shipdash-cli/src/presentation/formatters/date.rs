use chrono::NaiveDate;

/// "Wed 01/10/24 (today)". `key` is the bucket key as it appears in the data.
pub fn day_heading(date: NaiveDate, key: &str, today: NaiveDate) -> String {
    let weekday = date.format("%a");
    match (date - today).num_days() {
        0 => format!("{} {} (today)", weekday, key),
        1 => format!("{} {} (tomorrow)", weekday, key),
        _ => format!("{} {}", weekday, key),
    }
}
