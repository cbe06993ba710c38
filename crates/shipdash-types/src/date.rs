use chrono::NaiveDate;

/// Wire format of shipment dates and of dashboard bucket keys (`MM/DD/YY`).
pub const DATE_KEY_FORMAT: &str = "%m/%d/%y";

/// Parse an `MM/DD/YY` date key into a calendar date.
///
/// Two-digit years follow the POSIX pivot: `00-68` map to 20xx, `69-99` to 19xx.
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key.trim(), DATE_KEY_FORMAT).ok()
}

/// Format a calendar date as an `MM/DD/YY` key.
pub fn format_date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}
