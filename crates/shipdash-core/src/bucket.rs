use chrono::{Days, Local, NaiveDate};
use shipdash_types::{Shipment, format_date_key, parse_date_key};
use std::collections::BTreeMap;

/// Number of upcoming days shown on the dashboard (a week, today included).
pub const DEFAULT_PREVIEW_DAYS: usize = 7;

/// Shipments grouped by estimated-arrival day over a fixed window.
///
/// Keys are exactly the window's calendar dates; a day with no arrivals maps
/// to an empty list. Iteration is ascending by calendar date, so `12/31/24`
/// comes before `01/01/25` even though it sorts after it as a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateBucketMap<'a> {
    buckets: BTreeMap<NaiveDate, Vec<&'a Shipment>>,
}

impl<'a> DateBucketMap<'a> {
    fn with_window(today: NaiveDate, window_days: usize) -> Self {
        let buckets = (0..window_days as u64)
            .map_while(|offset| today.checked_add_days(Days::new(offset)))
            .map(|date| (date, Vec::new()))
            .collect();
        Self { buckets }
    }

    /// Number of days in the window.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.buckets.contains_key(&date)
    }

    pub fn get(&self, date: NaiveDate) -> Option<&[&'a Shipment]> {
        self.buckets.get(&date).map(Vec::as_slice)
    }

    /// Look a bucket up by its `MM/DD/YY` key.
    pub fn get_key(&self, key: &str) -> Option<&[&'a Shipment]> {
        parse_date_key(key).and_then(|date| self.get(date))
    }

    /// Window dates in chronological order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.buckets.keys().copied()
    }

    /// `MM/DD/YY` keys in chronological order.
    pub fn keys(&self) -> impl Iterator<Item = String> + '_ {
        self.buckets.keys().map(|date| format_date_key(*date))
    }

    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &[&'a Shipment])> + '_ {
        self.buckets
            .iter()
            .map(|(date, shipments)| (*date, shipments.as_slice()))
    }

    /// Total shipments placed in any bucket.
    pub fn bucketed_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.buckets.keys().next().copied()
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.buckets.keys().next_back().copied()
    }
}

/// Group `shipments` into `window_days` consecutive days starting at `today`.
///
/// Single pass, stable: shipments keep their input order inside a bucket.
/// Arrivals outside the window, or not parseable as `MM/DD/YY`, are left out.
pub fn bucket_by_arrival(
    shipments: &[Shipment],
    window_days: usize,
    today: NaiveDate,
) -> DateBucketMap<'_> {
    let mut map = DateBucketMap::with_window(today, window_days);
    let mut dropped = 0usize;

    for shipment in shipments {
        match shipment
            .arrival_date()
            .and_then(|date| map.buckets.get_mut(&date))
        {
            Some(bucket) => bucket.push(shipment),
            None => dropped += 1,
        }
    }

    tracing::debug!(
        window_days,
        %today,
        bucketed = map.bucketed_count(),
        dropped,
        "bucketed shipments by arrival date"
    );

    map
}

/// [`bucket_by_arrival`] anchored at the local calendar date.
pub fn bucket_upcoming(shipments: &[Shipment], window_days: usize) -> DateBucketMap<'_> {
    bucket_by_arrival(shipments, window_days, Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shipment(house_bill: &str, arrival: &str) -> Shipment {
        Shipment {
            id: None,
            house_bill_number: house_bill.to_string(),
            client: "Acme".to_string(),
            origin: "Rotterdam, NL".to_string(),
            destination: "Chicago, US".to_string(),
            mode: "Ocean".to_string(),
            estimated_departure: "01/01/24".to_string(),
            estimated_arrival: arrival.to_string(),
            status: "In Transit".to_string(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_three_day_window_scenario() {
        let shipments = vec![
            shipment("HB-1", "01/10/24"),
            shipment("HB-2", "01/12/24"),
            shipment("HB-3", "01/20/24"),
        ];

        let map = bucket_by_arrival(&shipments, 3, date(2024, 1, 10));

        let keys: Vec<String> = map.keys().collect();
        assert_eq!(keys, vec!["01/10/24", "01/11/24", "01/12/24"]);
        assert_eq!(map.get_key("01/10/24").unwrap(), &[&shipments[0]]);
        assert!(map.get_key("01/11/24").unwrap().is_empty());
        assert_eq!(map.get_key("01/12/24").unwrap(), &[&shipments[1]]);
        assert_eq!(map.get_key("01/20/24"), None);
        assert_eq!(map.bucketed_count(), 2);
    }

    #[test]
    fn test_window_has_exactly_n_consecutive_days() {
        let today = date(2024, 2, 27);
        for n in 0..10 {
            let map = bucket_by_arrival(&[], n, today);
            assert_eq!(map.len(), n);
            for (offset, day) in map.dates().enumerate() {
                assert_eq!(day, today + Days::new(offset as u64));
            }
        }
    }

    #[test]
    fn test_zero_window_is_empty() {
        let shipments = vec![shipment("HB-1", "01/10/24")];
        let map = bucket_by_arrival(&shipments, 0, date(2024, 1, 10));
        assert!(map.is_empty());
        assert_eq!(map.bucketed_count(), 0);
    }

    #[test]
    fn test_empty_input_keeps_every_bucket() {
        let map = bucket_by_arrival(&[], 7, date(2024, 1, 10));
        assert_eq!(map.len(), 7);
        assert!(map.iter().all(|(_, bucket)| bucket.is_empty()));
    }

    #[test]
    fn test_order_is_chronological_across_year_boundary() {
        // String order would put 01/01/25 before 12/30/24.
        let shipments = vec![
            shipment("HB-NEW", "01/01/25"),
            shipment("HB-OLD", "12/30/24"),
        ];
        let map = bucket_by_arrival(&shipments, 4, date(2024, 12, 29));

        let keys: Vec<String> = map.keys().collect();
        assert_eq!(keys, vec!["12/29/24", "12/30/24", "12/31/24", "01/01/25"]);

        let dates: Vec<NaiveDate> = map.dates().collect();
        assert!(dates.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(map.first_date(), Some(date(2024, 12, 29)));
        assert_eq!(map.last_date(), Some(date(2025, 1, 1)));
    }

    #[test]
    fn test_bucket_preserves_input_order() {
        let shipments = vec![
            shipment("HB-B", "03/01/24"),
            shipment("HB-A", "03/01/24"),
            shipment("HB-C", "03/01/24"),
        ];
        let map = bucket_by_arrival(&shipments, 1, date(2024, 3, 1));
        let bills: Vec<&str> = map
            .get(date(2024, 3, 1))
            .unwrap()
            .iter()
            .map(|s| s.house_bill_number.as_str())
            .collect();
        assert_eq!(bills, vec!["HB-B", "HB-A", "HB-C"]);
    }

    #[test]
    fn test_every_bucketed_shipment_matches_its_key_once() {
        let shipments = vec![
            shipment("HB-1", "05/02/24"),
            shipment("HB-2", "05/01/24"),
            shipment("HB-3", "05/02/24"),
            shipment("HB-4", "04/30/24"),
            shipment("HB-5", "garbage"),
        ];
        let map = bucket_by_arrival(&shipments, 5, date(2024, 5, 1));

        let mut seen = Vec::new();
        for (day, bucket) in map.iter() {
            for s in bucket {
                assert_eq!(s.arrival_date(), Some(day));
                seen.push(s.house_bill_number.clone());
            }
        }
        seen.sort();
        assert_eq!(seen, vec!["HB-1", "HB-2", "HB-3"]);

        // Flat input is untouched by bucketing.
        assert_eq!(shipments.len(), 5);
    }

    #[test]
    fn test_bucketing_is_idempotent() {
        let shipments = vec![
            shipment("HB-1", "07/04/24"),
            shipment("HB-2", "07/06/24"),
        ];
        let today = date(2024, 7, 3);
        let first = bucket_by_arrival(&shipments, 7, today);
        let second = bucket_by_arrival(&shipments, 7, today);
        assert_eq!(first, second);
    }

    #[test]
    fn test_window_stops_at_calendar_end() {
        let map = bucket_by_arrival(&[], 5, NaiveDate::MAX);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_bucket_upcoming_starts_today() {
        let before = Local::now().date_naive();
        let map = bucket_upcoming(&[], DEFAULT_PREVIEW_DAYS);
        let after = Local::now().date_naive();

        assert_eq!(map.len(), DEFAULT_PREVIEW_DAYS);
        // Either side of midnight is acceptable.
        let first = map.first_date().unwrap();
        assert!(first == before || first == after);
    }
}
