use shipdash_types::Shipment;

/// Search and paging applied to the flat shipment table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipmentQuery {
    pub search: Option<String>,
    /// 1-based; 0 is read as 1.
    pub page: usize,
    /// 0 puts every row on a single page.
    pub page_size: usize,
}

impl Default for ShipmentQuery {
    fn default() -> Self {
        Self {
            search: None,
            page: 1,
            page_size: 25,
        }
    }
}

impl ShipmentQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.search = if text.trim().is_empty() {
            None
        } else {
            Some(text)
        };
        self
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipmentPage<'a> {
    pub rows: Vec<&'a Shipment>,
    pub total_matches: usize,
    pub page: usize,
    pub page_count: usize,
    pub page_size: usize,
}

impl ShipmentPage<'_> {
    /// 1-based index of the first row on this page, for "rows X-Y of Z" labels.
    pub fn first_row(&self) -> usize {
        if self.rows.is_empty() {
            0
        } else {
            (self.page - 1) * self.page_size + 1
        }
    }

    pub fn last_row(&self) -> usize {
        if self.rows.is_empty() {
            0
        } else {
            self.first_row() + self.rows.len() - 1
        }
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count
    }
}

/// Filter `shipments` by the query's search text, then cut out the requested page.
///
/// Matching is a case-insensitive substring test against every text column.
/// Input order is preserved.
pub fn query_shipments<'a>(shipments: &'a [Shipment], query: &ShipmentQuery) -> ShipmentPage<'a> {
    let needle = query
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);

    let matches: Vec<&Shipment> = shipments
        .iter()
        .filter(|s| match &needle {
            Some(needle) => s
                .text_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(needle.as_str())),
            None => true,
        })
        .collect();

    let total_matches = matches.len();
    let page = query.page.max(1);

    let (rows, page_count) = if query.page_size == 0 {
        let rows = if page == 1 { matches } else { Vec::new() };
        (rows, usize::from(total_matches > 0))
    } else {
        let page_count = total_matches.div_ceil(query.page_size);
        let rows = matches
            .into_iter()
            .skip((page - 1).saturating_mul(query.page_size))
            .take(query.page_size)
            .collect();
        (rows, page_count)
    };

    ShipmentPage {
        rows,
        total_matches,
        page,
        page_count,
        page_size: query.page_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shipment(house_bill: &str, client: &str, mode: &str) -> Shipment {
        Shipment {
            id: None,
            house_bill_number: house_bill.to_string(),
            client: client.to_string(),
            origin: "Hamburg, DE".to_string(),
            destination: "Newark, US".to_string(),
            mode: mode.to_string(),
            estimated_departure: "01/02/24".to_string(),
            estimated_arrival: "01/20/24".to_string(),
            status: "In Transit".to_string(),
        }
    }

    fn fleet() -> Vec<Shipment> {
        vec![
            shipment("HB-1", "Acme Corp", "Ocean"),
            shipment("HB-2", "Globex", "Air"),
            shipment("HB-3", "Initech", "Truck"),
            shipment("HB-4", "ACME Labs", "Air"),
            shipment("HB-5", "Umbrella", "Ocean"),
        ]
    }

    fn bills(page: &ShipmentPage<'_>) -> Vec<String> {
        page.rows
            .iter()
            .map(|s| s.house_bill_number.clone())
            .collect()
    }

    #[test]
    fn test_default_query_returns_everything() {
        let shipments = fleet();
        let page = query_shipments(&shipments, &ShipmentQuery::new());
        assert_eq!(page.total_matches, 5);
        assert_eq!(page.page_count, 1);
        assert_eq!(bills(&page), vec!["HB-1", "HB-2", "HB-3", "HB-4", "HB-5"]);
    }

    #[test]
    fn test_search_is_case_insensitive_across_columns() {
        let shipments = fleet();
        let page = query_shipments(&shipments, &ShipmentQuery::new().search("acme"));
        assert_eq!(bills(&page), vec!["HB-1", "HB-4"]);

        let page = query_shipments(&shipments, &ShipmentQuery::new().search("AIR"));
        assert_eq!(bills(&page), vec!["HB-2", "HB-4"]);
    }

    #[test]
    fn test_blank_search_is_ignored() {
        let shipments = fleet();
        let query = ShipmentQuery::new().search("   ");
        assert_eq!(query.search, None);
        assert_eq!(query_shipments(&shipments, &query).total_matches, 5);
    }

    #[test]
    fn test_paging() {
        let shipments = fleet();
        let query = ShipmentQuery::new().page_size(2).page(2);
        let page = query_shipments(&shipments, &query);

        assert_eq!(bills(&page), vec!["HB-3", "HB-4"]);
        assert_eq!(page.page_count, 3);
        assert_eq!(page.first_row(), 3);
        assert_eq!(page.last_row(), 4);
        assert!(page.has_next());

        let last = query_shipments(&shipments, &ShipmentQuery::new().page_size(2).page(3));
        assert_eq!(bills(&last), vec!["HB-5"]);
        assert!(!last.has_next());
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let shipments = fleet();
        let page = query_shipments(&shipments, &ShipmentQuery::new().page_size(2).page(9));
        assert!(page.rows.is_empty());
        assert_eq!(page.total_matches, 5);
        assert_eq!(page.first_row(), 0);
    }

    #[test]
    fn test_page_zero_reads_as_first() {
        let shipments = fleet();
        let page = query_shipments(&shipments, &ShipmentQuery::new().page_size(2).page(0));
        assert_eq!(page.page, 1);
        assert_eq!(bills(&page), vec!["HB-1", "HB-2"]);
    }

    #[test]
    fn test_page_size_zero_shows_all() {
        let shipments = fleet();
        let page = query_shipments(&shipments, &ShipmentQuery::new().page_size(0));
        assert_eq!(page.rows.len(), 5);
        assert_eq!(page.page_count, 1);
        assert_eq!(page.first_row(), 1);
        assert_eq!(page.last_row(), 5);
    }

    #[test]
    fn test_empty_list() {
        let page = query_shipments(&[], &ShipmentQuery::new());
        assert!(page.rows.is_empty());
        assert_eq!(page.total_matches, 0);
        assert_eq!(page.page_count, 0);
    }
}
