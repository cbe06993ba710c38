use shipdash_core::ShipmentPage;
use shipdash_types::{FetchStatus, Shipment};

use crate::args::hints::{cmd, fmt};
use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, ShipmentRowViewModel, ShipmentTableViewModel, StatusBadge,
};

pub fn present_shipment_row(shipment: &Shipment) -> ShipmentRowViewModel {
    ShipmentRowViewModel {
        id: shipment.id.clone(),
        house_bill_number: shipment.house_bill_number.clone(),
        client: shipment.client.clone(),
        origin: shipment.origin.clone(),
        destination: shipment.destination.clone(),
        mode: shipment.mode.clone(),
        estimated_departure: shipment.estimated_departure.clone(),
        estimated_arrival: shipment.estimated_arrival.clone(),
        status: shipment.status.clone(),
    }
}

pub fn present_shipment_table(
    page: &ShipmentPage<'_>,
    total_shipments: usize,
    search: Option<String>,
) -> CommandResultViewModel<ShipmentTableViewModel> {
    let view = ShipmentTableViewModel {
        status: FetchStatus::Success,
        rows: page.rows.iter().map(|s| present_shipment_row(s)).collect(),
        total_shipments,
        total_matches: page.total_matches,
        search,
        page: page.page,
        page_count: page.page_count,
        page_size: page.page_size,
        first_row: page.first_row(),
        last_row: page.last_row(),
    };

    add_table_guidance(CommandResultViewModel::new(view))
}

fn add_table_guidance(
    mut result: CommandResultViewModel<ShipmentTableViewModel>,
) -> CommandResultViewModel<ShipmentTableViewModel> {
    let content = &result.content;

    if content.total_shipments == 0 {
        return result.with_badge(StatusBadge::info("No shipments found"));
    }

    if content.total_matches == 0 {
        let label = match &content.search {
            Some(search) => format!("No shipments match \"{}\"", search),
            None => "No shipments found".to_string(),
        };
        return result
            .with_badge(StatusBadge::info(label))
            .with_suggestion(Guidance::new("Clear the search").with_command(cmd::SHIPMENTS));
    }

    if content.rows.is_empty() {
        let label = format!(
            "Page {} is past the end ({} page(s))",
            content.page, content.page_count
        );
        let last_page = fmt::shipments_page(
            content.search.as_deref(),
            content.page_count,
            content.page_size,
        );
        return result
            .with_badge(StatusBadge::warning(label))
            .with_suggestion(Guidance::new("Jump to the last page").with_command(last_page));
    }

    if content.page < content.page_count {
        let next = fmt::shipments_page(
            content.search.as_deref(),
            content.page + 1,
            content.page_size,
        );
        result = result.with_suggestion(Guidance::new("Next page").with_command(next));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::StatusLevel;
    use shipdash_core::{ShipmentQuery, query_shipments};

    fn shipment(house_bill: &str, client: &str) -> Shipment {
        Shipment {
            id: Some(house_bill.to_lowercase()),
            house_bill_number: house_bill.to_string(),
            client: client.to_string(),
            origin: "Antwerp, BE".to_string(),
            destination: "Houston, US".to_string(),
            mode: "Ocean".to_string(),
            estimated_departure: "01/01/24".to_string(),
            estimated_arrival: "01/25/24".to_string(),
            status: "Booked".to_string(),
        }
    }

    fn fleet() -> Vec<Shipment> {
        (1..=5)
            .map(|i| shipment(&format!("HB-{}", i), if i % 2 == 0 { "Globex" } else { "Acme" }))
            .collect()
    }

    #[test]
    fn test_row_copies_every_column() {
        let row = present_shipment_row(&shipment("HB-9", "Initech"));
        assert_eq!(row.id.as_deref(), Some("hb-9"));
        assert_eq!(row.client, "Initech");
        assert_eq!(row.estimated_arrival, "01/25/24");
    }

    #[test]
    fn test_next_page_hint_keeps_search() {
        let shipments = fleet();
        let query = ShipmentQuery::new().search("acme").page_size(2);
        let page = query_shipments(&shipments, &query);

        let result = present_shipment_table(&page, shipments.len(), query.search.clone());
        assert_eq!(result.content.total_matches, 3);
        assert_eq!(result.content.rows.len(), 2);
        let hint = result.suggestions[0].command.as_deref().unwrap();
        assert_eq!(hint, "shipdash shipments --search \"acme\" --page 2 --page-size 2");
    }

    #[test]
    fn test_no_match_badge() {
        let shipments = fleet();
        let query = ShipmentQuery::new().search("umbrella");
        let page = query_shipments(&shipments, &query);

        let result = present_shipment_table(&page, shipments.len(), query.search.clone());
        let badge = result.badge.unwrap();
        assert_eq!(badge.level, StatusLevel::Info);
        assert_eq!(badge.label, "No shipments match \"umbrella\"");
    }

    #[test]
    fn test_page_past_end_warns() {
        let shipments = fleet();
        let page = query_shipments(&shipments, &ShipmentQuery::new().page_size(2).page(7));

        let result = present_shipment_table(&page, shipments.len(), None);
        assert_eq!(result.badge.unwrap().level, StatusLevel::Warning);
        assert_eq!(
            result.suggestions[0].command.as_deref(),
            Some("shipdash shipments --page 3 --page-size 2")
        );
    }

    #[test]
    fn test_empty_list() {
        let page = query_shipments(&[], &ShipmentQuery::new());
        let result = present_shipment_table(&page, 0, None);
        assert!(result.content.rows.is_empty());
        assert_eq!(result.badge.unwrap().label, "No shipments found");
    }
}
