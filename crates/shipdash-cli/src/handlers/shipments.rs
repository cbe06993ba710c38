use super::HandlerContext;
use crate::presentation::presenters;
use anyhow::{Context, Result};
use shipdash_core::{ShipmentQuery, query_shipments};

pub async fn handle(
    ctx: &HandlerContext,
    endpoint: &str,
    search: Option<String>,
    page: usize,
    page_size: usize,
) -> Result<()> {
    let slot = ctx.load_shipments(endpoint).await?;
    let shipments = slot.shipments().context("shipment list is not loaded")?;

    let mut query = ShipmentQuery::new().page(page).page_size(page_size);
    if let Some(search) = search {
        query = query.search(search);
    }

    let result = query_shipments(shipments, &query);
    ctx.render(presenters::present_shipment_table(
        &result,
        shipments.len(),
        query.search.clone(),
    ))
}
