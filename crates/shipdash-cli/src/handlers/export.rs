use super::HandlerContext;
use crate::presentation::presenters;
use crate::services::writer;
use anyhow::{Context, Result};
use shipdash_core::{ShipmentQuery, query_shipments};
use std::path::Path;

pub async fn handle(
    ctx: &HandlerContext,
    endpoint: &str,
    output: &Path,
    search: Option<String>,
) -> Result<()> {
    let slot = ctx.load_shipments(endpoint).await?;
    let shipments = slot.shipments().context("shipment list is not loaded")?;

    // Export ignores paging; every matching row is written.
    let mut query = ShipmentQuery::new().page_size(0);
    if let Some(search) = search {
        query = query.search(search);
    }
    let matches = query_shipments(shipments, &query);

    let written = writer::write_csv(output, &matches.rows)?;
    tracing::info!(path = %output.display(), written, "exported shipments");

    ctx.render(presenters::present_export(
        output,
        written,
        shipments.len(),
        query.search.clone(),
    ))
}
