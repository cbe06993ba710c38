use super::HandlerContext;
use crate::presentation::presenters;
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};

pub async fn handle(
    ctx: &HandlerContext,
    endpoint: &str,
    window_days: usize,
    per_day: usize,
    today: Option<NaiveDate>,
) -> Result<()> {
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let slot = ctx.load_shipments(endpoint).await?;

    let total = slot.shipments().map_or(0, <[_]>::len);
    let buckets = slot
        .upcoming(window_days, today)
        .context("shipment list is not loaded")?;

    tracing::debug!(%today, window_days, total, "rendering dashboard");
    ctx.render(presenters::present_dashboard(&buckets, total, today, per_day))
}
