use chrono::NaiveDate;
use shipdash_core::DateBucketMap;
use shipdash_types::{FetchStatus, format_date_key};

use super::shipments::present_shipment_row;
use crate::args::hints::cmd;
use crate::presentation::view_models::{
    CommandResultViewModel, DashboardViewModel, DayBucketViewModel, Guidance, StatusBadge,
};

pub fn present_dashboard(
    buckets: &DateBucketMap<'_>,
    total_shipments: usize,
    today: NaiveDate,
    per_day: usize,
) -> CommandResultViewModel<DashboardViewModel> {
    let days: Vec<DayBucketViewModel> = buckets
        .iter()
        .map(|(date, shipments)| DayBucketViewModel {
            date,
            key: format_date_key(date),
            shipments: shipments.iter().map(|s| present_shipment_row(s)).collect(),
        })
        .collect();

    let arriving_in_window = buckets.bucketed_count();

    let view = DashboardViewModel {
        status: FetchStatus::Success,
        today,
        window_days: buckets.len(),
        days,
        total_shipments,
        arriving_in_window,
        outside_window: total_shipments - arriving_in_window,
        per_day,
    };

    add_dashboard_guidance(CommandResultViewModel::new(view))
}

fn add_dashboard_guidance(
    mut result: CommandResultViewModel<DashboardViewModel>,
) -> CommandResultViewModel<DashboardViewModel> {
    let content = &result.content;

    if content.window_days == 0 {
        return result.with_badge(StatusBadge::warning("Preview window is empty (0 days)"));
    }

    if content.total_shipments == 0 {
        result = result
            .with_badge(StatusBadge::info("No shipments found"))
            .with_suggestion(
                Guidance::new("Point shipdash at a different source").with_command(cmd::INIT_FORCE),
            );
    } else if content.arriving_in_window == 0 {
        let label = format!(
            "No shipments arriving in the next {} day(s)",
            content.window_days
        );
        result = result
            .with_badge(StatusBadge::info(label))
            .with_suggestion(
                Guidance::new("Widen the preview window").with_command(cmd::DASHBOARD_TWO_WEEKS),
            )
            .with_suggestion(
                Guidance::new("Browse every shipment").with_command(cmd::SHIPMENTS),
            );
    } else if content.outside_window > 0 {
        let message = format!(
            "{} shipment(s) arrive outside this window; see them all",
            content.outside_window
        );
        result = result.with_suggestion(
            Guidance::new(message).with_command(cmd::SHIPMENTS),
        );
    }

    result
}
