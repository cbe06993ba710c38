use std::fmt;

use super::shipments::ShipmentLine;
use crate::presentation::formatters::day_heading;
use crate::presentation::view_models::{
    CreateView, DashboardViewModel, DayBucketViewModel, ViewMode,
};

impl CreateView for DashboardViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(DashboardView { data: self, mode })
    }
}

struct DashboardView<'a> {
    data: &'a DashboardViewModel,
    mode: ViewMode,
}

impl<'a> DashboardView<'a> {
    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for day in &self.data.days {
            writeln!(f, "{}\t{}", day.key, day.shipments.len())?;
        }
        Ok(())
    }

    fn render_days(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.days.is_empty() {
            return Ok(());
        }

        writeln!(
            f,
            "Upcoming arrivals: {} day(s) from {}",
            self.data.window_days, self.data.today
        )?;

        for day in &self.data.days {
            writeln!(f)?;
            self.render_day(f, day)?;
        }

        if self.mode == ViewMode::Verbose {
            writeln!(f)?;
            writeln!(
                f,
                "{} of {} shipment(s) arrive in this window, {} outside it",
                self.data.arriving_in_window, self.data.total_shipments, self.data.outside_window
            )?;
        }

        Ok(())
    }

    fn render_day(&self, f: &mut fmt::Formatter, day: &DayBucketViewModel) -> fmt::Result {
        let heading = day_heading(day.date, &day.key, self.data.today);
        writeln!(f, "{} ({})", heading, day.shipments.len())?;

        if day.shipments.is_empty() {
            return writeln!(f, "  No shipments arriving");
        }

        let shown = match self.mode {
            ViewMode::Compact => self.data.per_day.min(day.shipments.len()),
            _ => day.shipments.len(),
        };

        for row in &day.shipments[..shown] {
            writeln!(f, "  {}", ShipmentLine(row))?;
            if self.mode == ViewMode::Verbose {
                writeln!(
                    f,
                    "               {} | departs {} | id {}",
                    row.mode,
                    row.estimated_departure,
                    row.id.as_deref().unwrap_or("-")
                )?;
            }
        }

        let hidden = day.shipments.len() - shown;
        if hidden > 0 {
            writeln!(f, "  ... and {} more", hidden)?;
        }

        Ok(())
    }
}

impl<'a> fmt::Display for DashboardView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            _ => self.render_days(f),
        }
    }
}
