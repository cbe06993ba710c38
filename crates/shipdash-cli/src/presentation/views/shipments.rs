use std::fmt;

use crate::presentation::formatters::text::{column_width, truncate};
use crate::presentation::view_models::{
    CreateView, ShipmentRowViewModel, ShipmentTableViewModel, ViewMode,
};

const MAX_COLUMN_WIDTH: usize = 24;

impl CreateView for ShipmentTableViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ShipmentTableView { data: self, mode })
    }
}

struct ShipmentTableView<'a> {
    data: &'a ShipmentTableViewModel,
    mode: ViewMode,
}

impl<'a> ShipmentTableView<'a> {
    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.data.rows {
            writeln!(f, "{}", row.house_bill_number)?;
        }
        Ok(())
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.data.rows {
            writeln!(f, "{}", ShipmentLine(row))?;
        }
        self.render_footer(f)
    }

    fn render_table(&self, f: &mut fmt::Formatter, verbose: bool) -> fmt::Result {
        let rows = &self.data.rows;
        if rows.is_empty() {
            return self.render_footer(f);
        }

        let mut columns: Vec<Column<'_>> = Vec::new();
        if verbose {
            columns.push(Column::new("ID", rows, |r| r.id.as_deref().unwrap_or("-")));
        }
        columns.push(Column::new("HOUSE BILL", rows, |r| r.house_bill_number.as_str()));
        columns.push(Column::new("SHIPPER", rows, |r| r.client.as_str()));
        columns.push(Column::new("ORIGIN", rows, |r| r.origin.as_str()));
        columns.push(Column::new("DESTINATION", rows, |r| r.destination.as_str()));
        columns.push(Column::new("MODE", rows, |r| r.mode.as_str()));
        columns.push(Column::new("ETD", rows, |r| r.estimated_departure.as_str()));
        columns.push(Column::new("ETA", rows, |r| r.estimated_arrival.as_str()));
        columns.push(Column::new("STATUS", rows, |r| r.status.as_str()));

        let widths: Vec<usize> = columns
            .iter()
            .map(|c| column_width(c.header, c.values.iter().copied(), MAX_COLUMN_WIDTH))
            .collect();

        let header: Vec<String> = columns
            .iter()
            .zip(&widths)
            .map(|(c, width)| format!("{:<width$}", c.header, width = *width))
            .collect();
        writeln!(f, "{}", header.join("  ").trim_end())?;
        writeln!(f, "{}", "-".repeat(widths.iter().sum::<usize>() + 2 * (widths.len() - 1)))?;

        for i in 0..rows.len() {
            let cells: Vec<String> = columns
                .iter()
                .zip(&widths)
                .map(|(c, width)| {
                    format!("{:<width$}", truncate(c.values[i], *width), width = *width)
                })
                .collect();
            writeln!(f, "{}", cells.join("  ").trim_end())?;
        }

        writeln!(f)?;
        self.render_footer(f)
    }

    fn render_footer(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let data = self.data;
        if data.rows.is_empty() {
            return Ok(());
        }

        write!(
            f,
            "Rows {}-{} of {} (page {}/{})",
            data.first_row, data.last_row, data.total_matches, data.page, data.page_count
        )?;
        if let Some(search) = &data.search {
            write!(
                f,
                ", matching \"{}\" out of {} shipment(s)",
                search, data.total_shipments
            )?;
        }
        writeln!(f)
    }
}

impl<'a> fmt::Display for ShipmentTableView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Standard => self.render_table(f, false),
            ViewMode::Verbose => self.render_table(f, true),
        }
    }
}

struct Column<'a> {
    header: &'static str,
    values: Vec<&'a str>,
}

impl<'a> Column<'a> {
    fn new(
        header: &'static str,
        rows: &'a [ShipmentRowViewModel],
        cell: impl Fn(&'a ShipmentRowViewModel) -> &'a str,
    ) -> Self {
        Self {
            header,
            values: rows.iter().map(cell).collect(),
        }
    }
}

/// One shipment on a single line: house bill, shipper, lane, arrival and status.
pub(crate) struct ShipmentLine<'a>(pub &'a ShipmentRowViewModel);

impl fmt::Display for ShipmentLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let row = self.0;
        write!(
            f,
            "{:<12} {:<20} {} -> {}  ETA {}  [{}]",
            row.house_bill_number,
            truncate(&row.client, 20),
            row.origin,
            row.destination,
            row.estimated_arrival,
            row.status
        )
    }
}
