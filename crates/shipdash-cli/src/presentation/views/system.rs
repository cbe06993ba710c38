use std::fmt;

use crate::presentation::view_models::{
    CreateView, ExportResultViewModel, FetchErrorViewModel, GuidanceViewModel, InitOutcome,
    InitResultViewModel, ViewMode,
};

// --------------------------------------------------------
// Fetch Error View
// --------------------------------------------------------

impl CreateView for FetchErrorViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(FetchErrorView { data: self })
    }
}

struct FetchErrorView<'a> {
    data: &'a FetchErrorViewModel,
}

impl fmt::Display for FetchErrorView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Source: {}", self.data.source)?;
        writeln!(f, "Reason: {}", self.data.message)
    }
}

// --------------------------------------------------------
// Export View
// --------------------------------------------------------

impl CreateView for ExportResultViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ExportView { data: self })
    }
}

struct ExportView<'a> {
    data: &'a ExportResultViewModel,
}

impl fmt::Display for ExportView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Wrote {} of {} shipment(s) to {}",
            self.data.exported_count, self.data.total_shipments, self.data.output_path
        )?;
        if let Some(search) = &self.data.search {
            write!(f, " (matching \"{}\")", search)?;
        }
        writeln!(f)
    }
}

// --------------------------------------------------------
// Init View
// --------------------------------------------------------

impl CreateView for InitResultViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(InitView { data: self })
    }
}

struct InitView<'a> {
    data: &'a InitResultViewModel,
}

impl fmt::Display for InitView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Config:   {}", self.data.config_path)?;
        if self.data.outcome == InitOutcome::AlreadyExists {
            return writeln!(f, "Left unchanged.");
        }
        writeln!(f, "Endpoint: {}", self.data.endpoint)?;
        writeln!(f, "Window:   {} day(s)", self.data.window_days)?;
        writeln!(f, "Page:     {} row(s)", self.data.page_size)
    }
}

// --------------------------------------------------------
// Guidance View
// --------------------------------------------------------

impl CreateView for GuidanceViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(GuidanceView { data: self })
    }
}

struct GuidanceView<'a> {
    data: &'a GuidanceViewModel,
}

impl fmt::Display for GuidanceView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "shipdash - upcoming shipment arrivals at a glance")?;
        writeln!(f)?;
        if self.data.config_exists {
            writeln!(f, "Using config at {}", self.data.config_path)?;
        } else {
            writeln!(f, "No config found at {}", self.data.config_path)?;
        }
        writeln!(f)?;
        writeln!(f, "For more commands:")?;
        writeln!(f, "  shipdash --help")
    }
}
