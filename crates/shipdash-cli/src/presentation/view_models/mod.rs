pub mod common;
pub mod dashboard;
pub mod result;
pub mod shipments;
pub mod system;

pub use common::{Guidance, OutputFormat, StatusBadge, StatusLevel, ViewMode};
pub use dashboard::{DashboardViewModel, DayBucketViewModel};
pub use result::CommandResultViewModel;
pub use shipments::{ShipmentRowViewModel, ShipmentTableViewModel};
pub use system::{
    ExportResultViewModel, FetchErrorViewModel, GuidanceViewModel, InitOutcome,
    InitResultViewModel,
};

use std::fmt;

/// Bridges a view model to its text layout for a given density.
pub trait CreateView {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a>;
}
