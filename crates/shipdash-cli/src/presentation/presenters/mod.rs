pub mod dashboard;
pub mod shipments;
pub mod system;

pub use dashboard::present_dashboard;
pub use shipments::{present_shipment_row, present_shipment_table};
pub use system::{present_export, present_fetch_error, present_guidance, present_init};
