pub mod dashboard;
pub mod shipments;
pub mod system;
