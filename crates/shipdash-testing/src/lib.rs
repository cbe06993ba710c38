//! Testing infrastructure for shipdash integration tests.
//!
//! - `TestWorld`: isolated config and data directory per test
//! - `fixtures`: shipment lists with arrivals placed relative to a date
//! - `assertions`: checks against the JSON output envelope

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use fixtures::ShipmentFixture;
pub use world::{CliResult, TestWorld};
