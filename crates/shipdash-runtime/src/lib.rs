pub mod config;
pub mod error;
pub mod fetcher;
pub mod source;

pub use config::{Config, DashboardConfig, SourceConfig, TableConfig, resolve_config_path};
pub use error::{Error, Result};
pub use fetcher::ShipmentFetcher;
pub use source::ShipmentSource;
