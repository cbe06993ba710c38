pub mod date;
pub mod error;
pub mod fetch;
pub mod shipment;

pub use date::*;
pub use error::{Error, Result};
pub use fetch::*;
pub use shipment::*;
