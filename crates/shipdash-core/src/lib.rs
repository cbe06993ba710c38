//! Pure logic behind the shipment dashboard.
//!
//! - [`bucket`]: groups shipments into a window of upcoming arrival days
//! - [`slot`]: the single current-result slot gating what may be rendered
//! - [`query`]: search and paging over the flat shipment list
//!
//! Nothing here performs I/O; fetching lives in `shipdash-runtime`.

pub mod bucket;
pub mod query;
pub mod slot;

pub use bucket::{DEFAULT_PREVIEW_DAYS, DateBucketMap, bucket_by_arrival, bucket_upcoming};
pub use query::{ShipmentPage, ShipmentQuery, query_shipments};
pub use slot::{FetchSlot, FetchTicket};
