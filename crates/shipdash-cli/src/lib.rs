// NOTE: shipdash data flow
//
// One fetch per invocation. The result lands in a FetchSlot (shipdash-core),
// which is the only thing handlers consult before rendering:
//
//   ShipmentFetcher::refresh --> FetchSlot --(Success)--> bucket / query --> presenter --> renderer
//                                          --(Error)----> error view, exit 1
//
// Both views (dashboard, shipments) share the same fetch and slot; neither
// re-implements fetching or date matching.

mod args;
mod commands;
mod handlers;
mod logging;
pub mod presentation;
mod services;

pub use args::{Cli, Commands, LogLevel, OutputFormat};
pub use commands::run;
pub use logging::init_logging;
