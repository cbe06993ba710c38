//! # Presentation Layer
//!
//! Console output for the CLI, split the MVVM way so the JSON output stays a
//! stable API while the text layout is free to change.
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json --> stdout
//!  (Controller)    (Converter)        (Data)          (Driver)   ==(Text)==> [ View ] --> stdout
//! ```
//!
//! ## Rules
//!
//! * **view_models/**: pure `Serialize` data. Raw values (dates, counts), never pre-formatted text.
//! * **presenters/**: turn domain results (`DateBucketMap`, `ShipmentPage`, failures) into
//!   view models and decide which tips to attach.
//! * **views/**: `fmt::Display` layouts. `ViewMode` picks information density; JSON ignores it.
//! * **renderers/**: choose JSON or text and print the badge / content / tips envelope.
//! * **formatters/**: small string helpers used by views.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{
    CommandResultViewModel, CreateView, Guidance, StatusBadge, StatusLevel,
    common::{OutputFormat, ViewMode},
};
