pub mod date;
pub mod text;

pub use date::day_heading;
pub use text::truncate;
