mod commands;
mod common;
mod enums;
pub mod hints;

pub use commands::*;
pub use common::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "shipdash")]
#[command(
    about = "Preview upcoming shipment arrivals and browse the full shipment list",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Path to config.toml (default: $SHIPDASH_CONFIG or the system config directory)"
    )]
    pub config: Option<String>,

    #[arg(
        long,
        global = true,
        help = "Shipments endpoint: http(s) URL or JSON file path (overrides config)"
    )]
    pub endpoint: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
