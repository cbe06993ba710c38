use super::common::ViewModeArgs;
use chrono::NaiveDate;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Preview shipments arriving over the coming days")]
    Dashboard {
        #[arg(long, help = "Number of days to preview, today included (default: 7)")]
        days: Option<usize>,

        #[arg(long, help = "Shipments listed per day before collapsing (default: 3)")]
        per_day: Option<usize>,

        #[arg(long, help = "Anchor the window at this date (YYYY-MM-DD) instead of today")]
        today: Option<NaiveDate>,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Browse, search and page through all shipments")]
    Shipments {
        #[arg(long, help = "Case-insensitive text to match against any column")]
        search: Option<String>,

        #[arg(long, default_value = "1", value_parser = clap::value_parser!(u64).range(1..))]
        page: u64,

        #[arg(long, help = "Rows per page, 0 for all (default: 25)")]
        page_size: Option<usize>,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Write the shipment list to a CSV file")]
    Export {
        #[arg(long, short, default_value = "shipments.csv")]
        output: PathBuf,

        #[arg(long, help = "Only export shipments matching this text")]
        search: Option<String>,
    },

    #[command(about = "Create a config file")]
    Init {
        #[arg(long, help = "Overwrite an existing config file")]
        force: bool,
    },
}
