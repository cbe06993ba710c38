use serde::Serialize;
use shipdash_types::FetchStatus;

#[derive(Debug, Serialize)]
pub struct FetchErrorViewModel {
    pub status: FetchStatus,
    pub source: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ExportResultViewModel {
    pub output_path: String,
    pub exported_count: usize,
    pub total_shipments: usize,
    pub search: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InitOutcome {
    Created,
    Overwritten,
    AlreadyExists,
}

#[derive(Debug, Serialize)]
pub struct InitResultViewModel {
    pub config_path: String,
    pub endpoint: String,
    pub window_days: usize,
    pub page_size: usize,
    pub outcome: InitOutcome,
}

#[derive(Debug, Serialize)]
pub struct GuidanceViewModel {
    pub config_path: String,
    pub config_exists: bool,
}
