pub mod cmd {
    // View commands
    pub const DASHBOARD: &str = "shipdash dashboard";
    pub const DASHBOARD_TWO_WEEKS: &str = "shipdash dashboard --days 14";
    pub const SHIPMENTS: &str = "shipdash shipments";

    // Setup commands
    pub const INIT: &str = "shipdash init --endpoint <URL|PATH>";
    pub const INIT_FORCE: &str = "shipdash init --endpoint <URL|PATH> --force";
    pub const EXPORT: &str = "shipdash export --output shipments.csv";
}

pub mod fmt {
    /// Page size is always spelled out so the page number lands where it did here.
    pub fn shipments_page(search: Option<&str>, page: usize, page_size: usize) -> String {
        match search {
            Some(search) => format!(
                "shipdash shipments --search {:?} --page {} --page-size {}",
                search, page, page_size
            ),
            None => format!(
                "shipdash shipments --page {} --page-size {}",
                page, page_size
            ),
        }
    }

    pub fn with_endpoint(endpoint: &str) -> String {
        format!("shipdash --endpoint {} dashboard", endpoint)
    }
}
