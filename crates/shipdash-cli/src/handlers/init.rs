use super::HandlerContext;
use crate::presentation::presenters;
use crate::presentation::view_models::InitOutcome;
use anyhow::{Context, Result};
use shipdash_runtime::Config;
use std::path::Path;

pub fn handle(
    ctx: &HandlerContext,
    config_path: &Path,
    endpoint: Option<&str>,
    force: bool,
) -> Result<()> {
    let exists = config_path.exists();

    if exists && !force {
        let config = Config::load_from(config_path)
            .with_context(|| format!("Failed to load config: {}", config_path.display()))?;
        return ctx.render(presenters::present_init(
            config_path,
            &config.source.endpoint,
            config.dashboard.window_days,
            config.table.page_size,
            InitOutcome::AlreadyExists,
        ));
    }

    let mut config = Config::default();
    if let Some(endpoint) = endpoint.map(str::trim).filter(|e| !e.is_empty()) {
        config.source.endpoint = endpoint.to_string();
    }

    config
        .save_to(config_path)
        .with_context(|| format!("Failed to write config: {}", config_path.display()))?;
    tracing::info!(path = %config_path.display(), "wrote config");

    let outcome = if exists {
        InitOutcome::Overwritten
    } else {
        InitOutcome::Created
    };

    ctx.render(presenters::present_init(
        config_path,
        &config.source.endpoint,
        config.dashboard.window_days,
        config.table.page_size,
        outcome,
    ))
}
