use super::args::{Cli, Commands};
use super::handlers::{self, HandlerContext};
use crate::presentation::ViewMode;
use anyhow::{Context, Result};
use shipdash_runtime::{Config, resolve_config_path};
use std::path::Path;

pub async fn run(cli: Cli) -> Result<()> {
    let config_path = resolve_config_path(cli.config.as_deref())?;

    let Some(command) = cli.command else {
        let ctx = HandlerContext::new(cli.format, ViewMode::default());
        return handlers::guidance::handle(&ctx, &config_path);
    };

    match command {
        Commands::Init { force } => {
            let ctx = HandlerContext::new(cli.format, ViewMode::default());
            handlers::init::handle(&ctx, &config_path, cli.endpoint.as_deref(), force)
        }

        Commands::Dashboard {
            days,
            per_day,
            today,
            view_mode,
        } => {
            let (config, endpoint) = load_config(&config_path, cli.endpoint.as_deref())?;
            let ctx = HandlerContext::new(cli.format, view_mode.resolve_or(ViewMode::Compact));
            handlers::dashboard::handle(
                &ctx,
                &endpoint,
                days.unwrap_or(config.dashboard.window_days),
                per_day.unwrap_or(config.dashboard.per_day),
                today,
            )
            .await
        }

        Commands::Shipments {
            search,
            page,
            page_size,
            view_mode,
        } => {
            let (config, endpoint) = load_config(&config_path, cli.endpoint.as_deref())?;
            let ctx = HandlerContext::new(cli.format, view_mode.resolve_or(ViewMode::Standard));
            handlers::shipments::handle(
                &ctx,
                &endpoint,
                search,
                page as usize,
                page_size.unwrap_or(config.table.page_size),
            )
            .await
        }

        Commands::Export { output, search } => {
            let (_, endpoint) = load_config(&config_path, cli.endpoint.as_deref())?;
            let ctx = HandlerContext::new(cli.format, ViewMode::default());
            handlers::export::handle(&ctx, &endpoint, &output, search).await
        }
    }
}

fn load_config(config_path: &Path, explicit_endpoint: Option<&str>) -> Result<(Config, String)> {
    let config = Config::load_from(config_path)
        .with_context(|| format!("Failed to load config: {}", config_path.display()))?;
    let endpoint = config.resolve_endpoint(explicit_endpoint);
    tracing::debug!(config = %config_path.display(), %endpoint, "resolved shipment source");
    Ok((config, endpoint))
}
