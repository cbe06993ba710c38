use crate::args::OutputFormat;
use crate::presentation::presenters;
use crate::presentation::view_models::{CommandResultViewModel, CreateView};
use crate::presentation::{ConsoleRenderer, Renderer, ViewMode};
use anyhow::{Result, bail};
use is_terminal::IsTerminal;
use serde::Serialize;
use shipdash_core::FetchSlot;
use shipdash_runtime::ShipmentFetcher;
use shipdash_types::{FetchFailure, FetchResult};

/// Context for handler execution with consistent presentation utilities
pub struct HandlerContext {
    pub format: OutputFormat,
    pub view_mode: ViewMode,
}

impl HandlerContext {
    pub fn new(format: OutputFormat, view_mode: ViewMode) -> Self {
        Self { format, view_mode }
    }

    /// Render a view model using the configured format and view mode
    pub fn render<T>(&self, view_model: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let renderer = ConsoleRenderer::new(self.format.into(), self.view_mode);
        renderer.render(view_model)
    }

    /// Fetch the shipment list into a fresh slot.
    ///
    /// A failed fetch renders the error view and returns `Err`, so callers
    /// only ever see a slot in the `Success` state.
    pub async fn load_shipments(&self, endpoint: &str) -> Result<FetchSlot> {
        let fetcher = match ShipmentFetcher::from_endpoint(endpoint) {
            Ok(fetcher) => fetcher,
            Err(err) => {
                tracing::warn!(endpoint, error = %err, "unusable shipments endpoint");
                let failure = FetchFailure::new(err.to_string());
                self.render(presenters::present_fetch_error(endpoint, &failure))?;
                bail!("Invalid shipments endpoint {}: {}", endpoint, err);
            }
        };

        if self.format == OutputFormat::Plain && std::io::stderr().is_terminal() {
            eprintln!("Loading shipments from {}...", fetcher.source());
        }

        let mut slot = FetchSlot::new();
        fetcher.refresh(&mut slot).await;

        if let FetchResult::Error { error } = slot.current() {
            let message = error.message.clone();
            self.render(presenters::present_fetch_error(endpoint, error))?;
            bail!("Failed to load shipments from {}: {}", endpoint, message);
        }

        Ok(slot)
    }
}
